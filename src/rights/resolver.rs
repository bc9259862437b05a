use crate::errors::ResolverError;
use crate::rights::limits::RightsLimits;
use crate::rights::types::{
    BakingRight, BakingRightsArgs, Delegate, EndorsingRight, EndorsingRightsArgs,
};
use crate::tezos::client::{BlockScope, ChainDataClient, Lookup};
use std::sync::Arc;
use tracing::{debug, warn};

/// Resolves the rights collections of a [`Delegate`].
///
/// Arguments are checked against [`RightsLimits`] before anything is sent to
/// the chain data client. A "not found" answer from the client becomes `None`;
/// every other client failure is returned as is.
#[derive(Clone)]
pub struct RightsResolver {
    client: Arc<dyn ChainDataClient>,
    limits: RightsLimits,
}

impl RightsResolver {
    pub fn new(client: Arc<dyn ChainDataClient>, limits: RightsLimits) -> Self {
        Self { client, limits }
    }

    pub async fn baking_rights(
        &self,
        delegate: &Delegate,
        args: BakingRightsArgs,
    ) -> Result<Option<Vec<BakingRight>>, ResolverError> {
        let params = self
            .limits
            .validate_baking(&delegate.address, args)
            .inspect_err(|e| debug!(delegate = %delegate.address, error = %e, "bakingRights rejected"))?;

        let scope = BlockScope::new(&delegate.block_hash);
        let rights = self
            .client
            .baking_rights(&params, &scope)
            .await
            .inspect_err(|e| warn!(delegate = %delegate.address, block = %scope.block, error = %e, "bakingRights lookup failed"))?;

        Ok(handle_not_found(rights, "bakingRights", delegate))
    }

    pub async fn endorsing_rights(
        &self,
        delegate: &Delegate,
        args: EndorsingRightsArgs,
    ) -> Result<Option<Vec<EndorsingRight>>, ResolverError> {
        let params = self
            .limits
            .validate_endorsing(&delegate.address, args)
            .inspect_err(|e| debug!(delegate = %delegate.address, error = %e, "endorsingRights rejected"))?;

        let scope = BlockScope::new(&delegate.block_hash);
        let rights = self
            .client
            .endorsing_rights(&params, &scope)
            .await
            .inspect_err(|e| warn!(delegate = %delegate.address, block = %scope.block, error = %e, "endorsingRights lookup failed"))?;

        Ok(handle_not_found(rights, "endorsingRights", delegate))
    }
}

fn handle_not_found<T>(lookup: Lookup<T>, field: &str, delegate: &Delegate) -> Option<T> {
    if lookup.is_not_found() {
        debug!(
            field,
            delegate = %delegate.address,
            block = %delegate.block_hash,
            "rights not found, resolving to null"
        );
    }

    lookup.into_option()
}
