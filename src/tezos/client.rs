use crate::errors::RpcError;
use crate::rights::types::{BakingRight, BakingRightsParams, EndorsingRight, EndorsingRightsParams};
use async_trait::async_trait;

/// Outcome of a lookup that reached the node. Transport and server failures
/// travel separately as `RpcError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    /// Collapses "not found" into `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Lookup::NotFound)
    }
}

/// The block a lookup is evaluated against: a hash, a level or an alias
/// such as `head`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockScope {
    pub block: String,
}

impl BlockScope {
    pub fn new(block: impl Into<String>) -> Self {
        Self {
            block: block.into(),
        }
    }
}

/// Source of delegate rights.
///
/// Implementations are shared between concurrent requests and must not keep
/// per-request state.
#[async_trait]
pub trait ChainDataClient: Send + Sync + 'static {
    async fn baking_rights(
        &self,
        params: &BakingRightsParams,
        scope: &BlockScope,
    ) -> Result<Lookup<Vec<BakingRight>>, RpcError>;

    async fn endorsing_rights(
        &self,
        params: &EndorsingRightsParams,
        scope: &BlockScope,
    ) -> Result<Lookup<Vec<EndorsingRight>>, RpcError>;
}
