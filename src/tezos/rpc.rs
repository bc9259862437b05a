use crate::config::TezosNodeConfig;
use crate::errors::{AppError, RpcError};
use crate::rights::types::{BakingRight, BakingRightsParams, EndorsingRight, EndorsingRightsParams};
use crate::tezos::client::{BlockScope, ChainDataClient, Lookup};
use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info};

/// Query string of a `helpers/*_rights` call.
pub trait RightsQuery {
    fn delegate(&self) -> &str;
    fn level(&self) -> Option<&[u32]>;
    fn cycle(&self) -> Option<&[u32]>;

    fn max_priority(&self) -> Option<u32> {
        None
    }
}

impl RightsQuery for BakingRightsParams {
    fn delegate(&self) -> &str {
        &self.delegate
    }

    fn level(&self) -> Option<&[u32]> {
        self.level.as_deref()
    }

    fn cycle(&self) -> Option<&[u32]> {
        self.cycle.as_deref()
    }

    fn max_priority(&self) -> Option<u32> {
        Some(self.max_priority)
    }
}

impl RightsQuery for EndorsingRightsParams {
    fn delegate(&self) -> &str {
        &self.delegate
    }

    fn level(&self) -> Option<&[u32]> {
        self.level.as_deref()
    }

    fn cycle(&self) -> Option<&[u32]> {
        self.cycle.as_deref()
    }
}

pub trait ApplyRightsQuery {
    fn apply_rights_query(&mut self, query: &impl RightsQuery);
}

impl ApplyRightsQuery for Url {
    fn apply_rights_query(&mut self, query: &impl RightsQuery) {
        let mut query_pairs = self.query_pairs_mut();

        query_pairs.append_pair("delegate", query.delegate());

        // the node expects repeated keys for lists
        for level in query.level().unwrap_or_default() {
            query_pairs.append_pair("level", &level.to_string());
        }

        for cycle in query.cycle().unwrap_or_default() {
            query_pairs.append_pair("cycle", &cycle.to_string());
        }

        if let Some(max_priority) = query.max_priority() {
            query_pairs.append_pair("max_priority", &max_priority.to_string());
        }
    }
}

/// HTTP client for the Tezos node RPC.
#[derive(Clone)]
pub struct TezosRpc {
    base_url: Url,
    chain: String,
    client: Client,
}

impl TezosRpc {
    pub fn new(config: &TezosNodeConfig) -> Result<Self, AppError> {
        let mut base_url = Url::parse(&config.endpoint)
            .map_err(|e| AppError::TezosNode(format!("invalid node URL '{}': {e}", config.endpoint)))?;

        if base_url.cannot_be_a_base() {
            return Err(AppError::TezosNode(format!(
                "node URL '{}' cannot be used as a base",
                config.endpoint
            )));
        }

        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::TezosNode(format!("failed to build client: {e}")))?;

        Ok(Self {
            base_url,
            chain: config.chain.clone(),
            client,
        })
    }

    /// `{base}/chains/{chain}/blocks/{block}/helpers/{helper}?{query}`
    pub fn rights_url(
        &self,
        helper: &str,
        scope: &BlockScope,
        query: &impl RightsQuery,
    ) -> Result<Url, RpcError> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| RpcError::Url(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend([
                "chains",
                self.chain.as_str(),
                "blocks",
                scope.block.as_str(),
                "helpers",
                helper,
            ]);

        url.apply_rights_query(query);

        Ok(url)
    }

    async fn get<T>(&self, url: Url) -> Result<Lookup<T>, RpcError>
    where
        T: DeserializeOwned,
    {
        let url_str = url.to_string();
        let resp = self.client.request(Method::GET, url).send().await?;
        let status = resp.status();

        info!(url = %url_str, status = %status, "TezosRpc GET");

        if status == StatusCode::NOT_FOUND {
            debug!(url = %url_str, "TezosRpc resource not found");
            return Ok(Lookup::NotFound);
        }

        let body_text = resp.text().await?;

        if !status.is_success() {
            error!(
                url = %url_str,
                status = %status,
                response_body = %body_text,
                "TezosRpc request failed"
            );
            return Err(RpcError::Status {
                status: status.as_u16(),
                body: body_text,
            });
        }

        let body: T = serde_json::from_str(&body_text).map_err(|e| {
            error!(
                url = %url_str,
                status = %status,
                response_body = %body_text,
                error = %e,
                "TezosRpc failed to parse response"
            );
            e
        })?;

        Ok(Lookup::Found(body))
    }
}

#[async_trait]
impl ChainDataClient for TezosRpc {
    async fn baking_rights(
        &self,
        params: &BakingRightsParams,
        scope: &BlockScope,
    ) -> Result<Lookup<Vec<BakingRight>>, RpcError> {
        let url = self.rights_url("baking_rights", scope, params)?;

        self.get(url).await
    }

    async fn endorsing_rights(
        &self,
        params: &EndorsingRightsParams,
        scope: &BlockScope,
    ) -> Result<Lookup<Vec<EndorsingRight>>, RpcError> {
        let url = self.rights_url("endorsing_rights", scope, params)?;

        self.get(url).await
    }
}
