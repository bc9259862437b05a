use crate::rights::limits::{MAX_CYCLES_ENV, MAX_LEVELS_ENV, MAX_PRIORITY_ENV};
use async_graphql::ErrorExtensions;
use std::io;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Server startup error: {0}")]
    Server(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tezos node error: {0}")]
    TezosNode(String),
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        error!("I/O Error occurred: {err}");
        AppError::Server(err.to_string())
    }
}

/// A rights argument exceeded its configured ceiling.
///
/// Every variant names the ceiling that was hit and the environment variable
/// that overrides it, so callers can tell the three checks apart without
/// parsing the message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RightsError {
    #[error("maxPriority must be lower or equal to {limit}. You can set this value in the ENV variable {env}.", env = MAX_PRIORITY_ENV)]
    MaxPriorityExceeded { requested: u32, limit: u32 },

    #[error("number of cycles must be lower or equal to {limit}. You can set this value in the ENV variable {env}.", env = MAX_CYCLES_ENV)]
    TooManyCycles { requested: usize, limit: usize },

    #[error("number of levels must be lower or equal to {limit}. You can set this value in the ENV variable {env}.", env = MAX_LEVELS_ENV)]
    TooManyLevels { requested: usize, limit: usize },
}

impl RightsError {
    pub fn limit(&self) -> u64 {
        match self {
            Self::MaxPriorityExceeded { limit, .. } => u64::from(*limit),
            Self::TooManyCycles { limit, .. } | Self::TooManyLevels { limit, .. } => *limit as u64,
        }
    }

    pub fn env_var(&self) -> &'static str {
        match self {
            Self::MaxPriorityExceeded { .. } => MAX_PRIORITY_ENV,
            Self::TooManyCycles { .. } => MAX_CYCLES_ENV,
            Self::TooManyLevels { .. } => MAX_LEVELS_ENV,
        }
    }
}

/// Failures of the Tezos node RPC other than "not found".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RpcError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Tezos node responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON error: {0}")]
    Decode(String),

    #[error("URL error: {0}")]
    Url(String),
}

impl From<reqwest::Error> for RpcError {
    fn from(err: reqwest::Error) -> Self {
        RpcError::Http(err.to_string())
    }
}

impl From<serde_json::Error> for RpcError {
    fn from(err: serde_json::Error) -> Self {
        RpcError::Decode(err.to_string())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolverError {
    #[error(transparent)]
    Validation(#[from] RightsError),

    #[error(transparent)]
    Upstream(#[from] RpcError),
}

impl ErrorExtensions for ResolverError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, extensions| match self {
            ResolverError::Validation(err) => {
                extensions.set("code", "BAD_USER_INPUT");
                extensions.set("limit", err.limit());
                extensions.set("envVar", err.env_var());
            },
            ResolverError::Upstream(err) => {
                extensions.set("code", "UPSTREAM_ERROR");
                if let RpcError::Status { status, .. } = err {
                    extensions.set("status", *status);
                }
            },
        })
    }
}
