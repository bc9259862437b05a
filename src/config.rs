use crate::cli::Args;
use crate::errors::AppError;
use crate::rights::limits::RightsLimits;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::time::Duration;
use tracing::Level;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_address: IpAddr,
    pub server_port: u16,
    pub server_concurrency_limit: usize,
    pub log_level: Level,
    pub tezos_node: TezosNodeConfig,
    pub rights: RightsLimits,
}

#[derive(Clone, Debug)]
pub struct TezosNodeConfig {
    pub endpoint: String,
    pub chain: String,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, AppError> {
        let endpoint = args
            .node_url
            .filter(|url| !url.trim().is_empty())
            .ok_or(AppError::Config("--node-url must be set".into()))?;

        if args.chain.trim().is_empty() {
            return Err(AppError::Config("--chain must not be empty".into()));
        }

        if args.server_concurrency_limit == 0 {
            return Err(AppError::Config(
                "--server-concurrency-limit must be greater than 0".into(),
            ));
        }

        let tezos_node = TezosNodeConfig {
            endpoint,
            chain: args.chain,
            request_timeout: Duration::from_secs(args.node_timeout_sec),
        };

        let rights = RightsLimits {
            max_priority: args.baking_rights_max_priority,
            max_cycles: args.rights_max_cycles,
            max_levels: args.rights_max_levels,
        };

        Ok(Config {
            server_address: args.server_address,
            server_port: args.server_port,
            server_concurrency_limit: args.server_concurrency_limit,
            log_level: args.log_level.into(),
            tezos_node,
            rights,
        })
    }
}
