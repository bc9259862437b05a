#![allow(dead_code)]

pub mod mock_tezos_node;

use std::{
    sync::{Arc, LazyLock},
    time::Duration,
};
use tezos_rights_gateway::{
    config::{Config, TezosNodeConfig},
    rights::limits::RightsLimits,
};
use tracing::Level;

static INIT_LOGGING: LazyLock<()> = LazyLock::new(|| {
    tracing_subscriber::fmt::init();
});

pub fn initialize_logging() {
    LazyLock::force(&INIT_LOGGING);
}

pub fn test_config(node_url: &str) -> Arc<Config> {
    let config = Config {
        server_address: "0.0.0.0".parse().unwrap(),
        server_port: 3000,
        server_concurrency_limit: 16,
        log_level: Level::INFO,
        tezos_node: TezosNodeConfig {
            endpoint: node_url.to_string(),
            chain: "main".to_string(),
            request_timeout: Duration::from_secs(5),
        },
        rights: RightsLimits::default(),
    };

    Arc::new(config)
}
