pub mod routes;
pub mod state;

use crate::config::Config;
use crate::errors::AppError;
use crate::graphql::build_schema;
use crate::rights::resolver::RightsResolver;
use crate::tezos::{client::ChainDataClient, rpc::TezosRpc};
use axum::Router;
use routes::get_api_routes;
use state::AppState;
use std::future::Future;
use std::io;
use std::sync::Arc;
use tower::{Layer, limit::ConcurrencyLimitLayer};
use tower_http::normalize_path::NormalizePathLayer;
use tracing::{error, info};

/// Builds the `Router` backed by the Tezos node RPC named in `config`.
pub fn build(config: Arc<Config>) -> Result<Router, AppError> {
    let tezos_rpc = TezosRpc::new(&config.tezos_node)?;

    info!(
        endpoint = %config.tezos_node.endpoint,
        chain = %config.tezos_node.chain,
        "Using Tezos node RPC"
    );

    Ok(build_with_client(config, Arc::new(tezos_rpc)))
}

/// Builds the `Router` around an arbitrary chain data client.
pub fn build_with_client(config: Arc<Config>, client: Arc<dyn ChainDataClient>) -> Router {
    info!(
        max_priority = config.rights.max_priority,
        max_cycles = config.rights.max_cycles,
        max_levels = config.rights.max_levels,
        "Rights ceilings"
    );

    let resolver = RightsResolver::new(client, config.rights);
    let schema = build_schema(resolver);

    let app_state = AppState {
        config: config.clone(),
        schema,
    };

    let inner = get_api_routes().with_state(app_state);
    let inner = NormalizePathLayer::trim_trailing_slash().layer(inner);

    Router::new()
        .fallback_service(inner)
        .layer(ConcurrencyLimitLayer::new(config.server_concurrency_limit))
}

/// Resolves once `signal` fires. A signal listener that fails to install is
/// logged and treated as a shutdown request.
pub async fn shutdown_signal<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    match signal.await {
        Ok(()) => info!("Received shutdown signal"),
        Err(e) => error!(error = %e, "Failed to listen for shutdown signal, shutting down"),
    }
}
