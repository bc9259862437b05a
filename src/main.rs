use dotenvy::dotenv;
use std::sync::Arc;
use tezos_rights_gateway::{
    AppError,
    cli::Args,
    logging::setup_tracing,
    server::{build, shutdown_signal},
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenv().ok();
    let config = Arc::new(Args::init()?);

    // Logging
    setup_tracing(config.log_level);

    info!(
        "Starting {} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let app = build(config.clone())?;

    let address = std::net::SocketAddr::new(config.server_address, config.server_port);
    let listener = tokio::net::TcpListener::bind(address).await?;
    let shutdown = shutdown_signal(tokio::signal::ctrl_c());

    info!("Server is listening on http://{address}/graphql");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|err| AppError::Server(err.to_string()))
}
