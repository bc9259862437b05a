use tracing::Level;
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt::format::Format};

/// Installs the global subscriber. `RUST_LOG` directives, when present, refine
/// the configured level.
pub fn setup_tracing(log_level: Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(log_level).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(
            Format::default()
                .with_ansi(true)
                .with_level(true)
                .with_target(false)
                .compact(),
        )
        .init();
}
