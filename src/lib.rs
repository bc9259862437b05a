pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod graphql;
pub mod logging;
pub mod rights;
pub mod server;
pub mod tezos;

pub use errors::{AppError, ResolverError, RightsError, RpcError};
