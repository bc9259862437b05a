use crate::server::state::AppStateExt;
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct RootResponse {
    pub name: String,
    pub version: String,
    pub chain: String,
}

pub async fn route(state: AppStateExt) -> Json<RootResponse> {
    Json(RootResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        chain: state.config.tezos_node.chain.clone(),
    })
}
