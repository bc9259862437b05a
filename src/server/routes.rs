use super::state::AppState;
use crate::api::{graphql, root};
use axum::{Router, routing::get};

pub fn get_api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root::route))
        .route("/graphql", get(graphql::playground).post(graphql::route))
}
