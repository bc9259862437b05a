use crate::config::Config;
use crate::graphql::RightsSchema;
use axum::extract::State;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub schema: RightsSchema,
}

pub type AppStateExt = State<AppState>;
