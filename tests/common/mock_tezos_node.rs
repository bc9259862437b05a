use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use std::sync::{Arc, Mutex};

/// Block answered with 404.
pub const MISSING_BLOCK: &str = "BLmissing";
/// Block answered with 500.
pub const BROKEN_BLOCK: &str = "BLbroken";
/// Block answered with a body that is not a rights list.
pub const GARBLED_BLOCK: &str = "BLgarbled";
/// Block answered with Tenderbake-era records (`round`, `consensus_key`, ...).
pub const TENDERBAKE_BLOCK: &str = "BLtenderbake";

type Requests = Arc<Mutex<Vec<String>>>;

/// A fake Tezos node serving the two rights helpers.
pub struct MockTezosNode {
    pub url: String,
    requests: Requests,
}

impl MockTezosNode {
    pub async fn start() -> Self {
        let requests: Requests = Arc::new(Mutex::new(vec![]));

        let mock_app = Router::new()
            .route(
                "/chains/main/blocks/{block}/helpers/baking_rights",
                get(baking_rights),
            )
            .route(
                "/chains/main/blocks/{block}/helpers/endorsing_rights",
                get(endorsing_rights),
            )
            .with_state(requests.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let url = format!("http://{addr}");

        tokio::spawn(async move {
            axum::serve(listener, mock_app).await.unwrap();
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

        Self { url, requests }
    }

    pub fn unreachable() -> Self {
        Self {
            url: "http://127.0.0.1:1".to_string(),
            requests: Arc::new(Mutex::new(vec![])),
        }
    }

    /// Paths with query strings, in the order they were received.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn canned(block: &str, rights: serde_json::Value, tenderbake: serde_json::Value) -> Response {
    match block {
        TENDERBAKE_BLOCK => Json(tenderbake).into_response(),
        MISSING_BLOCK => StatusCode::NOT_FOUND.into_response(),
        BROKEN_BLOCK => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        GARBLED_BLOCK => Json(json!({ "unexpected": true })).into_response(),
        _ => Json(rights).into_response(),
    }
}

async fn baking_rights(
    State(requests): State<Requests>,
    Path(block): Path<String>,
    uri: Uri,
) -> Response {
    requests.lock().unwrap().push(uri.to_string());

    canned(
        &block,
        json!([
            {
                "level": 1_400_001,
                "delegate": "tz1abc",
                "priority": 0,
                "estimated_time": "2021-04-01T12:00:00Z"
            },
            {
                "level": 1_400_007,
                "delegate": "tz1abc",
                "priority": 2
            }
        ]),
        tenderbake_baking_rights(),
    )
}

async fn endorsing_rights(
    State(requests): State<Requests>,
    Path(block): Path<String>,
    uri: Uri,
) -> Response {
    requests.lock().unwrap().push(uri.to_string());

    canned(
        &block,
        json!([
            {
                "level": 1_400_001,
                "delegate": "tz1abc",
                "slots": [4, 19, 27]
            }
        ]),
        tenderbake_endorsing_rights(),
    )
}

pub fn tenderbake_baking_rights() -> serde_json::Value {
    json!([
        {
            "level": 3_200_001,
            "delegate": "tz1abc",
            "round": 0,
            "estimated_time": "2023-03-29T10:00:00Z",
            "consensus_key": "tz1consensus"
        }
    ])
}

pub fn tenderbake_endorsing_rights() -> serde_json::Value {
    json!([
        {
            "level": 3_200_001,
            "delegates": [
                {
                    "delegate": "tz1abc",
                    "first_slot": 11,
                    "endorsing_power": 4,
                    "consensus_key": "tz1consensus"
                }
            ]
        }
    ])
}
