//! Liveness endpoints.

use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PingResponse {
    pub message: String,
}

/// `GET /ping`: always answers `{"message":"pong"}`.
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse { message: "pong".to_owned() })
}

/// `GET /healthz`: liveness check for load balancers.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
