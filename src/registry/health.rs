//! Per-module health endpoint.
//!
//! Every feature module answers `GET <mount path>/health` without authentication:
//!
//! ```json
//! {
//!   "success": true,
//!   "message": "pharmacy is active",
//!   "module": "pharmacy",
//!   "timestamp": "2025-01-01T00:00:00.000Z"
//! }
//! ```

use axum::{Json, Router, routing::get};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,
    pub module: String,
    /// RFC 3339 / ISO 8601 timestamp in UTC
    pub timestamp: String,
}

impl HealthResponse {
    pub fn active(module: &str) -> Self {
        Self {
            success: true,
            message: format!("{module} is active"),
            module: module.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Router with the `/health` route for `module`, to be merged into the module's router.
pub fn routes<S>(module: &'static str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route(
        "/health",
        get(move || async move { Json(HealthResponse::active(module)) }),
    )
}
