use std::sync::Arc;

use axum::{Extension, Json};
use tracing::instrument;

use hms_core::ErrorEnvelope;

use crate::middleware::{AuthUser, MaybeAuthUser};
use crate::registry::ModuleInfo;
use crate::system::model::{ModuleListResponse, SystemStatus, SystemStatusResponse};

/// Registered modules, shared with the system handlers after bootstrap.
pub type ModuleInventory = Arc<[ModuleInfo]>;

#[utoipa::path(
    get,
    path = "/api/system/status",
    responses(
        (status = 200, description = "Service status", body = SystemStatusResponse)
    ),
    tag = "System",
    security((), ("bearer_auth" = []))
)]
#[instrument(skip_all)]
pub async fn get_status(
    MaybeAuthUser(principal): MaybeAuthUser,
    Extension(inventory): Extension<ModuleInventory>,
) -> Json<SystemStatusResponse> {
    Json(SystemStatusResponse {
        success: true,
        data: SystemStatus {
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            modules: inventory.len(),
            authenticated: principal.is_some(),
            username: principal.map(|p| p.username),
        },
    })
}

#[utoipa::path(
    get,
    path = "/api/system/modules",
    responses(
        (status = 200, description = "Registered modules", body = ModuleListResponse),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope),
        (status = 403, description = "Forbidden - requires admin role", body = ErrorEnvelope)
    ),
    tag = "System",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all, fields(account_id = %user.account_id))]
pub async fn list_modules(
    AuthUser(user): AuthUser,
    Extension(inventory): Extension<ModuleInventory>,
) -> Json<ModuleListResponse> {
    Json(ModuleListResponse {
        success: true,
        data: inventory.to_vec(),
    })
}
