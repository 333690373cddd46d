use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use hms_core::permissions;

use crate::middleware::Principal;

/// What the caller may do inside one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModuleAccess {
    pub module: String,
    pub account_id: String,
    pub display_name: String,
    pub roles: Vec<String>,
    /// Only the permissions scoped to this module.
    pub permissions: Vec<String>,
}

impl ModuleAccess {
    pub fn for_module(principal: &Principal, module: &str) -> Self {
        Self {
            module: module.to_string(),
            account_id: principal.account_id.clone(),
            display_name: principal.display_name.clone(),
            roles: principal.roles.iter().cloned().collect(),
            permissions: principal
                .permissions
                .iter()
                .filter(|p| permissions::in_scope(p, module))
                .cloned()
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ModuleAccessResponse {
    pub success: bool,
    pub data: ModuleAccess,
}

pub async fn module_access(
    module: &'static str,
    principal: Principal,
) -> Json<ModuleAccessResponse> {
    Json(ModuleAccessResponse {
        success: true,
        data: ModuleAccess::for_module(&principal, module),
    })
}
