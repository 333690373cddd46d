use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::registry::ModuleInfo;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SystemStatus {
    pub service: String,
    pub version: String,
    /// Number of mounted feature modules
    pub modules: usize,
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SystemStatusResponse {
    pub success: bool,
    pub data: SystemStatus,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ModuleListResponse {
    pub success: bool,
    /// Registered modules in registration order
    pub data: Vec<ModuleInfo>,
}
