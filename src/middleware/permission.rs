//! Permission gate.
//!
//! Permissions are capability strings such as `billing:void_charge`, checked
//! independently of roles.

use std::sync::Arc;

use hms_core::AppError;

use super::auth::{NOT_AUTHORIZED, Principal};
use super::gate::{Gate, GateLayer};
use super::role::INSUFFICIENT_PERMISSIONS;

/// Builds a gate admitting principals that hold `permission`.
pub fn check_permission(permission: impl Into<String>) -> GateLayer {
    let permission: Arc<str> = Arc::from(permission.into());
    GateLayer::new(Gate::Permission(permission))
}

/// Decision behind [`check_permission`].
pub fn require_permission(principal: Option<&Principal>, permission: &str) -> Result<(), AppError> {
    let principal = principal.ok_or_else(|| AppError::unauthorized(NOT_AUTHORIZED))?;

    if !principal.has_permission(permission) {
        return Err(AppError::forbidden(INSUFFICIENT_PERMISSIONS));
    }

    Ok(())
}
