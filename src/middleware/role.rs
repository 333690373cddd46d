//! Role gate.
//!
//! Roles are compared by name with no hierarchy: `admin` does not satisfy a gate
//! that only lists `nurse`. Every route lists the roles it admits.

use std::sync::Arc;

use hms_core::AppError;

use super::auth::{NOT_AUTHORIZED, Principal};
use super::gate::{Gate, GateLayer};

pub const INSUFFICIENT_PERMISSIONS: &str = "Insufficient permissions";

/// Builds a gate admitting principals that hold at least one of `roles`.
///
/// # Example
///
/// ```rust,ignore
/// use crate::middleware::role::authorize;
///
/// let clinical_routes = Router::new()
///     .route("/notes", get(list_notes))
///     .route_layer(authorize([roles::DOCTOR, roles::NURSE]));
/// ```
pub fn authorize<I>(roles: I) -> GateLayer
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let roles: Arc<[String]> = roles.into_iter().map(Into::into).collect();
    GateLayer::new(Gate::AnyRole(roles))
}

/// Decision behind [`authorize`], usable directly from handlers.
///
/// 401 when no principal is present, 403 when the intersection of the principal's
/// roles and `allowed_roles` is empty.
pub fn require_any_role<R: AsRef<str>>(
    principal: Option<&Principal>,
    allowed_roles: &[R],
) -> Result<(), AppError> {
    let principal = principal.ok_or_else(|| AppError::unauthorized(NOT_AUTHORIZED))?;

    if !principal.has_any_role(allowed_roles) {
        return Err(AppError::forbidden(INSUFFICIENT_PERMISSIONS));
    }

    Ok(())
}
