//! Staff records and employment status.

use axum::Router;
use hms_core::{permissions, roles};

use super::{ModuleSpec, feature_router};
use crate::state::AppState;

pub const NAME: &str = "hr";
pub const PATH: &str = "/api/hr";

const ALLOWED_ROLES: &[&str] = &[roles::ADMIN, roles::HR_MANAGER];

pub fn router(state: &AppState) -> Router<AppState> {
    feature_router(state, NAME, ALLOWED_ROLES, permissions::HR_READ)
}

pub fn spec() -> ModuleSpec<AppState> {
    ModuleSpec::new(NAME, PATH, &[], router)
}
