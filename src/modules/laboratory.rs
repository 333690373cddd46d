//! Lab orders and results.

use axum::Router;
use hms_core::{permissions, roles};

use super::{ModuleSpec, feature_router};
use crate::state::AppState;

pub const NAME: &str = "laboratory";
pub const PATH: &str = "/api/laboratory";

const ALLOWED_ROLES: &[&str] = &[roles::ADMIN, roles::LAB_TECHNICIAN, roles::DOCTOR];

pub fn router(state: &AppState) -> Router<AppState> {
    feature_router(state, NAME, ALLOWED_ROLES, permissions::LABORATORY_READ)
}

pub fn spec() -> ModuleSpec<AppState> {
    ModuleSpec::new(NAME, PATH, &[super::patients::NAME, super::clinical::NAME], router)
}
