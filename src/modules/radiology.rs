//! Imaging orders and reports.

use axum::Router;
use hms_core::{permissions, roles};

use super::{ModuleSpec, feature_router};
use crate::state::AppState;

pub const NAME: &str = "radiology";
pub const PATH: &str = "/api/radiology";

const ALLOWED_ROLES: &[&str] = &[roles::ADMIN, roles::RADIOLOGIST, roles::DOCTOR];

pub fn router(state: &AppState) -> Router<AppState> {
    feature_router(state, NAME, ALLOWED_ROLES, permissions::RADIOLOGY_READ)
}

pub fn spec() -> ModuleSpec<AppState> {
    ModuleSpec::new(NAME, PATH, &[super::patients::NAME, super::clinical::NAME], router)
}
