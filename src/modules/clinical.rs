//! Clinical notes and encounters.
//!
//! Receptionists can book appointments but are not admitted here.

use axum::Router;
use hms_core::{permissions, roles};

use super::{ModuleSpec, feature_router};
use crate::state::AppState;

pub const NAME: &str = "clinical";
pub const PATH: &str = "/api/clinical";

const ALLOWED_ROLES: &[&str] = &[roles::ADMIN, roles::DOCTOR, roles::NURSE];

pub fn router(state: &AppState) -> Router<AppState> {
    feature_router(state, NAME, ALLOWED_ROLES, permissions::CLINICAL_READ)
}

pub fn spec() -> ModuleSpec<AppState> {
    ModuleSpec::new(NAME, PATH, &[super::patients::NAME, super::appointments::NAME], router)
}
