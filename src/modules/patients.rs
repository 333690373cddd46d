//! Patient registry. Has no dependencies; most clinical modules build on it.

use axum::Router;
use hms_core::{permissions, roles};

use super::{ModuleSpec, feature_router};
use crate::state::AppState;

pub const NAME: &str = "patients";
pub const PATH: &str = "/api/patients";

const ALLOWED_ROLES: &[&str] = &[roles::ADMIN, roles::DOCTOR, roles::NURSE, roles::RECEPTIONIST];

pub fn router(state: &AppState) -> Router<AppState> {
    feature_router(state, NAME, ALLOWED_ROLES, permissions::PATIENTS_READ)
}

pub fn spec() -> ModuleSpec<AppState> {
    ModuleSpec::new(NAME, PATH, &[], router)
}
