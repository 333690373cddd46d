//! Appointment scheduling.

use axum::Router;
use hms_core::{permissions, roles};

use super::{ModuleSpec, feature_router};
use crate::state::AppState;

pub const NAME: &str = "appointments";
pub const PATH: &str = "/api/appointments";

const ALLOWED_ROLES: &[&str] = &[roles::ADMIN, roles::DOCTOR, roles::NURSE, roles::RECEPTIONIST];

pub fn router(state: &AppState) -> Router<AppState> {
    feature_router(state, NAME, ALLOWED_ROLES, permissions::APPOINTMENTS_READ)
}

pub fn spec() -> ModuleSpec<AppState> {
    ModuleSpec::new(NAME, PATH, &[super::patients::NAME], router)
}
