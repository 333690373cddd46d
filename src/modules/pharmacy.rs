//! Prescriptions and dispensing. Reads orders from clinical and stock from inventory.

use axum::Router;
use hms_core::{permissions, roles};

use super::{ModuleSpec, feature_router};
use crate::state::AppState;

pub const NAME: &str = "pharmacy";
pub const PATH: &str = "/api/pharmacy";

const ALLOWED_ROLES: &[&str] = &[roles::ADMIN, roles::PHARMACIST, roles::DOCTOR];

pub fn router(state: &AppState) -> Router<AppState> {
    feature_router(state, NAME, ALLOWED_ROLES, permissions::PHARMACY_READ)
}

pub fn spec() -> ModuleSpec<AppState> {
    ModuleSpec::new(NAME, PATH, &[super::clinical::NAME, super::inventory::NAME], router)
}
