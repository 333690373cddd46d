//! Stock levels for consumables and drugs.

use axum::Router;
use hms_core::{permissions, roles};

use super::{ModuleSpec, feature_router};
use crate::state::AppState;

pub const NAME: &str = "inventory";
pub const PATH: &str = "/api/inventory";

const ALLOWED_ROLES: &[&str] = &[roles::ADMIN, roles::INVENTORY_MANAGER, roles::PHARMACIST];

pub fn router(state: &AppState) -> Router<AppState> {
    feature_router(state, NAME, ALLOWED_ROLES, permissions::INVENTORY_READ)
}

pub fn spec() -> ModuleSpec<AppState> {
    ModuleSpec::new(NAME, PATH, &[], router)
}
