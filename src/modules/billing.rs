//! Invoices and charges.
//!
//! Receptionists are admitted so front desk staff can settle co-payments at check-in.

use axum::Router;
use hms_core::{permissions, roles};

use super::{ModuleSpec, feature_router};
use crate::state::AppState;

pub const NAME: &str = "billing";
pub const PATH: &str = "/api/billing";

const ALLOWED_ROLES: &[&str] = &[roles::ADMIN, roles::ACCOUNTANT, roles::RECEPTIONIST];

pub fn router(state: &AppState) -> Router<AppState> {
    feature_router(state, NAME, ALLOWED_ROLES, permissions::BILLING_READ)
}

pub fn spec() -> ModuleSpec<AppState> {
    ModuleSpec::new(NAME, PATH, &[super::patients::NAME, super::appointments::NAME], router)
}
