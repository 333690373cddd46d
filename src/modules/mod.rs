//! Hospital feature modules.
//!
//! Every module is mounted by the [`ModuleManager`] under its own path and exposes:
//!
//! - `GET <path>/health`: public liveness probe, see [`crate::registry::health`]
//! - `GET <path>/access`: the caller's standing in the module, behind
//!   `authenticate`, the module's role list and its `<module>:read` permission
//!
//! | Module | Path | Dependencies |
//! |--------|------|--------------|
//! | patients | /api/patients | - |
//! | hr | /api/hr | - |
//! | appointments | /api/appointments | patients |
//! | clinical | /api/clinical | patients, appointments |
//! | inventory | /api/inventory | - |
//! | pharmacy | /api/pharmacy | clinical, inventory |
//! | laboratory | /api/laboratory | patients, clinical |
//! | radiology | /api/radiology | patients, clinical |
//! | billing | /api/billing | patients, appointments |

pub mod access;
pub mod appointments;
pub mod billing;
pub mod clinical;
pub mod hr;
pub mod inventory;
pub mod laboratory;
pub mod manager;
pub mod patients;
pub mod pharmacy;
pub mod radiology;

use axum::{Router, middleware, routing::get};
use tower::ServiceBuilder;

use crate::middleware::{AuthUser, authenticate, authorize, check_permission};
use crate::registry::health;
use crate::state::AppState;

pub use manager::{ModuleManager, ModuleSpec};

/// The hospital catalog, in declared order.
pub fn catalog() -> Vec<ModuleSpec<AppState>> {
    vec![
        patients::spec(),
        hr::spec(),
        appointments::spec(),
        clinical::spec(),
        inventory::spec(),
        pharmacy::spec(),
        laboratory::spec(),
        radiology::spec(),
        billing::spec(),
    ]
}

impl ModuleManager<AppState> {
    pub fn new() -> Self {
        Self::with_catalog(catalog())
    }
}

impl Default for ModuleManager<AppState> {
    fn default() -> Self {
        Self::new()
    }
}

/// Router shared by every feature module: health plus the gated access route.
pub(crate) fn feature_router(
    state: &AppState,
    module: &'static str,
    allowed_roles: &[&str],
    read_permission: &str,
) -> Router<AppState> {
    let gated = Router::new()
        .route(
            "/access",
            get(move |AuthUser(principal): AuthUser| access::module_access(module, principal)),
        )
        .route_layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn_with_state(state.clone(), authenticate))
                .layer(authorize(allowed_roles.iter().copied()))
                .layer(check_permission(read_permission)),
        );

    health::routes(module).merge(gated)
}
