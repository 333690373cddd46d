use axum::{Extension, Router, middleware, routing::get};
use tower::ServiceBuilder;

use hms_core::roles;

use crate::middleware::{authenticate, authorize, optional_authenticate};
use crate::state::AppState;

use super::controller::{ModuleInventory, get_status, list_modules};

pub fn init_system_router(state: &AppState, inventory: ModuleInventory) -> Router<AppState> {
    let public = Router::new()
        .route("/status", get(get_status))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            optional_authenticate,
        ));

    let admin = Router::new().route("/modules", get(list_modules)).route_layer(
        ServiceBuilder::new()
            .layer(middleware::from_fn_with_state(state.clone(), authenticate))
            .layer(authorize([roles::ADMIN])),
    );

    public.merge(admin).layer(Extension(inventory))
}
