use std::sync::Arc;

use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use hms_config::CorsConfig;
use hms_core::AppError;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::ModuleManager;
use crate::registry::{ModuleRegistry, RegistryError};
use crate::state::AppState;
use crate::system::router::init_system_router;

/// Bootstraps the hospital modules and builds the full application router.
///
/// Fails when the module graph is inconsistent; the server must not start then.
pub fn init_router(state: AppState) -> Result<Router, RegistryError> {
    let registry = ModuleManager::new().bootstrap(&state)?;
    Ok(build_router(state, registry))
}

/// Builds the application router around an already bootstrapped registry.
pub fn build_router(state: AppState, registry: ModuleRegistry<AppState>) -> Router {
    let inventory: Arc<[_]> = registry.list().into();
    let system = init_system_router(&state, inventory);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/system", system)
        .merge(registry.into_router())
        .fallback(|| async { AppError::not_found("Route not found") })
        .with_state(state.clone())
        .layer(cors_layer(&state.cors_config))
        .layer(middleware::from_fn(logging_middleware))
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}
