use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use hms_core::ErrorEnvelope;

use crate::modules::access::{ModuleAccess, ModuleAccessResponse};
use crate::registry::ModuleInfo;
use crate::registry::health::HealthResponse;
use crate::system::model::{ModuleListResponse, SystemStatus, SystemStatusResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::system::controller::get_status,
        crate::system::controller::list_modules,
    ),
    components(schemas(
        ErrorEnvelope,
        HealthResponse,
        ModuleInfo,
        ModuleAccess,
        ModuleAccessResponse,
        SystemStatus,
        SystemStatusResponse,
        ModuleListResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "System", description = "Service status and module inventory")
    ),
    info(
        title = "HMS API",
        version = "0.1.0",
        description = "Hospital management backend with layered authentication and authorization."
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
