use std::sync::Arc;

use hms_auth::TokenService;
use hms_config::{CorsConfig, JwtConfig};

use crate::accounts::AccountDirectory;

/// Shared, read-only application state.
///
/// Built once at startup and cloned into every request; all fields are cheap
/// handle clones.
#[derive(Clone)]
pub struct AppState {
    pub tokens: Arc<TokenService>,
    pub accounts: Arc<dyn AccountDirectory>,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        jwt_config: &JwtConfig,
        cors_config: CorsConfig,
        accounts: Arc<dyn AccountDirectory>,
    ) -> Self {
        Self {
            tokens: Arc::new(TokenService::new(jwt_config)),
            accounts,
            cors_config,
        }
    }
}
