use std::env;

/// Secret used when `JWT_SECRET` is not set. Only suitable for local development.
pub const DEFAULT_JWT_SECRET: &str = "your-secret-key-change-in-production";

/// Session tokens are valid for 24 hours.
pub const DEFAULT_TOKEN_EXPIRY: i64 = 86_400;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Validity window in seconds, counted from issuance.
    pub token_expiry: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_JWT_SECRET.to_string(),
            token_expiry: DEFAULT_TOKEN_EXPIRY,
        }
    }
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string()),
            token_expiry: env::var("JWT_EXPIRY")
                .ok()
                .and_then(|s| s.parse::<i64>().ok())
                .filter(|expiry| *expiry > 0)
                .unwrap_or(DEFAULT_TOKEN_EXPIRY),
        }
    }

    /// True when the process is signing tokens with the development placeholder.
    pub fn uses_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_is_one_day() {
        let config = JwtConfig::default();
        assert_eq!(config.token_expiry, 24 * 60 * 60);
        assert!(config.uses_default_secret());
    }
}
