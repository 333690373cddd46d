//! Session token issuing and verification.
//!
//! [`TokenService`] is constructed once at startup from [`JwtConfig`] and shared by
//! reference afterwards. Verification is pure and synchronous: it performs no I/O
//! and never blocks.
//!
//! Every verification failure (malformed token, bad signature, expired window,
//! wrong algorithm) collapses into [`TokenError::Invalid`] so callers cannot tell
//! which check failed.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use hms_config::JwtConfig;

use crate::claims::Claims;

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Invalid or expired token")]
    Invalid,
    #[error("Failed to sign token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

/// Identity recovered from a valid token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedToken {
    pub principal_id: String,
    pub roles: Vec<String>,
    pub issued_at: i64,
}

#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: i64,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // The validity window is exact: a token is rejected as soon as it expires.
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            ttl: config.token_expiry,
        }
    }

    /// Validity window in seconds.
    pub fn ttl(&self) -> i64 {
        self.ttl
    }

    /// Issues a token for `principal_id` starting now.
    pub fn issue(&self, principal_id: &str, roles: &[String]) -> Result<String, TokenError> {
        self.issue_at(principal_id, roles, Utc::now().timestamp())
    }

    /// Issues a token as if it had been created at `issued_at` (seconds since epoch).
    pub fn issue_at(
        &self,
        principal_id: &str,
        roles: &[String],
        issued_at: i64,
    ) -> Result<String, TokenError> {
        let claims = Claims {
            user_id: principal_id.to_string(),
            roles: roles.to_vec(),
            iat: issued_at,
            exp: issued_at + self.ttl,
        };

        Ok(encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )?)
    }

    pub fn verify(&self, token: &str) -> Result<VerifiedToken, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| VerifiedToken {
                principal_id: data.claims.user_id,
                roles: data.claims.roles,
                issued_at: data.claims.iat,
            })
            .map_err(|_| TokenError::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            token_expiry: 86_400,
        }
    }

    fn roles(names: &[&str]) -> Vec<String> {
        names.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn test_issue_then_verify() {
        let service = TokenService::new(&get_test_jwt_config());

        let token = service.issue("u1", &roles(&["doctor"])).unwrap();
        let verified = service.verify(&token).unwrap();

        assert_eq!(verified.principal_id, "u1");
        assert_eq!(verified.roles, roles(&["doctor"]));
        assert!((Utc::now().timestamp() - verified.issued_at).abs() <= 5);
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let service = TokenService::new(&get_test_jwt_config());
        let issued_at = Utc::now().timestamp() - service.ttl() - 1;

        let token = service.issue_at("u1", &roles(&["doctor"]), issued_at).unwrap();

        assert!(matches!(service.verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_token_near_end_of_window_is_valid() {
        let service = TokenService::new(&get_test_jwt_config());
        let issued_at = Utc::now().timestamp() - service.ttl() + 60;

        let token = service.issue_at("u1", &[], issued_at).unwrap();

        assert!(service.verify(&token).is_ok());
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let service = TokenService::new(&get_test_jwt_config());
        let token = service.issue("u1", &roles(&["admin"])).unwrap();

        let other = TokenService::new(&JwtConfig {
            secret: "different-secret-key-at-least-32-characters".to_string(),
            token_expiry: 86_400,
        });

        assert!(matches!(other.verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_malformed_token_is_invalid() {
        let service = TokenService::new(&get_test_jwt_config());

        assert!(matches!(service.verify("invalid-token"), Err(TokenError::Invalid)));
        assert!(matches!(service.verify(""), Err(TokenError::Invalid)));
        assert!(matches!(service.verify("a.b.c"), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_tampered_payload_is_invalid() {
        let service = TokenService::new(&get_test_jwt_config());
        let token = service.issue("u1", &roles(&["nurse"])).unwrap();
        let forged = service.issue("u2", &roles(&["admin"])).unwrap();

        // Splice the forged payload onto the original signature.
        let parts: Vec<&str> = token.split('.').collect();
        let forged_parts: Vec<&str> = forged.split('.').collect();
        let spliced = format!("{}.{}.{}", parts[0], forged_parts[1], parts[2]);

        assert!(matches!(service.verify(&spliced), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_payload_shape() {
        let claims = Claims {
            user_id: "u1".to_string(),
            roles: roles(&["doctor", "admin"]),
            iat: 1_700_000_000,
            exp: 1_700_086_400,
        };

        let json = serde_json::to_value(&claims).unwrap();

        assert_eq!(json["userId"], "u1");
        assert_eq!(json["roles"], serde_json::json!(["doctor", "admin"]));
        assert_eq!(json["iat"], 1_700_000_000);
        assert_eq!(json["exp"], 1_700_086_400);
    }

    #[test]
    fn test_window_follows_config() {
        let service = TokenService::new(&JwtConfig {
            token_expiry: 3600,
            ..get_test_jwt_config()
        });

        let fresh = service
            .issue_at("u1", &[], Utc::now().timestamp() - 3000)
            .unwrap();
        let stale = service
            .issue_at("u1", &[], Utc::now().timestamp() - 3700)
            .unwrap();

        assert!(service.verify(&fresh).is_ok());
        assert!(service.verify(&stale).is_err());
    }
}
