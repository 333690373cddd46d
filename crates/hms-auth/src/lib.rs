//! # HMS Auth
//!
//! Session tokens for the HMS API.
//!
//! - [`claims`]: the signed payload carried by a session token
//! - [`token`]: [`TokenService`], which issues and verifies tokens
//!
//! Tokens are stateless HS256 JWTs valid for a fixed window (24 hours by default)
//! from issuance. There is no server-side revocation list; account and profile
//! state is re-checked on every request by the authentication middleware.
//!
//! # Example
//!
//! ```ignore
//! use hms_auth::TokenService;
//! use hms_config::JwtConfig;
//!
//! let tokens = TokenService::new(&JwtConfig::from_env());
//!
//! let token = tokens.issue("u1", &["doctor".to_string()])?;
//! let verified = tokens.verify(&token)?;
//! assert_eq!(verified.principal_id, "u1");
//! ```

pub mod claims;
pub mod token;

pub use claims::Claims;
pub use token::{TokenError, TokenService, VerifiedToken};
