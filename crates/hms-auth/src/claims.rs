//! JWT claim structure for session tokens.

use serde::{Deserialize, Serialize};

/// Claims embedded in a session token.
///
/// Serialized as `{"userId": "...", "roles": [...], "iat": ..., "exp": ...}`.
///
/// The session payload itself is `userId`, `roles` and `iat`; `exp` is added on
/// top of it as the registered JWT claim so that `jsonwebtoken` enforces the
/// validity window. It is always `iat` plus the configured window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Account id of the principal
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Roles held at issuance
    pub roles: Vec<String>,
    /// Issued-at timestamp (seconds since epoch)
    pub iat: i64,
    /// Expiry timestamp (seconds since epoch)
    pub exp: i64,
}
