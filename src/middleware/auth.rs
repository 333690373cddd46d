//! Authentication middleware and principal extractors.
//!
//! [`authenticate`] resolves the `Authorization: Bearer <token>` credential of a
//! request into a [`Principal`] and stores it in the request extensions. The
//! resolution runs strictly in order and stops at the first miss:
//!
//! 1. credential present
//! 2. token verifies (signature and validity window)
//! 3. account exists and is active
//! 4. linked staff profile exists and is in active employment
//!
//! [`optional_authenticate`] runs the same steps but never rejects; on any failure
//! the request continues without a principal.
//!
//! Handlers and gates read the principal back through [`AuthUser`] (required) or
//! [`MaybeAuthUser`] (optional).

use std::collections::BTreeSet;
use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};
use serde::Serialize;
use tracing::{debug, error, warn};

use hms_core::AppError;

use crate::accounts::{PrincipalAccount, StaffProfile};
use crate::state::AppState;

/// Message for a missing, malformed, expired or forged credential.
pub const NOT_AUTHORIZED: &str = "Not authorized to access this route";
/// Message for a valid token whose account is gone or deactivated.
pub const ACCOUNT_INACTIVE: &str = "Account not found or inactive";
/// Message for an account whose staff profile is gone or not actively employed.
pub const PROFILE_INACTIVE: &str = "Profile not found or inactive";

/// The authenticated identity attached to a request.
///
/// Roles and permissions are taken from the account directory at request time,
/// not from the token, so changes to an account apply from the next request on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    pub account_id: String,
    pub linked_profile_id: String,
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub department: String,
    pub position: String,
    pub roles: BTreeSet<String>,
    pub permissions: BTreeSet<String>,
}

impl Principal {
    pub fn from_records(account: PrincipalAccount, profile: StaffProfile) -> Self {
        Self {
            account_id: account.account_id,
            linked_profile_id: account.linked_profile_id,
            username: account.username,
            email: account.email,
            display_name: profile.display_name,
            department: profile.department,
            position: profile.position,
            roles: account.roles.into_iter().collect(),
            permissions: account.permissions.into_iter().collect(),
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    /// True when the principal holds at least one of `roles`.
    pub fn has_any_role<R: AsRef<str>>(&self, roles: &[R]) -> bool {
        roles.iter().any(|r| self.has_role(r.as_ref()))
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();

    if scheme.eq_ignore_ascii_case("Bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

/// Runs the full resolution pipeline for one request.
pub async fn resolve_principal(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Principal, AppError> {
    let Some(token) = bearer_token(headers) else {
        debug!(reason = "missing credential", "Authentication failed");
        return Err(AppError::unauthorized(NOT_AUTHORIZED));
    };

    let verified = state.tokens.verify(token).map_err(|_| {
        debug!(reason = "invalid token", "Authentication failed");
        AppError::unauthorized(NOT_AUTHORIZED)
    })?;

    let account = state
        .accounts
        .find_active_account_by_id(&verified.principal_id)
        .await
        .map_err(AppError::internal)?
        .filter(|account| account.active)
        .ok_or_else(|| {
            debug!(
                account_id = %verified.principal_id,
                reason = "account inactive",
                "Authentication failed"
            );
            AppError::unauthorized(ACCOUNT_INACTIVE)
        })?;

    let profile = state
        .accounts
        .find_active_profile_by_id(&account.linked_profile_id)
        .await
        .map_err(AppError::internal)?
        .filter(StaffProfile::is_active)
        .ok_or_else(|| {
            debug!(
                account_id = %account.account_id,
                reason = "profile inactive",
                "Authentication failed"
            );
            AppError::unauthorized(PROFILE_INACTIVE)
        })?;

    Ok(Principal::from_records(account, profile))
}

/// Fail-closed authentication.
///
/// # Usage with axum::middleware::from_fn_with_state
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/access", get(handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));
/// ```
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let resolved = resolve_principal(&state, req.headers()).await;

    match resolved {
        Ok(principal) => {
            req.extensions_mut().insert(principal);
            Ok(next.run(req).await)
        }
        Err(err) => {
            if err.status.is_client_error() {
                warn!(
                    method = %req.method(),
                    path = %req.uri().path(),
                    error = %err.error,
                    "Request rejected by authentication"
                );
            }
            Err(err)
        }
    }
}

/// Best-effort authentication for routes that serve anonymous callers too.
///
/// Never rejects. Handlers behind it must branch on [`MaybeAuthUser`] and must not
/// expose anything that requires authorization.
pub async fn optional_authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let resolved = resolve_principal(&state, req.headers()).await;

    match resolved {
        Ok(principal) => {
            req.extensions_mut().insert(principal);
        }
        // A 5xx dropped here never reaches `AppError::into_response`.
        Err(err) if err.status.is_server_error() => {
            error!(
                method = %req.method(),
                path = %req.uri().path(),
                error = ?err.error,
                "Account lookup failed, continuing without principal"
            );
        }
        Err(err) => {
            debug!(error = %err.error, "Continuing without principal");
        }
    }

    next.run(req).await
}

/// Extractor for routes behind [`authenticate`]. Rejects with 401 when no
/// principal was resolved.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Principal);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| AppError::unauthorized(NOT_AUTHORIZED))
    }
}

/// Extractor for routes behind [`optional_authenticate`].
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<Principal>);

impl<S> FromRequestParts<S> for MaybeAuthUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthUser(parts.extensions.get::<Principal>().cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::EmploymentStatus;
    use axum::http::HeaderValue;

    fn create_test_principal(roles: &[&str], permissions: &[&str]) -> Principal {
        let account = PrincipalAccount {
            account_id: "u1".to_string(),
            linked_profile_id: "p1".to_string(),
            username: "jdoe".to_string(),
            email: "jdoe@hospital.test".to_string(),
            active: true,
            roles: roles.iter().map(|r| r.to_string()).collect(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        };
        let profile = StaffProfile {
            profile_id: "p1".to_string(),
            display_name: "Jane Doe".to_string(),
            department: "Cardiology".to_string(),
            position: "Consultant".to_string(),
            employment_status: EmploymentStatus::Active,
        };
        Principal::from_records(account, profile)
    }

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token() {
        assert_eq!(bearer_token(&headers_with("Bearer abc.def.ghi")), Some("abc.def.ghi"));
        assert_eq!(bearer_token(&headers_with("bearer abc")), Some("abc"));
        assert_eq!(bearer_token(&headers_with("Basic dXNlcjpwYXNz")), None);
        assert_eq!(bearer_token(&headers_with("Bearer ")), None);
        assert_eq!(bearer_token(&headers_with("abc.def.ghi")), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_principal_from_records() {
        let principal = create_test_principal(&["doctor", "doctor"], &["patients:read"]);

        assert_eq!(principal.account_id, "u1");
        assert_eq!(principal.linked_profile_id, "p1");
        assert_eq!(principal.display_name, "Jane Doe");
        assert_eq!(principal.department, "Cardiology");
        assert_eq!(principal.roles.len(), 1);
    }

    #[test]
    fn test_has_any_role() {
        let principal = create_test_principal(&["nurse"], &[]);

        assert!(principal.has_any_role(&["nurse"]));
        assert!(principal.has_any_role(&["doctor", "nurse"]));
        assert!(!principal.has_any_role(&["doctor", "admin"]));
        assert!(!principal.has_any_role::<&str>(&[]));
    }

    #[test]
    fn test_principal_serializes_camel_case() {
        let principal = create_test_principal(&["admin"], &[]);
        let json = serde_json::to_value(&principal).unwrap();

        assert_eq!(json["accountId"], "u1");
        assert_eq!(json["linkedProfileId"], "p1");
        assert_eq!(json["displayName"], "Jane Doe");
        assert_eq!(json["roles"], serde_json::json!(["admin"]));
    }
}
