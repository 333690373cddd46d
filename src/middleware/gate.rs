//! Tower layer that runs a post-authentication check before the inner service.
//!
//! A [`GateLayer`] wraps a route with one [`Gate`]. The gate reads the
//! [`Principal`] stored by [`authenticate`](super::auth::authenticate) and either
//! forwards the request untouched or answers with the error envelope; the inner
//! service (and therefore the handler) never sees a rejected request.
//!
//! Gates are built with [`authorize`](super::role::authorize) and
//! [`check_permission`](super::permission::check_permission) and stacked per route
//! in request order:
//!
//! ```rust,ignore
//! Router::new()
//!     .route("/access", get(handler))
//!     .route_layer(
//!         ServiceBuilder::new()
//!             .layer(middleware::from_fn_with_state(state.clone(), authenticate))
//!             .layer(authorize([roles::ADMIN, roles::ACCOUNTANT]))
//!             .layer(check_permission(permissions::BILLING_READ)),
//!     )
//! ```

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::{
    extract::Request,
    response::{IntoResponse, Response},
};
use tower::{Layer, Service};
use tracing::warn;

use hms_core::AppError;

use super::auth::Principal;
use super::permission::require_permission;
use super::role::require_any_role;

/// A single authorization decision attached to a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    /// Passes when the principal holds at least one of the listed roles.
    AnyRole(Arc<[String]>),
    /// Passes when the principal holds the named permission.
    Permission(Arc<str>),
}

impl Gate {
    /// Evaluates the gate against the principal of the current request, if any.
    pub fn check(&self, principal: Option<&Principal>) -> Result<(), AppError> {
        match self {
            Gate::AnyRole(roles) => require_any_role(principal, &roles[..]),
            Gate::Permission(permission) => require_permission(principal, permission),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GateLayer {
    gate: Gate,
}

impl GateLayer {
    pub fn new(gate: Gate) -> Self {
        Self { gate }
    }

    pub fn gate(&self) -> &Gate {
        &self.gate
    }
}

impl<S> Layer<S> for GateLayer {
    type Service = GateService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        GateService {
            inner,
            gate: self.gate.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GateService<S> {
    inner: S,
    gate: Gate,
}

impl<S> Service<Request> for GateService<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        if let Err(err) = self.gate.check(req.extensions().get::<Principal>()) {
            warn!(
                method = %req.method(),
                path = %req.uri().path(),
                gate = ?self.gate,
                status = %err.status.as_u16(),
                "Request rejected by gate"
            );
            return Box::pin(async move { Ok(err.into_response()) });
        }

        // The instance that was driven to readiness handles this call.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        Box::pin(async move { inner.call(req).await })
    }
}
