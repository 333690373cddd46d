//! Middleware for request authentication and authorization.
//!
//! # Modules
//!
//! - [`auth`]: [`authenticate`](auth::authenticate) /
//!   [`optional_authenticate`](auth::optional_authenticate) and the
//!   [`AuthUser`](auth::AuthUser) / [`MaybeAuthUser`](auth::MaybeAuthUser) extractors
//! - [`role`]: the role gate, [`authorize`](role::authorize)
//! - [`permission`]: the capability gate, [`check_permission`](permission::check_permission)
//! - [`gate`]: the tower layer both gates are built on
//!
//! # Request Flow
//!
//! ```text
//! Unauthenticated ──authenticate──▶ Authenticated ──authorize*──▶ RoleChecked
//!        │                               │                            │
//!        ▼                               ▼                  check_permission*
//!     Rejected (401)                 Rejected (403)                   ▼
//!                                                          Authorized (handler runs)
//! ```
//!
//! Each gate either forwards the request or ends it. Nothing is retried and the
//! handler never observes a partially authorized request.

pub mod auth;
pub mod gate;
pub mod permission;
pub mod role;

pub use auth::{AuthUser, MaybeAuthUser, Principal, authenticate, optional_authenticate};
pub use permission::check_permission;
pub use role::authorize;
