//! # HMS Core
//!
//! Core types shared by every crate of the HMS API.
//!
//! - [`errors`]: [`AppError`] and the uniform `{"success": false, "error": ...}` envelope
//! - [`roles`]: staff role names used by route gates
//! - [`permissions`]: fine-grained capability strings used by route gates
//!
//! # Example
//!
//! ```ignore
//! use hms_core::{AppError, roles, permissions};
//!
//! if !principal.has_permission(permissions::BILLING_READ) {
//!     return Err(AppError::forbidden("Insufficient permissions"));
//! }
//! ```

pub mod errors;
pub mod permissions;
pub mod roles;

pub use errors::{AppError, ErrorEnvelope};
