//! # HMS API
//!
//! Backend core of a hospital management system: a set of feature modules
//! (patients, HR, appointments, clinical, inventory, pharmacy, laboratory,
//! radiology, billing) mounted behind a shared authentication and authorization
//! pipeline.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── accounts/     # Account directory boundary (Postgres, in-memory for tests)
//! ├── middleware/   # authenticate, optional_authenticate, role and permission gates
//! ├── registry/     # ModuleRegistry and the per-module health contract
//! ├── modules/      # ModuleManager and the hospital feature modules
//! ├── system/       # /api/system status and module inventory
//! ├── router.rs     # Application router
//! └── state.rs      # Shared AppState
//! ```
//!
//! Shared leaf concerns live in workspace crates:
//!
//! - `hms-core`: [`AppError`](hms_core::AppError), role and permission names
//! - `hms-config`: environment configuration
//! - `hms-auth`: session token issuing and verification
//! - `hms-db`: PostgreSQL pool
//!
//! ## Request pipeline
//!
//! A protected route runs `authenticate`, then each gate in the order it was
//! stacked, then the handler. Any step may end the request with the error
//! envelope `{"success": false, "error": "..."}`:
//!
//! | Status | When |
//! |--------|------|
//! | 401 | missing or invalid token, inactive account, inactive staff profile |
//! | 403 | role or permission mismatch |
//! | 500 | account directory failure (detail logged, never returned) |
//!
//! ## Startup
//!
//! [`router::init_router`] bootstraps every module through
//! [`ModuleManager`](modules::ModuleManager). An inconsistent module graph is a
//! fatal error: the binary exits before binding the listener.

pub mod accounts;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod registry;
pub mod router;
pub mod state;
pub mod system;
