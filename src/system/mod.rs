//! Service-level endpoints mounted at `/api/system`.

pub mod controller;
pub mod model;
pub mod router;
