//! Account directory boundary.
//!
//! The account directory owns staff accounts and their linked employment profiles.
//! This crate only reads from it: one lookup for the account named by a session
//! token, one for the profile that account links to. Lookups are independent
//! reads with no transaction and no cross-request ordering.
//!
//! - [`model`]: [`PrincipalAccount`], [`StaffProfile`], [`EmploymentStatus`]
//! - [`postgres`]: [`PgAccountDirectory`], the production implementation
//! - `memory`: `InMemoryAccountDirectory`, available with the `test-utils` feature

pub mod model;
pub mod postgres;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;

use async_trait::async_trait;

pub use model::{EmploymentStatus, PrincipalAccount, StaffProfile};
pub use postgres::PgAccountDirectory;

#[cfg(any(test, feature = "test-utils"))]
pub use memory::InMemoryAccountDirectory;

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("account directory query failed: {0}")]
    Database(#[from] sqlx::Error),
    #[error("account directory returned an invalid record: {0}")]
    InvalidRecord(String),
}

/// Read-only view of the account directory used by the authentication pipeline.
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    /// Returns the account with `id` if it exists and is active.
    async fn find_active_account_by_id(
        &self,
        id: &str,
    ) -> Result<Option<PrincipalAccount>, DirectoryError>;

    /// Returns the staff profile with `id` if it exists and is in active employment.
    async fn find_active_profile_by_id(
        &self,
        id: &str,
    ) -> Result<Option<StaffProfile>, DirectoryError>;
}
