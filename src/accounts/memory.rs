//! In-memory account directory for tests and local experiments.
//!
//! Seeded once through builder methods and read-only afterwards. Unlike the
//! PostgreSQL directory it stores inactive records too, so callers can exercise
//! the "exists but inactive" paths; the trait methods still only return active ones.

use std::collections::HashMap;

use async_trait::async_trait;

use super::{AccountDirectory, DirectoryError, PrincipalAccount, StaffProfile};

#[derive(Debug, Default, Clone)]
pub struct InMemoryAccountDirectory {
    accounts: HashMap<String, PrincipalAccount>,
    profiles: HashMap<String, StaffProfile>,
}

impl InMemoryAccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(mut self, account: PrincipalAccount) -> Self {
        self.accounts.insert(account.account_id.clone(), account);
        self
    }

    pub fn with_profile(mut self, profile: StaffProfile) -> Self {
        self.profiles.insert(profile.profile_id.clone(), profile);
        self
    }
}

#[async_trait]
impl AccountDirectory for InMemoryAccountDirectory {
    async fn find_active_account_by_id(
        &self,
        id: &str,
    ) -> Result<Option<PrincipalAccount>, DirectoryError> {
        Ok(self.accounts.get(id).filter(|a| a.active).cloned())
    }

    async fn find_active_profile_by_id(
        &self,
        id: &str,
    ) -> Result<Option<StaffProfile>, DirectoryError> {
        Ok(self.profiles.get(id).filter(|p| p.is_active()).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::EmploymentStatus;

    fn account(id: &str, active: bool) -> PrincipalAccount {
        PrincipalAccount {
            account_id: id.to_string(),
            linked_profile_id: format!("p-{id}"),
            username: id.to_string(),
            email: format!("{id}@hospital.test"),
            active,
            roles: vec![],
            permissions: vec![],
        }
    }

    fn profile(id: &str, employment_status: EmploymentStatus) -> StaffProfile {
        StaffProfile {
            profile_id: id.to_string(),
            display_name: "Test".to_string(),
            department: "Ward".to_string(),
            position: "Staff".to_string(),
            employment_status,
        }
    }

    #[tokio::test]
    async fn test_inactive_records_are_hidden() {
        let directory = InMemoryAccountDirectory::new()
            .with_account(account("u1", true))
            .with_account(account("u2", false))
            .with_profile(profile("p-u1", EmploymentStatus::Active))
            .with_profile(profile("p-u2", EmploymentStatus::Suspended));

        assert!(directory.find_active_account_by_id("u1").await.unwrap().is_some());
        assert!(directory.find_active_account_by_id("u2").await.unwrap().is_none());
        assert!(directory.find_active_account_by_id("u3").await.unwrap().is_none());
        assert!(directory.find_active_profile_by_id("p-u1").await.unwrap().is_some());
        assert!(directory.find_active_profile_by_id("p-u2").await.unwrap().is_none());
    }
}
