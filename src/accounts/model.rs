//! Account and profile records as stored by the account directory.

use serde::{Deserialize, Serialize};

/// A login account. Roles and permissions are stored on the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrincipalAccount {
    pub account_id: String,
    pub linked_profile_id: String,
    pub username: String,
    pub email: String,
    pub active: bool,
    pub roles: Vec<String>,
    pub permissions: Vec<String>,
}

/// Employment state of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    Active,
    OnLeave,
    Suspended,
    Terminated,
}

impl std::str::FromStr for EmploymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(EmploymentStatus::Active),
            "on_leave" => Ok(EmploymentStatus::OnLeave),
            "suspended" => Ok(EmploymentStatus::Suspended),
            "terminated" => Ok(EmploymentStatus::Terminated),
            other => Err(format!("unknown employment status: {other}")),
        }
    }
}

impl EmploymentStatus {
    /// Only staff in active employment may authenticate.
    pub fn is_active(self) -> bool {
        matches!(self, EmploymentStatus::Active)
    }
}

/// The staff profile linked to an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffProfile {
    pub profile_id: String,
    pub display_name: String,
    pub department: String,
    pub position: String,
    pub employment_status: EmploymentStatus,
}

impl StaffProfile {
    pub fn is_active(&self) -> bool {
        self.employment_status.is_active()
    }
}
