//! PostgreSQL-backed account directory.
//!
//! Reads two tables owned by the directory:
//!
//! ```text
//! accounts        (id, profile_id, username, email, is_active, roles TEXT[], permissions TEXT[])
//! staff_profiles  (id, display_name, department, position, employment_status)
//! ```

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::instrument;

use super::{AccountDirectory, DirectoryError, EmploymentStatus, PrincipalAccount, StaffProfile};

#[derive(Debug, FromRow)]
struct AccountRow {
    id: String,
    profile_id: String,
    username: String,
    email: String,
    is_active: bool,
    roles: Vec<String>,
    permissions: Vec<String>,
}

impl From<AccountRow> for PrincipalAccount {
    fn from(row: AccountRow) -> Self {
        Self {
            account_id: row.id,
            linked_profile_id: row.profile_id,
            username: row.username,
            email: row.email,
            active: row.is_active,
            roles: row.roles,
            permissions: row.permissions,
        }
    }
}

#[derive(Debug, FromRow)]
struct ProfileRow {
    id: String,
    display_name: String,
    department: String,
    position: String,
    employment_status: String,
}

impl TryFrom<ProfileRow> for StaffProfile {
    type Error = DirectoryError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        let employment_status = row
            .employment_status
            .parse::<EmploymentStatus>()
            .map_err(DirectoryError::InvalidRecord)?;

        Ok(Self {
            profile_id: row.id,
            display_name: row.display_name,
            department: row.department,
            position: row.position,
            employment_status,
        })
    }
}

#[derive(Clone, Debug)]
pub struct PgAccountDirectory {
    pool: PgPool,
}

impl PgAccountDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountDirectory for PgAccountDirectory {
    #[instrument(skip(self))]
    async fn find_active_account_by_id(
        &self,
        id: &str,
    ) -> Result<Option<PrincipalAccount>, DirectoryError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, profile_id, username, email, is_active, roles, permissions
            FROM accounts
            WHERE id = $1 AND is_active = TRUE
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PrincipalAccount::from))
    }

    #[instrument(skip(self))]
    async fn find_active_profile_by_id(
        &self,
        id: &str,
    ) -> Result<Option<StaffProfile>, DirectoryError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT id, display_name, department, position, employment_status
            FROM staff_profiles
            WHERE id = $1 AND employment_status = 'active'
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(StaffProfile::try_from).transpose()
    }
}
