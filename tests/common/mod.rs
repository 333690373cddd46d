#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::Utc;
use http_body_util::BodyExt;
use tower::ServiceExt;

use hms::accounts::{
    AccountDirectory, DirectoryError, EmploymentStatus, InMemoryAccountDirectory,
    PrincipalAccount, StaffProfile,
};
use hms::router::init_router;
use hms::state::AppState;
use hms_config::{CorsConfig, JwtConfig};

/// Well-known account ids seeded by [`seeded_directory`]
pub mod accounts {
    pub const ADMIN: &str = "u-admin";
    pub const ADMIN_WITHOUT_PERMISSIONS: &str = "u-admin-bare";
    pub const DOCTOR: &str = "u-doctor";
    pub const NURSE: &str = "u-nurse";
    pub const ACCOUNTANT: &str = "u-accountant";
    pub const DEACTIVATED: &str = "u-deactivated";
    pub const ON_LEAVE: &str = "u-on-leave";
    pub const NO_PROFILE: &str = "u-no-profile";
    pub const UNKNOWN: &str = "u-unknown";
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-key-at-least-32-characters-long".to_string(),
        token_expiry: 86_400,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn account(id: &str, roles: &[&str], permissions: &[&str]) -> PrincipalAccount {
    PrincipalAccount {
        account_id: id.to_string(),
        linked_profile_id: format!("p-{id}"),
        username: id.trim_start_matches("u-").to_string(),
        email: format!("{id}@hospital.test"),
        active: true,
        roles: strings(roles),
        permissions: strings(permissions),
    }
}

fn profile(account_id: &str, status: EmploymentStatus) -> StaffProfile {
    StaffProfile {
        profile_id: format!("p-{account_id}"),
        display_name: format!("Staff {account_id}"),
        department: "General".to_string(),
        position: "Staff".to_string(),
        employment_status: status,
    }
}

/// A directory with one account per scenario the pipeline distinguishes.
pub fn seeded_directory() -> InMemoryAccountDirectory {
    let all_reads = [
        "patients:read",
        "hr:read",
        "appointments:read",
        "clinical:read",
        "inventory:read",
        "pharmacy:read",
        "laboratory:read",
        "radiology:read",
        "billing:read",
    ];

    let mut directory = InMemoryAccountDirectory::new()
        .with_account(account(accounts::ADMIN, &["admin"], &all_reads))
        .with_account(account(accounts::ADMIN_WITHOUT_PERMISSIONS, &["admin"], &[]))
        .with_account(account(
            accounts::DOCTOR,
            &["doctor"],
            &["patients:read", "appointments:read", "clinical:read", "clinical:write"],
        ))
        .with_account(account(
            accounts::NURSE,
            &["nurse"],
            &["patients:read", "clinical:read", "billing:read"],
        ))
        .with_account(account(
            accounts::ACCOUNTANT,
            &["accountant"],
            &["billing:read", "billing:void_charge", "patients:read"],
        ))
        .with_account(PrincipalAccount {
            active: false,
            ..account(accounts::DEACTIVATED, &["doctor"], &["patients:read"])
        })
        .with_account(account(accounts::ON_LEAVE, &["doctor"], &["patients:read"]))
        .with_account(account(accounts::NO_PROFILE, &["doctor"], &["patients:read"]));

    for id in [
        accounts::ADMIN,
        accounts::ADMIN_WITHOUT_PERMISSIONS,
        accounts::DOCTOR,
        accounts::NURSE,
        accounts::ACCOUNTANT,
        accounts::DEACTIVATED,
    ] {
        directory = directory.with_profile(profile(id, EmploymentStatus::Active));
    }

    directory.with_profile(profile(accounts::ON_LEAVE, EmploymentStatus::OnLeave))
}

/// A directory whose connection pool is exhausted.
pub struct UnavailableDirectory;

#[async_trait]
impl AccountDirectory for UnavailableDirectory {
    async fn find_active_account_by_id(
        &self,
        _id: &str,
    ) -> Result<Option<PrincipalAccount>, DirectoryError> {
        Err(DirectoryError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find_active_profile_by_id(
        &self,
        _id: &str,
    ) -> Result<Option<StaffProfile>, DirectoryError> {
        Err(DirectoryError::Database(sqlx::Error::PoolTimedOut))
    }
}

pub fn test_state(directory: Arc<dyn AccountDirectory>) -> AppState {
    AppState::new(&test_jwt_config(), CorsConfig::default(), directory)
}

pub fn setup_test_app() -> Router {
    init_router(test_state(Arc::new(seeded_directory()))).unwrap()
}

pub fn setup_test_app_with(directory: Arc<dyn AccountDirectory>) -> Router {
    init_router(test_state(directory)).unwrap()
}

/// Token for `account_id`, signed with the test secret. The roles in the token
/// are ignored by the server, which reads them from the directory.
pub fn token_for(account_id: &str) -> String {
    token_issued_at(account_id, Utc::now().timestamp())
}

pub fn token_issued_at(account_id: &str, issued_at: i64) -> String {
    let state = test_state(Arc::new(InMemoryAccountDirectory::new()));
    state.tokens.issue_at(account_id, &[], issued_at).unwrap()
}

/// Sends a GET request and returns the status with the decoded JSON body.
pub async fn get_json(
    app: Router,
    uri: &str,
    token: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut request = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let response = app
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);

    (status, body)
}

/// Log output captured by a thread-local subscriber, see [`capture_logs`].
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<std::sync::Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Records everything at info and above on the current thread until the guard drops.
pub fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();

    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();

    (logs, tracing::subscriber::set_default(subscriber))
}
