//! Module registry.
//!
//! Owns the catalog of feature modules and composes their routers into one tree.
//! A module can only be registered once every module it depends on is already
//! present, so registration order is always a valid topological order and
//! dependency cycles cannot be expressed.
//!
//! The registry is an ordinary value: it is built during startup, consumed by
//! [`ModuleRegistry::into_router`], and never mutated while serving.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut registry = ModuleRegistry::new();
//!
//! registry.register(ModuleDescriptor::new("patients", "/api/patients", patients_router))?;
//! registry.register(
//!     ModuleDescriptor::new("appointments", "/api/appointments", appointments_router)
//!         .depends_on(["patients"]),
//! )?;
//!
//! let app = registry.into_router();
//! ```

pub mod health;

use axum::Router;
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("module '{0}' is already registered")]
    DuplicateModule(String),
    #[error("module '{module}' depends on '{dependency}', which is not registered")]
    MissingDependency { module: String, dependency: String },
    #[error("module '{module}' has an invalid mount path '{path}'")]
    InvalidMountPath { module: String, path: String },
    #[error("mount path '{path}' of module '{module}' overlaps module '{owner}'")]
    PathConflict {
        module: String,
        path: String,
        owner: String,
    },
    #[error("dependency cycle among modules: {}", .0.join(", "))]
    CyclicDependency(Vec<String>),
}

/// A feature module ready to be mounted.
pub struct ModuleDescriptor<S> {
    pub name: String,
    pub path: String,
    pub dependencies: Vec<String>,
    pub router: Router<S>,
}

impl<S> ModuleDescriptor<S> {
    pub fn new(name: impl Into<String>, path: impl Into<String>, router: Router<S>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            dependencies: Vec::new(),
            router,
        }
    }

    pub fn depends_on<I>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for dependency in dependencies {
            let dependency = dependency.into();
            if !self.dependencies.contains(&dependency) {
                self.dependencies.push(dependency);
            }
        }
        self
    }
}

/// Inventory entry for a registered module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ModuleInfo {
    pub name: String,
    pub path: String,
    pub dependencies: Vec<String>,
}

pub struct ModuleRegistry<S> {
    modules: Vec<ModuleInfo>,
    router: Router<S>,
}

impl<S> Default for ModuleRegistry<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> ModuleRegistry<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
            router: Router::new(),
        }
    }

    /// Validates `descriptor` and mounts its router under its path.
    ///
    /// On error nothing is mounted and the catalog is left as it was.
    pub fn register(&mut self, descriptor: ModuleDescriptor<S>) -> Result<(), RegistryError> {
        let ModuleDescriptor {
            name,
            path,
            dependencies,
            router,
        } = descriptor;

        if self.contains(&name) {
            return Err(RegistryError::DuplicateModule(name));
        }

        if !is_valid_mount_path(&path) {
            return Err(RegistryError::InvalidMountPath { module: name, path });
        }

        if let Some(owner) = self.modules.iter().find(|m| paths_overlap(&m.path, &path)) {
            return Err(RegistryError::PathConflict {
                module: name,
                path,
                owner: owner.name.clone(),
            });
        }

        if let Some(missing) = dependencies.iter().find(|d| !self.contains(d)) {
            return Err(RegistryError::MissingDependency {
                dependency: missing.clone(),
                module: name,
            });
        }

        self.router = std::mem::replace(&mut self.router, Router::new()).nest(&path, router);

        info!(module = %name, path = %path, dependencies = ?dependencies, "Module registered");

        self.modules.push(ModuleInfo {
            name,
            path,
            dependencies,
        });

        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ModuleInfo> {
        self.modules.iter().find(|m| m.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Registered modules, in registration order.
    pub fn list(&self) -> &[ModuleInfo] {
        &self.modules
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// The composed router of every registered module.
    pub fn router(&self) -> Router<S> {
        self.router.clone()
    }

    pub fn into_router(self) -> Router<S> {
        self.router
    }
}

/// Absolute, not the root, no trailing slash, no route parameters or wildcards.
fn is_valid_mount_path(path: &str) -> bool {
    path.len() > 1
        && path.starts_with('/')
        && !path.ends_with('/')
        && !path.contains("//")
        && !path.contains(['{', '}', '*', ':'])
}

/// Two mount paths overlap when they are equal or one is a segment prefix of the other.
fn paths_overlap(a: &str, b: &str) -> bool {
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    longer == shorter || longer.starts_with(&format!("{shorter}/"))
}
