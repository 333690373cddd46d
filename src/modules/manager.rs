//! Module manager.
//!
//! The manager holds the authoritative catalog of feature modules and their
//! declared dependencies, and drives registration at startup.
//!
//! The catalog is written by hand in an order that already satisfies every
//! dependency. The manager does not rely on that: [`ModuleManager::registration_order`]
//! recomputes the order with Kahn's algorithm, breaking ties by catalog position so
//! a valid hand-written order comes out unchanged, and rejects duplicate names,
//! unknown dependencies, and cycles before anything is mounted. The registry's own
//! precondition check stays in place behind it.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use axum::Router;
use tracing::{error, info};

use crate::registry::{ModuleDescriptor, ModuleInfo, ModuleRegistry, RegistryError};

/// Static description of a feature module.
pub struct ModuleSpec<S> {
    pub name: &'static str,
    pub path: &'static str,
    pub dependencies: &'static [&'static str],
    /// Builds the module's router from the shared state.
    pub build: fn(&S) -> Router<S>,
}

impl<S> ModuleSpec<S> {
    pub const fn new(
        name: &'static str,
        path: &'static str,
        dependencies: &'static [&'static str],
        build: fn(&S) -> Router<S>,
    ) -> Self {
        Self {
            name,
            path,
            dependencies,
            build,
        }
    }

    pub fn info(&self) -> ModuleInfo {
        ModuleInfo {
            name: self.name.to_string(),
            path: self.path.to_string(),
            dependencies: self.dependencies.iter().map(|d| d.to_string()).collect(),
        }
    }

    fn descriptor(&self, state: &S) -> ModuleDescriptor<S> {
        ModuleDescriptor::new(self.name, self.path, (self.build)(state))
            .depends_on(self.dependencies.iter().copied())
    }
}

pub struct ModuleManager<S> {
    catalog: Vec<ModuleSpec<S>>,
}

impl<S> ModuleManager<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn with_catalog(catalog: Vec<ModuleSpec<S>>) -> Self {
        Self { catalog }
    }

    /// Name, path and dependencies of every module, in catalog order.
    pub fn inventory(&self) -> Vec<ModuleInfo> {
        self.catalog.iter().map(ModuleSpec::info).collect()
    }

    /// Computes a registration order in which every module follows its dependencies.
    pub fn registration_order(&self) -> Result<Vec<&ModuleSpec<S>>, RegistryError> {
        let mut index: HashMap<&str, usize> = HashMap::with_capacity(self.catalog.len());
        for (position, spec) in self.catalog.iter().enumerate() {
            if index.insert(spec.name, position).is_some() {
                return Err(RegistryError::DuplicateModule(spec.name.to_string()));
            }
        }

        let count = self.catalog.len();
        let mut in_degree = vec![0usize; count];
        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); count];

        for (position, spec) in self.catalog.iter().enumerate() {
            let mut seen = HashSet::new();
            for dependency in spec.dependencies.iter().copied() {
                if !seen.insert(dependency) {
                    continue;
                }
                let Some(&provider) = index.get(dependency) else {
                    return Err(RegistryError::MissingDependency {
                        module: spec.name.to_string(),
                        dependency: dependency.to_string(),
                    });
                };
                in_degree[position] += 1;
                dependents[provider].push(position);
            }
        }

        // Min-heap on catalog position keeps the result stable.
        let mut ready: BinaryHeap<Reverse<usize>> = (0..count)
            .filter(|&position| in_degree[position] == 0)
            .map(Reverse)
            .collect();
        let mut order = Vec::with_capacity(count);

        while let Some(Reverse(position)) = ready.pop() {
            order.push(&self.catalog[position]);
            for &dependent in &dependents[position] {
                in_degree[dependent] -= 1;
                if in_degree[dependent] == 0 {
                    ready.push(Reverse(dependent));
                }
            }
        }

        if order.len() < count {
            let blocked = (0..count)
                .filter(|&position| in_degree[position] > 0)
                .map(|position| self.catalog[position].name.to_string())
                .collect();
            return Err(RegistryError::CyclicDependency(blocked));
        }

        Ok(order)
    }

    /// Registers every module with a fresh registry.
    ///
    /// Any error aborts the bootstrap; the caller must not serve traffic with it.
    pub fn bootstrap(&self, state: &S) -> Result<ModuleRegistry<S>, RegistryError> {
        let order = self.registration_order().inspect_err(|err| {
            error!(error = %err, "Module catalog is inconsistent");
        })?;

        let mut registry = ModuleRegistry::new();
        for spec in order {
            registry.register(spec.descriptor(state)).inspect_err(|err| {
                error!(module = spec.name, error = %err, "Module registration failed");
            })?;
        }

        info!(modules = registry.len(), "Module graph bootstrapped");

        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;

    fn stub(_: &()) -> Router<()> {
        Router::new().route("/health", get(|| async { "ok" }))
    }

    fn spec(
        name: &'static str,
        path: &'static str,
        dependencies: &'static [&'static str],
    ) -> ModuleSpec<()> {
        ModuleSpec::new(name, path, dependencies, stub)
    }

    fn order_of(manager: &ModuleManager<()>) -> Vec<&'static str> {
        manager
            .registration_order()
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect()
    }

    #[test]
    fn test_valid_hand_order_is_preserved() {
        let manager = ModuleManager::with_catalog(vec![
            spec("patients", "/api/patients", &[]),
            spec("appointments", "/api/appointments", &["patients"]),
            spec("clinical", "/api/clinical", &["patients", "appointments"]),
            spec("inventory", "/api/inventory", &[]),
            spec("pharmacy", "/api/pharmacy", &["clinical", "inventory"]),
        ]);

        assert_eq!(
            order_of(&manager),
            vec!["patients", "appointments", "clinical", "inventory", "pharmacy"]
        );
    }

    #[test]
    fn test_out_of_order_catalog_is_sorted() {
        let manager = ModuleManager::with_catalog(vec![
            spec("pharmacy", "/api/pharmacy", &["clinical", "inventory"]),
            spec("clinical", "/api/clinical", &["patients"]),
            spec("inventory", "/api/inventory", &[]),
            spec("patients", "/api/patients", &[]),
        ]);

        assert_eq!(
            order_of(&manager),
            vec!["inventory", "patients", "clinical", "pharmacy"]
        );
    }

    #[test]
    fn test_cycle_is_rejected() {
        let manager = ModuleManager::with_catalog(vec![
            spec("patients", "/api/patients", &[]),
            spec("a", "/api/a", &["b"]),
            spec("b", "/api/b", &["a"]),
            spec("c", "/api/c", &["b"]),
        ]);

        let err = manager.registration_order().map(|_| ()).unwrap_err();
        assert_eq!(
            err,
            RegistryError::CyclicDependency(vec!["a".into(), "b".into(), "c".into()])
        );
    }

    #[test]
    fn test_self_dependency_is_a_cycle() {
        let manager = ModuleManager::with_catalog(vec![spec("a", "/api/a", &["a"])]);

        assert!(matches!(
            manager.registration_order().map(|_| ()),
            Err(RegistryError::CyclicDependency(_))
        ));
    }

    #[test]
    fn test_unknown_dependency_is_rejected() {
        let manager = ModuleManager::with_catalog(vec![spec("c", "/api/c", &["z"])]);

        assert_eq!(
            manager.registration_order().map(|_| ()).unwrap_err(),
            RegistryError::MissingDependency {
                module: "c".into(),
                dependency: "z".into(),
            }
        );
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let manager = ModuleManager::with_catalog(vec![
            spec("a", "/api/a", &[]),
            spec("a", "/api/a2", &[]),
        ]);

        assert_eq!(
            manager.registration_order().map(|_| ()).unwrap_err(),
            RegistryError::DuplicateModule("a".into())
        );
    }

    #[test]
    fn test_bootstrap_registers_every_module() {
        let manager = ModuleManager::with_catalog(vec![
            spec("b", "/api/b", &["a"]),
            spec("a", "/api/a", &[]),
        ]);

        let registry = manager.bootstrap(&()).unwrap();

        let names: Vec<_> = registry.list().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(registry.get("b").unwrap().dependencies, vec!["a".to_string()]);
    }

    #[test]
    fn test_bootstrap_surfaces_path_errors() {
        let manager = ModuleManager::with_catalog(vec![
            spec("a", "/api/shared", &[]),
            spec("b", "/api/shared", &[]),
        ]);

        assert!(matches!(
            manager.bootstrap(&()).map(|_| ()),
            Err(RegistryError::PathConflict { .. })
        ));
    }

    #[test]
    fn test_inventory_follows_catalog_order() {
        let manager = ModuleManager::with_catalog(vec![
            spec("b", "/api/b", &["a"]),
            spec("a", "/api/a", &[]),
        ]);

        let inventory = manager.inventory();
        assert_eq!(inventory[0].name, "b");
        assert_eq!(inventory[0].dependencies, vec!["a".to_string()]);
        assert_eq!(inventory[1].path, "/api/a");
    }
}
