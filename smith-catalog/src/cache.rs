//! Per-package catalog memoization.

use std::{collections::HashMap, sync::Arc};

use structsmith_ir::Catalog;

/// Loaded catalogs keyed by package id.
///
/// Populated lazily by the [`Resolver`](crate::Resolver); the first
/// successful load of a package wins for the lifetime of the cache. Not
/// meant for concurrent writers: parallel builds should each own a cache.
#[derive(Debug, Clone, Default)]
pub struct CatalogCache {
    catalogs: HashMap<String, Arc<Catalog>>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the catalog of `package` if it was loaded before.
    pub fn get(&self, package: &str) -> Option<Arc<Catalog>> {
        self.catalogs.get(package).cloned()
    }

    /// Store a catalog, keeping an earlier one for the same package.
    pub fn insert(&mut self, package: impl Into<String>, catalog: Catalog) -> Arc<Catalog> {
        Arc::clone(
            self.catalogs
                .entry(package.into())
                .or_insert_with(|| Arc::new(catalog)),
        )
    }

    pub fn contains(&self, package: &str) -> bool {
        self.catalogs.contains_key(package)
    }

    /// Forget every loaded catalog.
    pub fn clear(&mut self) {
        self.catalogs.clear();
    }

    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }
}
