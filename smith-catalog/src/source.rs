//! Where catalogs come from.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use structsmith_ir::Catalog;

use crate::{Error, Result};

/// File name of a package's type catalog.
pub const CATALOG_FILE: &str = ".jsii";

/// Directory that holds installed packages.
pub const MODULES_DIR: &str = "node_modules";

/// Turns a package id into that package's type catalog.
pub trait CatalogSource {
    /// Load the catalog of `package`, or fail if it cannot be located.
    fn load_catalog(&self, package: &str) -> Result<Catalog>;
}

impl<T: CatalogSource + ?Sized> CatalogSource for &T {
    fn load_catalog(&self, package: &str) -> Result<Catalog> {
        (**self).load_catalog(package)
    }
}

impl<T: CatalogSource + ?Sized> CatalogSource for Box<T> {
    fn load_catalog(&self, package: &str) -> Result<Catalog> {
        (**self).load_catalog(package)
    }
}

/// Loads catalogs from the filesystem.
///
/// Two strategies are tried in order:
/// 1. named-package resolution: `node_modules/<package>/.jsii` in the root
///    directory or any of its ancestors, then `<search path>/<package>/.jsii`
///    for each extra search path;
/// 2. a `.jsii` file directly in the root directory, accepted only when it
///    belongs to the requested package.
///
/// If both fail, the returned [`Error::AggregateLoad`] carries both errors.
#[derive(Debug, Clone)]
pub struct FsCatalogSource {
    root: PathBuf,
    search_paths: Vec<PathBuf>,
}

impl FsCatalogSource {
    /// Create a source rooted at `root` (usually the project directory).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            search_paths: Vec::new(),
        }
    }

    /// Add an extra directory that contains packages.
    pub fn with_search_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.search_paths.push(path.into());
        self
    }

    /// Add several extra package directories.
    pub fn with_search_paths(mut self, paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        self.search_paths.extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Candidate catalog paths for named-package resolution, in lookup order.
    pub fn candidates(&self, package: &str) -> Vec<PathBuf> {
        let installed = self
            .root
            .ancestors()
            .map(|dir| dir.join(MODULES_DIR).join(package).join(CATALOG_FILE));
        let extra = self
            .search_paths
            .iter()
            .map(|dir| dir.join(package).join(CATALOG_FILE));
        installed.chain(extra).collect()
    }

    fn resolve_package(&self, package: &str) -> Result<Catalog> {
        let searched = self.candidates(package);
        match searched.iter().find(|path| path.is_file()) {
            Some(path) => read_catalog(path),
            None => Err(Error::PackageNotResolved {
                package: package.to_string(),
                searched,
            }),
        }
    }

    fn local_catalog(&self, package: &str) -> Result<Catalog> {
        let path = self.root.join(CATALOG_FILE);
        let catalog = read_catalog(&path)?;
        if catalog.name != package {
            return Err(Error::PackageMismatch {
                path,
                expected: package.to_string(),
                found: catalog.name,
            });
        }
        Ok(catalog)
    }
}

impl CatalogSource for FsCatalogSource {
    fn load_catalog(&self, package: &str) -> Result<Catalog> {
        let resolve_error = match self.resolve_package(package) {
            Ok(catalog) => return Ok(catalog),
            Err(e) => e,
        };
        tracing::debug!(package, error = %resolve_error, "falling back to local catalog");

        match self.local_catalog(package) {
            Ok(catalog) => Ok(catalog),
            Err(local_error) => Err(Error::AggregateLoad {
                package: package.to_string(),
                attempts: vec![resolve_error, local_error],
            }),
        }
    }
}

/// Read and parse a catalog file
fn read_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| Error::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Serves catalogs held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalogSource {
    catalogs: HashMap<String, Catalog>,
}

impl MemoryCatalogSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a catalog under its own package name.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.add(catalog);
        self
    }

    pub fn add(&mut self, catalog: Catalog) {
        self.catalogs.insert(catalog.name.clone(), catalog);
    }
}

impl CatalogSource for MemoryCatalogSource {
    fn load_catalog(&self, package: &str) -> Result<Catalog> {
        self.catalogs
            .get(package)
            .cloned()
            .ok_or_else(|| Error::PackageNotResolved {
                package: package.to_string(),
                searched: Vec::new(),
            })
    }
}
