//! Qualified name → record descriptor resolution.

use std::sync::Arc;

use indexmap::IndexMap;
use structsmith_core::qualified_name;
use structsmith_ir::{Catalog, RecordDescriptor};

use crate::{CatalogCache, CatalogSource, Error, Result};

/// Resolves records from package catalogs.
///
/// Catalogs are loaded through the [`CatalogSource`] once per package and
/// kept in the resolver's [`CatalogCache`]. A failed load is not cached and
/// is retried on the next call.
#[derive(Debug)]
pub struct Resolver<S> {
    source: S,
    cache: CatalogCache,
}

impl<S: CatalogSource> Resolver<S> {
    /// Create a resolver with an empty cache.
    pub fn new(source: S) -> Self {
        Self::with_cache(source, CatalogCache::new())
    }

    /// Create a resolver that starts from an existing cache.
    pub fn with_cache(source: S, cache: CatalogCache) -> Self {
        Self { source, cache }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn cache(&self) -> &CatalogCache {
        &self.cache
    }

    /// Forget every loaded catalog.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Give back the cache, e.g. to hand it to another resolver.
    pub fn into_cache(self) -> CatalogCache {
        self.cache
    }

    /// Get the catalog of `package`, loading it on first use.
    pub fn catalog(&mut self, package: &str) -> Result<Arc<Catalog>> {
        if let Some(catalog) = self.cache.get(package) {
            tracing::trace!(package, "catalog cache hit");
            return Ok(catalog);
        }

        let catalog = self.source.load_catalog(package)?;
        tracing::debug!(
            package,
            version = catalog.version.as_deref().unwrap_or("unknown"),
            types = catalog.types.len(),
            "loaded catalog"
        );
        Ok(self.cache.insert(package, catalog))
    }

    /// Qualified names of every record in `package`, in catalog order.
    pub fn interfaces(&mut self, package: &str) -> Result<Vec<String>> {
        let catalog = self.catalog(package)?;
        Ok(catalog.records().map(|r| r.fqn.clone()).collect())
    }

    /// Resolve `fqn` to a record descriptor.
    ///
    /// With `merge_ancestors`, the fields and methods of every ancestor are
    /// flattened into the result: parents are resolved depth-first in
    /// declaration order, a later parent overwrites an earlier one on name
    /// conflicts, and the record's own members always win. The result keeps
    /// the record's own identity.
    pub fn resolve(&mut self, fqn: &str, merge_ancestors: bool) -> Result<RecordDescriptor> {
        if merge_ancestors {
            self.resolve_merged(fqn, &mut Vec::new())
        } else {
            self.load_record(fqn)
        }
    }

    fn load_record(&mut self, fqn: &str) -> Result<RecordDescriptor> {
        if let Some(reason) = qualified_name::validate(fqn) {
            return Err(Error::InvalidQualifiedName {
                fqn: fqn.to_string(),
                reason,
            });
        }

        let package = qualified_name::package(fqn);
        let catalog = self.catalog(package)?;
        let candidate = catalog.types.get(fqn).ok_or_else(|| Error::NotFound {
            fqn: fqn.to_string(),
            package: package.to_string(),
        })?;

        candidate
            .as_record()
            .cloned()
            .ok_or_else(|| Error::KindMismatch {
                fqn: fqn.to_string(),
                kind: candidate.kind().to_string(),
            })
    }

    fn resolve_merged(&mut self, fqn: &str, stack: &mut Vec<String>) -> Result<RecordDescriptor> {
        if let Some(start) = stack.iter().position(|seen| seen == fqn) {
            let mut chain = stack[start..].to_vec();
            chain.push(fqn.to_string());
            return Err(Error::InheritanceCycle { chain });
        }

        let record = self.load_record(fqn)?;
        if record.parents.is_empty() {
            return Ok(record);
        }

        tracing::trace!(fqn, parents = ?record.parents, "merging ancestors");
        stack.push(fqn.to_string());

        let mut fields = IndexMap::new();
        let mut methods = IndexMap::new();
        for parent in &record.parents {
            let inherited = self.resolve_merged(parent, stack)?;
            for field in inherited.fields {
                fields.insert(field.name.clone(), field);
            }
            for method in inherited.methods {
                methods.insert(method.name.clone(), method);
            }
        }

        stack.pop();

        for field in &record.fields {
            fields.insert(field.name.clone(), field.clone());
        }
        for method in &record.methods {
            methods.insert(method.name.clone(), method.clone());
        }

        Ok(RecordDescriptor {
            fields: fields.into_values().collect(),
            methods: methods.into_values().collect(),
            ..record
        })
    }
}
