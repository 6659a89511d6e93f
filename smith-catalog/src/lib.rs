//! Type catalog loading and interface resolution.
//!
//! A [`Resolver`] turns a qualified name into a [`RecordDescriptor`]: it asks
//! a [`CatalogSource`] for the owning package's catalog (memoized in a
//! [`CatalogCache`]), finds the record, and optionally flattens its
//! inheritance hierarchy into a single field set.
//!
//! ```ignore
//! use structsmith_catalog::{FsCatalogSource, Resolver};
//!
//! let mut resolver = Resolver::new(FsCatalogSource::new("."));
//! let options = resolver.resolve("projen.typescript.ProjenrcOptions", true)?;
//! ```
//!
//! [`RecordDescriptor`]: structsmith_ir::RecordDescriptor

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod cache;
mod error;
mod resolver;
mod source;

pub use cache::CatalogCache;
pub use error::{Error, Result};
pub use resolver::Resolver;
pub use source::{CATALOG_FILE, CatalogSource, FsCatalogSource, MODULES_DIR, MemoryCatalogSource};
