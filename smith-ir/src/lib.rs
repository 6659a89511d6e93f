//! Record and type-reference model for structsmith.
//!
//! This crate holds the passive data definitions shared by every stage of
//! the pipeline:
//!
//! ```text
//! catalog (.jsii JSON) → smith-catalog (resolve) → smith-codegen (build) → smith-codegen-typescript (render)
//! ```
//!
//! The types are:
//! - Serde (de)serializable in the `.jsii` catalog layout
//! - Language-agnostic (rendering lives in the codegen crates)
//! - Plain owned data, so cloning a value never aliases another

mod catalog;
mod docs;
mod record;
mod types;
mod update;

pub use catalog::{Catalog, OpaqueType, TypeDescriptor};
pub use docs::{Docs, Stability};
pub use record::{Field, Method, RecordDescriptor};
pub use types::{CollectionKind, CollectionTypeRef, PrimitiveType, TypeRef, UnionTypeRef};
pub use update::{DocsUpdate, FieldUpdate};
