//! Fluent construction of record field sets.
//!
//! A [`Struct`] starts from a base record (resolved from a catalog, given
//! explicitly, or empty) and derives a new field set through a sequence of
//! merge, override, rename, filter and map operations. Its current state is
//! read back with [`Struct::spec`].

mod error;
mod sources;
mod structure;

pub use error::StructError;
pub use sources::{HasFields, HasStructSpec};
pub use structure::{EMPTY_FQN, Struct};
