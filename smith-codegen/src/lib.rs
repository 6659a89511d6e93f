//! Struct builder and shared code generation utilities for structsmith.
//!
//! This crate provides the language-agnostic parts of the pipeline, used by
//! language-specific renderers (e.g., `structsmith-codegen-typescript`).
//!
//! # Module Organization
//!
//! - [`record`] - The fluent [`Struct`] builder that derives a field set from a base record
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Output management (ImportCollector)

pub mod builder;
pub mod generation;
pub mod record;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use generation::ImportCollector;
pub use record::{HasFields, HasStructSpec, Struct, StructError};
