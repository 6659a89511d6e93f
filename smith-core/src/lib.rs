//! Core utilities and types for structsmith.
//!
//! This crate provides the qualified-name helpers, ordering rules and file
//! primitives shared across the structsmith crates.

mod file;
mod paths;
mod utils;

pub mod qualified_name;

// File operations
pub use file::{GeneratedFile, WriteResult};
// Path helpers
pub use paths::{DECLARATION_EXTENSION, fqn_to_path, relative_import};
// Ordering utilities
pub use utils::{compare_lower_case, compare_module_specifier};
