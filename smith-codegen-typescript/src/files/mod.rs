//! TypeScript file generators.

mod interface_file;

pub use interface_file::{GENERATED_MARKER, InterfaceFile};
