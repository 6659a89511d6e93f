//! TypeScript renderer for structsmith.
//!
//! Turns a record (usually a [`Struct`](structsmith_codegen::Struct) builder
//! snapshot) into an `export interface` declaration, together with the
//! `import` lines needed for every named type its fields reference.
//!
//! # Usage
//!
//! ```
//! use structsmith_codegen::Struct;
//! use structsmith_codegen_typescript::{TypeScriptRenderer, TypeScriptRendererOptions};
//! use structsmith_ir::{Field, TypeRef};
//!
//! let mut builder = Struct::empty("my-pkg.MyOptions");
//! builder.add([Field::new("name", TypeRef::string()).optional()]);
//!
//! let renderer = TypeScriptRenderer::new(TypeScriptRendererOptions::default());
//! let text = renderer.render_struct(&builder);
//! assert!(text.contains("readonly name?: string;"));
//! ```
//!
//! # Generated Output
//!
//! - import lines, one per module, bare package names first
//! - a blank line
//! - the record's doc block and `export interface Name { ... }`
//!
//! [`InterfaceFile`] wraps the rendered text into a file with a
//! generated-file marker, for use with
//! [`GeneratedFile::write`](structsmith_core::GeneratedFile::write).

mod renderer;
mod type_mapper;

pub mod ast;
pub mod files;

pub use ast::{Import, Interface, InterfaceField, docs_to_lines};
pub use files::{GENERATED_MARKER, InterfaceFile};
pub use renderer::{TypeScriptRenderer, TypeScriptRendererOptions, import_module};
pub use type_mapper::TypeScriptTypeMapper;
