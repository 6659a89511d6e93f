//! TypeScript AST nodes used by the renderer.

mod docs;
mod imports;
mod interface;

pub use docs::docs_to_lines;
pub use imports::Import;
pub use interface::{Interface, InterfaceField};
