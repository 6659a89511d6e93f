//! `smith.toml` parsing and validation.
//!
//! A manifest names the project's package, how interfaces are rendered,
//! and one `[structs.<Name>]` table per interface to derive.
//!
//! ```
//! use std::str::FromStr;
//!
//! use structsmith_manifest::Manifest;
//!
//! let manifest = Manifest::from_str(r#"
//!     [project]
//!     name = "my-pkg"
//!
//!     [structs.MyOptions]
//!     mixins = ["projen.typescript.TypeScriptProjectOptions"]
//!     omit = ["sampleCode"]
//! "#).unwrap();
//!
//! let config = &manifest.structs["MyOptions"];
//! assert_eq!(manifest.struct_fqn("MyOptions", config), "my-pkg.MyOptions");
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    MANIFEST_FILE, Manifest, ParseContext, ProjectConfig, PropConfig, RenderConfig, StructConfig,
    parse_manifest,
};
