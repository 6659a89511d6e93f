//! Manifest types and parsing for smith.toml files.

mod parse;
mod validate;

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Deserialize;
use structsmith_ir::{Docs, Field, FieldUpdate, TypeRef};

pub use parse::parse_manifest;
pub use validate::ParseContext;

/// Default manifest file name.
pub const MANIFEST_FILE: &str = "smith.toml";

/// Root manifest for smith.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Manifest {
    pub project: ProjectConfig,

    #[serde(default)]
    pub render: RenderConfig,

    /// Package id -> module specifier import overrides.
    #[serde(default)]
    pub import_locations: IndexMap<String, String>,

    /// Interfaces to derive, keyed by their rendered name.
    #[serde(default)]
    pub structs: IndexMap<String, StructConfig>,
}

impl Manifest {
    /// Qualified name of a struct: its `fqn`, or `<project>.<name>`.
    pub fn struct_fqn(&self, name: &str, config: &StructConfig) -> String {
        config
            .fqn
            .clone()
            .unwrap_or_else(|| format!("{}.{}", self.project.name, name))
    }
}

/// The `[project]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ProjectConfig {
    /// Package id of the project; prefix of every derived fqn.
    pub name: String,

    /// Directory interface files are generated into.
    #[serde(default = "default_srcdir")]
    pub srcdir: PathBuf,

    /// Extra directories searched for `<package>/.jsii` catalogs.
    #[serde(default)]
    pub catalog_paths: Vec<PathBuf>,
}

fn default_srcdir() -> PathBuf {
    PathBuf::from("src")
}

/// The `[render]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RenderConfig {
    #[serde(default = "default_indent")]
    pub indent: u8,
    #[serde(default = "default_true")]
    pub type_imports: bool,
    #[serde(default)]
    pub default_tags_for_required: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            type_imports: true,
            default_tags_for_required: false,
        }
    }
}

fn default_indent() -> u8 {
    2
}

fn default_true() -> bool {
    true
}

/// A `[structs.<Name>]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct StructConfig {
    /// Qualified name (default `<project>.<Name>`).
    pub fqn: Option<String>,
    /// Summary of the interface docs (default: the name).
    pub description: Option<String>,
    /// Full interface docs; takes precedence over `description`.
    pub docs: Option<Docs>,
    /// Output file, relative to the project root.
    pub file: Option<PathBuf>,

    /// Catalog records whose fields are mixed in; the first listed wins.
    #[serde(default)]
    pub mixins: Vec<String>,
    /// Flatten inherited fields of the mixins.
    #[serde(default = "default_true")]
    pub merge_parents: bool,

    #[serde(default)]
    pub update: IndexMap<String, FieldUpdate>,
    #[serde(default)]
    pub rename: IndexMap<String, String>,
    #[serde(default)]
    pub omit: Vec<String>,
    /// Fields to keep; empty keeps everything.
    #[serde(default)]
    pub only: Vec<String>,
    #[serde(default)]
    pub without_deprecated: bool,
    #[serde(default)]
    pub all_optional: bool,

    /// Fields declared directly on the struct; added last.
    #[serde(default)]
    pub props: IndexMap<String, PropConfig>,
}

impl StructConfig {
    /// Interface docs: `docs`, or a summary of `description` or `name`.
    pub fn interface_docs(&self, name: &str) -> Docs {
        self.docs.clone().unwrap_or_else(|| {
            Docs::summary(self.description.clone().unwrap_or_else(|| name.to_string()))
        })
    }

    /// The declared props as fields, in declaration order.
    pub fn fields(&self) -> Vec<Field> {
        self.props
            .iter()
            .map(|(name, prop)| prop.to_field(name))
            .collect()
    }
}

/// A `[structs.<Name>.props.<field>]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropConfig {
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub optional: bool,
    pub docs: Option<Docs>,
}

impl PropConfig {
    pub fn to_field(&self, name: &str) -> Field {
        Field {
            name: name.to_string(),
            ty: self.ty.clone(),
            optional: self.optional,
            docs: self.docs.clone(),
        }
    }
}
