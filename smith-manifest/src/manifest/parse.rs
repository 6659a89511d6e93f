//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{MANIFEST_FILE, Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILE)
    }
}

impl Manifest {
    /// Parse a smith.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a smith.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    let package = &manifest.project.name;
    if package.is_empty() || package.contains('.') {
        return Err(ctx.source_context().validation_error(
            "project name must be a non-empty package id without '.'",
            ctx.find_value_span(package),
        ));
    }

    for (name, config) in &manifest.structs {
        ctx.validate_name(name, "struct")?;

        let struct_ctx = ctx.push(name);
        struct_ctx.validate_fqn(&manifest.struct_fqn(name, config))?;
        for mixin in &config.mixins {
            struct_ctx.validate_fqn(mixin)?;
        }

        for (from, to) in &config.rename {
            if to.is_empty() {
                return Err(struct_ctx.source_context().validation_error(
                    format!("cannot rename '{from}' to an empty name"),
                    struct_ctx.find_span(from),
                ));
            }
        }

        let types = config
            .props
            .iter()
            .map(|(field, prop)| (field, Some(&prop.ty)))
            .chain(config.update.iter().map(|(field, update)| (field, update.ty.as_ref())));
        for (field, ty) in types {
            if ty.is_some_and(|ty| !ty.is_recognized()) {
                return Err(struct_ctx.source_context().validation_error(
                    format!("unrecognized type for field '{field}' in '{name}'"),
                    struct_ctx.find_span(field),
                ));
            }
        }
    }
    Ok(())
}
