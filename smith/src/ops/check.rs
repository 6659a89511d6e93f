//! Check operation - build every struct without writing.

use std::path::Path;

use structsmith_catalog::Resolver;
use structsmith_manifest::Manifest;

use super::build::{build_struct, catalog_source};
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Every struct is built independently so that all failures are reported,
/// not just the first.
pub fn check(manifest: &Manifest, root: &Path, config_path: &Path) -> CheckReport {
    let mut resolver = Resolver::new(catalog_source(manifest, root));
    let mut errors = Vec::new();
    let mut infos = Vec::new();

    for (name, config) in &manifest.structs {
        match build_struct(manifest, name, config, &mut resolver) {
            Ok(builder) => infos.push(format!(
                "{} ({}): {} fields",
                name,
                builder.fqn(),
                builder.len()
            )),
            Err(e) => errors.push(format!("{name}: {e:#}")),
        }
    }

    CheckReport {
        config_path: config_path.to_path_buf(),
        errors,
        infos,
    }
}
