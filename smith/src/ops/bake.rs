//! Bake operation - interface generation from manifest.

use std::path::Path;

use eyre::{Result, WrapErr};
use structsmith_catalog::Resolver;
use structsmith_core::{GeneratedFile, WriteResult};
use structsmith_manifest::Manifest;

use super::build::{catalog_source, interface_files};
use crate::reports::{BakeReport, GenerationResult, PreviewFile, WrittenResult};

/// Options for the bake operation.
pub struct BakeOptions<'a> {
    /// Directory generated paths are relative to.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the bake operation.
///
/// Builds every struct of the manifest, resolving catalogs from `root`,
/// then writes (or previews) one file per struct.
pub fn bake(manifest: &Manifest, root: &Path, opts: BakeOptions) -> Result<BakeReport> {
    let mut resolver = Resolver::new(catalog_source(manifest, root));
    let files = interface_files(manifest, &mut resolver)?;

    let result = if opts.dry_run {
        GenerationResult::Preview(
            files
                .iter()
                .map(|file| PreviewFile {
                    path: file.relative_path().display().to_string(),
                    content: file.render(),
                })
                .collect(),
        )
    } else {
        let mut written = WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            ..WrittenResult::default()
        };
        for file in &files {
            let path = file.relative_path().display().to_string();
            match file
                .write(opts.output_dir)
                .wrap_err_with(|| format!("failed to write '{path}'"))?
            {
                WriteResult::Written => written.written.push(path),
                WriteResult::Unchanged => written.unchanged.push(path),
            }
        }
        GenerationResult::Written(written)
    };

    Ok(BakeReport {
        project: manifest.project.name.clone(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use tempfile::TempDir;

    use super::*;
    use crate::ops::build::tests::projen_catalog;

    const MANIFEST: &str = r#"
        [project]
        name = "my-pkg"

        [import-locations]
        projen = "projen"

        [structs.MyOptions]
        mixins = ["projen.javascript.NodeProjectOptions"]
        without-deprecated = true
    "#;

    fn install_projen(root: &Path) {
        let dir = root.join("node_modules/projen");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(".jsii"), serde_json::to_string(&projen_catalog()).unwrap()).unwrap();
    }

    #[test]
    fn test_bake_writes_then_skips_unchanged() {
        let temp = TempDir::new().unwrap();
        install_projen(temp.path());
        let manifest = Manifest::from_str(MANIFEST).unwrap();
        let opts = || BakeOptions {
            output_dir: temp.path(),
            dry_run: false,
        };

        let first = bake(&manifest, temp.path(), opts()).unwrap();
        let GenerationResult::Written(first) = first.result else {
            panic!("expected written result");
        };
        assert_eq!(first.written, vec!["src/MyOptions.ts"]);

        let second = bake(&manifest, temp.path(), opts()).unwrap();
        let GenerationResult::Written(second) = second.result else {
            panic!("expected written result");
        };
        assert!(second.written.is_empty());
        assert_eq!(second.unchanged, vec!["src/MyOptions.ts"]);

        let content = std::fs::read_to_string(temp.path().join("src/MyOptions.ts")).unwrap();
        assert!(content.contains("import type { javascript } from 'projen';"));
        assert!(content.contains("export interface MyOptions {"));
        assert!(!content.contains("legacy"));
    }

    #[test]
    fn test_bake_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        install_projen(temp.path());
        let manifest = Manifest::from_str(MANIFEST).unwrap();

        let report = bake(
            &manifest,
            temp.path(),
            BakeOptions {
                output_dir: temp.path(),
                dry_run: true,
            },
        )
        .unwrap();

        let GenerationResult::Preview(files) = report.result else {
            panic!("expected preview result");
        };
        assert_eq!(files.len(), 1);
        assert!(files[0].content.contains("readonly packageManager?: javascript.NodePackageManager;"));
        assert!(!temp.path().join("src").exists());
    }
}
