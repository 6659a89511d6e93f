//! A builder rendered into its own `.ts` file.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use structsmith_codegen::{HasStructSpec, Struct};
use structsmith_core::{GeneratedFile, fqn_to_path, relative_import};
use structsmith_ir::RecordDescriptor;

use crate::{TypeScriptRenderer, TypeScriptRendererOptions};

/// First line of every generated interface file.
pub const GENERATED_MARKER: &str =
    "// ~~ Generated by smith. To modify, edit smith.toml and run \"smith bake\".";

/// A generated TypeScript file holding one interface.
///
/// Paths are relative to the base directory passed to
/// [`GeneratedFile::path`]. Unless a file path is set, the interface lands
/// in `<srcdir>/<fqn without package>.ts`, and references into its own
/// package are imported relative to `srcdir`.
#[derive(Debug, Clone)]
pub struct InterfaceFile {
    record: Struct,
    srcdir: PathBuf,
    file_path: Option<PathBuf>,
    options: TypeScriptRendererOptions,
}

impl InterfaceFile {
    pub fn new(record: Struct) -> Self {
        Self {
            record,
            srcdir: PathBuf::from("src"),
            file_path: None,
            options: TypeScriptRendererOptions::default(),
        }
    }

    /// Set the source directory the default path and own-package imports
    /// are derived from.
    pub fn srcdir(mut self, srcdir: impl Into<PathBuf>) -> Self {
        self.srcdir = srcdir.into();
        self
    }

    /// Place the file at an explicit path instead.
    pub fn file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Renderer options. Import locations given here override the derived
    /// location of the interface's own package.
    pub fn options(mut self, options: TypeScriptRendererOptions) -> Self {
        self.options = options;
        self
    }

    /// The builder being rendered.
    pub fn record(&self) -> &Struct {
        &self.record
    }

    /// Output path relative to the base directory.
    pub fn relative_path(&self) -> PathBuf {
        self.file_path
            .clone()
            .unwrap_or_else(|| self.srcdir.join(fqn_to_path(self.record.fqn())))
    }

    /// The options actually used for rendering, with the own-package
    /// location filled in.
    pub fn effective_options(&self) -> TypeScriptRendererOptions {
        let own = relative_import(&self.relative_path(), &self.srcdir);
        let mut import_locations = IndexMap::from([(self.record.assembly().to_string(), own)]);
        for (package, module) in &self.options.import_locations {
            import_locations.insert(package.clone(), module.clone());
        }

        TypeScriptRendererOptions {
            import_locations,
            ..self.options.clone()
        }
    }
}

impl HasStructSpec for InterfaceFile {
    fn spec(&self) -> RecordDescriptor {
        self.record.spec()
    }
}

impl GeneratedFile for InterfaceFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    fn render(&self) -> String {
        let renderer = TypeScriptRenderer::new(self.effective_options());
        format!("{}\n{}", GENERATED_MARKER, renderer.render_struct(&self.record))
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use structsmith_ir::{Field, TypeRef};

    use super::*;

    #[test]
    fn test_default_path() {
        let file = InterfaceFile::new(Struct::empty("my-pkg.nested.MyOptions"));
        assert_eq!(file.relative_path(), Path::new("src/nested/MyOptions.ts"));
        assert_eq!(
            file.path(Path::new("/project")),
            Path::new("/project/src/nested/MyOptions.ts")
        );
    }

    #[test]
    fn test_own_package_relative_to_srcdir() {
        let file = InterfaceFile::new(Struct::empty("my-pkg.nested.MyOptions")).srcdir("lib");
        let options = file.effective_options();
        assert_eq!(options.import_locations.get("my-pkg").map(String::as_str), Some("../"));

        let flat = InterfaceFile::new(Struct::empty("my-pkg.MyOptions")).file_path("src/options.ts");
        let options = flat.effective_options();
        assert_eq!(options.import_locations.get("my-pkg").map(String::as_str), Some("./"));
    }

    #[test]
    fn test_user_location_overrides_own_package() {
        let file = InterfaceFile::new(Struct::empty("my-pkg.MyOptions"))
            .options(TypeScriptRendererOptions::default().with_import_location("my-pkg", "my-pkg"));
        let options = file.effective_options();
        assert_eq!(options.import_locations.get("my-pkg").map(String::as_str), Some("my-pkg"));
    }

    #[test]
    fn test_render_starts_with_marker() {
        let mut record = Struct::empty("my-pkg.MyOptions");
        record.add([Field::new("other", TypeRef::named("my-pkg.Other")).optional()]);
        let text = InterfaceFile::new(record).render();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(GENERATED_MARKER));
        assert_eq!(lines.next(), Some("import type { Other } from './';"));
    }
}
