//! Turning `[structs.*]` tables into interface files.

use std::path::Path;

use eyre::{Result, WrapErr};
use structsmith_catalog::{CatalogSource, FsCatalogSource, Resolver};
use structsmith_codegen::{HasFields, Indent, Struct};
use structsmith_codegen_typescript::{InterfaceFile, TypeScriptRendererOptions};
use structsmith_ir::RecordDescriptor;
use structsmith_manifest::{Manifest, StructConfig};

/// Catalog lookup rooted at the project directory.
pub fn catalog_source(manifest: &Manifest, root: &Path) -> FsCatalogSource {
    FsCatalogSource::new(root).with_search_paths(
        manifest
            .project
            .catalog_paths
            .iter()
            .map(|path| root.join(path)),
    )
}

/// Renderer options from the `[render]` and `[import-locations]` tables.
pub fn renderer_options(manifest: &Manifest) -> TypeScriptRendererOptions {
    TypeScriptRendererOptions {
        import_locations: manifest.import_locations.clone(),
        indent: Indent::spaces(manifest.render.indent),
        use_type_imports: manifest.render.type_imports,
        default_tags_for_required: manifest.render.default_tags_for_required,
    }
}

/// Build one struct.
///
/// Steps run in a fixed order: mixins, updates, renames, omit, only,
/// without-deprecated, all-optional, then the struct's own props.
pub fn build_struct<S: CatalogSource>(
    manifest: &Manifest,
    name: &str,
    config: &StructConfig,
    resolver: &mut Resolver<S>,
) -> Result<Struct> {
    let fqn = manifest.struct_fqn(name, config);
    let mut builder = Struct::from_spec(
        &RecordDescriptor::new(&fqn)
            .with_name(name)
            .with_docs(config.interface_docs(name)),
    );

    let sources = config
        .mixins
        .iter()
        .map(|mixin| {
            Struct::from_fqn(resolver, mixin, config.merge_parents)
                .wrap_err_with(|| format!("failed to load mixin '{mixin}' for '{name}'"))
        })
        .collect::<Result<Vec<_>>>()?;
    let sources: Vec<&dyn HasFields> = sources.iter().map(|s| s as &dyn HasFields).collect();
    builder.mixin(&sources);

    for (field, update) in &config.update {
        builder.update(field, update.clone())?;
    }
    for (from, to) in &config.rename {
        builder.rename(from, to)?;
    }
    builder.omit(&config.omit);
    if !config.only.is_empty() {
        builder.only(&config.only);
    }
    if config.without_deprecated {
        builder.without_deprecated();
    }
    if config.all_optional {
        builder.all_optional();
    }
    builder.add(config.fields());

    tracing::debug!(%fqn, fields = builder.len(), "built struct");
    Ok(builder)
}

/// Wrap a built struct into its output file.
pub fn interface_file(
    manifest: &Manifest,
    config: &StructConfig,
    builder: Struct,
    options: &TypeScriptRendererOptions,
) -> InterfaceFile {
    let file = InterfaceFile::new(builder)
        .srcdir(&manifest.project.srcdir)
        .options(options.clone());
    match &config.file {
        Some(path) => file.file_path(path),
        None => file,
    }
}

/// Build every struct of the manifest, in declaration order.
pub fn interface_files<S: CatalogSource>(
    manifest: &Manifest,
    resolver: &mut Resolver<S>,
) -> Result<Vec<InterfaceFile>> {
    let options = renderer_options(manifest);
    manifest
        .structs
        .iter()
        .map(|(name, config)| {
            let builder = build_struct(manifest, name, config, resolver)
                .wrap_err_with(|| format!("failed to build struct '{name}'"))?;
            Ok(interface_file(manifest, config, builder, &options))
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use std::{path::Path, str::FromStr};

    use structsmith_catalog::MemoryCatalogSource;
    use structsmith_codegen::HasStructSpec;
    use structsmith_ir::{Catalog, Docs, Field, RecordDescriptor, TypeRef};

    use super::*;

    pub(crate) fn projen_catalog() -> Catalog {
        let base = RecordDescriptor::new("projen.ProjectOptions").with_fields([
            Field::new("name", TypeRef::string()),
            Field::new("outdir", TypeRef::string()).optional(),
            Field::new("legacy", TypeRef::boolean())
                .optional()
                .with_docs(Docs::default().with_deprecated("gone")),
        ]);
        let node = RecordDescriptor::new("projen.javascript.NodeProjectOptions")
            .with_parents(["projen.ProjectOptions"])
            .with_fields([
                Field::new("packageManager", TypeRef::named("projen.javascript.NodePackageManager"))
                    .optional(),
                Field::new("name", TypeRef::string()).with_docs(Docs::summary("Package name")),
            ]);
        Catalog::new("projen").with_record(base).with_record(node)
    }

    fn resolver() -> Resolver<MemoryCatalogSource> {
        Resolver::new(MemoryCatalogSource::new().with_catalog(projen_catalog()))
    }

    fn names(builder: &Struct) -> Vec<String> {
        builder.fields().into_iter().map(|f| f.name).collect()
    }

    #[test]
    fn test_build_order() {
        let manifest = Manifest::from_str(
            r#"
            [project]
            name = "my-pkg"

            [structs.MyOptions]
            mixins = ["projen.javascript.NodeProjectOptions"]
            omit = ["outdir"]
            rename = { packageManager = "manager" }
            without-deprecated = true
            all-optional = true

            [structs.MyOptions.update.name]
            docs = { remarks = "Defaults to the directory name." }

            [structs.MyOptions.props.name]
            type = { primitive = "string" }
            docs = { summary = "Own name" }
            "#,
        )
        .unwrap();
        let config = &manifest.structs["MyOptions"];

        let builder = build_struct(&manifest, "MyOptions", config, &mut resolver()).unwrap();
        let spec = builder.spec();

        assert_eq!(spec.fqn, "my-pkg.MyOptions");
        assert_eq!(spec.docs, Some(Docs::summary("MyOptions")));
        assert_eq!(names(&builder), vec!["name", "manager"]);
        assert!(builder.get("manager").unwrap().optional);

        // own props are added last and win over everything mixed in
        let name = builder.get("name").unwrap();
        assert!(!name.optional);
        assert_eq!(name.docs, Some(Docs::summary("Own name")));
    }

    #[test]
    fn test_flat_mixin_and_only() {
        let manifest = Manifest::from_str(
            r#"
            [project]
            name = "my-pkg"

            [structs.Flat]
            mixins = ["projen.javascript.NodeProjectOptions"]
            merge-parents = false
            only = ["packageManager"]
            "#,
        )
        .unwrap();
        let config = &manifest.structs["Flat"];

        let builder = build_struct(&manifest, "Flat", config, &mut resolver()).unwrap();
        assert_eq!(names(&builder), vec!["packageManager"]);
    }

    #[test]
    fn test_update_of_missing_field_fails() {
        let manifest = Manifest::from_str(
            r#"
            [project]
            name = "my-pkg"

            [structs.Broken.update.nope]
            optional = true
            "#,
        )
        .unwrap();

        let err = interface_files(&manifest, &mut resolver()).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("failed to build struct 'Broken'"));
        assert!(message.contains("field 'nope'"));
    }

    #[test]
    fn test_unknown_mixin_fails() {
        let manifest = Manifest::from_str(
            r#"
            [project]
            name = "my-pkg"

            [structs.Broken]
            mixins = ["projen.Missing"]
            "#,
        )
        .unwrap();

        let err = interface_files(&manifest, &mut resolver()).unwrap_err();
        assert!(format!("{err:#}").contains("failed to load mixin 'projen.Missing'"));
    }

    #[test]
    fn test_interface_file_paths() {
        let manifest = Manifest::from_str(
            r#"
            [project]
            name = "my-pkg"
            srcdir = "lib"

            [render]
            indent = 4

            [structs.Nested]
            fqn = "my-pkg.sub.Nested"

            [structs.Placed]
            file = "lib/placed/options.ts"
            "#,
        )
        .unwrap();

        let files = interface_files(&manifest, &mut resolver()).unwrap();
        assert_eq!(files[0].relative_path(), Path::new("lib/sub/Nested.ts"));
        assert_eq!(files[1].relative_path(), Path::new("lib/placed/options.ts"));
        assert_eq!(files[1].spec().name, "Placed");
        assert_eq!(files[1].effective_options().indent, Indent::spaces(4));
        assert_eq!(
            files[1].effective_options().import_locations["my-pkg"],
            "../"
        );
    }

    #[test]
    fn test_catalog_source_search_paths() {
        let manifest = Manifest::from_str(
            r#"
            [project]
            name = "my-pkg"
            catalog-paths = ["vendor"]
            "#,
        )
        .unwrap();

        let source = catalog_source(&manifest, Path::new("/work"));
        let candidates = source.candidates("projen");
        assert_eq!(
            candidates.last().map(|p| p.as_path()),
            Some(Path::new("/work/vendor/projen/.jsii"))
        );
    }
}
