//! Parsing and validation of smith.toml manifests.

use std::{path::Path, str::FromStr};

use structsmith_ir::{Docs, Field, TypeRef};
use structsmith_manifest::{Error, Manifest, RenderConfig};

const FULL: &str = r#"
[project]
name = "my-pkg"
srcdir = "lib"
catalog-paths = ["vendor"]

[render]
indent = 4
type-imports = false
default-tags-for-required = true

[import-locations]
projen = "projen/lib"

[structs.MyOptions]
fqn = "my-pkg.options.MyOptions"
description = "My options"
file = "lib/options.ts"
mixins = ["projen.typescript.TypeScriptProjectOptions", "projen.ProjectOptions"]
merge-parents = false
omit = ["sampleCode"]
only = ["name", "extra"]
rename = { outdir = "outputDir" }
all-optional = true
without-deprecated = true

[structs.MyOptions.props.extra]
type = { primitive = "string" }
optional = true
docs = { summary = "Extra", default = "\"none\"" }

[structs.MyOptions.props.tags]
type = { collection = { kind = "map", elementtype = { primitive = "string" } } }

[structs.MyOptions.update.name]
optional = false
docs = { summary = "The name" }

[structs.Other]
"#;

#[test]
fn test_parse_full_manifest() {
    let manifest = Manifest::from_str(FULL).unwrap();

    assert_eq!(manifest.project.name, "my-pkg");
    assert_eq!(manifest.project.srcdir, Path::new("lib"));
    assert_eq!(manifest.project.catalog_paths, vec![Path::new("vendor")]);
    assert_eq!(
        manifest.render,
        RenderConfig {
            indent: 4,
            type_imports: false,
            default_tags_for_required: true,
        }
    );
    assert_eq!(manifest.import_locations["projen"], "projen/lib");

    let names: Vec<_> = manifest.structs.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["MyOptions", "Other"]);

    let config = &manifest.structs["MyOptions"];
    assert_eq!(manifest.struct_fqn("MyOptions", config), "my-pkg.options.MyOptions");
    assert_eq!(config.interface_docs("MyOptions"), Docs::summary("My options"));
    assert_eq!(config.mixins.len(), 2);
    assert!(!config.merge_parents);
    assert_eq!(config.rename["outdir"], "outputDir");
    assert!(config.all_optional && config.without_deprecated);

    let fields = config.fields();
    assert_eq!(
        fields[0],
        Field::new("extra", TypeRef::string())
            .optional()
            .with_docs(Docs::summary("Extra").with_default("\"none\""))
    );
    assert_eq!(fields[1].ty, TypeRef::map(TypeRef::string()));

    let update = &config.update["name"];
    assert_eq!(update.optional, Some(false));
    assert_eq!(
        update.docs.as_ref().and_then(|d| d.summary.as_deref()),
        Some("The name")
    );
}

#[test]
fn test_defaults() {
    let manifest = Manifest::from_str(
        r#"
        [project]
        name = "my-pkg"

        [structs.Props]
        "#,
    )
    .unwrap();

    assert_eq!(manifest.project.srcdir, Path::new("src"));
    assert_eq!(manifest.render, RenderConfig::default());
    assert!(manifest.import_locations.is_empty());

    let config = &manifest.structs["Props"];
    assert_eq!(manifest.struct_fqn("Props", config), "my-pkg.Props");
    assert_eq!(config.interface_docs("Props"), Docs::summary("Props"));
    assert!(config.merge_parents);
    assert!(config.fields().is_empty());
}

#[test]
fn test_unknown_key_is_parse_error() {
    let err = Manifest::from_str(
        r#"
        [project]
        name = "my-pkg"
        colour = "blue"
        "#,
    )
    .unwrap_err();
    assert!(matches!(*err, Error::Parse { .. }));
}

#[test]
fn test_invalid_struct_name() {
    let err = Manifest::from_str(
        r#"
        [project]
        name = "my-pkg"

        [structs.class]
        "#,
    )
    .unwrap_err();
    assert!(matches!(*err, Error::InvalidIdentifier { ref name, .. } if name == "class"));
}

#[test]
fn test_invalid_mixin_fqn() {
    let err = Manifest::from_str(
        r#"
        [project]
        name = "my-pkg"

        [structs.Props]
        mixins = ["projen"]
        "#,
    )
    .unwrap_err();
    assert!(matches!(*err, Error::InvalidQualifiedName { ref fqn, .. } if fqn == "projen"));
}

#[test]
fn test_invalid_project_name() {
    let err = Manifest::from_str(
        r#"
        [project]
        name = "my.pkg"
        "#,
    )
    .unwrap_err();
    assert!(matches!(*err, Error::Validation { .. }));
}

#[test]
fn test_zero_indent_allowed() {
    let manifest = Manifest::from_str(
        r#"
        [project]
        name = "my-pkg"

        [render]
        indent = 0
        "#,
    )
    .unwrap();
    assert_eq!(manifest.render.indent, 0);
}

#[test]
fn test_misspelled_prop_type_rejected() {
    let err = Manifest::from_str(
        r#"
        [project]
        name = "my-pkg"

        [structs.MyOptions.props.extra]
        type = { primitive = "strng" }
        "#,
    )
    .unwrap_err();

    assert!(matches!(*err, Error::Validation { span: Some(_), .. }));
    assert!(err.to_string().contains("unrecognized type for field 'extra' in 'MyOptions'"));
}

#[test]
fn test_misspelled_update_type_rejected() {
    let err = Manifest::from_str(
        r#"
        [project]
        name = "my-pkg"

        [structs.MyOptions.update.outdir]
        type = { collection = { kind = "array", elementtype = { fq = "projen.Task" } } }
        "#,
    )
    .unwrap_err();

    assert!(err.to_string().contains("unrecognized type for field 'outdir'"));
}

#[test]
fn test_from_file() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("smith.toml");
    std::fs::write(&path, "[project]\nname = \"my-pkg\"\n").unwrap();
    assert_eq!(Manifest::from_file(&path).unwrap().project.name, "my-pkg");

    let err = Manifest::from_file(temp.path().join("missing.toml")).unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));
}
