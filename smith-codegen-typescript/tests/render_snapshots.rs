//! Snapshot tests for rendered TypeScript interfaces.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use structsmith_catalog::{MemoryCatalogSource, Resolver};
use structsmith_codegen::{Indent, Struct};
use structsmith_codegen_typescript::{
    InterfaceFile, TypeScriptRenderer, TypeScriptRendererOptions,
};
use structsmith_core::GeneratedFile;
use structsmith_ir::{Catalog, Docs, Field, RecordDescriptor, Stability, TypeRef};

fn projen_catalog() -> Catalog {
    let base = RecordDescriptor::new("projen.ProjectOptions")
        .with_docs(Docs::summary("Options for `Project`."))
        .with_fields([
            Field::new("name", TypeRef::string())
                .with_docs(Docs::summary("This is the name of your project.").with_default("$BASEDIR")),
            Field::new("outdir", TypeRef::string())
                .optional()
                .with_docs(Docs::summary("The root directory of the project.").with_default("\".\"")),
            Field::new("legacy", TypeRef::boolean())
                .optional()
                .with_docs(Docs::default().with_deprecated("no longer used")),
        ]);
    let node = RecordDescriptor::new("projen.javascript.NodeProjectOptions")
        .with_parents(["projen.ProjectOptions"])
        .with_fields([Field::new(
            "packageManager",
            TypeRef::named("projen.javascript.NodePackageManager"),
        )
        .optional()
        .with_docs(
            Docs::summary("The Node Package Manager used to execute scripts.")
                .with_default("NodePackageManager.YARN_CLASSIC"),
        )]);
    Catalog::new("projen").with_record(base).with_record(node)
}

#[test]
fn test_render_flat_record() {
    let mut builder = Struct::empty("my-pkg.MyProjectOptions");
    builder
        .set_docs(Docs::summary("MyProjectOptions"))
        .add([
            Field::new("enabled", TypeRef::boolean())
                .optional()
                .with_docs(Docs::summary("Turn it on.").with_default("true")),
            Field::new("tags", TypeRef::map(TypeRef::string())).optional(),
        ]);

    let text = TypeScriptRenderer::default().render_struct(&builder);

    insta::assert_snapshot!(text.trim_start(), @r"
    /**
     * MyProjectOptions
     */
    export interface MyProjectOptions {
      readonly tags?: Record<string, string>;
      /**
       * Turn it on.
       * @default true
       */
      readonly enabled?: boolean;
    }
    ");
    assert!(text.starts_with("\n/**"));
    assert!(text.ends_with("}\n"));
}

#[test]
fn test_render_derived_from_catalog() {
    let source = MemoryCatalogSource::new().with_catalog(projen_catalog());
    let mut resolver = Resolver::new(source);
    let node = Struct::from_fqn(&mut resolver, "projen.javascript.NodeProjectOptions", true).unwrap();

    let mut builder = Struct::empty("my-pkg.MyProjectOptions");
    builder
        .set_docs(Docs::summary("MyProjectOptions"))
        .mixin(&[&node])
        .without_deprecated()
        .omit(["outdir"]);

    let text = TypeScriptRenderer::default().render_struct(&builder);

    insta::assert_snapshot!(text, @r"
    import type { javascript } from 'projen';

    /**
     * MyProjectOptions
     */
    export interface MyProjectOptions {
      /**
       * The Node Package Manager used to execute scripts.
       * @default NodePackageManager.YARN_CLASSIC
       */
      readonly packageManager?: javascript.NodePackageManager;
      /**
       * This is the name of your project.
       */
      readonly name: string;
    }
    ");
}

#[test]
fn test_render_options() {
    let mut builder = Struct::empty("my-pkg.nested.deep.Options");
    builder.add([
        Field::new("local", TypeRef::named("my-pkg.Local")).optional(),
        Field::new("remote", TypeRef::array(TypeRef::named("remote-pkg.Remote")))
            .with_docs(
                Docs::summary("Remote things.")
                    .with_remarks("First line.\n\nSecond line.")
                    .with_stability(Stability::Experimental)
                    .with_custom("pjid", "remote"),
            ),
    ]);

    let renderer = TypeScriptRenderer::new(
        TypeScriptRendererOptions::default()
            .with_indent(Indent::WIDE)
            .with_type_imports(false),
    );
    let text = renderer.render_struct(&builder);

    insta::assert_snapshot!(text, @r"
    import { Remote } from 'remote-pkg';
    import { Local } from '../../';

    export interface Options {
        /**
         * Remote things.
         * First line.
         *
         * Second line.
         * @stability experimental
         * @pjid remote
         */
        readonly remote: Array<Remote>;
        readonly local?: Local;
    }
    ");
}

#[test]
fn test_interface_file_writes_once() {
    let mut builder = Struct::empty("my-pkg.sub.Props");
    builder.add([Field::new("other", TypeRef::named("my-pkg.Other")).optional()]);
    let file = InterfaceFile::new(builder);

    let temp = tempfile::TempDir::new().unwrap();
    let first = file.write(temp.path()).unwrap();
    let second = file.write(temp.path()).unwrap();

    assert_eq!(first, structsmith_core::WriteResult::Written);
    assert_eq!(second, structsmith_core::WriteResult::Unchanged);

    let written = std::fs::read_to_string(temp.path().join("src/sub/Props.ts")).unwrap();
    insta::assert_snapshot!(written, @r#"
    // ~~ Generated by smith. To modify, edit smith.toml and run "smith bake".
    import type { Other } from '../';

    export interface Props {
      readonly other?: Other;
    }
    "#);
}
