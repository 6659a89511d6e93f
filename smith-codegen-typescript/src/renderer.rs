//! Record to TypeScript interface rendering.

use indexmap::IndexMap;
use structsmith_codegen::{CodeBuilder, HasStructSpec, ImportCollector, Indent};
use structsmith_core::qualified_name;
use structsmith_ir::{Field, RecordDescriptor};

use crate::{
    TypeScriptTypeMapper,
    ast::{Import, Interface, InterfaceField, docs_to_lines},
};

/// Options for [`TypeScriptRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeScriptRendererOptions {
    /// Package id -> module specifier overrides for imports.
    ///
    /// Without an override, references into the rendered record's own
    /// package are imported relative to the qualified-name depth of the
    /// record (`pkg.Name` from `./`, `pkg.a.b.Name` from `../../`), and
    /// every other package by its bare name.
    pub import_locations: IndexMap<String, String>,
    pub indent: Indent,
    /// Emit `import type` instead of `import`.
    pub use_type_imports: bool,
    /// Keep `@default` in the docs of required fields.
    pub default_tags_for_required: bool,
}

impl Default for TypeScriptRendererOptions {
    fn default() -> Self {
        Self {
            import_locations: IndexMap::new(),
            indent: Indent::TYPESCRIPT,
            use_type_imports: true,
            default_tags_for_required: false,
        }
    }
}

impl TypeScriptRendererOptions {
    pub fn with_import_location(mut self, package: impl Into<String>, module: impl Into<String>) -> Self {
        self.import_locations.insert(package.into(), module.into());
        self
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_type_imports(mut self, use_type_imports: bool) -> Self {
        self.use_type_imports = use_type_imports;
        self
    }

    pub fn with_default_tags_for_required(mut self, enabled: bool) -> Self {
        self.default_tags_for_required = enabled;
        self
    }
}

/// Renders records as TypeScript interfaces.
///
/// Rendering is a pure function of the record and the options; the
/// renderer holds no state between calls.
#[derive(Debug, Clone, Default)]
pub struct TypeScriptRenderer {
    options: TypeScriptRendererOptions,
}

impl TypeScriptRenderer {
    pub fn new(options: TypeScriptRendererOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TypeScriptRendererOptions {
        &self.options
    }

    /// Render anything that has a record snapshot, e.g. a builder.
    pub fn render_struct(&self, source: &impl HasStructSpec) -> String {
        self.render_spec(&source.spec())
    }

    /// Render a record.
    pub fn render_spec(&self, spec: &RecordDescriptor) -> String {
        let imports = self.collect_imports(spec);
        tracing::trace!(fqn = %spec.fqn, modules = imports.len(), "rendering interface");

        let mut builder = CodeBuilder::new(self.options.indent);
        for (module, symbols) in imports.sorted() {
            builder.emit(
                &Import::new(module)
                    .named_all(symbols)
                    .type_only(self.options.use_type_imports),
            );
        }
        builder.push_blank();
        builder.emit(&self.interface(spec));
        builder.build()
    }

    fn collect_imports(&self, spec: &RecordDescriptor) -> ImportCollector {
        let mut imports = ImportCollector::new();
        for field in &spec.fields {
            for reference in field.ty.named_references() {
                let module = import_module(reference, &spec.fqn, &self.options.import_locations);
                imports.add(&module, qualified_name::top_level_symbol(reference));
            }
        }
        imports
    }

    fn interface(&self, spec: &RecordDescriptor) -> Interface {
        let mapper = TypeScriptTypeMapper;
        spec.fields.iter().fold(
            Interface::new(&spec.name).docs(docs_to_lines(spec.docs.as_ref())),
            |interface, field| {
                interface.field(
                    InterfaceField::new(&field.name, mapper.map_type(&field.ty))
                        .optional(field.optional)
                        .docs(self.field_docs(field)),
                )
            },
        )
    }

    fn field_docs(&self, field: &Field) -> Vec<String> {
        let Some(docs) = &field.docs else {
            return Vec::new();
        };
        if field.optional || self.options.default_tags_for_required {
            return docs_to_lines(Some(docs));
        }
        let mut docs = docs.clone();
        docs.default = None;
        docs_to_lines(Some(&docs))
    }
}

/// The module specifier that `reference` is imported from when rendering
/// the record `importing`.
///
/// An override for the reference's package wins; a reference into the
/// importing record's own package climbs one directory per nesting level
/// below the top; anything else is imported by its package id.
///
/// ```
/// use indexmap::IndexMap;
/// use structsmith_codegen_typescript::import_module;
///
/// let none = IndexMap::new();
/// assert_eq!(import_module("pkg.B", "pkg.A", &none), "./");
/// assert_eq!(import_module("pkg.B", "pkg.a.b.A", &none), "../../");
/// assert_eq!(import_module("projen.Project", "pkg.A", &none), "projen");
/// ```
pub fn import_module(
    reference: &str,
    importing: &str,
    import_locations: &IndexMap<String, String>,
) -> String {
    let package = qualified_name::package(reference);
    if let Some(location) = import_locations.get(package) {
        return location.clone();
    }

    if package == qualified_name::package(importing) {
        let depth = qualified_name::depth(importing);
        if depth <= 2 {
            return "./".to_string();
        }
        return "../".repeat(depth - 2);
    }

    package.to_string()
}
