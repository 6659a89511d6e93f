use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use structsmith_catalog::{FsCatalogSource, Resolver};
use structsmith_codegen::Indent;
use structsmith_codegen_typescript::TypeScriptRendererOptions;

use crate::ops::{self, RenderRequest};

#[derive(Args)]
pub struct RenderCommand {
    /// Qualified name of the record, e.g. projen.typescript.TypeScriptProjectOptions
    pub fqn: String,

    /// Render only the record's own fields, without inherited ones
    #[arg(long)]
    pub flat: bool,

    /// Mark every field optional
    #[arg(long)]
    pub all_optional: bool,

    /// Drop deprecated fields
    #[arg(long)]
    pub without_deprecated: bool,

    /// Fields to drop
    #[arg(long, value_delimiter = ',')]
    pub omit: Vec<String>,

    /// Fields to keep
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,

    /// Import override, as package=module
    #[arg(long = "import-location", value_parser = parse_location)]
    pub import_locations: Vec<(String, String)>,

    /// Indentation width
    #[arg(long, default_value_t = 2)]
    pub indent: u8,

    /// Emit plain `import` instead of `import type`
    #[arg(long)]
    pub no_type_imports: bool,

    /// Keep `@default` on required fields
    #[arg(long)]
    pub default_tags_for_required: bool,

    /// Directory package lookup starts from
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Extra directories searched for catalogs
    #[arg(long = "catalog-path")]
    pub catalog_paths: Vec<PathBuf>,
}

fn parse_location(value: &str) -> std::result::Result<(String, String), String> {
    match value.split_once('=') {
        Some((package, module)) if !package.is_empty() => {
            Ok((package.to_string(), module.to_string()))
        }
        _ => Err(format!("expected package=module, got '{value}'")),
    }
}

impl RenderCommand {
    pub fn run(&self) -> Result<()> {
        let source = FsCatalogSource::new(&self.root).with_search_paths(self.catalog_paths.clone());
        let mut resolver = Resolver::new(source);

        let mut options = TypeScriptRendererOptions::default()
            .with_indent(Indent::spaces(self.indent))
            .with_type_imports(!self.no_type_imports)
            .with_default_tags_for_required(self.default_tags_for_required);
        for (package, module) in &self.import_locations {
            options = options.with_import_location(package, module);
        }

        let text = ops::render(
            &mut resolver,
            &RenderRequest {
                fqn: &self.fqn,
                merge_parents: !self.flat,
                all_optional: self.all_optional,
                without_deprecated: self.without_deprecated,
                omit: &self.omit,
                only: &self.only,
            },
            options,
        )?;
        print!("{text}");
        Ok(())
    }
}
