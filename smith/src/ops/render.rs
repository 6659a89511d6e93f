//! Render operation - one catalog record as an interface.

use eyre::{Result, WrapErr};
use structsmith_catalog::{CatalogSource, Resolver};
use structsmith_codegen::Struct;
use structsmith_codegen_typescript::{TypeScriptRenderer, TypeScriptRendererOptions};

/// What to render and which filters to apply.
pub struct RenderRequest<'a> {
    pub fqn: &'a str,
    pub merge_parents: bool,
    pub all_optional: bool,
    pub without_deprecated: bool,
    pub omit: &'a [String],
    /// Empty keeps everything.
    pub only: &'a [String],
}

/// Resolve a record, apply the filters and render it.
pub fn render<S: CatalogSource>(
    resolver: &mut Resolver<S>,
    request: &RenderRequest,
    options: TypeScriptRendererOptions,
) -> Result<String> {
    let mut builder = Struct::from_fqn(resolver, request.fqn, request.merge_parents)
        .wrap_err_with(|| format!("failed to resolve '{}'", request.fqn))?;

    builder.omit(request.omit);
    if !request.only.is_empty() {
        builder.only(request.only);
    }
    if request.without_deprecated {
        builder.without_deprecated();
    }
    if request.all_optional {
        builder.all_optional();
    }

    Ok(TypeScriptRenderer::new(options).render_struct(&builder))
}
