//! TypeScript type mapper implementation.

use structsmith_core::qualified_name;
use structsmith_ir::{CollectionKind, TypeRef};

/// Maps type references to TypeScript type syntax.
pub struct TypeScriptTypeMapper;

impl TypeScriptTypeMapper {
    /// Render a type reference at its use site.
    ///
    /// Named types drop their package segment, which becomes the import;
    /// shapes the mapper does not know render as `any`.
    pub fn map_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Primitive { primitive } => primitive.as_str().to_string(),
            TypeRef::Named { fqn } => qualified_name::local_path(fqn).to_string(),
            TypeRef::Collection { collection } => match collection.kind {
                CollectionKind::Array => format!("Array<{}>", self.map_type(&collection.element_type)),
                CollectionKind::Map => {
                    format!("Record<string, {}>", self.map_type(&collection.element_type))
                }
                CollectionKind::Other => "any".to_string(),
            },
            TypeRef::Union { union } => union
                .types
                .iter()
                .map(|member| self.map_type(member))
                .collect::<Vec<_>>()
                .join(" | "),
            TypeRef::Unknown(_) => "any".to_string(),
        }
    }
}
