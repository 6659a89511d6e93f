//! Type references.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A reference to a type, as found in a catalog or written in a manifest.
///
/// The JSON shape follows the catalog layout:
///
/// ```text
/// { "primitive": "string" }
/// { "fqn": "pkg.Name" }
/// { "collection": { "kind": "array", "elementtype": { ... } } }
/// { "union": { "types": [ ... ] } }
/// ```
///
/// Anything else is kept verbatim in [`TypeRef::Unknown`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeRef {
    /// A primitive type.
    Primitive { primitive: PrimitiveType },
    /// A reference to a named type by qualified name.
    Named { fqn: String },
    /// A list or map of another type.
    Collection { collection: CollectionTypeRef },
    /// One of several types.
    Union { union: UnionTypeRef },
    /// A reference shape this model does not know about.
    Unknown(serde_json::Value),
}

/// Element type and kind of a collection reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionTypeRef {
    pub kind: CollectionKind,
    #[serde(rename = "elementtype")]
    pub element_type: Box<TypeRef>,
}

/// Member types of a union reference, in declared order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnionTypeRef {
    pub types: Vec<TypeRef>,
}

/// Kind of collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    Array,
    Map,
    #[serde(other)]
    Other,
}

/// Primitive kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    String,
    Number,
    Boolean,
    Any,
    Date,
    Json,
}

impl PrimitiveType {
    /// The keyword of this primitive in the catalog.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Any => "any",
            Self::Date => "date",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TypeRef {
    /// Create a primitive type reference.
    pub fn primitive(primitive: PrimitiveType) -> Self {
        Self::Primitive { primitive }
    }

    /// Create a named type reference.
    pub fn named(fqn: impl Into<String>) -> Self {
        Self::Named { fqn: fqn.into() }
    }

    /// Create a list type reference.
    pub fn array(element: TypeRef) -> Self {
        Self::collection(CollectionKind::Array, element)
    }

    /// Create a string-keyed map type reference.
    pub fn map(element: TypeRef) -> Self {
        Self::collection(CollectionKind::Map, element)
    }

    /// Create a collection type reference.
    pub fn collection(kind: CollectionKind, element: TypeRef) -> Self {
        Self::Collection {
            collection: CollectionTypeRef {
                kind,
                element_type: Box::new(element),
            },
        }
    }

    /// Create a union type reference.
    pub fn union(types: impl IntoIterator<Item = TypeRef>) -> Self {
        Self::Union {
            union: UnionTypeRef {
                types: types.into_iter().collect(),
            },
        }
    }

    /// Convenience: string type.
    pub fn string() -> Self {
        Self::primitive(PrimitiveType::String)
    }

    /// Convenience: number type.
    pub fn number() -> Self {
        Self::primitive(PrimitiveType::Number)
    }

    /// Convenience: boolean type.
    pub fn boolean() -> Self {
        Self::primitive(PrimitiveType::Boolean)
    }

    /// Qualified names of every named type reachable from this reference.
    ///
    /// Collections and unions are walked; duplicates are kept in the order
    /// they are encountered.
    pub fn named_references(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_named(&mut out);
        out
    }

    /// Whether every part of this reference has a known shape.
    ///
    /// False when an [`TypeRef::Unknown`] or a collection of an unknown
    /// kind appears anywhere inside; such parts render as `any`.
    pub fn is_recognized(&self) -> bool {
        match self {
            Self::Primitive { .. } | Self::Named { .. } => true,
            Self::Collection { collection } => {
                collection.kind != CollectionKind::Other && collection.element_type.is_recognized()
            }
            Self::Union { union } => union.types.iter().all(TypeRef::is_recognized),
            Self::Unknown(_) => false,
        }
    }

    fn collect_named<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Named { fqn } => out.push(fqn),
            Self::Collection { collection } => collection.element_type.collect_named(out),
            Self::Union { union } => {
                for member in &union.types {
                    member.collect_named(out);
                }
            }
            Self::Primitive { .. } | Self::Unknown(_) => {}
        }
    }
}
