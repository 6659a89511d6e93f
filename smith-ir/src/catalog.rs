//! Type catalogs.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::RecordDescriptor;

/// A package's type catalog: fully-qualified name → raw type descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Package id the catalog belongs to.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub types: IndexMap<String, TypeDescriptor>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            types: IndexMap::new(),
        }
    }

    /// Add a record to the catalog, keyed by its fqn.
    pub fn with_record(mut self, record: RecordDescriptor) -> Self {
        self.types
            .insert(record.fqn.clone(), TypeDescriptor::Interface(record));
        self
    }

    /// Add any type descriptor under `fqn`.
    pub fn with_type(mut self, fqn: impl Into<String>, ty: TypeDescriptor) -> Self {
        self.types.insert(fqn.into(), ty);
        self
    }

    /// Qualified names of every record-kind type, in catalog order.
    pub fn records(&self) -> impl Iterator<Item = &RecordDescriptor> {
        self.types.values().filter_map(TypeDescriptor::as_record)
    }
}

/// A raw catalog entry, discriminated by its `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TypeDescriptor {
    Interface(RecordDescriptor),
    Class(OpaqueType),
    Enum(OpaqueType),
    #[serde(other)]
    Other,
}

impl TypeDescriptor {
    /// The `kind` tag of the descriptor.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Interface(_) => "interface",
            Self::Class(_) => "class",
            Self::Enum(_) => "enum",
            Self::Other => "unknown",
        }
    }

    pub fn as_record(&self) -> Option<&RecordDescriptor> {
        match self {
            Self::Interface(record) => Some(record),
            _ => None,
        }
    }

    pub fn into_record(self) -> Option<RecordDescriptor> {
        match self {
            Self::Interface(record) => Some(record),
            _ => None,
        }
    }
}

/// A non-record type; only its identity is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpaqueType {
    pub fqn: String,
}
