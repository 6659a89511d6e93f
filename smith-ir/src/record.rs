//! Fields and record descriptors.

use serde::{Deserialize, Serialize};

use crate::{Docs, TypeRef};

/// One named, typed member of a record.
///
/// The name is the field's identity: two fields with the same name are the
/// same field for merge purposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<Docs>,
}

impl Field {
    /// Create a required field without docs.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
            docs: None,
        }
    }

    /// Mark the field optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Attach documentation.
    pub fn with_docs(mut self, docs: Docs) -> Self {
        self.docs = Some(docs);
        self
    }

    /// Whether the field carries a deprecation notice.
    pub fn is_deprecated(&self) -> bool {
        self.docs.as_ref().is_some_and(Docs::is_deprecated)
    }
}

/// A method of a record.
///
/// Methods are not interpreted; every attribute besides the name is carried
/// through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rest: serde_json::Map::new(),
        }
    }
}

/// An interface-like type: its fields, parents and metadata.
///
/// The first segment of `fqn` is the owning package and equals `assembly`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDescriptor {
    pub fqn: String,
    pub assembly: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<Docs>,
    #[serde(rename = "properties", default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
    /// Qualified names of the parent records, in declaration order.
    #[serde(rename = "interfaces", default, skip_serializing_if = "Vec::is_empty")]
    pub parents: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<Method>,
}

impl RecordDescriptor {
    /// Create an empty record, deriving the package and local name from `fqn`.
    pub fn new(fqn: impl Into<String>) -> Self {
        let fqn = fqn.into();
        let assembly = fqn.split('.').next().unwrap_or_default().to_string();
        let name = fqn.rsplit('.').next().unwrap_or_default().to_string();
        Self {
            fqn,
            assembly,
            name,
            docs: None,
            fields: Vec::new(),
            parents: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Override the local (rendered) name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_docs(mut self, docs: Docs) -> Self {
        self.docs = Some(docs);
        self
    }

    pub fn with_fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn with_parents(mut self, parents: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.parents.extend(parents.into_iter().map(Into::into));
        self
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Number of segments in the qualified name.
    pub fn depth(&self) -> usize {
        self.fqn.split('.').count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Stability;

    #[test]
    fn test_new_derives_identity() {
        let record = RecordDescriptor::new("pkg.nested.Options");
        assert_eq!(record.assembly, "pkg");
        assert_eq!(record.name, "Options");
        assert_eq!(record.depth(), 3);
    }

    #[test]
    fn test_deserialize_catalog_record() {
        let record: RecordDescriptor = serde_json::from_str(
            r#"{
                "assembly": "projen",
                "fqn": "projen.typescript.ProjenrcOptions",
                "name": "ProjenrcOptions",
                "kind": "interface",
                "datatype": true,
                "interfaces": ["projen.BaseOptions"],
                "properties": [
                    {
                        "name": "filename",
                        "type": { "primitive": "string" },
                        "optional": true,
                        "immutable": true,
                        "docs": { "default": "\"projenrc.ts\"", "stability": "stable" }
                    }
                ],
                "methods": [{ "name": "toString", "returns": { "type": { "primitive": "string" } } }]
            }"#,
        )
        .unwrap();

        assert_eq!(record.parents, vec!["projen.BaseOptions"]);
        let field = record.field("filename").unwrap();
        assert!(field.optional);
        assert_eq!(
            field.docs.as_ref().and_then(|d| d.stability),
            Some(Stability::Stable)
        );
        assert_eq!(record.methods[0].name, "toString");
        assert!(record.methods[0].rest.contains_key("returns"));
    }

    #[test]
    fn test_field_deprecation() {
        let field = Field::new("old", TypeRef::string());
        assert!(!field.is_deprecated());

        let field = field.with_docs(Docs::default().with_deprecated("use new"));
        assert!(field.is_deprecated());
    }
}
