//! TypeScript interface builder.

use structsmith_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A `readonly` member of a TypeScript interface.
#[derive(Debug, Clone)]
pub struct InterfaceField {
    pub name: String,
    pub ty: String,
    pub optional: bool,
    pub docs: Vec<String>,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
            docs: Vec::new(),
        }
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn docs(mut self, docs: Vec<String>) -> Self {
        self.docs = docs;
        self
    }

    fn declaration(&self) -> String {
        let optional = if self.optional { "?" } else { "" };
        format!("readonly {}{}: {};", self.name, optional, self.ty)
    }
}

/// Builder for exported TypeScript interfaces.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    docs: Vec<String>,
    fields: Vec<InterfaceField>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            docs: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Set the doc block lines of the interface itself.
    pub fn docs(mut self, docs: Vec<String>) -> Self {
        self.docs = docs;
        self
    }

    /// Add a field.
    pub fn field(mut self, field: InterfaceField) -> Self {
        self.fields.push(field);
        self
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let body = self
            .fields
            .iter()
            .flat_map(|field| {
                [
                    CodeFragment::DocBlock(field.docs.clone()),
                    CodeFragment::Line(field.declaration()),
                ]
            })
            .collect();

        vec![
            CodeFragment::DocBlock(self.docs.clone()),
            CodeFragment::block(
                format!("export interface {} {{", self.name),
                body,
                Some("}".to_string()),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_interface() {
        let i = Interface::new("Empty").build();
        assert_eq!(i, "export interface Empty {\n}\n");
    }

    #[test]
    fn test_interface_with_docs() {
        let i = Interface::new("Options")
            .docs(vec!["Options".to_string()])
            .field(InterfaceField::new("name", "string").optional(true))
            .field(
                InterfaceField::new("count", "number").docs(vec!["How many".to_string()]),
            )
            .build();

        assert_eq!(
            i,
            "/**\n * Options\n */\nexport interface Options {\n  readonly name?: string;\n  /**\n   * How many\n   */\n  readonly count: number;\n}\n"
        );
    }
}
