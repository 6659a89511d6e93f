//! TypeScript import builder.

use structsmith_codegen::{CodeBuilder, CodeFragment, Renderable};

/// Builder for a named TypeScript import statement.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    named: Vec<String>,
    type_only: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Import several named exports, in the given order.
    pub fn named_all(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.named.extend(names.into_iter().map(Into::into));
        self
    }

    /// Make this a type-only import (`import type { ... }`).
    pub fn type_only(mut self, type_only: bool) -> Self {
        self.type_only = type_only;
        self
    }

    fn statement(&self) -> String {
        let keyword = if self.type_only { "import type" } else { "import" };
        format!(
            "{} {{ {} }} from '{}';",
            keyword,
            self.named.join(", "),
            self.from
        )
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.statement())]
    }
}
