//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;
use structsmith_core::qualified_name;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "smith.toml");
/// ctx.validate_name("MyOptions", "struct")?;
///
/// let nested = ctx.push("MyOptions");
/// nested.validate_fqn("my-pkg.MyOptions")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Shared across nested contexts
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["MyOptions"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages, e.g. "mixin in 'MyOptions'".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a table key in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Find the span of a quoted string value in the source.
    pub fn find_value_span(&self, value: &str) -> Option<SourceSpan> {
        find_value_span(self.source.src(), value)
    }

    /// Validate that a name is usable as an interface name.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }
        Ok(())
    }

    /// Validate that a qualified name has a package and a type name.
    pub fn validate_fqn(&self, fqn: &str) -> Result<()> {
        if let Some(reason) = qualified_name::validate(fqn) {
            return Err(self
                .source
                .invalid_fqn_error(fqn, reason, self.find_value_span(fqn)));
        }
        Ok(())
    }
}

/// TypeScript reserved words that cannot name an interface
pub(crate) const RESERVED_WORDS: &[&str] = &[
    "any", "boolean", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for",
    "function", "if", "implements", "import", "in", "instanceof", "interface", "let", "never",
    "new", "null", "number", "object", "package", "private", "protected", "public", "return",
    "static", "string", "super", "switch", "symbol", "this", "throw", "true", "try", "typeof",
    "undefined", "unknown", "var", "void", "while", "with", "yield",
];

/// Find the span of a name in the TOML source
/// Searches for patterns like `.name]`, `.name.`, or `name =`
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let dotted = [format!(".{}]", name), format!(".{}.", name)];
    for pattern in &dotted {
        if let Some(pos) = src.find(pattern) {
            // +1 to skip the leading dot
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    let keyed = [format!("{} =", name), format!("{}=", name)];
    for pattern in &keyed {
        if let Some(pos) = src.find(pattern) {
            return Some(SourceSpan::from((pos, name.len())));
        }
    }

    None
}

/// Find the span of a quoted string value, without the quotes
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        let pattern = format!("{quote}{value}{quote}");
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + 1, value.len())));
        }
    }
    None
}

/// Validate that a name is a valid TypeScript identifier
///
/// Returns `None` if valid, `Some(reason)` if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        Some(_) => return Some("name must start with a letter, '_' or '$'"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        return Some("name contains invalid characters");
    }

    if RESERVED_WORDS.contains(&name) {
        return Some("name is a TypeScript reserved word");
    }

    None
}
