//! Renderable trait and CodeFragment.
//!
//! AST nodes describe their output as fragments; [`CodeBuilder`] owns the
//! indentation state and turns fragments into text.
//!
//! [`CodeBuilder`]: super::CodeBuilder

/// A piece of generated text.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// One line at the current indentation.
    Line(String),
    /// A header line, an indented body and an optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A `/** ... */` comment, one entry per line. Empty means nothing.
    DocBlock(Vec<String>),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    pub fn doc_block(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::DocBlock(lines.into_iter().map(Into::into).collect())
    }
}

/// Nodes that render through a [`CodeBuilder`](super::CodeBuilder).
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}
