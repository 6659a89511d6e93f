//! Documentation blocks.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Documentation attached to a record or field.
///
/// Pure metadata: docs never take part in merge precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Docs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stability: Option<Stability>,
    /// Free-form tags, rendered as `@tag value` in declaration order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub custom: IndexMap<String, String>,
}

impl Docs {
    /// Docs with only a summary line.
    pub fn summary(summary: impl Into<String>) -> Self {
        Self {
            summary: Some(summary.into()),
            ..Self::default()
        }
    }

    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_deprecated(mut self, deprecated: impl Into<String>) -> Self {
        self.deprecated = Some(deprecated.into());
        self
    }

    pub fn with_stability(mut self, stability: Stability) -> Self {
        self.stability = Some(stability);
        self
    }

    pub fn with_custom(mut self, tag: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom.insert(tag.into(), value.into());
        self
    }

    /// Whether a deprecation notice is present.
    pub fn is_deprecated(&self) -> bool {
        self.deprecated.is_some()
    }
}

/// API stability tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stability {
    Deprecated,
    Experimental,
    Stable,
    External,
}

impl Stability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deprecated => "deprecated",
            Self::Experimental => "experimental",
            Self::Stable => "stable",
            Self::External => "external",
        }
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
