//! Partial field updates.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{Docs, Field, Stability, TypeRef};

/// A partial [`Field`]: every attribute that is `Some` overwrites the
/// existing one.
///
/// Docs are merged one level deeper, see [`DocsUpdate`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub ty: Option<TypeRef>,
    #[serde(default)]
    pub optional: Option<bool>,
    #[serde(default)]
    pub docs: Option<DocsUpdate>,
}

impl FieldUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn ty(mut self, ty: TypeRef) -> Self {
        self.ty = Some(ty);
        self
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = Some(optional);
        self
    }

    pub fn docs(mut self, docs: DocsUpdate) -> Self {
        self.docs = Some(docs);
        self
    }

    /// Merge this update over `field`, returning the new field.
    pub fn apply(&self, field: &Field) -> Field {
        let docs = match (&field.docs, &self.docs) {
            (old, None) => old.clone(),
            (old, Some(update)) => Some(update.apply(old.as_ref())),
        };

        Field {
            name: self.name.clone().unwrap_or_else(|| field.name.clone()),
            ty: self.ty.clone().unwrap_or_else(|| field.ty.clone()),
            optional: self.optional.unwrap_or(field.optional),
            docs,
        }
    }
}

/// A partial [`Docs`] block.
///
/// Scalar entries overwrite when `Some`; custom tags are merged key by key.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocsUpdate {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub deprecated: Option<String>,
    #[serde(default)]
    pub stability: Option<Stability>,
    #[serde(default)]
    pub custom: IndexMap<String, String>,
}

impl DocsUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }

    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn deprecated(mut self, deprecated: impl Into<String>) -> Self {
        self.deprecated = Some(deprecated.into());
        self
    }

    pub fn stability(mut self, stability: Stability) -> Self {
        self.stability = Some(stability);
        self
    }

    pub fn custom(mut self, tag: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom.insert(tag.into(), value.into());
        self
    }

    /// Merge this update over `docs` (or over empty docs).
    pub fn apply(&self, docs: Option<&Docs>) -> Docs {
        let mut merged = docs.cloned().unwrap_or_default();

        if let Some(summary) = &self.summary {
            merged.summary = Some(summary.clone());
        }
        if let Some(remarks) = &self.remarks {
            merged.remarks = Some(remarks.clone());
        }
        if let Some(default) = &self.default {
            merged.default = Some(default.clone());
        }
        if let Some(deprecated) = &self.deprecated {
            merged.deprecated = Some(deprecated.clone());
        }
        if let Some(stability) = self.stability {
            merged.stability = Some(stability);
        }
        for (tag, value) in &self.custom {
            merged.custom.insert(tag.clone(), value.clone());
        }

        merged
    }
}

impl From<Docs> for DocsUpdate {
    fn from(docs: Docs) -> Self {
        Self {
            summary: docs.summary,
            remarks: docs.remarks,
            default: docs.default,
            deprecated: docs.deprecated,
            stability: docs.stability,
            custom: docs.custom,
        }
    }
}
