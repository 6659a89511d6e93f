//! The struct builder.

use std::collections::HashSet;

use indexmap::IndexMap;
use structsmith_catalog::{CatalogSource, Resolver};
use structsmith_ir::{Field, FieldUpdate, RecordDescriptor};

use super::{
    HasFields,
    error::{Result, StructError},
};

/// Qualified name used by [`Struct::empty`] when none is given.
pub const EMPTY_FQN: &str = "<<empty>>.<<empty>>";

/// Builds a record's field set.
///
/// The base metadata (fqn, package, name, docs, parents, methods) is fixed
/// at construction; the fields live in an insertion-ordered map keyed by
/// name. Every mutator returns the same builder for chaining. Everything
/// handed in or out is an owned copy, so the builder never aliases caller
/// data.
///
/// # Example
///
/// ```
/// use structsmith_codegen::Struct;
/// use structsmith_ir::{Docs, Field, TypeRef};
///
/// let mut builder = Struct::empty("my-pkg.MyOptions");
/// builder
///     .add([
///         Field::new("keep", TypeRef::string()).optional(),
///         Field::new("drop", TypeRef::number())
///             .with_docs(Docs::default().with_deprecated("gone")),
///     ])
///     .without_deprecated();
///
/// let names: Vec<_> = builder.fields().into_iter().map(|f| f.name).collect();
/// assert_eq!(names, vec!["keep"]);
/// ```
#[derive(Debug, Clone)]
pub struct Struct {
    base: RecordDescriptor,
    fields: IndexMap<String, Field>,
}

impl Struct {
    /// Create a builder from a record.
    pub fn from_spec(spec: &RecordDescriptor) -> Self {
        let mut base = spec.clone();
        let fields = std::mem::take(&mut base.fields)
            .into_iter()
            .map(|f| (f.name.clone(), f))
            .collect();
        Self { base, fields }
    }

    /// Create a builder from a record in a catalog.
    ///
    /// With `merge_parents`, inherited fields are flattened into the base.
    pub fn from_fqn<S: CatalogSource>(
        resolver: &mut Resolver<S>,
        fqn: &str,
        merge_parents: bool,
    ) -> structsmith_catalog::Result<Self> {
        let spec = resolver.resolve(fqn, merge_parents)?;
        tracing::debug!(fqn, fields = spec.fields.len(), merge_parents, "struct from catalog");
        Ok(Self::from_spec(&spec))
    }

    /// Create a builder without fields.
    ///
    /// The package and local name are derived from `fqn`; use
    /// [`EMPTY_FQN`] when the identity does not matter.
    pub fn empty(fqn: &str) -> Self {
        Self::from_spec(&RecordDescriptor::new(fqn))
    }

    /// Add fields, overwriting existing ones with the same name.
    ///
    /// Fields are inserted from the last to the first, so within one call
    /// the first of several same-named fields wins and new fields end up in
    /// reverse order. A later call overwrites an earlier one; overwritten
    /// fields keep their position.
    pub fn add(&mut self, fields: impl IntoIterator<Item = Field>) -> &mut Self {
        let fields: Vec<Field> = fields.into_iter().collect();
        for field in fields.into_iter().rev() {
            self.fields.insert(field.name.clone(), field);
        }
        self
    }

    /// Mix the fields of these sources into the struct.
    ///
    /// Sources are added from the last to the first, each as one
    /// [`Struct::add`], so the first source wins; a later call overwrites an
    /// earlier one.
    pub fn mixin(&mut self, sources: &[&dyn HasFields]) -> &mut Self {
        for source in sources.iter().rev() {
            self.add(source.fields());
        }
        self
    }

    /// Replace an existing field.
    ///
    /// If the replacement has a different name, the old entry is removed
    /// first. Fails if `name` is not present; use [`Struct::add`] for new
    /// fields.
    pub fn replace(&mut self, name: &str, replacement: Field) -> Result<&mut Self> {
        self.ensure_present(name, "replace")?;
        self.put(name, replacement);
        Ok(self)
    }

    /// Transform every field and replace it with the result.
    ///
    /// Keys are snapshotted before the first call, so fields created by a
    /// rename are not visited again.
    pub fn map(&mut self, mut transform: impl FnMut(Field) -> Field) -> &mut Self {
        for key in self.keys() {
            if let Some(current) = self.fields.get(&key).cloned() {
                let replacement = transform(current);
                self.put(&key, replacement);
            }
        }
        self
    }

    /// Merge a partial field over an existing one.
    ///
    /// Attributes are overwritten shallowly, except docs which are merged
    /// entry by entry. A changed name renames the field. Fails if `name` is
    /// not present.
    pub fn update(&mut self, name: &str, update: FieldUpdate) -> Result<&mut Self> {
        self.ensure_present(name, "update")?;
        self.merge(name, &update);
        Ok(self)
    }

    /// Transform every field into a partial update and merge it.
    ///
    /// Same iteration rules as [`Struct::map`].
    pub fn update_every(&mut self, mut transform: impl FnMut(Field) -> FieldUpdate) -> &mut Self {
        for key in self.keys() {
            if let Some(current) = self.fields.get(&key).cloned() {
                let update = transform(current);
                self.merge(&key, &update);
            }
        }
        self
    }

    /// Merge the same partial update into every field.
    pub fn update_all(&mut self, update: FieldUpdate) -> &mut Self {
        for key in self.keys() {
            self.merge(&key, &update);
        }
        self
    }

    /// Rename a field, overwriting any field that already has the new name.
    pub fn rename(&mut self, from: &str, to: &str) -> Result<&mut Self> {
        self.ensure_present(from, "rename")?;
        self.merge(from, &FieldUpdate::new().name(to));
        Ok(self)
    }

    /// Mark every field optional.
    pub fn all_optional(&mut self) -> &mut Self {
        self.map(|mut field| {
            field.optional = true;
            field
        })
    }

    /// Keep only the fields that satisfy `predicate`.
    pub fn filter(&mut self, mut predicate: impl FnMut(&Field) -> bool) -> &mut Self {
        self.fields.retain(|_, field| predicate(field));
        self
    }

    /// Keep only these fields. Unknown names are ignored.
    pub fn only<I, S>(&mut self, keep: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keep: HashSet<String> = keep.into_iter().map(|s| s.as_ref().to_string()).collect();
        self.filter(|field| keep.contains(&field.name))
    }

    /// Remove these fields if present.
    pub fn omit<I, S>(&mut self, remove: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in remove {
            self.fields.shift_remove(name.as_ref());
        }
        self
    }

    /// Remove every field that carries a deprecation notice.
    pub fn without_deprecated(&mut self) -> &mut Self {
        self.filter(|field| !field.is_deprecated())
    }

    /// The current state of the builder as a fresh record.
    pub fn spec(&self) -> RecordDescriptor {
        RecordDescriptor {
            fields: self.fields(),
            ..self.base.clone()
        }
    }

    /// The current fields, in order.
    pub fn fields(&self) -> Vec<Field> {
        self.fields.values().cloned().collect()
    }

    /// The qualified name of the record being built.
    pub fn fqn(&self) -> &str {
        &self.base.fqn
    }

    /// The package that owns the record.
    pub fn assembly(&self) -> &str {
        &self.base.assembly
    }

    /// Look up a current field by name.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Replace the record-level docs.
    pub fn set_docs(&mut self, docs: structsmith_ir::Docs) -> &mut Self {
        self.base.docs = Some(docs);
        self
    }

    /// Replace the rendered (local) name.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.base.name = name.into();
        self
    }

    fn keys(&self) -> Vec<String> {
        self.fields.keys().cloned().collect()
    }

    fn ensure_present(&self, name: &str, action: &'static str) -> Result<()> {
        if self.fields.contains_key(name) {
            Ok(())
        } else {
            Err(StructError::NotFound {
                fqn: self.base.fqn.clone(),
                field: name.to_string(),
                action,
            })
        }
    }

    /// Store `field` in place of `name`, renaming when the names differ.
    fn put(&mut self, name: &str, field: Field) {
        if field.name != name {
            self.fields.shift_remove(name);
        }
        self.fields.insert(field.name.clone(), field);
    }

    fn merge(&mut self, name: &str, update: &FieldUpdate) {
        if let Some(current) = self.fields.get(name) {
            let updated = update.apply(current);
            self.put(name, updated);
        }
    }
}

impl Default for Struct {
    fn default() -> Self {
        Self::empty(EMPTY_FQN)
    }
}
