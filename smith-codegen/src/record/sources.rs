//! Capabilities shared by builders and raw records.

use structsmith_ir::{Field, RecordDescriptor};

use super::Struct;

/// Something that has a field collection, usable as a `mixin` source.
pub trait HasFields {
    /// An owned copy of the fields, in order.
    fn fields(&self) -> Vec<Field>;
}

/// Something that can be rendered as a record declaration.
pub trait HasStructSpec {
    /// An owned snapshot of the record.
    fn spec(&self) -> RecordDescriptor;
}

impl HasFields for RecordDescriptor {
    fn fields(&self) -> Vec<Field> {
        self.fields.clone()
    }
}

impl HasStructSpec for RecordDescriptor {
    fn spec(&self) -> RecordDescriptor {
        self.clone()
    }
}

impl HasFields for Struct {
    fn fields(&self) -> Vec<Field> {
        Struct::fields(self)
    }
}

impl HasStructSpec for Struct {
    fn spec(&self) -> RecordDescriptor {
        Struct::spec(self)
    }
}
