use crate::node::FieldDescriptor;
use std::fmt;

///
/// Record
///
/// Implemented by types that can describe themselves to the compiler,
/// usually through `#[derive(Record)]`.
///

pub trait Record {
    fn descriptor() -> &'static RecordDescriptor;
}

///
/// RecordDescriptor
///

#[derive(Debug)]
pub struct RecordDescriptor {
    /// Simple type name, e.g. `Country`.
    pub ident: &'static str,

    /// Explicit table name; bypasses camel-casing of `ident`.
    pub table_name: Option<&'static str>,

    /// Explicit namespace marker. `Some("")` is a marker with an empty value.
    pub namespace: Option<&'static str>,

    pub fields: &'static [FieldDescriptor],
}

///
/// RecordRef
///
/// Lazily resolved pointer to another record's descriptor. Resolution is
/// deferred so that mutually referencing records can be described.
///

#[derive(Clone, Copy)]
pub struct RecordRef(pub fn() -> &'static RecordDescriptor);

impl RecordRef {
    #[must_use]
    pub fn resolve(self) -> &'static RecordDescriptor {
        (self.0)()
    }
}

impl fmt::Debug for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordRef({})", self.resolve().ident)
    }
}
