//! Core of QSchema: compiles record descriptors into empty q table
//! declarations.
//!
//! ## Crate layout
//! - `node`: record metadata consumed by the compiler.
//! - `types`: semantic primitives, overrides, placements and q type tags.
//! - `naming`: identifier derivation and reserved-word validation.
//! - `model`: column extraction and table descriptor building.
//! - `graph`: foreign-key dependency ordering.
//! - `emit`: rendering into q declaration syntax.
//! - `compile`: the configurable `SchemaCompiler` tying it all together.
#![warn(unreachable_pub)]

pub mod compile;
pub mod config;
pub mod emit;
pub mod error;
pub mod graph;
pub mod model;
pub mod naming;
pub mod node;
pub mod trace;
pub mod types;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use compile::SchemaCompiler;
pub use error::SchemaError;

use node::{Record, RecordDescriptor};

///
/// Prelude
///
/// Domain vocabulary only: descriptors, the record trait and the entry points.
///

pub mod prelude {
    pub use crate::{
        SchemaCompiler, SchemaError, declare_empty_schema, declare_empty_table, get_table_name,
        node::{FieldDescriptor, FieldType, Modifier, Record, RecordDescriptor, RecordRef},
        types::Primitive,
    };
}

/// Declare a single empty table for a record type.
pub fn declare_empty_table<R: Record>() -> Result<String, SchemaError> {
    declare_empty_table_for(R::descriptor())
}

/// Declare a single empty table from a descriptor.
pub fn declare_empty_table_for(record: &RecordDescriptor) -> Result<String, SchemaError> {
    SchemaCompiler::new().declare_table(record)
}

/// Declare every record as an empty table, referenced tables first.
///
/// The output is independent of the order of `records` and ends with a
/// line break.
pub fn declare_empty_schema(records: &[&RecordDescriptor]) -> Result<String, SchemaError> {
    SchemaCompiler::new().declare_schema(records)
}

/// Qualified table name of a record type, e.g. `.u.nsTable`.
pub fn get_table_name<R: Record>() -> Result<String, SchemaError> {
    get_table_name_for(R::descriptor())
}

/// Qualified table name from a descriptor.
pub fn get_table_name_for(record: &RecordDescriptor) -> Result<String, SchemaError> {
    SchemaCompiler::new()
        .table_name(record)
        .map(|name| name.to_string())
}
