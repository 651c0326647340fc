//! Derived column and table descriptors.
//!
//! Everything here is computed fresh from record metadata on every call.

pub mod column;
pub mod table;

pub use column::{ColumnDescriptor, ColumnRole, ColumnType, extract_columns};
pub use table::{QualifiedName, TableDescriptor, build_table, resolve_table_name};
