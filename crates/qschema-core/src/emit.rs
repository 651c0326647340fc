//! Rendering of table descriptors into q declarations.
//!
//! ```text
//! .ns.name:([k1:`t$();k2:`t$()]v1:`t$();`s#v2:`t$();v3:string())
//! ```

use crate::model::{ColumnDescriptor, ColumnType, TableDescriptor};
use std::fmt::Write;

///
/// EmitOptions
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EmitOptions {
    pub unique_attribute: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            unique_attribute: true,
        }
    }
}

/// Render a single table declaration, without a trailing line break.
#[must_use]
pub fn render_table(table: &TableDescriptor, options: EmitOptions) -> String {
    let keys = render_columns(&table.key_columns, options);
    let values = render_columns(&table.value_columns, options);

    format!("{}:([{keys}]{values})", table.name)
}

/// Render tables in the given order, one declaration per line.
///
/// Every declaration ends with a line break; no tables render as `""`.
#[must_use]
pub fn render_schema(tables: &[TableDescriptor], options: EmitOptions) -> String {
    tables.iter().fold(String::new(), |mut out, table| {
        out.push_str(&render_table(table, options));
        out.push('\n');
        out
    })
}

fn render_columns(columns: &[ColumnDescriptor], options: EmitOptions) -> String {
    columns
        .iter()
        .map(|column| render_column(column, options))
        .collect::<Vec<_>>()
        .join(";")
}

fn render_column(column: &ColumnDescriptor, options: EmitOptions) -> String {
    let mut out = String::new();

    // attribute prefix
    if let Some(attr) = column.placement.attribute() {
        let _ = write!(out, "`{attr}#");
    } else if column.unique && options.unique_attribute {
        out.push_str("`u#");
    }

    let _ = write!(out, "{}:{}", column.name, empty_vector(&column.column_type));

    out
}

// the empty typed list literal for a column type
fn empty_vector(column_type: &ColumnType) -> String {
    match column_type {
        ColumnType::Atomic(tag) if tag.is_char_list() => "string()".to_string(),
        ColumnType::Atomic(tag) => format!("`{tag}$()"),
        ColumnType::Reference(name) => format!("`{name}$()"),
    }
}

///
/// TESTS
///
