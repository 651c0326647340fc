use crate::{
    config::CompileConfig,
    error::SchemaError,
    model::column::{ColumnDescriptor, ColumnRole, extract_columns},
    naming::{NameRole, camel_case, validate_ident, validate_namespace},
    node::RecordDescriptor,
};
use std::fmt::{self, Display};

///
/// QualifiedName
///
/// Table base name with an optional namespace, always rendered rooted:
/// `.base` or `.ns.base`.
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct QualifiedName {
    pub namespace: Option<String>,
    pub base: String,
}

impl QualifiedName {
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.namespace.is_none()
    }
}

impl Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, ".{ns}.{}", self.base),
            None => write!(f, ".{}", self.base),
        }
    }
}

///
/// TableDescriptor
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TableDescriptor {
    /// Simple type name of the source record.
    pub record: &'static str,
    pub name: QualifiedName,
    pub key_columns: Vec<ColumnDescriptor>,
    pub value_columns: Vec<ColumnDescriptor>,
}

impl TableDescriptor {
    #[must_use]
    pub const fn is_keyed(&self) -> bool {
        !self.key_columns.is_empty()
    }

    /// Key columns followed by value columns.
    pub fn columns(&self) -> impl Iterator<Item = &ColumnDescriptor> {
        self.key_columns.iter().chain(&self.value_columns)
    }

    /// Tables referenced through foreign keys, in column order.
    pub fn references(&self) -> impl Iterator<Item = &QualifiedName> {
        self.columns().filter_map(ColumnDescriptor::referenced_table)
    }
}

/// Resolve the qualified table name of a record.
///
/// The reserved-word check runs on the final base name, after any
/// explicit override has been substituted.
pub fn resolve_table_name(
    record: &RecordDescriptor,
    config: &CompileConfig,
) -> Result<QualifiedName, SchemaError> {
    let base = match record.table_name {
        Some(name) => name.to_string(),
        None => camel_case(record.ident),
    };

    validate_ident(&base, NameRole::Table, &config.reserved.tables).map_err(|reason| {
        SchemaError::InvalidTableName {
            record: record.ident.to_string(),
            name: base.clone(),
            reason,
        }
    })?;

    // an explicit marker wins, even when empty; only its absence falls back
    let namespace = match record.namespace {
        Some(ns) => Some(ns),
        None => config.default_namespace.as_deref(),
    }
    .filter(|ns| !ns.is_empty());

    if let Some(ns) = namespace {
        validate_namespace(ns).map_err(|reason| SchemaError::InvalidTableName {
            record: record.ident.to_string(),
            name: ns.to_string(),
            reason,
        })?;
    }

    Ok(QualifiedName {
        namespace: namespace.map(ToString::to_string),
        base,
    })
}

/// Build the full table descriptor of a record.
pub fn build_table(
    record: &RecordDescriptor,
    config: &CompileConfig,
) -> Result<TableDescriptor, SchemaError> {
    let name = resolve_table_name(record, config)?;

    let (key_columns, value_columns): (Vec<_>, Vec<_>) = extract_columns(record, config)?
        .into_iter()
        .partition(|column| column.role == ColumnRole::Key);

    Ok(TableDescriptor {
        record: record.ident,
        name,
        key_columns,
        value_columns,
    })
}

///
/// TESTS
///
