use crate::{config::ConfigError, naming::NameViolation};
use thiserror::Error as ThisError;

///
/// SchemaError
///
/// Every variant is fatal to the compilation request that raised it;
/// nothing is partially emitted.
///

#[derive(Debug, ThisError)]
pub enum SchemaError {
    #[error("record '{record}': invalid column name '{column}': {reason}")]
    InvalidColumnName {
        record: String,
        column: String,
        reason: NameViolation,
    },

    #[error("record '{record}': invalid table name '{name}': {reason}")]
    InvalidTableName {
        record: String,
        name: String,
        reason: NameViolation,
    },

    #[error("record '{record}', column '{column}': invalid placement: {reason}")]
    InvalidPlacement {
        record: String,
        column: String,
        reason: String,
    },

    #[error("record '{record}', column '{column}': unsupported type '{ty}'")]
    UnsupportedType {
        record: String,
        column: String,
        ty: String,
    },

    #[error("record '{record}', column '{column}': invalid type override: {reason}")]
    InvalidOverride {
        record: String,
        column: String,
        reason: String,
    },

    #[error("foreign-key cycle: {}", .cycle.join(" -> "))]
    CyclicSchema { cycle: Vec<String> },

    #[error("table '{name}' is declared by both '{first}' and '{second}'")]
    DuplicateTable {
        name: String,
        first: String,
        second: String,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SchemaError {
    /// Short stable name of the error kind, for callers that surface it.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidColumnName { .. } => "InvalidColumnName",
            Self::InvalidTableName { .. } => "InvalidTableName",
            Self::InvalidPlacement { .. } => "InvalidPlacement",
            Self::UnsupportedType { .. } => "UnsupportedType",
            Self::InvalidOverride { .. } => "InvalidOverride",
            Self::CyclicSchema { .. } => "CyclicSchema",
            Self::DuplicateTable { .. } => "DuplicateTable",
            Self::Config(_) => "Config",
        }
    }
}
