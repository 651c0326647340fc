use crate::{
    config::CompileConfig,
    error::SchemaError,
    model::table::{QualifiedName, resolve_table_name},
    naming::{NameRole, NameViolation, camel_case, validate_ident},
    node::{FieldDescriptor, FieldType, RecordDescriptor},
    types::{Placement, TypeTag, map_type_tag},
};
use std::fmt::{self, Display};

///
/// ColumnRole
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColumnRole {
    Key,
    Value,
    ForeignKey,
}

///
/// ColumnType
///
/// Either an atomic tag or a reference to another table's qualified name.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ColumnType {
    Atomic(TypeTag),
    Reference(QualifiedName),
}

impl Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atomic(tag) => write!(f, "{tag}"),
            Self::Reference(name) => write!(f, "{name}"),
        }
    }
}

///
/// ColumnDescriptor
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ColumnDescriptor {
    pub name: String,
    pub column_type: ColumnType,
    pub role: ColumnRole,
    pub placement: Placement,
    pub unique: bool,
}

impl ColumnDescriptor {
    #[must_use]
    pub const fn is_foreign_key(&self) -> bool {
        matches!(self.column_type, ColumnType::Reference(_))
    }

    #[must_use]
    pub const fn referenced_table(&self) -> Option<&QualifiedName> {
        match &self.column_type {
            ColumnType::Reference(name) => Some(name),
            ColumnType::Atomic(_) => None,
        }
    }
}

/// Extract the ordered column list of a record.
///
/// The first failing field aborts the whole record. A field whose column
/// name repeats an earlier one fails as `InvalidColumnName`.
pub fn extract_columns(
    record: &RecordDescriptor,
    config: &CompileConfig,
) -> Result<Vec<ColumnDescriptor>, SchemaError> {
    let mut columns: Vec<ColumnDescriptor> = Vec::with_capacity(record.fields.len());

    for field in record.fields {
        let column = extract_column(record, field, config)?;
        if columns.iter().any(|c| c.name == column.name) {
            return Err(SchemaError::InvalidColumnName {
                record: record.ident.to_string(),
                column: column.name,
                reason: NameViolation::Duplicate,
            });
        }

        columns.push(column);
    }

    Ok(columns)
}

fn extract_column(
    record: &RecordDescriptor,
    field: &FieldDescriptor,
    config: &CompileConfig,
) -> Result<ColumnDescriptor, SchemaError> {
    let target = field.foreign_key();
    let unique = field.is_unique();

    // placement
    let placement = resolve_placement(record, field, target.is_some(), unique)?;

    // name
    let name = camel_case(field.ident);
    validate_ident(&name, NameRole::Column, &config.reserved.columns).map_err(|reason| {
        SchemaError::InvalidColumnName {
            record: record.ident.to_string(),
            column: name.clone(),
            reason,
        }
    })?;

    // type
    let column_type = match target {
        Some(target) => {
            if field.type_overrides().next().is_some() {
                return Err(invalid_override(
                    record,
                    field,
                    "type overrides cannot apply to a foreign-key column",
                ));
            }

            ColumnType::Reference(resolve_table_name(target.resolve(), config)?)
        }
        None => ColumnType::Atomic(resolve_tag(record, field)?),
    };

    let role = if field.is_key() {
        ColumnRole::Key
    } else if target.is_some() {
        ColumnRole::ForeignKey
    } else {
        ColumnRole::Value
    };

    Ok(ColumnDescriptor {
        name,
        column_type,
        role,
        placement,
        unique,
    })
}

// q allows a single attribute per column, and only on atomic vectors
fn resolve_placement(
    record: &RecordDescriptor,
    field: &FieldDescriptor,
    is_foreign_key: bool,
    unique: bool,
) -> Result<Placement, SchemaError> {
    let mut placements = field.placements();
    let Some(placement) = placements.next() else {
        return Ok(Placement::None);
    };

    let reason = if placements.next().is_some() {
        Some("more than one placement modifier".to_string())
    } else if is_foreign_key {
        Some(format!("{placement} cannot apply to a foreign-key column"))
    } else if let FieldType::Unsupported(ty) = field.value {
        Some(format!("{placement} cannot apply to non-atomic type '{ty}'"))
    } else if unique {
        Some(format!("{placement} cannot be combined with unique"))
    } else {
        None
    };

    match reason {
        Some(reason) => Err(SchemaError::InvalidPlacement {
            record: record.ident.to_string(),
            column: camel_case(field.ident),
            reason,
        }),
        None => Ok(placement),
    }
}

fn resolve_tag(record: &RecordDescriptor, field: &FieldDescriptor) -> Result<TypeTag, SchemaError> {
    let primitive = match field.value {
        FieldType::Primitive(p) => p,
        FieldType::Unsupported(ty) => {
            return Err(SchemaError::UnsupportedType {
                record: record.ident.to_string(),
                column: camel_case(field.ident),
                ty: ty.to_string(),
            });
        }
    };

    let mut overrides = field.type_overrides();
    let ov = overrides.next();
    if overrides.next().is_some() {
        return Err(invalid_override(
            record,
            field,
            "more than one type override",
        ));
    }
    if let Some(ov) = ov
        && !primitive.accepts_override(ov)
    {
        return Err(invalid_override(
            record,
            field,
            &format!("{ov} override does not apply to {primitive}"),
        ));
    }

    Ok(map_type_tag(primitive, ov))
}

fn invalid_override(record: &RecordDescriptor, field: &FieldDescriptor, reason: &str) -> SchemaError {
    SchemaError::InvalidOverride {
        record: record.ident.to_string(),
        column: camel_case(field.ident),
        reason: reason.to_string(),
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        node::{Modifier, RecordRef},
        test_fixtures::{field, record, region},
    };

    fn extract(record: &RecordDescriptor) -> Result<Vec<ColumnDescriptor>, SchemaError> {
        extract_columns(record, &CompileConfig::default())
    }

    #[test]
    fn columns_keep_declaration_order_and_roles() {
        static R: RecordDescriptor = record!(
            "Trade",
            [
                field!("Sym", Text, Modifier::Sorted),
                field!("Id", Int64, Modifier::Key, Modifier::Unique),
                field!("Region", Text, Modifier::ForeignKey(RecordRef(region))),
            ]
        );

        let columns = extract(&R).unwrap();
        let names: Vec<_> = columns.iter().map(|c| c.name.as_str()).collect();

        assert_eq!(names, ["sym", "id", "region"]);
        assert_eq!(columns[0].role, ColumnRole::Value);
        assert_eq!(columns[0].placement, Placement::Sorted);
        assert_eq!(columns[1].role, ColumnRole::Key);
        assert!(columns[1].unique);
        assert_eq!(columns[2].role, ColumnRole::ForeignKey);
        assert_eq!(
            columns[2].referenced_table().map(ToString::to_string).as_deref(),
            Some(".test.region")
        );
    }

    #[test]
    fn optional_fields_map_like_required_ones() {
        static R: RecordDescriptor = record!(
            "Opt",
            [
                field!("Plain", Timestamp),
                FieldDescriptor {
                    ident: "Wrapped",
                    value: FieldType::Primitive(crate::types::Primitive::Timestamp),
                    optional: true,
                    modifiers: &[],
                },
            ]
        );

        let columns = extract(&R).unwrap();

        assert_eq!(columns[0].column_type, columns[1].column_type);
        assert_eq!(columns[0].column_type, ColumnType::Atomic(TypeTag::Datetime));
    }

    #[test]
    fn placement_on_foreign_key_is_rejected() {
        static R: RecordDescriptor = record!(
            "Country",
            [field!(
                "Region",
                Text,
                Modifier::ForeignKey(RecordRef(region)),
                Modifier::Grouped
            )]
        );

        let err = extract(&R).unwrap_err();

        assert!(
            matches!(&err, SchemaError::InvalidPlacement { column, .. } if column == "region"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn placement_on_compound_type_is_rejected() {
        static R: RecordDescriptor = record!(
            "Bag",
            [FieldDescriptor {
                ident: "Items",
                value: FieldType::Unsupported("Vec<String>"),
                optional: false,
                modifiers: &[Modifier::Parted],
            }]
        );

        assert!(matches!(
            extract(&R),
            Err(SchemaError::InvalidPlacement { .. })
        ));
    }

    #[test]
    fn conflicting_attributes_are_rejected() {
        static TWO: RecordDescriptor =
            record!("Two", [field!("A", Int32, Modifier::Sorted, Modifier::Grouped)]);
        static WITH_UNIQUE: RecordDescriptor = record!(
            "WithUnique",
            [field!("A", Int32, Modifier::Unique, Modifier::Sorted)]
        );

        assert!(matches!(
            extract(&TWO),
            Err(SchemaError::InvalidPlacement { .. })
        ));
        assert!(matches!(
            extract(&WITH_UNIQUE),
            Err(SchemaError::InvalidPlacement { .. })
        ));
    }

    #[test]
    fn compound_type_without_placement_is_unsupported() {
        static R: RecordDescriptor = record!(
            "Bag",
            [FieldDescriptor {
                ident: "Items",
                value: FieldType::Unsupported("Vec<String>"),
                optional: false,
                modifiers: &[],
            }]
        );

        let err = extract(&R).unwrap_err();

        assert!(matches!(&err, SchemaError::UnsupportedType { ty, .. } if ty == "Vec<String>"));
    }

    #[test]
    fn reserved_column_name_is_rejected() {
        static R: RecordDescriptor = record!("Bad", [field!("Type", Bool)]);

        let err = extract(&R).unwrap_err();

        assert!(matches!(
            err,
            SchemaError::InvalidColumnName {
                reason: NameViolation::Reserved { .. },
                ..
            }
        ));
    }

    #[test]
    fn configured_reserved_columns_are_rejected() {
        static R: RecordDescriptor = record!("Quote", [field!("Sym", Text)]);

        let mut config = CompileConfig::default();
        config.reserved.columns.push("sym".to_string());

        assert!(extract_columns(&R, &config).is_err());
        assert!(extract(&R).is_ok());
    }

    fn override_reason(record: &RecordDescriptor) -> String {
        match extract(record) {
            Err(SchemaError::InvalidOverride { reason, .. }) => reason,
            other => panic!(
                "record {} should fail with InvalidOverride, got {other:?}",
                record.ident
            ),
        }
    }

    #[test]
    fn override_on_unrelated_primitive_is_rejected() {
        static R: RecordDescriptor = record!("W", [field!("Qty", Int32, Modifier::DateOverride)]);

        assert_eq!(override_reason(&R), "Date override does not apply to Int32");
    }

    #[test]
    fn two_overrides_are_rejected() {
        static R: RecordDescriptor = record!(
            "T",
            [field!(
                "At",
                Timestamp,
                Modifier::DateOverride,
                Modifier::TimeOverride
            )]
        );

        assert_eq!(override_reason(&R), "more than one type override");
    }

    #[test]
    fn override_on_foreign_key_is_rejected() {
        static R: RecordDescriptor = record!(
            "F",
            [field!(
                "Region",
                Text,
                Modifier::ForeignKey(RecordRef(region)),
                Modifier::StringOverride
            )]
        );

        assert_eq!(
            override_reason(&R),
            "type overrides cannot apply to a foreign-key column"
        );
    }

    #[test]
    fn duplicate_column_names_are_rejected() {
        static R: RecordDescriptor =
            record!("Dup", [field!("foo", Int32), field!("Foo", Int32)]);

        let err = extract(&R).unwrap_err();

        assert!(
            matches!(
                &err,
                SchemaError::InvalidColumnName {
                    column,
                    reason: NameViolation::Duplicate,
                    ..
                } if column == "foo"
            ),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn first_failing_field_wins() {
        static R: RecordDescriptor = record!(
            "Mixed",
            [
                field!("Select", Int32),
                FieldDescriptor {
                    ident: "Items",
                    value: FieldType::Unsupported("Vec<u8>"),
                    optional: false,
                    modifiers: &[],
                },
            ]
        );

        assert!(matches!(
            extract(&R),
            Err(SchemaError::InvalidColumnName { .. })
        ));
    }
}
