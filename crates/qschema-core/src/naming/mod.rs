//! Identifier derivation and validation.

mod reserved;

pub use reserved::{is_reserved_column_word, is_reserved_table_word};

use derive_more::Display;
use thiserror::Error as ThisError;

///
/// NameRole
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum NameRole {
    #[display("column")]
    Column,
    #[display("table")]
    Table,
}

///
/// NameViolation
///
/// The specific rule an identifier breaks.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum NameViolation {
    #[error("identifier is empty")]
    Empty,

    #[error("character '{0}' is not allowed in a q identifier")]
    InvalidCharacter(char),

    #[error("'{word}' is a reserved {role} word")]
    Reserved { word: String, role: NameRole },

    #[error("identifier is already used by another column")]
    Duplicate,
}

/// Lower-case the leading character and keep the rest unchanged.
#[must_use]
pub fn camel_case(name: &str) -> String {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Validate a derived column identifier against the column reserved set.
pub fn validate_column_name(name: &str) -> Result<(), NameViolation> {
    validate_ident(name, NameRole::Column, &[])
}

/// Validate a resolved table base name against the table reserved set.
pub fn validate_table_name(name: &str) -> Result<(), NameViolation> {
    validate_ident(name, NameRole::Table, &[])
}

/// Validate an identifier for a role, with caller-supplied extra reserved words.
pub fn validate_ident(name: &str, role: NameRole, extra: &[String]) -> Result<(), NameViolation> {
    validate_syntax(name)?;

    let reserved = match role {
        NameRole::Column => is_reserved_column_word(name),
        NameRole::Table => is_reserved_table_word(name),
    };

    if reserved || extra.iter().any(|word| word == name) {
        return Err(NameViolation::Reserved {
            word: name.to_string(),
            role,
        });
    }

    Ok(())
}

/// Validate a namespace value; every dot-separated segment must be a plain identifier.
pub fn validate_namespace(namespace: &str) -> Result<(), NameViolation> {
    namespace.split('.').try_for_each(validate_syntax)
}

// q identifiers start with a letter and continue with letters, digits or underscores
fn validate_syntax(name: &str) -> Result<(), NameViolation> {
    let mut chars = name.chars();

    let Some(first) = chars.next() else {
        return Err(NameViolation::Empty);
    };
    if !first.is_ascii_alphabetic() {
        return Err(NameViolation::InvalidCharacter(first));
    }

    if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Err(NameViolation::InvalidCharacter(bad));
    }

    Ok(())
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_lowers_only_the_first_letter() {
        assert_eq!(camel_case("BoolProp"), "boolProp");
        assert_eq!(camel_case("ISO"), "iSO");
        assert_eq!(camel_case("already"), "already");
        assert_eq!(camel_case(""), "");
    }

    #[test]
    fn reserved_column_words_are_rejected() {
        for word in ["type", "select", "i", "count", "value"] {
            assert!(
                matches!(
                    validate_column_name(word),
                    Err(NameViolation::Reserved { .. })
                ),
                "'{word}' should be reserved for columns"
            );
        }
    }

    #[test]
    fn reserved_table_words_are_rejected() {
        for word in ["avg", "distinct", "sum"] {
            assert!(
                validate_table_name(word).is_err(),
                "'{word}' should be reserved for tables"
            );
        }
    }

    #[test]
    fn keywords_are_only_reserved_for_columns() {
        assert!(validate_column_name("where").is_err());
        assert!(validate_table_name("where").is_ok());
        assert!(validate_table_name("i").is_ok());
    }

    #[test]
    fn ordinary_identifiers_pass() {
        for word in ["boolProp", "iso2", "valuePrecision", "country", "nsTable"] {
            assert_eq!(validate_column_name(word), Ok(()));
            assert_eq!(validate_table_name(word), Ok(()));
        }
    }

    #[test]
    fn syntax_violations_are_specific() {
        assert_eq!(validate_column_name(""), Err(NameViolation::Empty));
        assert_eq!(
            validate_column_name("2fast"),
            Err(NameViolation::InvalidCharacter('2'))
        );
        assert_eq!(
            validate_table_name("my-table"),
            Err(NameViolation::InvalidCharacter('-'))
        );
    }

    #[test]
    fn extra_reserved_words_extend_the_builtin_set() {
        let extra = vec!["trade".to_string()];

        assert!(validate_ident("trade", NameRole::Table, &extra).is_err());
        assert!(validate_ident("quote", NameRole::Table, &extra).is_ok());
    }

    #[test]
    fn namespaces_validate_each_segment() {
        assert_eq!(validate_namespace("u"), Ok(()));
        assert_eq!(validate_namespace("dotnetq.qschema.test"), Ok(()));
        assert_eq!(validate_namespace("a..b"), Err(NameViolation::Empty));
        assert_eq!(
            validate_namespace("a.b c"),
            Err(NameViolation::InvalidCharacter(' '))
        );
    }
}
