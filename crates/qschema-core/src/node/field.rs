use crate::{
    node::RecordRef,
    types::{Placement, Primitive, TypeOverride},
};

///
/// FieldType
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldType {
    Primitive(Primitive),

    /// A compound or foreign type with no q mapping, kept by name for diagnostics.
    Unsupported(&'static str),
}

///
/// Modifier
///
/// Declarative fact attached to a field.
///

#[derive(Clone, Copy, Debug)]
pub enum Modifier {
    Key,
    Unique,
    Sorted,
    Parted,
    Grouped,
    ForeignKey(RecordRef),
    DateOverride,
    TimeOverride,
    StringOverride,
}

impl Modifier {
    #[must_use]
    pub const fn placement(&self) -> Option<Placement> {
        match self {
            Self::Sorted => Some(Placement::Sorted),
            Self::Parted => Some(Placement::Parted),
            Self::Grouped => Some(Placement::Grouped),
            _ => None,
        }
    }

    #[must_use]
    pub const fn type_override(&self) -> Option<TypeOverride> {
        match self {
            Self::DateOverride => Some(TypeOverride::Date),
            Self::TimeOverride => Some(TypeOverride::Time),
            Self::StringOverride => Some(TypeOverride::String),
            _ => None,
        }
    }
}

///
/// FieldDescriptor
///

#[derive(Clone, Copy, Debug)]
pub struct FieldDescriptor {
    /// Declared name, before camel-casing.
    pub ident: &'static str,
    pub value: FieldType,

    /// Nullable wrapper; has no effect on the mapped tag.
    pub optional: bool,
    pub modifiers: &'static [Modifier],
}

impl FieldDescriptor {
    #[must_use]
    pub fn is_key(&self) -> bool {
        self.modifiers.iter().any(|m| matches!(m, Modifier::Key))
    }

    #[must_use]
    pub fn is_unique(&self) -> bool {
        self.modifiers.iter().any(|m| matches!(m, Modifier::Unique))
    }

    /// The first foreign-key target, if the field references another record.
    #[must_use]
    pub fn foreign_key(&self) -> Option<RecordRef> {
        self.modifiers.iter().find_map(|m| match m {
            Modifier::ForeignKey(target) => Some(*target),
            _ => None,
        })
    }

    pub fn placements(&self) -> impl Iterator<Item = Placement> + '_ {
        self.modifiers.iter().filter_map(Modifier::placement)
    }

    pub fn type_overrides(&self) -> impl Iterator<Item = TypeOverride> + '_ {
        self.modifiers.iter().filter_map(Modifier::type_override)
    }
}
