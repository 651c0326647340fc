use derive_more::Display;

///
/// Primitive
///
/// Semantic element type of a record field, independent of any host language.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[remain::sorted]
pub enum Primitive {
    Bool,
    Char,
    Decimal,
    Duration,
    Float32,
    Float64,
    Int8,
    Int16,
    Int32,
    Int64,
    Text,
    Timestamp,
}

impl Primitive {
    /// Every semantic type the mapper understands.
    pub const ALL: [Self; 12] = [
        Self::Bool,
        Self::Char,
        Self::Decimal,
        Self::Duration,
        Self::Float32,
        Self::Float64,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Text,
        Self::Timestamp,
    ];

    /// Whether the given override changes the tag of this primitive.
    #[must_use]
    pub const fn accepts_override(self, ov: TypeOverride) -> bool {
        matches!(
            (self, ov),
            (Self::Timestamp, TypeOverride::Date | TypeOverride::Time)
                | (Self::Duration, TypeOverride::Time)
                | (Self::Text, TypeOverride::String)
        )
    }
}

///
/// TypeOverride
///
/// Field-level modifier that forces a specific tag regardless of the
/// default mapping for the field's semantic type.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum TypeOverride {
    Date,
    Time,
    String,
}

///
/// Placement
///
/// Storage attribute applied to a column, rendered as a one character
/// prefix. `None` renders nothing.
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq)]
pub enum Placement {
    #[default]
    None,
    Sorted,
    Parted,
    Grouped,
}

impl Placement {
    /// The q attribute character for this placement, if any.
    #[must_use]
    pub const fn attribute(self) -> Option<char> {
        match self {
            Self::None => None,
            Self::Sorted => Some('s'),
            Self::Parted => Some('p'),
            Self::Grouped => Some('g'),
        }
    }
}

///
/// TypeTag
///
/// Element type token of an atomic q column.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum TypeTag {
    #[display("boolean")]
    Boolean,
    #[display("char")]
    Char,
    #[display("byte")]
    Byte,
    #[display("short")]
    Short,
    #[display("int")]
    Int,
    #[display("long")]
    Long,
    #[display("real")]
    Real,
    #[display("float")]
    Float,
    #[display("datetime")]
    Datetime,
    #[display("timespan")]
    Timespan,
    #[display("date")]
    Date,
    #[display("time")]
    Time,
    #[display("symbol")]
    Symbol,
    #[display("string")]
    String,
}

impl TypeTag {
    /// `string` columns are nested char lists rather than typed vectors.
    #[must_use]
    pub const fn is_char_list(self) -> bool {
        matches!(self, Self::String)
    }
}

/// Map a semantic primitive (plus optional override) to its q type tag.
///
/// Total over [`Primitive`]. Overrides that do not apply to the primitive
/// leave the default tag in place; callers that care reject them upfront.
#[must_use]
pub const fn map_type_tag(primitive: Primitive, ov: Option<TypeOverride>) -> TypeTag {
    match (primitive, ov) {
        (Primitive::Bool, _) => TypeTag::Boolean,
        (Primitive::Char, _) => TypeTag::Char,
        (Primitive::Int8, _) => TypeTag::Byte,
        (Primitive::Int16, _) => TypeTag::Short,
        (Primitive::Int32, _) => TypeTag::Int,
        (Primitive::Int64, _) => TypeTag::Long,
        (Primitive::Float32, _) => TypeTag::Real,
        (Primitive::Float64 | Primitive::Decimal, _) => TypeTag::Float,

        (Primitive::Timestamp, Some(TypeOverride::Date)) => TypeTag::Date,
        (Primitive::Timestamp | Primitive::Duration, Some(TypeOverride::Time)) => TypeTag::Time,
        (Primitive::Timestamp, _) => TypeTag::Datetime,
        (Primitive::Duration, _) => TypeTag::Timespan,

        (Primitive::Text, Some(TypeOverride::String)) => TypeTag::String,
        (Primitive::Text, _) => TypeTag::Symbol,
    }
}

///
/// TESTS
///
