//! Hand-written record descriptors shared by the unit tests.

use crate::node::{Modifier, RecordDescriptor, RecordRef};

macro_rules! field {
    ($ident:literal, $prim:ident $(, $modifier:expr)* $(,)?) => {
        $crate::node::FieldDescriptor {
            ident: $ident,
            value: $crate::node::FieldType::Primitive($crate::types::Primitive::$prim),
            optional: false,
            modifiers: &[$($modifier),*],
        }
    };
}

macro_rules! record {
    ($ident:literal, [$($field:expr),* $(,)?]) => {
        $crate::node::RecordDescriptor {
            ident: $ident,
            table_name: None,
            namespace: None,
            fields: &[$($field),*],
        }
    };
    ($ident:literal, namespace = $ns:literal, [$($field:expr),* $(,)?]) => {
        $crate::node::RecordDescriptor {
            ident: $ident,
            table_name: None,
            namespace: Some($ns),
            fields: &[$($field),*],
        }
    };
}

pub(crate) use field;
pub(crate) use record;

//
// region / currency / country
//

pub(crate) static REGION: RecordDescriptor = record!(
    "Region",
    namespace = "test",
    [
        field!("Id", Text, Modifier::Key, Modifier::Unique),
        field!("Code", Text, Modifier::Unique),
        field!("Name", Text),
    ]
);

pub(crate) static CURRENCY: RecordDescriptor = record!(
    "Currency",
    namespace = "test",
    [
        field!("Id", Text, Modifier::Key, Modifier::Unique),
        field!("Iso", Text, Modifier::Unique),
        field!("Name", Text),
        field!("ValuePrecision", Int32),
    ]
);

pub(crate) static COUNTRY: RecordDescriptor = record!(
    "Country",
    namespace = "test",
    [
        field!("Id", Text, Modifier::Key, Modifier::Unique),
        field!("Iso2", Text, Modifier::Unique),
        field!("Iso3", Text, Modifier::Unique),
        field!("Name", Text),
        field!("Region", Text, Modifier::ForeignKey(RecordRef(region))),
        field!("Currency", Text, Modifier::ForeignKey(RecordRef(currency))),
    ]
);

pub(crate) fn region() -> &'static RecordDescriptor {
    &REGION
}

pub(crate) fn currency() -> &'static RecordDescriptor {
    &CURRENCY
}

//
// cycle: Alpha -> Beta -> Gamma -> Alpha
//

pub(crate) static ALPHA: RecordDescriptor = record!(
    "Alpha",
    [field!("Beta", Int64, Modifier::ForeignKey(RecordRef(beta)))]
);

pub(crate) static BETA: RecordDescriptor = record!(
    "Beta",
    [field!("Gamma", Int64, Modifier::ForeignKey(RecordRef(gamma)))]
);

pub(crate) static GAMMA: RecordDescriptor = record!(
    "Gamma",
    [field!("Alpha", Int64, Modifier::ForeignKey(RecordRef(alpha)))]
);

fn alpha() -> &'static RecordDescriptor {
    &ALPHA
}

fn beta() -> &'static RecordDescriptor {
    &BETA
}

fn gamma() -> &'static RecordDescriptor {
    &GAMMA
}

