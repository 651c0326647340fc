use proptest::prelude::*;
use qschema::{
    declare_empty_schema,
    node::{Record, RecordDescriptor},
};

#[allow(dead_code)]
#[derive(qschema::Record)]
#[qschema(namespace = "ref")]
pub struct Exchange {
    #[qschema(key, unique)]
    code: String,
    name: String,
}

#[allow(dead_code)]
#[derive(qschema::Record)]
#[qschema(namespace = "ref")]
pub struct Instrument {
    #[qschema(key, unique)]
    sym: String,
    #[qschema(foreign_key = "Exchange")]
    exchange: String,
    tick: f64,
}

#[allow(dead_code)]
#[derive(qschema::Record)]
#[qschema(namespace = "mkt")]
pub struct Trade {
    #[qschema(foreign_key = "Instrument")]
    sym: String,
    #[qschema(sorted)]
    time: std::time::SystemTime,
    price: f64,
    size: i64,
}

#[allow(dead_code)]
#[derive(qschema::Record)]
#[qschema(namespace = "mkt")]
pub struct Quote {
    #[qschema(foreign_key = "Instrument")]
    sym: String,
    bid: Option<f64>,
    ask: Option<f64>,
}

#[allow(dead_code)]
#[derive(qschema::Record)]
pub struct Standalone {
    flag: bool,
}

fn records() -> Vec<&'static RecordDescriptor> {
    vec![
        Exchange::descriptor(),
        Instrument::descriptor(),
        Trade::descriptor(),
        Quote::descriptor(),
        Standalone::descriptor(),
    ]
}

// every referenced table must be declared on an earlier line
fn assert_references_precede(script: &str) {
    let names: Vec<&str> = script
        .lines()
        .map(|line| line.split_once(':').map_or(line, |(name, _)| name))
        .collect();

    for (i, line) in script.lines().enumerate() {
        for (j, name) in names.iter().enumerate() {
            if line.contains(&format!("`{name}$()")) {
                assert!(j < i, "{name} must be declared before line {i}: {line}");
            }
        }
    }
}

proptest! {
    #[test]
    fn schema_is_order_independent(shuffled in Just(records()).prop_shuffle()) {
        let expected = declare_empty_schema(&records()).unwrap();
        let actual = declare_empty_schema(&shuffled).unwrap();

        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn subsets_keep_dependency_order(
        subset in prop::sample::subsequence(records(), 1..=5).prop_shuffle()
    ) {
        let script = declare_empty_schema(&subset).unwrap();

        prop_assert_eq!(script.lines().count(), subset.len());
        prop_assert!(script.ends_with('\n'));
        assert_references_precede(&script);
    }
}

#[test]
fn optional_columns_share_tags_with_required_ones() {
    let script = declare_empty_schema(&[Quote::descriptor()]).unwrap();

    assert_eq!(
        script,
        ".mkt.quote:([]sym:`.ref.instrument$();bid:`float$();ask:`float$())\n"
    );
}
