#![no_main]

use std::sync::OnceLock;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use valmsg::{FailureRecord, FieldKind, MessageFormatter, TemplateCatalog};

#[derive(Debug, Arbitrary)]
enum Shape {
    Text,
    Sequence,
    Map,
    Unsigned,
    Float,
    Bool,
    Temporal,
    Struct,
}

#[derive(Debug, Arbitrary)]
struct Input {
    rule_index: u8,
    rule: String,
    field: String,
    param: String,
    shape: Shape,
    optional_depth: u8,
}

const RULES: &[&str] = &[
    "len", "min", "max", "lt", "lte", "gt", "gte", "required", "oneof", "eqfield",
];

static CATALOG: OnceLock<TemplateCatalog> = OnceLock::new();

fuzz_target!(|input: Input| {
    let catalog = CATALOG.get_or_init(TemplateCatalog::russian);
    let formatter = MessageFormatter::new(catalog);

    let rule = match RULES.get(usize::from(input.rule_index)) {
        Some(rule) => (*rule).to_owned(),
        None => input.rule,
    };
    let mut kind = match input.shape {
        Shape::Text => FieldKind::Text,
        Shape::Sequence => FieldKind::Sequence,
        Shape::Map => FieldKind::Map,
        Shape::Unsigned => FieldKind::Unsigned,
        Shape::Float => FieldKind::Float,
        Shape::Bool => FieldKind::Bool,
        Shape::Temporal => FieldKind::Temporal,
        Shape::Struct => FieldKind::Struct,
    };
    for _ in 0..input.optional_depth % 3 {
        kind = kind.optional();
    }

    let record = FailureRecord::new(rule, input.field, input.param, kind);

    // format is total and never empty; it agrees with try_format.
    let message = formatter.format(&record);
    assert!(!message.is_empty());
    match formatter.try_format(&record) {
        Ok(localized) => assert_eq!(message, localized),
        Err(_) => assert_eq!(message, record.fallback_message()),
    }
});
