//! Tests for schema compilation, field rules and default derivation.
mod common;
use common::*;
use algoform::prelude::*;
use algoform::schema::{NumberCheck, STEP_TOLERANCE};

fn check(input: AlgorithmInput, value: FieldValue) -> FieldStatus {
    let def = definition("algo", vec![input]);
    let key = def.inputs[0].key().to_string();
    let schema = SchemaCompiler::new(&def).compile_schema();
    schema.rule(&key).expect("rule compiled").check(&value)
}

fn range(from: Option<&str>, to: Option<&str>) -> FieldValue {
    FieldValue::DateRange(DateRangeValue::new(from, to))
}

#[test]
fn test_compiles_one_rule_per_input() {
    let def = definition(
        "algo",
        vec![
            number_input("n", None, None, None, None),
            text_input("t", None, None),
            date_range_input("d", None, true, true),
        ],
    );
    let schema = SchemaCompiler::new(&def).compile_schema();

    assert_eq!(schema.algorithm(), "algo");
    assert_eq!(schema.keys().collect::<Vec<_>>(), vec!["n", "t", "d"]);
    assert!(matches!(schema.rule("n"), Some(FieldRule::Number { .. })));
    assert!(matches!(schema.rule("t"), Some(FieldRule::Text { .. })));
    assert!(matches!(schema.rule("d"), Some(FieldRule::DateRange { .. })));
}

#[test]
fn test_step_check_starts_at_min_or_zero() {
    let def = definition(
        "algo",
        vec![
            number_input("with_min", Some(3.0), None, Some(2.0), None),
            number_input("no_min", None, Some(9.0), Some(2.0), None),
        ],
    );
    let schema = SchemaCompiler::new(&def).compile_schema();

    match schema.rule("with_min") {
        Some(FieldRule::Number { checks, .. }) => assert_eq!(
            checks,
            &vec![NumberCheck::Min(3.0), NumberCheck::Step { start: 3.0, step: 2.0 }]
        ),
        other => panic!("Expected number rule, got {:?}", other),
    }
    match schema.rule("no_min") {
        Some(FieldRule::Number { checks, .. }) => assert_eq!(
            checks,
            &vec![NumberCheck::Max(9.0), NumberCheck::Step { start: 0.0, step: 2.0 }]
        ),
        other => panic!("Expected number rule, got {:?}", other),
    }
}

#[test]
fn test_number_scenario_bounds_and_step() {
    let input = || number_input("Rate", Some(0.0), Some(100.0), Some(5.0), Some(10.0));

    assert_eq!(check(input(), FieldValue::Number(10.0)), FieldStatus::Valid);
    assert_eq!(
        check(input(), FieldValue::Number(12.0)),
        FieldStatus::invalid("Rate must align with step 5")
    );
    assert_eq!(check(input(), FieldValue::Number(105.0)), FieldStatus::invalid("Rate must be ≤ 100"));
    assert_eq!(check(input(), FieldValue::Number(-5.0)), FieldStatus::invalid("Rate must be ≥ 0"));
}

#[test]
fn test_number_alignment_property_over_grid() {
    let (min, max, step) = (2.0, 20.0, 1.5);
    let input = || number_input("n", Some(min), Some(max), Some(step), None);

    for i in -20..=200 {
        let v = i as f64 * 0.25;
        let on_grid = ((v - min) / step).fract().abs() < 1e-9;
        let expected = v >= min && v <= max && on_grid;
        assert_eq!(
            check(input(), v.into()).is_valid(),
            expected,
            "value {} should be {}",
            v,
            if expected { "valid" } else { "invalid" }
        );
    }
}

#[test]
fn test_step_tolerates_floating_point_error() {
    let input = || number_input("n", Some(0.0), Some(1.0), Some(0.1), None);
    assert!(check(input(), FieldValue::Number(0.1 + 0.2)).is_valid());
    assert!(check(input(), FieldValue::Number(0.7)).is_valid());
    assert!(!check(input(), FieldValue::Number(0.75)).is_valid());
    assert_eq!(STEP_TOLERANCE, 1e-8);
}

#[test]
fn test_number_presence_and_type() {
    let required = || number_input("Count", None, None, None, None);
    assert_eq!(check(required(), FieldValue::Empty), FieldStatus::invalid("Count is required"));
    assert_eq!(
        check(required(), "twelve".into()),
        FieldStatus::invalid("Count must be a number")
    );
    assert_eq!(
        check(required(), f64::NAN.into()),
        FieldStatus::invalid("Count must be a number")
    );

    let mut optional = required();
    if let AlgorithmInput::Number(cfg) = &mut optional {
        cfg.required = Some(false);
        cfg.min = Some(5.0);
    }
    assert_eq!(check(optional.clone(), FieldValue::Empty), FieldStatus::Valid);
    // Optional fields still enforce their constraints once a value is present.
    assert_eq!(check(optional, FieldValue::Number(1.0)), FieldStatus::invalid("Count must be ≥ 5"));
}

#[test]
fn test_fractional_bounds_in_messages() {
    let input = number_input("Ratio", Some(0.5), Some(2.5), None, None);
    assert_eq!(check(input, FieldValue::Number(3.0)), FieldStatus::invalid("Ratio must be ≤ 2.5"));
}

#[test]
fn test_required_text_rejects_blank() {
    let input = || text_input("Name", None, None);
    assert_eq!(check(input(), "".into()), FieldStatus::invalid("Name is required"));
    assert_eq!(check(input(), "   \t".into()), FieldStatus::invalid("Name is required"));
    assert_eq!(check(input(), FieldValue::Empty), FieldStatus::invalid("Name is required"));
    assert_eq!(check(input(), "  x ".into()), FieldStatus::Valid);
    assert_eq!(check(input(), FieldValue::Number(4.0)), FieldStatus::invalid("Name must be text"));
}

#[test]
fn test_optional_text_accepts_anything_textual() {
    let input = || text_input("Note", Some(false), None);
    assert_eq!(check(input(), FieldValue::Empty), FieldStatus::Valid);
    assert_eq!(check(input(), "  ".into()), FieldStatus::Valid);
    assert_eq!(check(input(), "".into()), FieldStatus::Valid);
    assert_eq!(check(input(), "hello".into()), FieldStatus::Valid);
}

#[test]
fn test_date_range_open_start_scenario() {
    let input = || date_range_input("Window", None, true, false);
    assert_eq!(check(input(), range(None, Some("2024-01-01"))), FieldStatus::Valid);
    assert_eq!(
        check(input(), range(None, None)),
        FieldStatus::invalid("Window end is required")
    );
    assert_eq!(
        check(input(), range(Some("2024-01-01"), None)),
        FieldStatus::invalid("Window end is required")
    );
}

#[test]
fn test_date_range_order_scenario() {
    let input = || date_range_input("Window", None, false, false);
    assert_eq!(
        check(input(), range(Some("2024-06-01"), Some("2024-01-01"))),
        FieldStatus::invalid("Window start must be before end")
    );
    assert_eq!(
        check(input(), range(Some("2024-01-01"), Some("2024-01-01"))),
        FieldStatus::Valid
    );
    assert_eq!(
        check(input(), range(Some("2024-01-01"), Some("2024-06-01"))),
        FieldStatus::Valid
    );
}

#[test]
fn test_date_range_pattern_is_syntactic() {
    let input = || date_range_input("Window", None, false, false);
    assert_eq!(
        check(input(), range(Some("2024-1-01"), Some("2024-02-01"))),
        FieldStatus::invalid("Window start must be in YYYY-MM-DD")
    );
    assert_eq!(
        check(input(), range(Some("2024-01-01"), Some("01/02/2024"))),
        FieldStatus::invalid("Window end must be in YYYY-MM-DD")
    );
    // Calendar validity is not checked.
    assert_eq!(
        check(input(), range(Some("2024-02-30"), Some("2024-13-01"))),
        FieldStatus::Valid
    );
    assert_eq!(
        check(input(), FieldValue::Number(20240101.0)),
        FieldStatus::invalid("Window must be a date range")
    );
}

#[test]
fn test_date_range_closed_bounds_property() {
    let closed_start = || date_range_input("d", Some(false), false, true);
    let closed_end = || date_range_input("d", Some(false), true, false);
    let samples = [None, Some("2024-03-01")];

    for other in samples {
        assert!(!check(closed_start(), range(None, other)).is_valid());
        assert!(!check(closed_start(), range(Some(""), other)).is_valid());
        assert!(!check(closed_end(), range(other, None)).is_valid());
    }
}

#[test]
fn test_optional_date_range_still_enforces_closed_bound() {
    let input = || date_range_input("Window", Some(false), false, false);
    assert_eq!(
        check(input(), range(Some("2024-01-01"), None)),
        FieldStatus::invalid("Window end is required")
    );

    let fully_open = || date_range_input("Window", Some(false), true, true);
    assert_eq!(check(fully_open(), range(None, None)), FieldStatus::Valid);
    assert_eq!(check(fully_open(), FieldValue::Empty), FieldStatus::Valid);
}

#[test]
fn test_required_open_date_range_needs_one_bound() {
    let input = || date_range_input("Window", None, true, true);
    assert_eq!(
        check(input(), range(Some(""), Some(""))),
        FieldStatus::invalid("Window is required")
    );
    assert_eq!(check(input(), range(Some("2024-01-01"), None)), FieldStatus::Valid);
    assert_eq!(check(input(), range(None, Some("2024-01-01"))), FieldStatus::Valid);
}

#[test]
fn test_default_values_derivation() {
    let mut with_default_text = text_input("label", None, None);
    if let AlgorithmInput::Text(cfg) = &mut with_default_text {
        cfg.default = Some("alpha".to_string());
    }
    let def = definition(
        "algo",
        vec![
            number_input("explicit", Some(1.0), None, None, Some(4.0)),
            number_input("from_min", Some(3.0), None, None, None),
            number_input("zero", None, Some(9.0), None, None),
            with_default_text,
            text_input("blank", None, None),
            date_range_input("range", None, true, true),
        ],
    );
    let defaults = SchemaCompiler::new(&def).default_values();

    assert_eq!(defaults["explicit"], FieldValue::Number(4.0));
    assert_eq!(defaults["from_min"], FieldValue::Number(3.0));
    assert_eq!(defaults["zero"], FieldValue::Number(0.0));
    assert_eq!(defaults["label"], FieldValue::Text("alpha".to_string()));
    assert_eq!(defaults["blank"], FieldValue::Text(String::new()));
    assert_eq!(defaults["range"], range(Some(""), Some("")));
    assert_eq!(defaults.len(), def.inputs.len());
}

#[test]
fn test_compilation_is_idempotent() {
    let catalog = Catalog::from_json(SAMPLE_CATALOG_JSON).unwrap();
    for algorithm in catalog.list_algorithms() {
        let first = SchemaCompiler::new(algorithm).compile();
        let second = SchemaCompiler::new(algorithm).compile();
        assert_eq!(first, second);
    }
}

#[test]
fn test_schema_validate_reports_in_declaration_order() {
    let catalog = Catalog::from_json(SAMPLE_CATALOG_JSON).unwrap();
    let forecast = catalog.get_by_key("forecast").unwrap();
    let compiled = SchemaCompiler::new(forecast).compile();

    let report = compiled.schema.validate(&compiled.defaults);
    let keys: Vec<_> = report.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["horizon", "series", "history"]);

    assert!(report.status("horizon").unwrap().is_valid());
    assert_eq!(report.status("series").unwrap().message(), Some("Series is required"));
    assert_eq!(report.status("history").unwrap().message(), Some("History end is required"));
    assert!(!report.is_valid());
    assert_eq!(report.errors().count(), 2);
}
