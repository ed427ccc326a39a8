//! Golden comparison scenarios: each fixture pins the full verdict for a
//! pair of tool records.

use serde_json::Value;
use test_fixtures::{list_fixtures, load_fixture_value};
use verdict_core::{ToolRecord, Verdict};
use verdict_engine::generate_verdict;

fn parse_case(fixture: &Value) -> (ToolRecord, ToolRecord, Verdict) {
    let a = serde_json::from_value(fixture["input"]["toolA"].clone()).expect("toolA");
    let b = serde_json::from_value(fixture["input"]["toolB"].clone()).expect("toolB");
    let expected = serde_json::from_value(fixture["expected"].clone()).expect("expected verdict");
    (a, b, expected)
}

fn check(relative_path: &str) {
    let fixture = load_fixture_value(relative_path);
    let (a, b, expected) = parse_case(&fixture);
    let actual = generate_verdict(&a, &b);
    assert_eq!(
        actual, expected,
        "{relative_path}: {}",
        fixture["description"].as_str().unwrap_or("")
    );
}

#[test]
fn golden_open_source_sweep() {
    check("golden/scenario_open_source_sweep.json");
}

#[test]
fn golden_all_absent() {
    check("golden/scenario_all_absent.json");
}

#[test]
fn golden_reliability_short_circuit() {
    check("golden/scenario_reliability_short_circuit.json");
}

#[test]
fn golden_persona_split() {
    check("golden/persona_split.json");
}

#[test]
fn golden_keyword_overlap() {
    check("golden/keyword_overlap.json");
}

#[test]
fn every_golden_file_is_covered() {
    let files = list_fixtures("golden");
    assert_eq!(files.len(), 5);
    for file in files {
        let name = file.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        check(&format!("golden/{name}"));
    }
}

#[test]
fn swapping_inputs_keeps_metric_winners() {
    // Order only matters for ties; a decisive verdict names the same tool.
    let fixture = load_fixture_value("golden/scenario_open_source_sweep.json");
    let (a, b, expected) = parse_case(&fixture);
    let swapped = generate_verdict(&b, &a);
    assert_eq!(swapped.winner, expected.winner);
    assert_eq!(swapped.confidence, expected.confidence);
}
