//! Wire shape of the model types as consumed by the site's renderers.

use serde_json::json;
use verdict_core::{Confidence, Metric, ReasonMetric, Sentiment, Side, ToolRecord};

#[test]
fn tool_record_reads_camel_case_with_missing_fields() {
    let tool: ToolRecord = serde_json::from_value(json!({
        "id": "pg",
        "name": "Postgres",
        "openSource": true,
        "easeOfUse": "Moderate",
        "features": ["jsonb", "extensions"]
    }))
    .unwrap();
    assert_eq!(tool.name, "Postgres");
    assert!(tool.open_source);
    assert_eq!(tool.ease_of_use.as_deref(), Some("Moderate"));
    assert_eq!(tool.pricing, None);
    assert_eq!(tool.category, "");
    assert_eq!(tool.features.len(), 2);
}

#[test]
fn enums_serialize_lowercase() {
    assert_eq!(serde_json::to_value(Confidence::Moderate).unwrap(), json!("moderate"));
    assert_eq!(serde_json::to_value(Sentiment::Negative).unwrap(), json!("negative"));
    assert_eq!(serde_json::to_value(Metric::Docs).unwrap(), json!("docs"));
    assert_eq!(serde_json::to_value(ReasonMetric::Overall).unwrap(), json!("overall"));
    assert_eq!(serde_json::to_value(Side::B).unwrap(), json!("b"));
}

#[test]
fn confidence_bands_are_half_open() {
    assert_eq!(Confidence::from_gap(0.0, 0.5, 2.0), Confidence::Slight);
    assert_eq!(Confidence::from_gap(0.49, 0.5, 2.0), Confidence::Slight);
    assert_eq!(Confidence::from_gap(0.5, 0.5, 2.0), Confidence::Moderate);
    assert_eq!(Confidence::from_gap(1.5, 0.5, 1.5), Confidence::Strong);
    assert_eq!(Confidence::from_gap(1.99, 0.5, 2.0), Confidence::Moderate);
    assert_eq!(Confidence::from_gap(2.0, 0.5, 2.0), Confidence::Strong);
}

#[test]
fn side_picks_its_value() {
    assert_eq!(Side::A.pick("left", "right"), "left");
    assert_eq!(Side::B.pick("left", "right"), "right");
}

#[test]
fn builder_sets_descriptors() {
    let tool = ToolRecord::new("redis", "Redis")
        .with_category("cache")
        .with_pricing("Free")
        .with_documentation("Excellent")
        .with_community("Large")
        .with_reliability("High")
        .with_features(vec!["pubsub".to_string()]);
    assert_eq!(tool.id, "redis");
    assert_eq!(tool.category, "cache");
    assert_eq!(tool.documentation.as_deref(), Some("Excellent"));
    assert_eq!(tool.features, vec!["pubsub".to_string()]);
    assert!(!tool.open_source);
}

#[test]
fn tool_record_reads_null_as_missing() {
    let cases = [
        json!({ "name": "Nil", "openSource": null }),
        json!({ "name": "Nil", "features": null }),
        json!({ "name": "Nil", "id": null }),
        json!({ "name": "Nil", "category": null }),
        json!({ "name": "Nil", "pricing": null, "easeOfUse": null, "reliability": null }),
    ];
    for case in cases {
        let tool: ToolRecord = serde_json::from_value(case.clone())
            .unwrap_or_else(|e| panic!("{case} rejected: {e}"));
        assert_eq!(tool, ToolRecord::new("", "Nil"), "{case}");
    }
}

#[test]
fn null_name_becomes_empty() {
    let tool: ToolRecord = serde_json::from_value(json!({ "name": null })).unwrap();
    assert_eq!(tool.name, "");
}
