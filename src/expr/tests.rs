//! Tests for filter expression translation

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

// ============================================================================
// Parsing Tests
// ============================================================================

#[test]
fn test_parse_dimension_selector() {
    let expr = parse_expression(
        r#"{"Dimensions": {"Key": "SERVICE", "Values": ["Amazon EC2"], "MatchOptions": ["EQUALS"]}}"#,
    )
    .unwrap();

    let dimensions = expr.dimensions.expect("dimensions selector");
    assert_eq!(
        dimensions.key.as_ref().map(|k| k.as_str()),
        Some("SERVICE")
    );
    assert_eq!(
        dimensions.values.as_deref(),
        Some(&["Amazon EC2".to_string()][..])
    );
    assert_eq!(
        dimensions
            .match_options
            .as_deref()
            .map(|o| o[0].as_str()),
        Some("EQUALS")
    );
}

#[test]
fn test_parse_lowercase_dimension_key() {
    let expr = parse_expression(r#"{"Dimensions": {"Key": "service", "Values": ["x"]}}"#).unwrap();
    let dimensions = expr.dimensions.expect("dimensions selector");
    assert_eq!(
        dimensions.key.as_ref().map(|k| k.as_str()),
        Some("SERVICE")
    );
}

#[test]
fn test_parse_tag_selector() {
    let expr = parse_expression(r#"{"Tags": {"Key": "team", "Values": ["data", "infra"]}}"#)
        .unwrap();

    let tags = expr.tags.expect("tags selector");
    assert_eq!(tags.key.as_deref(), Some("team"));
    assert_eq!(
        tags.values.as_deref(),
        Some(&["data".to_string(), "infra".to_string()][..])
    );
}

#[test]
fn test_parse_nested_boolean_tree() {
    let expr = parse_expression(
        r#"{
            "And": [
                {"Dimensions": {"Key": "REGION", "Values": ["us-east-1"]}},
                {"Not": {"Tags": {"Key": "env", "Values": ["dev"]}}}
            ]
        }"#,
    )
    .unwrap();

    let and = expr.and.expect("and branch");
    assert_eq!(and.len(), 2);
    assert!(and[0].dimensions.is_some());
    let not = and[1].not.as_ref().expect("not branch");
    assert!(not.tags.is_some());
}

#[test]
fn test_parse_rejects_empty_expression() {
    assert!(parse_expression("{}").is_err());
}

#[test]
fn test_parse_rejects_unknown_keys() {
    assert!(parse_expression(r#"{"Dimension": {"Key": "SERVICE"}}"#).is_err());
    assert!(parse_expression(r#"{"Dimensions": {"Keys": ["SERVICE"]}}"#).is_err());
}

#[test]
fn test_parse_rejects_invalid_json() {
    assert!(parse_expression("not json").is_err());
}

// ============================================================================
// Group-By Tests
// ============================================================================

#[test]
fn test_parse_group_by_dimension() {
    let group = parse_group_by("DIMENSION=SERVICE").unwrap();
    assert_eq!(
        group.r#type.as_ref().map(|t| t.as_str()),
        Some("DIMENSION")
    );
    assert_eq!(group.key.as_deref(), Some("SERVICE"));
}

#[test]
fn test_parse_group_by_tag_case_insensitive_type() {
    let group = parse_group_by("tag=team").unwrap();
    assert_eq!(group.r#type.as_ref().map(|t| t.as_str()), Some("TAG"));
    // The key keeps its case: tag keys are case-sensitive
    assert_eq!(group.key.as_deref(), Some("team"));
}

#[test]
fn test_parse_group_by_cost_category() {
    let group = parse_group_by("COST_CATEGORY=Environment").unwrap();
    assert_eq!(
        group.r#type.as_ref().map(|t| t.as_str()),
        Some("COST_CATEGORY")
    );
}

#[test]
fn test_parse_group_by_rejects_malformed_specs() {
    assert!(parse_group_by("SERVICE").is_err());
    assert!(parse_group_by("ACCOUNT=SERVICE").is_err());
    assert!(parse_group_by("DIMENSION=").is_err());
}

// ============================================================================
// Rendering Tests
// ============================================================================

#[test]
fn test_expression_round_trips_through_json() {
    let input = json!({
        "Or": [
            {"Dimensions": {"Key": "SERVICE", "Values": ["Amazon S3"], "MatchOptions": ["EQUALS"]}},
            {"CostCategories": {"Key": "Team", "Values": ["Data"]}}
        ]
    });

    let expr = parse_expression(&input.to_string()).unwrap();
    let rendered = expression_to_json(&expr);

    assert_eq!(rendered, input);
}

#[test]
fn test_expression_to_json_not_branch() {
    let expr = parse_expression(r#"{"Not": {"Tags": {"Key": "env", "Values": ["dev"]}}}"#).unwrap();
    let rendered = expression_to_json(&expr);

    assert_eq!(
        rendered,
        json!({"Not": {"Tags": {"Key": "env", "Values": ["dev"]}}})
    );
}
