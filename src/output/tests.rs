//! Tests for the output sink

use super::*;
use crate::pager::StopReason;
use pretty_assertions::assert_eq;
use serde_json::json;

fn outcome(items: Vec<&str>, next_token: Option<&str>) -> PagerOutcome<String> {
    PagerOutcome {
        items: items.into_iter().map(ToString::to_string).collect(),
        next_token: next_token.map(ToString::to_string),
        pages: 1,
        stop: StopReason::SinglePage,
    }
}

#[test]
fn test_listing_from_outcome() {
    let listing = Listing::from(outcome(vec!["a", "b"], Some("tok")));
    assert_eq!(listing.items, vec!["a", "b"]);
    assert_eq!(listing.next_token.as_deref(), Some("tok"));
}

#[test]
fn test_emit_listing_json_envelope() {
    let listing = Listing::from(outcome(vec!["a", "b"], Some("tok")));
    let mut buffer = Vec::new();

    emit_listing(&mut buffer, OutputFormat::Json, &listing).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    assert_eq!(value, json!({"items": ["a", "b"], "next_token": "tok"}));
}

#[test]
fn test_emit_listing_json_null_token_when_exhausted() {
    let listing = Listing::from(outcome(vec!["a"], None));
    let mut buffer = Vec::new();

    emit_listing(&mut buffer, OutputFormat::Json, &listing).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    assert_eq!(value, json!({"items": ["a"], "next_token": null}));
}

#[test]
fn test_emit_listing_jsonl_one_item_per_line() {
    let listing = Listing::from(outcome(vec!["a", "b", "c"], Some("tok")));
    let mut buffer = Vec::new();

    emit_listing(&mut buffer, OutputFormat::Jsonl, &listing).unwrap();

    let text = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["\"a\"", "\"b\"", "\"c\""]);
}

#[test]
fn test_emit_document_json() {
    let mut buffer = Vec::new();

    emit_document(&mut buffer, OutputFormat::Json, &json!({"monitor_arn": "arn:x"})).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    assert_eq!(value, json!({"monitor_arn": "arn:x"}));
}

#[test]
fn test_emit_document_jsonl_is_single_line() {
    let mut buffer = Vec::new();

    emit_document(&mut buffer, OutputFormat::Jsonl, &json!({"a": 1})).unwrap();

    assert_eq!(String::from_utf8(buffer).unwrap(), "{\"a\":1}\n");
}
