//! Tests for CLI parsing and flag-to-config mapping

use super::*;
use crate::types::{AnomalyFeedback, Granularity, OutputFormat};
use clap::Parser;
use test_case::test_case;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("arguments should parse")
}

// ============================================================================
// Command Parsing
// ============================================================================

#[test]
fn test_parse_cost_usage() {
    let cli = parse(&[
        "costctl",
        "cost",
        "usage",
        "--start",
        "2026-01-01",
        "--end",
        "2026-02-01",
        "--granularity",
        "daily",
        "--metric",
        "UnblendedCost",
        "--metric",
        "UsageQuantity",
        "--group-by",
        "DIMENSION=SERVICE",
    ]);

    match cli.command {
        Commands::Cost(CostCommands::Usage(args)) => {
            assert_eq!(args.granularity, Granularity::Daily);
            assert_eq!(args.metrics, vec!["UnblendedCost", "UsageQuantity"]);
            assert_eq!(args.group_by, vec!["DIMENSION=SERVICE"]);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_cost_usage_defaults() {
    let cli = parse(&["costctl", "cost", "usage", "--last-days", "30"]);

    match cli.command {
        Commands::Cost(CostCommands::Usage(args)) => {
            assert_eq!(args.granularity, Granularity::Monthly);
            assert_eq!(args.metrics, vec!["UnblendedCost"]);
            assert_eq!(args.window.last_days, Some(30));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_global_flags() {
    let cli = parse(&[
        "costctl",
        "--profile",
        "billing",
        "--region",
        "us-east-1",
        "--output",
        "jsonl",
        "monitors",
        "list",
    ]);

    assert_eq!(cli.profile.as_deref(), Some("billing"));
    assert_eq!(cli.region.as_deref(), Some("us-east-1"));
    assert_eq!(cli.output, Some(OutputFormat::Jsonl));
}

#[test]
fn test_parse_anomalies_list_with_feedback_filter() {
    let cli = parse(&[
        "costctl",
        "anomalies",
        "list",
        "--monitor-arn",
        "arn:aws:ce::123456789012:anomalymonitor/m-1",
        "--feedback",
        "planned-activity",
    ]);

    match cli.command {
        Commands::Anomalies(AnomalyCommands::List(args)) => {
            assert_eq!(args.feedback, Some(AnomalyFeedback::PlannedActivity));
            assert!(args.monitor_arn.is_some());
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_subscription_create_requires_recipients() {
    let result = Cli::try_parse_from([
        "costctl",
        "subscriptions",
        "create",
        "--name",
        "alerts",
        "--frequency",
        "daily",
    ]);

    assert!(result.is_err());
}

#[test]
fn test_parse_usage_with_resources_requires_filter() {
    let result = Cli::try_parse_from([
        "costctl",
        "cost",
        "usage-with-resources",
        "--last-days",
        "7",
    ]);

    assert!(result.is_err());
}

#[test]
fn test_window_flags_conflict_with_last_days() {
    let result = Cli::try_parse_from([
        "costctl",
        "cost",
        "usage",
        "--start",
        "2026-01-01",
        "--last-days",
        "7",
    ]);

    assert!(result.is_err());
}

// ============================================================================
// Paging Flags → Pager Config
// ============================================================================

#[test]
fn test_paging_flags_map_one_to_one() {
    let cli = parse(&[
        "costctl",
        "monitors",
        "list",
        "--no-paginate",
        "--max-items",
        "50",
        "--page-size",
        "10",
        "--starting-token",
        "tok-1",
    ]);

    let Commands::Monitors(MonitorCommands::List(args)) = cli.command else {
        panic!("unexpected command");
    };
    let config = args.paging.to_pager_config(None, None);

    assert!(config.no_paginate);
    assert_eq!(config.max_items, Some(50));
    assert_eq!(config.page_size, Some(10));
    assert_eq!(config.starting_token.as_deref(), Some("tok-1"));
    assert!(config.is_single_page());
}

#[test]
fn test_paging_defaults_fill_gaps_only() {
    let paging = PagingArgs {
        max_items: Some(5),
        ..Default::default()
    };

    let config = paging.to_pager_config(Some(500), Some(100));

    // Flag wins over the file default, file default fills the gap
    assert_eq!(config.max_items, Some(5));
    assert_eq!(config.page_size, Some(100));
    assert!(!config.is_single_page());
}

// ============================================================================
// Time Windows
// ============================================================================

#[test]
fn test_time_window_explicit_bounds() {
    let window = TimeWindowArgs {
        start: Some("2026-01-01".to_string()),
        end: Some("2026-02-01".to_string()),
        last_days: None,
    };

    let interval = window.to_date_interval().unwrap();
    assert_eq!(interval.start, "2026-01-01");
    assert_eq!(interval.end, "2026-02-01");
}

#[test]
fn test_time_window_last_days() {
    let window = TimeWindowArgs {
        start: None,
        end: None,
        last_days: Some(30),
    };

    let interval = window.to_date_interval().unwrap();
    let start = commands::parse_date("start", &interval.start).unwrap();
    let end = commands::parse_date("end", &interval.end).unwrap();
    assert_eq!((end - start).num_days(), 30);
}

#[test]
fn test_time_window_requires_some_bound() {
    let window = TimeWindowArgs::default();
    assert!(window.to_date_interval().is_err());
}

#[test_case("2026-02-01", "2026-01-01"; "end before start")]
#[test_case("2026-01-01", "2026-01-01"; "empty window")]
fn test_time_window_rejects_non_positive_windows(start: &str, end: &str) {
    let window = TimeWindowArgs {
        start: Some(start.to_string()),
        end: Some(end.to_string()),
        last_days: None,
    };

    assert!(window.to_date_interval().is_err());
}

#[test_case("01/01/2026"; "slashes")]
#[test_case("2026-1-1"; "unpadded")]
#[test_case("yesterday"; "words")]
fn test_time_window_rejects_malformed_dates(start: &str) {
    let window = TimeWindowArgs {
        start: Some(start.to_string()),
        end: Some("2026-02-01".to_string()),
        last_days: None,
    };

    assert!(window.to_date_interval().is_err());
}

// ============================================================================
// Forecast Validation
// ============================================================================

#[test]
fn test_forecast_args_validate() {
    let cli = parse(&[
        "costctl",
        "cost",
        "forecast",
        "--start",
        "2026-09-01",
        "--end",
        "2026-10-01",
        "--prediction-interval",
        "80",
    ]);

    let Commands::Cost(CostCommands::Forecast(args)) = cli.command else {
        panic!("unexpected command");
    };
    assert!(args.validate().is_ok());
}

#[test_case(50; "below range")]
#[test_case(100; "above range")]
fn test_forecast_rejects_bad_interval_level(level: i32) {
    let cli = parse(&[
        "costctl",
        "cost",
        "forecast",
        "--start",
        "2026-09-01",
        "--end",
        "2026-10-01",
        "--prediction-interval",
        &level.to_string(),
    ]);

    let Commands::Cost(CostCommands::Forecast(args)) = cli.command else {
        panic!("unexpected command");
    };
    assert!(args.validate().is_err());
}
