//! Tests for response projections

use super::*;
use aws_sdk_costexplorer::types as ce;
use pretty_assertions::assert_eq;
use serde_json::json;

fn metric(amount: &str, unit: &str) -> ce::MetricValue {
    ce::MetricValue::builder().amount(amount).unit(unit).build()
}

// ============================================================================
// Cost Views
// ============================================================================

#[test]
fn test_metric_value_view_skips_absent_fields() {
    let view = MetricValueView::from(&ce::MetricValue::builder().amount("12.5").build());
    assert_eq!(serde_json::to_value(&view).unwrap(), json!({"amount": "12.5"}));
}

#[test]
fn test_result_by_time_view() {
    let result = ce::ResultByTime::builder()
        .time_period(
            ce::DateInterval::builder()
                .start("2026-01-01")
                .end("2026-02-01")
                .build()
                .unwrap(),
        )
        .total("UnblendedCost", metric("100.0", "USD"))
        .groups(
            ce::Group::builder()
                .keys("Amazon EC2")
                .metrics("UnblendedCost", metric("60.0", "USD"))
                .build(),
        )
        .estimated(false)
        .build();

    let view = ResultByTimeView::from(&result);

    assert_eq!(
        serde_json::to_value(&view).unwrap(),
        json!({
            "time_period": {"start": "2026-01-01", "end": "2026-02-01"},
            "total": {"UnblendedCost": {"amount": "100.0", "unit": "USD"}},
            "groups": [{
                "keys": ["Amazon EC2"],
                "metrics": {"UnblendedCost": {"amount": "60.0", "unit": "USD"}}
            }],
            "estimated": false
        })
    );
}

#[test]
fn test_metric_maps_are_sorted() {
    let result = ce::ResultByTime::builder()
        .total("UsageQuantity", metric("2", "Hrs"))
        .total("BlendedCost", metric("1", "USD"))
        .build();

    let view = ResultByTimeView::from(&result);
    let keys: Vec<&String> = view.total.as_ref().unwrap().keys().collect();

    assert_eq!(keys, vec!["BlendedCost", "UsageQuantity"]);
}

#[test]
fn test_dimension_value_view() {
    let value = ce::DimensionValuesWithAttributes::builder()
        .value("Amazon S3")
        .attributes("description", "Simple Storage Service")
        .build();

    let view = DimensionValueView::from(&value);

    assert_eq!(view.value.as_deref(), Some("Amazon S3"));
    assert_eq!(
        view.attributes.unwrap().get("description").map(String::as_str),
        Some("Simple Storage Service")
    );
}

#[test]
fn test_allocation_tag_view() {
    let tag = ce::CostAllocationTag::builder()
        .tag_key("team")
        .r#type(ce::CostAllocationTagType::UserDefined)
        .status(ce::CostAllocationTagStatus::Active)
        .build()
        .unwrap();

    let view = AllocationTagView::from(&tag);

    assert_eq!(
        serde_json::to_value(&view).unwrap(),
        json!({
            "tag_key": "team",
            "type": "UserDefined",
            "status": "Active"
        })
    );
}

#[test]
fn test_forecast_result_view() {
    let result = ce::ForecastResult::builder()
        .mean_value("123.45")
        .prediction_interval_lower_bound("100.00")
        .prediction_interval_upper_bound("150.00")
        .build();

    let view = ForecastResultView::from(&result);

    assert_eq!(view.mean_value.as_deref(), Some("123.45"));
    assert_eq!(view.prediction_interval_lower_bound.as_deref(), Some("100.00"));
    assert_eq!(view.prediction_interval_upper_bound.as_deref(), Some("150.00"));
}

// ============================================================================
// Anomaly Views
// ============================================================================

#[test]
fn test_anomaly_view() {
    let anomaly = ce::Anomaly::builder()
        .anomaly_id("anomaly-1")
        .monitor_arn("arn:aws:ce::123456789012:anomalymonitor/m-1")
        .anomaly_start_date("2026-01-03")
        .dimension_value("Amazon EC2")
        .anomaly_score(
            ce::AnomalyScore::builder()
                .max_score(5.0)
                .current_score(2.5)
                .build(),
        )
        .impact(ce::Impact::builder().max_impact(40.0).build())
        .feedback(ce::AnomalyFeedbackType::No)
        .root_causes(
            ce::RootCause::builder()
                .service("Amazon EC2")
                .region("us-east-1")
                .build(),
        )
        .build()
        .unwrap();

    let view = AnomalyView::from(&anomaly);

    assert_eq!(view.anomaly_id, "anomaly-1");
    assert_eq!(view.anomaly_score.max_score, 5.0);
    assert_eq!(view.impact.max_impact, 40.0);
    assert_eq!(view.feedback.as_deref(), Some("NO"));
    assert_eq!(view.root_causes.len(), 1);
    assert_eq!(view.root_causes[0].service.as_deref(), Some("Amazon EC2"));
}

#[test]
fn test_monitor_view_renders_specification() {
    let specification = ce::Expression::builder()
        .dimensions(
            ce::DimensionValues::builder()
                .key(ce::Dimension::Service)
                .values("Amazon EC2")
                .build(),
        )
        .build();

    let monitor = ce::AnomalyMonitor::builder()
        .monitor_name("custom-spend")
        .monitor_type(ce::MonitorType::Custom)
        .monitor_specification(specification)
        .build()
        .unwrap();

    let view = MonitorView::from(&monitor);

    assert_eq!(view.monitor_name, "custom-spend");
    assert_eq!(view.monitor_type, "CUSTOM");
    assert_eq!(
        view.monitor_specification,
        Some(json!({"Dimensions": {"Key": "SERVICE", "Values": ["Amazon EC2"]}}))
    );
}

#[test]
fn test_subscription_view_renames_subscriber_type() {
    let subscription = ce::AnomalySubscription::builder()
        .subscription_name("daily-alerts")
        .frequency(ce::AnomalySubscriptionFrequency::Daily)
        .monitor_arn_list("arn:aws:ce::123456789012:anomalymonitor/m-1")
        .subscribers(
            ce::Subscriber::builder()
                .address("finops@example.com")
                .r#type(ce::SubscriberType::Email)
                .build(),
        )
        .build()
        .unwrap();

    let view = SubscriptionView::from(&subscription);
    let value = serde_json::to_value(&view).unwrap();

    assert_eq!(value["subscription_name"], "daily-alerts");
    assert_eq!(value["frequency"], "DAILY");
    assert_eq!(value["subscribers"][0]["type"], "EMAIL");
    assert_eq!(value["subscribers"][0]["address"], "finops@example.com");
}

// ============================================================================
// Commitment Views
// ============================================================================

#[test]
fn test_savings_plans_detail_view() {
    let detail = ce::SavingsPlansUtilizationDetail::builder()
        .savings_plan_arn("arn:aws:savingsplans::123456789012:savingsplan/sp-1")
        .utilization(
            ce::SavingsPlansUtilization::builder()
                .total_commitment("10.0")
                .used_commitment("9.0")
                .utilization_percentage("90")
                .build(),
        )
        .build();

    let view = SavingsPlansUtilizationDetailView::from(&detail);

    assert!(view.savings_plan_arn.is_some());
    assert_eq!(
        view.utilization.unwrap().utilization_percentage.as_deref(),
        Some("90")
    );
    assert!(view.savings.is_none());
}

#[test]
fn test_reservation_coverage_view() {
    let coverage = ce::CoverageByTime::builder()
        .total(
            ce::Coverage::builder()
                .coverage_hours(
                    ce::CoverageHours::builder()
                        .coverage_hours_percentage("75")
                        .build(),
                )
                .build(),
        )
        .build();

    let view = ReservationCoverageView::from(&coverage);

    assert_eq!(
        view.total
            .unwrap()
            .coverage_hours
            .unwrap()
            .coverage_hours_percentage
            .as_deref(),
        Some("75")
    );
    assert!(view.groups.is_empty());
}
