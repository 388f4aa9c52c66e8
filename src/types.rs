//! Common types used throughout costctl
//!
//! Shared CLI value enums with conversions onto the SDK's wire enums,
//! plus small utility types used across multiple modules.

use aws_sdk_costexplorer::types as ce;
use serde::{Deserialize, Serialize};

// ============================================================================
// Output Format
// ============================================================================

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Pretty-printed JSON document
    #[default]
    Json,
    /// One JSON item per line
    Jsonl,
}

// ============================================================================
// Granularity
// ============================================================================

/// Reporting granularity for cost and coverage queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Hourly,
    #[default]
    Daily,
    Monthly,
}

impl From<Granularity> for ce::Granularity {
    fn from(granularity: Granularity) -> Self {
        match granularity {
            Granularity::Hourly => ce::Granularity::Hourly,
            Granularity::Daily => ce::Granularity::Daily,
            Granularity::Monthly => ce::Granularity::Monthly,
        }
    }
}

// ============================================================================
// Forecast Metric
// ============================================================================

/// Metric used by the forecast operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ForecastMetric {
    AmortizedCost,
    BlendedCost,
    NetAmortizedCost,
    NetUnblendedCost,
    NormalizedUsageAmount,
    UnblendedCost,
    UsageQuantity,
}

impl From<ForecastMetric> for ce::Metric {
    fn from(metric: ForecastMetric) -> Self {
        match metric {
            ForecastMetric::AmortizedCost => ce::Metric::AmortizedCost,
            ForecastMetric::BlendedCost => ce::Metric::BlendedCost,
            ForecastMetric::NetAmortizedCost => ce::Metric::NetAmortizedCost,
            ForecastMetric::NetUnblendedCost => ce::Metric::NetUnblendedCost,
            ForecastMetric::NormalizedUsageAmount => ce::Metric::NormalizedUsageAmount,
            ForecastMetric::UnblendedCost => ce::Metric::UnblendedCost,
            ForecastMetric::UsageQuantity => ce::Metric::UsageQuantity,
        }
    }
}

// ============================================================================
// Anomaly Feedback
// ============================================================================

/// Feedback classification for a detected anomaly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyFeedback {
    Yes,
    No,
    PlannedActivity,
}

impl From<AnomalyFeedback> for ce::AnomalyFeedbackType {
    fn from(feedback: AnomalyFeedback) -> Self {
        match feedback {
            AnomalyFeedback::Yes => ce::AnomalyFeedbackType::Yes,
            AnomalyFeedback::No => ce::AnomalyFeedbackType::No,
            AnomalyFeedback::PlannedActivity => ce::AnomalyFeedbackType::PlannedActivity,
        }
    }
}

// ============================================================================
// Monitor Kind
// ============================================================================

/// Kind of anomaly monitor to create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum MonitorKind {
    /// Watch a single dimension (e.g. per-service spend)
    Dimensional,
    /// Watch a caller-supplied filter expression
    Custom,
}

impl From<MonitorKind> for ce::MonitorType {
    fn from(kind: MonitorKind) -> Self {
        match kind {
            MonitorKind::Dimensional => ce::MonitorType::Dimensional,
            MonitorKind::Custom => ce::MonitorType::Custom,
        }
    }
}

// ============================================================================
// Subscription Frequency
// ============================================================================

/// Delivery cadence for anomaly subscriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionFrequency {
    Daily,
    Immediate,
    Weekly,
}

impl From<SubscriptionFrequency> for ce::AnomalySubscriptionFrequency {
    fn from(frequency: SubscriptionFrequency) -> Self {
        match frequency {
            SubscriptionFrequency::Daily => ce::AnomalySubscriptionFrequency::Daily,
            SubscriptionFrequency::Immediate => ce::AnomalySubscriptionFrequency::Immediate,
            SubscriptionFrequency::Weekly => ce::AnomalySubscriptionFrequency::Weekly,
        }
    }
}

// ============================================================================
// Cost Allocation Tags
// ============================================================================

/// Activation status filter for cost allocation tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AllocationTagStatus {
    Active,
    Inactive,
}

impl From<AllocationTagStatus> for ce::CostAllocationTagStatus {
    fn from(status: AllocationTagStatus) -> Self {
        match status {
            AllocationTagStatus::Active => ce::CostAllocationTagStatus::Active,
            AllocationTagStatus::Inactive => ce::CostAllocationTagStatus::Inactive,
        }
    }
}

/// Origin filter for cost allocation tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AllocationTagKind {
    AwsGenerated,
    UserDefined,
}

impl From<AllocationTagKind> for ce::CostAllocationTagType {
    fn from(kind: AllocationTagKind) -> Self {
        match kind {
            AllocationTagKind::AwsGenerated => ce::CostAllocationTagType::AwsGenerated,
            AllocationTagKind::UserDefined => ce::CostAllocationTagType::UserDefined,
        }
    }
}

// ============================================================================
// Dimension Context
// ============================================================================

/// Search context for dimension value lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DimensionContext {
    #[default]
    CostAndUsage,
    Reservations,
    SavingsPlans,
}

impl From<DimensionContext> for ce::Context {
    fn from(context: DimensionContext) -> Self {
        match context {
            DimensionContext::CostAndUsage => ce::Context::CostAndUsage,
            DimensionContext::Reservations => ce::Context::Reservations,
            DimensionContext::SavingsPlans => ce::Context::SavingsPlans,
        }
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle empty strings
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

impl OptionStringExt for String {
    fn none_if_empty(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granularity_conversion() {
        assert_eq!(ce::Granularity::Daily, Granularity::Daily.into());
        assert_eq!(ce::Granularity::Monthly, Granularity::Monthly.into());
        assert_eq!(ce::Granularity::Hourly, Granularity::Hourly.into());
    }

    #[test]
    fn test_granularity_default() {
        assert_eq!(Granularity::default(), Granularity::Daily);
    }

    #[test]
    fn test_forecast_metric_conversion() {
        assert_eq!(
            ce::Metric::UnblendedCost,
            ForecastMetric::UnblendedCost.into()
        );
        assert_eq!(
            ce::Metric::UsageQuantity,
            ForecastMetric::UsageQuantity.into()
        );
    }

    #[test]
    fn test_feedback_conversion() {
        assert_eq!(
            ce::AnomalyFeedbackType::PlannedActivity,
            AnomalyFeedback::PlannedActivity.into()
        );
    }

    #[test]
    fn test_output_format_serde() {
        let format: OutputFormat = serde_json::from_str("\"jsonl\"").unwrap();
        assert_eq!(format, OutputFormat::Jsonl);

        let json = serde_json::to_string(&OutputFormat::Json).unwrap();
        assert_eq!(json, "\"json\"");
    }

    #[test]
    fn test_option_string_none_if_empty() {
        assert_eq!(
            Some("test".to_string()).none_if_empty(),
            Some("test".to_string())
        );
        assert_eq!(Some(String::new()).none_if_empty(), None);
        assert_eq!(None::<String>.none_if_empty(), None);
        assert_eq!("test".to_string().none_if_empty(), Some("test".to_string()));
        assert_eq!(String::new().none_if_empty(), None);
    }
}
