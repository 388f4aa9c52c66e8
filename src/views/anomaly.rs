//! Projections for anomaly detection output

use crate::expr::expression_to_json;
use aws_sdk_costexplorer::types as ce;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// Anomalies
// ============================================================================

/// One detected cost anomaly
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnomalyView {
    pub anomaly_id: String,
    pub monitor_arn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anomaly_start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anomaly_end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension_value: Option<String>,
    pub anomaly_score: AnomalyScoreView,
    pub impact: ImpactView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub root_causes: Vec<RootCauseView>,
}

impl From<&ce::Anomaly> for AnomalyView {
    fn from(anomaly: &ce::Anomaly) -> Self {
        Self {
            anomaly_id: anomaly.anomaly_id.clone(),
            monitor_arn: anomaly.monitor_arn.clone(),
            anomaly_start_date: anomaly.anomaly_start_date.clone(),
            anomaly_end_date: anomaly.anomaly_end_date.clone(),
            dimension_value: anomaly.dimension_value.clone(),
            anomaly_score: anomaly
                .anomaly_score
                .as_ref()
                .map(AnomalyScoreView::from)
                .unwrap_or_default(),
            impact: anomaly
                .impact
                .as_ref()
                .map(ImpactView::from)
                .unwrap_or_default(),
            feedback: anomaly.feedback.as_ref().map(|f| f.as_str().to_string()),
            root_causes: anomaly.root_causes().iter().map(Into::into).collect(),
        }
    }
}

/// Detection confidence for an anomaly
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnomalyScoreView {
    pub max_score: f64,
    pub current_score: f64,
}

impl From<&ce::AnomalyScore> for AnomalyScoreView {
    fn from(score: &ce::AnomalyScore) -> Self {
        Self {
            max_score: score.max_score,
            current_score: score.current_score,
        }
    }
}

/// Dollar impact of an anomaly
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImpactView {
    pub max_impact: f64,
    pub total_impact: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_actual_spend: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_expected_spend: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_impact_percentage: Option<f64>,
}

impl From<&ce::Impact> for ImpactView {
    fn from(impact: &ce::Impact) -> Self {
        Self {
            max_impact: impact.max_impact,
            total_impact: impact.total_impact,
            total_actual_spend: impact.total_actual_spend,
            total_expected_spend: impact.total_expected_spend,
            total_impact_percentage: impact.total_impact_percentage,
        }
    }
}

/// A contributing cause attributed to an anomaly
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RootCauseView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_account_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contribution: Option<f64>,
}

impl From<&ce::RootCause> for RootCauseView {
    fn from(cause: &ce::RootCause) -> Self {
        Self {
            service: cause.service.clone(),
            region: cause.region.clone(),
            linked_account: cause.linked_account.clone(),
            linked_account_name: cause.linked_account_name.clone(),
            usage_type: cause.usage_type.clone(),
            contribution: cause.impact.as_ref().map(|i| i.contribution),
        }
    }
}

// ============================================================================
// Monitors
// ============================================================================

/// One anomaly monitor definition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitorView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor_arn: Option<String>,
    pub monitor_name: String,
    pub monitor_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor_dimension: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor_specification: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_evaluated_date: Option<String>,
    pub dimensional_value_count: i32,
}

impl From<&ce::AnomalyMonitor> for MonitorView {
    fn from(monitor: &ce::AnomalyMonitor) -> Self {
        Self {
            monitor_arn: monitor.monitor_arn.clone(),
            monitor_name: monitor.monitor_name.clone(),
            monitor_type: monitor.monitor_type.as_str().to_string(),
            monitor_dimension: monitor
                .monitor_dimension
                .as_ref()
                .map(|d| d.as_str().to_string()),
            monitor_specification: monitor
                .monitor_specification
                .as_ref()
                .map(expression_to_json),
            creation_date: monitor.creation_date.clone(),
            last_updated_date: monitor.last_updated_date.clone(),
            last_evaluated_date: monitor.last_evaluated_date.clone(),
            dimensional_value_count: monitor.dimensional_value_count,
        }
    }
}

// ============================================================================
// Subscriptions
// ============================================================================

/// One anomaly alert subscription
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_arn: Option<String>,
    pub subscription_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    pub monitor_arn_list: Vec<String>,
    pub subscribers: Vec<SubscriberView>,
    pub frequency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold_expression: Option<Value>,
}

impl From<&ce::AnomalySubscription> for SubscriptionView {
    fn from(subscription: &ce::AnomalySubscription) -> Self {
        Self {
            subscription_arn: subscription.subscription_arn.clone(),
            subscription_name: subscription.subscription_name.clone(),
            account_id: subscription.account_id.clone(),
            monitor_arn_list: subscription.monitor_arn_list.clone(),
            subscribers: subscription.subscribers.iter().map(Into::into).collect(),
            frequency: subscription.frequency.as_str().to_string(),
            threshold_expression: subscription
                .threshold_expression
                .as_ref()
                .map(expression_to_json),
        }
    }
}

/// One alert recipient
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriberView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl From<&ce::Subscriber> for SubscriberView {
    fn from(subscriber: &ce::Subscriber) -> Self {
        Self {
            address: subscriber.address.clone(),
            kind: subscriber.r#type.as_ref().map(|t| t.as_str().to_string()),
            status: subscriber.status.as_ref().map(|s| s.as_str().to_string()),
        }
    }
}

// ============================================================================
// Mutation Acks
// ============================================================================

/// Ack for monitor create/update/delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonitorArnView {
    pub monitor_arn: String,
}

/// Ack for subscription create/update/delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionArnView {
    pub subscription_arn: String,
}

/// Ack for anomaly feedback
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnomalyFeedbackView {
    pub anomaly_id: String,
}
