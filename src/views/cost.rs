//! Projections for cost, dimension, tag, and forecast output

use super::{sorted_metric_map, sorted_string_map};
use aws_sdk_costexplorer::types as ce;
use serde::Serialize;
use std::collections::BTreeMap;

// ============================================================================
// Shared Pieces
// ============================================================================

/// A closed date interval as the service reports it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateRangeView {
    pub start: String,
    pub end: String,
}

impl From<&ce::DateInterval> for DateRangeView {
    fn from(interval: &ce::DateInterval) -> Self {
        Self {
            start: interval.start.clone(),
            end: interval.end.clone(),
        }
    }
}

/// A single metric amount with its unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricValueView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl From<&ce::MetricValue> for MetricValueView {
    fn from(value: &ce::MetricValue) -> Self {
        Self {
            amount: value.amount.clone(),
            unit: value.unit.clone(),
        }
    }
}

// ============================================================================
// Cost and Usage
// ============================================================================

/// One time bucket of a cost-and-usage result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultByTimeView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_period: Option<DateRangeView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<BTreeMap<String, MetricValueView>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<GroupView>,
    pub estimated: bool,
}

impl From<&ce::ResultByTime> for ResultByTimeView {
    fn from(result: &ce::ResultByTime) -> Self {
        Self {
            time_period: result.time_period.as_ref().map(Into::into),
            total: sorted_metric_map(result.total.as_ref()),
            groups: result.groups().iter().map(Into::into).collect(),
            estimated: result.estimated,
        }
    }
}

/// One group within a time bucket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupView {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keys: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<BTreeMap<String, MetricValueView>>,
}

impl From<&ce::Group> for GroupView {
    fn from(group: &ce::Group) -> Self {
        Self {
            keys: group.keys().to_vec(),
            metrics: sorted_metric_map(group.metrics.as_ref()),
        }
    }
}

// ============================================================================
// Dimensions and Tags
// ============================================================================

/// One dimension value with its attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionValueView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
}

impl From<&ce::DimensionValuesWithAttributes> for DimensionValueView {
    fn from(value: &ce::DimensionValuesWithAttributes) -> Self {
        Self {
            value: value.value.clone(),
            attributes: sorted_string_map(value.attributes.as_ref()),
        }
    }
}

/// One cost category definition reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostCategoryReferenceView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_category_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_end: Option<String>,
    pub number_of_rules: i32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl From<&ce::CostCategoryReference> for CostCategoryReferenceView {
    fn from(reference: &ce::CostCategoryReference) -> Self {
        Self {
            cost_category_arn: reference.cost_category_arn.clone(),
            name: reference.name.clone(),
            effective_start: reference.effective_start.clone(),
            effective_end: reference.effective_end.clone(),
            number_of_rules: reference.number_of_rules,
            values: reference.values().to_vec(),
            default_value: reference.default_value.clone(),
        }
    }
}

/// One cost allocation tag and its activation status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationTagView {
    pub tag_key: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_used_date: Option<String>,
}

impl From<&ce::CostAllocationTag> for AllocationTagView {
    fn from(tag: &ce::CostAllocationTag) -> Self {
        Self {
            tag_key: tag.tag_key.clone(),
            kind: tag.r#type.as_str().to_string(),
            status: tag.status.as_str().to_string(),
            last_updated_date: tag.last_updated_date.clone(),
            last_used_date: tag.last_used_date.clone(),
        }
    }
}

// ============================================================================
// Forecasts
// ============================================================================

/// A complete forecast response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<MetricValueView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub forecast_results_by_time: Vec<ForecastResultView>,
}

/// One forecast time bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastResultView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_period: Option<DateRangeView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction_interval_lower_bound: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction_interval_upper_bound: Option<String>,
}

impl From<&ce::ForecastResult> for ForecastResultView {
    fn from(result: &ce::ForecastResult) -> Self {
        Self {
            time_period: result.time_period.as_ref().map(Into::into),
            mean_value: result.mean_value.clone(),
            prediction_interval_lower_bound: result.prediction_interval_lower_bound.clone(),
            prediction_interval_upper_bound: result.prediction_interval_upper_bound.clone(),
        }
    }
}
