//! Serializable projections of Cost Explorer response shapes
//!
//! The SDK's generated types do not implement `serde::Serialize`, so every
//! shape we emit gets a small mirror struct here with a `From` conversion.
//! Metric and attribute maps become `BTreeMap`s so output ordering is
//! stable across runs.

mod anomaly;
mod commitments;
mod cost;

pub use anomaly::{
    AnomalyFeedbackView, AnomalyScoreView, AnomalyView, ImpactView, MonitorArnView, MonitorView,
    RootCauseView, SubscriberView, SubscriptionArnView, SubscriptionView,
};
pub use commitments::{
    CoverageCostView, CoverageHoursView, CoverageNormalizedUnitsView, CoverageView,
    ReservationAggregatesView, ReservationCoverageGroupView, ReservationCoverageView,
    ReservationUtilizationGroupView, ReservationUtilizationView,
    SavingsPlansAmortizedCommitmentView, SavingsPlansCoverageDataView, SavingsPlansCoverageView,
    SavingsPlansSavingsView, SavingsPlansUtilizationDetailView, SavingsPlansUtilizationView,
};
pub use cost::{
    AllocationTagView, CostCategoryReferenceView, DateRangeView, DimensionValueView,
    ForecastResultView, ForecastView, GroupView, MetricValueView, ResultByTimeView,
};

use aws_sdk_costexplorer::types as ce;
use std::collections::{BTreeMap, HashMap};

#[cfg(test)]
mod tests;

/// Clone a string map into sorted form
pub(crate) fn sorted_string_map(
    map: Option<&HashMap<String, String>>,
) -> Option<BTreeMap<String, String>> {
    map.map(|m| m.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
}

/// Project a metric map into sorted view form
pub(crate) fn sorted_metric_map(
    map: Option<&HashMap<String, ce::MetricValue>>,
) -> Option<BTreeMap<String, MetricValueView>> {
    map.map(|m| {
        m.iter()
            .map(|(name, value)| (name.clone(), MetricValueView::from(value)))
            .collect()
    })
}
