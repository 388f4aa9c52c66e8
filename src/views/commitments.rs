//! Projections for reservation and Savings Plans output
//!
//! These shapes are deeply nested on the wire; the views keep the nesting
//! but flatten the string-map attributes into sorted maps.

use super::{sorted_string_map, DateRangeView};
use aws_sdk_costexplorer::types as ce;
use serde::Serialize;
use std::collections::BTreeMap;

// ============================================================================
// Reservation Coverage
// ============================================================================

/// Reservation coverage for one time bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationCoverageView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_period: Option<DateRangeView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<ReservationCoverageGroupView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<CoverageView>,
}

impl From<&ce::CoverageByTime> for ReservationCoverageView {
    fn from(coverage: &ce::CoverageByTime) -> Self {
        Self {
            time_period: coverage.time_period.as_ref().map(Into::into),
            groups: coverage.groups().iter().map(Into::into).collect(),
            total: coverage.total.as_ref().map(Into::into),
        }
    }
}

/// One coverage group (keyed by the requested group-by attributes)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationCoverageGroupView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<CoverageView>,
}

impl From<&ce::ReservationCoverageGroup> for ReservationCoverageGroupView {
    fn from(group: &ce::ReservationCoverageGroup) -> Self {
        Self {
            attributes: sorted_string_map(group.attributes.as_ref()),
            coverage: group.coverage.as_ref().map(Into::into),
        }
    }
}

/// Coverage amounts in hours, normalized units, and cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_hours: Option<CoverageHoursView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_normalized_units: Option<CoverageNormalizedUnitsView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_cost: Option<CoverageCostView>,
}

impl From<&ce::Coverage> for CoverageView {
    fn from(coverage: &ce::Coverage) -> Self {
        Self {
            coverage_hours: coverage.coverage_hours.as_ref().map(Into::into),
            coverage_normalized_units: coverage
                .coverage_normalized_units
                .as_ref()
                .map(Into::into),
            coverage_cost: coverage.coverage_cost.as_ref().map(Into::into),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageHoursView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_demand_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_running_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_hours_percentage: Option<String>,
}

impl From<&ce::CoverageHours> for CoverageHoursView {
    fn from(hours: &ce::CoverageHours) -> Self {
        Self {
            on_demand_hours: hours.on_demand_hours.clone(),
            reserved_hours: hours.reserved_hours.clone(),
            total_running_hours: hours.total_running_hours.clone(),
            coverage_hours_percentage: hours.coverage_hours_percentage.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageNormalizedUnitsView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_demand_normalized_units: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_normalized_units: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_running_normalized_units: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_normalized_units_percentage: Option<String>,
}

impl From<&ce::CoverageNormalizedUnits> for CoverageNormalizedUnitsView {
    fn from(units: &ce::CoverageNormalizedUnits) -> Self {
        Self {
            on_demand_normalized_units: units.on_demand_normalized_units.clone(),
            reserved_normalized_units: units.reserved_normalized_units.clone(),
            total_running_normalized_units: units.total_running_normalized_units.clone(),
            coverage_normalized_units_percentage: units
                .coverage_normalized_units_percentage
                .clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageCostView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_demand_cost: Option<String>,
}

impl From<&ce::CoverageCost> for CoverageCostView {
    fn from(cost: &ce::CoverageCost) -> Self {
        Self {
            on_demand_cost: cost.on_demand_cost.clone(),
        }
    }
}

// ============================================================================
// Reservation Utilization
// ============================================================================

/// Reservation utilization for one time bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationUtilizationView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_period: Option<DateRangeView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<ReservationUtilizationGroupView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<ReservationAggregatesView>,
}

impl From<&ce::UtilizationByTime> for ReservationUtilizationView {
    fn from(utilization: &ce::UtilizationByTime) -> Self {
        Self {
            time_period: utilization.time_period.as_ref().map(Into::into),
            groups: utilization.groups().iter().map(Into::into).collect(),
            total: utilization.total.as_ref().map(Into::into),
        }
    }
}

/// One utilization group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationUtilizationGroupView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utilization: Option<ReservationAggregatesView>,
}

impl From<&ce::ReservationUtilizationGroup> for ReservationUtilizationGroupView {
    fn from(group: &ce::ReservationUtilizationGroup) -> Self {
        Self {
            key: group.key.clone(),
            value: group.value.clone(),
            attributes: sorted_string_map(group.attributes.as_ref()),
            utilization: group.utilization.as_ref().map(Into::into),
        }
    }
}

/// Aggregated reservation numbers (the service reports them as strings)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationAggregatesView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utilization_percentage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchased_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_actual_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unused_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_demand_cost_of_ri_hours_used: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_ri_savings: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_potential_ri_savings: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amortized_upfront_fee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amortized_recurring_fee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amortized_fee: Option<String>,
}

impl From<&ce::ReservationAggregates> for ReservationAggregatesView {
    fn from(aggregates: &ce::ReservationAggregates) -> Self {
        Self {
            utilization_percentage: aggregates.utilization_percentage.clone(),
            purchased_hours: aggregates.purchased_hours.clone(),
            total_actual_hours: aggregates.total_actual_hours.clone(),
            unused_hours: aggregates.unused_hours.clone(),
            on_demand_cost_of_ri_hours_used: aggregates.on_demand_cost_of_ri_hours_used.clone(),
            net_ri_savings: aggregates.net_ri_savings.clone(),
            total_potential_ri_savings: aggregates.total_potential_ri_savings.clone(),
            amortized_upfront_fee: aggregates.amortized_upfront_fee.clone(),
            amortized_recurring_fee: aggregates.amortized_recurring_fee.clone(),
            total_amortized_fee: aggregates.total_amortized_fee.clone(),
        }
    }
}

// ============================================================================
// Savings Plans Coverage
// ============================================================================

/// Savings Plans coverage for one time bucket or group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavingsPlansCoverageView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_period: Option<DateRangeView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<SavingsPlansCoverageDataView>,
}

impl From<&ce::SavingsPlansCoverage> for SavingsPlansCoverageView {
    fn from(coverage: &ce::SavingsPlansCoverage) -> Self {
        Self {
            time_period: coverage.time_period.as_ref().map(Into::into),
            attributes: sorted_string_map(coverage.attributes.as_ref()),
            coverage: coverage.coverage.as_ref().map(Into::into),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavingsPlansCoverageDataView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spend_covered_by_savings_plans: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_demand_cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_percentage: Option<String>,
}

impl From<&ce::SavingsPlansCoverageData> for SavingsPlansCoverageDataView {
    fn from(data: &ce::SavingsPlansCoverageData) -> Self {
        Self {
            spend_covered_by_savings_plans: data.spend_covered_by_savings_plans.clone(),
            on_demand_cost: data.on_demand_cost.clone(),
            total_cost: data.total_cost.clone(),
            coverage_percentage: data.coverage_percentage.clone(),
        }
    }
}

// ============================================================================
// Savings Plans Utilization
// ============================================================================

/// Per-plan utilization detail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavingsPlansUtilizationDetailView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_plan_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utilization: Option<SavingsPlansUtilizationView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<SavingsPlansSavingsView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amortized_commitment: Option<SavingsPlansAmortizedCommitmentView>,
}

impl From<&ce::SavingsPlansUtilizationDetail> for SavingsPlansUtilizationDetailView {
    fn from(detail: &ce::SavingsPlansUtilizationDetail) -> Self {
        Self {
            savings_plan_arn: detail.savings_plan_arn.clone(),
            attributes: sorted_string_map(detail.attributes.as_ref()),
            utilization: detail.utilization.as_ref().map(Into::into),
            savings: detail.savings.as_ref().map(Into::into),
            amortized_commitment: detail.amortized_commitment.as_ref().map(Into::into),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavingsPlansUtilizationView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_commitment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_commitment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unused_commitment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utilization_percentage: Option<String>,
}

impl From<&ce::SavingsPlansUtilization> for SavingsPlansUtilizationView {
    fn from(utilization: &ce::SavingsPlansUtilization) -> Self {
        Self {
            total_commitment: utilization.total_commitment.clone(),
            used_commitment: utilization.used_commitment.clone(),
            unused_commitment: utilization.unused_commitment.clone(),
            utilization_percentage: utilization.utilization_percentage.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavingsPlansSavingsView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_savings: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_demand_cost_equivalent: Option<String>,
}

impl From<&ce::SavingsPlansSavings> for SavingsPlansSavingsView {
    fn from(savings: &ce::SavingsPlansSavings) -> Self {
        Self {
            net_savings: savings.net_savings.clone(),
            on_demand_cost_equivalent: savings.on_demand_cost_equivalent.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavingsPlansAmortizedCommitmentView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amortized_recurring_commitment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amortized_upfront_commitment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amortized_commitment: Option<String>,
}

impl From<&ce::SavingsPlansAmortizedCommitment> for SavingsPlansAmortizedCommitmentView {
    fn from(commitment: &ce::SavingsPlansAmortizedCommitment) -> Self {
        Self {
            amortized_recurring_commitment: commitment.amortized_recurring_commitment.clone(),
            amortized_upfront_commitment: commitment.amortized_upfront_commitment.clone(),
            total_amortized_commitment: commitment.total_amortized_commitment.clone(),
        }
    }
}
