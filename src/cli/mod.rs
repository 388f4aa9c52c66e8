//! CLI module
//!
//! Command tree and runner.
//!
//! # Commands
//!
//! - `cost` - cost and usage queries, forecasts
//! - `anomalies` - detected anomalies, feedback
//! - `monitors` / `subscriptions` - anomaly detection lifecycle
//! - `dimensions` / `tags` - metadata lookups
//! - `cost-categories` / `allocation-tags` - categorization listings
//! - `reservations` / `savings-plans` - commitment coverage and utilization

mod commands;
mod runner;

pub use commands::{
    AllocationTagCommands, AllocationTagListArgs, AnomalyCommands, AnomalyFeedbackArgs,
    AnomalyListArgs, Cli, Commands, CostCategoryCommands, CostCategoryListArgs, CostCommands,
    CostUsageArgs, CostUsageWithResourcesArgs, DimensionCommands, DimensionValuesArgs,
    ForecastArgs, MonitorCommands, MonitorCreateArgs, MonitorDeleteArgs, MonitorListArgs,
    MonitorUpdateArgs, PagingArgs, ReservationCommands, ReservationCoverageArgs,
    ReservationUtilizationArgs, SavingsPlansCommands, SavingsPlansCoverageArgs,
    SavingsPlansUtilizationDetailsArgs, SubscriptionCommands, SubscriptionCreateArgs,
    SubscriptionDeleteArgs, SubscriptionListArgs, SubscriptionUpdateArgs, TagCommands,
    TagValuesArgs, TimeWindowArgs,
};
pub use runner::Runner;

#[cfg(test)]
mod tests;
