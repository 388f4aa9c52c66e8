//! CLI commands and argument parsing

use crate::error::{Error, Result};
use crate::pager::PagerConfig;
use crate::types::{
    AllocationTagKind, AllocationTagStatus, AnomalyFeedback, DimensionContext, ForecastMetric,
    Granularity, MonitorKind, OutputFormat, SubscriptionFrequency,
};
use aws_sdk_costexplorer::types as ce;
use chrono::{Days, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Cost Explorer command-line toolkit
#[derive(Parser, Debug)]
#[command(name = "costctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Named AWS profile from the shared config file
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// AWS region
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Endpoint override (tests, VPC endpoints)
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint_url: Option<String>,

    /// Defaults file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cost and usage queries and forecasts
    #[command(subcommand)]
    Cost(CostCommands),

    /// Detected cost anomalies
    #[command(subcommand)]
    Anomalies(AnomalyCommands),

    /// Anomaly monitors
    #[command(subcommand)]
    Monitors(MonitorCommands),

    /// Anomaly alert subscriptions
    #[command(subcommand)]
    Subscriptions(SubscriptionCommands),

    /// Dimension metadata
    #[command(subcommand)]
    Dimensions(DimensionCommands),

    /// Tag metadata
    #[command(subcommand)]
    Tags(TagCommands),

    /// Cost category definitions
    #[command(subcommand)]
    CostCategories(CostCategoryCommands),

    /// Cost allocation tags
    #[command(subcommand)]
    AllocationTags(AllocationTagCommands),

    /// Reservation coverage and utilization
    #[command(subcommand)]
    Reservations(ReservationCommands),

    /// Savings Plans coverage and utilization
    #[command(subcommand)]
    SavingsPlans(SavingsPlansCommands),
}

// ============================================================================
// Shared Argument Groups
// ============================================================================

/// Paging controls shared by every listing command
#[derive(Args, Debug, Clone, Default)]
pub struct PagingArgs {
    /// Fetch a single page and include its continuation token in the output
    #[arg(long)]
    pub no_paginate: bool,

    /// Cap the total number of items returned across all pages
    #[arg(long, value_name = "N")]
    pub max_items: Option<usize>,

    /// Per-call page-size hint sent to the service
    #[arg(long, value_name = "N")]
    pub page_size: Option<i32>,

    /// Resume from a token returned by a previous invocation
    /// (implies a single page)
    #[arg(long, value_name = "TOKEN")]
    pub starting_token: Option<String>,
}

impl PagingArgs {
    /// Build the pager config, filling gaps from file defaults
    pub fn to_pager_config(
        &self,
        default_max_items: Option<usize>,
        default_page_size: Option<i32>,
    ) -> PagerConfig {
        let mut config = PagerConfig::new().no_paginate(self.no_paginate);
        if let Some(max_items) = self.max_items.or(default_max_items) {
            config = config.max_items(max_items);
        }
        if let Some(page_size) = self.page_size.or(default_page_size) {
            config = config.page_size(page_size);
        }
        if let Some(token) = &self.starting_token {
            config = config.starting_token(token);
        }
        config
    }
}

/// Reporting window shared by time-bucketed queries
#[derive(Args, Debug, Clone, Default)]
pub struct TimeWindowArgs {
    /// Window start date (YYYY-MM-DD, inclusive)
    #[arg(long, value_name = "DATE", conflicts_with = "last_days")]
    pub start: Option<String>,

    /// Window end date (YYYY-MM-DD, exclusive); defaults to today
    #[arg(long, value_name = "DATE", conflicts_with = "last_days", requires = "start")]
    pub end: Option<String>,

    /// Shorthand for the window of the last N days ending today
    #[arg(long, value_name = "N")]
    pub last_days: Option<u32>,
}

impl TimeWindowArgs {
    /// Resolve the window into a service date interval
    pub fn to_date_interval(&self) -> Result<ce::DateInterval> {
        let today = Utc::now().date_naive();

        let (start, end) = match (&self.start, &self.end, self.last_days) {
            (None, _, Some(days)) => {
                let start = today
                    .checked_sub_days(Days::new(u64::from(days)))
                    .unwrap_or(today);
                (start, today)
            }
            (Some(start), end, None) => {
                let start = parse_date("start", start)?;
                let end = match end {
                    Some(end) => parse_date("end", end)?,
                    None => today,
                };
                (start, end)
            }
            _ => {
                return Err(Error::invalid_argument(
                    "start",
                    "supply --start [--end] or --last-days",
                ))
            }
        };

        if start >= end {
            return Err(Error::invalid_argument(
                "end",
                format!("window end {end} must be after start {start}"),
            ));
        }

        Ok(ce::DateInterval::builder()
            .start(start.format("%Y-%m-%d").to_string())
            .end(end.format("%Y-%m-%d").to_string())
            .build()?)
    }
}

/// Parse a YYYY-MM-DD date argument
pub(crate) fn parse_date(name: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| Error::invalid_argument(name, format!("expected YYYY-MM-DD: {e}")))
}

// ============================================================================
// Cost Commands
// ============================================================================

/// Cost and usage queries and forecasts
#[derive(Subcommand, Debug)]
pub enum CostCommands {
    /// Query cost and usage (GetCostAndUsage)
    Usage(CostUsageArgs),

    /// Query cost and usage at resource granularity
    /// (GetCostAndUsageWithResources)
    UsageWithResources(CostUsageWithResourcesArgs),

    /// Forecast future cost (GetCostForecast)
    Forecast(ForecastArgs),

    /// Forecast future usage (GetUsageForecast)
    UsageForecast(ForecastArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct CostUsageArgs {
    #[command(flatten)]
    pub window: TimeWindowArgs,

    /// Bucket granularity
    #[arg(long, value_enum, default_value = "monthly")]
    pub granularity: Granularity,

    /// Cost metric to return (repeatable: UnblendedCost, BlendedCost,
    /// AmortizedCost, NetUnblendedCost, NetAmortizedCost, UsageQuantity,
    /// NormalizedUsageAmount)
    #[arg(long = "metric", value_name = "METRIC", default_value = "UnblendedCost")]
    pub metrics: Vec<String>,

    /// Group results (TYPE=KEY, repeatable; e.g. DIMENSION=SERVICE, TAG=team)
    #[arg(long = "group-by", value_name = "TYPE=KEY")]
    pub group_by: Vec<String>,

    /// Filter expression (JSON)
    #[arg(long, value_name = "JSON")]
    pub filter: Option<String>,

    #[command(flatten)]
    pub paging: PagingArgs,
}

#[derive(Args, Debug, Clone)]
pub struct CostUsageWithResourcesArgs {
    #[command(flatten)]
    pub window: TimeWindowArgs,

    /// Bucket granularity
    #[arg(long, value_enum, default_value = "daily")]
    pub granularity: Granularity,

    /// Cost metric to return (repeatable)
    #[arg(long = "metric", value_name = "METRIC", default_value = "UnblendedCost")]
    pub metrics: Vec<String>,

    /// Group results (TYPE=KEY, repeatable)
    #[arg(long = "group-by", value_name = "TYPE=KEY")]
    pub group_by: Vec<String>,

    /// Filter expression (JSON); the service requires one at resource level
    #[arg(long, value_name = "JSON")]
    pub filter: String,

    #[command(flatten)]
    pub paging: PagingArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ForecastArgs {
    /// Forecast start date (YYYY-MM-DD, today or later)
    #[arg(long, value_name = "DATE")]
    pub start: String,

    /// Forecast end date (YYYY-MM-DD, exclusive)
    #[arg(long, value_name = "DATE")]
    pub end: String,

    /// Metric to forecast
    #[arg(long, value_enum, default_value = "unblended-cost")]
    pub metric: ForecastMetric,

    /// Bucket granularity (DAILY or MONTHLY)
    #[arg(long, value_enum, default_value = "monthly")]
    pub granularity: Granularity,

    /// Filter expression (JSON)
    #[arg(long, value_name = "JSON")]
    pub filter: Option<String>,

    /// Confidence level for the prediction interval (51-99)
    #[arg(long, value_name = "PERCENT")]
    pub prediction_interval: Option<i32>,
}

impl ForecastArgs {
    /// Validate dates and interval level before calling out
    pub fn validate(&self) -> Result<()> {
        let start = parse_date("start", &self.start)?;
        let end = parse_date("end", &self.end)?;
        if start >= end {
            return Err(Error::invalid_argument(
                "end",
                format!("forecast end {end} must be after start {start}"),
            ));
        }
        if let Some(level) = self.prediction_interval {
            if !(51..=99).contains(&level) {
                return Err(Error::invalid_argument(
                    "prediction-interval",
                    "must be between 51 and 99",
                ));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Anomaly Commands
// ============================================================================

/// Detected cost anomalies
#[derive(Subcommand, Debug)]
pub enum AnomalyCommands {
    /// List detected anomalies (GetAnomalies)
    List(AnomalyListArgs),

    /// Classify a detected anomaly (ProvideAnomalyFeedback)
    Feedback(AnomalyFeedbackArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct AnomalyListArgs {
    /// Detection window start (YYYY-MM-DD); defaults to 90 days ago
    #[arg(long, value_name = "DATE")]
    pub start_date: Option<String>,

    /// Detection window end (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub end_date: Option<String>,

    /// Only anomalies detected by this monitor
    #[arg(long, value_name = "ARN")]
    pub monitor_arn: Option<String>,

    /// Only anomalies with this feedback classification
    #[arg(long, value_enum)]
    pub feedback: Option<AnomalyFeedback>,

    #[command(flatten)]
    pub paging: PagingArgs,
}

#[derive(Args, Debug, Clone)]
pub struct AnomalyFeedbackArgs {
    /// Anomaly to classify
    #[arg(long, value_name = "ID")]
    pub anomaly_id: String,

    /// Classification
    #[arg(long, value_enum)]
    pub feedback: AnomalyFeedback,
}

// ============================================================================
// Monitor Commands
// ============================================================================

/// Anomaly monitors
#[derive(Subcommand, Debug)]
pub enum MonitorCommands {
    /// List anomaly monitors (GetAnomalyMonitors)
    List(MonitorListArgs),

    /// Create an anomaly monitor (CreateAnomalyMonitor)
    Create(MonitorCreateArgs),

    /// Rename an anomaly monitor (UpdateAnomalyMonitor)
    Update(MonitorUpdateArgs),

    /// Delete an anomaly monitor (DeleteAnomalyMonitor)
    Delete(MonitorDeleteArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct MonitorListArgs {
    /// Restrict to these monitor ARNs (repeatable)
    #[arg(long = "arn", value_name = "ARN")]
    pub arns: Vec<String>,

    #[command(flatten)]
    pub paging: PagingArgs,
}

#[derive(Args, Debug, Clone)]
pub struct MonitorCreateArgs {
    /// Monitor name
    #[arg(long)]
    pub name: String,

    /// Monitor kind
    #[arg(long, value_enum, default_value = "dimensional")]
    pub kind: MonitorKind,

    /// Dimension to watch (dimensional monitors; e.g. SERVICE)
    #[arg(long, value_name = "DIMENSION")]
    pub dimension: Option<String>,

    /// Filter expression to watch (custom monitors, JSON)
    #[arg(long, value_name = "JSON")]
    pub specification: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct MonitorUpdateArgs {
    /// Monitor to update
    #[arg(long, value_name = "ARN")]
    pub arn: String,

    /// New monitor name
    #[arg(long)]
    pub name: String,
}

#[derive(Args, Debug, Clone)]
pub struct MonitorDeleteArgs {
    /// Monitor to delete
    #[arg(long, value_name = "ARN")]
    pub arn: String,

    /// Skip the confirmation check
    #[arg(long)]
    pub yes: bool,
}

// ============================================================================
// Subscription Commands
// ============================================================================

/// Anomaly alert subscriptions
#[derive(Subcommand, Debug)]
pub enum SubscriptionCommands {
    /// List subscriptions (GetAnomalySubscriptions)
    List(SubscriptionListArgs),

    /// Create a subscription (CreateAnomalySubscription)
    Create(SubscriptionCreateArgs),

    /// Update a subscription (UpdateAnomalySubscription)
    Update(SubscriptionUpdateArgs),

    /// Delete a subscription (DeleteAnomalySubscription)
    Delete(SubscriptionDeleteArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct SubscriptionListArgs {
    /// Restrict to these subscription ARNs (repeatable)
    #[arg(long = "arn", value_name = "ARN")]
    pub arns: Vec<String>,

    /// Only subscriptions attached to this monitor
    #[arg(long, value_name = "ARN")]
    pub monitor_arn: Option<String>,

    #[command(flatten)]
    pub paging: PagingArgs,
}

#[derive(Args, Debug, Clone)]
pub struct SubscriptionCreateArgs {
    /// Subscription name
    #[arg(long)]
    pub name: String,

    /// Delivery cadence
    #[arg(long, value_enum)]
    pub frequency: SubscriptionFrequency,

    /// Monitors to subscribe to (repeatable)
    #[arg(long = "monitor-arn", value_name = "ARN", required = true)]
    pub monitor_arns: Vec<String>,

    /// Recipients as TYPE:ADDRESS (email:you@example.com,
    /// sns:arn:aws:sns:...; repeatable)
    #[arg(long = "subscriber", value_name = "TYPE:ADDRESS", required = true)]
    pub subscribers: Vec<String>,

    /// Alert threshold expression (JSON)
    #[arg(long, value_name = "JSON")]
    pub threshold_expression: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SubscriptionUpdateArgs {
    /// Subscription to update
    #[arg(long, value_name = "ARN")]
    pub arn: String,

    /// New subscription name
    #[arg(long)]
    pub name: Option<String>,

    /// New delivery cadence
    #[arg(long, value_enum)]
    pub frequency: Option<SubscriptionFrequency>,

    /// Replacement monitor list (repeatable)
    #[arg(long = "monitor-arn", value_name = "ARN")]
    pub monitor_arns: Vec<String>,

    /// Replacement recipient list (repeatable)
    #[arg(long = "subscriber", value_name = "TYPE:ADDRESS")]
    pub subscribers: Vec<String>,

    /// New alert threshold expression (JSON)
    #[arg(long, value_name = "JSON")]
    pub threshold_expression: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct SubscriptionDeleteArgs {
    /// Subscription to delete
    #[arg(long, value_name = "ARN")]
    pub arn: String,

    /// Skip the confirmation check
    #[arg(long)]
    pub yes: bool,
}

// ============================================================================
// Dimension / Tag Commands
// ============================================================================

/// Dimension metadata
#[derive(Subcommand, Debug)]
pub enum DimensionCommands {
    /// List the values of a dimension (GetDimensionValues)
    Values(DimensionValuesArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct DimensionValuesArgs {
    /// Dimension to enumerate (SERVICE, REGION, USAGE_TYPE, ...)
    #[arg(long)]
    pub dimension: String,

    #[command(flatten)]
    pub window: TimeWindowArgs,

    /// Substring to search for
    #[arg(long)]
    pub search_string: Option<String>,

    /// Search context
    #[arg(long, value_enum, default_value = "cost-and-usage")]
    pub context: DimensionContext,

    /// Filter expression (JSON)
    #[arg(long, value_name = "JSON")]
    pub filter: Option<String>,

    #[command(flatten)]
    pub paging: PagingArgs,
}

/// Tag metadata
#[derive(Subcommand, Debug)]
pub enum TagCommands {
    /// List tag keys or the values of one key (GetTags)
    Values(TagValuesArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct TagValuesArgs {
    /// Tag key to enumerate; omit to list tag keys instead
    #[arg(long)]
    pub tag_key: Option<String>,

    #[command(flatten)]
    pub window: TimeWindowArgs,

    /// Substring to search for
    #[arg(long)]
    pub search_string: Option<String>,

    /// Filter expression (JSON)
    #[arg(long, value_name = "JSON")]
    pub filter: Option<String>,

    #[command(flatten)]
    pub paging: PagingArgs,
}

// ============================================================================
// Cost Category / Allocation Tag Commands
// ============================================================================

/// Cost category definitions
#[derive(Subcommand, Debug)]
pub enum CostCategoryCommands {
    /// List cost category definitions (ListCostCategoryDefinitions)
    List(CostCategoryListArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct CostCategoryListArgs {
    /// Definitions effective on this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub effective_on: Option<String>,

    #[command(flatten)]
    pub paging: PagingArgs,
}

/// Cost allocation tags
#[derive(Subcommand, Debug)]
pub enum AllocationTagCommands {
    /// List cost allocation tags (ListCostAllocationTags)
    List(AllocationTagListArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct AllocationTagListArgs {
    /// Filter by activation status
    #[arg(long, value_enum)]
    pub status: Option<AllocationTagStatus>,

    /// Filter by origin
    #[arg(long = "type", value_enum)]
    pub kind: Option<AllocationTagKind>,

    /// Restrict to these tag keys (repeatable)
    #[arg(long = "tag-key", value_name = "KEY")]
    pub tag_keys: Vec<String>,

    #[command(flatten)]
    pub paging: PagingArgs,
}

// ============================================================================
// Reservation / Savings Plans Commands
// ============================================================================

/// Reservation coverage and utilization
#[derive(Subcommand, Debug)]
pub enum ReservationCommands {
    /// Reservation coverage by time bucket (GetReservationCoverage)
    Coverage(ReservationCoverageArgs),

    /// Reservation utilization by time bucket (GetReservationUtilization)
    Utilization(ReservationUtilizationArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ReservationCoverageArgs {
    #[command(flatten)]
    pub window: TimeWindowArgs,

    /// Bucket granularity
    #[arg(long, value_enum)]
    pub granularity: Option<Granularity>,

    /// Group results (TYPE=KEY, repeatable)
    #[arg(long = "group-by", value_name = "TYPE=KEY")]
    pub group_by: Vec<String>,

    /// Coverage metric to return (repeatable: Hour, Unit, Cost)
    #[arg(long = "metric", value_name = "METRIC")]
    pub metrics: Vec<String>,

    /// Filter expression (JSON)
    #[arg(long, value_name = "JSON")]
    pub filter: Option<String>,

    #[command(flatten)]
    pub paging: PagingArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ReservationUtilizationArgs {
    #[command(flatten)]
    pub window: TimeWindowArgs,

    /// Bucket granularity
    #[arg(long, value_enum)]
    pub granularity: Option<Granularity>,

    /// Group results (TYPE=KEY, repeatable)
    #[arg(long = "group-by", value_name = "TYPE=KEY")]
    pub group_by: Vec<String>,

    /// Filter expression (JSON)
    #[arg(long, value_name = "JSON")]
    pub filter: Option<String>,

    #[command(flatten)]
    pub paging: PagingArgs,
}

/// Savings Plans coverage and utilization
#[derive(Subcommand, Debug)]
pub enum SavingsPlansCommands {
    /// Savings Plans coverage (GetSavingsPlansCoverage)
    Coverage(SavingsPlansCoverageArgs),

    /// Per-plan utilization detail (GetSavingsPlansUtilizationDetails)
    UtilizationDetails(SavingsPlansUtilizationDetailsArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct SavingsPlansCoverageArgs {
    #[command(flatten)]
    pub window: TimeWindowArgs,

    /// Bucket granularity
    #[arg(long, value_enum)]
    pub granularity: Option<Granularity>,

    /// Group results (TYPE=KEY, repeatable)
    #[arg(long = "group-by", value_name = "TYPE=KEY")]
    pub group_by: Vec<String>,

    /// Coverage metric to return (repeatable)
    #[arg(long = "metric", value_name = "METRIC")]
    pub metrics: Vec<String>,

    /// Filter expression (JSON)
    #[arg(long, value_name = "JSON")]
    pub filter: Option<String>,

    #[command(flatten)]
    pub paging: PagingArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SavingsPlansUtilizationDetailsArgs {
    #[command(flatten)]
    pub window: TimeWindowArgs,

    /// Filter expression (JSON)
    #[arg(long, value_name = "JSON")]
    pub filter: Option<String>,

    #[command(flatten)]
    pub paging: PagingArgs,
}
