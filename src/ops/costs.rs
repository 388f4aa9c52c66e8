//! Cost and usage queries
//!
//! Wraps GetCostAndUsage and GetCostAndUsageWithResources. Neither
//! operation has a page-size member, so the pager's hint is ignored and
//! `--max-items` acts purely as a client-side cap on time buckets.

use super::{non_empty, parse_filter, parse_group_bys};
use crate::cli::{CostUsageArgs, CostUsageWithResourcesArgs};
use crate::error::Result;
use crate::pager::{paginate, Page, PageRequest, PageSource, PagerConfig, PagerOutcome};
use crate::views::ResultByTimeView;
use async_trait::async_trait;
use aws_sdk_costexplorer::types as ce;
use aws_sdk_costexplorer::Client;

/// Fixed request members for a cost-and-usage pull
struct CostAndUsageQuery {
    client: Client,
    time_period: ce::DateInterval,
    granularity: ce::Granularity,
    metrics: Vec<String>,
    group_by: Vec<ce::GroupDefinition>,
    filter: Option<ce::Expression>,
    resource_level: bool,
}

#[async_trait]
impl PageSource for CostAndUsageQuery {
    type Item = ce::ResultByTime;

    async fn fetch(&self, request: PageRequest) -> Result<Page<ce::ResultByTime>> {
        if self.resource_level {
            let output = self
                .client
                .get_cost_and_usage_with_resources()
                .time_period(self.time_period.clone())
                .granularity(self.granularity.clone())
                .set_metrics(non_empty(self.metrics.clone()))
                .set_group_by(non_empty(self.group_by.clone()))
                .set_filter(self.filter.clone())
                .set_next_page_token(request.token)
                .send()
                .await
                .map_err(aws_sdk_costexplorer::Error::from)?;
            Ok(Page::new(
                output.results_by_time().to_vec(),
                output.next_page_token().map(ToString::to_string),
            ))
        } else {
            let output = self
                .client
                .get_cost_and_usage()
                .time_period(self.time_period.clone())
                .granularity(self.granularity.clone())
                .set_metrics(non_empty(self.metrics.clone()))
                .set_group_by(non_empty(self.group_by.clone()))
                .set_filter(self.filter.clone())
                .set_next_page_token(request.token)
                .send()
                .await
                .map_err(aws_sdk_costexplorer::Error::from)?;
            Ok(Page::new(
                output.results_by_time().to_vec(),
                output.next_page_token().map(ToString::to_string),
            ))
        }
    }
}

/// Run GetCostAndUsage through the pager
pub async fn cost_and_usage(
    client: &Client,
    args: &CostUsageArgs,
    pager: &PagerConfig,
) -> Result<PagerOutcome<ResultByTimeView>> {
    let source = CostAndUsageQuery {
        client: client.clone(),
        time_period: args.window.to_date_interval()?,
        granularity: args.granularity.into(),
        metrics: args.metrics.clone(),
        group_by: parse_group_bys(&args.group_by)?,
        filter: parse_filter(args.filter.as_deref())?,
        resource_level: false,
    };

    let outcome = paginate(pager, &source).await?;
    Ok(outcome.map_items(|result| ResultByTimeView::from(&result)))
}

/// Run GetCostAndUsageWithResources through the pager
///
/// The service requires a filter here (resource-level data is only kept
/// for a four-day window and must be narrowed); the arguments make it
/// mandatory.
pub async fn cost_and_usage_with_resources(
    client: &Client,
    args: &CostUsageWithResourcesArgs,
    pager: &PagerConfig,
) -> Result<PagerOutcome<ResultByTimeView>> {
    let source = CostAndUsageQuery {
        client: client.clone(),
        time_period: args.window.to_date_interval()?,
        granularity: args.granularity.into(),
        metrics: args.metrics.clone(),
        group_by: parse_group_bys(&args.group_by)?,
        filter: Some(crate::expr::parse_expression(&args.filter)?),
        resource_level: true,
    };

    let outcome = paginate(pager, &source).await?;
    Ok(outcome.map_items(|result| ResultByTimeView::from(&result)))
}
