//! Savings Plans coverage and utilization queries

use super::{non_empty, parse_filter, parse_group_bys};
use crate::cli::{SavingsPlansCoverageArgs, SavingsPlansUtilizationDetailsArgs};
use crate::error::Result;
use crate::pager::{paginate, Page, PageRequest, PageSource, PagerConfig, PagerOutcome};
use crate::views::{SavingsPlansCoverageView, SavingsPlansUtilizationDetailView};
use async_trait::async_trait;
use aws_sdk_costexplorer::types as ce;
use aws_sdk_costexplorer::Client;

/// Fixed request members for a Savings Plans coverage pull
struct SavingsPlansCoverageQuery {
    client: Client,
    time_period: ce::DateInterval,
    granularity: Option<ce::Granularity>,
    group_by: Vec<ce::GroupDefinition>,
    metrics: Vec<String>,
    filter: Option<ce::Expression>,
}

#[async_trait]
impl PageSource for SavingsPlansCoverageQuery {
    type Item = ce::SavingsPlansCoverage;

    async fn fetch(&self, request: PageRequest) -> Result<Page<Self::Item>> {
        let output = self
            .client
            .get_savings_plans_coverage()
            .time_period(self.time_period.clone())
            .set_granularity(self.granularity.clone())
            .set_group_by(non_empty(self.group_by.clone()))
            .set_metrics(non_empty(self.metrics.clone()))
            .set_filter(self.filter.clone())
            .set_next_token(request.token)
            .set_max_results(request.limit)
            .send()
            .await
            .map_err(aws_sdk_costexplorer::Error::from)?;

        Ok(Page::new(
            output.savings_plans_coverages().to_vec(),
            output.next_token().map(ToString::to_string),
        ))
    }
}

/// Run GetSavingsPlansCoverage through the pager
pub async fn savings_plans_coverage(
    client: &Client,
    args: &SavingsPlansCoverageArgs,
    pager: &PagerConfig,
) -> Result<PagerOutcome<SavingsPlansCoverageView>> {
    let source = SavingsPlansCoverageQuery {
        client: client.clone(),
        time_period: args.window.to_date_interval()?,
        granularity: args.granularity.map(Into::into),
        group_by: parse_group_bys(&args.group_by)?,
        metrics: args.metrics.clone(),
        filter: parse_filter(args.filter.as_deref())?,
    };

    let outcome = paginate(pager, &source).await?;
    Ok(outcome.map_items(|coverage| SavingsPlansCoverageView::from(&coverage)))
}

/// Fixed request members for a per-plan utilization pull
struct SavingsPlansUtilizationQuery {
    client: Client,
    time_period: ce::DateInterval,
    filter: Option<ce::Expression>,
}

#[async_trait]
impl PageSource for SavingsPlansUtilizationQuery {
    type Item = ce::SavingsPlansUtilizationDetail;

    async fn fetch(&self, request: PageRequest) -> Result<Page<Self::Item>> {
        let output = self
            .client
            .get_savings_plans_utilization_details()
            .time_period(self.time_period.clone())
            .set_filter(self.filter.clone())
            .set_next_token(request.token)
            .set_max_results(request.limit)
            .send()
            .await
            .map_err(aws_sdk_costexplorer::Error::from)?;

        Ok(Page::new(
            output.savings_plans_utilization_details().to_vec(),
            output.next_token().map(ToString::to_string),
        ))
    }
}

/// Run GetSavingsPlansUtilizationDetails through the pager
pub async fn savings_plans_utilization_details(
    client: &Client,
    args: &SavingsPlansUtilizationDetailsArgs,
    pager: &PagerConfig,
) -> Result<PagerOutcome<SavingsPlansUtilizationDetailView>> {
    let source = SavingsPlansUtilizationQuery {
        client: client.clone(),
        time_period: args.window.to_date_interval()?,
        filter: parse_filter(args.filter.as_deref())?,
    };

    let outcome = paginate(pager, &source).await?;
    Ok(outcome.map_items(|detail| SavingsPlansUtilizationDetailView::from(&detail)))
}
