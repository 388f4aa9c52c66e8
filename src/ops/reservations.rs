//! Reservation coverage and utilization queries

use super::{non_empty, parse_filter, parse_group_bys};
use crate::cli::{ReservationCoverageArgs, ReservationUtilizationArgs};
use crate::error::Result;
use crate::pager::{paginate, Page, PageRequest, PageSource, PagerConfig, PagerOutcome};
use crate::views::{ReservationCoverageView, ReservationUtilizationView};
use async_trait::async_trait;
use aws_sdk_costexplorer::types as ce;
use aws_sdk_costexplorer::Client;

/// Fixed request members for a reservation coverage pull
struct ReservationCoverageQuery {
    client: Client,
    time_period: ce::DateInterval,
    granularity: Option<ce::Granularity>,
    group_by: Vec<ce::GroupDefinition>,
    metrics: Vec<String>,
    filter: Option<ce::Expression>,
}

#[async_trait]
impl PageSource for ReservationCoverageQuery {
    type Item = ce::CoverageByTime;

    async fn fetch(&self, request: PageRequest) -> Result<Page<Self::Item>> {
        let output = self
            .client
            .get_reservation_coverage()
            .time_period(self.time_period.clone())
            .set_granularity(self.granularity.clone())
            .set_group_by(non_empty(self.group_by.clone()))
            .set_metrics(non_empty(self.metrics.clone()))
            .set_filter(self.filter.clone())
            .set_next_page_token(request.token)
            .set_max_results(request.limit)
            .send()
            .await
            .map_err(aws_sdk_costexplorer::Error::from)?;

        Ok(Page::new(
            output.coverages_by_time().to_vec(),
            output.next_page_token().map(ToString::to_string),
        ))
    }
}

/// Run GetReservationCoverage through the pager
pub async fn reservation_coverage(
    client: &Client,
    args: &ReservationCoverageArgs,
    pager: &PagerConfig,
) -> Result<PagerOutcome<ReservationCoverageView>> {
    let source = ReservationCoverageQuery {
        client: client.clone(),
        time_period: args.window.to_date_interval()?,
        granularity: args.granularity.map(Into::into),
        group_by: parse_group_bys(&args.group_by)?,
        metrics: args.metrics.clone(),
        filter: parse_filter(args.filter.as_deref())?,
    };

    let outcome = paginate(pager, &source).await?;
    Ok(outcome.map_items(|coverage| ReservationCoverageView::from(&coverage)))
}

/// Fixed request members for a reservation utilization pull
struct ReservationUtilizationQuery {
    client: Client,
    time_period: ce::DateInterval,
    granularity: Option<ce::Granularity>,
    group_by: Vec<ce::GroupDefinition>,
    filter: Option<ce::Expression>,
}

#[async_trait]
impl PageSource for ReservationUtilizationQuery {
    type Item = ce::UtilizationByTime;

    async fn fetch(&self, request: PageRequest) -> Result<Page<Self::Item>> {
        let output = self
            .client
            .get_reservation_utilization()
            .time_period(self.time_period.clone())
            .set_granularity(self.granularity.clone())
            .set_group_by(non_empty(self.group_by.clone()))
            .set_filter(self.filter.clone())
            .set_next_page_token(request.token)
            .set_max_results(request.limit)
            .send()
            .await
            .map_err(aws_sdk_costexplorer::Error::from)?;

        Ok(Page::new(
            output.utilizations_by_time().to_vec(),
            output.next_page_token().map(ToString::to_string),
        ))
    }
}

/// Run GetReservationUtilization through the pager
pub async fn reservation_utilization(
    client: &Client,
    args: &ReservationUtilizationArgs,
    pager: &PagerConfig,
) -> Result<PagerOutcome<ReservationUtilizationView>> {
    let source = ReservationUtilizationQuery {
        client: client.clone(),
        time_period: args.window.to_date_interval()?,
        granularity: args.granularity.map(Into::into),
        group_by: parse_group_bys(&args.group_by)?,
        filter: parse_filter(args.filter.as_deref())?,
    };

    let outcome = paginate(pager, &source).await?;
    Ok(outcome.map_items(|utilization| ReservationUtilizationView::from(&utilization)))
}
