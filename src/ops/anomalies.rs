//! Anomaly listing and feedback

use crate::cli::{AnomalyFeedbackArgs, AnomalyListArgs};
use crate::error::Result;
use crate::pager::{paginate, Page, PageRequest, PageSource, PagerConfig, PagerOutcome};
use crate::views::{AnomalyFeedbackView, AnomalyView};
use async_trait::async_trait;
use aws_sdk_costexplorer::types as ce;
use aws_sdk_costexplorer::Client;
use chrono::{Days, Utc};

/// Default detection window when no start date is given
const DEFAULT_LOOKBACK_DAYS: u64 = 90;

/// Fixed request members for an anomaly pull
struct AnomalyQuery {
    client: Client,
    date_interval: ce::AnomalyDateInterval,
    monitor_arn: Option<String>,
    feedback: Option<ce::AnomalyFeedbackType>,
}

#[async_trait]
impl PageSource for AnomalyQuery {
    type Item = ce::Anomaly;

    async fn fetch(&self, request: PageRequest) -> Result<Page<ce::Anomaly>> {
        let output = self
            .client
            .get_anomalies()
            .date_interval(self.date_interval.clone())
            .set_monitor_arn(self.monitor_arn.clone())
            .set_feedback(self.feedback.clone())
            .set_next_page_token(request.token)
            .set_max_results(request.limit)
            .send()
            .await
            .map_err(aws_sdk_costexplorer::Error::from)?;

        Ok(Page::new(
            output.anomalies().to_vec(),
            output.next_page_token().map(ToString::to_string),
        ))
    }
}

/// Resolve the detection window; the start date defaults to 90 days back
fn detection_window(args: &AnomalyListArgs) -> Result<ce::AnomalyDateInterval> {
    let start = match &args.start_date {
        Some(start) => start.clone(),
        None => {
            let today = Utc::now().date_naive();
            let start = today
                .checked_sub_days(Days::new(DEFAULT_LOOKBACK_DAYS))
                .unwrap_or(today);
            start.format("%Y-%m-%d").to_string()
        }
    };

    Ok(ce::AnomalyDateInterval::builder()
        .start_date(start)
        .set_end_date(args.end_date.clone())
        .build()?)
}

/// Run GetAnomalies through the pager
pub async fn list_anomalies(
    client: &Client,
    args: &AnomalyListArgs,
    pager: &PagerConfig,
) -> Result<PagerOutcome<AnomalyView>> {
    let source = AnomalyQuery {
        client: client.clone(),
        date_interval: detection_window(args)?,
        monitor_arn: args.monitor_arn.clone(),
        feedback: args.feedback.map(Into::into),
    };

    let outcome = paginate(pager, &source).await?;
    Ok(outcome.map_items(|anomaly| AnomalyView::from(&anomaly)))
}

/// Classify a detected anomaly (ProvideAnomalyFeedback)
pub async fn provide_feedback(
    client: &Client,
    args: &AnomalyFeedbackArgs,
) -> Result<AnomalyFeedbackView> {
    let output = client
        .provide_anomaly_feedback()
        .anomaly_id(&args.anomaly_id)
        .feedback(args.feedback.into())
        .send()
        .await
        .map_err(aws_sdk_costexplorer::Error::from)?;

    Ok(AnomalyFeedbackView {
        anomaly_id: output.anomaly_id().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::AnomalyListArgs;

    #[test]
    fn test_detection_window_explicit_dates() {
        let args = AnomalyListArgs {
            start_date: Some("2026-05-01".to_string()),
            end_date: Some("2026-06-01".to_string()),
            ..Default::default()
        };

        let window = detection_window(&args).unwrap();
        assert_eq!(window.start_date, "2026-05-01");
        assert_eq!(window.end_date.as_deref(), Some("2026-06-01"));
    }

    #[test]
    fn test_detection_window_defaults_to_lookback() {
        let args = AnomalyListArgs::default();
        let window = detection_window(&args).unwrap();

        // A concrete date in the past, open-ended
        assert_eq!(window.start_date.len(), 10);
        assert!(window.end_date.is_none());
    }
}
