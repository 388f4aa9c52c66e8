//! Anomaly subscription listing and lifecycle

use super::non_empty;
use crate::cli::{
    SubscriptionCreateArgs, SubscriptionDeleteArgs, SubscriptionListArgs, SubscriptionUpdateArgs,
};
use crate::error::{Error, Result};
use crate::expr::parse_expression;
use crate::pager::{paginate, Page, PageRequest, PageSource, PagerConfig, PagerOutcome};
use crate::views::{SubscriptionArnView, SubscriptionView};
use async_trait::async_trait;
use aws_sdk_costexplorer::types as ce;
use aws_sdk_costexplorer::Client;
use tracing::info;

/// Fixed request members for a subscription listing
struct SubscriptionQuery {
    client: Client,
    arns: Vec<String>,
    monitor_arn: Option<String>,
}

#[async_trait]
impl PageSource for SubscriptionQuery {
    type Item = ce::AnomalySubscription;

    async fn fetch(&self, request: PageRequest) -> Result<Page<ce::AnomalySubscription>> {
        let output = self
            .client
            .get_anomaly_subscriptions()
            .set_subscription_arn_list(non_empty(self.arns.clone()))
            .set_monitor_arn(self.monitor_arn.clone())
            .set_next_page_token(request.token)
            .set_max_results(request.limit)
            .send()
            .await
            .map_err(aws_sdk_costexplorer::Error::from)?;

        Ok(Page::new(
            output.anomaly_subscriptions().to_vec(),
            output.next_page_token().map(ToString::to_string),
        ))
    }
}

/// Run GetAnomalySubscriptions through the pager
pub async fn list_subscriptions(
    client: &Client,
    args: &SubscriptionListArgs,
    pager: &PagerConfig,
) -> Result<PagerOutcome<SubscriptionView>> {
    let source = SubscriptionQuery {
        client: client.clone(),
        arns: args.arns.clone(),
        monitor_arn: args.monitor_arn.clone(),
    };

    let outcome = paginate(pager, &source).await?;
    Ok(outcome.map_items(|subscription| SubscriptionView::from(&subscription)))
}

/// Parse a `type:address` recipient spec (`email:finops@example.com`,
/// `sns:arn:aws:sns:us-east-1:123456789012:alerts`)
pub(crate) fn parse_subscriber(spec: &str) -> Result<ce::Subscriber> {
    let (kind, address) = spec.split_once(':').ok_or_else(|| {
        Error::invalid_argument(
            "subscriber",
            format!("expected TYPE:ADDRESS (e.g. email:you@example.com), got '{spec}'"),
        )
    })?;

    let kind = match kind.to_ascii_lowercase().as_str() {
        "email" => ce::SubscriberType::Email,
        "sns" => ce::SubscriberType::Sns,
        other => {
            return Err(Error::invalid_argument(
                "subscriber",
                format!("unknown subscriber type '{other}' (expected email or sns)"),
            ))
        }
    };

    if address.is_empty() {
        return Err(Error::invalid_argument(
            "subscriber",
            "address must not be empty",
        ));
    }

    Ok(ce::Subscriber::builder()
        .r#type(kind)
        .address(address)
        .build())
}

fn parse_subscribers(specs: &[String]) -> Result<Vec<ce::Subscriber>> {
    specs.iter().map(|s| parse_subscriber(s)).collect()
}

/// Create an anomaly subscription (CreateAnomalySubscription)
pub async fn create_subscription(
    client: &Client,
    args: &SubscriptionCreateArgs,
) -> Result<SubscriptionArnView> {
    let subscription = ce::AnomalySubscription::builder()
        .subscription_name(&args.name)
        .frequency(args.frequency.into())
        .set_monitor_arn_list(Some(args.monitor_arns.clone()))
        .set_subscribers(Some(parse_subscribers(&args.subscribers)?))
        .set_threshold_expression(
            args.threshold_expression
                .as_deref()
                .map(parse_expression)
                .transpose()?,
        )
        .build()?;

    let output = client
        .create_anomaly_subscription()
        .anomaly_subscription(subscription)
        .send()
        .await
        .map_err(aws_sdk_costexplorer::Error::from)?;

    let subscription_arn = output.subscription_arn().to_string();
    info!(%subscription_arn, "created anomaly subscription");
    Ok(SubscriptionArnView { subscription_arn })
}

/// Update an anomaly subscription (UpdateAnomalySubscription)
pub async fn update_subscription(
    client: &Client,
    args: &SubscriptionUpdateArgs,
) -> Result<SubscriptionArnView> {
    let output = client
        .update_anomaly_subscription()
        .subscription_arn(&args.arn)
        .set_subscription_name(args.name.clone())
        .set_frequency(args.frequency.map(Into::into))
        .set_monitor_arn_list(non_empty(args.monitor_arns.clone()))
        .set_subscribers(non_empty(parse_subscribers(&args.subscribers)?))
        .set_threshold_expression(
            args.threshold_expression
                .as_deref()
                .map(parse_expression)
                .transpose()?,
        )
        .send()
        .await
        .map_err(aws_sdk_costexplorer::Error::from)?;

    Ok(SubscriptionArnView {
        subscription_arn: output.subscription_arn().to_string(),
    })
}

/// Delete an anomaly subscription (DeleteAnomalySubscription)
pub async fn delete_subscription(
    client: &Client,
    args: &SubscriptionDeleteArgs,
) -> Result<SubscriptionArnView> {
    if !args.yes {
        return Err(Error::confirmation_required("delete anomaly subscription"));
    }

    client
        .delete_anomaly_subscription()
        .subscription_arn(&args.arn)
        .send()
        .await
        .map_err(aws_sdk_costexplorer::Error::from)?;

    info!(subscription_arn = %args.arn, "deleted anomaly subscription");
    Ok(SubscriptionArnView {
        subscription_arn: args.arn.clone(),
    })
}
