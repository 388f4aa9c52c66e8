//! Anomaly monitor listing and lifecycle

use super::non_empty;
use crate::cli::{MonitorCreateArgs, MonitorDeleteArgs, MonitorListArgs, MonitorUpdateArgs};
use crate::error::{Error, Result};
use crate::expr::parse_expression;
use crate::pager::{paginate, Page, PageRequest, PageSource, PagerConfig, PagerOutcome};
use crate::types::MonitorKind;
use crate::views::{MonitorArnView, MonitorView};
use async_trait::async_trait;
use aws_sdk_costexplorer::types as ce;
use aws_sdk_costexplorer::Client;
use tracing::info;

/// Fixed request members for a monitor listing
struct MonitorQuery {
    client: Client,
    arns: Vec<String>,
}

#[async_trait]
impl PageSource for MonitorQuery {
    type Item = ce::AnomalyMonitor;

    async fn fetch(&self, request: PageRequest) -> Result<Page<ce::AnomalyMonitor>> {
        let output = self
            .client
            .get_anomaly_monitors()
            .set_monitor_arn_list(non_empty(self.arns.clone()))
            .set_next_page_token(request.token)
            .set_max_results(request.limit)
            .send()
            .await
            .map_err(aws_sdk_costexplorer::Error::from)?;

        Ok(Page::new(
            output.anomaly_monitors().to_vec(),
            output.next_page_token().map(ToString::to_string),
        ))
    }
}

/// Run GetAnomalyMonitors through the pager
pub async fn list_monitors(
    client: &Client,
    args: &MonitorListArgs,
    pager: &PagerConfig,
) -> Result<PagerOutcome<MonitorView>> {
    let source = MonitorQuery {
        client: client.clone(),
        arns: args.arns.clone(),
    };

    let outcome = paginate(pager, &source).await?;
    Ok(outcome.map_items(|monitor| MonitorView::from(&monitor)))
}

/// Assemble the monitor definition from create arguments
fn monitor_definition(args: &MonitorCreateArgs) -> Result<ce::AnomalyMonitor> {
    let mut builder = ce::AnomalyMonitor::builder()
        .monitor_name(&args.name)
        .monitor_type(args.kind.into());

    match args.kind {
        MonitorKind::Dimensional => {
            let dimension = args.dimension.as_deref().ok_or_else(|| {
                Error::invalid_argument("dimension", "dimensional monitors need --dimension")
            })?;
            if args.specification.is_some() {
                return Err(Error::invalid_argument(
                    "specification",
                    "--specification only applies to custom monitors",
                ));
            }
            builder = builder.monitor_dimension(ce::MonitorDimension::from(
                dimension.to_ascii_uppercase().as_str(),
            ));
        }
        MonitorKind::Custom => {
            let specification = args.specification.as_deref().ok_or_else(|| {
                Error::invalid_argument("specification", "custom monitors need --specification")
            })?;
            builder = builder.monitor_specification(parse_expression(specification)?);
        }
    }

    Ok(builder.build()?)
}

/// Create an anomaly monitor (CreateAnomalyMonitor)
pub async fn create_monitor(client: &Client, args: &MonitorCreateArgs) -> Result<MonitorArnView> {
    let monitor = monitor_definition(args)?;
    let output = client
        .create_anomaly_monitor()
        .anomaly_monitor(monitor)
        .send()
        .await
        .map_err(aws_sdk_costexplorer::Error::from)?;

    let monitor_arn = output.monitor_arn().to_string();
    info!(%monitor_arn, "created anomaly monitor");
    Ok(MonitorArnView { monitor_arn })
}

/// Rename an anomaly monitor (UpdateAnomalyMonitor)
pub async fn update_monitor(client: &Client, args: &MonitorUpdateArgs) -> Result<MonitorArnView> {
    let output = client
        .update_anomaly_monitor()
        .monitor_arn(&args.arn)
        .monitor_name(&args.name)
        .send()
        .await
        .map_err(aws_sdk_costexplorer::Error::from)?;

    Ok(MonitorArnView {
        monitor_arn: output.monitor_arn().to_string(),
    })
}

/// Delete an anomaly monitor (DeleteAnomalyMonitor)
pub async fn delete_monitor(client: &Client, args: &MonitorDeleteArgs) -> Result<MonitorArnView> {
    if !args.yes {
        return Err(Error::confirmation_required("delete anomaly monitor"));
    }

    client
        .delete_anomaly_monitor()
        .monitor_arn(&args.arn)
        .send()
        .await
        .map_err(aws_sdk_costexplorer::Error::from)?;

    info!(monitor_arn = %args.arn, "deleted anomaly monitor");
    Ok(MonitorArnView {
        monitor_arn: args.arn.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_args(kind: MonitorKind) -> MonitorCreateArgs {
        MonitorCreateArgs {
            name: "ec2-spend".to_string(),
            kind,
            dimension: None,
            specification: None,
        }
    }

    #[test]
    fn test_dimensional_monitor_definition() {
        let mut args = create_args(MonitorKind::Dimensional);
        args.dimension = Some("service".to_string());

        let monitor = monitor_definition(&args).unwrap();

        assert_eq!(monitor.monitor_name, "ec2-spend");
        assert_eq!(monitor.monitor_type, ce::MonitorType::Dimensional);
        assert_eq!(
            monitor.monitor_dimension,
            Some(ce::MonitorDimension::Service)
        );
    }

    #[test]
    fn test_dimensional_monitor_requires_dimension() {
        let args = create_args(MonitorKind::Dimensional);
        assert!(monitor_definition(&args).is_err());
    }

    #[test]
    fn test_dimensional_monitor_rejects_specification() {
        let mut args = create_args(MonitorKind::Dimensional);
        args.dimension = Some("SERVICE".to_string());
        args.specification = Some(r#"{"Tags": {"Key": "team", "Values": ["x"]}}"#.to_string());

        assert!(monitor_definition(&args).is_err());
    }

    #[test]
    fn test_custom_monitor_definition() {
        let mut args = create_args(MonitorKind::Custom);
        args.specification =
            Some(r#"{"Dimensions": {"Key": "REGION", "Values": ["us-east-1"]}}"#.to_string());

        let monitor = monitor_definition(&args).unwrap();

        assert_eq!(monitor.monitor_type, ce::MonitorType::Custom);
        assert!(monitor.monitor_specification.is_some());
    }

    #[test]
    fn test_custom_monitor_requires_specification() {
        let args = create_args(MonitorKind::Custom);
        assert!(monitor_definition(&args).is_err());
    }
}
