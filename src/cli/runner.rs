//! CLI runner - executes commands

use crate::cli::commands::{
    AllocationTagCommands, AnomalyCommands, Cli, Commands, CostCategoryCommands, CostCommands,
    DimensionCommands, MonitorCommands, PagingArgs, ReservationCommands, SavingsPlansCommands,
    SubscriptionCommands, TagCommands,
};
use crate::client::{build_client, ClientSettings};
use crate::config::Defaults;
use crate::error::Result;
use crate::ops;
use crate::output::{emit_document, emit_listing, Listing};
use crate::pager::PagerConfig;
use crate::types::OutputFormat;
use aws_sdk_costexplorer::Client;
use serde::Serialize;
use std::io::Write;
use tokio_util::sync::CancellationToken;
use tracing::warn;
use url::Url;

/// CLI runner
pub struct Runner {
    cli: Cli,
    defaults: Defaults,
}

impl Runner {
    /// Create a runner, loading the defaults file if one was given
    pub fn new(cli: Cli) -> Result<Self> {
        let defaults = match &cli.config {
            Some(path) => Defaults::load(path)?,
            None => Defaults::default(),
        };
        Ok(Self { cli, defaults })
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = build_client(&self.client_settings()?).await?;
        let cancel = interrupt_token();
        let mut stdout = std::io::stdout().lock();
        self.dispatch(&client, cancel, &mut stdout).await
    }

    /// Resolve client settings from flags over file defaults
    fn client_settings(&self) -> Result<ClientSettings> {
        let mut settings = ClientSettings::new();
        if let Some(profile) =
            Defaults::merge_under(self.defaults.profile.clone(), self.cli.profile.clone())
        {
            settings = settings.profile(profile);
        }
        if let Some(region) =
            Defaults::merge_under(self.defaults.region.clone(), self.cli.region.clone())
        {
            settings = settings.region(region);
        }
        if let Some(endpoint) = Defaults::merge_under(
            self.defaults.endpoint_url.clone(),
            self.cli.endpoint_url.clone(),
        ) {
            settings = settings.endpoint_url(Url::parse(&endpoint)?);
        }
        Ok(settings)
    }

    /// Resolve the output format from flags over file defaults
    fn output_format(&self) -> OutputFormat {
        Defaults::merge_under(self.defaults.output, self.cli.output).unwrap_or_default()
    }

    /// Build the pager config for a listing command
    fn pager_config(&self, paging: &PagingArgs, cancel: &CancellationToken) -> PagerConfig {
        paging
            .to_pager_config(self.defaults.max_items, self.defaults.page_size)
            .cancel(cancel.clone())
    }

    /// Dispatch to the operation and feed the sink
    async fn dispatch<W: Write>(
        &self,
        client: &Client,
        cancel: CancellationToken,
        writer: &mut W,
    ) -> Result<()> {
        let format = self.output_format();

        match &self.cli.command {
            Commands::Cost(command) => match command {
                CostCommands::Usage(args) => {
                    let pager = self.pager_config(&args.paging, &cancel);
                    let outcome = ops::costs::cost_and_usage(client, args, &pager).await?;
                    self.emit(writer, format, outcome)
                }
                CostCommands::UsageWithResources(args) => {
                    let pager = self.pager_config(&args.paging, &cancel);
                    let outcome =
                        ops::costs::cost_and_usage_with_resources(client, args, &pager).await?;
                    self.emit(writer, format, outcome)
                }
                CostCommands::Forecast(args) => {
                    let forecast = ops::forecast::cost_forecast(client, args).await?;
                    emit_document(writer, format, &forecast)
                }
                CostCommands::UsageForecast(args) => {
                    let forecast = ops::forecast::usage_forecast(client, args).await?;
                    emit_document(writer, format, &forecast)
                }
            },

            Commands::Anomalies(command) => match command {
                AnomalyCommands::List(args) => {
                    let pager = self.pager_config(&args.paging, &cancel);
                    let outcome = ops::anomalies::list_anomalies(client, args, &pager).await?;
                    self.emit(writer, format, outcome)
                }
                AnomalyCommands::Feedback(args) => {
                    let ack = ops::anomalies::provide_feedback(client, args).await?;
                    emit_document(writer, format, &ack)
                }
            },

            Commands::Monitors(command) => match command {
                MonitorCommands::List(args) => {
                    let pager = self.pager_config(&args.paging, &cancel);
                    let outcome = ops::monitors::list_monitors(client, args, &pager).await?;
                    self.emit(writer, format, outcome)
                }
                MonitorCommands::Create(args) => {
                    let ack = ops::monitors::create_monitor(client, args).await?;
                    emit_document(writer, format, &ack)
                }
                MonitorCommands::Update(args) => {
                    let ack = ops::monitors::update_monitor(client, args).await?;
                    emit_document(writer, format, &ack)
                }
                MonitorCommands::Delete(args) => {
                    let ack = ops::monitors::delete_monitor(client, args).await?;
                    emit_document(writer, format, &ack)
                }
            },

            Commands::Subscriptions(command) => match command {
                SubscriptionCommands::List(args) => {
                    let pager = self.pager_config(&args.paging, &cancel);
                    let outcome =
                        ops::subscriptions::list_subscriptions(client, args, &pager).await?;
                    self.emit(writer, format, outcome)
                }
                SubscriptionCommands::Create(args) => {
                    let ack = ops::subscriptions::create_subscription(client, args).await?;
                    emit_document(writer, format, &ack)
                }
                SubscriptionCommands::Update(args) => {
                    let ack = ops::subscriptions::update_subscription(client, args).await?;
                    emit_document(writer, format, &ack)
                }
                SubscriptionCommands::Delete(args) => {
                    let ack = ops::subscriptions::delete_subscription(client, args).await?;
                    emit_document(writer, format, &ack)
                }
            },

            Commands::Dimensions(command) => match command {
                DimensionCommands::Values(args) => {
                    let pager = self.pager_config(&args.paging, &cancel);
                    let outcome = ops::dimensions::dimension_values(client, args, &pager).await?;
                    self.emit(writer, format, outcome)
                }
            },

            Commands::Tags(command) => match command {
                TagCommands::Values(args) => {
                    let pager = self.pager_config(&args.paging, &cancel);
                    let outcome = ops::dimensions::tag_values(client, args, &pager).await?;
                    self.emit(writer, format, outcome)
                }
            },

            Commands::CostCategories(command) => match command {
                CostCategoryCommands::List(args) => {
                    let pager = self.pager_config(&args.paging, &cancel);
                    let outcome = ops::categories::list_cost_categories(client, args, &pager).await?;
                    self.emit(writer, format, outcome)
                }
            },

            Commands::AllocationTags(command) => match command {
                AllocationTagCommands::List(args) => {
                    let pager = self.pager_config(&args.paging, &cancel);
                    let outcome =
                        ops::categories::list_allocation_tags(client, args, &pager).await?;
                    self.emit(writer, format, outcome)
                }
            },

            Commands::Reservations(command) => match command {
                ReservationCommands::Coverage(args) => {
                    let pager = self.pager_config(&args.paging, &cancel);
                    let outcome =
                        ops::reservations::reservation_coverage(client, args, &pager).await?;
                    self.emit(writer, format, outcome)
                }
                ReservationCommands::Utilization(args) => {
                    let pager = self.pager_config(&args.paging, &cancel);
                    let outcome =
                        ops::reservations::reservation_utilization(client, args, &pager).await?;
                    self.emit(writer, format, outcome)
                }
            },

            Commands::SavingsPlans(command) => match command {
                SavingsPlansCommands::Coverage(args) => {
                    let pager = self.pager_config(&args.paging, &cancel);
                    let outcome =
                        ops::savings_plans::savings_plans_coverage(client, args, &pager).await?;
                    self.emit(writer, format, outcome)
                }
                SavingsPlansCommands::UtilizationDetails(args) => {
                    let pager = self.pager_config(&args.paging, &cancel);
                    let outcome =
                        ops::savings_plans::savings_plans_utilization_details(client, args, &pager)
                            .await?;
                    self.emit(writer, format, outcome)
                }
            },
        }
    }

    /// Emit a pager outcome as a listing
    fn emit<T: Serialize, W: Write>(
        &self,
        writer: &mut W,
        format: OutputFormat,
        outcome: crate::pager::PagerOutcome<T>,
    ) -> Result<()> {
        if outcome.stop == crate::pager::StopReason::Interrupted {
            warn!(
                pages = outcome.pages,
                "iteration stopped early; output is partial"
            );
        }
        emit_listing(writer, format, &Listing::from(outcome))
    }
}

/// Cancellation token wired to Ctrl-C; the in-flight call finishes, the
/// next one is never issued
fn interrupt_token() -> CancellationToken {
    let token = CancellationToken::new();
    let signal = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupt received; stopping after the current call");
            signal.cancel();
        }
    });
    token
}
