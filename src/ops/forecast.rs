//! Cost and usage forecasts
//!
//! GetCostForecast and GetUsageForecast return a bounded set of future
//! time buckets and are not paged.

use super::{date_interval, parse_filter};
use crate::cli::ForecastArgs;
use crate::error::Result;
use crate::views::ForecastView;
use aws_sdk_costexplorer::Client;

/// Forecast future cost (GetCostForecast)
pub async fn cost_forecast(client: &Client, args: &ForecastArgs) -> Result<ForecastView> {
    args.validate()?;
    let output = client
        .get_cost_forecast()
        .time_period(date_interval(&args.start, &args.end)?)
        .metric(args.metric.into())
        .granularity(args.granularity.into())
        .set_filter(parse_filter(args.filter.as_deref())?)
        .set_prediction_interval_level(args.prediction_interval)
        .send()
        .await
        .map_err(aws_sdk_costexplorer::Error::from)?;

    Ok(ForecastView {
        total: output.total.as_ref().map(Into::into),
        forecast_results_by_time: output
            .forecast_results_by_time()
            .iter()
            .map(Into::into)
            .collect(),
    })
}

/// Forecast future usage (GetUsageForecast)
pub async fn usage_forecast(client: &Client, args: &ForecastArgs) -> Result<ForecastView> {
    args.validate()?;
    let output = client
        .get_usage_forecast()
        .time_period(date_interval(&args.start, &args.end)?)
        .metric(args.metric.into())
        .granularity(args.granularity.into())
        .set_filter(parse_filter(args.filter.as_deref())?)
        .set_prediction_interval_level(args.prediction_interval)
        .send()
        .await
        .map_err(aws_sdk_costexplorer::Error::from)?;

    Ok(ForecastView {
        total: output.total.as_ref().map(Into::into),
        forecast_results_by_time: output
            .forecast_results_by_time()
            .iter()
            .map(Into::into)
            .collect(),
    })
}
