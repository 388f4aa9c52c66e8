//! Dimension and tag metadata lookups
//!
//! GetDimensionValues enumerates the values of a dimension (services,
//! regions, usage types); GetTags enumerates tag keys or the values of
//! one tag key. Both are plain token-paged listings.

use super::parse_filter;
use crate::cli::{DimensionValuesArgs, TagValuesArgs};
use crate::error::Result;
use crate::pager::{paginate, Page, PageRequest, PageSource, PagerConfig, PagerOutcome};
use crate::views::DimensionValueView;
use async_trait::async_trait;
use aws_sdk_costexplorer::types as ce;
use aws_sdk_costexplorer::Client;

/// Fixed request members for a dimension value listing
struct DimensionValuesQuery {
    client: Client,
    dimension: ce::Dimension,
    time_period: ce::DateInterval,
    context: ce::Context,
    search_string: Option<String>,
    filter: Option<ce::Expression>,
}

#[async_trait]
impl PageSource for DimensionValuesQuery {
    type Item = ce::DimensionValuesWithAttributes;

    async fn fetch(&self, request: PageRequest) -> Result<Page<Self::Item>> {
        let output = self
            .client
            .get_dimension_values()
            .dimension(self.dimension.clone())
            .time_period(self.time_period.clone())
            .context(self.context.clone())
            .set_search_string(self.search_string.clone())
            .set_filter(self.filter.clone())
            .set_next_page_token(request.token)
            .set_max_results(request.limit)
            .send()
            .await
            .map_err(aws_sdk_costexplorer::Error::from)?;

        Ok(Page::new(
            output.dimension_values().to_vec(),
            output.next_page_token().map(ToString::to_string),
        ))
    }
}

/// Run GetDimensionValues through the pager
pub async fn dimension_values(
    client: &Client,
    args: &DimensionValuesArgs,
    pager: &PagerConfig,
) -> Result<PagerOutcome<DimensionValueView>> {
    let source = DimensionValuesQuery {
        client: client.clone(),
        dimension: ce::Dimension::from(args.dimension.to_ascii_uppercase().as_str()),
        time_period: args.window.to_date_interval()?,
        context: args.context.into(),
        search_string: args.search_string.clone(),
        filter: parse_filter(args.filter.as_deref())?,
    };

    let outcome = paginate(pager, &source).await?;
    Ok(outcome.map_items(|value| DimensionValueView::from(&value)))
}

/// Fixed request members for a tag listing
struct TagValuesQuery {
    client: Client,
    time_period: ce::DateInterval,
    tag_key: Option<String>,
    search_string: Option<String>,
    filter: Option<ce::Expression>,
}

#[async_trait]
impl PageSource for TagValuesQuery {
    type Item = String;

    async fn fetch(&self, request: PageRequest) -> Result<Page<String>> {
        let output = self
            .client
            .get_tags()
            .time_period(self.time_period.clone())
            .set_tag_key(self.tag_key.clone())
            .set_search_string(self.search_string.clone())
            .set_filter(self.filter.clone())
            .set_next_page_token(request.token)
            .set_max_results(request.limit)
            .send()
            .await
            .map_err(aws_sdk_costexplorer::Error::from)?;

        Ok(Page::new(
            output.tags().to_vec(),
            output.next_page_token().map(ToString::to_string),
        ))
    }
}

/// Run GetTags through the pager; without `--tag-key` the items are tag
/// keys, with it they are that key's values
pub async fn tag_values(
    client: &Client,
    args: &TagValuesArgs,
    pager: &PagerConfig,
) -> Result<PagerOutcome<String>> {
    let source = TagValuesQuery {
        client: client.clone(),
        time_period: args.window.to_date_interval()?,
        tag_key: args.tag_key.clone(),
        search_string: args.search_string.clone(),
        filter: parse_filter(args.filter.as_deref())?,
    };

    paginate(pager, &source).await
}
