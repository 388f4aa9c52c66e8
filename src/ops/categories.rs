//! Cost category and cost allocation tag listings
//!
//! Both operations page with `NextToken` rather than `NextPageToken`;
//! the sources absorb that difference so the pager never sees it.

use super::non_empty;
use crate::cli::{AllocationTagListArgs, CostCategoryListArgs};
use crate::error::Result;
use crate::pager::{paginate, Page, PageRequest, PageSource, PagerConfig, PagerOutcome};
use crate::views::{AllocationTagView, CostCategoryReferenceView};
use async_trait::async_trait;
use aws_sdk_costexplorer::types as ce;
use aws_sdk_costexplorer::Client;

/// Fixed request members for a cost category listing
struct CostCategoryQuery {
    client: Client,
    effective_on: Option<String>,
}

#[async_trait]
impl PageSource for CostCategoryQuery {
    type Item = ce::CostCategoryReference;

    async fn fetch(&self, request: PageRequest) -> Result<Page<Self::Item>> {
        let output = self
            .client
            .list_cost_category_definitions()
            .set_effective_on(self.effective_on.clone())
            .set_next_token(request.token)
            .set_max_results(request.limit)
            .send()
            .await
            .map_err(aws_sdk_costexplorer::Error::from)?;

        Ok(Page::new(
            output.cost_category_references().to_vec(),
            output.next_token().map(ToString::to_string),
        ))
    }
}

/// Run ListCostCategoryDefinitions through the pager
pub async fn list_cost_categories(
    client: &Client,
    args: &CostCategoryListArgs,
    pager: &PagerConfig,
) -> Result<PagerOutcome<CostCategoryReferenceView>> {
    let source = CostCategoryQuery {
        client: client.clone(),
        effective_on: args.effective_on.clone(),
    };

    let outcome = paginate(pager, &source).await?;
    Ok(outcome.map_items(|reference| CostCategoryReferenceView::from(&reference)))
}

/// Fixed request members for an allocation tag listing
struct AllocationTagQuery {
    client: Client,
    status: Option<ce::CostAllocationTagStatus>,
    kind: Option<ce::CostAllocationTagType>,
    tag_keys: Vec<String>,
}

#[async_trait]
impl PageSource for AllocationTagQuery {
    type Item = ce::CostAllocationTag;

    async fn fetch(&self, request: PageRequest) -> Result<Page<Self::Item>> {
        let output = self
            .client
            .list_cost_allocation_tags()
            .set_status(self.status.clone())
            .set_type(self.kind.clone())
            .set_tag_keys(non_empty(self.tag_keys.clone()))
            .set_next_token(request.token)
            .set_max_results(request.limit)
            .send()
            .await
            .map_err(aws_sdk_costexplorer::Error::from)?;

        Ok(Page::new(
            output.cost_allocation_tags().to_vec(),
            output.next_token().map(ToString::to_string),
        ))
    }
}

/// Run ListCostAllocationTags through the pager
pub async fn list_allocation_tags(
    client: &Client,
    args: &AllocationTagListArgs,
    pager: &PagerConfig,
) -> Result<PagerOutcome<AllocationTagView>> {
    let source = AllocationTagQuery {
        client: client.clone(),
        status: args.status.map(Into::into),
        kind: args.kind.map(Into::into),
        tag_keys: args.tag_keys.clone(),
    };

    let outcome = paginate(pager, &source).await?;
    Ok(outcome.map_items(|tag| AllocationTagView::from(&tag)))
}
