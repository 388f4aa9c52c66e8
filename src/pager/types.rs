//! Pager types and the page-source seam

use crate::error::Result;
use crate::types::OptionStringExt;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

// ============================================================================
// Page Request / Page
// ============================================================================

/// Per-call input handed to a [`PageSource`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    /// Continuation token for this call (absent on the first page)
    pub token: Option<String>,
    /// Page-size hint for this call; sources whose operation has no
    /// page-size member ignore it
    pub limit: Option<i32>,
}

impl PageRequest {
    /// Request the first page
    pub fn first(limit: Option<i32>) -> Self {
        Self { token: None, limit }
    }
}

/// One page of results returned by a [`PageSource`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page<T> {
    /// Items in this page, in service order
    pub items: Vec<T>,
    /// Token for the following page, if any
    pub next_token: Option<String>,
}

impl<T> Page<T> {
    /// Create a page, treating an empty-string token as absent
    pub fn new(items: Vec<T>, next_token: Option<String>) -> Self {
        Self {
            items,
            next_token: next_token.none_if_empty(),
        }
    }

    /// Create a terminal page with no continuation
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_token: None,
        }
    }

    /// Check whether the service advertised a following page
    pub fn has_more(&self) -> bool {
        self.next_token.is_some()
    }
}

// ============================================================================
// Pager Config
// ============================================================================

/// Iteration controls for one [`paginate`](super::paginate) invocation
///
/// Constructed explicitly by the caller and never mutated by the driver.
#[derive(Debug, Clone, Default)]
pub struct PagerConfig {
    /// Follow continuation tokens automatically; when false exactly one
    /// call is made regardless of the returned token
    pub no_paginate: bool,
    /// Client-side cap on the total number of items returned across all
    /// pages, distinct from the service's per-page size
    pub max_items: Option<usize>,
    /// Per-call page-size hint sent to the service
    pub page_size: Option<i32>,
    /// Caller-supplied token to resume from; supplying one switches the
    /// invocation into manual, single-page mode
    pub starting_token: Option<String>,
    /// Cooperative cancellation, checked between calls only
    pub cancel: Option<CancellationToken>,
}

impl PagerConfig {
    /// Create a config that auto-iterates to exhaustion
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable auto-iteration
    #[must_use]
    pub fn no_paginate(mut self, no_paginate: bool) -> Self {
        self.no_paginate = no_paginate;
        self
    }

    /// Cap the total number of items returned
    #[must_use]
    pub fn max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }

    /// Set the per-call page-size hint
    #[must_use]
    pub fn page_size(mut self, page_size: i32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Resume from a token obtained on a previous invocation
    #[must_use]
    pub fn starting_token(mut self, token: impl Into<String>) -> Self {
        self.starting_token = Some(token.into()).none_if_empty();
        self
    }

    /// Attach a cancellation token
    #[must_use]
    pub fn cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Whether this invocation stops after one call. True when
    /// auto-iteration is off or the caller supplied a starting token.
    pub fn is_single_page(&self) -> bool {
        self.no_paginate || self.starting_token.is_some()
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// Why an invocation stopped issuing calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The service stopped returning a continuation token
    Exhausted,
    /// Auto-iteration was off, or a starting token forced manual mode
    SinglePage,
    /// The client-side item cap was reached
    MaxItems,
    /// The cancellation token fired between calls
    Cancelled,
    /// A later call failed while an item cap was active; items fetched
    /// before the failure were kept
    Interrupted,
}

impl StopReason {
    /// Check whether every available item was fetched
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

/// Result of one [`paginate`](super::paginate) invocation
#[derive(Debug, Clone)]
pub struct PagerOutcome<T> {
    /// Concatenated items of all fetched pages, in call order
    pub items: Vec<T>,
    /// Continuation token left over when iteration stopped early
    pub next_token: Option<String>,
    /// Number of calls that returned successfully
    pub pages: usize,
    /// Why iteration stopped
    pub stop: StopReason,
}

impl<T> PagerOutcome<T> {
    /// Map the items into another type, keeping the paging metadata
    pub fn map_items<U, F: FnMut(T) -> U>(self, f: F) -> PagerOutcome<U> {
        PagerOutcome {
            items: self.items.into_iter().map(f).collect(),
            next_token: self.next_token,
            pages: self.pages,
            stop: self.stop,
        }
    }
}

// ============================================================================
// Page Source
// ============================================================================

/// One paged operation, reduced to a single fetch call
///
/// Implementations capture the operation's fixed request members and apply
/// the per-call token and page-size hint from the [`PageRequest`].
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Item type the operation lists
    type Item: Send;

    /// Fetch one page
    async fn fetch(&self, request: PageRequest) -> Result<Page<Self::Item>>;
}
