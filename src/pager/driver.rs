//! The pagination loop

use super::types::{Page, PageRequest, PageSource, PagerConfig, PagerOutcome, StopReason};
use crate::error::Result;
use tracing::{debug, warn};

/// Drive a [`PageSource`] to completion under the given config.
///
/// Calls are issued strictly in sequence, one outstanding at a time. The
/// first call uses the caller-supplied starting token (absent means "from
/// the beginning"); each later call feeds in the token of the previous
/// response. See the module docs for the stop conditions.
///
/// Errors on the first call always propagate. Errors on a later call
/// propagate in full-iteration mode, but when `max_items` is active the
/// invocation keeps what it has: a long capped pull that dies near the end
/// still returns the pages that succeeded.
pub async fn paginate<S: PageSource>(
    config: &PagerConfig,
    source: &S,
) -> Result<PagerOutcome<S::Item>> {
    let single_page = config.is_single_page();
    let mut items: Vec<S::Item> = Vec::new();
    let mut token = config.starting_token.clone();
    let mut remaining = config.max_items;
    let mut pages = 0usize;

    let stop = loop {
        if let Some(cancel) = &config.cancel {
            if cancel.is_cancelled() {
                debug!(pages, "pagination cancelled");
                break StopReason::Cancelled;
            }
        }

        let request = PageRequest {
            token: token.clone(),
            limit: limit_hint(config.page_size, remaining),
        };

        let page: Page<S::Item> = match source.fetch(request).await {
            Ok(page) => page,
            Err(err) => {
                if pages > 0 && config.max_items.is_some() {
                    warn!(
                        error = %err,
                        pages,
                        items = items.len(),
                        "page fetch failed mid-iteration; keeping items fetched so far"
                    );
                    break StopReason::Interrupted;
                }
                return Err(err);
            }
        };

        pages += 1;
        debug!(page = pages, count = page.items.len(), "fetched page");

        let mut fetched = page.items;
        if let Some(rem) = remaining.as_mut() {
            // A page may carry more than the remainder allows; the cap is
            // a hard upper bound on the total, so trim the overshoot.
            if fetched.len() >= *rem {
                fetched.truncate(*rem);
                *rem = 0;
            } else {
                *rem -= fetched.len();
            }
        }
        items.extend(fetched);
        token = page.next_token;

        if remaining == Some(0) {
            break StopReason::MaxItems;
        }
        if single_page {
            break StopReason::SinglePage;
        }
        // A token with an empty page is not exhaustion; keep going until
        // the service stops returning one.
        if token.is_none() {
            break StopReason::Exhausted;
        }
    };

    Ok(PagerOutcome {
        items,
        next_token: token,
        pages,
        stop,
    })
}

/// Compute the page-size hint for one call: the configured page size,
/// lowered to the remaining item allowance so a capped pull never asks the
/// service for more than it will keep.
pub(super) fn limit_hint(page_size: Option<i32>, remaining: Option<usize>) -> Option<i32> {
    let remaining = remaining.map(|r| i32::try_from(r).unwrap_or(i32::MAX));
    match (page_size, remaining) {
        (None, None) => None,
        (Some(size), None) => Some(size),
        (None, Some(rem)) => Some(rem),
        (Some(size), Some(rem)) => Some(size.min(rem)),
    }
}
