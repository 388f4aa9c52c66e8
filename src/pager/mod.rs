//! Cursor pagination driver
//!
//! Every paged Cost Explorer operation hands back an opaque continuation
//! token (`NextPageToken` or `NextToken`) that must be fed into the next
//! request until the service stops returning one. This module implements
//! that loop once, generically, instead of once per operation.
//!
//! # Overview
//!
//! An operation exposes itself as a [`PageSource`]: one async `fetch` that
//! turns a [`PageRequest`] (token + page-size hint) into a [`Page`] of
//! items. [`paginate`] drives the source under an immutable [`PagerConfig`]:
//!
//! - auto-iteration until the token runs out, or a single page when
//!   disabled or when the caller supplies a starting token (manual mode);
//! - a client-side `max_items` cap that also bounds the per-call page-size
//!   hint so the service is never asked for more than the remainder;
//! - cooperative cancellation between calls;
//! - partial results when a later call fails under an active `max_items`
//!   cap, instead of discarding everything already fetched.
//!
//! Tokens are opaque: the driver passes them through untouched, apart from
//! treating the empty string as absent.

mod driver;
mod types;

pub use driver::paginate;
pub use types::{Page, PageRequest, PageSource, PagerConfig, PagerOutcome, StopReason};
