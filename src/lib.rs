//! # costctl
//!
//! A command-line toolkit for the AWS Cost Explorer API.
//!
//! Every subcommand wraps one API operation: it maps CLI parameters into a
//! typed request, invokes the SDK, and projects the response into JSON
//! pipeline output. All list operations run through a single generic
//! cursor paginator instead of per-operation paging loops.
//!
//! ## Features
//!
//! - **Cost queries**: cost and usage, resource-level usage, forecasts
//! - **Anomaly detection**: anomalies, monitors, subscriptions, feedback
//! - **Metadata**: dimension values, tag keys/values, cost categories,
//!   cost allocation tags
//! - **Commitments**: reservation and Savings Plans coverage/utilization
//! - **Paging controls**: `--no-paginate`, `--max-items`, `--page-size`,
//!   `--starting-token`, with partial results kept when a capped pull
//!   fails mid-iteration
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        cli (clap)                           │
//! │        flags → PagerConfig / request arguments              │
//! └──────────────────────────┬──────────────────────────────────┘
//!                            │
//! ┌──────────┬───────────────┴───────┬───────────┬─────────────┐
//! │  client  │         ops           │   pager   │   output    │
//! ├──────────┼───────────────────────┼───────────┼─────────────┤
//! │ aws-config│ one PageSource or    │ token loop│ JSON / JSONL│
//! │ profile  │ async fn per          │ max-items │ envelope    │
//! │ region   │ operation             │ cancel    │ documents   │
//! │ endpoint │ (expr + views glue)   │ partial   │             │
//! └──────────┴───────────────────────┴───────────┴─────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and CLI value enums
pub mod types;

/// Cost Explorer client construction
pub mod client;

/// Generic cursor pagination driver
pub mod pager;

/// Filter expression translation
pub mod expr;

/// Serializable response projections
pub mod views;

/// Per-operation wrappers
pub mod ops;

/// Output sink
pub mod output;

/// Defaults file support
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use pager::{paginate, Page, PageRequest, PageSource, PagerConfig, PagerOutcome, StopReason};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
