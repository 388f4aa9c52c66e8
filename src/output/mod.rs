//! Output sink
//!
//! Commands hand their results here and nowhere else writes to stdout.
//! Listings are emitted as an envelope carrying the items plus the
//! continuation token left over when iteration stopped early; single
//! documents (forecasts, mutation acks) are emitted bare. Items are
//! written in call order.

use crate::error::Result;
use crate::pager::PagerOutcome;
use crate::types::OutputFormat;
use serde::Serialize;
use std::io::Write;
use tracing::info;

#[cfg(test)]
mod tests;

/// Envelope for paged listings
#[derive(Debug, Clone, Serialize)]
pub struct Listing<T: Serialize> {
    /// Items of every fetched page, in call order
    pub items: Vec<T>,
    /// Token to resume from with `--starting-token`, when iteration
    /// stopped before exhaustion
    pub next_token: Option<String>,
}

impl<T: Serialize> From<PagerOutcome<T>> for Listing<T> {
    fn from(outcome: PagerOutcome<T>) -> Self {
        Self {
            items: outcome.items,
            next_token: outcome.next_token,
        }
    }
}

/// Write a paged listing to the sink
pub fn emit_listing<T: Serialize, W: Write>(
    writer: &mut W,
    format: OutputFormat,
    listing: &Listing<T>,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, listing)?;
            writeln!(writer)?;
        }
        OutputFormat::Jsonl => {
            for item in &listing.items {
                serde_json::to_writer(&mut *writer, item)?;
                writeln!(writer)?;
            }
            if let Some(token) = &listing.next_token {
                info!(next_token = %token, "more results available; resume with --starting-token");
            }
        }
    }
    Ok(())
}

/// Write a single document to the sink
pub fn emit_document<T: Serialize, W: Write>(
    writer: &mut W,
    format: OutputFormat,
    document: &T,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, document)?;
            writeln!(writer)?;
        }
        OutputFormat::Jsonl => {
            serde_json::to_writer(&mut *writer, document)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
