//! Operation wrappers
//!
//! One module per operation family. Every paged operation is a small
//! [`PageSource`](crate::pager::PageSource) implementation holding the
//! request members that stay fixed across pages; the per-call token and
//! page-size hint come in through the request. Mutations are plain async
//! functions returning ack views.
//!
//! All request construction happens up front, before the first network
//! call, so argument problems never surface halfway through a pull.

pub mod anomalies;
pub mod categories;
pub mod costs;
pub mod dimensions;
pub mod forecast;
pub mod monitors;
pub mod reservations;
pub mod savings_plans;
pub mod subscriptions;

use crate::error::Result;
use crate::expr;
use aws_sdk_costexplorer::types as ce;

/// Build a closed date interval request member
pub(crate) fn date_interval(start: &str, end: &str) -> Result<ce::DateInterval> {
    Ok(ce::DateInterval::builder().start(start).end(end).build()?)
}

/// Parse an optional command-line filter into an SDK expression
pub(crate) fn parse_filter(filter: Option<&str>) -> Result<Option<ce::Expression>> {
    filter.map(expr::parse_expression).transpose()
}

/// Parse repeatable `TYPE=KEY` group-by specs
pub(crate) fn parse_group_bys(specs: &[String]) -> Result<Vec<ce::GroupDefinition>> {
    specs.iter().map(|s| expr::parse_group_by(s)).collect()
}

/// Turn an empty vec into None so the request member is omitted entirely
pub(crate) fn non_empty<T>(values: Vec<T>) -> Option<Vec<T>> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_interval() {
        let interval = date_interval("2026-01-01", "2026-02-01").unwrap();
        assert_eq!(interval.start, "2026-01-01");
        assert_eq!(interval.end, "2026-02-01");
    }

    #[test]
    fn test_parse_filter_absent() {
        assert!(parse_filter(None).unwrap().is_none());
    }

    #[test]
    fn test_parse_filter_invalid() {
        assert!(parse_filter(Some("{}")).is_err());
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Vec::<i32>::new()), None);
        assert_eq!(non_empty(vec![1]), Some(vec![1]));
    }
}
