//! Page audits built on the checkers.
//!
//! A [`PageAuditor`] takes a [`PageSnapshot`] (text, prices and element
//! measurements extracted by an external page driver), runs every check for
//! one language and appends [`L10nError`](crate::error::L10nError) records
//! to a caller-owned collection.

pub mod metrics;
mod page;

pub use metrics::{AuditMetrics, MetricsReport};
pub use page::{
    severity_counts, KeywordPresence, PageAudit, PageAuditor, PageSnapshot, WarningPolicy,
    DEFAULT_MAX_PRICE_LENGTH,
};
