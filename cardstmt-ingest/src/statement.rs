//! Per-statement pipeline: date context, summary totals, segmentation, and
//! the year-resolution + description-cleanup post-pass.

use anyhow::Result;
use chrono::NaiveDate;
use tracing::{info, warn};

use cardstmt_core::dates::resolve_date;
use cardstmt_core::normalize::Normalizer;
use cardstmt_core::types::{AccountSummary, StatementDates, Transaction};

use crate::segment::segment_pages;
use crate::summary::{extract_statement_dates, extract_summary};

/// Everything extracted from one statement.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementOutcome {
    pub transactions: Vec<Transaction>,
    pub summary: Option<AccountSummary>,
    pub dates: StatementDates,
}

/// Parse one statement's page texts.
///
/// `source` labels every transaction (file name); `today` is the clock used
/// only when the statement carries no usable dates of its own.
pub fn parse_statement(
    pages: &[String],
    source: &str,
    today: NaiveDate,
) -> Result<StatementOutcome> {
    let dates = match pages.first() {
        Some(first) => extract_statement_dates(first)?,
        None => StatementDates::default(),
    };

    match (dates.cycle, dates.closing) {
        (Some(cycle), _) => {
            info!(source, start = %cycle.start, end = %cycle.end, "found billing cycle");
        }
        (None, Some(closing)) => {
            info!(source, closing = %closing, "no billing cycle; using closing date");
        }
        (None, None) => {
            warn!(source, "no billing cycle or closing date; year resolution will use today");
        }
    }

    let combined = pages.join("\n");
    let summary = extract_summary(&combined)?;
    if summary.is_none() {
        warn!(source, "no account summary block found; verification will fail");
    }

    let raw = segment_pages(pages)?;
    let normalizer = Normalizer::new()?;

    let transactions: Vec<Transaction> = raw
        .into_iter()
        .map(|txn| Transaction {
            date: resolve_date(txn.month, txn.day, &dates, today),
            reference: txn.reference,
            description: normalizer.clean(&txn.description),
            amount: txn.amount,
            source: source.to_string(),
        })
        .collect();

    if transactions.is_empty() {
        info!(source, "no transactions found");
    } else {
        info!(source, count = transactions.len(), "extracted transactions");
    }

    Ok(StatementOutcome {
        transactions,
        summary,
        dates,
    })
}
