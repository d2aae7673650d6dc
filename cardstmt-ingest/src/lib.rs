//! cardstmt-ingest: page segmentation, line classification, and printed
//! summary extraction for credit-card statement text.

pub mod pdf;
pub mod segment;
pub mod statement;
pub mod summary;

pub use pdf::read_pages;
pub use segment::{RawTransaction, segment_pages};
pub use statement::{StatementOutcome, parse_statement};
pub use summary::{extract_statement_dates, extract_summary};
