//! cardstmt-core: statement data model, year resolution, description
//! cleanup, and reconciliation against printed summary totals.

pub mod dates;
pub mod normalize;
pub mod types;
pub mod verify;

pub use dates::{resolve_date, resolve_year};
pub use normalize::Normalizer;
pub use types::{AccountSummary, BillingCycle, StatementDates, Transaction, VerificationResult};
pub use verify::{signed_totals, verify};
