use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One purchase, payment, or credit line item from a statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    /// Short alphanumeric code printed next to the date; empty when absent.
    pub reference: String,
    /// Normalized free text, possibly assembled from several source lines.
    pub description: String,
    /// Positive means payment/credit (balance goes down); negative means
    /// purchase/debit. This is the inverse of how the statement prints it.
    pub amount: f64,
    /// Statement the item came from (file name).
    pub source: String,
}

/// Billing-cycle bounds printed on page one of a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingCycle {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Date context extracted once per statement and shared read-only by the
/// year resolver. `closing` is the "New Balance as of" date, used only
/// when no cycle could be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementDates {
    pub cycle: Option<BillingCycle>,
    pub closing: Option<NaiveDate>,
}

/// Reference totals from the printed account summary block, in the
/// statement's own convention (both non-negative). Either field may be
/// missing when only part of the block was recognized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub payments_other_credits: Option<f64>,
    pub purchases_debits: Option<f64>,
}

impl AccountSummary {
    pub fn is_empty(&self) -> bool {
        self.payments_other_credits.is_none() && self.purchases_debits.is_none()
    }
}

/// Per-statement reconciliation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub filename: String,
    pub passed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_serializes_signed_amount() {
        let txn = Transaction {
            date: NaiveDate::from_ymd_opt(2023, 12, 1).unwrap(),
            reference: "7XK2".to_string(),
            description: "COFFEE SHOP".to_string(),
            amount: -4.50,
            source: "statement.pdf".to_string(),
        };

        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"amount\":-4.5"));
        assert!(json.contains("\"date\":\"2023-12-01\""));
    }

    #[test]
    fn test_account_summary_empty() {
        assert!(AccountSummary::default().is_empty());
        let partial = AccountSummary {
            payments_other_credits: Some(10.0),
            purchases_debits: None,
        };
        assert!(!partial.is_empty());
    }
}
