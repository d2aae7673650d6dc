//! Reconciliation of extracted transactions against printed summary totals.

use crate::types::{AccountSummary, Transaction, VerificationResult};

/// Absolute tolerance per compared field; covers statement-side rounding.
pub const TOLERANCE: f64 = 0.02;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sum extracted amounts by sign: `(credits, debits_abs)`, both rounded to
/// two decimal places. Credits are the positive amounts; `debits_abs` is
/// the magnitude of the negative ones.
pub fn signed_totals(transactions: &[Transaction]) -> (f64, f64) {
    let credits: f64 = transactions.iter().map(|t| t.amount).filter(|a| *a > 0.0).sum();
    let debits_abs: f64 = transactions
        .iter()
        .map(|t| t.amount)
        .filter(|a| *a < 0.0)
        .map(f64::abs)
        .sum();
    (round2(credits), round2(debits_abs))
}

fn check_field(label: &str, expected: Option<f64>, actual: f64) -> Option<bool> {
    let Some(expected) = expected else {
        println!("  Could not find expected value for '{label}'");
        return None;
    };

    println!("  {label}:");
    println!("    Expected: ${expected:.2}");
    println!("    Actual:   ${actual:.2}");

    let diff = (actual - expected).abs();
    if diff <= TOLERANCE {
        println!("    MATCH");
        Some(true)
    } else {
        println!("    MISMATCH (difference: ${diff:.2})");
        Some(false)
    }
}

/// Compare signed totals against the printed account summary and report
/// per field. An unrecognized field is not verifiable and does not fail
/// the check on its own; a statement with no summary block at all fails
/// outright.
pub fn verify(
    filename: &str,
    transactions: &[Transaction],
    summary: Option<&AccountSummary>,
) -> VerificationResult {
    let Some(summary) = summary.filter(|s| !s.is_empty()) else {
        println!("WARNING: no account summary found for verification in {filename}");
        return VerificationResult {
            filename: filename.to_string(),
            passed: false,
        };
    };

    let (credits, debits_abs) = signed_totals(transactions);

    println!("=== Transaction Verification ===");
    println!("File: {filename}");

    let mut passed = true;
    for outcome in [
        check_field("Payments & Other Credits", summary.payments_other_credits, credits),
        check_field("Purchases, Fees & Other Debits", summary.purchases_debits, debits_abs),
    ] {
        if outcome == Some(false) {
            passed = false;
        }
    }

    if passed {
        println!("VERIFICATION PASSED for {filename}");
    } else {
        println!("VERIFICATION FAILED for {filename}");
    }

    VerificationResult {
        filename: filename.to_string(),
        passed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn txn(amount: f64) -> Transaction {
        Transaction {
            date: NaiveDate::from_ymd_opt(2023, 12, 1).unwrap(),
            reference: String::new(),
            description: "TEST".to_string(),
            amount,
            source: "stmt.pdf".to_string(),
        }
    }

    #[test]
    fn test_signed_totals_split_by_sign() {
        let txns = vec![txn(-10.00), txn(25.50), txn(-0.45), txn(4.50)];
        assert_eq!(signed_totals(&txns), (30.00, 10.45));
    }

    #[test]
    fn test_passes_within_tolerance() {
        let txns = vec![txn(100.00), txn(-40.01)];
        let summary = AccountSummary {
            payments_other_credits: Some(100.01),
            purchases_debits: Some(40.00),
        };
        assert!(verify("a.pdf", &txns, Some(&summary)).passed);
    }

    #[test]
    fn test_fails_outside_tolerance() {
        let txns = vec![txn(100.00), txn(-40.00)];
        let summary = AccountSummary {
            payments_other_credits: Some(100.00),
            purchases_debits: Some(45.00),
        };
        let result = verify("a.pdf", &txns, Some(&summary));
        assert!(!result.passed);
        assert_eq!(result.filename, "a.pdf");
    }

    #[test]
    fn test_missing_field_is_not_a_failure() {
        let txns = vec![txn(-40.00)];
        let summary = AccountSummary {
            payments_other_credits: None,
            purchases_debits: Some(40.00),
        };
        assert!(verify("a.pdf", &txns, Some(&summary)).passed);
    }

    #[test]
    fn test_missing_summary_fails_outright() {
        let txns = vec![txn(-40.00)];
        assert!(!verify("a.pdf", &txns, None).passed);
        assert!(!verify("a.pdf", &txns, Some(&AccountSummary::default())).passed);
    }

    #[test]
    fn test_float_accumulation_rounds_before_compare() {
        // 0.1 added ten times drifts off 1.0 in f64; rounding absorbs it.
        let txns: Vec<_> = (0..10).map(|_| txn(0.10)).collect();
        let summary = AccountSummary {
            payments_other_credits: Some(1.00),
            purchases_debits: None,
        };
        assert!(verify("a.pdf", &txns, Some(&summary)).passed);
    }
}
