//! Billing-cycle and printed account-summary extraction.
//!
//! Statement layouts vary: some print an "Account Summary" block with
//! labeled Payments / Other Credits / Purchases lines, others an "Account
//! Balance Summary" table. Each layout gets its own matcher, tried in
//! order, first success wins, so new layouts slot in as new matchers.

use anyhow::Result;
use chrono::NaiveDate;
use regex::Regex;

use cardstmt_core::types::{AccountSummary, BillingCycle, StatementDates};

use crate::segment::parse_money;

fn parse_mdy(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%m/%d/%Y").ok()
}

/// Pull the billing cycle and closing date from page-one text. Either or
/// both may be absent; the year resolver degrades accordingly.
pub fn extract_statement_dates(first_page: &str) -> Result<StatementDates> {
    let labeled = Regex::new(r"Billing Cycle from (\d{2}/\d{2}/\d{4}) to (\d{2}/\d{2}/\d{4})")?;
    let bare = Regex::new(r"(\d{2}/\d{2}/\d{4}) to (\d{2}/\d{2}/\d{4})")?;

    let mut cycle = None;
    for re in [&labeled, &bare] {
        if let Some(caps) = re.captures(first_page) {
            cycle = parse_mdy(&caps[1])
                .zip(parse_mdy(&caps[2]))
                .map(|(start, end)| BillingCycle { start, end });
            break;
        }
    }

    let closing = Regex::new(r"New Balance as of (\d{2}/\d{2}/\d{4})")?
        .captures(first_page)
        .and_then(|caps| parse_mdy(&caps[1]));

    Ok(StatementDates { cycle, closing })
}

/// "Account Summary" block near the top of the statement. Payments and
/// Other Credits are printed separately and combined here into the single
/// payments_other_credits total.
fn match_account_summary(text: &str) -> Result<Option<AccountSummary>> {
    let re = Regex::new(concat!(
        r"(?s)Account Summary",
        r".*?Payments\s+-\s+(?P<pay>[\d,]+\.\d{2})",
        r".*?Other Credits\s+-\s+(?P<cred>[\d,]+\.\d{2})",
        r".*?Purchases/Debits\s+\+\s+(?P<purch>[\d,]+\.\d{2})"
    ))?;

    Ok(re.captures(text).map(|caps| {
        let combined = parse_money(&caps["pay"]) + parse_money(&caps["cred"]);
        AccountSummary {
            payments_other_credits: Some((combined * 100.0).round() / 100.0),
            purchases_debits: Some(parse_money(&caps["purch"])),
        }
    }))
}

/// "Account Balance Summary" section, bounded by the next section marker.
/// Inside it, either a tabular "Regular ...$X ...$Y" row or explicitly
/// labeled (-)/(+) lines. Partial results are allowed.
fn match_balance_summary(text: &str) -> Result<Option<AccountSummary>> {
    let bounded_by_detail = Regex::new(r"(?s)Account Balance Summary(.*?)Transaction Detail")?;
    let bounded_by_fees = Regex::new(r"(?s)Account Balance Summary(.*?)Total Fees Charged This Period")?;

    let Some(section) = bounded_by_detail
        .captures(text)
        .or_else(|| bounded_by_fees.captures(text))
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()).to_string())
    else {
        return Ok(None);
    };

    // Tabular row: both values on the "Regular" line.
    let regular_credits = Regex::new(r"Regular.*?\$([\d,]+\.\d{2})")?;
    if let Some(caps) = regular_credits.captures(&section) {
        let payments = parse_money(&caps[1]);
        let purchases = Regex::new(r"Regular.*?\$[\d,]+\.\d{2}\s+\$([\d,]+\.\d{2})")?
            .captures(&section)
            .map(|caps| parse_money(&caps[1]));
        return Ok(Some(AccountSummary {
            payments_other_credits: Some(payments),
            purchases_debits: purchases,
        }));
    }

    // Labeled lines; either may be missing on its own.
    let payments = Regex::new(r"Payments & Other Credits\s+\(-\)\s+\$([\d,]+\.\d{2})")?
        .captures(&section)
        .map(|caps| parse_money(&caps[1]));
    let purchases = Regex::new(r"Purchases, Fees & Others Debits\s+\(\+\)\s+\$([\d,]+\.\d{2})")?
        .captures(&section)
        .map(|caps| parse_money(&caps[1]));

    Ok(Some(AccountSummary {
        payments_other_credits: payments,
        purchases_debits: purchases,
    }))
}

/// Scan the full statement text for reference totals. Best-effort: a
/// partial or empty result is reportable, not an error, and `None` means
/// no recognizable block at all.
pub fn extract_summary(text: &str) -> Result<Option<AccountSummary>> {
    for matcher in [match_account_summary, match_balance_summary] {
        if let Some(summary) = matcher(text)? {
            return Ok(Some(summary));
        }
    }
    Ok(None)
}
