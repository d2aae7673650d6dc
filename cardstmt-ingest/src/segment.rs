//! Page segmentation and per-line classification for the transaction
//! listing section.
//!
//! Expected extracted-text shape:
//!   Transaction Detail
//!   Date  Reference #  Description  Amount
//!   11/25  7HD2  GROCERY MART #104  $60.45
//!   11/20  4521  ONLINE PAYMENT THANK YOU  -$125.00
//!   ...
//!   Total Fees Charged This Period  $0.00
//!
//! The listing can span pages, repeat its column header per page, and break
//! a long description across lines (and across a page boundary).

use anyhow::Result;
use regex::Regex;

const SECTION_START: &str = "Transaction Detail";
const SECTION_END: &str = "Total Fees Charged This Period";
const STATEMENT_CREDIT_DESC: &str = "YOUR STORE CARD STATEMENT CREDIT";

/// A transaction as printed: date still MM/DD, description raw and possibly
/// assembled from several lines. Year resolution and normalization happen in
/// a later pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTransaction {
    pub month: u32,
    pub day: u32,
    pub reference: String,
    pub description: String,
    /// Already sign-inverted: purchases negative, payments/credits positive.
    pub amount: f64,
}

pub(crate) fn parse_money(s: &str) -> f64 {
    s.replace(',', "").parse().unwrap_or(0.0)
}

fn parse_mm_dd(s: &str) -> (u32, u32) {
    let mut it = s.split('/');
    let month = it.next().and_then(|p| p.parse().ok()).unwrap_or(0);
    let day = it.next().and_then(|p| p.parse().ok()).unwrap_or(0);
    (month, day)
}

/// Line classifier plus the one piece of mutable state the listing needs:
/// the currently open purchase, which continuation lines extend until the
/// next date-bearing line or the end of the section closes it.
struct Segmenter {
    subtotal: Regex,
    statement_credit: Regex,
    credit: Regex,
    purchase: Regex,
    in_section: bool,
    finished: bool,
    open: Option<RawTransaction>,
    out: Vec<RawTransaction>,
}

impl Segmenter {
    fn new() -> Result<Self> {
        Ok(Self {
            // Category subtotals printed inside the listing; not transactions.
            subtotal: Regex::new(concat!(
                r"^(?:Payments -\$[\d,]+\.\d{2}",
                r"|Other Credits -\$[\d,]+\.\d{2}",
                r"|Purchases and Other Debits \$[\d,]+\.\d{2})$"
            ))?,
            statement_credit: Regex::new(concat!(
                r"(?P<date>\d{2}/\d{2})\s+",
                r"YOUR STORE CARD STATEMENT CREDIT\s+",
                r"-\$(?P<amt>[\d,]+\.\d{2})"
            ))?,
            credit: Regex::new(concat!(
                r"(?P<date>\d{2}/\d{2})\s+",
                r"(?P<ref>[A-Z0-9]+)?\s+",
                r"(?P<desc>.*?)\s+",
                r"-\$(?P<amt>[\d,]+\.\d{2})"
            ))?,
            purchase: Regex::new(concat!(
                r"(?P<date>\d{2}/\d{2})\s+",
                r"(?P<ref>[A-Z0-9]+)?\s+",
                r"(?P<desc>.*?)\s+",
                r"\$(?P<amt>[\d,]+\.\d{2})"
            ))?,
            in_section: false,
            finished: false,
            open: None,
            out: Vec::new(),
        })
    }

    fn close_open(&mut self) {
        if let Some(txn) = self.open.take() {
            self.out.push(txn);
        }
    }

    fn feed_line(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }

        if self.subtotal.is_match(line) {
            return;
        }

        // Statement credits carry no reference code and are complete on one
        // line; the printed minus means the credit stays positive here.
        if let Some(caps) = self.statement_credit.captures(line) {
            self.close_open();
            let (month, day) = parse_mm_dd(&caps["date"]);
            self.out.push(RawTransaction {
                month,
                day,
                reference: String::new(),
                description: STATEMENT_CREDIT_DESC.to_string(),
                amount: parse_money(&caps["amt"]),
            });
            return;
        }

        // Payments and credits print a leading minus; kept positive because
        // they reduce the balance owed.
        if let Some(caps) = self.credit.captures(line) {
            self.close_open();
            let (month, day) = parse_mm_dd(&caps["date"]);
            self.out.push(RawTransaction {
                month,
                day,
                reference: caps.name("ref").map(|m| m.as_str()).unwrap_or("").to_string(),
                description: caps["desc"].trim().to_string(),
                amount: parse_money(&caps["amt"]),
            });
            return;
        }

        // Purchases print unsigned; stored negative. They stay open so the
        // following lines can extend the description.
        if let Some(caps) = self.purchase.captures(line) {
            self.close_open();
            let (month, day) = parse_mm_dd(&caps["date"]);
            self.open = Some(RawTransaction {
                month,
                day,
                reference: caps.name("ref").map(|m| m.as_str()).unwrap_or("").to_string(),
                description: caps["desc"].trim().to_string(),
                amount: -parse_money(&caps["amt"]),
            });
            return;
        }

        if let Some(open) = self.open.as_mut() {
            open.description.push(' ');
            open.description.push_str(line.trim());
        }
        // Anything else outside an open transaction is noise.
    }

    fn finish(mut self) -> Vec<RawTransaction> {
        self.close_open();
        self.out
    }
}

/// Walk the pages of one statement and return its raw transactions in
/// listing order.
///
/// The listing runs from the first "Transaction Detail" marker to the first
/// "Total Fees Charged This Period" afterward, possibly spanning pages. A
/// page-local "continued on next page" marker truncates that page so the
/// repeated footer is never parsed, and pages after the first skip past a
/// repeated column-header line when one is present.
pub fn segment_pages(pages: &[String]) -> Result<Vec<RawTransaction>> {
    let continued = Regex::new(r"(?i)continued on next page")?;
    let column_header = Regex::new(r"Date\s+Reference #\s+Description\s+Amount")?;

    let mut seg = Segmenter::new()?;

    for (page_idx, page) in pages.iter().enumerate() {
        let mut text = page.as_str();

        if !seg.in_section {
            match text.find(SECTION_START) {
                Some(pos) => {
                    seg.in_section = true;
                    text = &text[pos + SECTION_START.len()..];
                }
                None => continue,
            }
        }

        if let Some(pos) = text.find(SECTION_END) {
            text = &text[..pos];
            seg.finished = true;
        }

        if let Some(m) = continued.find(text) {
            text = &text[..m.start()];
        }

        if page_idx > 0 {
            if let Some(m) = column_header.find(text) {
                text = &text[m.end()..];
            }
        }

        for line in text.lines() {
            seg.feed_line(line);
        }

        if seg.finished {
            break;
        }
    }

    Ok(seg.finish())
}
