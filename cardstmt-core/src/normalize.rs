//! Description cleanup for assembled transaction text.
//!
//! Statement formatting injects two kinds of noise into descriptions:
//! 12-character alphanumeric order codes, and "AMAZON ... WA"
//! merchant/location boilerplate. Both are stripped once the multi-line
//! description is fully assembled.

use anyhow::Result;
use regex::Regex;

/// Precompiled noise patterns. Build once per run, apply per transaction.
pub struct Normalizer {
    order_code: Regex,
    boilerplate: Regex,
}

impl Normalizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            order_code: Regex::new(r"\b[A-Za-z0-9]{12}\b")?,
            // Non-greedy but unbounded: if an unrelated "WA" appears before
            // the real one, the span under-shoots; if "AMAZON" appears in
            // legitimate text, it over-shoots. Known heuristic, kept as-is
            // because changing it would silently alter existing output.
            boilerplate: Regex::new(r"AMAZON.*?WA")?,
        })
    }

    /// Strip noise tokens and collapse whitespace. Idempotent.
    pub fn clean(&self, description: &str) -> String {
        let cleaned = self.order_code.replace_all(description, "");
        let cleaned = self.boilerplate.replace_all(&cleaned, "");
        cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::new().unwrap()
    }

    #[test]
    fn test_strips_order_codes() {
        let n = normalizer();
        assert_eq!(n.clean("GROCERY MART AB12CD34EF56 AUSTIN TX"), "GROCERY MART AUSTIN TX");
    }

    #[test]
    fn test_keeps_shorter_and_longer_tokens() {
        let n = normalizer();
        assert_eq!(n.clean("STORE 12345678901 CHECKOUT"), "STORE 12345678901 CHECKOUT");
        assert_eq!(n.clean("STORE 1234567890123 CHECKOUT"), "STORE 1234567890123 CHECKOUT");
    }

    #[test]
    fn test_strips_amazon_boilerplate() {
        let n = normalizer();
        assert_eq!(n.clean("PRIME VIDEO AMAZON.COM SEATTLE WA MEMBERSHIP"), "PRIME VIDEO MEMBERSHIP");
    }

    #[test]
    fn test_amazon_span_is_non_greedy() {
        // Stops at the first WA, even mid-word. Pinned behavior.
        let n = normalizer();
        assert_eq!(n.clean("AMAZON MKTPL WALLA SEATTLE WA"), "LLA SEATTLE WA");
    }

    #[test]
    fn test_collapses_whitespace() {
        let n = normalizer();
        assert_eq!(n.clean("  COFFEE   SHOP \n DOWNTOWN  "), "COFFEE SHOP DOWNTOWN");
    }

    #[test]
    fn test_idempotent() {
        let n = normalizer();
        let once = n.clean("RETAILER 9Q8W7E6R5T4Y AMAZON.COM SEATTLE WA ORDER");
        assert_eq!(n.clean(&once), once);
    }
}
