//! Company-name to ticker-symbol resolution
//!
//! Pure rule lookup: a fixed table of well-known name fragments, first match
//! wins, with a deterministic fallback for unknown companies. The table is
//! product content and may grow without changing the contract.

/// Name fragments mapped to their ticker. Checked in order; the first
/// fragment contained in the lower-cased company name wins.
const TICKER_RULES: &[(&[&str], &str)] = &[
    (&["google", "alphabet"], "GOOGL"),
    (&["microsoft"], "MSFT"),
    (&["apple"], "AAPL"),
    (&["meta", "facebook"], "META"),
    (&["amazon"], "AMZN"),
    (&["netflix"], "NFLX"),
    (&["tesla"], "TSLA"),
    (&["vercel"], "VCL"),
    (&["openai"], "OPAI"),
];

/// Resolve a company name to a ticker symbol. Never fails.
///
/// Unknown companies fall back to the first four characters of the input,
/// upper-cased.
///
/// # Example
///
/// ```
/// use pulse_domain::resolve_ticker;
///
/// assert_eq!(resolve_ticker("Alphabet Inc"), "GOOGL");
/// assert_eq!(resolve_ticker("Totally Unknown Co"), "TOTA");
/// ```
pub fn resolve_ticker(company_name: &str) -> String {
    let name = company_name.to_lowercase();
    for (fragments, ticker) in TICKER_RULES {
        if fragments.iter().any(|fragment| name.contains(fragment)) {
            return (*ticker).to_string();
        }
    }
    company_name.chars().take(4).collect::<String>().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_companies() {
        assert_eq!(resolve_ticker("Alphabet Inc"), "GOOGL");
        assert_eq!(resolve_ticker("Google"), "GOOGL");
        assert_eq!(resolve_ticker("Microsoft Corporation"), "MSFT");
        assert_eq!(resolve_ticker("Apple"), "AAPL");
        assert_eq!(resolve_ticker("Meta Platforms"), "META");
        assert_eq!(resolve_ticker("amazon.com"), "AMZN");
        assert_eq!(resolve_ticker("NETFLIX"), "NFLX");
        assert_eq!(resolve_ticker("Tesla Motors"), "TSLA");
        assert_eq!(resolve_ticker("Vercel"), "VCL");
        assert_eq!(resolve_ticker("OpenAI"), "OPAI");
    }

    #[test]
    fn test_match_is_case_insensitive_substring() {
        assert_eq!(resolve_ticker("the GOOGLE company"), "GOOGL");
    }

    #[test]
    fn test_first_rule_wins() {
        // "alphabet" appears before "meta" in the table
        assert_eq!(resolve_ticker("alphabet meta"), "GOOGL");
    }

    #[test]
    fn test_unknown_falls_back_to_prefix() {
        assert_eq!(resolve_ticker("Totally Unknown Co"), "TOTA");
        assert_eq!(resolve_ticker("zx"), "ZX");
    }

    #[test]
    fn test_resolution_is_deterministic() {
        assert_eq!(resolve_ticker("Initech"), resolve_ticker("Initech"));
    }
}
