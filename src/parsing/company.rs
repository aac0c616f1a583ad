use html_escape::decode_html_entities;
use once_cell::sync::Lazy;
use regex::Regex;

type Validator = fn(&str) -> bool;

// Ordered pattern/validator pairs, evaluated first-match-wins. Kept as data
// so individual patterns can be added and tested without touching the
// extraction logic.
struct ChainRule {
    pattern: Regex,
    accept: Validator,
}

fn chain(rules: &[(&str, Validator)]) -> Vec<ChainRule> {
    rules
        .iter()
        .map(|(pattern, accept)| ChainRule {
            pattern: Regex::new(pattern).unwrap(),
            accept: *accept,
        })
        .collect()
}

fn run_chain(rules: &[ChainRule], text: &str) -> Option<String> {
    for rule in rules {
        if let Some(caps) = rule.pattern.captures(text) {
            let value = clean(&caps[1]);
            if !value.is_empty() && (rule.accept)(&value) {
                return Some(value);
            }
        }
    }
    None
}

fn clean(raw: &str) -> String {
    let decoded = decode_html_entities(raw.trim());
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn accept_any(_: &str) -> bool {
    true
}

static COMPANY_NAME_CHAIN: Lazy<Vec<ChainRule>> = Lazy::new(|| {
    chain(&[
        (r"COMPANY CONFORMED NAME:\s*([^\r\n]+)", accept_any),
        (r"(?m)^\s*ISSUER:\s*([^\r\n]+)", accept_any),
        (r"COMPANY NAME:\s*([^\r\n]+)", accept_any),
        (r"ISSUER NAME:\s*([^\r\n]+)", accept_any),
        (r"ISSUER CONFORMED NAME:\s*([^\r\n]+)", accept_any),
        (r"<issuerName>\s*([^<]+?)\s*</issuerName>", accept_any),
        (r"<companyName>\s*([^<]+?)\s*</companyName>", accept_any),
        // Last resort; an individual's name must not be mistaken for the
        // company, so person-shaped values are rejected.
        (r"REPORTING PERSON:\s*([^\r\n]+)", not_person_name),
    ])
});

const COMPANY_MARKERS: &[&str] = &[
    "LLC", "INC", "CORP", "CORPORATION", "CO", "COMPANY", "LTD", "LP", "TRUST", "PARTNERS",
    "HOLDINGS", "GROUP", "CAPITAL", "FUND", "ASSOCIATES", "PLC", "BANCORP", "NV", "SA", "AG",
];

static PERSON_NAME_SHAPES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // "John Smith"
        r"^[A-Z][a-z]+ [A-Z][a-z]+$",
        // "John A. Smith"
        r"^[A-Z][a-z]+ [A-Z]\.? [A-Z][a-z]+$",
        // "John Smith Jr."
        r"^[A-Z][a-z]+ [A-Z][a-z]+,? (?:Jr|Sr|II|III|IV)\.?$",
        // "SMITH JOHN A"
        r"^[A-Z]{2,} [A-Z]{2,} [A-Z]\.?$",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

fn not_person_name(value: &str) -> bool {
    let has_marker = value
        .split(|c: char| !c.is_alphanumeric())
        .any(|token| COMPANY_MARKERS.contains(&token.to_uppercase().as_str()));
    if has_marker {
        return true;
    }
    !PERSON_NAME_SHAPES.iter().any(|shape| shape.is_match(value))
}

/// Company name, via the header's conformed-name tags with XML and
/// reporting-person fallbacks. `None` when nothing matches, which is a
/// common, expected outcome.
pub fn company_name(text: &str) -> Option<String> {
    run_chain(&COMPANY_NAME_CHAIN, text)
}

static CIK_CHAIN: Lazy<Vec<ChainRule>> = Lazy::new(|| {
    chain(&[
        (r"CENTRAL INDEX KEY:\s*(\d+)", accept_any),
        (r"(?m)^\s*CIK:\s*(\d+)", accept_any),
        (r"ISSUER CIK:\s*(\d+)", accept_any),
    ])
});

/// Central Index Key, zero-padded to the canonical 10 digits.
pub fn cik(text: &str) -> Option<String> {
    run_chain(&CIK_CHAIN, text).map(|digits| format!("{:0>10}", digits))
}

static TICKER_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{1,5}$").unwrap());

static TICKER_CHAIN: Lazy<Vec<ChainRule>> = Lazy::new(|| {
    chain(&[
        (r"<issuerTradingSymbol>\s*([A-Za-z]{1,5})\s*</issuerTradingSymbol>", accept_any),
        (r"\(\s*NYSE American:\s*([A-Za-z]{1,5})\s*\)", accept_any),
        (r"\(\s*NYSE Amex:\s*([A-Za-z]{1,5})\s*\)", accept_any),
        (r"\(\s*NYSE:\s*([A-Za-z]{1,5})\s*\)", accept_any),
        (r"(?i)\(\s*Nasdaq(?: Global(?: Select)? Market)?:\s*([A-Za-z]{1,5})\s*\)", accept_any),
        (r"(?i)\(\s*OTC(?: Markets)?(?: Group)?:\s*([A-Za-z]{1,5})\s*\)", accept_any),
        (r"NYSE American:\s*([A-Za-z]{1,5})\b", accept_any),
        (r"NYSE:\s*([A-Za-z]{1,5})\b", accept_any),
        (r"(?i)Nasdaq:\s*([A-Za-z]{1,5})\b", accept_any),
        (r"TRADING SYMBOL:\s*([A-Za-z]{1,5})\b", accept_any),
        (r#"(?i)ticker symbol[:\s]+["']?([A-Za-z]{1,5})["']?\b"#, accept_any),
        (r#"(?i)under the (?:ticker )?symbol\s+["“']([A-Za-z]{1,5})["”']"#, accept_any),
        (r#"(?i)\bsymbol\s+["“]([A-Za-z]{1,5})["”]"#, accept_any),
        (r"(?i)common stock[^\r\n]{0,40}\(([A-Za-z]{1,5})\)", accept_any),
        // Bare parenthetical, lowest confidence.
        (r"\(([A-Z]{1,5})\)", accept_any),
    ])
});

/// Trading symbol. Every candidate is validated against the exchange-symbol
/// shape before being accepted.
pub fn ticker(text: &str) -> Option<String> {
    for rule in TICKER_CHAIN.iter() {
        if let Some(caps) = rule.pattern.captures(text) {
            let symbol = caps[1].to_uppercase();
            if TICKER_SHAPE.is_match(&symbol) && (rule.accept)(&symbol) {
                return Some(symbol);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conformed_name_wins_over_reporting_person() {
        let text = "REPORTING PERSON: John A. Smith\nCOMPANY CONFORMED NAME: Apple Inc.\n";
        assert_eq!(company_name(text).as_deref(), Some("Apple Inc."));
    }

    #[test]
    fn person_shaped_reporting_person_is_rejected() {
        assert_eq!(company_name("REPORTING PERSON: John A. Smith\n"), None);
        assert_eq!(company_name("REPORTING PERSON: Jane Doe\n"), None);
        assert_eq!(company_name("REPORTING PERSON: SMITH JOHN A\n"), None);
    }

    #[test]
    fn company_shaped_reporting_person_is_accepted() {
        assert_eq!(
            company_name("REPORTING PERSON: Acme Holdings LLC\n").as_deref(),
            Some("Acme Holdings LLC")
        );
        assert_eq!(
            company_name("REPORTING PERSON: Ford Motor Co\n").as_deref(),
            Some("Ford Motor Co")
        );
    }

    #[test]
    fn xml_issuer_name_fallback() {
        let text = "<issuerName>Tesla, Inc.</issuerName>";
        assert_eq!(company_name(text).as_deref(), Some("Tesla, Inc."));
    }

    #[test]
    fn name_is_entity_decoded_and_whitespace_collapsed() {
        let text = "COMPANY CONFORMED NAME:   AT&amp;T    INC\n";
        assert_eq!(company_name(text).as_deref(), Some("AT&T INC"));
    }

    #[test]
    fn cik_is_zero_padded_to_ten_digits() {
        assert_eq!(cik("CENTRAL INDEX KEY: 320193\n").as_deref(), Some("0000320193"));
        assert_eq!(cik("CIK: 1318605\n").as_deref(), Some("0001318605"));
        assert_eq!(cik("no identifiers here"), None);
    }

    #[test]
    fn exchange_qualified_ticker() {
        assert_eq!(ticker("(NYSE American: FAX)").as_deref(), Some("FAX"));
        assert_eq!(ticker("(NASDAQ: AAPL)").as_deref(), Some("AAPL"));
        assert_eq!(ticker("listed on NYSE: BRK\n").as_deref(), Some("BRK"));
    }

    #[test]
    fn quoted_symbol_phrases() {
        assert_eq!(
            ticker("trades under the symbol \u{201c}TSLA\u{201d} on the exchange").as_deref(),
            Some("TSLA")
        );
        assert_eq!(ticker("ticker symbol: MSFT today").as_deref(), Some("MSFT"));
    }

    #[test]
    fn ownership_xml_symbol() {
        assert_eq!(
            ticker("<issuerTradingSymbol>aapl</issuerTradingSymbol>").as_deref(),
            Some("AAPL")
        );
    }

    #[test]
    fn no_pattern_yields_none() {
        assert_eq!(ticker("quarterly results were strong this period"), None);
    }
}
