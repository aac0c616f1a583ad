use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::ParseError;
use crate::parsing::filer::{self, FilerSection};
use crate::parsing::header::FilingHeader;
use crate::types::{ConsistentDocumentFields, ParsedDocument};

use super::generic;

/// IPO registration statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormS1Data {
    #[serde(flatten)]
    pub header: FilingHeader,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filer: Option<FilerSection>,
    /// Registration-fee-table scrape, when the fee table is present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposed_maximum_aggregate_offering: Option<f64>,
}

impl ConsistentDocumentFields for FormS1Data {
    fn common(&self) -> &FilingHeader {
        &self.header
    }
}

static OFFERING_PRICE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)proposed\s+maximum\s+aggregate\s+offering\s+price[^\d$]*\$?\s*([\d,]+(?:\.\d+)?)")
        .unwrap()
});

pub fn extract(text: &str, url: &str) -> Result<ParsedDocument<FormS1Data>, ParseError> {
    let header = FilingHeader::from_text(text)?;
    let data = FormS1Data {
        header,
        filer: filer::parse_section(text, "FILER:"),
        proposed_maximum_aggregate_offering: offering_price(text),
    };
    let mut document = generic::assemble(data, text, url)?;
    // An IPO registration is a positive event in its own right.
    document.estimated_impact.promote_positive(0.1);
    Ok(document)
}

fn offering_price(text: &str) -> Option<f64> {
    OFFERING_PRICE
        .captures(text)
        .and_then(|caps| caps[1].replace(',', "").parse().ok())
}
