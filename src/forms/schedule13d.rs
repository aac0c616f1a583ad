use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::ParseError;
use crate::parsing::filer::{self, FilerSection};
use crate::parsing::header::FilingHeader;
use crate::types::{ConsistentDocumentFields, ParsedDocument};

use super::generic;

/// Beneficial-ownership report (13D, and the passive 13G codes route here
/// too): an activist or large holder crossing the 5% threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule13DData {
    #[serde(flatten)]
    pub header: FilingHeader,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_company: Option<FilerSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filed_by: Option<FilerSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cusip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_of_class: Option<f64>,
}

impl ConsistentDocumentFields for Schedule13DData {
    fn common(&self) -> &FilingHeader {
        &self.header
    }
}

static CUSIP_LABELED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"CUSIP (?:No\.?|Number)[.:]?\s*([0-9A-Z]{9})\b").unwrap());
static CUSIP_COVER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)([0-9A-Z]{9})\s*\r?\n\s*\(CUSIP Number\)").unwrap());
static PERCENT_OF_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)percent of class[^%]{0,200}?([\d.]+)\s*%").unwrap());

pub fn extract(text: &str, url: &str) -> Result<ParsedDocument<Schedule13DData>, ParseError> {
    let header = FilingHeader::from_text(text)?;
    let data = Schedule13DData {
        header,
        subject_company: filer::parse_section(text, "SUBJECT COMPANY:"),
        filed_by: filer::parse_section(text, "FILED BY:"),
        cusip: cusip(text),
        percent_of_class: percent_of_class(text),
    };
    let mut document = generic::assemble(data, text, url)?;
    // Someone building a reportable stake is an ownership-change signal.
    document.estimated_impact.promote_positive(0.1);
    Ok(document)
}

fn cusip(text: &str) -> Option<String> {
    CUSIP_LABELED
        .captures(text)
        .or_else(|| CUSIP_COVER.captures(text))
        .map(|caps| caps[1].to_string())
}

fn percent_of_class(text: &str) -> Option<f64> {
    PERCENT_OF_CLASS
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
}
