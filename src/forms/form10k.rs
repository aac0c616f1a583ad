use serde::Serialize;

use crate::error::ParseError;
use crate::parsing::filer::{self, FilerSection};
use crate::parsing::header::FilingHeader;
use crate::types::{ConsistentDocumentFields, ParsedDocument};

use super::generic;

/// Annual report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Form10KData {
    #[serde(flatten)]
    pub header: FilingHeader,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filer: Option<FilerSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_of_report: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiscal_year_end: Option<String>,
}

impl ConsistentDocumentFields for Form10KData {
    fn common(&self) -> &FilingHeader {
        &self.header
    }
}

pub fn extract(text: &str, url: &str) -> Result<ParsedDocument<Form10KData>, ParseError> {
    let mut header = FilingHeader::from_text(text)?;
    let data = Form10KData {
        period_of_report: header.extra.get("conformedPeriodOfReport").cloned(),
        fiscal_year_end: header.extra.remove("fiscalYearEnd"),
        header,
        filer: filer::parse_section(text, "FILER:"),
    };
    let mut document = generic::assemble(data, text, url)?;
    // Comprehensive disclosure: slightly more signal than the routine
    // baseline admits.
    document.estimated_impact.adjust_confidence(0.05);
    Ok(document)
}
