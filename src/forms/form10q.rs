use serde::Serialize;

use crate::error::ParseError;
use crate::parsing::filer::{self, FilerSection};
use crate::parsing::header::FilingHeader;
use crate::types::{ConsistentDocumentFields, ParsedDocument};

use super::generic;

/// Quarterly report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Form10QData {
    #[serde(flatten)]
    pub header: FilingHeader,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filer: Option<FilerSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_of_report: Option<String>,
}

impl ConsistentDocumentFields for Form10QData {
    fn common(&self) -> &FilingHeader {
        &self.header
    }
}

pub fn extract(text: &str, url: &str) -> Result<ParsedDocument<Form10QData>, ParseError> {
    let header = FilingHeader::from_text(text)?;
    let data = Form10QData {
        period_of_report: header.extra.get("conformedPeriodOfReport").cloned(),
        header,
        filer: filer::parse_section(text, "FILER:"),
    };
    let mut document = generic::assemble(data, text, url)?;
    document.estimated_impact.adjust_confidence(0.05);
    Ok(document)
}
