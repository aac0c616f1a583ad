use serde::Serialize;

use crate::error::ParseError;
use crate::parsing::header::FilingHeader;
use crate::parsing::xml::{parse_island, OWNERSHIP_DOCUMENT};
use crate::types::{ConsistentDocumentFields, ParsedDocument};

use super::generic;
use super::ownership::OwnershipDocument;

/// Insider transaction report. The insider-activity baseline already marks
/// these positive; the payload's value is the ownership island itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Form4Data {
    #[serde(flatten)]
    pub header: FilingHeader,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ownership_document: Option<OwnershipDocument>,
}

impl ConsistentDocumentFields for Form4Data {
    fn common(&self) -> &FilingHeader {
        &self.header
    }
}

pub fn extract(text: &str, url: &str) -> Result<ParsedDocument<Form4Data>, ParseError> {
    let header = FilingHeader::from_text(text)?;
    let ownership_document = parse_island(text, &OWNERSHIP_DOCUMENT, "ownershipDocument");
    generic::assemble(Form4Data { header, ownership_document }, text, url)
}
