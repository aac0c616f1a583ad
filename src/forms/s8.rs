use serde::Serialize;

use crate::error::ParseError;
use crate::parsing::filer::{self, FilerSection};
use crate::parsing::header::FilingHeader;
use crate::types::{ConsistentDocumentFields, ParsedDocument};

use super::generic;

/// Employee-benefit-plan registration. Routine paper; the baseline stands.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormS8Data {
    #[serde(flatten)]
    pub header: FilingHeader,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filer: Option<FilerSection>,
}

impl ConsistentDocumentFields for FormS8Data {
    fn common(&self) -> &FilingHeader {
        &self.header
    }
}

pub fn extract(text: &str, url: &str) -> Result<ParsedDocument<FormS8Data>, ParseError> {
    let header = FilingHeader::from_text(text)?;
    let data = FormS8Data {
        header,
        filer: filer::parse_section(text, "FILER:"),
    };
    generic::assemble(data, text, url)
}
