use serde::Serialize;

use crate::error::ParseError;
use crate::parsing::filer::{self, FilerSection};
use crate::parsing::header::FilingHeader;
use crate::types::{ConsistentDocumentFields, ParsedDocument};

use super::generic;

/// Merger/exchange-offer registration statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormS4Data {
    #[serde(flatten)]
    pub header: FilingHeader,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filer: Option<FilerSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_of_report: Option<String>,
}

impl ConsistentDocumentFields for FormS4Data {
    fn common(&self) -> &FilingHeader {
        &self.header
    }
}

pub fn extract(text: &str, url: &str) -> Result<ParsedDocument<FormS4Data>, ParseError> {
    let header = FilingHeader::from_text(text)?;
    let data = FormS4Data {
        period_of_report: header.extra.get("conformedPeriodOfReport").cloned(),
        header,
        filer: filer::parse_section(text, "FILER:"),
    };
    let mut document = generic::assemble(data, text, url)?;
    // M&A paper moves prices harder than a plain registration.
    document.estimated_impact.promote_positive(0.15);
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impact::MarketImpact;

    const FILING: &str = "<SEC-HEADER>\n\
<ACCEPTANCE-DATETIME>20250407164500\n\
ACCESSION NUMBER: 0001193125-25-000900\n\
CONFORMED SUBMISSION TYPE: S-4\n\
PUBLIC DOCUMENT COUNT: 0\n\
FILED AS OF DATE: 20250407\n\
FILER:\n\
\tCOMPANY DATA:\n\
\t\tCOMPANY CONFORMED NAME: Summit Merger Corp\n\
\t\tCENTRAL INDEX KEY: 2001234\n\
</SEC-HEADER>\n";

    #[test]
    fn merger_upgrade() {
        let document = extract(FILING, "").unwrap();
        assert_eq!(document.estimated_impact.market_impact, MarketImpact::Positive);
        // 0.6 major-event baseline + 0.15
        assert_eq!(document.estimated_impact.confidence, 0.75);
        assert_eq!(document.estimated_impact.total_score, 0.75);
    }
}
