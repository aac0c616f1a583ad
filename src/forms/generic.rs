use std::collections::HashSet;

use crate::error::ParseError;
use crate::impact::ImpactAssessment;
use crate::parsing::attachments::extract_document_texts;
use crate::parsing::header::FilingHeader;
use crate::parsing::uue::decode_uuencoded_files;
use crate::types::{BasicDocumentInfo, ConsistentDocumentFields, ParsedDocument};

/// The base extractor: header, company identification, attachments and the
/// baseline impact score. Also the fallback for every form type without a
/// specialized extractor.
pub fn extract(text: &str, url: &str) -> Result<ParsedDocument<FilingHeader>, ParseError> {
    let header = FilingHeader::from_text(text)?;
    assemble(header, text, url)
}

/// Assemble the output envelope around a form-specific payload. Shared by
/// every specialized extractor; refinements are applied by the caller on
/// the assembled document.
pub fn assemble<T: ConsistentDocumentFields>(
    payload: T,
    text: &str,
    url: &str,
) -> Result<ParsedDocument<T>, ParseError> {
    let common = payload.common();
    let basic = BasicDocumentInfo::from_header(common, url)?;
    let attachments = if common.public_document_count == "0" {
        Vec::new()
    } else {
        collect_attachments(text)
    };
    let estimated_impact = ImpactAssessment::baseline(&common.conformed_submission_type);
    log::debug!(
        "parsed {} submission {} ({} attachments)",
        basic.conformed_submission_type,
        basic.accession_number,
        attachments.len()
    );
    Ok(ParsedDocument {
        basic,
        estimated_impact,
        parsed: payload,
        attachments,
    })
}

// Uudecode runs first: the names it recovers form the exclusion set for the
// <TEXT> walk, which is what keeps an attachment from appearing twice.
pub fn collect_attachments(text: &str) -> Vec<String> {
    let mut collected = Vec::new();
    let mut decoded_names = HashSet::new();
    for file in decode_uuencoded_files(text) {
        decoded_names.insert(file.name.clone());
        collected.push(String::from_utf8_lossy(&file.data).into_owned());
    }
    collected.extend(extract_document_texts(text, &decoded_names));
    collected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impact::MarketImpact;

    const MINIMAL: &str = "<SEC-HEADER>\n\
<ACCEPTANCE-DATETIME>20250128140548\n\
ACCESSION NUMBER: 0000000000-25-000001\n\
CONFORMED SUBMISSION TYPE: SC TO-I\n\
PUBLIC DOCUMENT COUNT: 1\n\
FILED AS OF DATE: 20250128\n\
COMPANY CONFORMED NAME: Acme Holdings LLC\n\
</SEC-HEADER>\n\
<DOCUMENT>\n<TYPE>EX-99\n<FILENAME>letter.htm\n<TEXT>\ndear holders\n</TEXT>\n</DOCUMENT>\n";

    #[test]
    fn normalizes_dates_and_collects_attachments() {
        let document = extract(MINIMAL, "https://example.test/filing.txt").unwrap();
        assert_eq!(document.basic.acceptance_datetime, 1738087548);
        assert_eq!(document.basic.filed_as_of_date, 1738036800);
        assert_eq!(document.basic.unix_timestamp, 1738087548);
        assert_eq!(document.basic.url, "https://example.test/filing.txt");
        assert_eq!(document.attachments, vec!["dear holders".to_string()]);
        assert_eq!(document.estimated_impact.market_impact, MarketImpact::Neutral);
        assert_eq!(document.estimated_impact.confidence, 0.5);
    }

    #[test]
    fn zero_document_count_skips_attachment_work() {
        let text = MINIMAL.replace("PUBLIC DOCUMENT COUNT: 1", "PUBLIC DOCUMENT COUNT: 0");
        let document = extract(&text, "").unwrap();
        assert!(document.attachments.is_empty());
    }

    #[test]
    fn uudecoded_names_suppress_text_duplicates() {
        let text = format!(
            "{}<DOCUMENT>\n<TYPE>EX-1\n<FILENAME>extra.txt.htm\n<TEXT>inline duplicate</TEXT>\n</DOCUMENT>\n\
begin 644 extra.txt.htm\n>=75E(&%T=&%C:&UE;G0@<&%Y;&]A9\"!L:6YE<R$*\n`\nend\n",
            MINIMAL
        );
        let document = extract(&text, "").unwrap();
        // uudecoded payload first, then letter.htm; no inline duplicate.
        assert_eq!(document.attachments.len(), 2);
        assert!(document
            .attachments
            .iter()
            .any(|a| a == "uue attachment payload lines!\n"));
        assert!(!document.attachments.iter().any(|a| a.contains("inline duplicate")));
    }
}
