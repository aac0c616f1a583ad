use std::collections::BTreeMap;

use html_escape::decode_html_entities;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::ParseError;
use crate::parsing::company;
use crate::parsing::datetime::sec_timestamp_to_unix;
use crate::types::ConsistentDocumentFields;

/// Typed view of the SGML header, the common core of every form payload.
/// Dates are still the raw SEC strings here; `unix_timestamp` is the only
/// normalized value (epoch seconds of the acceptance datetime). Header tags
/// without a dedicated field land in `extra`, lower-camel-cased.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilingHeader {
    pub accession_number: String,
    pub acceptance_datetime: String,
    pub conformed_submission_type: String,
    pub public_document_count: String,
    pub filed_as_of_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_as_of_change: Option<String>,
    pub unix_timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cik: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl FilingHeader {
    /// Parse the SGML header of a raw submission and run the company, CIK
    /// and ticker fallback chains over the full document text. Fails only
    /// when a required date header is missing or malformed.
    pub fn from_text(text: &str) -> Result<FilingHeader, ParseError> {
        let mut fields = parse_header_fields(text);

        let acceptance_datetime = fields
            .remove("acceptanceDatetime")
            .ok_or(ParseError::MissingHeader("ACCEPTANCE-DATETIME"))?;
        let filed_as_of_date = fields
            .remove("filedAsOfDate")
            .ok_or(ParseError::MissingHeader("FILED AS OF DATE"))?;
        let unix_timestamp = sec_timestamp_to_unix(&acceptance_datetime)?;

        // These would collide with the dedicated fields under flatten; the
        // fallback chains below re-extract them from the full text anyway.
        fields.remove("companyName");
        fields.remove("cik");
        fields.remove("ticker");

        Ok(FilingHeader {
            accession_number: fields.remove("accessionNumber").unwrap_or_default(),
            conformed_submission_type: fields
                .remove("conformedSubmissionType")
                .unwrap_or_default(),
            public_document_count: fields.remove("publicDocumentCount").unwrap_or_default(),
            date_as_of_change: fields.remove("dateAsOfChange"),
            company_name: company::company_name(text),
            cik: company::cik(text),
            ticker: company::ticker(text),
            acceptance_datetime,
            filed_as_of_date,
            unix_timestamp,
            extra: fields,
        })
    }
}

impl ConsistentDocumentFields for FilingHeader {
    fn common(&self) -> &FilingHeader {
        self
    }
}

static SUBMISSION_TYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"CONFORMED SUBMISSION TYPE:\s*([^\r\n]+)").unwrap());

/// Read the form-type code out of the header, for callers that do not get
/// one from an external feed.
pub fn detect_submission_type(text: &str) -> Option<String> {
    SUBMISSION_TYPE
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
}

// The header is everything before the first <DOCUMENT> block: a mix of
// `TAG: value` lines and `<TAG>value` lines, with bare `<TAG>` group
// markers in between. First occurrence wins; repeated FILER sections must
// not overwrite the primary filer's values.
fn parse_header_fields(text: &str) -> BTreeMap<String, String> {
    let head_end = text.find("<DOCUMENT>").unwrap_or(text.len());
    let mut fields = BTreeMap::new();

    for line in text[..head_end].lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(rest) = line.strip_prefix('<') {
            let Some(gt) = rest.find('>') else { continue };
            let tag = &rest[..gt];
            let value = rest[gt + 1..].trim();
            if !tag.starts_with('/') && !value.is_empty() {
                fields
                    .entry(lower_camel_case(tag))
                    .or_insert_with(|| decode_html_entities(value).trim().to_string());
            }
        } else if let Some(colon) = line.find(':') {
            let key = line[..colon].trim();
            let value = line[colon + 1..].trim();
            if !key.is_empty() && !value.is_empty() {
                fields
                    .entry(lower_camel_case(key))
                    .or_insert_with(|| decode_html_entities(value).trim().to_string());
            }
        }
    }
    fields
}

// "CONFORMED SUBMISSION TYPE" -> "conformedSubmissionType",
// "ACCEPTANCE-DATETIME" -> "acceptanceDatetime"
fn lower_camel_case(key: &str) -> String {
    let mut out = String::new();
    let words = key
        .split(|c: char| c == ' ' || c == '-' || c == '_')
        .filter(|w| !w.is_empty());
    for (i, word) in words.enumerate() {
        let lower = word.to_lowercase();
        if i == 0 {
            out.push_str(&lower);
        } else {
            let mut chars = lower.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }
    out
}
