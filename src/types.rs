use serde::Serialize;

use crate::error::ParseError;
use crate::impact::ImpactAssessment;
use crate::parsing::datetime::sec_timestamp_to_unix;
use crate::parsing::header::FilingHeader;

/// A uudecoded attachment. Lives only for the duration of attachment
/// collection: the bytes are immediately rendered to a string and appended
/// to `ParsedDocument::attachments`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UueFile {
    pub name: String,
    pub data: Vec<u8>,
}

/// The minimal contract every form-specific payload satisfies: access to
/// the header-derived common fields. This is the join point between the
/// generic parsing service, which only knows these fields, and the
/// specialized extractors, which know much more.
pub trait ConsistentDocumentFields {
    fn common(&self) -> &FilingHeader;
}

/// Normalized header summary of the envelope. Dates here are always epoch
/// seconds; the raw SEC strings stay behind in the `parsed` payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicDocumentInfo {
    pub accession_number: String,
    pub acceptance_datetime: i64,
    pub conformed_submission_type: String,
    pub public_document_count: String,
    pub filed_as_of_date: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_as_of_change: Option<String>,
    pub unix_timestamp: i64,
    pub submission_type: String,
    pub url: String,
}

impl BasicDocumentInfo {
    pub fn from_header(header: &FilingHeader, url: &str) -> Result<Self, ParseError> {
        Ok(BasicDocumentInfo {
            accession_number: header.accession_number.clone(),
            acceptance_datetime: sec_timestamp_to_unix(&header.acceptance_datetime)?,
            conformed_submission_type: header.conformed_submission_type.clone(),
            public_document_count: header.public_document_count.clone(),
            filed_as_of_date: sec_timestamp_to_unix(&header.filed_as_of_date)?,
            date_as_of_change: header.date_as_of_change.clone(),
            unix_timestamp: header.unix_timestamp,
            submission_type: header.conformed_submission_type.clone(),
            url: url.to_string(),
        })
    }
}

/// Universal output envelope, parametric over the form-specific payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDocument<T> {
    pub basic: BasicDocumentInfo,
    pub estimated_impact: ImpactAssessment,
    pub parsed: T,
    pub attachments: Vec<String>,
}
