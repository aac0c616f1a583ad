use std::collections::BTreeMap;

use html_escape::decode_html_entities;
use serde::Serialize;

/// Company-data subsection of a FILER / SUBJECT COMPANY / FILED BY block.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilerCompanyData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_conformed_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub central_index_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_industrial_classification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub irs_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_of_incorporation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiscal_year_end: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilingValues {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sec_act: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sec_file_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub film_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_phone: Option<String>,
}

/// One filer block of the SGML header: company data, filing values and the
/// business address, as far as each is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilerSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_data: Option<FilerCompanyData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filing_values: Option<FilingValues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_address: Option<BusinessAddress>,
}

// Top-level section headings that delimit filer blocks in the header.
const SECTION_HEADINGS: &[&str] = &[
    "FILER:",
    "SUBJECT COMPANY:",
    "FILED BY:",
    "ISSUER:",
    "REPORTING-OWNER:",
];

/// Extract the first section introduced by `heading` ("FILER:", "SUBJECT
/// COMPANY:", …) from the header text. `None` when the heading is absent.
pub fn parse_section(text: &str, heading: &str) -> Option<FilerSection> {
    let head_end = text.find("<DOCUMENT>").unwrap_or(text.len());
    let head = &text[..head_end];

    let start = head.find(heading)? + heading.len();
    let rest = &head[start..];
    let end = SECTION_HEADINGS
        .iter()
        .filter_map(|other| rest.find(other))
        .chain(rest.find("</SEC-HEADER>"))
        .min()
        .unwrap_or(rest.len());

    let fields = section_fields(&rest[..end]);
    let get = |key: &str| fields.get(key).cloned();

    let company_data = FilerCompanyData {
        company_conformed_name: get("COMPANY CONFORMED NAME"),
        central_index_key: get("CENTRAL INDEX KEY"),
        standard_industrial_classification: get("STANDARD INDUSTRIAL CLASSIFICATION"),
        irs_number: get("IRS NUMBER"),
        state_of_incorporation: get("STATE OF INCORPORATION"),
        fiscal_year_end: get("FISCAL YEAR END"),
    };
    let filing_values = FilingValues {
        form_type: get("FORM TYPE"),
        sec_act: get("SEC ACT"),
        sec_file_number: get("SEC FILE NUMBER"),
        film_number: get("FILM NUMBER"),
    };
    let business_address = BusinessAddress {
        street1: get("STREET 1"),
        street2: get("STREET 2"),
        city: get("CITY"),
        state: get("STATE"),
        zip: get("ZIP"),
        business_phone: get("BUSINESS PHONE"),
    };

    Some(FilerSection {
        company_data: (company_data != FilerCompanyData::default()).then_some(company_data),
        filing_values: (filing_values != FilingValues::default()).then_some(filing_values),
        business_address: (business_address != BusinessAddress::default())
            .then_some(business_address),
    })
}

fn section_fields(section: &str) -> BTreeMap<String, String> {
    let mut fields = BTreeMap::new();
    for line in section.lines() {
        let line = line.trim();
        if let Some(colon) = line.find(':') {
            let key = line[..colon].trim();
            let value = line[colon + 1..].trim();
            if !key.is_empty() && !value.is_empty() {
                fields
                    .entry(key.to_string())
                    .or_insert_with(|| decode_html_entities(value).trim().to_string());
            }
        }
    }
    fields
}
