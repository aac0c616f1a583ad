pub mod form10k;
pub mod form10q;
pub mod form13f;
pub mod form3;
pub mod form4;
pub mod form8k;
pub mod generic;
pub mod ownership;
pub mod s1;
pub mod s4;
pub mod s8;
pub mod schedule13d;

use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use serde::Serialize;
use strum::{EnumIter, IntoEnumIterator};

use crate::error::ParseError;
use crate::impact::ImpactAssessment;
use crate::parsing::header::FilingHeader;
use crate::types::{BasicDocumentInfo, ParsedDocument};

pub use form10k::Form10KData;
pub use form10q::Form10QData;
pub use form13f::Form13FData;
pub use form3::Form3Data;
pub use form4::Form4Data;
pub use form8k::Form8KData;
pub use s1::FormS1Data;
pub use s4::FormS4Data;
pub use s8::FormS8Data;
pub use schedule13d::Schedule13DData;

/// Form codes with a specialized extractor, plus the fallback arm. Codes
/// the dispatcher does not recognize (including future form types) end
/// up in `Other` and are parsed generically; that path never fails.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter)]
pub enum FormType {
    Form8K,
    Form4,
    Form3,
    Form10K,
    Form10Q,
    FormS1,
    FormS4,
    FormS8,
    Form13F,
    Schedule13D,
    Other(String),
}

// Codes that are common enough to name but carry no form-specific
// structure worth extracting; they go straight to the generic service.
const ALWAYS_GENERIC: &[&str] = &["144", "144/A", "N-23C3A", "SC TO-I", "D", "497", "424B2"];

impl FormType {
    pub fn from_code(code: &str) -> FormType {
        let normalized = code.trim().to_uppercase();
        if ALWAYS_GENERIC.contains(&normalized.as_str()) {
            return FormType::Other(normalized);
        }
        match normalized.as_str() {
            "8-K" => FormType::Form8K,
            "4" | "4/A" => FormType::Form4,
            "3" => FormType::Form3,
            "10-K" => FormType::Form10K,
            "10-Q" => FormType::Form10Q,
            "S-1" | "S-1/A" => FormType::FormS1,
            "S-4" => FormType::FormS4,
            "S-8" => FormType::FormS8,
            "13F-HR" => FormType::Form13F,
            "13D" | "13D/A" | "SC 13D" | "SC 13D/A" => FormType::Schedule13D,
            "13G" | "13G/A" | "SC 13G" | "SC 13G/A" => FormType::Schedule13D,
            _ => FormType::Other(normalized),
        }
    }

    pub fn list_types() -> &'static str {
        &FORM_TYPES
    }
}

static FORM_TYPES: Lazy<String> = Lazy::new(|| {
    FormType::iter()
        .filter(|t| !matches!(t, FormType::Other(_)))
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ")
});

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormType::Form8K => write!(f, "8-K"),
            FormType::Form4 => write!(f, "4"),
            FormType::Form3 => write!(f, "3"),
            FormType::Form10K => write!(f, "10-K"),
            FormType::Form10Q => write!(f, "10-Q"),
            FormType::FormS1 => write!(f, "S-1"),
            FormType::FormS4 => write!(f, "S-4"),
            FormType::FormS8 => write!(f, "S-8"),
            FormType::Form13F => write!(f, "13F-HR"),
            FormType::Schedule13D => write!(f, "13D"),
            FormType::Other(code) => write!(f, "{}", code),
        }
    }
}

impl FromStr for FormType {
    type Err = String;
    fn from_str(s: &str) -> Result<FormType, String> {
        Ok(FormType::from_code(s))
    }
}

/// One parsed filing, whichever extractor produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParsedFiling {
    Form8K(ParsedDocument<Form8KData>),
    Form4(ParsedDocument<Form4Data>),
    Form3(ParsedDocument<Form3Data>),
    Form10K(ParsedDocument<Form10KData>),
    Form10Q(ParsedDocument<Form10QData>),
    FormS1(ParsedDocument<FormS1Data>),
    FormS4(ParsedDocument<FormS4Data>),
    FormS8(ParsedDocument<FormS8Data>),
    Form13F(ParsedDocument<Form13FData>),
    Schedule13D(ParsedDocument<Schedule13DData>),
    Generic(ParsedDocument<FilingHeader>),
}

impl ParsedFiling {
    pub fn basic(&self) -> &BasicDocumentInfo {
        match self {
            ParsedFiling::Form8K(d) => &d.basic,
            ParsedFiling::Form4(d) => &d.basic,
            ParsedFiling::Form3(d) => &d.basic,
            ParsedFiling::Form10K(d) => &d.basic,
            ParsedFiling::Form10Q(d) => &d.basic,
            ParsedFiling::FormS1(d) => &d.basic,
            ParsedFiling::FormS4(d) => &d.basic,
            ParsedFiling::FormS8(d) => &d.basic,
            ParsedFiling::Form13F(d) => &d.basic,
            ParsedFiling::Schedule13D(d) => &d.basic,
            ParsedFiling::Generic(d) => &d.basic,
        }
    }

    pub fn estimated_impact(&self) -> &ImpactAssessment {
        match self {
            ParsedFiling::Form8K(d) => &d.estimated_impact,
            ParsedFiling::Form4(d) => &d.estimated_impact,
            ParsedFiling::Form3(d) => &d.estimated_impact,
            ParsedFiling::Form10K(d) => &d.estimated_impact,
            ParsedFiling::Form10Q(d) => &d.estimated_impact,
            ParsedFiling::FormS1(d) => &d.estimated_impact,
            ParsedFiling::FormS4(d) => &d.estimated_impact,
            ParsedFiling::FormS8(d) => &d.estimated_impact,
            ParsedFiling::Form13F(d) => &d.estimated_impact,
            ParsedFiling::Schedule13D(d) => &d.estimated_impact,
            ParsedFiling::Generic(d) => &d.estimated_impact,
        }
    }

    pub fn attachments(&self) -> &[String] {
        match self {
            ParsedFiling::Form8K(d) => &d.attachments,
            ParsedFiling::Form4(d) => &d.attachments,
            ParsedFiling::Form3(d) => &d.attachments,
            ParsedFiling::Form10K(d) => &d.attachments,
            ParsedFiling::Form10Q(d) => &d.attachments,
            ParsedFiling::FormS1(d) => &d.attachments,
            ParsedFiling::FormS4(d) => &d.attachments,
            ParsedFiling::FormS8(d) => &d.attachments,
            ParsedFiling::Form13F(d) => &d.attachments,
            ParsedFiling::Schedule13D(d) => &d.attachments,
            ParsedFiling::Generic(d) => &d.attachments,
        }
    }
}

/// Parse a raw EDGAR submission with the extractor for `form_code`.
///
/// The code usually comes from an external feed (an RSS category field);
/// it only drives dispatch. Unknown codes fall back to the generic service.
pub fn parse_filing(text: &str, url: &str, form_code: &str) -> Result<ParsedFiling, ParseError> {
    let form_type = FormType::from_code(form_code);
    log::debug!("dispatching {:?} as {}", form_code, form_type);
    match form_type {
        FormType::Form8K => Ok(ParsedFiling::Form8K(form8k::extract(text, url)?)),
        FormType::Form4 => Ok(ParsedFiling::Form4(form4::extract(text, url)?)),
        FormType::Form3 => Ok(ParsedFiling::Form3(form3::extract(text, url)?)),
        FormType::Form10K => Ok(ParsedFiling::Form10K(form10k::extract(text, url)?)),
        FormType::Form10Q => Ok(ParsedFiling::Form10Q(form10q::extract(text, url)?)),
        FormType::FormS1 => Ok(ParsedFiling::FormS1(s1::extract(text, url)?)),
        FormType::FormS4 => Ok(ParsedFiling::FormS4(s4::extract(text, url)?)),
        FormType::FormS8 => Ok(ParsedFiling::FormS8(s8::extract(text, url)?)),
        FormType::Form13F => Ok(ParsedFiling::Form13F(form13f::extract(text, url)?)),
        FormType::Schedule13D => {
            Ok(ParsedFiling::Schedule13D(schedule13d::extract(text, url)?))
        }
        FormType::Other(code) => {
            log::debug!("no specialized extractor for {:?}, using generic", code);
            Ok(ParsedFiling::Generic(generic::extract(text, url)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_specialized_extractors() {
        assert_eq!(FormType::from_code("8-K"), FormType::Form8K);
        assert_eq!(FormType::from_code("4"), FormType::Form4);
        assert_eq!(FormType::from_code("4/A"), FormType::Form4);
        assert_eq!(FormType::from_code("3"), FormType::Form3);
        assert_eq!(FormType::from_code("10-K"), FormType::Form10K);
        assert_eq!(FormType::from_code("10-Q"), FormType::Form10Q);
        assert_eq!(FormType::from_code("S-1"), FormType::FormS1);
        assert_eq!(FormType::from_code("S-1/A"), FormType::FormS1);
        assert_eq!(FormType::from_code("S-4"), FormType::FormS4);
        assert_eq!(FormType::from_code("S-8"), FormType::FormS8);
        assert_eq!(FormType::from_code("13F-HR"), FormType::Form13F);
        assert_eq!(FormType::from_code("13D"), FormType::Schedule13D);
        assert_eq!(FormType::from_code("13D/A"), FormType::Schedule13D);
        assert_eq!(FormType::from_code("13G"), FormType::Schedule13D);
        assert_eq!(FormType::from_code("SC 13G/A"), FormType::Schedule13D);
    }

    #[test]
    fn casing_and_whitespace_are_tolerated() {
        assert_eq!(FormType::from_code(" 8-k "), FormType::Form8K);
        assert_eq!(FormType::from_code("s-1"), FormType::FormS1);
    }

    #[test]
    fn always_generic_codes_stay_generic() {
        for code in ALWAYS_GENERIC {
            assert_eq!(FormType::from_code(code), FormType::Other(code.to_string()));
        }
    }

    #[test]
    fn unknown_codes_fall_through() {
        assert_eq!(
            FormType::from_code("N-PORT"),
            FormType::Other("N-PORT".to_string())
        );
        assert_eq!(FormType::from_code(""), FormType::Other(String::new()));
    }

    #[test]
    fn display_round_trips_through_from_code() {
        for form_type in FormType::iter().filter(|t| !matches!(t, FormType::Other(_))) {
            assert_eq!(FormType::from_code(&form_type.to_string()), form_type);
        }
    }

    #[test]
    fn list_types_names_every_specialized_form() {
        let listed = FormType::list_types();
        assert!(listed.contains("8-K"));
        assert!(listed.contains("13F-HR"));
        assert!(!listed.is_empty());
    }
}
