use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::ParseError;
use crate::impact::ImpactAssessment;
use crate::parsing::filer::{self, FilerSection};
use crate::parsing::header::FilingHeader;
use crate::types::{ConsistentDocumentFields, ParsedDocument};

use super::generic;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Form8KData {
    #[serde(flatten)]
    pub header: FilingHeader,
    /// `Item N.NN` codes scanned from the document body, in order.
    pub item_information: Vec<String>,
    /// The header's `ITEM INFORMATION:` description lines.
    pub items: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_of_report: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filer: Option<FilerSection>,
}

impl ConsistentDocumentFields for Form8KData {
    fn common(&self) -> &FilingHeader {
        &self.header
    }
}

static ITEM_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bItem[\s\u{a0}]+(\d{1,2}\.\d{2})\b").unwrap());
static ITEM_DESCRIPTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"ITEM INFORMATION:\s*([^\r\n]+)").unwrap());

// Material-event item codes that move markets: entry into/completion of
// acquisitions, delisting notices, changes in control, other events.
const HIGH_IMPACT_ITEMS: &[&str] = &["1.01", "2.01", "3.01", "5.01", "8.01"];

pub fn extract(text: &str, url: &str) -> Result<ParsedDocument<Form8KData>, ParseError> {
    let mut header = FilingHeader::from_text(text)?;
    // The header walk keeps only the first ITEM INFORMATION line; the full
    // set is collected below, so drop the partial copy from the flattened
    // payload.
    header.extra.remove("itemInformation");
    let data = Form8KData {
        period_of_report: header.extra.get("conformedPeriodOfReport").cloned(),
        header,
        item_information: item_information(text),
        items: item_descriptions(text),
        filer: filer::parse_section(text, "FILER:"),
    };
    let mut document = generic::assemble(data, text, url)?;
    refine_impact(&mut document.estimated_impact, &document.parsed.item_information);
    Ok(document)
}

fn item_information(text: &str) -> Vec<String> {
    let mut items = Vec::new();
    for caps in ITEM_CODE.captures_iter(text) {
        let item = format!("Item {}", &caps[1]);
        if !items.contains(&item) {
            items.push(item);
        }
    }
    items
}

fn item_descriptions(text: &str) -> Vec<String> {
    ITEM_DESCRIPTION
        .captures_iter(text)
        .map(|caps| caps[1].trim().to_string())
        .collect()
}

fn refine_impact(impact: &mut ImpactAssessment, item_information: &[String]) {
    let high_impact = item_information.iter().any(|item| {
        item.strip_prefix("Item ")
            .is_some_and(|code| HIGH_IMPACT_ITEMS.contains(&code))
    });
    if high_impact {
        log::debug!("8-K carries high-impact item codes: {:?}", item_information);
        impact.promote_positive(0.2);
    }
}
