use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// The ownership schema wraps most leaf values in a `<value>` element
/// (alongside footnote references, which are ignored).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueOf<T> {
    #[serde(default)]
    pub value: Option<T>,
}

impl<T> ValueOf<T> {
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

pub static OWNERSHIP_DOCUMENT: Lazy<Regex> = Lazy::new(|| island_regex("ownershipDocument"));
pub static EDGAR_SUBMISSION: Lazy<Regex> = Lazy::new(|| island_regex("edgarSubmission"));
pub static INFORMATION_TABLE: Lazy<Regex> = Lazy::new(|| island_regex("informationTable"));

fn island_regex(tag: &str) -> Regex {
    Regex::new(&format!(
        r"(?s)<(?:[\w.-]+:)?{tag}[^>]*>.*?</(?:[\w.-]+:)?{tag}>",
        tag = tag
    ))
    .unwrap()
}

static NS_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<(/?)[\w.-]+:").unwrap());

// Filers emit the same islands with and without namespace prefixes
// (`<ns1:infoTable>` vs `<infoTable>`); strip prefixes so one set of serde
// structs covers both.
fn strip_ns_prefixes(xml: &str) -> String {
    NS_PREFIX.replace_all(xml, "<$1").into_owned()
}

/// Locate an embedded XML island and deserialize it. Best-effort by
/// contract: a missing island or one that fails to deserialize yields
/// `None` (with a warning for the latter), never a parse failure.
pub fn parse_island<T: DeserializeOwned>(text: &str, island: &Regex, what: &str) -> Option<T> {
    let matched = island.find(text)?;
    let normalized = strip_ns_prefixes(matched.as_str());
    match quick_xml::de::from_str(&normalized) {
        Ok(value) => Some(value),
        Err(error) => {
            log::warn!("failed to parse {} island: {}", what, error);
            None
        }
    }
}
