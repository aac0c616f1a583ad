use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::impact::{ImpactAssessment, MarketImpact};
use crate::parsing::header::FilingHeader;
use crate::parsing::xml::{parse_island, EDGAR_SUBMISSION, INFORMATION_TABLE};
use crate::types::{ConsistentDocumentFields, ParsedDocument};

use super::generic;

/// Institutional holdings report: the `edgarSubmission` cover/summary
/// island plus every `infoTable` row, with value/share totals aggregated
/// for the impact recompute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Form13FData {
    #[serde(flatten)]
    pub header: FilingHeader,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edgar_submission: Option<EdgarSubmission>,
    pub info_table: Vec<InfoTableEntry>,
    pub total_value: f64,
    pub total_shares: f64,
}

impl ConsistentDocumentFields for Form13FData {
    fn common(&self) -> &FilingHeader {
        &self.header
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EdgarSubmission {
    pub header_data: Option<HeaderData>,
    pub form_data: Option<FormData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderData {
    pub submission_type: Option<String>,
    pub filer_info: Option<FilerInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilerInfo {
    pub period_of_report: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormData {
    pub cover_page: Option<CoverPage>,
    pub summary_page: Option<SummaryPage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoverPage {
    pub report_calendar_or_quarter: Option<String>,
    pub filing_manager: Option<FilingManager>,
    pub report_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilingManager {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SummaryPage {
    pub other_included_managers_count: Option<u32>,
    pub table_entry_total: Option<u32>,
    pub table_value_total: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InformationTable {
    #[serde(rename = "infoTable")]
    pub entries: Vec<InfoTableEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InfoTableEntry {
    pub name_of_issuer: Option<String>,
    pub title_of_class: Option<String>,
    pub cusip: Option<String>,
    pub value: Option<f64>,
    pub shrs_or_prn_amt: Option<SharesOrPrincipal>,
    pub put_call: Option<String>,
    pub investment_discretion: Option<String>,
    pub voting_authority: Option<VotingAuthority>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SharesOrPrincipal {
    pub ssh_prnamt: Option<f64>,
    pub ssh_prnamt_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VotingAuthority {
    pub sole: Option<f64>,
    pub shared: Option<f64>,
    pub none: Option<f64>,
}

pub fn extract(text: &str, url: &str) -> Result<ParsedDocument<Form13FData>, ParseError> {
    let header = FilingHeader::from_text(text)?;
    let edgar_submission = parse_island(text, &EDGAR_SUBMISSION, "edgarSubmission");
    let info_table = parse_island::<InformationTable>(text, &INFORMATION_TABLE, "informationTable")
        .map(|table| table.entries)
        .unwrap_or_default();

    let total_value: f64 = info_table.iter().filter_map(|entry| entry.value).sum();
    let total_shares: f64 = info_table
        .iter()
        .filter_map(|entry| entry.shrs_or_prn_amt.as_ref())
        .filter_map(|shares| shares.ssh_prnamt)
        .sum();

    let data = Form13FData {
        header,
        edgar_submission,
        info_table,
        total_value,
        total_shares,
    };
    let mut document = generic::assemble(data, text, url)?;
    refine_impact(
        &mut document.estimated_impact,
        document.parsed.total_value,
        document.parsed.total_shares,
    );
    Ok(document)
}

// Holdings size drives the score: a big reported book is a positive signal,
// a tiny one barely registers, and the total score scales with value.
fn refine_impact(impact: &mut ImpactAssessment, total_value: f64, total_shares: f64) {
    if total_value > 1_000_000.0 && total_shares > 100_000.0 {
        impact.set_market_impact(MarketImpact::Positive);
        impact.adjust_confidence(0.2);
    } else if total_value < 100_000.0 {
        impact.set_market_impact(MarketImpact::Neutral);
        impact.adjust_confidence(-0.1);
    }
    impact.set_total_score(total_value / 10_000_000.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILING: &str = "<SEC-HEADER>\n\
<ACCEPTANCE-DATETIME>20250214093015\n\
ACCESSION NUMBER: 0000905718-25-000100\n\
CONFORMED SUBMISSION TYPE: 13F-HR\n\
PUBLIC DOCUMENT COUNT: 2\n\
FILED AS OF DATE: 20250214\n\
COMPANY CONFORMED NAME: Granite Point Advisors LP\n\
</SEC-HEADER>\n\
<DOCUMENT>\n<TYPE>13F-HR\n<FILENAME>primary_doc.xml\n<TEXT>\n\
<edgarSubmission>\n\
  <headerData>\n\
    <submissionType>13F-HR</submissionType>\n\
    <filerInfo><periodOfReport>12-31-2024</periodOfReport></filerInfo>\n\
  </headerData>\n\
  <formData>\n\
    <coverPage>\n\
      <reportCalendarOrQuarter>12-31-2024</reportCalendarOrQuarter>\n\
      <filingManager><name>Granite Point Advisors LP</name></filingManager>\n\
    </coverPage>\n\
    <summaryPage>\n\
      <tableEntryTotal>2</tableEntryTotal>\n\
      <tableValueTotal>2600000</tableValueTotal>\n\
    </summaryPage>\n\
  </formData>\n\
</edgarSubmission>\n\
</TEXT>\n</DOCUMENT>\n\
<DOCUMENT>\n<TYPE>INFORMATION TABLE\n<FILENAME>infotable.xml\n<TEXT>\n\
<ns1:informationTable xmlns:ns1=\"http://www.sec.gov/edgar/document/thirteenf/informationtable\">\n\
  <ns1:infoTable>\n\
    <ns1:nameOfIssuer>Apple Inc</ns1:nameOfIssuer>\n\
    <ns1:titleOfClass>COM</ns1:titleOfClass>\n\
    <ns1:cusip>037833100</ns1:cusip>\n\
    <ns1:value>2000000</ns1:value>\n\
    <ns1:shrsOrPrnAmt>\n\
      <ns1:sshPrnamt>120000</ns1:sshPrnamt>\n\
      <ns1:sshPrnamtType>SH</ns1:sshPrnamtType>\n\
    </ns1:shrsOrPrnAmt>\n\
    <ns1:investmentDiscretion>SOLE</ns1:investmentDiscretion>\n\
    <ns1:votingAuthority>\n\
      <ns1:sole>120000</ns1:sole>\n\
      <ns1:shared>0</ns1:shared>\n\
      <ns1:none>0</ns1:none>\n\
    </ns1:votingAuthority>\n\
  </ns1:infoTable>\n\
  <ns1:infoTable>\n\
    <ns1:nameOfIssuer>Microsoft Corp</ns1:nameOfIssuer>\n\
    <ns1:titleOfClass>COM</ns1:titleOfClass>\n\
    <ns1:cusip>594918104</ns1:cusip>\n\
    <ns1:value>600000</ns1:value>\n\
    <ns1:shrsOrPrnAmt>\n\
      <ns1:sshPrnamt>30000</ns1:sshPrnamt>\n\
      <ns1:sshPrnamtType>SH</ns1:sshPrnamtType>\n\
    </ns1:shrsOrPrnAmt>\n\
  </ns1:infoTable>\n\
</ns1:informationTable>\n\
</TEXT>\n</DOCUMENT>\n";

    #[test]
    fn parses_both_islands() {
        let document = extract(FILING, "").unwrap();
        let submission = document.parsed.edgar_submission.as_ref().unwrap();
        assert_eq!(
            submission
                .form_data
                .as_ref()
                .unwrap()
                .summary_page
                .as_ref()
                .unwrap()
                .table_value_total,
            Some(2600000.0)
        );
        assert_eq!(document.parsed.info_table.len(), 2);
        assert_eq!(
            document.parsed.info_table[0].name_of_issuer.as_deref(),
            Some("Apple Inc")
        );
    }

    #[test]
    fn totals_are_aggregated() {
        let document = extract(FILING, "").unwrap();
        assert_eq!(document.parsed.total_value, 2600000.0);
        assert_eq!(document.parsed.total_shares, 150000.0);
    }

    #[test]
    fn large_book_is_positive_with_scaled_score() {
        let document = extract(FILING, "").unwrap();
        assert_eq!(document.estimated_impact.market_impact, MarketImpact::Positive);
        // 0.5 baseline + 0.2 holdings boost
        assert_eq!(document.estimated_impact.confidence, 0.7);
        assert_eq!(document.estimated_impact.total_score, 0.26);
    }

    #[test]
    fn tiny_book_loses_confidence() {
        let mut impact = ImpactAssessment::baseline("13F-HR");
        refine_impact(&mut impact, 50_000.0, 4_000.0);
        assert_eq!(impact.market_impact, MarketImpact::Neutral);
        assert_eq!(impact.confidence, 0.4);
        assert_eq!(impact.total_score, 0.005);
    }

    #[test]
    fn score_clamps_at_one() {
        let mut impact = ImpactAssessment::baseline("13F-HR");
        refine_impact(&mut impact, 50_000_000.0, 2_000_000.0);
        assert_eq!(impact.total_score, 1.0);
    }

    #[test]
    fn empty_table_is_neutral() {
        let mut impact = ImpactAssessment::baseline("13F-HR");
        refine_impact(&mut impact, 0.0, 0.0);
        assert_eq!(impact.market_impact, MarketImpact::Neutral);
        assert_eq!(impact.total_score, 0.0);
    }
}
