use serde::Serialize;

use crate::error::ParseError;
use crate::parsing::header::FilingHeader;
use crate::parsing::xml::{parse_island, OWNERSHIP_DOCUMENT};
use crate::types::{ConsistentDocumentFields, ParsedDocument};

use super::generic;
use super::ownership::OwnershipDocument;

/// Initial statement of beneficial ownership, filed when someone becomes
/// an insider, so the ownership island carries holdings rather than
/// transactions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Form3Data {
    #[serde(flatten)]
    pub header: FilingHeader,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ownership_document: Option<OwnershipDocument>,
}

impl ConsistentDocumentFields for Form3Data {
    fn common(&self) -> &FilingHeader {
        &self.header
    }
}

pub fn extract(text: &str, url: &str) -> Result<ParsedDocument<Form3Data>, ParseError> {
    let header = FilingHeader::from_text(text)?;
    let ownership_document = parse_island(text, &OWNERSHIP_DOCUMENT, "ownershipDocument");
    let mut document =
        generic::assemble(Form3Data { header, ownership_document }, text, url)?;
    // A brand-new insider is a bullish signal on top of the baseline.
    document.estimated_impact.promote_positive(0.1);
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impact::MarketImpact;

    const FILING: &str = "<SEC-HEADER>\n\
<ACCEPTANCE-DATETIME>20250128140548\n\
ACCESSION NUMBER: 0001127602-25-000456\n\
CONFORMED SUBMISSION TYPE: 3\n\
PUBLIC DOCUMENT COUNT: 1\n\
FILED AS OF DATE: 20250128\n\
</SEC-HEADER>\n\
<DOCUMENT>\n<TYPE>3\n<FILENAME>form3.xml\n<TEXT>\n\
<ownershipDocument>\n\
    <documentType>3</documentType>\n\
    <periodOfReport>2025-01-27</periodOfReport>\n\
    <issuer>\n\
        <issuerCik>0001318605</issuerCik>\n\
        <issuerName>Tesla, Inc.</issuerName>\n\
        <issuerTradingSymbol>TSLA</issuerTradingSymbol>\n\
    </issuer>\n\
    <reportingOwner>\n\
        <reportingOwnerId>\n\
            <rptOwnerCik>0001494730</rptOwnerCik>\n\
            <rptOwnerName>DOE JANE B</rptOwnerName>\n\
        </reportingOwnerId>\n\
        <reportingOwnerRelationship>\n\
            <isDirector>1</isDirector>\n\
        </reportingOwnerRelationship>\n\
    </reportingOwner>\n\
    <nonDerivativeTable>\n\
        <nonDerivativeHolding>\n\
            <securityTitle><value>Common Stock</value></securityTitle>\n\
            <postTransactionAmounts>\n\
                <sharesOwnedFollowingTransaction><value>2500</value></sharesOwnedFollowingTransaction>\n\
            </postTransactionAmounts>\n\
            <ownershipNature>\n\
                <directOrIndirectOwnership><value>D</value></directOrIndirectOwnership>\n\
            </ownershipNature>\n\
        </nonDerivativeHolding>\n\
        <nonDerivativeHolding>\n\
            <securityTitle><value>Restricted Stock Units</value></securityTitle>\n\
            <postTransactionAmounts>\n\
                <sharesOwnedFollowingTransaction><value>800</value></sharesOwnedFollowingTransaction>\n\
            </postTransactionAmounts>\n\
            <ownershipNature>\n\
                <directOrIndirectOwnership><value>I</value></directOrIndirectOwnership>\n\
            </ownershipNature>\n\
        </nonDerivativeHolding>\n\
    </nonDerivativeTable>\n\
</ownershipDocument>\n\
</TEXT>\n</DOCUMENT>\n";

    #[test]
    fn parses_holdings() {
        let document = extract(FILING, "").unwrap();
        let ownership = document.parsed.ownership_document.as_ref().unwrap();
        let table = ownership.non_derivative_table.as_ref().unwrap();
        assert!(table.transactions.is_empty());
        assert_eq!(table.holdings.len(), 2);
        assert_eq!(
            table.holdings[0]
                .post_transaction_amounts
                .as_ref()
                .unwrap()
                .shares_owned_following_transaction
                .as_ref()
                .unwrap()
                .value,
            Some(2500.0)
        );
    }

    #[test]
    fn new_insider_boost_applies() {
        let document = extract(FILING, "").unwrap();
        assert_eq!(document.estimated_impact.market_impact, MarketImpact::Positive);
        // 0.7 insider baseline + 0.1 new-insider boost
        assert_eq!(document.estimated_impact.confidence, 0.8);
    }

    #[test]
    fn reporting_owner_relationship_is_kept() {
        let document = extract(FILING, "").unwrap();
        let ownership = document.parsed.ownership_document.as_ref().unwrap();
        let relationship = ownership.reporting_owners[0]
            .reporting_owner_relationship
            .as_ref()
            .unwrap();
        assert_eq!(relationship.is_director.as_deref(), Some("1"));
    }
}
