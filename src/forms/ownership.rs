use serde::{Deserialize, Serialize};

use crate::parsing::xml::ValueOf;

/// The `<ownershipDocument>` island embedded in Forms 3, 4 and 5. Every
/// field is optional: filers omit entire tables and the island is
/// best-effort anyway.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OwnershipDocument {
    pub schema_version: Option<String>,
    pub document_type: Option<String>,
    pub period_of_report: Option<String>,
    pub issuer: Option<OwnershipIssuer>,
    #[serde(rename = "reportingOwner")]
    pub reporting_owners: Vec<ReportingOwner>,
    pub non_derivative_table: Option<NonDerivativeTable>,
    pub derivative_table: Option<DerivativeTable>,
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OwnershipIssuer {
    pub issuer_cik: Option<String>,
    pub issuer_name: Option<String>,
    pub issuer_trading_symbol: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportingOwner {
    pub reporting_owner_id: Option<ReportingOwnerId>,
    pub reporting_owner_relationship: Option<ReportingOwnerRelationship>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportingOwnerId {
    pub rpt_owner_cik: Option<String>,
    pub rpt_owner_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportingOwnerRelationship {
    pub is_director: Option<String>,
    pub is_officer: Option<String>,
    pub is_ten_percent_owner: Option<String>,
    pub is_other: Option<String>,
    pub officer_title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NonDerivativeTable {
    #[serde(rename = "nonDerivativeTransaction")]
    pub transactions: Vec<NonDerivativeTransaction>,
    #[serde(rename = "nonDerivativeHolding")]
    pub holdings: Vec<NonDerivativeHolding>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NonDerivativeTransaction {
    pub security_title: Option<ValueOf<String>>,
    pub transaction_date: Option<ValueOf<String>>,
    pub transaction_coding: Option<TransactionCoding>,
    pub transaction_amounts: Option<TransactionAmounts>,
    pub post_transaction_amounts: Option<PostTransactionAmounts>,
    pub ownership_nature: Option<OwnershipNature>,
}

/// A holding row (Form 3's initial statement has holdings, not
/// transactions).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NonDerivativeHolding {
    pub security_title: Option<ValueOf<String>>,
    pub post_transaction_amounts: Option<PostTransactionAmounts>,
    pub ownership_nature: Option<OwnershipNature>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransactionCoding {
    pub transaction_form_type: Option<String>,
    pub transaction_code: Option<String>,
    pub equity_swap_involved: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransactionAmounts {
    pub transaction_shares: Option<ValueOf<f64>>,
    pub transaction_price_per_share: Option<ValueOf<f64>>,
    pub transaction_acquired_disposed_code: Option<ValueOf<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostTransactionAmounts {
    pub shares_owned_following_transaction: Option<ValueOf<f64>>,
    pub direct_or_indirect_ownership: Option<ValueOf<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OwnershipNature {
    pub direct_or_indirect_ownership: Option<ValueOf<String>>,
    pub nature_of_ownership: Option<ValueOf<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DerivativeTable {
    #[serde(rename = "derivativeTransaction")]
    pub transactions: Vec<DerivativeTransaction>,
    #[serde(rename = "derivativeHolding")]
    pub holdings: Vec<DerivativeHolding>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DerivativeTransaction {
    pub security_title: Option<ValueOf<String>>,
    pub conversion_or_exercise_price: Option<ValueOf<f64>>,
    pub transaction_date: Option<ValueOf<String>>,
    pub transaction_coding: Option<TransactionCoding>,
    pub transaction_amounts: Option<TransactionAmounts>,
    pub exercise_date: Option<ValueOf<String>>,
    pub expiration_date: Option<ValueOf<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DerivativeHolding {
    pub security_title: Option<ValueOf<String>>,
    pub conversion_or_exercise_price: Option<ValueOf<f64>>,
    pub exercise_date: Option<ValueOf<String>>,
    pub expiration_date: Option<ValueOf<String>>,
}
