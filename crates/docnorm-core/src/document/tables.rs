//! Per-document-type field tables binding raw field names to parsers.
//!
//! The tables are compiled-in static data: read-only process-wide
//! configuration with no initialization or teardown lifecycle.

use serde::{Deserialize, Serialize};

use crate::models::extraction::DocumentType;
use crate::models::field::ParsedValue;

use super::rules::{
    mask_account, mask_ssn, parse_address, parse_currency, parse_date, parse_name,
    parse_percentage,
};

/// The semantic parser responsible for a raw field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Monetary amount.
    Currency,
    /// Calendar date.
    Date,
    /// Percentage rate.
    Percent,
    /// Social Security Number, masked on output.
    Ssn,
    /// Account number, masked on output.
    Account,
    /// Personal name.
    PersonName,
    /// Postal address.
    PostalAddress,
    /// Pass-through text (also the fallback for unregistered fields).
    Text,
}

impl FieldKind {
    /// Run the parser bound to this kind over a raw textual value.
    pub fn parse(&self, raw: &str) -> Option<ParsedValue> {
        match self {
            FieldKind::Currency => parse_currency(raw).map(ParsedValue::Number),
            FieldKind::Date => parse_date(raw).map(ParsedValue::Date),
            FieldKind::Percent => parse_percentage(raw).map(ParsedValue::Number),
            FieldKind::Ssn => mask_ssn(raw).map(ParsedValue::Text),
            FieldKind::Account => mask_account(raw).map(ParsedValue::Text),
            FieldKind::PersonName => parse_name(raw).map(ParsedValue::Name),
            FieldKind::PostalAddress => parse_address(raw).map(ParsedValue::Address),
            FieldKind::Text => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(ParsedValue::Text(trimmed.to_string()))
                }
            }
        }
    }

    /// Aggregation weight for the confidence calculator. Identity-bearing
    /// fields count more than pass-through text.
    pub fn weight(&self) -> f32 {
        match self {
            FieldKind::Ssn => 1.5,
            FieldKind::Currency | FieldKind::Account => 1.25,
            FieldKind::Date
            | FieldKind::Percent
            | FieldKind::PersonName
            | FieldKind::PostalAddress => 1.0,
            FieldKind::Text => 0.5,
        }
    }
}

const W2_FIELDS: &[(&str, FieldKind)] = &[
    ("employeeName", FieldKind::PersonName),
    ("employeeSSN", FieldKind::Ssn),
    ("employeeAddress", FieldKind::PostalAddress),
    ("employerName", FieldKind::Text),
    ("employerEIN", FieldKind::Text),
    ("employerAddress", FieldKind::PostalAddress),
    ("wagesTips", FieldKind::Currency),
    ("federalTaxWithheld", FieldKind::Currency),
    ("socialSecurityWages", FieldKind::Currency),
    ("socialSecurityTaxWithheld", FieldKind::Currency),
    ("medicareWages", FieldKind::Currency),
    ("medicareTaxWithheld", FieldKind::Currency),
    ("stateWages", FieldKind::Currency),
    ("stateTaxWithheld", FieldKind::Currency),
    ("taxYear", FieldKind::Text),
];

const PAYSTUB_FIELDS: &[(&str, FieldKind)] = &[
    ("employeeName", FieldKind::PersonName),
    ("employeeAddress", FieldKind::PostalAddress),
    ("employerName", FieldKind::Text),
    ("payPeriodStart", FieldKind::Date),
    ("payPeriodEnd", FieldKind::Date),
    ("payDate", FieldKind::Date),
    ("grossPay", FieldKind::Currency),
    ("netPay", FieldKind::Currency),
    ("federalTaxWithheld", FieldKind::Currency),
    ("stateTaxWithheld", FieldKind::Currency),
    ("socialSecurityTax", FieldKind::Currency),
    ("medicareTax", FieldKind::Currency),
    ("ytdGrossPay", FieldKind::Currency),
    ("ytdNetPay", FieldKind::Currency),
];

const BANK_STATEMENT_FIELDS: &[(&str, FieldKind)] = &[
    ("accountHolderName", FieldKind::PersonName),
    ("accountHolderAddress", FieldKind::PostalAddress),
    ("bankName", FieldKind::Text),
    ("accountNumber", FieldKind::Account),
    ("routingNumber", FieldKind::Account),
    ("statementStartDate", FieldKind::Date),
    ("statementEndDate", FieldKind::Date),
    ("beginningBalance", FieldKind::Currency),
    ("endingBalance", FieldKind::Currency),
    ("totalDeposits", FieldKind::Currency),
    ("totalWithdrawals", FieldKind::Currency),
    ("annualPercentageYield", FieldKind::Percent),
];

const TAX_RETURN_FIELDS: &[(&str, FieldKind)] = &[
    ("filerName", FieldKind::PersonName),
    ("filerSSN", FieldKind::Ssn),
    ("spouseName", FieldKind::PersonName),
    ("spouseSSN", FieldKind::Ssn),
    ("homeAddress", FieldKind::PostalAddress),
    ("filingStatus", FieldKind::Text),
    ("taxYear", FieldKind::Text),
    ("totalIncome", FieldKind::Currency),
    ("adjustedGrossIncome", FieldKind::Currency),
    ("taxableIncome", FieldKind::Currency),
    ("totalTax", FieldKind::Currency),
    ("effectiveTaxRate", FieldKind::Percent),
    ("refundAmount", FieldKind::Currency),
];

const ID_FIELDS: &[(&str, FieldKind)] = &[
    ("fullName", FieldKind::PersonName),
    ("dateOfBirth", FieldKind::Date),
    ("address", FieldKind::PostalAddress),
    ("idNumber", FieldKind::Account),
    ("issueDate", FieldKind::Date),
    ("expirationDate", FieldKind::Date),
];

/// The field table registered for a document type.
pub fn field_table(document_type: DocumentType) -> &'static [(&'static str, FieldKind)] {
    match document_type {
        DocumentType::W2 => W2_FIELDS,
        DocumentType::Paystub => PAYSTUB_FIELDS,
        DocumentType::BankStatement => BANK_STATEMENT_FIELDS,
        DocumentType::TaxReturn => TAX_RETURN_FIELDS,
        DocumentType::Id => ID_FIELDS,
        DocumentType::Other => &[],
    }
}

/// The parser bound to a field name, falling back to pass-through text so
/// unknown fields are preserved rather than dropped.
pub fn kind_for(document_type: DocumentType, field_name: &str) -> FieldKind {
    field_table(document_type)
        .iter()
        .find(|(name, _)| *name == field_name)
        .map(|(_, kind)| *kind)
        .unwrap_or(FieldKind::Text)
}
