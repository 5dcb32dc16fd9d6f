//! Document types, the raw OCR payload, and the normalized extraction record.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::NormalizeError;
use crate::models::field::{Field, RawValue};

/// Closed set of document categories the engine knows how to map.
///
/// Constructing one from an unregistered string is an error; there is no
/// silent fallback for unknown document types. Unknown *fields* within a
/// known type are handled separately by the pass-through parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// IRS Form W-2 wage and tax statement.
    W2,
    /// Employer pay stub.
    Paystub,
    /// Bank account statement.
    BankStatement,
    /// Personal tax return (Form 1040).
    TaxReturn,
    /// Government-issued photo ID.
    Id,
    /// Any other document; all fields pass through untyped.
    Other,
}

impl DocumentType {
    /// Canonical tag used at the OCR boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::W2 => "w2",
            DocumentType::Paystub => "paystub",
            DocumentType::BankStatement => "bank_statement",
            DocumentType::TaxReturn => "tax_return",
            DocumentType::Id => "id",
            DocumentType::Other => "other",
        }
    }

    /// All registered document types.
    pub fn all() -> &'static [DocumentType] {
        &[
            DocumentType::W2,
            DocumentType::Paystub,
            DocumentType::BankStatement,
            DocumentType::TaxReturn,
            DocumentType::Id,
            DocumentType::Other,
        ]
    }
}

impl FromStr for DocumentType {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "w2" => Ok(DocumentType::W2),
            "paystub" => Ok(DocumentType::Paystub),
            "bank_statement" => Ok(DocumentType::BankStatement),
            "tax_return" => Ok(DocumentType::TaxReturn),
            "id" => Ok(DocumentType::Id),
            "other" => Ok(DocumentType::Other),
            _ => Err(NormalizeError::UnknownDocumentType(s.to_string())),
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One raw field as delivered by the document-intelligence provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawField {
    /// Raw value; `None` when the provider delivered null.
    pub value: Option<RawValue>,

    /// Provider confidence estimate; defaults to 1.0/manual when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

impl RawField {
    /// A field with an OCR confidence estimate.
    pub fn new(value: impl Into<RawValue>, confidence: f32) -> Self {
        Self {
            value: Some(value.into()),
            confidence: Some(confidence),
        }
    }

    /// A field without a confidence estimate (treated as manual, 1.0).
    pub fn manual(value: impl Into<RawValue>) -> Self {
        Self {
            value: Some(value.into()),
            confidence: None,
        }
    }

    /// A null-valued field.
    pub fn null() -> Self {
        Self::default()
    }
}

/// The full payload from the document-intelligence provider: a document-type
/// tag plus the raw field map.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawExtraction {
    /// Document-type tag, e.g. `"w2"`.
    pub document_type: String,

    /// Raw field name to value/confidence pairs.
    #[serde(default)]
    pub fields: HashMap<String, RawField>,
}

impl RawExtraction {
    /// Resolve the document-type tag against the registered set.
    pub fn document_type(&self) -> crate::error::Result<DocumentType> {
        self.document_type.parse()
    }
}

/// The normalized result of one extraction pass.
///
/// Created once per orchestrator invocation and never mutated; corrections
/// are modeled as a new extraction or a user override downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedExtraction {
    /// The document category the field table was drawn from.
    pub document_type: DocumentType,

    /// Normalized fields keyed by raw field name. Ordered so serialized
    /// output is stable.
    pub fields: BTreeMap<String, Field>,

    /// Aggregate confidence over all fields, in `[0, 1]`.
    pub overall_confidence: f32,

    /// When this extraction was normalized.
    pub extracted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_document_type_from_str() {
        assert_eq!("w2".parse::<DocumentType>().unwrap(), DocumentType::W2);
        assert_eq!(
            "bank_statement".parse::<DocumentType>().unwrap(),
            DocumentType::BankStatement
        );
        assert_eq!("  W2 ".parse::<DocumentType>().unwrap(), DocumentType::W2);
    }

    #[test]
    fn test_document_type_unknown_is_error() {
        let err = "mortgage_note".parse::<DocumentType>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown document type: mortgage_note"
        );
    }

    #[test]
    fn test_document_type_round_trip() {
        for doc in DocumentType::all() {
            assert_eq!(doc.as_str().parse::<DocumentType>().unwrap(), *doc);
        }
    }

    #[test]
    fn test_raw_extraction_deserializes_provider_payload() {
        let payload = r#"{
            "documentType": "w2",
            "fields": {
                "employeeName": { "value": "JOHN DOE", "confidence": 0.95 },
                "wagesTips": { "value": 50000, "confidence": 0.90 },
                "employerName": { "value": null }
            }
        }"#;

        let raw: RawExtraction = serde_json::from_str(payload).unwrap();
        assert_eq!(raw.document_type().unwrap(), DocumentType::W2);
        assert_eq!(raw.fields.len(), 3);
        assert_eq!(
            raw.fields["wagesTips"].value,
            Some(RawValue::Number(50000.0))
        );
        assert_eq!(raw.fields["employerName"].value, None);
    }
}
