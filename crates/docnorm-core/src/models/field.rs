//! Field-level types: raw values from the OCR boundary, parsed values, and
//! the confidence-scored `Field` record that wraps them.

use std::borrow::Cow;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A raw value as delivered by the document-intelligence provider.
///
/// The provider emits either text or a bare number; `null` is modeled as
/// `Option<RawValue>` on the containing field. Converting here keeps untyped
/// JSON values from crossing into the parser layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Numeric raw value.
    Number(f64),
    /// Textual raw value.
    Text(String),
}

impl RawValue {
    /// Textual rendering handed to the field parsers.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            RawValue::Text(s) => Cow::Borrowed(s),
            RawValue::Number(n) => Cow::Owned(n.to_string()),
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

/// A parsed, semantically typed value.
///
/// Masked SSNs, masked account numbers, and pass-through fields are `Text`;
/// currency amounts and percentages are `Number`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParsedValue {
    /// Monetary amount or percentage value.
    Number(Decimal),
    /// Calendar date, serialized as ISO `YYYY-MM-DD`.
    Date(NaiveDate),
    /// Structured personal name.
    Name(ParsedName),
    /// Structured postal address.
    Address(ParsedAddress),
    /// Plain text (masked identifiers, pass-through fields).
    Text(String),
}

impl ParsedValue {
    /// Numeric value, if this is a `Number`.
    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            ParsedValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Date value, if this is a `Date`.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            ParsedValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Text value, if this is `Text`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParsedValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Parsed name, if this is a `Name`.
    pub fn as_name(&self) -> Option<&ParsedName> {
        match self {
            ParsedValue::Name(n) => Some(n),
            _ => None,
        }
    }

    /// Parsed address, if this is an `Address`.
    pub fn as_address(&self) -> Option<&ParsedAddress> {
        match self {
            ParsedValue::Address(a) => Some(a),
            _ => None,
        }
    }
}

/// A parsed personal name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedName {
    /// Given name.
    pub first: String,

    /// Middle name(s), when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle: Option<String>,

    /// Surname. Empty for single-token names.
    pub last: String,

    /// Generational suffix (Jr., III, ...), when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,

    /// Canonical title-cased rendering of the whole name.
    pub full: String,
}

/// A parsed postal address. Parts that could not be located are empty
/// strings rather than a failure of the whole address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedAddress {
    /// Street line, without the unit designator.
    pub street: String,

    /// Unit/apartment designator, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// City name.
    pub city: String,

    /// Canonical two-letter state code, empty when unrecognized.
    pub state: String,

    /// 5-digit or ZIP+4 postal code, empty when missing.
    pub zip: String,
}

/// Where a confidence score came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceSource {
    /// Entered or confirmed by a human.
    Manual,
    /// Estimated by the OCR provider.
    Ocr,
}

/// A confidence score with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Confidence {
    /// Score in `[0, 1]`.
    pub value: f32,

    /// Provenance of the score.
    pub source: ConfidenceSource,
}

impl Confidence {
    /// OCR-supplied confidence, clamped into `[0, 1]`.
    pub fn ocr(value: f32) -> Self {
        Self {
            value: value.clamp(0.0, 1.0),
            source: ConfidenceSource::Ocr,
        }
    }

    /// Manually-supplied confidence, clamped into `[0, 1]`.
    pub fn manual(value: f32) -> Self {
        Self {
            value: value.clamp(0.0, 1.0),
            source: ConfidenceSource::Manual,
        }
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self {
            value: 1.0,
            source: ConfidenceSource::Manual,
        }
    }
}

/// One extracted field: the raw value, its parsed form, and confidence.
///
/// `parsed` is `None` whenever `raw` is absent or fails to parse; it is never
/// a best-effort guess. Fields are built once and not mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Raw field name from the provider.
    pub field_name: String,

    /// Raw value, `None` when the provider delivered null.
    pub raw: Option<RawValue>,

    /// Parsed value, `None` when `raw` is absent or unparseable.
    pub parsed: Option<ParsedValue>,

    /// Confidence in the raw value.
    pub confidence: Confidence,
}

impl Field {
    /// Build a field from a raw value and a parser.
    ///
    /// The parser is never invoked when `raw` is `None`. A missing confidence
    /// defaults to `1.0` with a `manual` source.
    pub fn build<F>(
        field_name: impl Into<String>,
        raw: Option<RawValue>,
        parser: F,
        confidence: Option<Confidence>,
    ) -> Self
    where
        F: FnOnce(&str) -> Option<ParsedValue>,
    {
        let parsed = raw.as_ref().and_then(|value| parser(value.as_text().as_ref()));
        Self {
            field_name: field_name.into(),
            raw,
            parsed,
            confidence: confidence.unwrap_or_default(),
        }
    }
}
