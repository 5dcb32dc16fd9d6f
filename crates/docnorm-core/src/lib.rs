//! Core library for normalizing OCR output from loan-application documents.
//!
//! This crate provides:
//! - Format-tolerant scalar parsers (currency, dates, percentages, SSN and
//!   account-number masking)
//! - Structured text parsers for personal names and postal addresses
//! - Per-document-type field tables binding raw field names to parsers
//! - Confidence aggregation across extracted fields
//!
//! The entry point is [`normalize_extraction`]: given a document type and the
//! raw field map delivered by a document-intelligence provider, it produces
//! one immutable [`NormalizedExtraction`] with typed parsed values and an
//! overall confidence score. Every component is a pure function of its
//! arguments; unparseable input becomes a `None` parsed value, never an error.

pub mod confidence;
pub mod document;
pub mod error;
pub mod models;

pub use error::{NormalizeError, Result};
pub use confidence::{aggregate_confidence, clamp_confidence};
pub use models::extraction::{DocumentType, NormalizedExtraction, RawExtraction, RawField};
pub use models::field::{
    Confidence, ConfidenceSource, Field, ParsedAddress, ParsedName, ParsedValue, RawValue,
};
pub use document::{normalize_extraction, normalize_raw, ExtractionNormalizer};
pub use document::tables::FieldKind;
pub use document::rules::{
    account_last4, format_currency, format_ssn, mask_account, mask_ssn, normalize_state,
    parse_address, parse_currency, parse_date, parse_name, parse_percentage, validate_ssn,
};
