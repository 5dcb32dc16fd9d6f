//! Data models for normalized extractions.

pub mod extraction;
pub mod field;

pub use extraction::{DocumentType, NormalizedExtraction, RawExtraction, RawField};
pub use field::{Confidence, ConfidenceSource, Field, ParsedAddress, ParsedName, ParsedValue, RawValue};
