//! Document field normalization module.

mod normalizer;
pub mod rules;
pub mod tables;

pub use normalizer::{normalize_extraction, normalize_raw, ExtractionNormalizer};
