//! Error types for the docnorm-core library.

use thiserror::Error;

/// Main error type for the docnorm library.
///
/// Parse failures are not errors: every field parser absorbs malformed input
/// into a `None` parsed value. The only fallible operation is constructing a
/// [`DocumentType`](crate::models::extraction::DocumentType) from an
/// unregistered string.
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// The document-type tag is not in the registered set.
    #[error("unknown document type: {0}")]
    UnknownDocumentType(String),
}

/// Result type for the docnorm library.
pub type Result<T> = std::result::Result<T, NormalizeError>;
