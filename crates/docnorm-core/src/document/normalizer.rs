//! Extraction normalization: maps a raw OCR field set into one typed,
//! confidence-scored result.

use std::collections::{BTreeMap, HashMap};

use chrono::Utc;
use tracing::{debug, info};

use crate::confidence::aggregate_confidence;
use crate::error::Result;
use crate::models::extraction::{DocumentType, NormalizedExtraction, RawExtraction, RawField};
use crate::models::field::{Confidence, Field};

use super::tables::{kind_for, FieldKind};

/// Orchestrator over the per-document field tables.
///
/// For each raw field it selects the bound parser (pass-through for fields
/// absent from the table), builds one immutable [`Field`], and folds all
/// field confidences into the overall score. A pure function of its inputs
/// apart from the extraction timestamp.
pub struct ExtractionNormalizer;

impl ExtractionNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalize one raw field map for the given document type.
    pub fn normalize(
        &self,
        document_type: DocumentType,
        raw_fields: &HashMap<String, RawField>,
    ) -> NormalizedExtraction {
        info!(
            "normalizing {} raw fields for document type {}",
            raw_fields.len(),
            document_type
        );

        let mut fields = BTreeMap::new();
        let mut scores: Vec<(FieldKind, f32)> = Vec::with_capacity(raw_fields.len());

        for (name, raw_field) in raw_fields {
            let kind = kind_for(document_type, name);
            let confidence = raw_field.confidence.map(Confidence::ocr);
            let field = Field::build(
                name.clone(),
                raw_field.value.clone(),
                |text| kind.parse(text),
                confidence,
            );

            if field.raw.is_some() && field.parsed.is_none() {
                debug!("field {} did not parse as {:?}", name, kind);
            }

            scores.push((kind, field.confidence.value));
            fields.insert(name.clone(), field);
        }

        let overall_confidence = aggregate_confidence(scores);
        debug!("overall confidence {:.2}", overall_confidence);

        NormalizedExtraction {
            document_type,
            fields,
            overall_confidence,
            extracted_at: Utc::now(),
        }
    }
}

impl Default for ExtractionNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize one raw field map for the given document type.
pub fn normalize_extraction(
    document_type: DocumentType,
    raw_fields: &HashMap<String, RawField>,
) -> NormalizedExtraction {
    ExtractionNormalizer::new().normalize(document_type, raw_fields)
}

/// Normalize a full provider payload, resolving its document-type tag first.
/// An unregistered tag is the one construction-time error in this library.
pub fn normalize_raw(payload: &RawExtraction) -> Result<NormalizedExtraction> {
    let document_type = payload.document_type()?;
    Ok(normalize_extraction(document_type, &payload.fields))
}
