//! Aggregate confidence scoring across extracted fields.

use crate::document::tables::FieldKind;

/// Clamp a raw confidence estimate into `[0, 1]`.
///
/// Providers occasionally report scores slightly outside the unit interval;
/// those are pulled back in rather than rejected.
pub fn clamp_confidence(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

/// Weighted mean of per-field confidence scores.
///
/// Each score is clamped before aggregation and weighted by its field kind
/// (see [`FieldKind::weight`]). Fields not present contribute nothing; empty
/// input yields `0.0`.
pub fn aggregate_confidence<I>(scores: I) -> f32
where
    I: IntoIterator<Item = (FieldKind, f32)>,
{
    let mut weighted = 0.0f32;
    let mut total_weight = 0.0f32;

    for (kind, score) in scores {
        let weight = kind.weight();
        weighted += weight * clamp_confidence(score);
        total_weight += weight;
    }

    if total_weight == 0.0 {
        0.0
    } else {
        weighted / total_weight
    }
}
