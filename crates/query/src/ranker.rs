//! Ranking of scored records
//!
//! Orders scored, filtered records into a total order and truncates to the
//! recommendation window. The order is fully deterministic: score
//! descending, then selectivity band in a fixed attainability order, then
//! reference tuition ascending with unknown last, then id.

use uniscope_core::{InstitutionRecord, SelectivityBand};

/// Maximum number of records a ranked result set retains
pub const RESULT_WINDOW: usize = 24;

/// A record paired with its affinity score
#[derive(Debug, Clone, Copy)]
pub struct ScoredRecord<'a> {
    /// The underlying record
    pub record: &'a InstitutionRecord,
    /// Affinity score from the preference scorer
    pub score: i32,
}

/// Fixed tie-break position of a selectivity band (lower sorts first)
///
/// Realistic, attainable bands outrank long shots when scores are equal:
/// Target < Balanced < Safety < Reach < Selective < Unknown. Unknown
/// acceptance rate sorts last, after every known band.
fn band_rank(band: Option<SelectivityBand>) -> u8 {
    match band {
        Some(SelectivityBand::Target) => 0,
        Some(SelectivityBand::Balanced) => 1,
        Some(SelectivityBand::Safety) => 2,
        Some(SelectivityBand::Reach) => 3,
        Some(SelectivityBand::Selective) => 4,
        None => 5,
    }
}

/// Tuition tie-break key: unknown tuition sorts after every known amount
fn tuition_rank(record: &InstitutionRecord) -> u64 {
    record
        .reference_tuition()
        .map(u64::from)
        .unwrap_or(u64::MAX)
}

/// Rank scored records into the result window
///
/// When `major_preference_active` is set, records with a negative score
/// are dropped outright (hard exclusion) before ordering; a mismatch on an
/// expressed major preference must never surface as a recommendation.
pub fn rank(mut scored: Vec<ScoredRecord<'_>>, major_preference_active: bool) -> Vec<ScoredRecord<'_>> {
    if major_preference_active {
        scored.retain(|s| s.score >= 0);
    }

    scored.sort_by_key(|s| {
        (
            std::cmp::Reverse(s.score),
            band_rank(s.record.selectivity_band()),
            tuition_rank(s.record),
            s.record.id,
        )
    });

    scored.truncate(RESULT_WINDOW);
    scored
}
