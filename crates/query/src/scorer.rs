//! Preference affinity scoring
//!
//! Assigns an integer affinity score to a record given a user preference
//! profile. The scheme is additive and evaluated independently per
//! dimension; point values live here as named constants so the heuristic
//! can be tuned without touching control flow.
//!
//! The major mismatch penalty is deliberately asymmetric: a record that
//! cannot plausibly serve an expressed major preference scores below zero
//! so the ranker can exclude it outright instead of merely demoting it.

use uniscope_core::{normalize, ControlPreference, InstitutionRecord, UserPreferenceProfile};

/// Points for a fine-grained (specific) major match
pub const MAJOR_SPECIFIC_POINTS: i32 = 5;

/// Points for a coarse major-family match
pub const MAJOR_FAMILY_POINTS: i32 = 2;

/// Penalty when a major preference is expressed and nothing matches
pub const MAJOR_MISMATCH_PENALTY: i32 = -5;

/// Points for a preferred-state match
pub const STATE_MATCH_POINTS: i32 = 1;

/// Points for a preferred-size match
pub const SIZE_MATCH_POINTS: i32 = 1;

/// Points per matching preferred control type
pub const CONTROL_MATCH_POINTS: i32 = 1;

/// Score a record against a preference profile
///
/// Every dimension with no expressed preference contributes exactly 0, so
/// an empty profile scores every record 0.
pub fn affinity_score(record: &InstitutionRecord, profile: &UserPreferenceProfile) -> i32 {
    major_affinity(record, profile)
        + state_affinity(record, profile)
        + size_affinity(record, profile)
        + control_affinity(record, profile)
}

fn major_affinity(record: &InstitutionRecord, profile: &UserPreferenceProfile) -> i32 {
    if profile.preferred_majors.is_empty() {
        return 0;
    }
    let specific = record
        .majors_detailed
        .iter()
        .any(|m| profile.preferred_majors.contains(&normalize(m)));
    if specific {
        return MAJOR_SPECIFIC_POINTS;
    }
    let family = record
        .major_families
        .iter()
        .any(|f| profile.preferred_majors.contains(&normalize(f)));
    if family {
        MAJOR_FAMILY_POINTS
    } else {
        MAJOR_MISMATCH_PENALTY
    }
}

fn state_affinity(record: &InstitutionRecord, profile: &UserPreferenceProfile) -> i32 {
    if profile.preferred_states.is_empty() {
        return 0;
    }
    let matched = record
        .state_code
        .as_deref()
        .map(|code| profile.preferred_states.contains(&code.trim().to_ascii_uppercase()))
        .unwrap_or(false);
    if matched {
        STATE_MATCH_POINTS
    } else {
        0
    }
}

fn size_affinity(record: &InstitutionRecord, profile: &UserPreferenceProfile) -> i32 {
    match (profile.preferred_size, record.size_bucket()) {
        (Some(preferred), Some(actual)) if preferred == actual => SIZE_MATCH_POINTS,
        _ => 0,
    }
}

fn control_affinity(record: &InstitutionRecord, profile: &UserPreferenceProfile) -> i32 {
    if profile.preferred_controls.is_empty() {
        return 0;
    }
    let control = record.control_type();
    profile
        .preferred_controls
        .iter()
        .filter(|preference| match preference {
            ControlPreference::Public => control == uniscope_core::ControlType::Public,
            ControlPreference::Private => control.is_private(),
            ControlPreference::LiberalArts => is_liberal_arts(record),
        })
        .count() as i32
        * CONTROL_MATCH_POINTS
}

/// Liberal-arts heuristic over the Carnegie classification
///
/// The source data has no explicit liberal-arts flag; Carnegie strings
/// like "Baccalaureate Colleges: Arts & Sciences Focus" are the best
/// available signal.
fn is_liberal_arts(record: &InstitutionRecord) -> bool {
    record
        .carnegie
        .as_deref()
        .map(|c| {
            let lower = c.to_ascii_lowercase();
            lower.contains("baccalaureate") || lower.contains("arts")
        })
        .unwrap_or(false)
}
