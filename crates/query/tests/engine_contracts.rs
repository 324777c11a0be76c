//! Query engine contract tests
//!
//! Exercises the documented engine behaviors end to end: bracket and band
//! membership, the substring search gate, affinity scoring with hard
//! exclusion, pagination clamping, and the identity query.

use std::sync::Arc;
use uniscope_catalog::{CatalogStore, Snapshot};
use uniscope_core::{
    FilterSelection, InstitutionRecord, RawSelection, UserPreferenceProfile,
};
use uniscope_query::{
    CatalogQueryExt, PageRequest, MAJOR_FAMILY_POINTS, MAJOR_SPECIFIC_POINTS,
};

// ============================================================================
// Test Helpers
// ============================================================================

fn store(records: Vec<InstitutionRecord>) -> Arc<CatalogStore> {
    Arc::new(CatalogStore::with_snapshot(Snapshot::from_records(records)))
}

fn ids(response: &uniscope_query::QueryResponse) -> Vec<u32> {
    response.records.iter().map(|r| r.id).collect()
}

// ============================================================================
// Bracket and band membership
// ============================================================================

/// A mid-priced reach school is included by matching bracket+band filters
/// and excluded by a non-matching bracket
#[test]
fn test_bracket_and_band_membership() {
    let st = store(vec![InstitutionRecord::new(1, "Sample University")
        .with_tuition_out_of_state(45_000)
        .with_acceptance_rate(0.18)]);
    let engine = st.engine();

    let matching = FilterSelection::from(RawSelection {
        budgets: vec!["40to60".into()],
        selectivity: vec!["reach".into()],
        ..RawSelection::default()
    });
    assert_eq!(ids(&engine.query(&matching, None, PageRequest::first())), vec![1]);

    let excluded = FilterSelection::from(RawSelection {
        budgets: vec!["under20".into()],
        ..RawSelection::default()
    });
    assert!(ids(&engine.query(&excluded, None, PageRequest::first())).is_empty());
}

/// Unknown filter keys degrade the dimension instead of failing the query
#[test]
fn test_unknown_filter_keys_are_ignored() {
    let st = store(vec![InstitutionRecord::new(1, "Sample University")
        .with_tuition_out_of_state(45_000)]);
    let engine = st.engine();

    let selection = FilterSelection::from(RawSelection {
        budgets: vec!["40to60".into(), "made-up-bracket".into()],
        selectivity: vec!["lottery".into()],
        ..RawSelection::default()
    });
    // The unknown selectivity key leaves that dimension inactive; the
    // known budget key still applies
    assert_eq!(ids(&engine.query(&selection, None, PageRequest::first())), vec![1]);
}

// ============================================================================
// Substring search gate
// ============================================================================

/// Search is a literal substring over name/city/state: an acronym that
/// does not literally occur does not match
#[test]
fn test_search_is_literal_substring_only() {
    let st = store(vec![InstitutionRecord::new(
        1,
        "Massachusetts Institute of Technology",
    )
    .with_city("Cambridge")
    .with_state("MA")]);
    let engine = st.engine();

    let miss = FilterSelection::new().with_search("MIT");
    assert!(ids(&engine.query(&miss, None, PageRequest::first())).is_empty());

    let hit = FilterSelection::new().with_search("Massachusetts");
    assert_eq!(ids(&engine.query(&hit, None, PageRequest::first())), vec![1]);
}

/// Below three characters the search dimension is inactive
#[test]
fn test_short_search_is_inactive() {
    let st = store(vec![
        InstitutionRecord::new(1, "Alpha College"),
        InstitutionRecord::new(2, "Beta College"),
    ]);
    let engine = st.engine();
    let selection = FilterSelection::new().with_search("al");
    assert_eq!(
        engine.query(&selection, None, PageRequest::first()).total_matches,
        2
    );
}

// ============================================================================
// Affinity scoring and hard exclusion
// ============================================================================

/// Specific major beats family match beats mismatch, and mismatches are
/// excluded outright rather than ranked lower
#[test]
fn test_affinity_tiers_and_hard_exclusion() {
    let specific = InstitutionRecord::new(1, "Specific Tech")
        .with_major_families(vec!["STEM".into()])
        .with_majors_detailed(vec!["Engineering".into()]);
    let family = InstitutionRecord::new(2, "Family State")
        .with_major_families(vec!["Engineering".into()]);
    let neither = InstitutionRecord::new(3, "Unrelated Conservatory")
        .with_major_families(vec!["Music".into()]);

    let profile = UserPreferenceProfile::new().with_major("Engineering");
    assert_eq!(
        uniscope_query::affinity_score(&specific, &profile),
        MAJOR_SPECIFIC_POINTS
    );
    assert_eq!(
        uniscope_query::affinity_score(&family, &profile),
        MAJOR_FAMILY_POINTS
    );
    assert!(uniscope_query::affinity_score(&neither, &profile) < 0);

    let st = store(vec![specific, family, neither]);
    let response = st
        .engine()
        .query(&FilterSelection::new(), Some(&profile), PageRequest::first());
    // Specific outranks family; the mismatch never surfaces
    assert_eq!(ids(&response), vec![1, 2]);
}

// ============================================================================
// Pagination clamping
// ============================================================================

/// A page request far past the end returns an empty page with the true
/// page count, never an error
#[test]
fn test_out_of_range_page_is_clamped() {
    let st = store(
        (1..=25)
            .map(|i| InstitutionRecord::new(i, format!("School {}", i)))
            .collect(),
    );
    let response = st.engine().query(
        &FilterSelection::new(),
        None,
        PageRequest::new(99).with_size(10),
    );
    assert!(response.records.is_empty());
    assert_eq!(response.total_pages, 3);
    assert_eq!(response.page, 3);
    assert_eq!(response.total_matches, 25);
}

/// Page totals account for every match exactly once
#[test]
fn test_page_totals_cover_all_matches() {
    let st = store(
        (1..=23)
            .map(|i| InstitutionRecord::new(i, format!("School {}", i)))
            .collect(),
    );
    let engine = st.engine();
    let selection = FilterSelection::new();

    let first = engine.query(&selection, None, PageRequest::new(1).with_size(5));
    assert_eq!(first.total_pages, 5);

    let mut seen = vec![];
    for page in 1..=first.total_pages {
        seen.extend(ids(&engine.query(
            &selection,
            None,
            PageRequest::new(page).with_size(5),
        )));
    }
    assert_eq!(seen.len(), first.total_matches);
    assert_eq!(seen, (1..=23).collect::<Vec<u32>>());
}

// ============================================================================
// Identity query
// ============================================================================

/// No filters, no search, no profile: the full store in original order
#[test]
fn test_identity_query_returns_full_store_in_order() {
    let st = store(vec![
        InstitutionRecord::new(42, "Later School").with_applicants(90_000, 2023),
        InstitutionRecord::new(7, "Earlier School"),
    ]);
    let response = st
        .engine()
        .query(&FilterSelection::new(), None, PageRequest::first());
    // Applicant volume does not reorder the identity query
    assert_eq!(ids(&response), vec![42, 7]);
    assert_eq!(response.total_matches, 2);
    assert_eq!(response.total_pages, 1);
}

/// The engine treats an empty (failed-load) store as a result, not an error
#[test]
fn test_empty_store_is_not_an_error() {
    let st = Arc::new(CatalogStore::empty());
    let response = st
        .engine()
        .query(&FilterSelection::new(), None, PageRequest::first());
    assert_eq!(response.total_matches, 0);
    assert_eq!(response.total_pages, 1);
}
