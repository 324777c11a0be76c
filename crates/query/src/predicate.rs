//! Predicate library
//!
//! One boolean predicate per filter dimension. Every predicate treats an
//! empty selected set as "dimension inactive" and matches unconditionally;
//! an active dimension requires at least one selected value to match (OR
//! within the dimension).
//!
//! Null handling is uniform: a record missing the attribute an active
//! dimension filters on fails that dimension. Missing is never zero.

use uniscope_core::{
    BudgetBracket, FilterSelection, InstitutionRecord, SelectivityBand, TestPolicyBucket,
};

/// Budget predicate over reference tuition
///
/// A record with no reported tuition fails whenever any bracket is active.
pub fn matches_budget(record: &InstitutionRecord, brackets: &[BudgetBracket]) -> bool {
    if brackets.is_empty() {
        return true;
    }
    match record.reference_tuition() {
        Some(tuition) => brackets.iter().any(|b| b.contains(tuition)),
        None => false,
    }
}

/// Selectivity predicate over the derived acceptance band
pub fn matches_selectivity(record: &InstitutionRecord, bands: &[SelectivityBand]) -> bool {
    if bands.is_empty() {
        return true;
    }
    match record.selectivity_band() {
        Some(band) => bands.contains(&band),
        None => false,
    }
}

/// Testing-policy predicate, substring-matched on the raw policy text
pub fn matches_test_policy(record: &InstitutionRecord, buckets: &[TestPolicyBucket]) -> bool {
    if buckets.is_empty() {
        return true;
    }
    match record.test_policy.as_deref() {
        Some(raw) => buckets.iter().any(|b| b.matches(raw)),
        None => false,
    }
}

/// Major predicate: any record family in the selected set
///
/// Selected majors are normalized at selection construction; record
/// families are normalized here for comparison.
pub fn matches_major(record: &InstitutionRecord, selection: &FilterSelection) -> bool {
    if selection.majors.is_empty() {
        return true;
    }
    record
        .major_families
        .iter()
        .any(|family| selection.majors.contains(&uniscope_core::normalize(family)))
}

/// State predicate: case-insensitive exact match on the state code
pub fn matches_state(record: &InstitutionRecord, selection: &FilterSelection) -> bool {
    if selection.states.is_empty() {
        return true;
    }
    match record.state_code.as_deref() {
        Some(code) => selection.states.contains(&code.trim().to_ascii_uppercase()),
        None => false,
    }
}

/// Free-text predicate: case-insensitive substring over name, city, state
///
/// Inactive (matches everything) below the minimum search length. This is
/// a literal substring gate: "MIT" does not match "Massachusetts Institute
/// of Technology"; relevance ordering is a separate concern.
pub fn matches_search(record: &InstitutionRecord, selection: &FilterSelection) -> bool {
    if !selection.search_active() {
        return true;
    }
    let needle = selection.search_text.trim().to_lowercase();
    record.search_haystack().contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> InstitutionRecord {
        InstitutionRecord::new(1, "Massachusetts Institute of Technology")
            .with_city("Cambridge")
            .with_state("MA")
            .with_tuition_out_of_state(45_000)
            .with_acceptance_rate(0.18)
            .with_test_policy("Test optional")
            .with_major_families(vec!["Engineering".into(), "Computer Science".into()])
    }

    // ========================================
    // Budget
    // ========================================

    #[test]
    fn test_budget_inactive_matches_all() {
        assert!(matches_budget(&record(), &[]));
        assert!(matches_budget(&InstitutionRecord::new(1, "No Tuition"), &[]));
    }

    #[test]
    fn test_budget_active_matches_bracket() {
        assert!(matches_budget(&record(), &[BudgetBracket::From40kTo60k]));
        assert!(!matches_budget(&record(), &[BudgetBracket::Under20k]));
    }

    #[test]
    fn test_budget_or_within_dimension() {
        assert!(matches_budget(
            &record(),
            &[BudgetBracket::Under20k, BudgetBracket::From40kTo60k]
        ));
    }

    #[test]
    fn test_budget_null_tuition_fails_when_active() {
        let r = InstitutionRecord::new(1, "No Tuition");
        assert!(!matches_budget(&r, &[BudgetBracket::Under20k]));
    }

    // ========================================
    // Selectivity
    // ========================================

    #[test]
    fn test_selectivity_band_membership() {
        assert!(matches_selectivity(&record(), &[SelectivityBand::Reach]));
        assert!(!matches_selectivity(&record(), &[SelectivityBand::Safety]));
        assert!(matches_selectivity(&record(), &[]));
    }

    #[test]
    fn test_selectivity_unknown_rate_fails_when_active() {
        let r = InstitutionRecord::new(1, "Unknown Rate");
        assert!(!matches_selectivity(&r, &[SelectivityBand::Safety]));
        assert!(matches_selectivity(&r, &[]));
    }

    // ========================================
    // Test policy
    // ========================================

    #[test]
    fn test_policy_substring_buckets() {
        assert!(matches_test_policy(&record(), &[TestPolicyBucket::Optional]));
        assert!(!matches_test_policy(&record(), &[TestPolicyBucket::Required]));
    }

    #[test]
    fn test_policy_missing_fails_when_active() {
        let r = InstitutionRecord::new(1, "No Policy");
        assert!(!matches_test_policy(&r, &[TestPolicyBucket::Optional]));
        assert!(matches_test_policy(&r, &[]));
    }

    // ========================================
    // Major
    // ========================================

    #[test]
    fn test_major_membership_not_exact_match() {
        let selection = FilterSelection::new().with_major("engineering");
        assert!(matches_major(&record(), &selection));

        let selection = FilterSelection::new().with_major("History");
        assert!(!matches_major(&record(), &selection));
    }

    #[test]
    fn test_major_normalized_comparison() {
        let selection = FilterSelection::new().with_major("COMPUTER  SCIENCE");
        assert!(matches_major(&record(), &selection));
    }

    // ========================================
    // State
    // ========================================

    #[test]
    fn test_state_case_insensitive_exact() {
        let selection = FilterSelection::new().with_state("ma");
        assert!(matches_state(&record(), &selection));

        let selection = FilterSelection::new().with_state("CA");
        assert!(!matches_state(&record(), &selection));
    }

    #[test]
    fn test_state_missing_fails_when_active() {
        let r = InstitutionRecord::new(1, "Stateless");
        let selection = FilterSelection::new().with_state("MA");
        assert!(!matches_state(&r, &selection));
    }

    // ========================================
    // Search
    // ========================================

    #[test]
    fn test_search_below_threshold_is_inactive() {
        let selection = FilterSelection::new().with_search("MI");
        assert!(matches_search(&record(), &selection));
    }

    #[test]
    fn test_search_literal_substring_only() {
        // "MIT" does not literally occur in the name/city/state
        let selection = FilterSelection::new().with_search("MIT");
        assert!(!matches_search(&record(), &selection));

        let selection = FilterSelection::new().with_search("Massachusetts");
        assert!(matches_search(&record(), &selection));
    }

    #[test]
    fn test_search_matches_city_and_state() {
        let selection = FilterSelection::new().with_search("cambridge");
        assert!(matches_search(&record(), &selection));
    }
}
