//! Composite filter
//!
//! Combines the predicate library: OR within a dimension's selected
//! values, AND across active dimensions. With no active dimension the
//! full record set matches unchanged (identity filter).

use crate::predicate;
use uniscope_catalog::Snapshot;
use uniscope_core::{FilterSelection, InstitutionRecord};

/// Whether a record satisfies every active dimension of the selection
pub fn matches(record: &InstitutionRecord, selection: &FilterSelection) -> bool {
    predicate::matches_budget(record, &selection.budgets)
        && predicate::matches_selectivity(record, &selection.selectivity)
        && predicate::matches_test_policy(record, &selection.test_policies)
        && predicate::matches_major(record, selection)
        && predicate::matches_state(record, selection)
        && predicate::matches_search(record, selection)
}

/// Filter a snapshot, preserving load order
pub fn filter_snapshot<'a>(
    snapshot: &'a Snapshot,
    selection: &FilterSelection,
) -> Vec<&'a InstitutionRecord> {
    snapshot.iter().filter(|r| matches(r, selection)).collect()
}

/// Filter a snapshot down to matching record ids, preserving load order
pub fn filter_ids(snapshot: &Snapshot, selection: &FilterSelection) -> Vec<u32> {
    filter_snapshot(snapshot, selection)
        .into_iter()
        .map(|r| r.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uniscope_core::{BudgetBracket, SelectivityBand};

    fn snapshot() -> Snapshot {
        Snapshot::from_records(vec![
            InstitutionRecord::new(1, "Cheap Reach U")
                .with_state("CA")
                .with_tuition_out_of_state(15_000)
                .with_acceptance_rate(0.20),
            InstitutionRecord::new(2, "Pricey Safety College")
                .with_state("NY")
                .with_tuition_out_of_state(55_000)
                .with_acceptance_rate(0.80),
            InstitutionRecord::new(3, "Unknown Everything Institute"),
        ])
    }

    #[test]
    fn test_identity_selection_matches_full_store() {
        let snap = snapshot();
        let ids = filter_ids(&snap, &FilterSelection::new());
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_and_across_dimensions() {
        let snap = snapshot();
        // Budget alone matches record 1
        let budget_only = FilterSelection::new().with_budget(BudgetBracket::Under20k);
        assert_eq!(filter_ids(&snap, &budget_only), vec![1]);

        // Adding a non-matching second dimension removes it
        let both = budget_only.with_selectivity(SelectivityBand::Safety);
        assert!(filter_ids(&snap, &both).is_empty());
    }

    #[test]
    fn test_or_within_dimension() {
        let snap = snapshot();
        let selection = FilterSelection::new()
            .with_budget(BudgetBracket::Under20k)
            .with_budget(BudgetBracket::From40kTo60k);
        assert_eq!(filter_ids(&snap, &selection), vec![1, 2]);
    }

    #[test]
    fn test_sparse_record_survives_identity_but_fails_active_dimensions() {
        let snap = snapshot();
        assert!(filter_ids(&snap, &FilterSelection::new()).contains(&3));

        let selection = FilterSelection::new().with_budget(BudgetBracket::Under20k);
        assert!(!filter_ids(&snap, &selection).contains(&3));
    }

    #[test]
    fn test_search_intersects_with_structured_filters() {
        let snap = snapshot();
        let selection = FilterSelection::new()
            .with_budget(BudgetBracket::From40kTo60k)
            .with_search("Safety");
        assert_eq!(filter_ids(&snap, &selection), vec![2]);

        // Search matches but the structured dimension does not
        let selection = FilterSelection::new()
            .with_budget(BudgetBracket::Under20k)
            .with_search("Safety");
        assert!(filter_ids(&snap, &selection).is_empty());
    }
}
