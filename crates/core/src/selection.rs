//! Per-query filter selection
//!
//! A `FilterSelection` is constructed fresh for every query and discarded
//! afterwards. An empty selected set for a dimension means the dimension is
//! inactive (identity), never "match nothing".
//!
//! The presentation layer submits untyped string keys; `RawSelection`
//! captures that shape and converts leniently: unrecognized keys are
//! dropped per-value with a debug event rather than failing the query.

use crate::bands::{BudgetBracket, SelectivityBand, TestPolicyBucket};
use crate::text;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Minimum search length (in characters) before free-text matching activates
///
/// Below this threshold search is a no-op, to avoid matching on noise.
pub const MIN_SEARCH_LEN: usize = 3;

// ============================================================================
// FilterSelection
// ============================================================================

/// Typed filter state for one query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    /// Selected budget brackets (OR within the dimension)
    pub budgets: Vec<BudgetBracket>,

    /// Selected selectivity bands
    pub selectivity: Vec<SelectivityBand>,

    /// Selected testing-policy buckets
    pub test_policies: Vec<TestPolicyBucket>,

    /// Selected major family labels, normalized
    pub majors: HashSet<String>,

    /// Selected state codes, uppercased
    pub states: HashSet<String>,

    /// Free-text search input, verbatim
    pub search_text: String,
}

impl FilterSelection {
    /// Create an empty (identity) selection
    pub fn new() -> Self {
        FilterSelection::default()
    }

    /// Builder: add a budget bracket
    pub fn with_budget(mut self, bracket: BudgetBracket) -> Self {
        self.budgets.push(bracket);
        self
    }

    /// Builder: add a selectivity band
    pub fn with_selectivity(mut self, band: SelectivityBand) -> Self {
        self.selectivity.push(band);
        self
    }

    /// Builder: add a testing-policy bucket
    pub fn with_test_policy(mut self, bucket: TestPolicyBucket) -> Self {
        self.test_policies.push(bucket);
        self
    }

    /// Builder: add a major family label (normalized on insert)
    pub fn with_major(mut self, major: &str) -> Self {
        self.majors.insert(text::normalize(major));
        self
    }

    /// Builder: add a state code (uppercased on insert)
    pub fn with_state(mut self, state: &str) -> Self {
        self.states.insert(state.trim().to_ascii_uppercase());
        self
    }

    /// Builder: set the search text
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search_text = search.into();
        self
    }

    /// Whether free-text search is active (trimmed length at threshold)
    pub fn search_active(&self) -> bool {
        self.search_text.trim().chars().count() >= MIN_SEARCH_LEN
    }

    /// Whether any structured (non-search) dimension is active
    pub fn has_structured_filters(&self) -> bool {
        !self.budgets.is_empty()
            || !self.selectivity.is_empty()
            || !self.test_policies.is_empty()
            || !self.majors.is_empty()
            || !self.states.is_empty()
    }

    /// Whether this selection is the identity (matches the full store)
    pub fn is_identity(&self) -> bool {
        !self.search_active() && !self.has_structured_filters()
    }
}

// ============================================================================
// RawSelection
// ============================================================================

/// Untyped filter selection as the presentation layer submits it
///
/// String keys follow the upstream filter widget values ("under20",
/// "reach", "optional", ...). Conversion to `FilterSelection` is lenient:
/// unknown keys never match anything, so they are dropped per-value and
/// the rest of the query proceeds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSelection {
    /// Budget bracket keys
    #[serde(default)]
    pub budgets: Vec<String>,

    /// Selectivity band keys
    #[serde(default)]
    pub selectivity: Vec<String>,

    /// Testing-policy keys
    #[serde(default)]
    pub test_policies: Vec<String>,

    /// Major family labels
    #[serde(default)]
    pub majors: Vec<String>,

    /// State codes
    #[serde(default)]
    pub states: Vec<String>,

    /// Free-text search input
    #[serde(default)]
    pub search: String,
}

impl From<&RawSelection> for FilterSelection {
    fn from(raw: &RawSelection) -> Self {
        let mut selection = FilterSelection::new().with_search(raw.search.clone());

        for key in &raw.budgets {
            match BudgetBracket::parse_key(key) {
                Some(bracket) => selection.budgets.push(bracket),
                None => {
                    tracing::debug!(%key, dimension = "budget", "ignoring unrecognized filter key")
                }
            }
        }
        for key in &raw.selectivity {
            match SelectivityBand::parse_key(key) {
                Some(band) => selection.selectivity.push(band),
                None => {
                    tracing::debug!(%key, dimension = "selectivity", "ignoring unrecognized filter key")
                }
            }
        }
        for key in &raw.test_policies {
            match TestPolicyBucket::parse_key(key) {
                Some(bucket) => selection.test_policies.push(bucket),
                None => {
                    tracing::debug!(%key, dimension = "test_policy", "ignoring unrecognized filter key")
                }
            }
        }
        for major in &raw.majors {
            let normalized = text::normalize(major);
            if !normalized.is_empty() {
                selection.majors.insert(normalized);
            }
        }
        for state in &raw.states {
            let code = state.trim().to_ascii_uppercase();
            if !code.is_empty() {
                selection.states.insert(code);
            }
        }

        selection
    }
}

impl From<RawSelection> for FilterSelection {
    fn from(raw: RawSelection) -> Self {
        FilterSelection::from(&raw)
    }
}
