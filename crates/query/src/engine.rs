//! The catalog query engine
//!
//! `CatalogEngine::query` is the single entry point the presentation layer
//! calls: filter, then either the listing path (relevance or volume
//! ordering) or the recommendation path (affinity scoring, ranking, result
//! window), then pagination.
//!
//! The engine is pure over the snapshot it takes at query start: the same
//! selection, profile, and page against an unchanged store always produce
//! identical output, and no input ever makes it fail.

use crate::filter;
use crate::paginate::{paginate, Page, PageRequest};
use crate::ranker::{self, ScoredRecord};
use crate::relevance::{relevance_score, SearchQuery};
use crate::scorer::affinity_score;
use serde::Serialize;
use std::sync::Arc;
use uniscope_catalog::CatalogStore;
use uniscope_core::{FilterSelection, InstitutionRecord, UserPreferenceProfile};

/// Result of one query: a page of records plus result-set metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResponse {
    /// Records on the requested page, in result order
    pub records: Vec<InstitutionRecord>,

    /// Size of the result set the paginator sliced
    ///
    /// For listing queries this is the filtered match count; for
    /// recommendation queries it is the ranked set after hard exclusion
    /// and the result window.
    pub total_matches: usize,

    /// Total pages in the result set (at least 1)
    pub total_pages: usize,

    /// The page number actually served
    pub page: usize,
}

/// Query engine over a shared catalog store
#[derive(Debug, Clone)]
pub struct CatalogEngine {
    store: Arc<CatalogStore>,
}

impl CatalogEngine {
    /// Create an engine over the given store
    pub fn new(store: Arc<CatalogStore>) -> Self {
        CatalogEngine { store }
    }

    /// The underlying store
    pub fn store(&self) -> &Arc<CatalogStore> {
        &self.store
    }

    /// Execute one query
    ///
    /// With a profile the result is the ranked recommendation set; without
    /// one it is the filtered listing. Either way the response is paginated
    /// and the computation never fails.
    pub fn query(
        &self,
        selection: &FilterSelection,
        profile: Option<&UserPreferenceProfile>,
        page: PageRequest,
    ) -> QueryResponse {
        let snapshot = self.store.snapshot();
        let matched = filter::filter_snapshot(&snapshot, selection);
        tracing::debug!(
            matches = matched.len(),
            store = snapshot.len(),
            ranked = profile.is_some(),
            "catalog query"
        );

        let ordered: Vec<&InstitutionRecord> = match profile {
            Some(profile) => ranked_path(matched, profile),
            None => listing_path(matched, selection),
        };

        let sliced: Page<&InstitutionRecord> = paginate(&ordered, page);
        QueryResponse {
            records: sliced.items.into_iter().cloned().collect(),
            total_matches: ordered.len(),
            total_pages: sliced.total_pages,
            page: sliced.number,
        }
    }
}

/// Recommendation ordering: affinity score, rank, result window
fn ranked_path<'a>(
    matched: Vec<&'a InstitutionRecord>,
    profile: &UserPreferenceProfile,
) -> Vec<&'a InstitutionRecord> {
    let scored: Vec<ScoredRecord<'a>> = matched
        .into_iter()
        .map(|record| ScoredRecord {
            record,
            score: affinity_score(record, profile),
        })
        .collect();
    ranker::rank(scored, profile.has_major_preference())
        .into_iter()
        .map(|s| s.record)
        .collect()
}

/// Listing ordering
///
/// Search-active listings order by token relevance descending. Structured
/// filtering without search orders by applicant volume descending (unknown
/// volume last) as the recency proxy. The identity query keeps snapshot
/// order untouched.
fn listing_path<'a>(
    mut matched: Vec<&'a InstitutionRecord>,
    selection: &FilterSelection,
) -> Vec<&'a InstitutionRecord> {
    if selection.search_active() {
        let query = SearchQuery::parse(selection.search_text.trim());
        matched.sort_by_key(|r| (std::cmp::Reverse(relevance_score(r, &query)), r.id));
    } else if selection.has_structured_filters() {
        matched.sort_by(|a, b| {
            let volume = |r: &InstitutionRecord| std::cmp::Reverse(r.applicants_total);
            // Reverse(Option) puts Some above None and larger counts first
            volume(a)
                .cmp(&volume(b))
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.id.cmp(&b.id))
        });
    }
    matched
}
