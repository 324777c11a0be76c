//! Query engine for the Uniscope catalog
//!
//! This crate provides:
//! - Predicate library: per-dimension boolean predicates
//! - Composite filter: OR within a dimension, AND across dimensions
//! - Relevance scorer for search-ordered listings
//! - Affinity scorer over user preference profiles
//! - Ranker with a fixed, total tie-break order and result window
//! - Paginator with clamped, error-free page requests
//! - CatalogEngine: the single query entry point
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use uniscope_catalog::{CatalogStore, Snapshot};
//! use uniscope_core::{FilterSelection, InstitutionRecord};
//! use uniscope_query::{CatalogQueryExt, PageRequest};
//!
//! let store = Arc::new(CatalogStore::with_snapshot(Snapshot::from_records(vec![
//!     InstitutionRecord::new(1, "Example State University"),
//! ])));
//! let response = store.engine().query(&FilterSelection::new(), None, PageRequest::first());
//! assert_eq!(response.total_matches, 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod filter;
pub mod paginate;
pub mod predicate;
pub mod ranker;
pub mod relevance;
pub mod scorer;

use std::sync::Arc;
use uniscope_catalog::CatalogStore;

// Re-export commonly used types
pub use engine::{CatalogEngine, QueryResponse};
pub use filter::{filter_ids, filter_snapshot, matches};
pub use paginate::{paginate, Page, PageRequest, DEFAULT_PAGE_SIZE};
pub use ranker::{rank, ScoredRecord, RESULT_WINDOW};
pub use relevance::{relevance_score, SearchQuery};
pub use scorer::{
    affinity_score, CONTROL_MATCH_POINTS, MAJOR_FAMILY_POINTS, MAJOR_MISMATCH_PENALTY,
    MAJOR_SPECIFIC_POINTS, SIZE_MATCH_POINTS, STATE_MATCH_POINTS,
};

// ============================================================================
// Store Extension
// ============================================================================

/// Extension trait adding the `.engine()` accessor to `Arc<CatalogStore>`
///
/// # Example
///
/// ```ignore
/// use uniscope_query::CatalogQueryExt;
///
/// let response = store.engine().query(&selection, None, PageRequest::first());
/// ```
pub trait CatalogQueryExt {
    /// Get a query engine over this store
    fn engine(&self) -> CatalogEngine;
}

impl CatalogQueryExt for Arc<CatalogStore> {
    fn engine(&self) -> CatalogEngine {
        CatalogEngine::new(Arc::clone(self))
    }
}
