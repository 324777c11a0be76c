//! Uniscope - In-memory catalog query engine for university exploration
//!
//! Uniscope serves both the explore/search view and the recommendation
//! dashboard of a university-exploration product from one pure function
//! set: deterministic multi-criterion filtering over an immutable record
//! snapshot, preference-profile scoring with ranked recommendations, and
//! clamped pagination.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use uniscope::{
//!     CatalogQueryExt, CatalogStore, FilterSelection, InstitutionRecord, PageRequest, Snapshot,
//! };
//!
//! // Build a store (production code loads this from the JSON snapshot)
//! let store = Arc::new(CatalogStore::with_snapshot(Snapshot::from_records(vec![
//!     InstitutionRecord::new(1, "Example State University")
//!         .with_state("CA")
//!         .with_tuition_out_of_state(28_000),
//! ])));
//!
//! // Query it
//! let selection = FilterSelection::new().with_search("example");
//! let response = store.engine().query(&selection, None, PageRequest::first());
//! assert_eq!(response.total_matches, 1);
//! ```
//!
//! # Architecture
//!
//! - `uniscope-core`: record model, filter/preference types, text helpers
//! - `uniscope-catalog`: immutable snapshots, loaders, the atomic store
//! - `uniscope-query`: predicates, filter, scorers, ranker, paginator,
//!   and the [`CatalogEngine`] entry point
//!
//! The engine never mutates records and never fails for any selection,
//! profile, or page input; a missing data source degrades to an empty
//! store rather than an error at query time.

// Re-export the public API
pub use uniscope_catalog::{CatalogStore, Snapshot};
pub use uniscope_core::{
    BudgetBracket, ControlPreference, ControlType, Error, FilterSelection, InstitutionRecord,
    RawSelection, Result, SelectivityBand, SizeBucket, TestPolicyBucket, UserPreferenceProfile,
};
pub use uniscope_query::{
    CatalogEngine, CatalogQueryExt, Page, PageRequest, QueryResponse, DEFAULT_PAGE_SIZE,
    RESULT_WINDOW,
};
