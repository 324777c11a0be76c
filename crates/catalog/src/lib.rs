//! Record Store for the Uniscope catalog engine
//!
//! This crate provides:
//! - Snapshot: an immutable, deduplicated load of institution records
//! - Loader: JSON record/metrics sources with the empty-store failure policy
//! - CatalogStore: atomic snapshot replacement for concurrent readers
//!
//! The store never exposes partial state: readers always see either the
//! old or the new complete snapshot.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod loader;
pub mod snapshot;
pub mod store;

pub use loader::{
    load_applicant_metrics, load_institution_records, load_metrics_from_path,
    load_records_from_path, merge_applicant_metrics, ApplicantMetric,
};
pub use snapshot::Snapshot;
pub use store::CatalogStore;
