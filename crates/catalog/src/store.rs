//! Catalog store with atomic snapshot replacement
//!
//! Queries run against an `Arc<Snapshot>` taken at query start, so a
//! concurrent reload never tears a result set: readers see either the old
//! or the new complete snapshot.

use crate::loader;
use crate::snapshot::Snapshot;
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;
use uniscope_core::Result;

/// Shared, atomically replaceable catalog snapshot
#[derive(Debug, Default)]
pub struct CatalogStore {
    current: RwLock<Arc<Snapshot>>,
}

impl CatalogStore {
    /// Create a store holding an empty snapshot
    pub fn empty() -> Self {
        CatalogStore::default()
    }

    /// Create a store holding the given snapshot
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        CatalogStore {
            current: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// Take the current snapshot
    ///
    /// The returned `Arc` stays valid for the caller even if the store is
    /// reloaded concurrently.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.current.read().clone()
    }

    /// Replace the current snapshot wholesale
    pub fn replace(&self, snapshot: Snapshot) {
        tracing::info!(records = snapshot.len(), "installing catalog snapshot");
        *self.current.write() = Arc::new(snapshot);
    }

    /// Load records (and optionally applicant metrics) from disk and install
    ///
    /// On success returns the installed record count. On failure installs an
    /// EMPTY snapshot and returns the error, so callers can surface a
    /// non-fatal "no data" state while queries keep working against the
    /// empty store.
    ///
    /// A metrics source that fails to load is skipped with a warning rather
    /// than failing the whole reload; volumes simply stay absent.
    pub fn load_from_path(&self, records_path: &Path, metrics_path: Option<&Path>) -> Result<usize> {
        let mut records = match loader::load_records_from_path(records_path) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(
                    path = %records_path.display(),
                    error = %err,
                    "record source unavailable; installing empty snapshot"
                );
                self.replace(Snapshot::empty());
                return Err(err.into_unavailable());
            }
        };

        if let Some(metrics_path) = metrics_path {
            match loader::load_metrics_from_path(metrics_path) {
                Ok(metrics) => loader::merge_applicant_metrics(&mut records, &metrics),
                Err(err) => {
                    tracing::warn!(
                        path = %metrics_path.display(),
                        error = %err,
                        "metrics source unavailable; applicant volumes left absent"
                    );
                }
            }
        }

        let snapshot = Snapshot::from_records(records);
        let count = snapshot.len();
        self.replace(snapshot);
        Ok(count)
    }
}
