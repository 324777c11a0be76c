//! Immutable catalog snapshot
//!
//! One `Snapshot` is one complete load of the Record Store. Construction
//! deduplicates by record id (first occurrence wins) and builds an id
//! index; after that the snapshot is never mutated, only replaced
//! wholesale by the store.

use rustc_hash::FxHashMap;
use uniscope_core::InstitutionRecord;

/// An immutable, deduplicated sequence of institution records
///
/// Iteration order is load order, which downstream consumers treat as the
/// "original order" for unfiltered browsing.
#[derive(Debug, Default)]
pub struct Snapshot {
    records: Vec<InstitutionRecord>,
    index: FxHashMap<u32, usize>,
}

impl Snapshot {
    /// Create an empty snapshot
    pub fn empty() -> Self {
        Snapshot::default()
    }

    /// Build a snapshot from loaded records
    ///
    /// Records with a duplicate id are dropped; the first occurrence wins.
    /// This preserves the invariant that `id` is unique for the lifetime
    /// of the snapshot.
    pub fn from_records(records: Vec<InstitutionRecord>) -> Self {
        let mut unique = Vec::with_capacity(records.len());
        let mut index = FxHashMap::default();
        for record in records {
            if index.contains_key(&record.id) {
                tracing::debug!(id = record.id, "dropping duplicate record id");
                continue;
            }
            index.insert(record.id, unique.len());
            unique.push(record);
        }
        Snapshot {
            records: unique,
            index,
        }
    }

    /// Look up a record by id
    pub fn get(&self, id: u32) -> Option<&InstitutionRecord> {
        self.index.get(&id).map(|&i| &self.records[i])
    }

    /// All records, in load order
    pub fn records(&self) -> &[InstitutionRecord] {
        &self.records
    }

    /// Iterate records in load order
    pub fn iter(&self) -> impl Iterator<Item = &InstitutionRecord> {
        self.records.iter()
    }

    /// Number of records in the snapshot
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the snapshot holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
