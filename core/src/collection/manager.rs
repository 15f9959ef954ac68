//! Owned record set with a live filtered projection.
//!
//! The manager captures the initial record set as an immutable baseline at
//! construction. Toggles and deletions act on the live copy only; `reset`
//! swaps in a fresh copy of the baseline, which is the single restore
//! primitive (there is no per-record undo).

use super::record::Record;

/// Mutable record collection with search-term filtering and baseline restore.
///
/// Pure storage plus projection; intent dispatch and rendering live in the
/// view layer, which re-reads [`filtered`](Self::filtered) after every
/// state-changing call.
#[derive(Debug, Clone)]
pub struct FilteredCollection<R: Record> {
    /// Live working set, in insertion order.
    records: Vec<R>,
    /// Snapshot taken at construction; restore target, never mutated.
    baseline: Vec<R>,
    /// Current filter, stored lowercased. Empty matches everything.
    search_term: String,
}

impl<R: Record> FilteredCollection<R> {
    /// Create a collection from its initial record set. The set is also
    /// captured as the restore baseline.
    pub fn new(records: Vec<R>) -> Self {
        Self {
            baseline: records.clone(),
            records,
            search_term: String::new(),
        }
    }

    // --- Projection ---

    /// Update the active filter. Matching is case-insensitive.
    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_lowercase();
    }

    /// The active filter, lowercased.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Live records matching the current term, in live-collection order.
    ///
    /// Recomputed on every call so the projection always reflects the
    /// current live set intersected with the current term.
    pub fn filtered(&self) -> impl Iterator<Item = &R> {
        self.records
            .iter()
            .filter(|r| self.search_term.is_empty() || r.matches(&self.search_term))
    }

    // --- Mutation ---

    /// Apply a closure to the record with `id`. Silent no-op when the id is
    /// absent, so acting on a stale rendering never raises.
    pub fn update<F>(&mut self, id: u64, f: F)
    where
        F: FnOnce(&mut R),
    {
        if let Some(record) = self.records.iter_mut().find(|r| r.id() == id) {
            f(record);
        }
    }

    /// Set a named field on the record with `id` from user-facing text.
    /// Unknown ids, unknown fields, and unparseable values are all no-ops.
    pub fn update_field(&mut self, id: u64, field: &str, value: &str) {
        if let Some(record) = self.records.iter_mut().find(|r| r.id() == id) {
            if record.set_field(field, value) {
                tracing::debug!(id, field, "record field updated");
            }
        }
    }

    /// Remove the record with `id` from the live set. Silent no-op when
    /// absent. Permanent for this working set until [`reset`](Self::reset).
    pub fn remove(&mut self, id: u64) {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        if self.records.len() < before {
            tracing::debug!(id, "record removed");
        }
    }

    /// Replace the live set with a fresh copy of the baseline, discarding
    /// every toggle and deletion since construction.
    pub fn reset(&mut self) {
        self.records = self.baseline.clone();
        tracing::debug!(count = self.records.len(), "collection reset to baseline");
    }

    // --- Accessors ---

    /// The full live set, unfiltered, in order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// The immutable baseline captured at construction.
    pub fn baseline(&self) -> &[R] {
        &self.baseline
    }

    pub fn get(&self, id: u64) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.records.iter().any(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
