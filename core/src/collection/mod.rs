//! Filtered record collections
//!
//! This module provides:
//! - **`Record`**: The narrow interface a record exposes to the manager
//!   (identity, search matching, by-name field mutation)
//! - **`FilteredCollection`**: An owned, ordered record set with a live
//!   search projection, by-id mutation, and restore to a baseline snapshot
//!
//! The projection is always recomputed from the live set and the current
//! term, never incrementally patched, so it reflects every mutation by
//! construction. Mutations address records by id, never by position, so
//! filtering and mutation cannot produce index-shift bugs.

mod manager;
mod record;


pub use manager::FilteredCollection;
pub use record::Record;
