//! The record seam between collection management and payload types.

use vitrine_types::{Status, User};

/// What a collection record exposes to [`super::FilteredCollection`].
///
/// The payload is otherwise opaque to the manager: only identity, the
/// designated search fields, and by-name mutation cross this boundary.
pub trait Record: Clone {
    /// Stable identifier, unique within the collection, never mutated.
    fn id(&self) -> u64;

    /// Whether the record matches a search term. `term` is guaranteed
    /// non-empty and lowercase; implementations substring-match it
    /// against their designated text fields.
    fn matches(&self, term: &str) -> bool;

    /// Set a named field from user-facing text. Unknown field names and
    /// unparseable values are ignored. Returns whether anything changed.
    fn set_field(&mut self, field: &str, value: &str) -> bool;
}

impl Record for User {
    fn id(&self) -> u64 {
        self.id
    }

    // Designated search fields for the user table: name, email, role.
    // Status is display-only and excluded from search.
    fn matches(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(term)
            || self.email.to_lowercase().contains(term)
            || self.role.to_lowercase().contains(term)
    }

    fn set_field(&mut self, field: &str, value: &str) -> bool {
        match field {
            "name" => {
                self.name = value.to_string();
                true
            }
            "email" => {
                self.email = value.to_string();
                true
            }
            "role" => {
                self.role = value.to_string();
                true
            }
            "status" => match Status::parse(value) {
                Some(status) => {
                    self.status = status;
                    true
                }
                None => false,
            },
            _ => false,
        }
    }
}
