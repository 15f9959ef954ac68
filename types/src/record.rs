//! Demo user records for the table page.
//!
//! Plain serde types shared between the state core and any front end.
//! The `id` field is assigned by the seed source and never mutated;
//! everything else is display payload.

use serde::{Deserialize, Serialize};

/// Activation state of a user row. Toggled from the table's actions column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Status {
    #[default]
    Active,
    Inactive,
}

impl Status {
    /// The opposite state, for the toggle-status action.
    pub fn toggled(self) -> Self {
        match self {
            Status::Active => Status::Inactive,
            Status::Inactive => Status::Active,
        }
    }

    /// Parse from user-facing text, case-insensitively.
    /// Returns `None` for anything that isn't a known state.
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("active") {
            Some(Status::Active)
        } else if s.eq_ignore_ascii_case("inactive") {
            Some(Status::Inactive)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Inactive => "Inactive",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the user table.
///
/// Role is kept as free text rather than an enum: the seed source owns the
/// vocabulary and the state core only ever substring-matches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique within the collection for its lifetime; never reassigned.
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub status: Status,
}

impl User {
    pub fn new(id: u64, name: &str, email: &str, role: &str, status: Status) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_toggled() {
        assert_eq!(Status::Active.toggled(), Status::Inactive);
        assert_eq!(Status::Inactive.toggled(), Status::Active);
        assert_eq!(Status::Active.toggled().toggled(), Status::Active);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(Status::parse("Active"), Some(Status::Active));
        assert_eq!(Status::parse("inactive"), Some(Status::Inactive));
        assert_eq!(Status::parse("INACTIVE"), Some(Status::Inactive));
        assert_eq!(Status::parse("retired"), None);
        assert_eq!(Status::parse(""), None);
    }

    #[test]
    fn test_user_toml_round_trip() {
        let toml = r#"
id = 1
name = "Sarah Johnson"
email = "sarah@example.com"
role = "Developer"
status = "Active"
"#;
        let user: User = toml::from_str(toml).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Sarah Johnson");
        assert_eq!(user.status, Status::Active);

        let out = toml::to_string(&user).unwrap();
        let back: User = toml::from_str(&out).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn test_user_status_defaults_to_active() {
        let toml = r#"
id = 9
name = "No Status"
email = "none@example.com"
role = "Tester"
"#;
        let user: User = toml::from_str(toml).unwrap();
        assert_eq!(user.status, Status::Active);
    }
}
