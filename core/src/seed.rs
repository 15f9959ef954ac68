//! Seed data loading for the user table
//!
//! The collection manager is constructed from an initial ordered record set
//! supplied by the caller. That set can come from a TOML seed file
//! (user-editable) or from the built-in demo roster. Whatever is supplied
//! becomes the restore baseline.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use vitrine_types::{Status, User};

/// A seed file: a list of `[[user]]` tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default, rename = "user")]
    pub users: Vec<User>,
}

/// Errors that can occur while loading a seed file
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// Record ids must be unique for the life of the collection; a seed
    /// file that violates that is rejected up front.
    #[error("duplicate user id {id} in {path:?}")]
    DuplicateId { path: PathBuf, id: u64 },
}

/// Load seed users from a TOML file, preserving file order.
pub fn load_file(path: &Path) -> Result<Vec<User>, SeedError> {
    let contents = fs::read_to_string(path).map_err(|e| SeedError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config: SeedConfig = toml::from_str(&contents).map_err(|e| SeedError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut seen = std::collections::HashSet::new();
    for user in &config.users {
        if !seen.insert(user.id) {
            return Err(SeedError::DuplicateId {
                path: path.to_path_buf(),
                id: user.id,
            });
        }
    }

    tracing::info!(count = config.users.len(), ?path, "loaded seed users");
    Ok(config.users)
}

/// The built-in demo roster from the table page. Used by tests and as the
/// fallback when no seed file is supplied.
pub fn demo_users() -> Vec<User> {
    vec![
        User::new(1, "Sarah Johnson", "sarah@example.com", "Developer", Status::Active),
        User::new(2, "Michael Brown", "michael@example.com", "Designer", Status::Active),
        User::new(3, "Emily Davis", "emily@example.com", "Manager", Status::Inactive),
        User::new(4, "David Wilson", "david@example.com", "Developer", Status::Active),
        User::new(5, "Jessica Moore", "jessica@example.com", "Tester", Status::Active),
        User::new(6, "Daniel Taylor", "daniel@example.com", "Designer", Status::Inactive),
        User::new(7, "Sophia Martinez", "sophia@example.com", "Developer", Status::Active),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_seed_toml() {
        let toml = r#"
[[user]]
id = 1
name = "Sarah Johnson"
email = "sarah@example.com"
role = "Developer"
status = "Active"

[[user]]
id = 2
name = "Michael Brown"
email = "michael@example.com"
role = "Designer"
status = "Inactive"
"#;

        let config: SeedConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.users.len(), 2);
        assert_eq!(config.users[0].id, 1);
        assert_eq!(config.users[0].role, "Developer");
        assert_eq!(config.users[1].status, Status::Inactive);
    }

    #[test]
    fn test_load_file_preserves_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[[user]]
id = 10
name = "First"
email = "first@example.com"
role = "Tester"

[[user]]
id = 3
name = "Second"
email = "second@example.com"
role = "Manager"
"#
        )
        .unwrap();

        let users = load_file(file.path()).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, 10);
        assert_eq!(users[1].id, 3);
    }

    #[test]
    fn test_load_file_rejects_duplicate_ids() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[[user]]
id = 5
name = "A"
email = "a@example.com"
role = "Tester"

[[user]]
id = 5
name = "B"
email = "b@example.com"
role = "Tester"
"#
        )
        .unwrap();

        match load_file(file.path()) {
            Err(SeedError::DuplicateId { id, .. }) => assert_eq!(id, 5),
            other => panic!("expected DuplicateId, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = load_file(Path::new("/nonexistent/seed.toml"));
        assert!(matches!(result, Err(SeedError::Io { .. })));
    }

    #[test]
    fn test_demo_users_have_unique_ids() {
        let users = demo_users();
        assert_eq!(users.len(), 7);
        let ids: std::collections::HashSet<_> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), 7);
    }
}
