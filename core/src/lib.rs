pub mod collection;
pub mod ephemeral;
pub mod seed;

// Re-exports for convenience
pub use collection::{FilteredCollection, Record};
pub use ephemeral::{EphemeralFlags, TriggerError};
pub use seed::{SeedConfig, SeedError, demo_users};
