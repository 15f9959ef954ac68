pub mod record;

// Re-exports for convenience
pub use record::{Status, User};
