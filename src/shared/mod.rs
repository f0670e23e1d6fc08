// Shared kernel used by all entity modules.

pub mod errors; // Closed error taxonomy
pub mod identifier; // Identifier generation contract
pub mod infrastructure; // Database handle and pool
pub mod validation; // Check combinator

// Re-exports for convenience
pub use errors::{AppError, AppResult, ErrorKind};
pub use identifier::{IdGenerator, UuidIdGenerator};
pub use infrastructure::database::Database;
