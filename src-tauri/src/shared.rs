pub mod errors;
pub mod events;
pub mod emit;

// Re-export CommandError for convenience
pub use errors::{CommandError, CommandResult};
