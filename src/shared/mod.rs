// Shared kernel used by every module

pub mod config; // Catalog configuration
pub mod errors; // Shared error types
pub mod state; // Key-path state store
pub mod utils; // Logging helpers

pub use config::CatalogConfig;
pub use errors::{AppError, AppResult};
pub use state::{KeyPath, StateStore};
