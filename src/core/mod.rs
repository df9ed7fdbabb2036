// Public modules
pub mod catalog;
pub mod defaults;
pub mod error;
pub mod guide;
pub mod intent;
pub mod metadata;
pub mod present;
pub mod registry;
pub mod resolve;

// Internal modules - not part of public API
pub(crate) mod paths;

// Re-export common types for convenience
pub use catalog::{Catalog, Category, Command};
pub use error::{Error, ErrorCode, Result};
pub use intent::{Intent, Query};
pub use resolve::{PresentationType, Resolution};
