//! Error handling, configuration and display helpers

pub mod config;
pub mod display;
pub mod error;

// Re-export for convenience
pub use config::AppSettings;
pub use display::{abbreviate, abbreviate_f64, to_title_case};
pub use error::{DisplayError, LinkError, ResolveError, TubelinkError};
