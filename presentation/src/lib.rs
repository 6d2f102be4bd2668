//! Presentation layer for verdict-router
//!
//! This crate contains CLI definitions, the warp HTTP API, output
//! formatters and progress reporters.

pub mod cli;
pub mod http;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, GenerationArgs, OutputFormat};
pub use http::{ApiError, serve};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
