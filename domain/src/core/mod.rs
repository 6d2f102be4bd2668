//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] — model identifiers (Claude, GPT, Gemini, custom)
//! - [`prompt::Prompt`] — a validated, non-empty generation prompt
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod model;
pub mod prompt;
pub mod string;
