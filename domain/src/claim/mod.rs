//! Claim domain
//!
//! Generated prose is decomposed into [`Claim`]s: atomic, independently
//! checkable statements that keep a byte span back into the source text.

pub mod entities;
pub mod extractor;

pub use entities::{Claim, ClaimId, ClaimSpan};
pub use extractor::{ClaimExtractor, ExtractorConfig};
