//! Evidence domain
//!
//! Renders the human-readable record of each claim's verdict and appends
//! the records after the generated content.

mod assembler;

pub use assembler::{EVIDENCE_HEADER, EvidenceAssembler};
