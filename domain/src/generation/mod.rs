//! Generation domain
//!
//! A [`GenerationRequest`] is driven through an attempt chain: the primary
//! model first, then (only on hard failure) the fallback model. Every try is
//! recorded as a [`ModelAttempt`]; the chain ends in exactly one
//! [`GenerationOutcome`].
//!
//! ```text
//! primary ──ok──▶ Succeeded
//!    │
//!  fail
//!    ▼
//! fallback ──ok──▶ Succeeded
//!    │
//!  fail
//!    ▼
//! Exhausted { attempts }
//! ```

pub mod attempt;
pub mod outcome;
pub mod request;

pub use attempt::{AttemptOutcome, FailureKind, ModelAttempt};
pub use outcome::GenerationOutcome;
pub use request::{GenerationOptions, GenerationRequest};
