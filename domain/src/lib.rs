//! Domain layer for verdict-router
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Attempt chain
//!
//! A [`GenerationRequest`] is tried against its primary model, then once
//! against its fallback model. The chain ends in exactly one
//! [`GenerationOutcome`].
//!
//! ## Fact-check
//!
//! - **Claims**: generated content is split into atomic factual [`Claim`]s
//! - **Judge panel**: three judges ([`JudgePanel`]) assess each claim
//! - **Quorum consensus**: 2-of-3 absolute agreement yields a directional
//!   [`FinalVerdict`]; anything less is `Disputed` or `Insufficient Evidence`
//! - **Evidence**: each verdict is rendered as an auditable evidence block

pub mod claim;
pub mod core;
pub mod evidence;
pub mod generation;
pub mod judge;
pub mod prompt;
pub mod quorum;

// Re-export commonly used types
pub use claim::{Claim, ClaimExtractor, ClaimId, ClaimSpan, ExtractorConfig};
pub use self::core::{error::DomainError, model::Model, prompt::Prompt};
pub use evidence::{EVIDENCE_HEADER, EvidenceAssembler};
pub use generation::{
    AttemptOutcome, FailureKind, GenerationOptions, GenerationOutcome, GenerationRequest,
    ModelAttempt,
};
pub use judge::{
    AssessmentOutcome, JudgeAssessment, JudgePanel, JudgeRole, PANEL_SIZE, PanelPreset,
    PanelSeat, Verdict, parse_judge_response,
};
pub use prompt::JudgePromptTemplate;
pub use quorum::{ConsensusEngine, ConsensusResult, FinalVerdict, QuorumRule, VoteTally};
