//! Quorum consensus domain
//!
//! Combines the assessments of one judge panel into a single verdict.
//!
//! # Quorum rule
//!
//! A directional verdict needs a strict majority of the judges that
//! responded **and** at least two absolute votes (2 of 3). That tolerates
//! one failed, slow or dissenting judge, but never lets a plurality of one
//! decide. Ties always fall through to `Disputed`.
//!
//! ```text
//! ┌───────────────────────┬────────────────────────┬─────────┐
//! │ Votes                 │ Verdict                │ Summary │
//! ├───────────────────────┼────────────────────────┼─────────┤
//! │ True  True  True      │ Fact-Checked: True     │ 3/3     │
//! │ True  True  (error)   │ Fact-Checked: True     │ 2/3     │
//! │ True  False Uncertain │ Disputed               │         │
//! │ True  False (error)   │ Disputed               │         │
//! │ (err) (err) (timeout) │ Insufficient Evidence  │ 0/3     │
//! └───────────────────────┴────────────────────────┴─────────┘
//! ```

pub mod consensus;
pub mod rule;
pub mod vote;

pub use consensus::{ConsensusEngine, ConsensusResult, FinalVerdict};
pub use rule::QuorumRule;
pub use vote::VoteTally;
