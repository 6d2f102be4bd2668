//! Prompt domain
//!
//! Templates for the judge calls of a fact-check pass.

mod template;

pub use template::JudgePromptTemplate;
