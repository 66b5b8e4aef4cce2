//! Model requirement profiles and the evaluator that checks a hardware
//! snapshot against them.
//!
//! The profile table is fixed data; evaluation is pure and never fails.
//! Deficiencies come back as informational strings, not errors — a missing
//! GPU is itself a reported issue.

mod evaluator;
mod profiles;

pub use evaluator::{evaluate, Verdict};
pub use profiles::{profile, profile_ids, RequirementProfile, PROFILES};
