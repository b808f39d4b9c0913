//! Eligibility filtering, match scoring, and explanation of job and course postings.
//!
//! Everything under this module is synchronous and free of I/O: it reads a
//! candidate profile and postings and returns derived values without mutating
//! either side.

mod breakdown;
mod config;
mod criteria;
pub mod domain;
mod eligibility;
mod engine;
pub mod evaluator;
mod lenient;
mod ranking;
mod scoring;

#[cfg(test)]
mod tests;

pub use breakdown::{generate_breakdown, BreakdownEntry};
pub use config::{CourseWeights, JobWeights, MatchConfig};
pub use criteria::{assess, Criterion, CriterionOutcome, Measure, PARTIAL_CREDIT};
pub use domain::{
    CandidateProfile, CourseRequirements, EducationLevel, ExperienceLevel, Grades,
    JobRequirements, LetterGrade, Posting, PostingKind, Qualifications, Requirements,
};
pub use eligibility::{
    filter_qualified, filter_qualified_courses, filter_qualified_jobs, is_eligible,
};
pub use engine::{MatchEngine, MatchOutcome};
pub use ranking::{rank_postings, ScoredPosting};
pub use scoring::{match_score, UNCONSTRAINED_SCORE};
