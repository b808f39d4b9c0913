use serde::{Deserialize, Serialize};

use super::breakdown::{generate_breakdown, BreakdownEntry};
use super::config::MatchConfig;
use super::criteria::assess;
use super::domain::{CandidateProfile, Posting, Qualifications};
use super::eligibility::{
    all_satisfied, filter_qualified, filter_qualified_courses, filter_qualified_jobs,
};
use super::ranking::{rank_postings, ScoredPosting};
use super::scoring::{match_score, score_outcomes};

/// Stateless matcher that applies one scoring rubric to profiles and postings.
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    config: MatchConfig,
}

impl MatchEngine {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn is_eligible(&self, profile: Option<&CandidateProfile>, posting: &Posting) -> bool {
        super::eligibility::is_eligible(qualifications_of(profile), posting)
    }

    pub fn match_score(&self, profile: Option<&CandidateProfile>, posting: &Posting) -> u8 {
        match_score(qualifications_of(profile), posting, &self.config)
    }

    pub fn breakdown(
        &self,
        profile: Option<&CandidateProfile>,
        posting: &Posting,
    ) -> Vec<BreakdownEntry> {
        generate_breakdown(qualifications_of(profile), posting)
    }

    /// Eligibility, score, and breakdown for one selected posting.
    pub fn evaluate(&self, profile: Option<&CandidateProfile>, posting: &Posting) -> MatchOutcome {
        let qualifications = qualifications_of(profile);
        let outcomes = assess(qualifications, posting.requirements.as_ref());

        MatchOutcome {
            posting_id: posting.id.clone(),
            eligible: all_satisfied(&outcomes),
            match_score: score_outcomes(&outcomes, &self.config),
            breakdown: generate_breakdown(qualifications, posting),
        }
    }

    pub fn filter_qualified(
        &self,
        profile: Option<&CandidateProfile>,
        postings: &[Posting],
    ) -> Vec<Posting> {
        filter_qualified(profile, postings)
    }

    pub fn filter_qualified_jobs(
        &self,
        profile: Option<&CandidateProfile>,
        jobs: &[Posting],
    ) -> Vec<Posting> {
        filter_qualified_jobs(profile, jobs)
    }

    pub fn filter_qualified_courses(
        &self,
        profile: Option<&CandidateProfile>,
        courses: &[Posting],
    ) -> Vec<Posting> {
        filter_qualified_courses(profile, courses)
    }

    pub fn rank(
        &self,
        profile: Option<&CandidateProfile>,
        postings: &[Posting],
        limit: usize,
    ) -> Vec<ScoredPosting> {
        rank_postings(profile, postings, limit, &self.config)
    }

    /// Ranks with the configured result limit.
    pub fn rank_default(
        &self,
        profile: Option<&CandidateProfile>,
        postings: &[Posting],
    ) -> Vec<ScoredPosting> {
        self.rank(profile, postings, self.config.result_limit)
    }
}

fn qualifications_of(profile: Option<&CandidateProfile>) -> Option<&Qualifications> {
    profile.and_then(|profile| profile.qualifications.as_ref())
}

/// Detail view of a single posting evaluated for a candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOutcome {
    pub posting_id: Option<String>,
    pub eligible: bool,
    pub match_score: u8,
    pub breakdown: Vec<BreakdownEntry>,
}
