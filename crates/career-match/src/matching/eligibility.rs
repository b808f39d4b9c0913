use tracing::debug;

use super::criteria::{assess, CriterionOutcome};
use super::domain::{CandidateProfile, Posting, PostingKind, Qualifications};

/// True when every criterion the posting declares is met.
///
/// A posting without requirements, or with none declared, is open to everyone.
pub fn is_eligible(qualifications: Option<&Qualifications>, posting: &Posting) -> bool {
    all_satisfied(&assess(qualifications, posting.requirements.as_ref()))
}

pub(crate) fn all_satisfied(outcomes: &[CriterionOutcome]) -> bool {
    outcomes.iter().all(CriterionOutcome::satisfied)
}

/// Postings the candidate qualifies for, in input order.
///
/// Until the profile's qualifications have loaded the collection is returned
/// unfiltered.
pub fn filter_qualified(profile: Option<&CandidateProfile>, postings: &[Posting]) -> Vec<Posting> {
    let Some(qualifications) = profile.and_then(|profile| profile.qualifications.as_ref()) else {
        debug!(
            postings = postings.len(),
            "profile qualifications not loaded; skipping eligibility filter"
        );
        return postings.to_vec();
    };

    let qualified: Vec<Posting> = postings
        .iter()
        .filter(|posting| is_eligible(Some(qualifications), posting))
        .cloned()
        .collect();

    debug!(
        postings = postings.len(),
        qualified = qualified.len(),
        "applied eligibility filter"
    );
    qualified
}

pub fn filter_qualified_jobs(profile: Option<&CandidateProfile>, jobs: &[Posting]) -> Vec<Posting> {
    filter_by_kind(profile, jobs, PostingKind::Job)
}

pub fn filter_qualified_courses(
    profile: Option<&CandidateProfile>,
    courses: &[Posting],
) -> Vec<Posting> {
    filter_by_kind(profile, courses, PostingKind::Course)
}

fn filter_by_kind(
    profile: Option<&CandidateProfile>,
    postings: &[Posting],
    expected: PostingKind,
) -> Vec<Posting> {
    let mismatched = postings
        .iter()
        .filter_map(|posting| posting.requirements.as_ref())
        .filter(|requirements| requirements.kind() != expected)
        .count();
    if mismatched > 0 {
        debug!(
            expected = expected.label(),
            mismatched, "collection holds postings declaring another requirement shape"
        );
    }
    let mixed = postings
        .iter()
        .filter_map(|posting| posting.requirements.as_ref())
        .filter(|requirements| requirements.is_mixed())
        .count();
    if mixed > 0 {
        debug!(mixed, "postings declare job and course keys; evaluating both");
    }
    filter_qualified(profile, postings)
}
