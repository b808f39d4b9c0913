use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::MatchConfig;
use super::domain::{CandidateProfile, Posting};
use super::eligibility::filter_qualified;
use super::scoring::match_score;

/// Posting fields as received, plus the computed `matchScore`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredPosting {
    #[serde(flatten)]
    pub posting: Posting,
    pub match_score: u8,
}

/// Filter, score, order by descending score, and keep the first `limit`.
///
/// The sort is stable: postings with equal scores keep their input order.
pub fn rank_postings(
    profile: Option<&CandidateProfile>,
    postings: &[Posting],
    limit: usize,
    config: &MatchConfig,
) -> Vec<ScoredPosting> {
    let qualifications = profile.and_then(|profile| profile.qualifications.as_ref());

    let mut scored: Vec<ScoredPosting> = filter_qualified(profile, postings)
        .into_iter()
        .map(|posting| {
            let match_score = match_score(qualifications, &posting, config);
            ScoredPosting {
                posting,
                match_score,
            }
        })
        .collect();

    scored.sort_by(|left, right| right.match_score.cmp(&left.match_score));
    let qualified = scored.len();
    scored.truncate(limit);

    debug!(
        postings = postings.len(),
        qualified,
        returned = scored.len(),
        limit,
        "ranked postings"
    );
    scored
}
