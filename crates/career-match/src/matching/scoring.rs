use tracing::trace;

use super::config::MatchConfig;
use super::criteria::{assess, CriterionOutcome};
use super::domain::{Posting, Qualifications};

/// Score awarded when a posting declares nothing to measure against.
pub const UNCONSTRAINED_SCORE: u8 = 100;

/// Weighted 0–100 match score of a candidate against one posting.
pub fn match_score(
    qualifications: Option<&Qualifications>,
    posting: &Posting,
    config: &MatchConfig,
) -> u8 {
    let outcomes = assess(qualifications, posting.requirements.as_ref());
    let score = score_outcomes(&outcomes, config);
    trace!(
        posting_id = posting.id.as_deref().unwrap_or_default(),
        criteria = outcomes.len(),
        score,
        "scored posting"
    );
    score
}

/// Normalizes earned weight over the weight of the declared criteria only.
pub(crate) fn score_outcomes(outcomes: &[CriterionOutcome], config: &MatchConfig) -> u8 {
    let mut earned = 0.0_f64;
    let mut total_weight = 0.0_f64;

    for outcome in outcomes {
        let weight = config.weight(outcome.criterion);
        total_weight += weight;
        earned += weight * outcome.measure.credit(config.tolerance(outcome.criterion));
    }

    if total_weight <= 0.0 {
        return UNCONSTRAINED_SCORE;
    }

    (100.0 * earned / total_weight).round().clamp(0.0, 100.0) as u8
}
