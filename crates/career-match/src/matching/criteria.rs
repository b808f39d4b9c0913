use serde::{Deserialize, Serialize};

use super::domain::{CourseRequirements, JobRequirements, Qualifications, Requirements};
use super::evaluator::{
    count_present, education_rank, experience_rank, grade_rank, known_education_rank,
    known_experience_rank, known_grade_rank, known_subject_rank, matches_text, meets_minimum,
    meets_rank, one_step_below, within_tolerance,
};

/// Share of a criterion's weight awarded for a near miss.
pub const PARTIAL_CREDIT: f64 = 0.5;

/// Independently evaluable constraint a posting may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Education,
    Gpa,
    Experience,
    DegreeType,
    Skills,
    Points,
    OverallGrade,
    RequiredSubjects,
    SubjectGrades,
}

/// What the comparator observed for one criterion.
#[derive(Debug, Clone, PartialEq)]
pub enum Measure {
    /// `candidate` is `None` when the value is missing or off the table.
    Rank {
        candidate: Option<u8>,
        required: u8,
    },
    Threshold {
        candidate: Option<f64>,
        minimum: f64,
    },
    Text {
        matched: bool,
    },
    Coverage {
        met: usize,
        near_misses: usize,
        required: usize,
    },
}

impl Measure {
    pub fn satisfied(&self) -> bool {
        match self {
            Measure::Rank {
                candidate,
                required,
            } => meets_rank(candidate.unwrap_or(0), *required),
            Measure::Threshold { candidate, minimum } => meets_minimum(*candidate, *minimum),
            Measure::Text { matched } => *matched,
            Measure::Coverage { met, required, .. } => met == required,
        }
    }

    /// Fraction of the criterion weight earned, in `0.0..=1.0`.
    pub fn credit(&self, tolerance: f64) -> f64 {
        if self.satisfied() {
            return 1.0;
        }

        match self {
            Measure::Rank {
                candidate,
                required,
            } if one_step_below(*candidate, *required) => PARTIAL_CREDIT,
            Measure::Threshold { candidate, minimum }
                if within_tolerance(*candidate, *minimum, tolerance) =>
            {
                PARTIAL_CREDIT
            }
            Measure::Coverage {
                met,
                near_misses,
                required,
            } => (*met as f64 + *near_misses as f64 * PARTIAL_CREDIT) / *required as f64,
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CriterionOutcome {
    pub criterion: Criterion,
    pub measure: Measure,
}

impl CriterionOutcome {
    fn new(criterion: Criterion, measure: Measure) -> Self {
        Self { criterion, measure }
    }

    pub fn satisfied(&self) -> bool {
        self.measure.satisfied()
    }
}

/// Evaluates every criterion the requirements declare, in declaration order.
///
/// Undeclared criteria produce no outcome at all, so callers can AND, sum, or
/// explain the list without knowing which shape the posting uses.
pub fn assess(
    qualifications: Option<&Qualifications>,
    requirements: Option<&Requirements>,
) -> Vec<CriterionOutcome> {
    let Some(requirements) = requirements else {
        return Vec::new();
    };

    let mut outcomes = assess_job(qualifications, requirements.job());
    outcomes.extend(assess_course(qualifications, requirements.course()));
    outcomes
}

fn assess_job(
    qualifications: Option<&Qualifications>,
    requirements: &JobRequirements,
) -> Vec<CriterionOutcome> {
    let mut outcomes = Vec::new();

    if let Some(required) = &requirements.education_level {
        outcomes.push(CriterionOutcome::new(
            Criterion::Education,
            Measure::Rank {
                candidate: known_education_rank(
                    qualifications.and_then(|q| q.education_level.as_ref()),
                ),
                required: education_rank(Some(required)),
            },
        ));
    }

    if let Some(minimum) = requirements.min_gpa {
        outcomes.push(CriterionOutcome::new(
            Criterion::Gpa,
            Measure::Threshold {
                candidate: qualifications.and_then(|q| q.gpa),
                minimum,
            },
        ));
    }

    if let Some(required) = &requirements.min_experience {
        outcomes.push(CriterionOutcome::new(
            Criterion::Experience,
            Measure::Rank {
                candidate: known_experience_rank(
                    qualifications.and_then(|q| q.experience.as_ref()),
                ),
                required: experience_rank(Some(required)),
            },
        ));
    }

    if let Some(required) = &requirements.degree_type {
        let candidate = qualifications.and_then(|q| q.degree_type.as_deref());
        outcomes.push(CriterionOutcome::new(
            Criterion::DegreeType,
            Measure::Text {
                matched: matches_text(candidate, required),
            },
        ));
    }

    if !requirements.required_skills.is_empty() {
        let skills: &[String] = qualifications.map(|q| q.skills.as_slice()).unwrap_or(&[]);
        let met = count_present(&requirements.required_skills, |skill| {
            skills.iter().any(|held| held == skill)
        });
        outcomes.push(CriterionOutcome::new(
            Criterion::Skills,
            Measure::Coverage {
                met,
                near_misses: 0,
                required: requirements.required_skills.len(),
            },
        ));
    }

    outcomes
}

fn assess_course(
    qualifications: Option<&Qualifications>,
    requirements: &CourseRequirements,
) -> Vec<CriterionOutcome> {
    let grades = qualifications.and_then(|q| q.grades.as_ref());
    let subjects = grades.map(|grades| &grades.subjects);
    let mut outcomes = Vec::new();

    if let Some(minimum) = requirements.min_points {
        outcomes.push(CriterionOutcome::new(
            Criterion::Points,
            Measure::Threshold {
                candidate: grades.and_then(|grades| grades.points),
                minimum,
            },
        ));
    }

    if let Some(required) = &requirements.min_grade {
        outcomes.push(CriterionOutcome::new(
            Criterion::OverallGrade,
            Measure::Rank {
                candidate: known_grade_rank(grades.and_then(|grades| grades.overall.as_ref())),
                required: grade_rank(Some(required)),
            },
        ));
    }

    if !requirements.required_subjects.is_empty() {
        let met = count_present(&requirements.required_subjects, |subject| {
            subjects.is_some_and(|subjects| subjects.contains_key(subject))
        });
        outcomes.push(CriterionOutcome::new(
            Criterion::RequiredSubjects,
            Measure::Coverage {
                met,
                near_misses: 0,
                required: requirements.required_subjects.len(),
            },
        ));
    }

    if !requirements.subject_grades.is_empty() {
        let mut met = 0;
        let mut near_misses = 0;
        for (subject, grade) in &requirements.subject_grades {
            let candidate = known_subject_rank(subjects, subject);
            let required = grade_rank(Some(grade));
            if meets_rank(candidate.unwrap_or(0), required) {
                met += 1;
            } else if one_step_below(candidate, required) {
                near_misses += 1;
            }
        }
        outcomes.push(CriterionOutcome::new(
            Criterion::SubjectGrades,
            Measure::Coverage {
                met,
                near_misses,
                required: requirements.subject_grades.len(),
            },
        ));
    }

    outcomes
}
