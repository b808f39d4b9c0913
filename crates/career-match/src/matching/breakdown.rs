//! Per-criterion explanation for the "view details" panel of a single posting.
//!
//! Job rows cover education, GPA, experience, and degree in that order, and
//! course rows follow them. Required skills count toward the match score but
//! are not listed here.

use serde::{Deserialize, Serialize};

use super::criteria::Criterion;
use super::domain::{
    CourseRequirements, Grades, JobRequirements, LetterGrade, Posting, Qualifications,
};
use super::evaluator::{
    education_rank, experience_rank, grade_rank, matches_text, meets_minimum, meets_rank,
    subject_rank,
};

const NOT_SPECIFIED: &str = "Not specified";
const NOT_TAKEN: &str = "Not taken";

/// One explained row of the breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownEntry {
    pub criterion: Criterion,
    pub requirement_label: String,
    pub candidate_value_label: String,
    pub satisfied: bool,
}

impl BreakdownEntry {
    fn new(
        criterion: Criterion,
        requirement_label: String,
        candidate_value_label: String,
        satisfied: bool,
    ) -> Self {
        Self {
            criterion,
            requirement_label,
            candidate_value_label,
            satisfied,
        }
    }
}

pub fn generate_breakdown(
    qualifications: Option<&Qualifications>,
    posting: &Posting,
) -> Vec<BreakdownEntry> {
    let Some(requirements) = posting.requirements.as_ref() else {
        return Vec::new();
    };

    let mut entries = job_breakdown(qualifications, requirements.job());
    entries.extend(course_breakdown(qualifications, requirements.course()));
    entries
}

fn job_breakdown(
    qualifications: Option<&Qualifications>,
    requirements: &JobRequirements,
) -> Vec<BreakdownEntry> {
    let mut entries = Vec::new();

    if let Some(required) = &requirements.education_level {
        let candidate = qualifications.and_then(|q| q.education_level.as_ref());
        entries.push(BreakdownEntry::new(
            Criterion::Education,
            format!("Education: {} or higher", required.label()),
            candidate
                .map(|level| level.label().to_string())
                .unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            meets_rank(education_rank(candidate), education_rank(Some(required))),
        ));
    }

    if let Some(minimum) = requirements.min_gpa {
        let candidate = qualifications.and_then(|q| q.gpa);
        entries.push(BreakdownEntry::new(
            Criterion::Gpa,
            format!("Minimum GPA: {minimum:.2}"),
            candidate
                .map(|gpa| format!("{gpa:.2}"))
                .unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            meets_minimum(candidate, minimum),
        ));
    }

    if let Some(required) = &requirements.min_experience {
        let candidate = qualifications.and_then(|q| q.experience.as_ref());
        entries.push(BreakdownEntry::new(
            Criterion::Experience,
            format!("Experience: {} or above", required.label()),
            candidate
                .map(|level| level.label().to_string())
                .unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            meets_rank(experience_rank(candidate), experience_rank(Some(required))),
        ));
    }

    if let Some(required) = &requirements.degree_type {
        let candidate = qualifications.and_then(|q| q.degree_type.as_deref());
        entries.push(BreakdownEntry::new(
            Criterion::DegreeType,
            format!("Degree: {}", required.trim()),
            candidate
                .map(|degree| degree.trim().to_string())
                .unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            matches_text(candidate, required),
        ));
    }

    entries
}

fn course_breakdown(
    qualifications: Option<&Qualifications>,
    requirements: &CourseRequirements,
) -> Vec<BreakdownEntry> {
    let grades: Option<&Grades> = qualifications.and_then(|q| q.grades.as_ref());
    let subjects = grades.map(|grades| &grades.subjects);
    let mut entries = Vec::new();

    if let Some(minimum) = requirements.min_points {
        let candidate = grades.and_then(|grades| grades.points);
        entries.push(BreakdownEntry::new(
            Criterion::Points,
            format!("Minimum points: {minimum}"),
            candidate
                .map(|points| points.to_string())
                .unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            meets_minimum(candidate, minimum),
        ));
    }

    if let Some(required) = &requirements.min_grade {
        let candidate = grades.and_then(|grades| grades.overall.as_ref());
        entries.push(BreakdownEntry::new(
            Criterion::OverallGrade,
            format!("Overall grade: {} or better", required.key()),
            grade_label(candidate, NOT_SPECIFIED),
            meets_rank(grade_rank(candidate), grade_rank(Some(required))),
        ));
    }

    for subject in &requirements.required_subjects {
        let candidate = subjects.and_then(|subjects| subjects.get(subject));
        entries.push(BreakdownEntry::new(
            Criterion::RequiredSubjects,
            format!("Subject: {subject}"),
            grade_label(candidate, NOT_TAKEN),
            candidate.is_some(),
        ));
    }

    for (subject, required) in &requirements.subject_grades {
        let candidate = subjects.and_then(|subjects| subjects.get(subject));
        entries.push(BreakdownEntry::new(
            Criterion::SubjectGrades,
            format!("{subject} grade: {} or better", required.key()),
            grade_label(candidate, NOT_TAKEN),
            meets_rank(subject_rank(subjects, subject), grade_rank(Some(required))),
        ));
    }

    entries
}

fn grade_label(grade: Option<&LetterGrade>, missing: &str) -> String {
    grade
        .map(|grade| grade.key().to_string())
        .unwrap_or_else(|| missing.to_string())
}
