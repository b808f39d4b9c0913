//! Rank tables and the comparators every criterion is built from.
//!
//! Missing or unrecognized values rank 0 for the ordinal comparisons. The
//! `known_*` lookups report them as `None` so they never count as a near miss,
//! while a real bottom tier such as grade E still does.

use std::collections::BTreeMap;

use super::domain::{EducationLevel, ExperienceLevel, LetterGrade};

pub const EDUCATION_RANKS: [(&str, u8); 5] = [
    ("high_school", 1),
    ("associate", 2),
    ("bachelor", 3),
    ("master", 4),
    ("phd", 5),
];

pub const EXPERIENCE_RANKS: [(&str, u8); 6] = [
    ("no_experience", 1),
    ("internship", 2),
    ("entry_level", 3),
    ("mid_level", 4),
    ("senior_level", 5),
    ("executive", 6),
];

pub const GRADE_RANKS: [(&str, u8); 6] = [
    ("A", 4),
    ("B", 3),
    ("C", 2),
    ("D", 1),
    ("E", 0),
    ("F", 0),
];

// Float slack so 3.8 - 3.3 still counts as within 0.5.
const TOLERANCE_EPSILON: f64 = 1e-9;

fn lookup(table: &[(&str, u8)], key: &str) -> Option<u8> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, rank)| *rank)
}

pub fn known_education_rank(level: Option<&EducationLevel>) -> Option<u8> {
    level.and_then(|level| lookup(&EDUCATION_RANKS, level.key()))
}

pub fn known_experience_rank(level: Option<&ExperienceLevel>) -> Option<u8> {
    level.and_then(|level| lookup(&EXPERIENCE_RANKS, level.key()))
}

pub fn known_grade_rank(grade: Option<&LetterGrade>) -> Option<u8> {
    grade.and_then(|grade| lookup(&GRADE_RANKS, grade.key()))
}

pub fn education_rank(level: Option<&EducationLevel>) -> u8 {
    known_education_rank(level).unwrap_or(0)
}

pub fn experience_rank(level: Option<&ExperienceLevel>) -> u8 {
    known_experience_rank(level).unwrap_or(0)
}

pub fn grade_rank(grade: Option<&LetterGrade>) -> u8 {
    known_grade_rank(grade).unwrap_or(0)
}

/// Ordinal comparison shared by education, experience, and grades.
pub fn meets_rank(candidate: u8, required: u8) -> bool {
    candidate >= required
}

/// A known value sitting exactly one tier under the requirement.
pub fn one_step_below(candidate: Option<u8>, required: u8) -> bool {
    candidate.is_some_and(|rank| rank + 1 == required)
}

/// Absent or unparsable numbers count as 0.
pub fn meets_minimum(candidate: Option<f64>, minimum: f64) -> bool {
    candidate.unwrap_or(0.0) >= minimum
}

/// Short of the minimum by no more than `tolerance`, absent counting as 0.
pub fn within_tolerance(candidate: Option<f64>, minimum: f64, tolerance: f64) -> bool {
    let value = candidate.unwrap_or(0.0);
    value < minimum && minimum - value <= tolerance + TOLERANCE_EPSILON
}

/// Case-insensitive equality of free-text values such as degree names.
pub fn matches_text(candidate: Option<&str>, required: &str) -> bool {
    candidate
        .map(|value| value.trim().to_lowercase() == required.trim().to_lowercase())
        .unwrap_or(false)
}

/// Number of required entries the candidate holds.
pub fn count_present<F>(required: &[String], holds: F) -> usize
where
    F: Fn(&str) -> bool,
{
    required
        .iter()
        .filter(|entry| holds(entry.as_str()))
        .count()
}

pub fn is_subset<F>(required: &[String], holds: F) -> bool
where
    F: Fn(&str) -> bool,
{
    count_present(required, holds) == required.len()
}

/// Rank of the candidate's grade in one subject, `None` when not taken or unrecognized.
pub fn known_subject_rank(
    subjects: Option<&BTreeMap<String, LetterGrade>>,
    subject: &str,
) -> Option<u8> {
    known_grade_rank(subjects.and_then(|subjects| subjects.get(subject)))
}

/// Rank of the candidate's grade in one subject, 0 when the subject was not taken.
pub fn subject_rank(subjects: Option<&BTreeMap<String, LetterGrade>>, subject: &str) -> u8 {
    known_subject_rank(subjects, subject).unwrap_or(0)
}
