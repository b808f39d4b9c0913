use std::collections::BTreeMap;

use crate::matching::domain::{
    CandidateProfile, CourseRequirements, EducationLevel, ExperienceLevel, Grades,
    JobRequirements, LetterGrade, Posting, Qualifications,
};
use crate::matching::{MatchConfig, MatchEngine};

pub(super) fn engine() -> MatchEngine {
    MatchEngine::new(MatchConfig::default())
}

pub(super) fn graduate(education: &str, gpa: f64, experience: &str) -> Qualifications {
    Qualifications {
        education_level: Some(EducationLevel::parse(education)),
        degree_type: Some("Computer Science".to_string()),
        gpa: Some(gpa),
        experience: Some(ExperienceLevel::parse(experience)),
        skills: vec!["rust".to_string(), "sql".to_string()],
        grades: None,
    }
}

/// Bachelor graduate with a 3.6 GPA at entry level.
pub(super) fn bachelor_profile() -> CandidateProfile {
    CandidateProfile::with_qualifications(graduate("bachelor", 3.6, "entry_level"))
}

pub(super) fn unloaded_profile() -> CandidateProfile {
    CandidateProfile {
        id: Some("student-unloaded".to_string()),
        ..CandidateProfile::default()
    }
}

pub(super) fn student(overall: &str, points: f64, subjects: &[(&str, &str)]) -> CandidateProfile {
    CandidateProfile::with_qualifications(Qualifications {
        grades: Some(Grades {
            overall: Some(LetterGrade::parse(overall)),
            subjects: subjects
                .iter()
                .map(|(subject, grade)| (subject.to_string(), LetterGrade::parse(grade)))
                .collect(),
            points: Some(points),
        }),
        ..Qualifications::default()
    })
}

pub(super) fn job(id: &str, requirements: JobRequirements) -> Posting {
    Posting::job(id, requirements)
}

pub(super) fn course(id: &str, requirements: CourseRequirements) -> Posting {
    Posting::course(id, requirements)
}

pub(super) fn open_posting(id: &str) -> Posting {
    Posting {
        id: Some(id.to_string()),
        ..Posting::default()
    }
}

pub(super) fn gpa_job(id: &str, min_gpa: f64) -> Posting {
    job(
        id,
        JobRequirements {
            min_gpa: Some(min_gpa),
            ..JobRequirements::default()
        },
    )
}

pub(super) fn education_job(id: &str, education: &str) -> Posting {
    job(
        id,
        JobRequirements {
            education_level: Some(EducationLevel::parse(education)),
            ..JobRequirements::default()
        },
    )
}

pub(super) fn subject_grades(entries: &[(&str, &str)]) -> BTreeMap<String, LetterGrade> {
    entries
        .iter()
        .map(|(subject, grade)| (subject.to_string(), LetterGrade::parse(grade)))
        .collect()
}

pub(super) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(super) fn ids(postings: &[Posting]) -> Vec<&str> {
    postings
        .iter()
        .map(|posting| posting.id.as_deref().unwrap_or_default())
        .collect()
}
