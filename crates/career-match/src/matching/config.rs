use serde::{Deserialize, Serialize};

use super::criteria::Criterion;

/// Weight table for job postings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobWeights {
    pub education: f64,
    pub gpa: f64,
    pub experience: f64,
    pub degree_type: f64,
    pub skills: f64,
}

impl Default for JobWeights {
    fn default() -> Self {
        Self {
            education: 30.0,
            gpa: 25.0,
            experience: 20.0,
            degree_type: 15.0,
            skills: 10.0,
        }
    }
}

/// Weight table for course postings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseWeights {
    pub points: f64,
    pub grade: f64,
    pub required_subjects: f64,
    pub subject_grades: f64,
}

impl Default for CourseWeights {
    fn default() -> Self {
        Self {
            points: 35.0,
            grade: 30.0,
            required_subjects: 20.0,
            subject_grades: 15.0,
        }
    }
}

/// Scoring rubric shared by every posting the engine ranks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub job_weights: JobWeights,
    pub course_weights: CourseWeights,
    /// GPA shortfall still earning partial credit.
    pub gpa_tolerance: f64,
    /// Points shortfall still earning partial credit.
    pub points_tolerance: f64,
    /// Result count used when the caller does not ask for one.
    pub result_limit: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            job_weights: JobWeights::default(),
            course_weights: CourseWeights::default(),
            gpa_tolerance: 0.5,
            points_tolerance: 5.0,
            result_limit: 10,
        }
    }
}

impl MatchConfig {
    pub fn weight(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Education => self.job_weights.education,
            Criterion::Gpa => self.job_weights.gpa,
            Criterion::Experience => self.job_weights.experience,
            Criterion::DegreeType => self.job_weights.degree_type,
            Criterion::Skills => self.job_weights.skills,
            Criterion::Points => self.course_weights.points,
            Criterion::OverallGrade => self.course_weights.grade,
            Criterion::RequiredSubjects => self.course_weights.required_subjects,
            Criterion::SubjectGrades => self.course_weights.subject_grades,
        }
    }

    /// Numeric shortfall tolerated for threshold criteria; zero for the rest.
    pub fn tolerance(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Gpa => self.gpa_tolerance,
            Criterion::Points => self.points_tolerance,
            _ => 0.0,
        }
    }
}
