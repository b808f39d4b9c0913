use super::common::*;
use crate::matching::domain::{
    CandidateProfile, CourseRequirements, EducationLevel, ExperienceLevel, JobRequirements,
    LetterGrade,
};
use crate::matching::{BreakdownEntry, Criterion};

fn full_job() -> JobRequirements {
    JobRequirements {
        education_level: Some(EducationLevel::Master),
        min_gpa: Some(3.5),
        degree_type: Some("Computer Science".to_string()),
        min_experience: Some(ExperienceLevel::EntryLevel),
        required_skills: strings(&["rust", "terraform"]),
    }
}

#[test]
fn job_rows_follow_fixed_order() {
    let profile = bachelor_profile();
    let posting = job("ordered", full_job());

    let rows = engine().breakdown(Some(&profile), &posting);

    let criteria: Vec<Criterion> = rows.iter().map(|row| row.criterion).collect();
    assert_eq!(
        criteria,
        vec![
            Criterion::Education,
            Criterion::Gpa,
            Criterion::Experience,
            Criterion::DegreeType,
        ]
    );
}

#[test]
fn skills_are_scored_but_not_listed() {
    let profile = bachelor_profile();
    let posting = job(
        "skills",
        JobRequirements {
            required_skills: strings(&["rust", "terraform"]),
            ..JobRequirements::default()
        },
    );
    let engine = engine();

    assert!(engine.breakdown(Some(&profile), &posting).is_empty());
    assert_eq!(engine.match_score(Some(&profile), &posting), 50);
}

#[test]
fn job_rows_carry_labels_and_outcomes() {
    let profile = bachelor_profile();
    let posting = job("labels", full_job());

    let rows = engine().breakdown(Some(&profile), &posting);

    assert_eq!(
        rows[0],
        BreakdownEntry {
            criterion: Criterion::Education,
            requirement_label: "Education: Master's Degree or higher".to_string(),
            candidate_value_label: "Bachelor's Degree".to_string(),
            satisfied: false,
        }
    );
    assert_eq!(rows[1].requirement_label, "Minimum GPA: 3.50");
    assert_eq!(rows[1].candidate_value_label, "3.60");
    assert!(rows[1].satisfied);
    assert_eq!(rows[2].requirement_label, "Experience: Entry Level or above");
    assert_eq!(rows[2].candidate_value_label, "Entry Level");
    assert!(rows[2].satisfied);
    assert_eq!(rows[3].candidate_value_label, "Computer Science");
    assert!(rows[3].satisfied);
}

#[test]
fn missing_candidate_values_read_not_specified() {
    let profile = CandidateProfile::with_qualifications(Default::default());
    let posting = job("blank", full_job());

    let rows = engine().breakdown(Some(&profile), &posting);

    assert_eq!(rows.len(), 4);
    assert!(rows
        .iter()
        .all(|row| row.candidate_value_label == "Not specified" && !row.satisfied));
}

#[test]
fn missing_required_subject_is_named() {
    let profile = student("B", 32.0, &[("Math", "B")]);
    let posting = course(
        "physics-101",
        CourseRequirements {
            required_subjects: strings(&["Math", "Physics"]),
            ..CourseRequirements::default()
        },
    );

    let rows = engine().breakdown(Some(&profile), &posting);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].requirement_label, "Subject: Math");
    assert_eq!(rows[0].candidate_value_label, "B");
    assert!(rows[0].satisfied);
    assert_eq!(rows[1].requirement_label, "Subject: Physics");
    assert_eq!(rows[1].candidate_value_label, "Not taken");
    assert!(!rows[1].satisfied);
}

#[test]
fn course_rows_cover_points_grade_and_subject_grades() {
    let profile = student("C", 28.0, &[("Biology", "A"), ("Chemistry", "D")]);
    let posting = course(
        "med",
        CourseRequirements {
            min_points: Some(30.0),
            min_grade: Some(LetterGrade::C),
            required_subjects: Vec::new(),
            subject_grades: subject_grades(&[("Chemistry", "B"), ("Biology", "B")]),
        },
    );

    let rows = engine().breakdown(Some(&profile), &posting);
    let labels: Vec<&str> = rows.iter().map(|row| row.requirement_label.as_str()).collect();

    assert_eq!(
        labels,
        vec![
            "Minimum points: 30",
            "Overall grade: C or better",
            "Biology grade: B or better",
            "Chemistry grade: B or better",
        ]
    );
    let satisfied: Vec<bool> = rows.iter().map(|row| row.satisfied).collect();
    assert_eq!(satisfied, vec![false, true, true, false]);
    assert_eq!(rows[0].candidate_value_label, "28");
}

#[test]
fn postings_without_requirements_have_no_rows() {
    let rows = engine().breakdown(Some(&bachelor_profile()), &open_posting("open"));
    assert!(rows.is_empty());
}

#[test]
fn mixed_documents_list_job_rows_before_course_rows() {
    let profile = student("B", 25.0, &[]);
    let posting: crate::matching::Posting = serde_json::from_value(serde_json::json!({
        "id": "hybrid",
        "requirements": { "minPoints": 20, "minGPA": 3.0 }
    }))
    .expect("posting parses");

    let rows = engine().breakdown(Some(&profile), &posting);

    let criteria: Vec<Criterion> = rows.iter().map(|row| row.criterion).collect();
    assert_eq!(criteria, vec![Criterion::Gpa, Criterion::Points]);
    assert_eq!(rows[0].candidate_value_label, "Not specified");
    assert!(rows[1].satisfied);
}
