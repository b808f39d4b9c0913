use super::common::*;
use crate::matching::domain::{
    CandidateProfile, CourseRequirements, EducationLevel, ExperienceLevel, JobRequirements,
    LetterGrade,
};
use crate::matching::{assess, filter_qualified_courses, filter_qualified_jobs, Criterion};

#[test]
fn unloaded_profile_returns_jobs_unfiltered() {
    let engine = engine();
    let jobs = vec![
        education_job("phd-only", "phd"),
        gpa_job("gpa-4", 4.0),
        open_posting("open"),
    ];

    let filtered = engine.filter_qualified_jobs(Some(&unloaded_profile()), &jobs);
    assert_eq!(filtered, jobs);

    let without_profile = filter_qualified_jobs(None, &jobs);
    assert_eq!(without_profile, jobs);
}

#[test]
fn loaded_profile_keeps_only_qualified_postings_in_order() {
    let profile = bachelor_profile();
    let jobs = vec![
        education_job("bachelor", "bachelor"),
        education_job("phd", "phd"),
        gpa_job("gpa-3", 3.0),
        open_posting("open"),
        gpa_job("gpa-3.9", 3.9),
    ];

    let filtered = filter_qualified_jobs(Some(&profile), &jobs);

    assert_eq!(ids(&filtered), vec!["bachelor", "gpa-3", "open"]);
}

#[test]
fn filtering_leaves_inputs_untouched() {
    let profile = bachelor_profile();
    let jobs = vec![education_job("phd", "phd"), open_posting("open")];
    let snapshot = jobs.clone();

    let _ = filter_qualified_jobs(Some(&profile), &jobs);

    assert_eq!(jobs, snapshot);
}

#[test]
fn every_declared_criterion_is_evaluated() {
    let profile = CandidateProfile::with_qualifications(graduate("high_school", 2.0, "internship"));
    let posting = job(
        "strict",
        JobRequirements {
            education_level: Some(EducationLevel::Phd),
            min_gpa: Some(3.9),
            min_experience: Some(ExperienceLevel::Executive),
            ..JobRequirements::default()
        },
    );

    let outcomes = assess(
        profile.qualifications.as_ref(),
        posting.requirements.as_ref(),
    );

    let criteria: Vec<Criterion> = outcomes.iter().map(|outcome| outcome.criterion).collect();
    assert_eq!(
        criteria,
        vec![Criterion::Education, Criterion::Gpa, Criterion::Experience]
    );
    assert!(outcomes.iter().all(|outcome| !outcome.satisfied()));
}

#[test]
fn missing_required_subject_blocks_course() {
    let profile = student("B", 32.0, &[("Math", "B")]);
    let posting = course(
        "physics-101",
        CourseRequirements {
            required_subjects: strings(&["Math", "Physics"]),
            ..CourseRequirements::default()
        },
    );

    assert!(!engine().is_eligible(Some(&profile), &posting));
    assert!(filter_qualified_courses(Some(&profile), &[posting]).is_empty());
}

#[test]
fn course_thresholds_are_inclusive() {
    let profile = student("B", 30.0, &[("Math", "B"), ("English", "C")]);
    let posting = course(
        "inclusive",
        CourseRequirements {
            min_points: Some(30.0),
            min_grade: Some(LetterGrade::B),
            required_subjects: strings(&["Math"]),
            subject_grades: subject_grades(&[("Math", "B"), ("English", "C")]),
        },
    );

    assert!(engine().is_eligible(Some(&profile), &posting));
}

#[test]
fn subject_grade_below_requirement_fails() {
    let profile = student("A", 40.0, &[("Chemistry", "D")]);
    let posting = course(
        "chem",
        CourseRequirements {
            subject_grades: subject_grades(&[("Chemistry", "C")]),
            ..CourseRequirements::default()
        },
    );

    assert!(!engine().is_eligible(Some(&profile), &posting));
}

#[test]
fn lowest_grade_requirement_accepts_untaken_subject() {
    let profile = student("C", 20.0, &[]);
    let posting = course(
        "any-pass",
        CourseRequirements {
            subject_grades: subject_grades(&[("Art", "F")]),
            ..CourseRequirements::default()
        },
    );

    assert!(engine().is_eligible(Some(&profile), &posting));
}

#[test]
fn unrecognized_requirement_level_constrains_nothing() {
    let profile = CandidateProfile::with_qualifications(graduate("high_school", 2.0, "internship"));
    let posting = education_job("odd", "doctorate of wizardry");

    assert!(engine().is_eligible(Some(&profile), &posting));
}

#[test]
fn single_posting_check_without_qualifications_is_conservative() {
    let engine = engine();
    let unloaded = unloaded_profile();

    assert!(!engine.is_eligible(Some(&unloaded), &gpa_job("gpa", 2.0)));
    assert!(!engine.is_eligible(None, &education_job("edu", "high_school")));
    assert!(engine.is_eligible(None, &open_posting("open")));
}

#[test]
fn skills_require_every_listed_entry() {
    let profile = bachelor_profile();
    let covered = job(
        "covered",
        JobRequirements {
            required_skills: strings(&["sql", "rust"]),
            ..JobRequirements::default()
        },
    );
    let case_differs = job(
        "case",
        JobRequirements {
            required_skills: strings(&["Rust"]),
            ..JobRequirements::default()
        },
    );

    assert!(engine().is_eligible(Some(&profile), &covered));
    assert!(!engine().is_eligible(Some(&profile), &case_differs));
}

#[test]
fn mixed_documents_require_job_and_course_keys() {
    let profile: CandidateProfile = serde_json::from_value(serde_json::json!({
        "qualifications": { "gpa": 1.0, "grades": { "points": 30 } }
    }))
    .expect("profile parses");
    let postings: Vec<crate::matching::Posting> = serde_json::from_value(serde_json::json!([
        { "id": "hybrid", "requirements": { "minGPA": 3.0, "minPoints": 20 } },
        { "id": "points-only", "requirements": { "minPoints": 20 } }
    ]))
    .expect("postings parse");

    let qualified = filter_qualified_courses(Some(&profile), &postings);

    assert_eq!(ids(&qualified), vec!["points-only"]);
}
