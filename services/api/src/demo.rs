use crate::infra::{find_posting, load_postings, load_profile, posting_name};
use career_match::config::AppConfig;
use career_match::error::AppError;
use career_match::matching::{
    CandidateProfile, CourseRequirements, EducationLevel, ExperienceLevel, Grades,
    JobRequirements, LetterGrade, MatchEngine, MatchOutcome, Posting, Qualifications,
    ScoredPosting,
};
use career_match::telemetry;
use clap::Args;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Maximum number of postings listed per section.
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Simulate a profile whose qualifications have not loaded yet.
    #[arg(long)]
    pub(crate) unloaded: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// Candidate profile JSON. Omit to rank as if the profile is still loading.
    #[arg(long)]
    pub(crate) profile: Option<PathBuf>,
    /// JSON array of job or course postings
    #[arg(long)]
    pub(crate) postings: PathBuf,
    /// Maximum number of results (defaults to MATCH_RESULT_LIMIT)
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Print the ranked postings as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ExplainArgs {
    /// Candidate profile JSON
    #[arg(long)]
    pub(crate) profile: Option<PathBuf>,
    /// JSON array of job or course postings
    #[arg(long)]
    pub(crate) postings: PathBuf,
    /// Identifier of the posting to explain
    #[arg(long)]
    pub(crate) posting_id: String,
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), AppError> {
    let RankArgs {
        profile,
        postings,
        limit,
        json,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let engine = MatchEngine::new(config.matching);

    let profile = load_profile(profile.as_ref())?;
    let postings = load_postings(&postings)?;
    let limit = limit.unwrap_or(engine.config().result_limit);
    let ranked = engine.rank(profile.as_ref(), &postings, limit);

    if json {
        match serde_json::to_string_pretty(&ranked) {
            Ok(json) => println!("{}", json),
            Err(err) => println!("Ranked payload unavailable: {}", err),
        }
        return Ok(());
    }

    println!(
        "{} of {} postings qualify (showing up to {})",
        ranked.len(),
        postings.len(),
        limit
    );
    for line in ranking_lines(&ranked) {
        println!("{}", line);
    }

    Ok(())
}

pub(crate) fn run_explain(args: ExplainArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let engine = MatchEngine::new(config.matching);

    let profile = load_profile(args.profile.as_ref())?;
    let postings = load_postings(&args.postings)?;
    let posting = find_posting(&postings, &args.posting_id)?;

    let outcome = engine.evaluate(profile.as_ref(), posting);
    for line in outcome_lines(posting, &outcome) {
        println!("{}", line);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { limit, unloaded } = args;

    let engine = MatchEngine::default();
    let limit = limit.unwrap_or(engine.config().result_limit);
    let profile = if unloaded {
        CandidateProfile::default()
    } else {
        demo_profile()
    };

    println!("Career match demo");
    if unloaded {
        println!("- Profile qualifications not loaded; every posting is shown");
    } else {
        println!("- Candidate: Bachelor's Degree, GPA 3.40, Entry Level, 32 points");
    }

    let jobs = demo_jobs();
    println!("\nRecommended jobs");
    for line in ranking_lines(&engine.rank(Some(&profile), &jobs, limit)) {
        println!("{}", line);
    }

    let courses = demo_courses();
    println!("\nRecommended courses");
    for line in ranking_lines(&engine.rank(Some(&profile), &courses, limit)) {
        println!("{}", line);
    }

    let board: Vec<Posting> = jobs.into_iter().chain(courses).collect();
    match closest_miss(&engine, &profile, &board) {
        Some((posting, outcome)) => {
            println!("\nClosest miss");
            for line in outcome_lines(posting, &outcome) {
                println!("{}", line);
            }
        }
        None => println!("\nNo near misses: the candidate qualifies for every posting"),
    }

    Ok(())
}

/// Highest scoring posting the candidate does not qualify for.
fn closest_miss<'a>(
    engine: &MatchEngine,
    profile: &CandidateProfile,
    board: &'a [Posting],
) -> Option<(&'a Posting, MatchOutcome)> {
    board
        .iter()
        .map(|posting| (posting, engine.evaluate(Some(profile), posting)))
        .filter(|(_, outcome)| !outcome.eligible)
        .fold(None, |best, candidate| match best {
            Some(best) if outcome_score(&best) >= outcome_score(&candidate) => Some(best),
            _ => Some(candidate),
        })
}

fn outcome_score((_, outcome): &(&Posting, MatchOutcome)) -> u8 {
    outcome.match_score
}

pub(crate) fn ranking_lines(ranked: &[ScoredPosting]) -> Vec<String> {
    if ranked.is_empty() {
        return vec!["  (no qualifying postings)".to_string()];
    }

    ranked
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let kind = entry
                .posting
                .requirements
                .as_ref()
                .map(|requirements| requirements.kind().label())
                .unwrap_or("open");
            format!(
                "  {}. {} [{}] match {}%",
                index + 1,
                posting_name(&entry.posting),
                kind,
                entry.match_score
            )
        })
        .collect()
}

pub(crate) fn outcome_lines(posting: &Posting, outcome: &MatchOutcome) -> Vec<String> {
    let mut lines = vec![format!(
        "- {} -> {} (match {}%)",
        posting_name(posting),
        if outcome.eligible {
            "eligible"
        } else {
            "not eligible"
        },
        outcome.match_score
    )];

    if outcome.breakdown.is_empty() {
        lines.push("  No listed requirements".to_string());
    }
    for row in &outcome.breakdown {
        lines.push(format!(
            "  [{}] {} | you: {}",
            if row.satisfied { "x" } else { " " },
            row.requirement_label,
            row.candidate_value_label
        ));
    }

    lines
}

fn demo_profile() -> CandidateProfile {
    let mut profile = CandidateProfile::with_qualifications(Qualifications {
        education_level: Some(EducationLevel::Bachelor),
        degree_type: Some("Computer Science".to_string()),
        gpa: Some(3.4),
        experience: Some(ExperienceLevel::EntryLevel),
        skills: vec!["rust".to_string(), "sql".to_string()],
        grades: Some(Grades {
            overall: Some(LetterGrade::B),
            subjects: BTreeMap::from([
                ("Math".to_string(), LetterGrade::A),
                ("Physics".to_string(), LetterGrade::B),
                ("English".to_string(), LetterGrade::C),
            ]),
            points: Some(32.0),
        }),
    });
    profile.id = Some("demo-student".to_string());
    profile
}

fn titled(mut posting: Posting, title: &str) -> Posting {
    posting.title = Some(title.to_string());
    posting
}

fn demo_jobs() -> Vec<Posting> {
    vec![
        titled(
            Posting::job(
                "job-platform",
                JobRequirements {
                    education_level: Some(EducationLevel::Bachelor),
                    min_gpa: Some(3.0),
                    degree_type: Some("computer science".to_string()),
                    min_experience: Some(ExperienceLevel::EntryLevel),
                    required_skills: vec!["rust".to_string()],
                },
            ),
            "Platform Engineer",
        ),
        titled(
            Posting::job(
                "job-data",
                JobRequirements {
                    min_gpa: Some(3.2),
                    required_skills: vec!["sql".to_string(), "python".to_string()],
                    ..JobRequirements::default()
                },
            ),
            "Data Analyst",
        ),
        titled(
            Posting::job(
                "job-research",
                JobRequirements {
                    education_level: Some(EducationLevel::Master),
                    min_gpa: Some(3.6),
                    ..JobRequirements::default()
                },
            ),
            "Research Engineer",
        ),
        titled(
            Posting::job(
                "job-intern",
                JobRequirements {
                    min_experience: Some(ExperienceLevel::Internship),
                    ..JobRequirements::default()
                },
            ),
            "Engineering Intern",
        ),
    ]
}

fn demo_courses() -> Vec<Posting> {
    vec![
        titled(
            Posting::course(
                "course-physics",
                CourseRequirements {
                    min_points: Some(30.0),
                    required_subjects: vec!["Math".to_string(), "Physics".to_string()],
                    ..CourseRequirements::default()
                },
            ),
            "Applied Physics",
        ),
        titled(
            Posting::course(
                "course-literature",
                CourseRequirements {
                    min_grade: Some(LetterGrade::A),
                    subject_grades: BTreeMap::from([("English".to_string(), LetterGrade::B)]),
                    ..CourseRequirements::default()
                },
            ),
            "English Literature",
        ),
        titled(
            Posting::course(
                "course-engineering",
                CourseRequirements {
                    min_points: Some(34.0),
                    ..CourseRequirements::default()
                },
            ),
            "Mechanical Engineering",
        ),
    ]
}
