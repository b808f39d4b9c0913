use std::collections::BTreeMap;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use super::lenient;

/// Highest education tier a candidate has completed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum EducationLevel {
    HighSchool,
    Associate,
    Bachelor,
    Master,
    Phd,
    /// Value authored outside the known tiers; ranks below every known tier.
    Unrecognized(String),
}

impl EducationLevel {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high_school" => Self::HighSchool,
            "associate" => Self::Associate,
            "bachelor" => Self::Bachelor,
            "master" => Self::Master,
            "phd" => Self::Phd,
            _ => Self::Unrecognized(raw.trim().to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::HighSchool => "high_school",
            Self::Associate => "associate",
            Self::Bachelor => "bachelor",
            Self::Master => "master",
            Self::Phd => "phd",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::HighSchool => "High School",
            Self::Associate => "Associate Degree",
            Self::Bachelor => "Bachelor's Degree",
            Self::Master => "Master's Degree",
            Self::Phd => "PhD",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl EducationLevel {
    /// Non-string values are kept as their JSON text and stay unrecognized.
    pub(crate) fn from_value(value: &Value) -> Self {
        Self::parse(&lenient::text_from_value(value))
    }
}

impl<'de> Deserialize<'de> for EducationLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(|value| Self::from_value(&value))
    }
}

impl From<String> for EducationLevel {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<EducationLevel> for String {
    fn from(value: EducationLevel) -> Self {
        value.key().to_string()
    }
}

/// Professional experience tier claimed by a candidate or demanded by a job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum ExperienceLevel {
    NoExperience,
    Internship,
    EntryLevel,
    MidLevel,
    SeniorLevel,
    Executive,
    Unrecognized(String),
}

impl ExperienceLevel {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "no_experience" => Self::NoExperience,
            "internship" => Self::Internship,
            "entry_level" => Self::EntryLevel,
            "mid_level" => Self::MidLevel,
            "senior_level" => Self::SeniorLevel,
            "executive" => Self::Executive,
            _ => Self::Unrecognized(raw.trim().to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::NoExperience => "no_experience",
            Self::Internship => "internship",
            Self::EntryLevel => "entry_level",
            Self::MidLevel => "mid_level",
            Self::SeniorLevel => "senior_level",
            Self::Executive => "executive",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::NoExperience => "No Experience",
            Self::Internship => "Internship",
            Self::EntryLevel => "Entry Level",
            Self::MidLevel => "Mid Level",
            Self::SeniorLevel => "Senior Level",
            Self::Executive => "Executive",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl ExperienceLevel {
    /// Non-string values are kept as their JSON text and stay unrecognized.
    pub(crate) fn from_value(value: &Value) -> Self {
        Self::parse(&lenient::text_from_value(value))
    }
}

impl<'de> Deserialize<'de> for ExperienceLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(|value| Self::from_value(&value))
    }
}

impl From<String> for ExperienceLevel {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<ExperienceLevel> for String {
    fn from(value: ExperienceLevel) -> Self {
        value.key().to_string()
    }
}

/// Letter grade on the A–F scale used by schools and course admissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    E,
    F,
    Unrecognized(String),
}

impl LetterGrade {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "A" => Self::A,
            "B" => Self::B,
            "C" => Self::C,
            "D" => Self::D,
            "E" => Self::E,
            "F" => Self::F,
            _ => Self::Unrecognized(raw.trim().to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl LetterGrade {
    /// Non-string values are kept as their JSON text and stay unrecognized.
    pub(crate) fn from_value(value: &Value) -> Self {
        Self::parse(&lenient::text_from_value(value))
    }
}

impl<'de> Deserialize<'de> for LetterGrade {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(|value| Self::from_value(&value))
    }
}

impl From<String> for LetterGrade {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<LetterGrade> for String {
    fn from(value: LetterGrade) -> Self {
        value.key().to_string()
    }
}

/// School results attached to a candidate profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grades {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall: Option<LetterGrade>,
    #[serde(default, deserialize_with = "lenient::grade_map")]
    pub subjects: BTreeMap<String, LetterGrade>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub points: Option<f64>,
}

/// Qualification block maintained through the profile-edit forms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Qualifications {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education_level: Option<EducationLevel>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub degree_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub gpa: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<ExperienceLevel>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grades: Option<Grades>,
}

/// Candidate document as stored by the profile collaborator.
///
/// `qualifications` stays `None` until the profile has loaded; fields the
/// engine does not read are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifications: Option<Qualifications>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CandidateProfile {
    pub fn with_qualifications(qualifications: Qualifications) -> Self {
        Self {
            qualifications: Some(qualifications),
            ..Self::default()
        }
    }
}

/// Constraints a company attaches to a job posting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequirements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education_level: Option<EducationLevel>,
    #[serde(
        rename = "minGPA",
        alias = "minGpa",
        default,
        deserialize_with = "lenient::optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_gpa: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub degree_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_experience: Option<ExperienceLevel>,
    #[serde(
        default,
        deserialize_with = "lenient::string_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub required_skills: Vec<String>,
}

/// Constraints an institution attaches to a course posting.
///
/// Empty subject collections are still written out so a constructed course
/// reads back as a course.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequirements {
    #[serde(
        default,
        deserialize_with = "lenient::optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_points: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_grade: Option<LetterGrade>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub required_subjects: Vec<String>,
    #[serde(default, deserialize_with = "lenient::grade_map")]
    pub subject_grades: BTreeMap<String, LetterGrade>,
}

/// Keys that only appear on course requirement documents.
const COURSE_KEYS: [&str; 4] = ["minPoints", "minGrade", "requiredSubjects", "subjectGrades"];

const JOB_KEYS: [&str; 6] = [
    "educationLevel",
    "minGPA",
    "minGpa",
    "degreeType",
    "minExperience",
    "requiredSkills",
];

/// Requirement document attached to a posting.
///
/// Stored documents carry no tag. Every job and course key present is
/// evaluated, and the posting counts as a course when any course-only key
/// appears. The document serializes back exactly as it was received.
#[derive(Debug, Clone, PartialEq)]
pub struct Requirements {
    kind: PostingKind,
    job: JobRequirements,
    course: CourseRequirements,
    document: Value,
}

impl Requirements {
    pub fn kind(&self) -> PostingKind {
        self.kind
    }

    pub fn job(&self) -> &JobRequirements {
        &self.job
    }

    pub fn course(&self) -> &CourseRequirements {
        &self.course
    }

    /// The requirement object as stored, unknown keys included.
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Declares keys from both the job and the course vocabulary.
    pub fn is_mixed(&self) -> bool {
        declares_any(&self.document, &JOB_KEYS) && declares_any(&self.document, &COURSE_KEYS)
    }

    fn from_document(document: Value) -> Result<Self, serde_json::Error> {
        let kind = if declares_any(&document, &COURSE_KEYS) {
            PostingKind::Course
        } else {
            PostingKind::Job
        };

        let (job, course) = if document.is_object() {
            (
                JobRequirements::deserialize(&document)?,
                CourseRequirements::deserialize(&document)?,
            )
        } else {
            (JobRequirements::default(), CourseRequirements::default())
        };

        Ok(Self {
            kind,
            job,
            course,
            document,
        })
    }
}

fn declares_any(document: &Value, keys: &[&str]) -> bool {
    document
        .as_object()
        .is_some_and(|object| keys.iter().any(|key| object.contains_key(*key)))
}

fn document_of<T: Serialize>(requirements: &T) -> Value {
    serde_json::to_value(requirements).unwrap_or_else(|_| Value::Object(Map::new()))
}

impl From<JobRequirements> for Requirements {
    fn from(job: JobRequirements) -> Self {
        Self {
            kind: PostingKind::Job,
            document: document_of(&job),
            job,
            course: CourseRequirements::default(),
        }
    }
}

impl From<CourseRequirements> for Requirements {
    fn from(course: CourseRequirements) -> Self {
        Self {
            kind: PostingKind::Course,
            document: document_of(&course),
            job: JobRequirements::default(),
            course,
        }
    }
}

impl Serialize for Requirements {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.document.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Requirements {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let document = Value::deserialize(deserializer)?;
        Self::from_document(document).map_err(de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostingKind {
    Job,
    Course,
}

impl PostingKind {
    pub const fn label(self) -> &'static str {
        match self {
            PostingKind::Job => "job",
            PostingKind::Course => "course",
        }
    }
}

/// Job or course posting as published by a company or institution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Posting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Requirements>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Posting {
    pub fn job(id: impl Into<String>, requirements: JobRequirements) -> Self {
        Self {
            id: Some(id.into()),
            requirements: Some(requirements.into()),
            ..Self::default()
        }
    }

    pub fn course(id: impl Into<String>, requirements: CourseRequirements) -> Self {
        Self {
            id: Some(id.into()),
            requirements: Some(requirements.into()),
            ..Self::default()
        }
    }
}
