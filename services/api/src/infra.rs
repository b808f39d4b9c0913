use career_match::error::InputError;
use career_match::matching::{CandidateProfile, MatchEngine, Posting};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) engine: Arc<MatchEngine>,
}

pub(crate) fn load_json<T>(path: &Path) -> Result<T, InputError>
where
    T: DeserializeOwned,
{
    let raw = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// A missing `--profile` stands for a profile whose qualifications have not loaded yet.
pub(crate) fn load_profile(path: Option<&PathBuf>) -> Result<Option<CandidateProfile>, InputError> {
    path.map(|path| load_json(path)).transpose()
}

pub(crate) fn load_postings(path: &Path) -> Result<Vec<Posting>, InputError> {
    load_json(path)
}

pub(crate) fn find_posting<'a>(postings: &'a [Posting], id: &str) -> Result<&'a Posting, InputError> {
    postings
        .iter()
        .find(|posting| posting.id.as_deref() == Some(id))
        .ok_or_else(|| InputError::UnknownPosting(id.to_string()))
}

pub(crate) fn posting_name(posting: &Posting) -> &str {
    posting
        .title
        .as_deref()
        .or(posting.id.as_deref())
        .unwrap_or("untitled posting")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn scratch_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file created");
        file.write_all(contents.as_bytes()).expect("temp file written");
        file
    }

    #[test]
    fn loads_postings_and_finds_by_id() {
        let file = scratch_file(
            r#"[{"id":"job-1","title":"Analyst","requirements":{"minGPA":3.0}},{"id":"job-2"}]"#,
        );

        let postings = load_postings(file.path()).expect("postings load");
        let posting = find_posting(&postings, "job-1").expect("job-1 present");

        assert_eq!(posting_name(posting), "Analyst");
        assert_eq!(posting_name(&postings[1]), "job-2");
        assert!(matches!(
            find_posting(&postings, "job-9"),
            Err(InputError::UnknownPosting(id)) if id == "job-9"
        ));
    }

    #[test]
    fn reports_unreadable_and_malformed_files() {
        let dir = tempfile::tempdir().expect("temp dir created");
        let missing = dir.path().join("does-not-exist.json");
        assert!(matches!(
            load_postings(&missing),
            Err(InputError::Read { .. })
        ));

        let malformed = scratch_file("{ not json");
        let path = malformed.path().to_path_buf();
        assert!(matches!(
            load_profile(Some(&path)),
            Err(InputError::Parse { .. })
        ));
    }

    #[test]
    fn board_with_loose_values_still_loads() {
        let file = scratch_file(
            r#"[{"id":"job-1","requirements":{"requiredSkills":null,"educationLevel":3}},{"id":"job-2"}]"#,
        );

        let postings = load_postings(file.path()).expect("postings load");

        assert_eq!(postings.len(), 2);
    }

    #[test]
    fn absent_profile_path_means_not_loaded() {
        assert!(load_profile(None).expect("no file needed").is_none());
    }
}
