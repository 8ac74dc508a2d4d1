//! Loader for the CV data record

use std::path::Path;

use tracing::debug;

use crate::record::{CvRecord, DataError};

/// Fixed location of the CV data record, relative to the working
/// directory.
pub const DATA_PATH: &str = "data/cv-data.json";

/// Read a file and deserialize it into a CvRecord. Typed deserialization
/// doubles as the single upfront validation pass: a required field absent
/// from the input surfaces here as FieldMissing rather than at some later
/// point during rendering.
pub fn load(filename: &Path) -> Result<CvRecord, DataError> {
    let content = match std::fs::read_to_string(filename) {
        Ok(content) => content,
        Err(error) => {
            debug!(?error);
            return match error.kind() {
                std::io::ErrorKind::NotFound => {
                    Err(DataError::NotFound(filename.to_path_buf()))
                }
                _ => Err(DataError::Malformed(
                    error
                        .kind()
                        .to_string(),
                )),
            };
        }
    };

    parse(&content)
}

/// Parse JSON text into a CvRecord, or classify the failure. serde_json
/// distinguishes syntax errors from data errors; the latter are missing
/// or wrongly-typed fields in otherwise well-formed input.
pub fn parse(content: &str) -> Result<CvRecord, DataError> {
    match serde_json::from_str(content) {
        Ok(record) => Ok(record),
        Err(error) => {
            debug!(?error);
            match error.classify() {
                serde_json::error::Category::Data => {
                    Err(DataError::FieldMissing(error.to_string()))
                }
                _ => Err(DataError::Malformed(error.to_string())),
            }
        }
    }
}

#[cfg(test)]
mod check {
    use std::io::Write;

    use super::*;

    const MINIMAL: &str = r#"{
        "personal": {
            "name": "Ada Lovelace",
            "email": "ada@example.org",
            "phone": "+44 20 0000 0000",
            "location": "London, UK",
            "summary": "Mathematician and writer.",
            "social": []
        },
        "experience": [],
        "education": [],
        "skills": [],
        "publications": [],
        "awards": [],
        "hobbies": []
    }"#;

    #[test]
    fn well_formed_record_loads() {
        let record = parse(MINIMAL).unwrap();
        assert_eq!(
            record
                .personal
                .name,
            "Ada Lovelace"
        );
        assert!(record
            .experience
            .is_empty());
    }

    #[test]
    fn missing_personal_key_is_field_missing() {
        let result = parse(r#"{"experience": [], "education": [], "skills": [], "publications": [], "awards": [], "hobbies": []}"#);

        match result {
            Err(DataError::FieldMissing(details)) => {
                assert!(details.contains("personal"));
            }
            other => panic!("Expected FieldMissing, got {:?}", other),
        }
    }

    #[test]
    fn invalid_json_is_malformed() {
        let result = parse("{ not json");
        assert!(matches!(result, Err(DataError::Malformed(_))));
    }

    #[test]
    fn absent_file_is_not_found() {
        let result = load(Path::new("no/such/cv-data.json"));
        assert!(matches!(result, Err(DataError::NotFound(_))));
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes())
            .unwrap();

        let record = load(file.path()).unwrap();
        assert_eq!(
            record
                .personal
                .location,
            "London, UK"
        );
    }
}
