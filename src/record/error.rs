use std::{fmt, path::PathBuf};

/// Failures surfaced while loading the CV record. All of these occur
/// before any output file is written.
#[derive(Debug)]
pub enum DataError {
    /// The input file does not exist.
    NotFound(PathBuf),
    /// The input could not be read or is not well-formed JSON.
    Malformed(String),
    /// The JSON is well-formed but a required field is absent.
    FieldMissing(String),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::NotFound(path) => {
                write!(f, "CV data file not found: {}", path.display())
            }
            DataError::Malformed(details) => {
                write!(f, "CV data is not valid JSON: {}", details)
            }
            DataError::FieldMissing(details) => {
                write!(f, "CV data is missing a required field: {}", details)
            }
        }
    }
}

impl std::error::Error for DataError {}
