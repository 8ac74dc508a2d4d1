//! Output persistence and the external LaTeX toolchain

use std::path::{Path, PathBuf};
use std::process::Command;
use std::{fmt, fs};

use tracing::{debug, info};

/// Directory the typeset source and compiled artifact land in.
pub const OUTPUT_DIR: &str = "output";

/// Failures on the output side of a generation run.
#[derive(Debug)]
pub enum OutputError {
    /// A file or directory could not be created or written.
    WriteFailed { path: PathBuf, details: String },
    /// The external compiler executable is absent from the search path.
    CompilerNotInstalled,
    /// The external compiler ran and exited non-zero; its captured
    /// streams are carried verbatim for display.
    CompilationFailed { stdout: String, stderr: String },
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::WriteFailed { path, details } => {
                write!(f, "Failed writing {}: {}", path.display(), details)
            }
            OutputError::CompilerNotInstalled => {
                write!(f, "pdflatex not found on this system")
            }
            OutputError::CompilationFailed { .. } => {
                write!(f, "LaTeX compilation failed")
            }
        }
    }
}

impl std::error::Error for OutputError {}

/// Write a complete document buffer to disk, overwriting any previous
/// file. The handle is scoped inside fs::write and released on every
/// path.
pub fn write_file(path: &Path, content: &str) -> Result<(), OutputError> {
    fs::write(path, content).map_err(|error| {
        debug!(?error);
        OutputError::WriteFailed {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    })
}

/// Name of the final PDF artifact for a given subject. Path separators
/// are replaced so the rename below cannot escape the output directory;
/// everything else in the name is kept as-is.
pub fn artifact_name(name: &str, anonymous: bool) -> String {
    if anonymous {
        "Anonymous.pdf".to_string()
    } else {
        format!("{}.pdf", name.replace(['/', '\\'], "-"))
    }
}

/// Compile the LaTeX source with pdflatex, blocking until it exits, then
/// rename the compiler's default cv.pdf to the artifact name. If the
/// default artifact is unexpectedly absent after a clean exit, the
/// rename is skipped and the default path is reported instead.
pub fn compile(source: &Path, artifact: &str) -> Result<PathBuf, OutputError> {
    info!("Compiling {} to PDF", source.display());

    let output = Command::new("pdflatex")
        .arg("-interaction=nonstopmode")
        .arg(format!("-output-directory={}", OUTPUT_DIR))
        .arg(source)
        .output()
        .map_err(|error| {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => OutputError::CompilerNotInstalled,
                _ => OutputError::WriteFailed {
                    path: source.to_path_buf(),
                    details: error.to_string(),
                },
            }
        })?;

    if !output
        .status
        .success()
    {
        return Err(OutputError::CompilationFailed {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    debug!("pdflatex exited {}", output.status);

    let produced = Path::new(OUTPUT_DIR).join("cv.pdf");
    if !produced.exists() {
        return Ok(produced);
    }

    let target = Path::new(OUTPUT_DIR).join(artifact);
    fs::rename(&produced, &target).map_err(|error| OutputError::WriteFailed {
        path: target.clone(),
        details: error.to_string(),
    })?;

    Ok(target)
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn artifact_is_named_after_the_subject() {
        assert_eq!(artifact_name("Ada Lovelace", false), "Ada Lovelace.pdf");
    }

    #[test]
    fn anonymous_artifact_has_the_fixed_name() {
        assert_eq!(artifact_name("Ada Lovelace", true), "Anonymous.pdf");
    }

    #[test]
    fn path_separators_cannot_leave_the_output_directory() {
        assert_eq!(artifact_name("../etc/passwd", false), "..-etc-passwd.pdf");
        assert_eq!(artifact_name("a\\b", false), "a-b.pdf");
    }
}
