use crate::bumper::{BumpError, BumpSummary, bump_lines};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// What happened to a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file was rewritten.
    Updated(BumpSummary),
    /// Nothing to bump; the file was left as it was.
    Skipped(BumpError),
}

/// Bumps the versions following `marker` in one file.
///
/// The file is read completely and closed before it is written, and it is
/// only written when the bump succeeded. I/O and encoding problems are
/// returned as errors; a missing marker or version is reported as
/// [`FileOutcome::Skipped`].
pub fn bump_file(path: impl AsRef<Path>, version: &str, marker: &str) -> Result<FileOutcome> {
    let path = path.as_ref();
    debug!("Checking file: '{}'", path.display());

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;

    let outcome = match bump_lines(contents.split_inclusive('\n'), marker, version) {
        Ok(outcome) => outcome,
        Err(err) => return Ok(FileOutcome::Skipped(err)),
    };

    std::fs::write(path, outcome.lines.concat())
        .with_context(|| format!("Failed to write '{}'", path.display()))?;

    debug!(
        "Replaced {} version(s) after {} marker(s) in '{}'",
        outcome.summary.replacements,
        outcome.summary.markers,
        path.display()
    );
    Ok(FileOutcome::Updated(outcome.summary))
}

/// Bumps every file in order and returns the ones that were updated.
///
/// Files without a marker or without a version after it are logged and
/// skipped. Any other error stops the run.
pub fn bump_files<I, P>(files: I, version: &str, marker: &str) -> Result<Vec<PathBuf>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    info!("Updating version to {}", version);
    let mut updated = vec![];

    for file in files {
        let file = file.as_ref();
        match bump_file(file, version, marker)? {
            FileOutcome::Updated(_) => {
                info!("Updated '{}'", file.display());
                updated.push(file.to_path_buf());
            }
            FileOutcome::Skipped(reason) => {
                warn!(
                    "Version in file '{}' was not updated, caused by: {}",
                    file.display(),
                    reason
                );
            }
        }
    }

    debug!("Updated files: {:?}", updated);
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_bump_file_updates_contents() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("version.txt");
        fs::write(&file, "# VERSION\nv0.1.0\nother\n").unwrap();

        let outcome = bump_file(&file, "0.2.0", "# VERSION").unwrap();
        assert_eq!(
            outcome,
            FileOutcome::Updated(BumpSummary {
                markers: 1,
                replacements: 1
            })
        );
        assert_eq!(fs::read_to_string(&file).unwrap(), "# VERSION\nv0.2.0\nother\n");
    }

    #[test]
    fn test_bump_file_skips_without_marker() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("version.txt");
        fs::write(&file, "x\n1.0.0\n").unwrap();

        let outcome = bump_file(&file, "2.0.0", "MARKER").unwrap();
        assert!(matches!(outcome, FileOutcome::Skipped(BumpError::MarkerNotFound { .. })));
        assert_eq!(fs::read_to_string(&file).unwrap(), "x\n1.0.0\n");
    }

    #[test]
    fn test_bump_file_keeps_missing_trailing_newline() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("version.txt");
        fs::write(&file, "MARKER\r\n1.0.0").unwrap();

        bump_file(&file, "1.0.1", "MARKER").unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "MARKER\r\n1.0.1");
    }

    #[test]
    fn test_bump_file_missing_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = bump_file(temp_dir.path().join("missing.txt"), "1.0.0", "MARKER");
        assert!(result.is_err());
    }

    #[test]
    fn test_bump_file_invalid_utf8_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("binary.bin");
        fs::write(&file, b"MA\xff\xfe\n").unwrap();

        assert!(bump_file(&file, "1.0.0", "MA").is_err());
        assert_eq!(fs::read(&file).unwrap(), b"MA\xff\xfe\n");
    }
}
