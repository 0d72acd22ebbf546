//! Output side of the workflow-command protocol used by CI runners.

use anyhow::{Context, Result};
use log::debug;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Environment variable naming the file that newer runners read outputs from.
pub const OUTPUT_FILE_ENV: &str = "GITHUB_OUTPUT";

/// Escapes a value so it survives on a single workflow-command line.
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

pub fn set_output_command(name: &str, value: &str) -> String {
    format!("::set-output name={}::{}", name, escape_data(value))
}

/// Appends `name=value` to an output file.
pub fn append_output(path: impl AsRef<Path>, name: &str, value: &str) -> Result<()> {
    let path = path.as_ref();
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open output file {:?}", path))?;
    writeln!(file, "{}={}", name, value)
        .with_context(|| format!("Failed to write output file {:?}", path))?;
    Ok(())
}

/// Reports a named output value to the invoking runner.
///
/// Always prints the `::set-output` command on stdout, and also appends to
/// the file named by `GITHUB_OUTPUT` when the runner provides one.
pub fn set_output(name: &str, value: &str) -> Result<()> {
    println!("{}", set_output_command(name, value));

    if let Some(path) = std::env::var_os(OUTPUT_FILE_ENV).filter(|path| !path.is_empty()) {
        debug!("Writing output '{}' to {:?}", name, path);
        append_output(path, name, value)?;
    }
    Ok(())
}
