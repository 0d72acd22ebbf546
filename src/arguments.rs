use clap::Parser;
use clap::builder::{FalseyValueParser, NonEmptyStringValueParser};
use std::path::PathBuf;

/// Inputs are read from the `INPUT_*` variables a CI runner sets for a step,
/// and can be overridden on the command line.
#[derive(Debug, Parser)]
#[command(author, version, about, bin_name = "marker-bump")]
pub struct Arguments {
    /// Whitespace-separated list of files to process
    #[arg(long, env = "INPUT_FILES")]
    pub files: String,
    /// Replacement for every version found on the line after a marker
    #[arg(long, env = "INPUT_VERSION", value_parser = NonEmptyStringValueParser::new())]
    pub new_version: String,
    /// Text that flags the next line as holding a version
    #[arg(long, env = "INPUT_MARKER", value_parser = NonEmptyStringValueParser::new())]
    pub marker: String,
    /// Runners pass unset optional inputs as empty strings, which count as false
    #[arg(long, short, env = "INPUT_VERBOSE", value_parser = FalseyValueParser::new())]
    pub verbose: bool,
}

impl Arguments {
    pub fn files(&self) -> Vec<PathBuf> {
        self.files.split_whitespace().map(PathBuf::from).collect()
    }
}
