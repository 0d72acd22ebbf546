use crate::scanner::{LinePair, LinePairs, line_pairs};
use log::debug;
use regex::{Captures, Regex};
use std::sync::LazyLock;
use thiserror::Error;

/// Semantic version as defined on <https://semver.org/>.
///
/// Unanchored, so it finds versions embedded anywhere in a line (`v1.2.3`,
/// `"1.2.3-rc.1"`, ...). The named groups are not used for substitution.
pub const SEMVER_PATTERN: &str = concat!(
    r"(?P<major>0|[1-9][0-9]*)\.(?P<minor>0|[1-9][0-9]*)\.(?P<patch>0|[1-9][0-9]*)",
    r"(?:-(?P<prerelease>(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*))?",
    r"(?:\+(?P<buildmetadata>[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?",
);

static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SEMVER_PATTERN).expect("Invalid semantic version regex"));

pub fn version_match_regex() -> &'static Regex {
    &VERSION_REGEX
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BumpError {
    #[error("Found no marker '{marker}'")]
    MarkerNotFound { marker: String },
    #[error("No line following a marker contained a semantic version")]
    NoVersionUpdated,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct BumpSummary {
    /// Lines that directly followed a marker line.
    pub markers: usize,
    /// Version substrings replaced across the whole input.
    pub replacements: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    pub lines: Vec<String>,
    pub summary: BumpSummary,
}

/// Lazily rewrites the line after each marker line.
///
/// Every input line comes out again, in order. The counters are only final
/// once the iterator is exhausted, so call [`VersionBumper::finish`] after
/// consuming it to learn whether anything was bumped.
#[derive(Debug)]
pub struct VersionBumper<'a, I> {
    pairs: I,
    marker: &'a str,
    version: &'a str,
    line_number: usize,
    summary: BumpSummary,
}

impl<'a, I> VersionBumper<'a, I> {
    pub fn new(pairs: I, marker: &'a str, version: &'a str) -> Self {
        VersionBumper {
            pairs,
            marker,
            version,
            line_number: 0,
            summary: BumpSummary::default(),
        }
    }

    pub fn summary(&self) -> BumpSummary {
        self.summary
    }
}

impl<'a, I, L> VersionBumper<'a, I>
where
    I: Iterator<Item = LinePair<L>>,
    L: AsRef<str> + Into<String>,
{
    /// Drains whatever is left and validates the run.
    pub fn finish(mut self) -> Result<BumpSummary, BumpError> {
        self.by_ref().for_each(drop);

        if self.summary.markers == 0 {
            return Err(BumpError::MarkerNotFound {
                marker: self.marker.to_string(),
            });
        }
        if self.summary.replacements == 0 {
            return Err(BumpError::NoVersionUpdated);
        }
        Ok(self.summary)
    }

    fn replace_versions(&mut self, line: L) -> String {
        let mut count = 0;
        let version = self.version;
        let rewritten = version_match_regex()
            .replace_all(line.as_ref(), |_: &Captures| {
                count += 1;
                version
            })
            .into_owned();

        if count == 0 {
            return line.into();
        }
        debug!(
            "Line {}: replaced {} version(s) with '{}'",
            self.line_number, count, version
        );
        self.summary.replacements += count;
        rewritten
    }
}

impl<'a, I, L> Iterator for VersionBumper<'a, I>
where
    I: Iterator<Item = LinePair<L>>,
    L: AsRef<str> + Into<String>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let LinePair { previous, current } = self.pairs.next()?;
        self.line_number += 1;

        let after_marker = previous.is_some_and(|line| line.as_ref().contains(self.marker));
        if !after_marker {
            return Some(current.into());
        }
        self.summary.markers += 1;
        Some(self.replace_versions(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pairs.size_hint()
    }
}

/// Builds a [`VersionBumper`] straight from a sequence of lines.
pub fn bump<'a, I>(
    lines: I,
    marker: &'a str,
    version: &'a str,
) -> VersionBumper<'a, LinePairs<I::IntoIter>>
where
    I: IntoIterator,
    I::Item: Clone,
{
    VersionBumper::new(line_pairs(lines), marker, version)
}

/// Runs the whole input through a [`VersionBumper`] and validates the result.
pub fn bump_lines<I>(lines: I, marker: &str, version: &str) -> Result<BumpOutcome, BumpError>
where
    I: IntoIterator,
    I::Item: Clone + AsRef<str> + Into<String>,
{
    let mut bumper = bump(lines, marker, version);
    let lines: Vec<String> = bumper.by_ref().collect();
    let summary = bumper.finish()?;
    Ok(BumpOutcome { lines, summary })
}
