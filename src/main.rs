use anyhow::Result;
use clap::Parser;
use log::{LevelFilter, warn};
use marker_bump::{actions, arguments::Arguments, driver::bump_files};
use semver::Version;

fn main() -> Result<()> {
    let args = Arguments::parse();
    pretty_env_logger::env_logger::builder()
        .filter_level(if args.verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .format_timestamp(None)
        .init();

    run(&args)
}

fn run(args: &Arguments) -> Result<()> {
    // Still applied verbatim; later runs just won't match it again
    if let Err(err) = Version::parse(&args.new_version) {
        warn!("'{}' is not a semantic version: {}", args.new_version, err);
    }

    let updated = bump_files(args.files(), &args.new_version, &args.marker)?;

    let value = updated
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    actions::set_output("files", &value)
}
