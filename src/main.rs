use depwalker::cli::{Args, Command};
use log::LevelFilter;
use std::process;

fn main() {
    let args = Args::parse_args();
    init_logging(args.quiet, args.verbose);

    let command = Command::from_args(args);
    process::exit(command.run());
}

/// Warn by default; `-v` enables debug, `-q` keeps only errors. `RUST_LOG`
/// overrides both.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}
