//! The CLI interface for displaymode
//!
//! Run `displaymode h` to see the available commands.
use std::io::{self, Write};

use color_eyre::eyre::Result;
use displaymode::{ParsedCommand, SystemDisplays, execute};
use structopt::{StructOpt, clap::AppSettings};

/// CLI arguments
///
/// `--verbose` is the only flag handled here; every other token, hyphenated or not, is passed on
/// to `ParsedCommand::parse`.
#[derive(StructOpt, Debug)]
#[structopt(
    name = "displaymode",
    about = "Lists and changes display resolutions and refresh rates.",
    settings = &[
        AppSettings::TrailingVarArg,
        AppSettings::AllowLeadingHyphen,
        AppSettings::DisableHelpFlags,
        AppSettings::DisableVersion,
    ]
)]
struct Opts {
    /// Output debug info
    #[structopt(long)]
    verbose: bool,
    /// Single-letter command (`t`, `d`, `h` or `v`) followed by its arguments
    #[structopt(name = "COMMAND")]
    args: Vec<String>,
}

/// Entry point for `displaymode`.
fn main() -> Result<()> {
    color_eyre::install()?;

    let opts = Opts::from_args();

    let log_level = if opts.verbose {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level.as_str()))
        .init();

    log::debug!("Parsed Opts:\n{:#?}", opts);

    let command = ParsedCommand::parse(&opts.args);
    let provider = SystemDisplays::new();

    let code = {
        let mut stdout = io::stdout().lock();
        let mut stderr = io::stderr().lock();
        let code = execute(&command, &provider, &mut stdout, &mut stderr)?;
        stdout.flush()?;
        code
    };

    if code != 0 {
        log::debug!("Exiting with code {}", code);
        std::process::exit(code);
    }
    Ok(())
}
