//! splitmod - splits a ProTracker module into song and sample data
//!
//! Usage:
//!   splitmod path/to/file.mod [/q]
//!
//! Writes `file.mod.trk`, `file.mod.smp` and `file.mod.smp.i`.

use clap::Parser;
use splitmod_cli::{split_file, SplitOptions};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "splitmod")]
#[command(about = "Splits a ProTracker module into song and sample data")]
#[command(version)]
struct Cli {
    /// ProTracker module to split
    module: PathBuf,

    /// `/q` suppresses progress messages, as --quiet does
    #[arg(value_name = "/q", value_parser = parse_quiet_switch)]
    switch: Option<QuietSwitch>,

    /// Suppress progress messages
    #[arg(short, long)]
    quiet: bool,

    /// Write the artifacts here instead of next to the module
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,
}

/// The DOS-style `/q` switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QuietSwitch;

fn parse_quiet_switch(arg: &str) -> Result<QuietSwitch, String> {
    if arg.eq_ignore_ascii_case("/q") {
        Ok(QuietSwitch)
    } else {
        Err(format!("unknown switch '{}', expected /q", arg))
    }
}

impl Cli {
    fn options(&self) -> SplitOptions {
        SplitOptions {
            quiet: self.quiet || self.switch.is_some(),
            out_dir: self.out_dir.clone(),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // Help and version go to stdout and are not failures
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match split_file(&cli.module, &cli.options()) {
        Ok(report) => {
            tracing::debug!(?report, "split complete");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("ERROR: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn module_only() {
        let cli = Cli::try_parse_from(["splitmod", "tune.mod"]).unwrap();
        assert_eq!(cli.module, PathBuf::from("tune.mod"));
        assert_eq!(cli.options(), SplitOptions::default());
    }

    #[test]
    fn slash_q_in_any_case() {
        for switch in ["/q", "/Q"] {
            let cli = Cli::try_parse_from(["splitmod", "tune.mod", switch]).unwrap();
            assert!(cli.options().quiet);
        }
    }

    #[test]
    fn long_quiet_and_out_dir() {
        let cli =
            Cli::try_parse_from(["splitmod", "--quiet", "--out-dir", "build", "tune.mod"]).unwrap();
        assert_eq!(cli.options(), SplitOptions::quiet().with_out_dir("build"));
    }

    #[test]
    fn other_switches_are_rejected() {
        assert!(Cli::try_parse_from(["splitmod", "tune.mod", "/x"]).is_err());
        assert!(Cli::try_parse_from(["splitmod"]).is_err());
        assert!(Cli::try_parse_from(["splitmod", "a.mod", "/q", "extra"]).is_err());
    }
}
