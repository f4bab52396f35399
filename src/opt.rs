//! Command line options of the harness.

use std::path::PathBuf;

use clap::Parser;

/// Run a program to completion, write its wall-clock time to a file and exit
/// with the program's own termination status.
///
/// The exit code of this process is the exit code of the program if it exited
/// normally, or the number of the signal that terminated or stopped it.
#[derive(Parser, Debug)]
#[clap(name = "judge-executor", version)]
pub struct Opt {
    /// File where the elapsed wall-clock time is written, in seconds
    ///
    /// Overwritten if it already exists. Exactly one line with 10 fractional
    /// digits, e.g. `0.1234560000`.
    pub time_file: PathBuf,

    /// Program to execute
    ///
    /// A bare name is resolved in $PATH like a shell command.
    pub command: PathBuf,

    /// Arguments passed verbatim to the program
    #[clap(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Verbosity of the diagnostics on stderr.
    #[clap(flatten)]
    pub logger: LoggerOpt,
}

/// Options for configuring the global logger.
#[derive(Parser, Debug, Clone)]
pub struct LoggerOpt {
    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl LoggerOpt {
    /// Configure the global logger based on the verbosity level.
    pub fn enable_log(&self) {
        if self.verbose > 0 {
            std::env::set_var("RUST_BACKTRACE", "1");
            match self.verbose {
                0 => unreachable!(),
                1 => std::env::set_var("RUST_LOG", "info"),
                2 => std::env::set_var("RUST_LOG", "debug"),
                _ => std::env::set_var("RUST_LOG", "trace"),
            }
        }

        env_logger::Builder::from_default_env()
            .format_timestamp_nanos()
            .init();
        better_panic::install();
    }
}
