#[macro_use]
extern crate log;

use anyhow::{Context, Error};
use clap::Parser;

use judge_executor::error::NiceError;
use judge_executor::{execute, report, Opt};

fn main() {
    let opt = Opt::parse();
    opt.logger.enable_log();

    let code = run(&opt).nice_unwrap();
    std::process::exit(code);
}

/// Run the target once, persist the timing and return the exit code for this
/// process. The timing file is written before the code is returned, so the
/// caller of the harness always finds it in place once the process is gone.
fn run(opt: &Opt) -> Result<i32, Error> {
    let result = execute(&opt.command, &opt.args).context("Failed to run the target program")?;
    report::write_wall_time(&opt.time_file, result.wall_time)?;
    info!(
        "{:?} terminated with {:?} after {}s",
        opt.command, result.status, result.wall_time
    );
    Ok(result.status.exit_code())
}
