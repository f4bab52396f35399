//! Process-execution harness of the judging pipeline.
//!
//! This crate is the lowest-level building block of the judge: the component
//! that actually runs a submitted program. It spawns the target executable as
//! a single child process, blocks until the child terminates, measures the
//! wall-clock time of the run, writes that time to a file and exposes the
//! child's termination status as its own exit code.
//!
//! Everything else (time and memory limits, sandboxing, output checking,
//! deciding what to run) belongs to the surrounding judge, which prepares the
//! command line and interprets the timing file and the exit code.
//!
//! The flow of a single invocation:
//!
//! 1. [`execute`](executor::execute) resolves the target in `$PATH`, spawns
//!    it and waits for it, producing an
//!    [`ExecutionResult`](executor::ExecutionResult);
//! 2. [`write_wall_time`](report::write_wall_time) persists the measured
//!    time to the timing file;
//! 3. the binary exits with
//!    [`ExitStatus::exit_code`](executor::ExitStatus::exit_code).
//!
//! The harness is silent on success and on child failure alike: it
//! communicates only through the timing file and the exit code. Diagnostics
//! are available on stderr via `-v` or `RUST_LOG`.

#![deny(missing_docs)]

#[macro_use]
extern crate log;

pub mod error;
pub mod executor;
pub mod opt;
pub mod report;

pub use executor::{execute, ExecutionResult, ExecutorError, ExitStatus};
pub use opt::{LoggerOpt, Opt};

/// Exit code of this process when the harness itself fails: the invocation
/// was malformed, the wait failed, the termination was unclassifiable or the
/// timing file could not be written. Shared with the usage-error code of the
/// argument parser, and always accompanied by a message on stderr.
pub const HARNESS_FAILURE_CODE: i32 = 2;
