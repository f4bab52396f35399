//! Spawning the target program and observing its termination.
//!
//! The raw status word returned by the platform's wait call never leaves
//! this module: it is decoded into an [`ExitStatus`] at the boundary.

use std::path::Path;
use std::process::Command;
use std::time::Instant;

use nix::sys::signal::Signal;
use nix::sys::wait::{waitpid, WaitPidFlag, WaitStatus};
use nix::unistd::Pid;
use thiserror::Error;

/// Exit code reported when the target executable cannot be located or
/// started. A failed launch is indistinguishable, from the caller's
/// perspective, from a target that ran and exited with this code.
const LAUNCH_FAILURE_CODE: i32 = 1;

/// The classified reason the child process stopped running.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ExitStatus {
    /// The child exited normally with this exit code.
    ExitCode(i32),
    /// The child was terminated by this signal.
    Signal(Signal),
    /// The child was stopped, not terminated, by this signal.
    Stopped(Signal),
}

/// The outcome of running the target program once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExecutionResult {
    /// How the child terminated.
    pub status: ExitStatus,
    /// Wall-clock duration of the run, in seconds. Measured with millisecond
    /// granularity, from just before the wait to just after the child's
    /// termination was observed.
    pub wall_time: f64,
}

/// Errors of the harness itself while driving the child. These are never
/// conflated with a failure of the target program.
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// Waiting for the child failed.
    #[error("Failed to wait for pid {pid}")]
    Wait {
        /// Pid of the child that could not be waited for.
        pid: i32,
        /// The underlying platform error.
        source: nix::Error,
    },
    /// The wait returned a status outside the three modeled categories.
    #[error("Unclassified termination status: {0:?}")]
    Unclassified(WaitStatus),
}

impl ExitStatus {
    /// Translate the termination of the child into the exit code of this
    /// process: the child's own code for a normal exit, the signal number
    /// for a termination or stop by signal.
    pub fn exit_code(&self) -> i32 {
        match *self {
            ExitStatus::ExitCode(code) => code,
            ExitStatus::Signal(signal) => signal as i32,
            ExitStatus::Stopped(signal) => signal as i32,
        }
    }
}

impl TryFrom<WaitStatus> for ExitStatus {
    type Error = ExecutorError;

    fn try_from(status: WaitStatus) -> Result<ExitStatus, ExecutorError> {
        match status {
            WaitStatus::Exited(_, code) => Ok(ExitStatus::ExitCode(code)),
            WaitStatus::Signaled(_, signal, _) => Ok(ExitStatus::Signal(signal)),
            WaitStatus::Stopped(_, signal) => Ok(ExitStatus::Stopped(signal)),
            other => Err(ExecutorError::Unclassified(other)),
        }
    }
}

impl ExecutionResult {
    /// The result of a run whose child could not be launched at all.
    fn launch_failure() -> ExecutionResult {
        ExecutionResult {
            status: ExitStatus::ExitCode(LAUNCH_FAILURE_CODE),
            wall_time: 0.0,
        }
    }
}

/// Run the target program to completion and measure it.
///
/// The command is resolved like a shell would resolve it: a name containing a
/// path separator is used as-is, a bare name is searched in `$PATH`. The
/// child inherits stdin, stdout, stderr, the environment and the working
/// directory of this process. The wait is unbounded: if the child never
/// terminates, neither does this function.
///
/// A target that cannot be resolved or started yields a normal
/// [`ExecutionResult`] with exit code 1 and a zero wall time, not an error;
/// the cause is logged. `Err(_)` is reserved for failures of the harness
/// itself.
pub fn execute(command: &Path, args: &[String]) -> Result<ExecutionResult, ExecutorError> {
    let target = match which::which(command) {
        Ok(target) => target,
        Err(e) => {
            warn!("Executable {:?} not found: {}", command, e);
            return Ok(ExecutionResult::launch_failure());
        }
    };
    debug!("Running {:?} with arguments {:?}", target, args);
    let child = match Command::new(&target).args(args).spawn() {
        Ok(child) => child,
        Err(e) => {
            warn!("Failed to start {:?}: {}", target, e);
            return Ok(ExecutionResult::launch_failure());
        }
    };
    let pid = Pid::from_raw(child.id() as i32);

    // WUNTRACED makes a job-control stop observable, not just a termination.
    let start = Instant::now();
    let status = waitpid(pid, Some(WaitPidFlag::WUNTRACED)).map_err(|source| {
        ExecutorError::Wait {
            pid: pid.as_raw(),
            source,
        }
    })?;
    let wall_time = start.elapsed().as_millis() as f64 / 1000.0;

    let status = ExitStatus::try_from(status)?;
    debug!("Child {} terminated with {:?} after {}s", pid, status, wall_time);
    Ok(ExecutionResult { status, wall_time })
}
