//! Failing without panicking.

use std::fmt::Display;

use anyhow::Error;

use crate::HARNESS_FAILURE_CODE;

/// Adds methods for failing without panic. Like `expect`, but the process
/// exits with [`HARNESS_FAILURE_CODE`] and the error chain goes to stderr
/// instead of a panic message. The child-result exit codes are never used
/// for harness failures.
pub trait NiceError<T> {
    /// Return the content, or print the error and exit.
    fn nice_unwrap(self) -> T;

    /// Return the content, or print the error with the extra context message
    /// and exit.
    fn nice_expect<S: Display + Send + Sync + 'static>(self, mex: S) -> T;
}

fn print_error(error: Error) {
    debug!("{:?}", error);
    let mut fail: &dyn std::error::Error = error.as_ref();
    eprintln!("Error: {fail}");
    while let Some(cause) = fail.source() {
        eprintln!("\nCaused by:\n    {cause}");
        fail = cause;
    }
}

impl<T> NiceError<T> for Result<T, Error> {
    fn nice_unwrap(self) -> T {
        match self {
            Ok(x) => x,
            Err(e) => {
                print_error(e);
                std::process::exit(HARNESS_FAILURE_CODE);
            }
        }
    }

    fn nice_expect<S: Display + Send + Sync + 'static>(self, mex: S) -> T {
        match self {
            Ok(x) => x,
            Err(e) => {
                print_error(e.context(mex));
                std::process::exit(HARNESS_FAILURE_CODE);
            }
        }
    }
}
