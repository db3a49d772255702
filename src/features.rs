//! Contains code for handling the Cargo features used to compile this crate.
#![allow(dead_code)]

use std::io::{stdout,stderr,Write};

#[cfg(feature = "report_stdout")]
/// Function to output an `&str` -- used to sink estimation reports -- controlled by the crate's features (stdout, stderr, no_output)
pub const OUTPUT: fn(&str) = stdout_write;

#[cfg(feature = "report_stderr")]
/// Function to output an `&str` -- used to sink estimation reports -- controlled by the crate's features (stdout, stderr, no_output)
pub const OUTPUT: fn(&str) = stderr_write;

#[cfg(not(any(feature = "report_stdout", feature = "report_stderr")))]
/// Function to output an `&str` -- used to sink estimation reports -- controlled by the crate's features (stdout, stderr, no_output)
pub const OUTPUT: fn(&str) = null_write;


fn stdout_write(buf: &str) {
    sync_outputs();
    print!("{}", buf);
    sync_outputs();
}

fn stderr_write(buf: &str) {
    sync_outputs();
    eprint!("{}", buf);
    sync_outputs();
}

/// Flushes both stdout and stderr so the next output will be in sync with everything that came before
fn sync_outputs() {
    _ = stdout().flush();
    _ = stderr().flush();
}

fn null_write(_buf: &str) {
    // release compilations will optimize out this call for '_buf' is not used
}
