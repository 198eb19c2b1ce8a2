//! Blocking child-process invocation seam.

use std::process::{Command, Stdio};

/// Captured result of a finished child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Whether the process exited with status zero.
    pub success: bool,

    /// Captured standard output, decoded as UTF-8 (lossy).
    pub stdout: String,
}

impl ProcessOutput {
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            stdout: stdout.into(),
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            stdout: String::new(),
        }
    }
}

/// Seam over external command execution.
///
/// Every fact liftoff-wm learns from the host (monitor layout, pointer
/// position, settings values, window handles) arrives through this trait.
/// Calls block until the child exits; there is no timeout, so a hung helper
/// process hangs the caller.
pub trait CommandRunner {
    /// Run `program` with `args`, blocking until it exits.
    ///
    /// `Err` means the process could not be spawned or waited on (typically
    /// the binary is not installed); a child that ran but exited non-zero is
    /// reported through [`ProcessOutput::success`].
    fn run(&self, program: &str, args: &[&str]) -> std::io::Result<ProcessOutput>;
}

/// Runner backed by `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> std::io::Result<ProcessOutput> {
        tracing::trace!("Running {} {}", program, args.join(" "));
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()?;
        Ok(ProcessOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}
