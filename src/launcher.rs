//! # launcher: running external tools
//!
//! Steps never spawn processes themselves. They describe what to run as an
//! [`Invocation`] and hand it to a [`ProcessLauncher`], which the pipeline
//! receives from its caller. [`SystemLauncher`] is the real implementation;
//! tests use the generated `MockProcessLauncher`.
//!
//! A launcher only reports how the process ended. Turning a non-zero exit
//! into a step failure is the caller's decision.

use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, error, info};

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;

/// One external command: program, argument vector, working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl Invocation {
    pub fn new(program: impl Into<String>, args: Vec<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args,
            working_dir: working_dir.into(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// How a launched process ended. `code` is `None` when it was killed by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit {
    pub code: Option<i32>,
}

impl ProcessExit {
    pub fn code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs an external executable to completion.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait ProcessLauncher: Send + Sync {
    /// Start the process and wait for it to exit. Errors only when it could not be started.
    async fn execute(&self, invocation: &Invocation) -> std::io::Result<ProcessExit>;
}

/// Launches processes with `tokio::process`, inheriting stdout and stderr.
///
/// There is no timeout: a hung tool hangs the run.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

#[async_trait]
impl ProcessLauncher for SystemLauncher {
    async fn execute(&self, invocation: &Invocation) -> std::io::Result<ProcessExit> {
        debug!(
            program = %invocation.program,
            working_dir = %invocation.working_dir.display(),
            command = %invocation,
            "Launching process"
        );
        let status = tokio::process::Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.working_dir)
            .status()
            .await;

        match status {
            Ok(status) => {
                info!(
                    program = %invocation.program,
                    status = ?status,
                    "Process exited"
                );
                Ok(ProcessExit {
                    code: status.code(),
                })
            }
            Err(e) => {
                error!(
                    error = ?e,
                    program = %invocation.program,
                    working_dir = %invocation.working_dir.display(),
                    "Failed to launch process"
                );
                Err(e)
            }
        }
    }
}
