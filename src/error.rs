//! Error types for java2yaml.
//!
//! [`StartupError`] covers everything that can go wrong before the pipeline
//! starts; [`StepError`] is raised inside a step and wrapped into a
//! [`StepFailure`] by the pipeline. The binary wraps both with `anyhow`.

use std::path::PathBuf;

/// Failure to prepare a run: the pipeline is never started.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("cannot find the extractor at {}", path.display())]
    MissingExtractor { path: PathBuf },

    #[error("cannot find config file: {} or {}", config.display(), repo_list.display())]
    MissingConfig { config: PathBuf, repo_list: PathBuf },

    #[error("failed to read config file {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("cannot determine the executable directory: {0}")]
    CurrentExe(std::io::Error),
}

/// Failure raised while a step runs.
#[derive(Debug, thiserror::Error)]
pub enum StepError {
    #[error("no {descriptor} found under {}", root.display())]
    MissingBuildDescriptor {
        root: PathBuf,
        descriptor: &'static str,
    },

    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        source: std::io::Error,
    },

    #[error("{program} exited with {} in {}", describe_exit(*code), working_dir.display())]
    ProcessFailed {
        program: String,
        code: Option<i32>,
        working_dir: PathBuf,
    },

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid navigation index {}: {source}", path.display())]
    Toc {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl StepError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// The single failure a pipeline run reports: the first step that failed.
#[derive(Debug, thiserror::Error)]
#[error("step {step} failed: {source}")]
pub struct StepFailure {
    pub step: &'static str,
    #[source]
    pub source: StepError,
}
