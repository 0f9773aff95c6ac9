//! The units of work a pipeline runs.
//!
//! [`Step`] is a closed set. Each variant carries the parameters it was built
//! with (which repository, which extractor) and reads everything else from
//! the [`Config`] passed to [`Step::run`]. Steps never change the config;
//! whatever they produce lands on disk for the next step to pick up.

mod centralize_document;
mod generate_toc;
mod restore_dependency;
mod run_extraction;

pub use restore_dependency::MAVEN;
pub use run_extraction::JAVADOC;

use crate::config::Config;
use crate::error::StepError;
use crate::launcher::{Invocation, ProcessLauncher};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Resolve Maven dependencies for every `pom.xml` in the repository.
    RestoreDependency { repository: PathBuf },
    /// Write the source list and run javadoc with the DocFX doclet once.
    RunExtraction {
        repository: PathBuf,
        extractor: PathBuf,
    },
    /// Copy each repository's generated YAML into the output path.
    CentralizeDocument,
    /// Merge the per-repository navigation indexes into the output path.
    GenerateToc,
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::RestoreDependency { .. } => restore_dependency::NAME,
            Step::RunExtraction { .. } => run_extraction::NAME,
            Step::CentralizeDocument => centralize_document::NAME,
            Step::GenerateToc => generate_toc::NAME,
        }
    }

    pub async fn run<L>(&self, config: &Config, launcher: &L) -> Result<(), StepError>
    where
        L: ProcessLauncher + ?Sized,
    {
        match self {
            Step::RestoreDependency { repository } => {
                restore_dependency::run(repository, launcher).await
            }
            Step::RunExtraction {
                repository,
                extractor,
            } => run_extraction::run(repository, extractor, config, launcher).await,
            Step::CentralizeDocument => centralize_document::run(config).await,
            Step::GenerateToc => generate_toc::run(config).await,
        }
    }
}

/// Runs `invocation` and turns anything but a zero exit into an error.
async fn launch<L>(phase: &'static str, launcher: &L, invocation: Invocation) -> Result<(), StepError>
where
    L: ProcessLauncher + ?Sized,
{
    let exit = launcher
        .execute(&invocation)
        .await
        .map_err(|e| StepError::Launch {
            program: invocation.program.clone(),
            source: e,
        })?;

    if exit.success() {
        info!(phase, program = %invocation.program, "Process completed");
        Ok(())
    } else {
        error!(
            phase,
            program = %invocation.program,
            code = ?exit.code,
            working_dir = %invocation.working_dir.display(),
            "Process exited with failure"
        );
        Err(StepError::ProcessFailed {
            program: invocation.program,
            code: exit.code,
            working_dir: invocation.working_dir,
        })
    }
}
