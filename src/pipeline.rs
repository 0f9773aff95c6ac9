//! Ordered step runner.
//!
//! A [`StepCollection`] runs its steps one at a time, in order, awaiting each
//! to completion before starting the next: later steps read what earlier ones
//! left on disk. The first failing step ends the run and nothing after it is
//! started. Each step is wrapped in a `step` span so its log lines carry the
//! step name.
//!
//! # Navigation
//! - Default ordering for a loaded config: [`StepCollection::for_config`]
//! - Running: [`StepCollection::run`]

use crate::config::Config;
use crate::error::StepFailure;
use crate::launcher::ProcessLauncher;
use crate::steps::Step;
use std::path::Path;
use tracing::{error, info, info_span, Instrument};

#[derive(Debug, Clone, Default)]
pub struct StepCollection {
    steps: Vec<Step>,
}

impl StepCollection {
    pub fn new(steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
        }
    }

    /// Restore then extract for each repository in list order, then
    /// centralize the output and merge the navigation index.
    pub fn for_config(config: &Config, extractor: &Path) -> Self {
        let mut steps = Vec::with_capacity(config.repositories.len() * 2 + 2);
        for repository in config.repository_folders() {
            steps.push(Step::RestoreDependency {
                repository: repository.clone(),
            });
            steps.push(Step::RunExtraction {
                repository: repository.clone(),
                extractor: extractor.to_path_buf(),
            });
        }
        steps.push(Step::CentralizeDocument);
        steps.push(Step::GenerateToc);
        Self::new(steps)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub async fn run<L>(&self, config: &Config, launcher: &L) -> Result<(), StepFailure>
    where
        L: ProcessLauncher + ?Sized,
    {
        info!(steps = self.steps.len(), "Starting pipeline");

        for (index, step) in self.steps.iter().enumerate() {
            let span = info_span!("step", name = step.name(), index);
            let result = step.run(config, launcher).instrument(span).await;

            if let Err(source) = result {
                error!(step = step.name(), index, error = %source, "Step failed, stopping pipeline");
                return Err(StepFailure {
                    step: step.name(),
                    source,
                });
            }
            info!(step = step.name(), index, "Step succeeded");
        }

        info!("Pipeline completed");
        Ok(())
    }
}
