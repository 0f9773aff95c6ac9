use crate::config::{Config, DOC_FOLDER, TOC_FILE};
use crate::error::StepError;
use crate::fs_util;
use std::fs;
use std::path::PathBuf;
use tracing::info;

pub(super) const NAME: &str = "CentralizeDocument";

/// Copies every `<repo>/_doc` into [`Config::centralized_path`]. The
/// navigation index is left behind; GenerateToc merges it separately.
pub(super) async fn run(config: &Config) -> Result<(), StepError> {
    let target = config.centralized_path();
    let repositories: Vec<PathBuf> = config.repository_folders().cloned().collect();

    tokio::task::spawn_blocking(move || {
        fs::create_dir_all(&target).map_err(|e| StepError::io(&target, e))?;

        for repository in &repositories {
            let source = repository.join(DOC_FOLDER);
            info!(
                phase = NAME,
                source = %source.display(),
                target = %target.display(),
                "Copy yaml files"
            );
            let copied = fs_util::copy_with_exclusion(&source, &target, &[TOC_FILE])
                .map_err(|e| StepError::io(&source, e))?;
            info!(phase = NAME, copied, "Copied generated files");
        }
        Ok::<(), StepError>(())
    })
    .await?
}
