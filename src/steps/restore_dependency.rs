use super::launch;
use crate::config::{BUILD_DESCRIPTOR, PACKAGE_FOLDER};
use crate::error::StepError;
use crate::fs_util;
use crate::launcher::{Invocation, ProcessLauncher};
use std::path::Path;
use tracing::{error, info};

pub(super) const NAME: &str = "RestoreDependency";

pub const MAVEN: &str = if cfg!(windows) { "mvn.cmd" } else { "mvn" };

pub(super) async fn run<L>(repository: &Path, launcher: &L) -> Result<(), StepError>
where
    L: ProcessLauncher + ?Sized,
{
    let root = repository.to_path_buf();
    let descriptors = tokio::task::spawn_blocking(move || fs_util::files_by_name(&root, BUILD_DESCRIPTOR))
        .await?
        .map_err(|e| StepError::io(repository, e))?;

    if descriptors.is_empty() {
        error!(
            phase = NAME,
            repository = %repository.display(),
            "{BUILD_DESCRIPTOR} not available"
        );
        return Err(StepError::MissingBuildDescriptor {
            root: repository.to_path_buf(),
            descriptor: BUILD_DESCRIPTOR,
        });
    }

    info!(
        phase = NAME,
        count = descriptors.len(),
        "{} {BUILD_DESCRIPTOR} found",
        descriptors.len()
    );

    let package_path = repository.join(PACKAGE_FOLDER);
    for descriptor in &descriptors {
        let Some(working_dir) = descriptor.parent() else {
            continue;
        };
        info!(
            phase = NAME,
            working_dir = %working_dir.display(),
            "Restoring dependency"
        );
        let invocation = Invocation::new(
            MAVEN,
            vec![
                "dependency:copy-dependencies".to_string(),
                format!("-DoutputDirectory={}", package_path.display()),
            ],
            working_dir,
        );
        launch(NAME, launcher, invocation).await?;
    }
    Ok(())
}
