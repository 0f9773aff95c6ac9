use super::launch;
use crate::command;
use crate::config::{Config, ARCHIVE_EXTENSION, DOC_FOLDER, FILE_LIST, SOURCE_EXTENSION};
use crate::error::StepError;
use crate::fs_util;
use crate::launcher::{Invocation, ProcessLauncher};
use crate::path_filter;
use std::path::Path;
use tracing::{debug, info};

pub(super) const NAME: &str = "RunExtraction";

pub const JAVADOC: &str = if cfg!(windows) { "javadoc.exe" } else { "javadoc" };

pub(super) async fn run<L>(
    repository: &Path,
    extractor: &Path,
    config: &Config,
    launcher: &L,
) -> Result<(), StepError>
where
    L: ProcessLauncher + ?Sized,
{
    let source_roots = path_filter::select_by_root_prefix(&config.input_paths, repository);

    let repo = repository.to_path_buf();
    let roots = source_roots.clone();
    let excludes = config.exclude_paths.clone();
    let (count, jars) = tokio::task::spawn_blocking(move || {
        let scan = path_filter::filter(&roots, &excludes).map_err(|e| StepError::io(&repo, e))?;
        debug!(
            phase = NAME,
            directories = scan.len(),
            expanded = scan.is_expanded(),
            "Filtered input paths"
        );

        let list_path = repo.join(FILE_LIST);
        let count = command::write_file_list(&list_path, &scan, SOURCE_EXTENSION)
            .map_err(|e| StepError::io(&list_path, e))?;
        info!(
            phase = NAME,
            count,
            list = %list_path.display(),
            "{count} {SOURCE_EXTENSION} files to scan"
        );

        let jars = fs_util::files_by_extension(&repo, ARCHIVE_EXTENSION)
            .map_err(|e| StepError::io(&repo, e))?;
        Ok::<_, StepError>((count, jars))
    })
    .await??;

    let cmd = command::build_extraction_command(
        &jars,
        extractor,
        &source_roots,
        &repository.join(DOC_FOLDER),
    );
    info!(
        phase = NAME,
        repository = %repository.display(),
        sources = count,
        archives = jars.len(),
        "Invoking javadoc"
    );
    debug!(phase = NAME, arguments = %cmd, "Extractor arguments");

    launch(NAME, launcher, Invocation::new(JAVADOC, cmd.into_args(), repository)).await
}
