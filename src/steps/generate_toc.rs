use crate::config::{Config, DOC_FOLDER, TOC_FILE};
use crate::error::StepError;
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub(super) const NAME: &str = "GenerateToc";

/// Concatenates every repository's `toc.yml` into `toc.yml` inside the
/// centralized folder, next to the documents it indexes.
///
/// Entries are carried over untouched. A document that is not a sequence is
/// appended as a single entry; an empty document contributes nothing.
pub(super) async fn run(config: &Config) -> Result<(), StepError> {
    let output = config.centralized_path();
    let repositories: Vec<PathBuf> = config.repository_folders().cloned().collect();

    tokio::task::spawn_blocking(move || {
        let mut merged = Vec::new();
        for repository in &repositories {
            let toc_path = repository.join(DOC_FOLDER).join(TOC_FILE);
            if !toc_path.is_file() {
                warn!(phase = NAME, path = %toc_path.display(), "No navigation index, skipping");
                continue;
            }
            match read_toc(&toc_path)? {
                Value::Sequence(entries) => merged.extend(entries),
                Value::Null => {}
                other => merged.push(other),
            }
        }

        fs::create_dir_all(&output).map_err(|e| StepError::io(&output, e))?;
        let target = output.join(TOC_FILE);
        let entries = merged.len();
        let rendered = serde_yaml::to_string(&Value::Sequence(merged)).map_err(|e| StepError::Toc {
            path: target.clone(),
            source: e,
        })?;
        fs::write(&target, rendered).map_err(|e| StepError::io(&target, e))?;

        info!(phase = NAME, entries, path = %target.display(), "Wrote navigation index");
        Ok::<(), StepError>(())
    })
    .await?
}

fn read_toc(path: &Path) -> Result<Value, StepError> {
    let content = fs::read_to_string(path).map_err(|e| StepError::io(path, e))?;
    serde_yaml::from_str(&content).map_err(|e| StepError::Toc {
        path: path.to_path_buf(),
        source: e,
    })
}
