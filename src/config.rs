// java2yaml/src/config.rs

use std::path::PathBuf;
use tracing::{debug, info};

/// Default name of the main configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "code2yaml.json";
/// Default name of the repository list file, looked up in the working directory.
pub const DEFAULT_REPO_LIST_FILE: &str = "repo.json";

/// Build descriptor searched for by the restore step.
pub const BUILD_DESCRIPTOR: &str = "pom.xml";
/// Per-repository folder that receives restored dependency archives.
pub const PACKAGE_FOLDER: &str = "_dependency";
/// Per-repository folder the extractor writes its output to.
pub const DOC_FOLDER: &str = "_doc";
/// Navigation index produced per repository and merged into the centralized folder.
pub const TOC_FILE: &str = "toc.yml";
/// Source list handed to the extractor through an `@` argument file.
pub const FILE_LIST: &str = "files";

pub const SOURCE_EXTENSION: &str = "java";
pub const ARCHIVE_EXTENSION: &str = "jar";

/// Resolved, read-only settings shared by every step of a run.
///
/// All paths are absolute (or as absolute as the input files made them):
/// the loader joins relative entries onto the directory of the file that
/// declared them. Exclude prefixes are kept as strings because they are
/// matched as plain string prefixes, not path components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub output_path: PathBuf,
    pub repositories: Vec<Repository>,
    pub input_paths: Vec<PathBuf>,
    pub exclude_paths: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub name: String,
    pub folder: PathBuf,
}

impl Config {
    pub fn repository_folders(&self) -> impl Iterator<Item = &PathBuf> {
        self.repositories.iter().map(|r| &r.folder)
    }

    /// Shared destination for every repository's documents: a `_doc` folder
    /// next to `output_path`.
    pub fn centralized_path(&self) -> PathBuf {
        self.output_path
            .parent()
            .unwrap_or(&self.output_path)
            .join(DOC_FOLDER)
    }

    pub fn trace_loaded(&self) {
        info!(
            output_path = %self.output_path.display(),
            repositories = self.repositories.len(),
            input_paths = self.input_paths.len(),
            exclude_paths = self.exclude_paths.len(),
            "Loaded Config"
        );
        for repository in &self.repositories {
            repository.trace_loaded();
        }
        debug!(?self, "Config loaded (full debug)");
    }
}

impl Repository {
    pub fn trace_loaded(&self) {
        info!(
            name = %self.name,
            folder = %self.folder.display(),
            "Loaded repository"
        );
    }
}
