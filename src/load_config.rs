use crate::config::{Config, Repository};
use crate::error::StartupError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

#[derive(Deserialize)]
struct StaticConfig {
    output_path: PathBuf,
    #[serde(default)]
    input_paths: Vec<PathBuf>,
    #[serde(default)]
    exclude_paths: Vec<String>,
}

#[derive(Deserialize)]
struct RepositoryList {
    #[serde(default)]
    repositories: Vec<RepositoryEntry>,
}

#[derive(Deserialize)]
struct RepositoryEntry {
    name: String,
    folder: PathBuf,
}

/// Loads the main config and the repository list into one immutable [`Config`].
///
/// Both files must exist. Relative paths inside each file are resolved
/// against that file's directory; nothing is canonicalized, so the paths the
/// steps compare are exactly the joined strings.
pub fn load_config<P, R>(config_path: P, repo_list_path: R) -> Result<Config, StartupError>
where
    P: AsRef<Path>,
    R: AsRef<Path>,
{
    let config_path = config_path.as_ref();
    let repo_list_path = repo_list_path.as_ref();
    info!(config_path = ?config_path, repo_list_path = ?repo_list_path, "Loading configuration");

    if !config_path.is_file() || !repo_list_path.is_file() {
        error!(config_path = ?config_path, repo_list_path = ?repo_list_path, "Config file missing");
        return Err(StartupError::MissingConfig {
            config: config_path.to_path_buf(),
            repo_list: repo_list_path.to_path_buf(),
        });
    }

    let static_conf: StaticConfig = read_json(config_path)?;
    let repo_list: RepositoryList = read_json(repo_list_path)?;

    let config_base = base_dir(config_path);
    let repo_base = base_dir(repo_list_path);

    let config = Config {
        output_path: resolve(&config_base, &static_conf.output_path),
        repositories: repo_list
            .repositories
            .into_iter()
            .map(|entry| Repository {
                folder: resolve(&repo_base, &entry.folder),
                name: entry.name,
            })
            .collect(),
        input_paths: static_conf
            .input_paths
            .iter()
            .map(|p| resolve(&config_base, p))
            .collect(),
        exclude_paths: static_conf
            .exclude_paths
            .iter()
            .map(|p| resolve_prefix(&config_base, p))
            .collect(),
    };

    config.trace_loaded();
    Ok(config)
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, StartupError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            error!(error = ?e, path = ?path, "Failed to read config file");
            return Err(StartupError::ReadConfig {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    match serde_json::from_str(&content) {
        Ok(parsed) => {
            info!(path = ?path, "Parsed config JSON successfully");
            Ok(parsed)
        }
        Err(e) => {
            error!(error = ?e, path = ?path, "Failed to parse config JSON");
            Err(StartupError::ParseConfig {
                path: path.to_path_buf(),
                source: e,
            })
        }
    }
}

fn base_dir(file: &Path) -> PathBuf {
    let absolute = if file.is_absolute() {
        file.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(file))
            .unwrap_or_else(|_| file.to_path_buf())
    };
    absolute
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}

/// Resolves an exclude prefix like a path but keeps a trailing separator, so
/// `internal/` excludes that directory without touching `internals`.
fn resolve_prefix(base: &Path, prefix: &str) -> String {
    let mut resolved = resolve(base, Path::new(prefix)).to_string_lossy().into_owned();
    if prefix.ends_with(std::path::is_separator) && !resolved.ends_with(std::path::is_separator) {
        resolved.push(std::path::MAIN_SEPARATOR);
    }
    resolved
}

/// Joins relative paths onto `base` and drops `.` segments; `..` is kept as written.
fn resolve(base: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };
    joined.components().collect()
}
