use crate::config::{DEFAULT_CONFIG_FILE, DEFAULT_REPO_LIST_FILE};
use crate::error::StartupError;
use crate::launcher::SystemLauncher;
use crate::load_config::load_config;
use crate::pipeline::StepCollection;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// File name of the DocFX doclet expected next to the executable.
pub const DOCLET_JAR: &str = "docfx-doclet.jar";
/// Overrides the doclet location.
pub const DOCLET_ENV: &str = "JAVA2YAML_DOCLET";

/// CLI for java2yaml: generate DocFX YAML for Java repositories.
#[derive(Parser, Debug)]
#[clap(
    name = "java2yaml",
    version,
    about = "Restore, run javadoc with the DocFX doclet, and centralize the generated YAML"
)]
pub struct Cli {
    /// Path to the JSON config file [default: code2yaml.json]
    #[clap(value_name = "CONFIG", requires = "repo_list")]
    pub config: Option<PathBuf>,

    /// Path to the JSON repository list [default: repo.json]
    #[clap(value_name = "REPO_LIST")]
    pub repo_list: Option<PathBuf>,
}

impl Cli {
    /// Both file paths, falling back to the default names in the working directory.
    pub fn config_paths(&self) -> (PathBuf, PathBuf) {
        match (&self.config, &self.repo_list) {
            (Some(config), Some(repo_list)) => (config.clone(), repo_list.clone()),
            _ => (
                PathBuf::from(DEFAULT_CONFIG_FILE),
                PathBuf::from(DEFAULT_REPO_LIST_FILE),
            ),
        }
    }
}

/// Finds the doclet jar: `$JAVA2YAML_DOCLET` if set, otherwise next to the executable.
pub fn locate_extractor() -> Result<PathBuf, StartupError> {
    let path = match std::env::var_os(DOCLET_ENV) {
        Some(path) => PathBuf::from(path),
        None => {
            let exe = std::env::current_exe().map_err(StartupError::CurrentExe)?;
            exe.parent()
                .map(|dir| dir.join(DOCLET_JAR))
                .unwrap_or_else(|| PathBuf::from(DOCLET_JAR))
        }
    };

    if path.is_file() {
        tracing::info!(path = %path.display(), "Found extractor");
        Ok(path)
    } else {
        tracing::error!(path = %path.display(), "Cannot find {DOCLET_JAR}");
        Err(StartupError::MissingExtractor { path })
    }
}

/// Extracted async CLI logic entrypoint for integration tests and main().
///
/// Checks the extractor, loads both config files and runs the default
/// pipeline. Timing and the summary line belong to the caller.
pub async fn run(cli: Cli) -> Result<()> {
    let extractor = locate_extractor()?;

    let (config_path, repo_list_path) = cli.config_paths();
    let config = load_config(&config_path, &repo_list_path)?;
    println!(
        "Config files {}, {} found. Start processing...",
        config_path.display(),
        repo_list_path.display()
    );

    let pipeline = StepCollection::for_config(&config, &extractor);
    pipeline.run(&config, &SystemLauncher).await?;
    Ok(())
}

/// `Succeeded in N milliseconds.` or `Failed in N milliseconds.`
pub fn summary_line(succeeded: bool, elapsed: Duration) -> String {
    let status = if succeeded { "Succeeded" } else { "Failed" };
    format!("{status} in {} milliseconds.", elapsed.as_millis())
}
