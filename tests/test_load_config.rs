use java2yaml::error::StartupError;
use java2yaml::load_config::load_config;
use std::fs::write;
use std::path::{PathBuf, MAIN_SEPARATOR};
use tempfile::tempdir;

/// A config plus repository list with relative paths resolves against the files' directory.
#[test]
fn test_load_config_resolves_relative_paths() {
    let tmp = tempdir().unwrap();
    let config_path = tmp.path().join("code2yaml.json");
    let repo_list_path = tmp.path().join("repo.json");
    write(
        &config_path,
        r#"{
  "input_paths": ["repos/sdk/src", "./repos/tools/src"],
  "exclude_paths": ["repos/sdk/src/internal", "repos/tools/src/gen/"],
  "output_path": "_site/yaml"
}"#,
    )
    .unwrap();
    write(
        &repo_list_path,
        r#"{ "repositories": [
  { "name": "sdk", "folder": "repos/sdk" },
  { "name": "tools", "folder": "repos/tools" }
] }"#,
    )
    .unwrap();

    let config = load_config(&config_path, &repo_list_path).expect("Config should load");

    assert_eq!(config.output_path, tmp.path().join("_site/yaml"));
    assert_eq!(config.centralized_path(), tmp.path().join("_site/_doc"));
    assert_eq!(
        config.input_paths,
        vec![tmp.path().join("repos/sdk/src"), tmp.path().join("repos/tools/src")]
    );
    assert_eq!(config.repositories.len(), 2);
    assert_eq!(config.repositories[0].name, "sdk");
    assert_eq!(config.repositories[0].folder, tmp.path().join("repos/sdk"));
    let folders: Vec<&PathBuf> = config.repository_folders().collect();
    assert_eq!(folders[1], &tmp.path().join("repos/tools"));

    assert_eq!(
        config.exclude_paths[0],
        tmp.path().join("repos/sdk/src/internal").to_string_lossy()
    );
    assert!(config.exclude_paths[1].ends_with(MAIN_SEPARATOR), "trailing separator is kept");
}

#[test]
fn test_load_config_keeps_absolute_paths_and_defaults_exclusions() {
    let tmp = tempdir().unwrap();
    let abs_out = tmp.path().join("elsewhere/out");
    let config_path = tmp.path().join("code2yaml.json");
    let repo_list_path = tmp.path().join("repo.json");
    write(
        &config_path,
        serde_json::json!({ "input_paths": [], "output_path": abs_out }).to_string(),
    )
    .unwrap();
    write(&repo_list_path, r#"{ "repositories": [] }"#).unwrap();

    let config = load_config(&config_path, &repo_list_path).unwrap();

    assert_eq!(config.output_path, abs_out);
    assert!(config.exclude_paths.is_empty());
    assert!(config.repositories.is_empty());
}

#[test]
fn test_load_config_errors_on_missing_file() {
    let tmp = tempdir().unwrap();
    let config_path = tmp.path().join("code2yaml.json");
    write(&config_path, r#"{ "output_path": "out" }"#).unwrap();

    let err = load_config(&config_path, tmp.path().join("repo.json")).unwrap_err();

    assert!(matches!(err, StartupError::MissingConfig { .. }), "got {err:?}");
    assert!(err.to_string().contains("repo.json"));
}

#[test]
fn test_load_config_errors_for_invalid_file() {
    let tmp = tempdir().unwrap();
    let config_path = tmp.path().join("code2yaml.json");
    let repo_list_path = tmp.path().join("repo.json");
    write(&config_path, "{ not json").unwrap();
    write(&repo_list_path, r#"{ "repositories": [] }"#).unwrap();

    let err = load_config(&config_path, &repo_list_path).unwrap_err();
    let msg = err.to_string();

    assert!(matches!(err, StartupError::ParseConfig { .. }));
    assert!(msg.contains("parse"), "Parse error expected, got: {msg}");
}

#[test]
fn test_load_config_requires_output_path() {
    let tmp = tempdir().unwrap();
    let config_path = tmp.path().join("code2yaml.json");
    let repo_list_path = tmp.path().join("repo.json");
    write(&config_path, r#"{ "input_paths": ["src"] }"#).unwrap();
    write(&repo_list_path, r#"{ "repositories": [] }"#).unwrap();

    let err = load_config(&config_path, &repo_list_path).unwrap_err();

    assert!(err.to_string().contains("output_path"), "got: {err}");
}
