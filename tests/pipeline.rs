use java2yaml::config::{Config, Repository};
use java2yaml::error::StepError;
use java2yaml::launcher::{Invocation, MockProcessLauncher, ProcessExit};
use java2yaml::pipeline::StepCollection;
use java2yaml::steps::{Step, JAVADOC, MAVEN};
use std::fs::{self, create_dir_all, File};
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        create_dir_all(parent).unwrap();
    }
    File::create(path).unwrap();
}

fn config_for(output: &Path, repos: &[PathBuf], inputs: Vec<PathBuf>, excludes: Vec<String>) -> Config {
    Config {
        output_path: output.to_path_buf(),
        repositories: repos
            .iter()
            .map(|folder| Repository {
                name: folder.file_name().unwrap().to_string_lossy().into_owned(),
                folder: folder.clone(),
            })
            .collect(),
        input_paths: inputs,
        exclude_paths: excludes,
    }
}

#[tokio::test]
async fn pipeline_stops_at_first_failing_step() {
    let tmp = tempdir().unwrap();
    let repo_a = tmp.path().join("a");
    let repo_b = tmp.path().join("b");
    let repo_c = tmp.path().join("c");
    touch(&repo_a.join("pom.xml"));
    touch(&repo_b.join("pom.xml"));
    touch(&repo_c.join("src/C.java"));
    let extractor = tmp.path().join("docfx-doclet.jar");
    touch(&extractor);

    let config = config_for(
        &tmp.path().join("out"),
        &[repo_a.clone(), repo_b.clone(), repo_c.clone()],
        vec![repo_c.join("src")],
        vec![],
    );

    let mut launcher = MockProcessLauncher::new();
    let a = repo_a.clone();
    launcher
        .expect_execute()
        .withf(move |inv: &Invocation| inv.working_dir == a)
        .times(1)
        .returning(|_| Ok(ProcessExit::code(0)));
    let b = repo_b.clone();
    launcher
        .expect_execute()
        .withf(move |inv: &Invocation| inv.working_dir == b)
        .times(1)
        .returning(|_| Ok(ProcessExit::code(2)));
    launcher
        .expect_execute()
        .withf(|inv: &Invocation| inv.program == JAVADOC)
        .never();

    let pipeline = StepCollection::new([
        Step::RestoreDependency { repository: repo_a },
        Step::RestoreDependency { repository: repo_b.clone() },
        Step::RunExtraction {
            repository: repo_c.clone(),
            extractor,
        },
    ]);

    let failure = pipeline.run(&config, &launcher).await.unwrap_err();

    assert_eq!(failure.step, "RestoreDependency");
    match failure.source {
        StepError::ProcessFailed { program, code, working_dir } => {
            assert_eq!(program, MAVEN);
            assert_eq!(code, Some(2));
            assert_eq!(working_dir, repo_b);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!repo_c.join("files").exists(), "third step must not start");
}

#[tokio::test]
async fn restore_succeeds_for_two_repositories_without_exclusions() {
    let tmp = tempdir().unwrap();
    let repo_a = tmp.path().join("a");
    let repo_b = tmp.path().join("b");
    touch(&repo_a.join("pom.xml"));
    touch(&repo_b.join("pom.xml"));

    let config = config_for(&tmp.path().join("out"), &[repo_a.clone(), repo_b.clone()], vec![], vec![]);
    assert!(config.exclude_paths.is_empty());

    let mut launcher = MockProcessLauncher::new();
    launcher
        .expect_execute()
        .withf(|inv: &Invocation| inv.program == MAVEN)
        .times(2)
        .returning(|_| Ok(ProcessExit::code(0)));

    let pipeline = StepCollection::new([
        Step::RestoreDependency { repository: repo_a },
        Step::RestoreDependency { repository: repo_b },
    ]);

    pipeline
        .run(&config, &launcher)
        .await
        .expect("both restores should succeed");
}

#[test]
fn default_pipeline_orders_steps_per_repository() {
    let repos = [PathBuf::from("/work/a"), PathBuf::from("/work/b")];
    let config = config_for(Path::new("/work/out"), &repos, vec![], vec![]);

    let pipeline = StepCollection::for_config(&config, Path::new("/tools/docfx-doclet.jar"));
    let names: Vec<&str> = pipeline.steps().iter().map(Step::name).collect();

    assert_eq!(
        names,
        vec![
            "RestoreDependency",
            "RunExtraction",
            "RestoreDependency",
            "RunExtraction",
            "CentralizeDocument",
            "GenerateToc",
        ]
    );
    assert_eq!(
        pipeline.steps()[3],
        Step::RunExtraction {
            repository: PathBuf::from("/work/b"),
            extractor: PathBuf::from("/tools/docfx-doclet.jar"),
        }
    );
}

#[tokio::test]
async fn empty_pipeline_succeeds() {
    let config = config_for(Path::new("/work/out"), &[], vec![], vec![]);
    StepCollection::default()
        .run(&config, &MockProcessLauncher::new())
        .await
        .expect("nothing to run");
}

/// Full default pipeline with a launcher that stands in for maven and the
/// doclet: the fake extractor drops YAML into `<repo>/_doc`.
#[tokio::test]
async fn default_pipeline_produces_centralized_output() {
    let tmp = tempdir().unwrap();
    let repo = tmp.path().join("sdk");
    touch(&repo.join("pom.xml"));
    touch(&repo.join("src/main/java/com/sdk/Client.java"));
    touch(&repo.join("src/main/java/com/sdk/internal/Impl.java"));
    let extractor = tmp.path().join("docfx-doclet.jar");
    touch(&extractor);
    let out = tmp.path().join("out");

    let config = config_for(
        &out,
        &[repo.clone()],
        vec![repo.join("src")],
        vec![repo.join("src/main/java/com/sdk/internal").to_string_lossy().into_owned()],
    );

    let mut launcher = MockProcessLauncher::new();
    launcher
        .expect_execute()
        .withf(|inv: &Invocation| inv.program == MAVEN)
        .times(1)
        .returning(|_| Ok(ProcessExit::code(0)));
    launcher
        .expect_execute()
        .withf(|inv: &Invocation| inv.program == JAVADOC)
        .times(1)
        .returning(|inv: &Invocation| {
            let doc = inv.working_dir.join("_doc");
            fs::create_dir_all(&doc)?;
            fs::write(doc.join("com.sdk.Client.yml"), "uid: com.sdk.Client\n")?;
            fs::write(doc.join("toc.yml"), "- uid: com.sdk\n  name: com.sdk\n")?;
            Ok(ProcessExit::code(0))
        });

    StepCollection::for_config(&config, &extractor)
        .run(&config, &launcher)
        .await
        .expect("pipeline should succeed");

    let list = fs::read_to_string(repo.join("files")).unwrap();
    assert_eq!(list.lines().count(), 1);
    assert!(list.contains("Client.java"));
    let docs = tmp.path().join("_doc");
    assert!(docs.join("com.sdk.Client.yml").is_file());

    let toc = fs::read_to_string(docs.join("toc.yml")).unwrap();
    assert!(toc.contains("uid: com.sdk"));
}
