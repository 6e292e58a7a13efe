use std::fs;
use std::path::Path;
use tempfile::tempdir;
use depwalker::{
    aggregate,
    error::{ErrorSeverity, Result},
    models::config::{OutputFormat, Settings},
    Pipeline,
};

fn settings_for(root: &Path) -> Settings {
    Settings {
        paths: vec![root.to_path_buf()],
        excludes: vec!["node_modules".to_string()],
        workers: 4,
        show_progress: false,
        ..Settings::default()
    }
}

fn create_monorepo(base_dir: &Path) -> Result<()> {
    let web = base_dir.join("web");
    fs::create_dir_all(&web)?;
    fs::write(
        web.join("package.json"),
        r#"{
            "name": "web",
            "dependencies": {"react": "^18.2.0", "lodash": "4.17.21"},
            "devDependencies": {"jest": "29.7.0"}
        }"#,
    )?;

    let admin = base_dir.join("admin");
    fs::create_dir_all(&admin)?;
    fs::write(
        admin.join("package.json"),
        r#"{"dependencies": {"lodash": "4.17.15", "react": "latest"}}"#,
    )?;

    let app = base_dir.join("app");
    fs::create_dir_all(&app)?;
    fs::write(
        app.join("pubspec.yaml"),
        "name: app\ndependencies:\n  http: ^1.1.0\n  flutter:\n    sdk: flutter\ndev_dependencies:\n  lints: 3.0.0\n",
    )?;

    let api = base_dir.join("api");
    fs::create_dir_all(&api)?;
    fs::write(
        api.join("go.mod"),
        "module example.com/api\n\ngo 1.21\n\nrequire (\n\tgithub.com/google/uuid v1.4.0\n\tgolang.org/x/sys v0.15.0 // indirect\n)\n",
    )?;

    let ml = base_dir.join("ml");
    fs::create_dir_all(&ml)?;
    fs::write(
        ml.join("requirements.txt"),
        "# pinned\nnumpy==1.26.2\npandas>=2.0\n-r extra.txt\n",
    )?;

    let vendored = base_dir.join("web").join("node_modules").join("react");
    fs::create_dir_all(&vendored)?;
    fs::write(vendored.join("package.json"), r#"{"dependencies": {"loose-envify": "1.4.0"}}"#)?;

    Ok(())
}

#[test]
fn test_scan_monorepo() -> Result<()> {
    let temp_dir = tempdir()?;
    create_monorepo(temp_dir.path())?;

    let results = Pipeline::new(settings_for(temp_dir.path())).run()?;

    assert_eq!(results.summary.manifests_parsed, 5);
    assert_eq!(results.summary.manifests_failed, 0);
    assert!(results.dependencies.iter().all(|dep| dep.name != "loose-envify"));

    let packagings: Vec<&str> = results
        .dependencies
        .iter()
        .map(|dep| dep.packaging.as_str())
        .collect();
    let mut sorted = packagings.clone();
    sorted.sort();
    assert_eq!(packagings, sorted);

    let indirect = results
        .dependencies
        .iter()
        .find(|dep| dep.name == "golang.org/x/sys")
        .map(|dep| dep.category.clone());
    assert_eq!(indirect.as_deref(), Some("indirect"));

    let pandas = results.dependencies.iter().find(|dep| dep.name == "pandas");
    assert_eq!(pandas.map(|dep| dep.version.as_str()), Some(">=2.0"));
    Ok(())
}

#[test]
fn test_scan_then_aggregate() -> Result<()> {
    let temp_dir = tempdir()?;
    create_monorepo(temp_dir.path())?;

    let results = Pipeline::new(settings_for(temp_dir.path())).run()?;
    let grouped = aggregate(&results.dependencies);

    let lodash = grouped
        .iter()
        .find(|record| record.name == "lodash" && record.packaging == "node")
        .cloned();
    let lodash = lodash.ok_or_else(|| std::io::Error::other("lodash group missing"))?;
    assert_eq!(lodash.count, 2);
    assert_eq!(lodash.min_version, "4.17.15");
    assert_eq!(lodash.max_version, "4.17.21");

    // "latest" counts but does not move the bounds
    let react = grouped
        .iter()
        .find(|record| record.name == "react")
        .cloned();
    let react = react.ok_or_else(|| std::io::Error::other("react group missing"))?;
    assert_eq!(react.count, 2);
    assert_eq!(react.min_version, react.max_version);

    let names: Vec<(&str, &str, &str)> = grouped
        .iter()
        .map(|record| (record.name.as_str(), record.category.as_str(), record.packaging.as_str()))
        .collect();
    let mut ordered = names.clone();
    ordered.sort();
    assert_eq!(names, ordered);
    Ok(())
}

#[test]
fn test_malformed_manifest_is_isolated() -> Result<()> {
    let temp_dir = tempdir()?;
    let broken = temp_dir.path().join("broken");
    let healthy = temp_dir.path().join("healthy");
    fs::create_dir_all(&broken)?;
    fs::create_dir_all(&healthy)?;
    fs::write(broken.join("package.json"), "{ not json")?;
    fs::write(healthy.join("requirements.txt"), "django==4.2.7\n")?;

    let results = Pipeline::new(settings_for(temp_dir.path())).run()?;

    assert_eq!(results.summary.manifests_parsed, 1);
    assert_eq!(results.summary.manifests_failed, 1);
    assert_eq!(results.dependencies.len(), 1);
    assert_eq!(results.errors[0].path, broken.join("package.json"));
    assert_eq!(results.errors[0].severity, ErrorSeverity::Error);
    Ok(())
}

#[test]
fn test_single_worker_rendezvous_channels() -> Result<()> {
    let temp_dir = tempdir()?;
    create_monorepo(temp_dir.path())?;

    let settings = Settings {
        workers: 1,
        queue_capacity: 0,
        ..settings_for(temp_dir.path())
    };
    let results = Pipeline::new(settings).run()?;

    let baseline = Pipeline::new(settings_for(temp_dir.path())).run()?;
    assert_eq!(results.dependencies, baseline.dependencies);
    Ok(())
}

#[test]
fn test_include_filter_limits_ecosystems() -> Result<()> {
    let temp_dir = tempdir()?;
    create_monorepo(temp_dir.path())?;

    let settings = Settings {
        includes: vec!["py".to_string()],
        output_format: OutputFormat::Json,
        ..settings_for(temp_dir.path())
    };
    let results = Pipeline::new(settings).run()?;

    assert_eq!(results.summary.manifests_parsed, 1);
    assert!(results.dependencies.iter().all(|dep| dep.packaging == "python"));
    Ok(())
}
