use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use depwalker::{
    core::{PathFilter, Walker},
    error::Result,
};

fn create_test_tree(base_dir: &Path) -> Result<()> {
    // One manifest per ecosystem at the top level
    fs::write(base_dir.join("package.json"), r#"{"dependencies": {"left-pad": "1.3.0"}}"#)?;
    fs::write(base_dir.join("requirements.txt"), "requests==2.31.0\n")?;

    let mobile = base_dir.join("apps").join("mobile");
    fs::create_dir_all(&mobile)?;
    fs::write(mobile.join("pubspec.yaml"), "dependencies:\n  http: ^1.1.0\n")?;

    let service = base_dir.join("services").join("api");
    fs::create_dir_all(&service)?;
    fs::write(service.join("go.mod"), "module example.com/api\n\nrequire github.com/pkg/errors v0.9.1\n")?;

    // Vendored trees that should normally be excluded
    let vendored = base_dir.join("node_modules").join("left-pad");
    fs::create_dir_all(&vendored)?;
    fs::write(vendored.join("package.json"), "{}")?;

    let venv = base_dir.join(".venv").join("lib");
    fs::create_dir_all(&venv)?;
    fs::write(venv.join("requirements.txt"), "six\n")?;

    // Files that are never manifests
    fs::write(base_dir.join("README.md"), "# readme")?;
    fs::write(mobile.join("main.dart"), "void main() {}")?;

    Ok(())
}

fn sorted(mut paths: Vec<PathBuf>) -> Vec<PathBuf> {
    paths.sort();
    paths
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn test_walker_finds_every_manifest() -> Result<()> {
    let temp_dir = tempdir()?;
    create_test_tree(temp_dir.path())?;

    let walker = Walker::new(vec![temp_dir.path().to_path_buf()], PathFilter::new(&[], &[]));
    let paths = walker.paths();

    assert_eq!(paths.len(), 6);
    assert!(paths.iter().all(|path| path.is_file()));
    Ok(())
}

#[test]
fn test_walker_prunes_excluded_directories() -> Result<()> {
    let temp_dir = tempdir()?;
    create_test_tree(temp_dir.path())?;

    let filter = PathFilter::new(&[], &strings(&["node_modules", ".venv"]));
    let walker = Walker::new(vec![temp_dir.path().to_path_buf()], filter);
    let paths = sorted(walker.paths());

    let root = temp_dir.path();
    let expected = sorted(vec![
        root.join("package.json"),
        root.join("requirements.txt"),
        root.join("apps").join("mobile").join("pubspec.yaml"),
        root.join("services").join("api").join("go.mod"),
    ]);
    assert_eq!(paths, expected);
    Ok(())
}

#[test]
fn test_walker_include_aliases() -> Result<()> {
    let temp_dir = tempdir()?;
    create_test_tree(temp_dir.path())?;

    let filter = PathFilter::new(&strings(&["flutter", "golang"]), &strings(&["node_modules"]));
    let walker = Walker::new(vec![temp_dir.path().to_path_buf()], filter);
    let mut names: Vec<String> = walker
        .paths()
        .iter()
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect();
    names.sort();

    assert_eq!(names, strings(&["go.mod", "pubspec.yaml"]));
    Ok(())
}

#[test]
fn test_walker_unknown_include_matches_nothing() -> Result<()> {
    let temp_dir = tempdir()?;
    create_test_tree(temp_dir.path())?;

    let filter = PathFilter::new(&strings(&["cobol"]), &[]);
    assert!(filter.allows_nothing());

    let walker = Walker::new(vec![temp_dir.path().to_path_buf()], filter);
    assert!(walker.paths().is_empty());
    Ok(())
}

#[test]
fn test_walker_multiple_roots() -> Result<()> {
    let first = tempdir()?;
    let second = tempdir()?;
    fs::write(first.path().join("package.json"), "{}")?;
    fs::write(second.path().join("go.mod"), "module example.com/x\n")?;

    let walker = Walker::new(
        vec![first.path().to_path_buf(), second.path().to_path_buf()],
        PathFilter::new(&[], &[]),
    );
    let paths = sorted(walker.paths());

    let expected = sorted(vec![first.path().join("package.json"), second.path().join("go.mod")]);
    assert_eq!(paths, expected);
    Ok(())
}

#[test]
fn test_walker_missing_root_does_not_abort() -> Result<()> {
    let temp_dir = tempdir()?;
    fs::write(temp_dir.path().join("requirements.txt"), "flask\n")?;

    let walker = Walker::new(
        vec![temp_dir.path().join("missing"), temp_dir.path().to_path_buf()],
        PathFilter::new(&[], &[]),
    );

    assert_eq!(walker.paths(), vec![temp_dir.path().join("requirements.txt")]);
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_walker_continues_past_broken_entries() -> Result<()> {
    let temp_dir = tempdir()?;
    let root = temp_dir.path();

    let broken = root.join("a-broken");
    fs::create_dir_all(&broken)?;
    std::os::unix::fs::symlink(root.join("does-not-exist"), broken.join("dangling"))?;

    let sibling = root.join("b-sibling");
    fs::create_dir_all(&sibling)?;
    fs::write(sibling.join("go.mod"), "module example.com/sibling\n")?;
    fs::write(broken.join("package.json"), "{}")?;

    let walker = Walker::new(vec![root.to_path_buf()], PathFilter::new(&[], &[])).follow_links(true);
    let paths = sorted(walker.paths());

    assert_eq!(
        paths,
        sorted(vec![broken.join("package.json"), sibling.join("go.mod")])
    );
    Ok(())
}
