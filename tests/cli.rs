use assert_cmd::Command;
use predicates::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;
use tempfile::TempDir;

const MANIFEST: &str = r#"{
  "formatVersion": 1,
  "name": "Skyblock Plus",
  "version_number": "1.4.2",
  "dependencies": {
    "minecraft": "1.20.1"
  }
}
"#;

fn modpack(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("modpack").unwrap();
    cmd.current_dir(cwd)
        .env_remove("MODPACK_SOURCE")
        .env_remove("MODPACK_OUTPUT")
        .env_remove("MODPACK_MANIFEST")
        .env_remove("MODPACK_CLI_VERSION");
    cmd
}

fn project(manifest: Option<&str>) -> TempDir {
    let dir = TempDir::new().unwrap();
    let pack = dir.path().join("pack");
    fs::create_dir_all(pack.join("mods")).unwrap();
    fs::write(pack.join("a.txt"), "alpha").unwrap();
    fs::write(pack.join("mods/b.txt"), "bravo").unwrap();
    if let Some(m) = manifest {
        fs::write(pack.join("manifest.json"), m).unwrap();
    }
    dir
}

fn zip_entries(path: &Path) -> BTreeMap<String, String> {
    let mut archive = zip::ZipArchive::new(fs::File::open(path).unwrap()).unwrap();
    let mut out = BTreeMap::new();
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).unwrap();
        let mut body = String::new();
        entry.read_to_string(&mut body).unwrap();
        out.insert(entry.name().to_string(), body);
    }
    out
}

fn manifest_text(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join("pack/manifest.json")).unwrap()
}

#[test]
fn build_reprompts_then_bumps_and_packages() {
    let dir = project(Some(MANIFEST));

    modpack(dir.path())
        .write_stdin("9\nabc\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current version: 1.4.2"))
        .stdout(predicate::str::contains("1) patch -> 1.4.3"))
        .stdout(predicate::str::contains("Invalid choice '9'"))
        .stdout(predicate::str::contains("Invalid choice 'abc'"))
        .stdout(predicate::str::contains("Added: mods/b.txt"))
        .stdout(predicate::str::contains(
            "Modpack created successfully: dist/modpack.zip",
        ));

    assert_eq!(manifest_text(&dir), MANIFEST.replace("1.4.2", "1.4.3"));

    let entries = zip_entries(&dir.path().join("dist/modpack.zip"));
    assert_eq!(
        entries.keys().collect::<Vec<_>>(),
        vec!["a.txt", "manifest.json", "mods/b.txt"]
    );
    assert_eq!(entries["a.txt"], "alpha");
    assert!(entries["manifest.json"].contains("\"version_number\": \"1.4.3\""));
}

#[test]
fn keep_option_leaves_manifest_bytes_alone() {
    let compact = r#"{"version_number":"2.0","name":"x"}"#;
    let dir = project(Some(compact));

    modpack(dir.path())
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Keeping version 2.0"));

    assert_eq!(manifest_text(&dir), compact);
    assert!(dir.path().join("dist/modpack.zip").is_file());
}

#[test]
fn bump_flag_skips_the_prompt() {
    let dir = project(Some(MANIFEST));

    modpack(dir.path())
        .args(["build", "--bump", "major"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.4.2 -> 2.0.0"));

    assert!(manifest_text(&dir).contains("\"version_number\": \"2.0.0\""));
}

#[test]
fn missing_source_fails_without_output() {
    let dir = TempDir::new().unwrap();

    modpack(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Source directory not found"));

    assert!(!dir.path().join("dist").exists());
}

#[test]
fn missing_manifest_is_optional_for_plain_build() {
    let dir = project(None);

    modpack(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping version bump"));

    let entries = zip_entries(&dir.path().join("dist/modpack.zip"));
    assert_eq!(entries.keys().collect::<Vec<_>>(), vec!["a.txt", "mods/b.txt"]);
}

#[test]
fn requested_bump_without_manifest_aborts_before_packaging() {
    let dir = project(None);

    modpack(dir.path())
        .args(["build", "--bump", "patch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Manifest not found"));

    assert!(!dir.path().join("dist/modpack.zip").exists());
}

#[test]
fn bad_version_aborts_before_packaging() {
    let dir = project(Some(r#"{"version_number": "1.two.3"}"#));

    modpack(dir.path())
        .write_stdin("1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a non-negative integer"));

    assert!(!dir.path().join("dist/modpack.zip").exists());
}

#[test]
fn closed_stdin_aborts_without_changes() {
    let dir = project(Some(MANIFEST));

    modpack(dir.path())
        .write_stdin("0\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No version choice was made"));

    assert_eq!(manifest_text(&dir), MANIFEST);
    assert!(!dir.path().join("dist/modpack.zip").exists());
}

#[test]
fn skip_version_packages_without_prompting() {
    let dir = project(Some(MANIFEST));

    modpack(dir.path())
        .args(["build", "--skip-version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current version").not());

    assert_eq!(manifest_text(&dir), MANIFEST);
    assert!(dir.path().join("dist/modpack.zip").is_file());
}

#[test]
fn bump_subcommand_only_touches_manifest() {
    let dir = project(Some(MANIFEST));

    modpack(dir.path()).args(["bump", "minor"]).assert().success();

    assert!(manifest_text(&dir).contains("\"version_number\": \"1.5.0\""));
    assert!(!dir.path().join("dist").exists());
}

#[test]
fn show_lists_candidates() {
    let dir = project(Some(MANIFEST));

    modpack(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current version: 1.4.2"))
        .stdout(predicate::str::contains("minor -> 1.5.0"))
        .stdout(predicate::str::contains("major -> 2.0.0"));

    assert_eq!(manifest_text(&dir), MANIFEST);
}

#[test]
fn paths_come_from_environment() {
    let dir = project(None);
    fs::create_dir_all(dir.path().join("content")).unwrap();
    fs::write(dir.path().join("content/only.txt"), "x").unwrap();

    modpack(dir.path())
        .env("MODPACK_SOURCE", "content")
        .env("MODPACK_OUTPUT", "out/custom.zip")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Modpack created successfully: out/custom.zip",
        ));

    let entries = zip_entries(&dir.path().join("out/custom.zip"));
    assert_eq!(entries.keys().collect::<Vec<_>>(), vec!["only.txt"]);
}

#[test]
fn version_flag_prints_banner() {
    let dir = TempDir::new().unwrap();

    modpack(dir.path())
        .env("MODPACK_CLI_VERSION", "9.9.9")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("v9.9.9"));
}
