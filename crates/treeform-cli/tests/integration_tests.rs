//! Integration tests for treeform-cli.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn treeform() -> Command {
    Command::cargo_bin("treeform").unwrap()
}

/// Write a template CSV inside a fresh working directory.
fn workdir_with_template(csv: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("template.csv"), csv).unwrap();
    dir
}

const BASIC_TEMPLATE: &str = "folder_name,parent,readme_text,minimal\n\
    data,root,Raw and processed datasets,true\n\
    raw,data,,true\n\
    src,root,,false\n";

// ── build ─────────────────────────────────────────────────────────────────────

#[test]
fn build_creates_directories_and_readmes() {
    let dir = workdir_with_template(BASIC_TEMPLATE);

    treeform()
        .current_dir(dir.path())
        .args(["build", "template.csv"])
        .assert()
        .success()
        // registry count includes the working-directory root: 3 records + root
        .stdout(predicate::str::contains("4 folders"));

    assert!(dir.path().join("data/raw").is_dir());
    assert!(dir.path().join("src").is_dir());
    let readme = fs::read_to_string(dir.path().join("data/README_Data.md")).unwrap();
    assert!(readme.contains("##**Data**"));
    assert!(readme.contains("Raw and processed datasets"));
}

#[test]
fn build_minimal_skips_unflagged_folders() {
    let dir = workdir_with_template(BASIC_TEMPLATE);

    treeform()
        .current_dir(dir.path())
        .args(["build", "template.csv", "--minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 folders"));

    assert!(dir.path().join("data/raw").is_dir());
    assert!(!dir.path().join("src").exists());
}

#[test]
fn build_count_is_registry_size_root_included() {
    let dir = workdir_with_template(
        "folder_name,parent,readme_text,minimal\n\
         a,root,,\n\
         b,a,,\n\
         c,root,,\n",
    );

    treeform()
        .current_dir(dir.path())
        .args(["build", "template.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 folders"));
}

#[test]
fn build_is_rerunnable() {
    let dir = workdir_with_template(BASIC_TEMPLATE);

    for _ in 0..2 {
        treeform()
            .current_dir(dir.path())
            .args(["build", "template.csv"])
            .assert()
            .success();
    }
    assert!(dir.path().join("data/raw").is_dir());
}

#[test]
fn build_dry_run_touches_nothing() {
    let dir = workdir_with_template(BASIC_TEMPLATE);

    treeform()
        .current_dir(dir.path())
        .args(["build", "template.csv", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!dir.path().join("data").exists());
    assert!(!dir.path().join("src").exists());
}

#[test]
fn build_missing_template_exits_3() {
    let dir = TempDir::new().unwrap();

    treeform()
        .current_dir(dir.path())
        .args(["build", "nope.csv"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn build_without_template_argument_exits_2() {
    let dir = TempDir::new().unwrap();

    treeform()
        .current_dir(dir.path())
        .arg("build")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no template file given"));
}

#[test]
fn build_cyclic_template_exits_2() {
    let dir = workdir_with_template(
        "folder_name,parent,readme_text,minimal\n\
         a,b,,\n\
         b,a,,\n",
    );

    treeform()
        .current_dir(dir.path())
        .args(["build", "template.csv"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("refers back"));

    assert!(!dir.path().join("a").exists());
    assert!(!dir.path().join("b").exists());
}

#[test]
fn build_missing_parent_exits_3() {
    let dir = workdir_with_template(
        "folder_name,parent,readme_text,minimal\n\
         raw,data,,\n",
    );

    treeform()
        .current_dir(dir.path())
        .args(["build", "template.csv"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not defined in the template"));
}

#[test]
fn build_reserved_character_exits_2() {
    let dir = workdir_with_template(
        "folder_name,parent,readme_text,minimal\n\
         bad|name,root,,\n",
    );

    treeform()
        .current_dir(dir.path())
        .args(["build", "template.csv"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("reserved character"));
}

#[test]
fn config_default_template_is_used() {
    let dir = workdir_with_template(BASIC_TEMPLATE);
    fs::write(
        dir.path().join("treeform.toml"),
        "[defaults]\ntemplate = \"template.csv\"\n",
    )
    .unwrap();

    treeform()
        .current_dir(dir.path())
        .args(["--config", "treeform.toml", "build"])
        .assert()
        .success();

    assert!(dir.path().join("data/raw").is_dir());
}

#[test]
fn malformed_config_exits_4() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.toml"), "not toml [[[").unwrap();

    treeform()
        .current_dir(dir.path())
        .args(["--config", "bad.toml", "build", "x.csv"])
        .assert()
        .code(4);
}

// ── check ─────────────────────────────────────────────────────────────────────

#[test]
fn check_valid_template_reports_paths() {
    let dir = workdir_with_template(BASIC_TEMPLATE);

    treeform()
        .current_dir(dir.path())
        .args(["check", "template.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"))
        .stdout(predicate::str::contains("./data/raw"));

    // check must never create anything.
    assert!(!dir.path().join("data").exists());
}

#[test]
fn check_json_output() {
    let dir = workdir_with_template(BASIC_TEMPLATE);

    let assert = treeform()
        .current_dir(dir.path())
        .args(["check", "template.csv", "--output-format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["folders"], 3);
    assert!(
        report["paths"]
            .as_array()
            .unwrap()
            .iter()
            .any(|p| p == "./data/raw")
    );
}

#[test]
fn check_bad_boolean_cell_exits_2() {
    let dir = workdir_with_template(
        "folder_name,parent,readme_text,minimal\n\
         data,root,,maybe\n",
    );

    treeform()
        .current_dir(dir.path())
        .args(["check", "template.csv"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("parse"));
}

// ── global flags / misc ───────────────────────────────────────────────────────

#[test]
fn no_arguments_shows_help_and_exits_2() {
    treeform()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_prints_version() {
    treeform()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn quiet_build_still_succeeds_silently() {
    let dir = workdir_with_template(BASIC_TEMPLATE);

    treeform()
        .current_dir(dir.path())
        .args(["--quiet", "build", "template.csv"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(dir.path().join("data").is_dir());
}

#[test]
fn completions_generate_for_bash() {
    treeform()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("treeform"));
}

// sanity: the worked example from the docs
#[test]
fn minimal_two_folder_chain() {
    let dir = workdir_with_template(
        "folder_name,parent,readme_text,minimal\n\
         data,root,,true\n\
         raw,data,,true\n",
    );

    treeform()
        .current_dir(dir.path())
        .args(["build", "template.csv", "--minimal"])
        .assert()
        .success();

    assert!(Path::new(&dir.path().join("data/raw")).is_dir());
}
