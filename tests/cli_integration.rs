//! CLI integration tests for godep.
//!
//! These tests run the binary against small Go trees written to temporary
//! directories.

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the godep binary command.
fn godep() -> Command {
    Command::cargo_bin("godep").unwrap()
}

/// Create a temporary directory for test trees.
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A tree with one library and two executables sharing a file.
fn sample_tree() -> TempDir {
    let tmp = temp_dir();
    write(
        tmp.path(),
        "lib/lib.go",
        "package lib\n\nimport \"strings\"\n\nfunc Upper(s string) string { return strings.ToUpper(s) }\n",
    );
    write(
        tmp.path(),
        "hello.go",
        "package main\n\nimport (\n\t\"fmt\"\n\t\"lib\"\n)\n\nfunc main() {\n\tfmt.Println(lib.Upper(greeting))\n}\n",
    );
    write(
        tmp.path(),
        "bye.go",
        "package main\n\nimport \"fmt\"\n\nfunc main() {\n\tfmt.Println(\"bye\")\n}\n",
    );
    write(
        tmp.path(),
        "common.go",
        "package main\n\n// greeting is shared by every program\nconst greeting = \"hi\"\n",
    );
    tmp
}

// ============================================================================
// directory scan
// ============================================================================

#[test]
fn test_scan_emits_rules() {
    let tmp = sample_tree();

    godep()
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(
            "# external packages: strings fmt \n\
             GOFILES = lib/lib.go bye.go common.go hello.go \n\
             lib.${O}: lib/lib.go \n\
             bye: bye.${O}\n\
             hello: hello.${O}\n\
             bye.${O}: bye.go common.go lib.${O} \n\
             hello.${O}: hello.go common.go lib.${O} \n",
        );
}

#[test]
fn test_need_flag_lists_externals() {
    let tmp = sample_tree();

    godep()
        .arg("-n")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            ".EXTERNAL: strings.${O} fmt.${O} \n# external packages: strings fmt \n",
        ))
        .stdout(predicate::str::contains("lib.${O}: lib/lib.go strings.${O} \n"))
        .stdout(predicate::str::contains(
            "hello.${O}: hello.go common.go fmt.${O} lib.${O} \n",
        ));
}

#[test]
fn test_dir_flag() {
    let tmp = sample_tree();

    godep()
        .args(["-C", "."])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("GOFILES = lib/lib.go"));

    let outer = tmp.path().parent().unwrap();
    godep()
        .arg("-C")
        .arg(tmp.path())
        .current_dir(outer)
        .assert()
        .success()
        .stdout(predicate::str::contains("GOFILES = lib/lib.go bye.go"));
}

#[test]
fn test_empty_directory() {
    let tmp = temp_dir();

    godep()
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout("# external packages: \nGOFILES = \n");
}

// ============================================================================
// explicit files
// ============================================================================

#[test]
fn test_explicit_files() {
    let tmp = sample_tree();

    godep()
        .args(["hello.go", "common.go"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(
            "# external packages: fmt lib \n\
             GOFILES = hello.go common.go \n\
             hello: hello.${O}\n\
             hello.${O}: hello.go common.go \n",
        );
}

#[test]
fn test_execname_for_nameless_root() {
    let tmp = temp_dir();
    write(tmp.path(), ".go", "package main\n\nfunc main() {}\n");

    godep()
        .args([".go", "-x", "tool"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("tool: tool.${O}\n"))
        .stdout(predicate::str::contains("tool.${O}: .go \n"));
}

// ============================================================================
// output options
// ============================================================================

#[test]
fn test_json_output() {
    let tmp = sample_tree();

    let output = godep()
        .arg("--json")
        .current_dir(tmp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["external"], serde_json::json!(["strings", "fmt"]));
    assert_eq!(value["roots"][0]["target"], "bye");
    assert_eq!(value["roots"][1]["common"], serde_json::json!(["common.go"]));
}

#[test]
fn test_output_file() {
    let tmp = sample_tree();

    godep()
        .args(["-o", "deps.mk"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout("");

    let written = fs::read_to_string(tmp.path().join("deps.mk")).unwrap();
    assert!(written.contains("lib.${O}: lib/lib.go \n"));
}

#[test]
fn test_project_config() {
    let tmp = sample_tree();
    write(
        tmp.path(),
        ".godep/config.toml",
        "[rules]\nartifact_suffix = \".6\"\nfile_list_var = \"SRCS\"\n",
    );

    godep()
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("SRCS = lib/lib.go"))
        .stdout(predicate::str::contains("lib.6: lib/lib.go \n"))
        .stdout(predicate::str::contains("hello: hello.6\n"));
}

// ============================================================================
// errors
// ============================================================================

#[test]
fn test_parse_failure_is_fatal() {
    let tmp = sample_tree();
    write(tmp.path(), "broken.go", "func main() {}\n");

    godep()
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("expected 'package' clause"));
}

#[test]
fn test_missing_file_is_fatal() {
    let tmp = temp_dir();

    godep()
        .arg("nope.go")
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("failed to read source file"));
}

#[test]
fn test_version_flag() {
    godep()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("godep"));
}
