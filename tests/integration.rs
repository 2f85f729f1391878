use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::{NamedTempFile, TempDir};

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_code2asciidoc")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn stdout_of(args: &[&str]) -> String {
    let assert = cmd().args(args).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

fn go_source(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix("_test.go").unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

// -- stdout mode --

#[test]
fn antora_output_matches_expected() {
    let expected = std::fs::read_to_string(fixture_path("user_api.expected.adoc")).unwrap();
    let output = stdout_of(&["--source", &fixture_path("user_api_test.go"), "--antora"]);
    assert_eq!(output, expected);
}

#[test]
fn default_paths_are_absolute() {
    let source = fixture_path("user_api_test.go");
    let output = stdout_of(&["--source", &source]);
    assert!(output.contains(&format!("include::{}[tag=CreateUser,indent=0]", source)));
    assert!(output.contains(&format!(
        "include::{}[tag=CreateUser]",
        fixture_path("user_api.apisamples")
    )));
}

#[test]
fn include_prefix_uses_bare_file_name() {
    let output = stdout_of(&[
        "--source",
        &fixture_path("user_api_test.go"),
        "--include-prefix",
        "example$",
    ]);
    for line in output.lines().filter(|l| l.starts_with("include::")) {
        assert!(line.starts_with("include::example$user_api"), "got: {line}");
    }
    assert!(!output.contains(env!("CARGO_MANIFEST_DIR")));
}

#[test]
fn relative_to_manifest_dir() {
    let output = stdout_of(&[
        "--source",
        &fixture_path("user_api_test.go"),
        "--relative-to",
        env!("CARGO_MANIFEST_DIR"),
    ]);
    assert!(output.contains("include::tests/fixtures/user_api_test.go[tag=DeleteUser,indent=0]"));
}

#[test]
fn relative_to_unrelated_dir_falls_back() {
    let dir = TempDir::new().unwrap();
    let source = fixture_path("user_api_test.go");
    let output = stdout_of(&[
        "--source",
        &source,
        "--relative-to",
        dir.path().to_str().unwrap(),
    ]);
    assert!(output.contains(&format!("include::{}[tag=DeleteUser,indent=0]", source)));
}

#[test]
fn skip_json_and_layout_flags() {
    let output = stdout_of(&[
        "--source",
        &fixture_path("user_api_test.go"),
        "--antora",
        "--no-header",
        "--skip-json",
        "--no-page-breaks",
        "--no-headings",
        "--no-outer-tags",
    ]);
    assert!(output.starts_with("Creates a new user account.\n"));
    assert!(!output.contains("[source,json]"));
    assert!(!output.contains("<<<"));
    assert!(!output.contains("// tag::"));
    assert!(!output.contains("== Create User"));
    assert!(output.contains("=== Notes\n"));
}

#[test]
fn unterminated_block_is_rendered() {
    let output = stdout_of(&[
        "--source",
        &fixture_path("unterminated_test.go"),
        "--antora",
        "--no-header",
    ]);
    assert!(output.starts_with("// tag::Open[]\n<<<\n== Open Ended\nfirst line\nsecond line\n\n"));
    assert!(output.ends_with("// end::Open[]\n"));
}

#[test]
fn file_without_docs_has_only_header() {
    let source = go_source("package api\n\nfunc Test_Nothing(t *testing.T) {\n\tt.Log(\"hi\")\n}\n");
    let output = stdout_of(&["--source", source.path().to_str().unwrap(), "--no-header"]);
    assert_eq!(output, "");
}

#[test]
fn output_is_stable() {
    let args = ["--source", &fixture_path("user_api_test.go")];
    assert_eq!(stdout_of(&args), stdout_of(&args));
}

// -- file mode --

#[test]
fn writes_out_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("user.adoc");

    let assert = cmd()
        .args(["--source", &fixture_path("user_api_test.go"), "--antora"])
        .args(["--out", out.to_str().unwrap()])
        .assert()
        .success();
    assert!(assert.get_output().stdout.is_empty());

    let expected = std::fs::read_to_string(fixture_path("user_api.expected.adoc")).unwrap();
    assert_eq!(std::fs::read_to_string(&out).unwrap(), expected);
}

#[test]
fn existing_out_file_requires_force() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("user.adoc");
    std::fs::write(&out, "keep me").unwrap();

    cmd()
        .args(["--source", &fixture_path("user_api_test.go")])
        .args(["--out", out.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("File already exists"));
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "keep me");

    cmd()
        .args(["--source", &fixture_path("user_api_test.go")])
        .args(["--out", out.to_str().unwrap()])
        .arg("-f")
        .assert()
        .success();
    assert!(std::fs::read_to_string(&out).unwrap().contains("== Create User"));
}

#[test]
fn long_f_flag_overwrites() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("user.adoc");
    std::fs::write(&out, "stale").unwrap();

    cmd()
        .args(["--source", &fixture_path("user_api_test.go")])
        .args(["--out", out.to_str().unwrap()])
        .arg("--f")
        .assert()
        .success();
    assert!(std::fs::read_to_string(&out).unwrap().contains("== Delete User"));
}

#[test]
fn dry_run_prints_instead_of_writing() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("user.adoc");

    cmd()
        .args(["--source", &fixture_path("user_api_test.go")])
        .args(["--out", out.to_str().unwrap()])
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("== Delete User"));
    assert!(!out.exists());
}

// -- errors --

#[test]
fn conflicting_path_modes_rejected() {
    cmd()
        .args(["--source", &fixture_path("user_api_test.go")])
        .arg("--antora")
        .args(["--include-prefix", "x$"])
        .assert()
        .code(100)
        .stderr(predicate::str::contains("mutually exclusive"));
}

#[test]
fn conflict_checked_before_reading_source() {
    cmd()
        .args(["--source", "/does/not/exist_test.go"])
        .args(["--relative-to", "/tmp", "--include-prefix", "x$"])
        .assert()
        .code(100)
        .stderr(predicate::str::contains("mutually exclusive"));
}

#[test]
fn failed_test_run_reports_command() {
    cmd()
        .args(["--source", &fixture_path("user_api_test.go")])
        .args(["--run", "--dry-run"])
        .env("PATH", "")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("== Create User"))
        .stderr(predicate::str::contains("go test -timeout 30s "))
        .stderr(predicate::str::contains(
            "-run ^(Test_CreateUser|Test_DeleteUser)$ -count 1",
        ));
}

#[test]
fn missing_source_flag_is_usage_error() {
    cmd().assert().code(100).stderr(predicate::str::contains("--source"));
}

#[test]
fn unreadable_source_fails() {
    cmd()
        .args(["--source", "/does/not/exist_test.go"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Could not read source file"));
}

#[test]
fn help_exits_cleanly() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--include-prefix"));
}
