//! Regenerates `.apisamples` files by running the documented Go tests.

use crate::model::Document;
use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;
use tracing::info;

/// Go toolchain binary, resolved from `PATH`.
const GO_BIN: &str = "go";

/// Arguments for `go test` restricted to the given test functions.
pub fn go_test_args(package_dir: &Path, tests: &[String]) -> Vec<String> {
    let package = if package_dir.as_os_str().is_empty() {
        "./".to_string()
    } else {
        package_dir.to_string_lossy().to_string()
    };

    vec![
        "test".to_string(),
        "-timeout".to_string(),
        "30s".to_string(),
        package,
        "-run".to_string(),
        format!("^({})$", tests.join("|")),
        "-count".to_string(),
        "1".to_string(),
    ]
}

/// Run every documented test of `doc`, streaming go's output through.
pub fn run_tests(doc: &Document) -> Result<()> {
    let tests: Vec<String> = doc.blocks.iter().map(|b| b.test_name()).collect();
    if tests.is_empty() {
        info!("no documented tests to run");
        return Ok(());
    }

    let args = go_test_args(&doc.source.dir, &tests);
    let command_line = format!("{} {}", GO_BIN, args.join(" "));
    info!(command = %command_line, "running tests");

    let status = Command::new(GO_BIN)
        .args(&args)
        .status()
        .with_context(|| format!("Could not run tests: {}", command_line))?;

    if !status.success() {
        bail!(
            "Could not run tests for {}: `{}` exited with {}",
            doc.source.path().display(),
            command_line,
            status
        );
    }
    Ok(())
}
