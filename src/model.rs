//! Data model for extracted documentation — format-agnostic.

use std::path::{Path, PathBuf};

/// Suffix that marks a Go test file.
const TEST_SUFFIX: &str = "_test.go";

/// Extension of the sample-data file written by the documented tests.
const SAMPLES_EXTENSION: &str = "apisamples";

/// All documentation extracted from a single source file.
#[derive(Debug)]
pub struct Document {
    pub source: SourceFile,
    /// Blocks in declaration order. Every block has a non-empty title.
    pub blocks: Vec<DocBlock>,
}

/// One documentation unit bound to a single `Test_` function.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DocBlock {
    /// Function name without the `Test_` prefix.
    pub func_name: String,
    pub title: String,
    pub body: Vec<String>,
    /// Set by `startapidocs`: the test also writes a sample-data region.
    pub api_doc: bool,
    pub post_title: String,
    pub post: Vec<String>,
}

impl DocBlock {
    /// Name of the Go test function this block documents.
    pub fn test_name(&self) -> String {
        format!("Test_{}", self.func_name)
    }

    /// Anchor id for one of the block's include sections.
    pub fn anchor(&self, kind: &str) -> String {
        format!(
            "{}_{}_{}",
            self.title.to_lowercase(),
            self.func_name.to_lowercase(),
            kind
        )
    }
}

/// The input file: where it lives and the names derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Directory part of the path as given (may be empty).
    pub dir: PathBuf,
    /// Bare file name, e.g. `client_test.go`.
    pub file_name: String,
}

impl SourceFile {
    pub fn new(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self { dir, file_name }
    }

    /// Full path of the source file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }

    /// `client_test.go` → `client.apisamples`
    pub fn samples_file_name(&self) -> String {
        let stem = self
            .file_name
            .split(TEST_SUFFIX)
            .next()
            .unwrap_or(&self.file_name);
        format!("{}.{}", stem, SAMPLES_EXTENSION)
    }

    /// `client_test.go` → `client `
    ///
    /// Only the first `test.go` is dropped and underscores become spaces, so
    /// the trailing separator survives as a space.
    pub fn title(&self) -> String {
        self.file_name.replacen("test.go", "", 1).replace('_', " ")
    }
}
