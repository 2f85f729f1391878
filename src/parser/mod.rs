//! Marker-driven extraction of documentation blocks from Go test files.
//!
//! The pipeline is line based and never looks at Go grammar:
//!
//! 1. [`scan`] finds every line that names a `Test_` function.
//! 2. [`extract`] runs the block state machine from each candidate.
//! 3. [`post`] splits the optional post-section out of the block body.

pub mod extract;
pub mod post;
pub mod scan;

use crate::model::{Document, SourceFile};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Marker vocabulary, matched against comment text.
pub const START_DOCS: &str = "startdocs";
pub const START_API_DOCS: &str = "startapidocs";
pub const END_DOCS: &str = "enddocs";
pub const START_POST_DOCS: &str = "startpostdocs";
pub const END_POST_DOCS: &str = "endpostdocs";
pub const TAG_OPEN: &str = "tag::";
pub const TAG_CLOSE: &str = "end::";

/// A `//` line comment, possibly indented.
static RE_LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*//(.*)$").unwrap());

/// Normalize a source line: the comment text with `//` and surrounding
/// whitespace removed, or `None` for lines that are not comments.
pub fn comment_text(line: &str) -> Option<&str> {
    RE_LINE_COMMENT
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Text following `marker` in `text`, trimmed.
pub(crate) fn after_marker<'a>(text: &'a str, marker: &str) -> &'a str {
    text.find(marker)
        .map(|pos| text[pos + marker.len()..].trim())
        .unwrap_or_default()
}

/// Parse a whole source file into its documentation blocks.
pub fn parse(content: &str, source: SourceFile) -> Document {
    let lines: Vec<&str> = content.split('\n').collect();

    let mut blocks = Vec::new();
    for start in scan::candidates(&lines) {
        let Some(block) = extract::extract(&lines, start) else {
            continue;
        };
        if block.title.is_empty() {
            debug!(line = start + 1, func = %block.func_name, "skipping block without title");
            continue;
        }
        blocks.push(post::split_post(block));
    }

    Document { source, blocks }
}
