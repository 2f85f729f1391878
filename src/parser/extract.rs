//! Block extraction — a small state machine driven by comment markers.
//!
//! | State     | Input                        | Action                          |
//! |-----------|------------------------------|---------------------------------|
//! | `Seeking` | start marker on next line    | set title, go to `InBody`       |
//! | `Seeking` | anything else                | no documentation                |
//! | `InBody`  | start marker                 | replace title                   |
//! | `InBody`  | `enddocs`                    | `Done`                          |
//! | `InBody`  | `tag::` / `end::`            | skip                            |
//! | `InBody`  | other comment                | append to body                  |
//! | `InBody`  | code line                    | skip                            |
//!
//! Reaching end of input while `InBody` keeps whatever was collected.

use super::{after_marker, comment_text, scan::TEST_PREFIX};
use super::{END_DOCS, START_API_DOCS, START_DOCS, TAG_CLOSE, TAG_OPEN};
use crate::model::DocBlock;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// `Test_<name>(`
static RE_TEST_FUNC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"{}(\w+)\(", TEST_PREFIX)).unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Seeking,
    InBody,
    Done,
}

/// What a single comment line means inside a block.
#[derive(Debug, PartialEq, Eq)]
enum Marker<'a> {
    Start { title: &'a str, api: bool },
    End,
    Region,
    Text(&'a str),
}

fn classify(text: &str) -> Marker<'_> {
    if text.contains(START_API_DOCS) {
        Marker::Start {
            title: after_marker(text, START_API_DOCS),
            api: true,
        }
    } else if text.contains(START_DOCS) {
        Marker::Start {
            title: after_marker(text, START_DOCS),
            api: false,
        }
    } else if text.contains(END_DOCS) {
        Marker::End
    } else if text.starts_with(TAG_OPEN) || text.starts_with(TAG_CLOSE) {
        Marker::Region
    } else {
        Marker::Text(text)
    }
}

/// Function name from a declaration line, without the `Test_` prefix.
pub fn func_name(line: &str) -> Option<&str> {
    RE_TEST_FUNC
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extract the block for the function declared at `start`.
///
/// Returns `None` when the declaration can't be parsed or the line right
/// after it does not open a block. Undocumented functions are not errors.
pub fn extract(lines: &[&str], start: usize) -> Option<DocBlock> {
    let Some(name) = lines.get(start).and_then(|line| func_name(line)) else {
        debug!(line = start + 1, "no function name on candidate line");
        return None;
    };

    let mut block = DocBlock {
        func_name: name.to_string(),
        ..Default::default()
    };
    let mut state = State::Seeking;

    for line in &lines[start + 1..] {
        let Some(text) = comment_text(line) else {
            if state == State::Seeking {
                return None;
            }
            continue;
        };

        match (state, classify(text)) {
            (State::Seeking | State::InBody, Marker::Start { title, api }) => {
                block.title = title.to_string();
                block.api_doc |= api;
                state = State::InBody;
            }
            (State::Seeking, _) => return None,
            (State::InBody, Marker::End) => state = State::Done,
            (State::InBody, Marker::Region) => {}
            (State::InBody, Marker::Text(text)) => block.body.push(text.to_string()),
            (State::Done, _) => break,
        }
    }

    match state {
        State::Seeking => None,
        State::InBody => {
            debug!(func = %block.func_name, "block not terminated before end of file");
            Some(block)
        }
        State::Done => Some(block),
    }
}
