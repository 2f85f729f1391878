//! Post-section splitting.
//!
//! A block body may carry one `startpostdocs <title>` … `endpostdocs`
//! region. Its lines move to `post`; lines before and after it stay in the
//! body in their original order.
//!
//! - A second `startpostdocs` is kept as a plain line of whatever region it
//!   appears in.
//! - An `endpostdocs` outside an open region is dropped.
//! - A region opened without a title is folded back into the body, so `post`
//!   is never populated without `post_title`.

use super::{after_marker, END_POST_DOCS, START_POST_DOCS};
use crate::model::DocBlock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Main,
    Post,
    Closed,
}

/// Move the post region out of `block.body`.
///
/// A body without `startpostdocs` leaves the block untouched, which makes
/// the split idempotent.
pub fn split_post(mut block: DocBlock) -> DocBlock {
    let mut body = Vec::with_capacity(block.body.len());
    let mut post = Vec::new();
    let mut post_title = String::new();
    let mut post_at = 0;
    let mut region = Region::Main;

    for line in std::mem::take(&mut block.body) {
        let is_start = line.contains(START_POST_DOCS);
        let is_end = line.contains(END_POST_DOCS);

        match region {
            Region::Main if is_start => {
                post_title = after_marker(&line, START_POST_DOCS).to_string();
                post_at = body.len();
                region = Region::Post;
            }
            Region::Post if is_end => region = Region::Closed,
            Region::Post => post.push(line),
            _ if is_end => {}
            _ => body.push(line),
        }
    }

    if region == Region::Main {
        block.body = body;
        return block;
    }

    if post_title.is_empty() {
        let tail = body.split_off(post_at);
        body.extend(post);
        body.extend(tail);
    } else {
        block.post_title = post_title;
        block.post = post;
    }
    block.body = body;
    block
}
