//! Per-block AsciiDoc rendering.
//!
//! Output for one block, each part subject to [`RenderConfig`]:
//!
//! ```text
//! // tag::<func>[]
//! <<<
//! == <title>
//! <body>
//!
//! [#<title>_<func>_go]
//! .Go <title>
//! [source,go]
//! ----
//! include::<go path>[tag=<func>,indent=0]
//! ----
//!
//! [#<title>_<func>_json]        (startapidocs only)
//! ...
//!
//! === <post title>              (post section only)
//! <post>
//!
//! // end::<func>[]
//! ```

use super::include::include_path;
use crate::config::RenderConfig;
use crate::model::{DocBlock, SourceFile};

/// Render a single block. Pure in `(block, source, config)`.
pub fn render_block(block: &DocBlock, source: &SourceFile, config: &RenderConfig) -> String {
    let mut out = String::new();

    if !config.no_outer_tags {
        out.push_str(&format!("// tag::{}[]\n", block.func_name));
    }

    if !config.no_page_breaks {
        out.push_str("<<<\n");
    }

    if !config.no_headings {
        out.push_str(&format!("== {}\n", block.title));
    }

    push_lines(&mut out, &block.body);

    let go_path = include_path(source, &source.file_name, &config.path_mode);
    out.push_str(&source_section(
        block,
        "go",
        "Go",
        &format!("include::{}[tag={},indent=0]", go_path, block.func_name),
    ));

    if block.api_doc && !config.skip_json {
        let json_path = include_path(source, &source.samples_file_name(), &config.path_mode);
        out.push_str(&source_section(
            block,
            "json",
            "JSON",
            &format!("include::{}[tag={}]", json_path, block.func_name),
        ));
    }

    if !block.post_title.is_empty() {
        out.push_str(&format!("\n=== {}\n", block.post_title));
        push_lines(&mut out, &block.post);
        out.push('\n');
    }

    if !config.no_outer_tags {
        out.push_str(&format!("// end::{}[]\n", block.func_name));
    }

    out
}

/// Anchored, captioned listing wrapping one include directive.
fn source_section(block: &DocBlock, lang: &str, caption: &str, include: &str) -> String {
    format!(
        "\n[#{}]\n.{} {}\n[source,{}]\n----\n{}\n----\n",
        block.anchor(lang),
        caption,
        block.title,
        lang,
        include
    )
}

fn push_lines(out: &mut String, lines: &[String]) {
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
}
