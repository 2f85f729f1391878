//! AsciiDoc output for extracted documentation.

pub mod asciidoc;
pub mod include;

use crate::config::RenderConfig;
use crate::model::Document;

/// Render the full document: optional header, then every block in order.
pub fn render_document(doc: &Document, config: &RenderConfig) -> String {
    let mut output = String::new();

    if !config.no_header {
        output.push_str(&format!("= {}\n", doc.source.title()));
        output.push_str(":toc: left\n\n");
        output.push_str("// THIS FILE IS GENERATED. DO NOT EDIT.\n");
    }

    for block in &doc.blocks {
        output.push_str(&asciidoc::render_block(block, &doc.source, config));
    }

    output
}
