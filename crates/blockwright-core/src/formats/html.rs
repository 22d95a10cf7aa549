// SPDX-License-Identifier: AGPL-3.0-or-later
//! HTML renderer for formatted markup

use crate::ast::{Block, Inline, ListKind, Markup};
use crate::traits::{ConversionError, RenderConfig, Renderer, Result};

/// HTML fragment renderer
///
/// Blocks are emitted back to back with no separator; each carries its own
/// wrapping element.
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for HtmlRenderer {
    fn name(&self) -> &'static str {
        "html"
    }

    fn render(&self, markup: &Markup, config: &RenderConfig) -> Result<String> {
        let mut output = String::new();
        for block in &markup.blocks {
            render_block(&mut output, block, config)?;
        }
        Ok(output)
    }
}

fn render_block(output: &mut String, block: &Block, config: &RenderConfig) -> Result<()> {
    match block {
        Block::Heading { level, content } => {
            if !(1..=6).contains(level) {
                return Err(ConversionError::InvalidHeadingLevel {
                    format: "html",
                    level: *level,
                });
            }
            output.push_str(&format!("<h{level}>"));
            render_inlines(output, content, config);
            output.push_str(&format!("</h{level}>"));
        }
        Block::List { kind, items } => {
            let tag = match kind {
                ListKind::Bullet => "ul",
                ListKind::Ordered => "ol",
            };
            output.push_str(&format!("<{tag}>"));
            for item in items {
                output.push_str("<li>");
                render_inlines(output, &item.content, config);
                output.push_str("</li>");
            }
            output.push_str(&format!("</{tag}>"));
        }
        Block::BlockQuote { content } => {
            output.push_str("<blockquote>");
            render_inlines(output, content, config);
            output.push_str("</blockquote>");
        }
        Block::Paragraph { content } => {
            output.push_str("<p>");
            render_inlines(output, content, config);
            output.push_str("</p>");
        }
        Block::Placeholder => {
            output.push_str("<p class=\"placeholder-text\">");
            push_text(output, &config.placeholder, config);
            output.push_str("</p>");
        }
    }
    Ok(())
}

fn render_inlines(output: &mut String, inlines: &[Inline], config: &RenderConfig) {
    for inline in inlines {
        match inline {
            Inline::Text { content } => push_text(output, content, config),
            Inline::LineBreak => output.push_str("<br>"),
            Inline::SoftBreak => output.push('\n'),
        }
    }
}

fn push_text(output: &mut String, text: &str, config: &RenderConfig) {
    if config.escape {
        output.push_str(&escape_html(text));
    } else {
        output.push_str(text);
    }
}

/// Escape text for use in HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
