// SPDX-License-Identifier: AGPL-3.0-or-later
//! Block text format handler
//!
//! Block text is what the user types into the editor: blank-line separated
//! blocks whose leading characters pick their structure (`#` headings, `•`/`-`
//! bullets, `1.` numbered items, `>` quotes, anything else a paragraph).

use std::borrow::Cow;

use crate::ast::{inline_plain_text, lines_to_inlines, Block, Inline, ListItem, ListKind, Markup};
use crate::traits::{ConversionError, ParseConfig, Parser, RenderConfig, Renderer, Result};

const BULLET_MARKERS: [char; 2] = ['•', '-'];

/// Block text format handler
pub struct BlockTextHandler;

impl BlockTextHandler {
    pub fn new() -> Self {
        Self
    }

    /// Parse without the `Result` wrapper; block text parsing cannot fail
    pub fn format(&self, input: &str, config: &ParseConfig) -> Markup {
        let normalized: Cow<'_, str> = if input.contains("\r\n") {
            Cow::Owned(input.replace("\r\n", "\n"))
        } else {
            Cow::Borrowed(input)
        };

        let mut blocks: Vec<Block> = split_blocks(&normalized)
            .into_iter()
            .filter(|candidate| !candidate.trim().is_empty())
            .map(|candidate| classify(candidate, config))
            .collect();

        if blocks.is_empty() {
            blocks.push(Block::Placeholder);
        }

        Markup {
            blocks,
            raw_source: config.preserve_raw_source.then(|| input.to_string()),
        }
    }
}

impl Default for BlockTextHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for BlockTextHandler {
    fn name(&self) -> &'static str {
        "blocktext"
    }

    fn parse(&self, input: &str, config: &ParseConfig) -> Result<Markup> {
        Ok(self.format(input, config))
    }
}

/// Split on runs of two or more line breaks, preserving order
fn split_blocks(input: &str) -> Vec<&str> {
    let bytes = input.as_bytes();
    let mut blocks = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'\n' {
            i += 1;
            continue;
        }
        let mut end = i;
        while end < bytes.len() && bytes[end] == b'\n' {
            end += 1;
        }
        if end - i >= 2 {
            blocks.push(&input[start..i]);
            start = end;
        }
        i = end;
    }
    blocks.push(&input[start..]);
    blocks
}

fn classify(candidate: &str, config: &ParseConfig) -> Block {
    let trimmed = candidate.trim();

    if trimmed.starts_with('#') {
        let run = trimmed.chars().take_while(|c| *c == '#').count();
        let max = usize::from(config.max_heading_level.max(1));
        let text = trimmed[run..].trim_start();
        return Block::Heading {
            level: run.min(max) as u8,
            content: lines_to_inlines(text, Inline::SoftBreak),
        };
    }

    if trimmed.starts_with(BULLET_MARKERS) {
        return Block::List {
            kind: ListKind::Bullet,
            items: trimmed
                .split('\n')
                .map(|line| ListItem::text(strip_bullet(line)))
                .collect(),
        };
    }

    if ordered_prefix_len(trimmed).is_some() {
        return Block::List {
            kind: ListKind::Ordered,
            items: trimmed
                .split('\n')
                .map(|line| ListItem::text(strip_ordered(line)))
                .collect(),
        };
    }

    if trimmed.starts_with('>') {
        let body = trimmed
            .split('\n')
            .map(strip_quote)
            .collect::<Vec<_>>()
            .join("\n");
        return Block::BlockQuote {
            content: lines_to_inlines(&body, Inline::LineBreak),
        };
    }

    Block::Paragraph {
        content: lines_to_inlines(trimmed, Inline::LineBreak),
    }
}

/// Lines without a marker are kept verbatim; they still become list items.
fn strip_bullet(line: &str) -> &str {
    let line = line.trim_start();
    match line.strip_prefix(BULLET_MARKERS) {
        Some(rest) => rest.trim_start(),
        None => line,
    }
}

fn strip_ordered(line: &str) -> &str {
    let line = line.trim_start();
    match ordered_prefix_len(line) {
        Some(len) => line[len..].trim_start(),
        None => line,
    }
}

fn strip_quote(line: &str) -> &str {
    let line = line.trim_start();
    match line.strip_prefix('>') {
        Some(rest) => rest.trim_start_matches([' ', '\t']),
        None => line,
    }
}

/// Length of a leading `<digits>.` prefix, if any
fn ordered_prefix_len(text: &str) -> Option<usize> {
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    (digits > 0 && text.as_bytes().get(digits) == Some(&b'.')).then_some(digits + 1)
}

impl Renderer for BlockTextHandler {
    fn name(&self) -> &'static str {
        "blocktext"
    }

    fn render(&self, markup: &Markup, _config: &RenderConfig) -> Result<String> {
        let mut rendered = Vec::with_capacity(markup.blocks.len());
        for block in &markup.blocks {
            if let Some(text) = render_block(block)? {
                rendered.push(text);
            }
        }
        Ok(rendered.join("\n\n"))
    }
}

fn render_block(block: &Block) -> Result<Option<String>> {
    let text = match block {
        Block::Heading { level, content } => {
            if !(1..=6).contains(level) {
                return Err(ConversionError::InvalidHeadingLevel {
                    format: "blocktext",
                    level: *level,
                });
            }
            format!(
                "{} {}",
                "#".repeat(usize::from(*level)),
                inline_plain_text(content)
            )
        }
        Block::List { kind, items } => items
            .iter()
            .enumerate()
            .map(|(i, item)| match kind {
                ListKind::Bullet => format!("- {}", item.plain_text()),
                ListKind::Ordered => format!("{}. {}", i + 1, item.plain_text()),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Block::BlockQuote { content } => inline_plain_text(content)
            .split('\n')
            .map(|line| format!("> {line}"))
            .collect::<Vec<_>>()
            .join("\n"),
        Block::Paragraph { content } => inline_plain_text(content),
        Block::Placeholder => return Ok(None),
    };
    Ok(Some(text))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn block_text_strategy() -> impl Strategy<Value = String> {
        "[#>•\\-0-9. a-z\n]{0,120}"
    }

    fn kinds(markup: &Markup) -> Vec<&'static str> {
        markup.blocks.iter().map(Block::kind_name).collect()
    }

    proptest! {
        // Property: re-splitting rendered output classifies the same way
        #[test]
        fn prop_reformat_is_structurally_stable(input in block_text_strategy()) {
            let handler = BlockTextHandler::new();
            let config = ParseConfig::default();
            let first = handler.format(&input, &config);
            let rendered = handler.render(&first, &RenderConfig::default()).unwrap();
            let second = handler.format(&rendered, &config);
            prop_assert_eq!(kinds(&first), kinds(&second));
        }

        // Property: block order follows the source and no block is empty text
        #[test]
        fn prop_block_count_bounded(input in block_text_strategy()) {
            let markup = BlockTextHandler::new().format(&input, &ParseConfig::default());
            prop_assert!(!markup.blocks.is_empty());
            prop_assert!(markup.blocks.len() <= input.split("\n\n").count().max(1));
        }

        // Property: heading levels stay in 1-6
        #[test]
        fn prop_heading_levels_in_range(input in "#{1,12}[a-z ]{0,10}") {
            let markup = BlockTextHandler::new().format(&input, &ParseConfig::default());
            for block in &markup.blocks {
                if let Block::Heading { level, .. } = block {
                    prop_assert!((1..=6).contains(level));
                }
            }
        }
    }
}
