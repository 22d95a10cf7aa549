// SPDX-License-Identifier: AGPL-3.0-or-later
//! Block-structured AST produced by the text formatter
//!
//! The AST is deliberately small: it covers exactly the structures the block
//! formatter recognises, so every renderer can match it exhaustively.

use serde::{Deserialize, Serialize};

/// Placeholder shown when there is no content to render
pub const EMPTY_PLACEHOLDER: &str = "No content yet...";

/// Formatted output: an ordered sequence of blocks, top to bottom
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markup {
    pub blocks: Vec<Block>,
    /// Preserved raw source (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_source: Option<String>,
}

impl Markup {
    /// Create markup from a list of blocks
    pub fn new(blocks: Vec<Block>) -> Self {
        Self {
            blocks,
            raw_source: None,
        }
    }

    /// True when the formatter found nothing but the empty placeholder
    pub fn is_placeholder(&self) -> bool {
        matches!(self.blocks.as_slice(), [Block::Placeholder])
    }
}

/// Block-level elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Heading with level 1-6
    Heading { level: u8, content: Vec<Inline> },

    /// Ordered or unordered list
    List { kind: ListKind, items: Vec<ListItem> },

    /// Quotation; line breaks inside the quote are preserved
    BlockQuote { content: Vec<Inline> },

    /// Plain paragraph
    Paragraph { content: Vec<Inline> },

    /// Stand-in for a document without content
    Placeholder,
}

impl Block {
    /// Short classification name, stable across renderers
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::List {
                kind: ListKind::Bullet,
                ..
            } => "bullet_list",
            Block::List {
                kind: ListKind::Ordered,
                ..
            } => "ordered_list",
            Block::BlockQuote { .. } => "blockquote",
            Block::Paragraph { .. } => "paragraph",
            Block::Placeholder => "placeholder",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Bullet,
    Ordered,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub content: Vec<Inline>,
}

impl ListItem {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: vec![Inline::Text {
                content: content.into(),
            }],
        }
    }

    /// Concatenated plain text of the item
    pub fn plain_text(&self) -> String {
        inline_plain_text(&self.content)
    }
}

/// Inline elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Inline {
    /// Plain text
    Text { content: String },

    /// Line break (hard break)
    LineBreak,

    /// Soft break (source newline that carries no structure)
    SoftBreak,
}

/// Flatten inlines to text, breaks become newlines
pub fn inline_plain_text(inlines: &[Inline]) -> String {
    let mut out = String::new();
    for inline in inlines {
        match inline {
            Inline::Text { content } => out.push_str(content),
            Inline::LineBreak | Inline::SoftBreak => out.push('\n'),
        }
    }
    out
}

/// Split text on single newlines into text runs joined by `brk`
pub(crate) fn lines_to_inlines(text: &str, brk: Inline) -> Vec<Inline> {
    let mut out = Vec::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push(brk.clone());
        }
        if !line.is_empty() {
            out.push(Inline::Text {
                content: line.to_string(),
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_to_inlines() {
        let inlines = lines_to_inlines("a\nb", Inline::LineBreak);
        assert_eq!(
            inlines,
            vec![
                Inline::Text {
                    content: "a".to_string()
                },
                Inline::LineBreak,
                Inline::Text {
                    content: "b".to_string()
                },
            ]
        );
        assert_eq!(inline_plain_text(&inlines), "a\nb");
    }

    #[test]
    fn test_placeholder_detection() {
        let markup = Markup::new(vec![Block::Placeholder]);
        assert!(markup.is_placeholder());
        assert_eq!(markup.blocks[0].kind_name(), "placeholder");
    }

    #[test]
    fn test_block_serde_tagging() {
        let block = Block::Paragraph {
            content: vec![Inline::LineBreak],
        };
        let json = serde_json::to_string(&block).unwrap();
        assert!(json.contains("\"type\":\"paragraph\""));
        let back: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(back, block);
    }
}
