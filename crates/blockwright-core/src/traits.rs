// SPDX-License-Identifier: AGPL-3.0-or-later
//! Parser and Renderer traits for format handlers

use crate::ast::{Markup, EMPTY_PLACEHOLDER};
use std::io::Write;

/// Error type for parsing and rendering
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Heading level {level} is outside 1-6 in {format}")]
    InvalidHeadingLevel { format: &'static str, level: u8 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;

/// Configuration for parsing
#[derive(Debug, Clone)]
pub struct ParseConfig {
    /// Keep raw source alongside the parsed blocks
    pub preserve_raw_source: bool,
    /// Deepest heading level; longer `#` runs are capped to it
    pub max_heading_level: u8,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            preserve_raw_source: false,
            max_heading_level: 6,
        }
    }
}

/// Configuration for rendering
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Text used for the empty-document placeholder
    pub placeholder: String,
    /// Escape `<`, `>`, `&` and quotes in text nodes (HTML only)
    pub escape: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            placeholder: EMPTY_PLACEHOLDER.to_string(),
            escape: true,
        }
    }
}

/// Parser trait: convert source text to markup
pub trait Parser: Send + Sync {
    /// Short name of the source format
    fn name(&self) -> &'static str;

    /// Parse a string into markup
    fn parse(&self, input: &str, config: &ParseConfig) -> Result<Markup>;
}

/// Renderer trait: convert markup to a target format
pub trait Renderer: Send + Sync {
    /// Short name of the target format
    fn name(&self) -> &'static str;

    /// Render markup to a string
    fn render(&self, markup: &Markup, config: &RenderConfig) -> Result<String>;
}

/// Extension trait for streaming operations (not dyn-compatible)
pub trait RendererExt: Renderer {
    /// Render to a writer
    fn render_writer<W: Write>(
        &self,
        markup: &Markup,
        writer: &mut W,
        config: &RenderConfig,
    ) -> Result<()> {
        let output = self.render(markup, config)?;
        writer.write_all(output.as_bytes())?;
        Ok(())
    }
}

impl<T: Renderer> RendererExt for T {}
