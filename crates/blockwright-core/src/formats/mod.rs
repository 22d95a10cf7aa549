// SPDX-License-Identifier: AGPL-3.0-or-later
//! Format handlers

pub mod blocktext;
pub mod html;

pub use blocktext::BlockTextHandler;
pub use html::{escape_html, HtmlRenderer};

use crate::traits::{ParseConfig, RenderConfig, Renderer, Result};

/// Format block text as an HTML fragment
///
/// Preview and HTML export both go through here so they can never disagree.
pub fn format_html(text: &str) -> Result<String> {
    let markup = BlockTextHandler::new().format(text, &ParseConfig::default());
    HtmlRenderer::new().render(&markup, &RenderConfig::default())
}
