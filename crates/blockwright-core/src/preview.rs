// SPDX-License-Identifier: AGPL-3.0-or-later
//! Live preview panel

use crate::document::Document;
use crate::formats::{escape_html, format_html};
use crate::traits::Result;

/// Render the preview panel: heading, metadata, rule, formatted body
pub fn render_preview(doc: &Document) -> Result<String> {
    let title = or_fallback(&doc.title, "Untitled Document");
    let character = or_fallback(&doc.character, "Not selected");
    let brand_voice = or_fallback(&doc.brand_voice, "Not selected");
    let category = or_fallback(doc.category_label(), "None");

    Ok(format!(
        "<h1>{title}</h1>\
         <div class=\"preview-meta\">\
         <p><strong>Character:</strong> {character}</p>\
         <p><strong>Brand Voice:</strong> {brand_voice}</p>\
         <p><strong>Template:</strong> {category}</p>\
         <p><strong>Status:</strong> {status}</p>\
         </div>\
         <hr>\
         {body}",
        status = doc.status,
        body = format_html(&doc.body)?,
    ))
}

fn or_fallback(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        escape_html(value)
    }
}
