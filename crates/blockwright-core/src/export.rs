// SPDX-License-Identifier: AGPL-3.0-or-later
//! Export generation
//!
//! Three serializations of a [`Document`]: plain text and Markdown carry the
//! raw body untouched, HTML wraps the formatted body in a standalone page.

use serde::{Deserialize, Serialize};

use crate::document::{Document, Status};
use crate::formats::{escape_html, format_html};
use crate::templates::Category;
use crate::traits::ConversionError;

/// Width of the separator rule in plain-text exports
pub const RULE_WIDTH: usize = 50;

/// Filename stem used when the title is blank
pub const FALLBACK_STEM: &str = "document";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("No content to export")]
    EmptyContent,

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("Malformed export: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, ExportError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Html,
    Markdown,
    #[serde(rename = "text")]
    PlainText,
}

impl ExportFormat {
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Markdown => "md",
            Self::PlainText => "txt",
        }
    }

    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Html => "text/html",
            Self::Markdown => "text/markdown",
            Self::PlainText => "text/plain",
        }
    }

    /// Short display name
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::Markdown => "MARKDOWN",
            Self::PlainText => "TEXT",
        }
    }

    pub const ALL: [Self; 3] = [Self::Html, Self::Markdown, Self::PlainText];
}

/// A generated file, ready for an export sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: String,
    pub mime_type: &'static str,
    pub content: String,
}

/// Serialize `doc` in `format`; a blank body is rejected
pub fn export(doc: &Document, format: ExportFormat) -> Result<ExportArtifact> {
    if doc.body.trim().is_empty() {
        return Err(ExportError::EmptyContent);
    }

    let content = match format {
        ExportFormat::PlainText => plain_text(doc),
        ExportFormat::Markdown => markdown(doc),
        ExportFormat::Html => html(doc)?,
    };

    Ok(ExportArtifact {
        filename: filename(&doc.title, format),
        mime_type: format.mime_type(),
        content,
    })
}

/// `<title>.<ext>`, with characters that break file paths replaced
pub fn filename(title: &str, format: ExportFormat) -> String {
    let stem: String = title
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect();
    let stem = if stem.is_empty() { FALLBACK_STEM } else { &stem };
    format!("{stem}.{}", format.extension())
}

pub fn plain_text(doc: &Document) -> String {
    format!(
        "{title}\n\n\
         Character: {character}\n\
         Brand Voice: {brand_voice}\n\
         Template Type: {category}\n\
         Status: {status}\n\
         Word Count: {words} words\n\
         Reading Time: {minutes} minutes\n\n\
         {rule}\n\n\
         {body}",
        title = doc.title,
        character = doc.character,
        brand_voice = doc.brand_voice,
        category = doc.category_label(),
        status = doc.status,
        words = doc.word_count,
        minutes = doc.reading_time_minutes,
        rule = "-".repeat(RULE_WIDTH),
        body = doc.body,
    )
}

pub fn markdown(doc: &Document) -> String {
    format!(
        "# {title}\n\n\
         **Character:** {character}  \n\
         **Brand Voice:** {brand_voice}  \n\
         **Template Type:** {category}  \n\
         **Status:** {status}  \n\
         **Word Count:** {words} words  \n\
         **Reading Time:** {minutes} minutes  \n\n\
         ---\n\n\
         {body}",
        title = doc.title,
        character = doc.character,
        brand_voice = doc.brand_voice,
        category = doc.category_label(),
        status = doc.status,
        words = doc.word_count,
        minutes = doc.reading_time_minutes,
        body = doc.body,
    )
}

const HTML_STYLE: &str = "        body { font-family: -apple-system, BlinkMacSystemFont, sans-serif; line-height: 1.6; max-width: 800px; margin: 0 auto; padding: 40px 20px; }
        .meta { background: #f5f5f5; padding: 20px; border-radius: 8px; margin-bottom: 30px; }
        .meta p { margin: 5px 0; }
        h1, h2, h3, h4, h5, h6 { margin-top: 30px; margin-bottom: 15px; }
        p { margin-bottom: 15px; }
        ul, ol { margin-bottom: 15px; padding-left: 30px; }
        blockquote { border-left: 4px solid #667eea; margin: 20px 0; padding: 10px 20px; background: #f8f9fa; }";

pub fn html(doc: &Document) -> Result<String> {
    let body = format_html(&doc.body)?;
    let title = escape_html(&doc.title);
    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{style}
    </style>
</head>
<body>
    <div class="meta">
        <p><strong>Character:</strong> {character}</p>
        <p><strong>Brand Voice:</strong> {brand_voice}</p>
        <p><strong>Template Type:</strong> {category}</p>
        <p><strong>Status:</strong> {status}</p>
        <p><strong>Word Count:</strong> {words} words</p>
        <p><strong>Reading Time:</strong> {minutes} minutes</p>
    </div>
    <h1>{title}</h1>
    {body}
</body>
</html>"#,
        style = HTML_STYLE,
        character = escape_html(&doc.character),
        brand_voice = escape_html(&doc.brand_voice),
        category = doc.category_label(),
        status = doc.status,
        words = doc.word_count,
        minutes = doc.reading_time_minutes,
    ))
}

/// Metadata recovered from a plain-text export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportMetadata {
    pub title: String,
    pub character: String,
    pub brand_voice: String,
    pub category: Option<Category>,
    pub status: Status,
    pub word_count: usize,
    pub reading_time_minutes: usize,
}

impl ExportMetadata {
    /// Read back the header written by [`plain_text`]
    pub fn from_plain_text(content: &str) -> Result<Self> {
        let mut lines = content.lines();
        let title = lines
            .next()
            .ok_or_else(|| ExportError::Malformed("missing title".to_string()))?
            .to_string();

        let mut field = |prefix: &str| -> Result<String> {
            lines
                .by_ref()
                .find(|line| line.starts_with(prefix))
                .map(|line| line[prefix.len()..].to_string())
                .ok_or_else(|| ExportError::Malformed(format!("missing `{}` line", prefix.trim())))
        };

        let character = field("Character: ")?;
        let brand_voice = field("Brand Voice: ")?;
        let category = field("Template Type: ")?;
        let status = field("Status: ")?;
        let words = field("Word Count: ")?;
        let minutes = field("Reading Time: ")?;

        let category = match category.trim() {
            "" => None,
            label => Some(
                label
                    .parse::<Category>()
                    .map_err(|e| ExportError::Malformed(e.to_string()))?,
            ),
        };

        Ok(Self {
            title,
            character,
            brand_voice,
            category,
            status: status
                .parse::<Status>()
                .map_err(|e| ExportError::Malformed(e.to_string()))?,
            word_count: leading_number(&words)?,
            reading_time_minutes: leading_number(&minutes)?,
        })
    }
}

fn leading_number(text: &str) -> Result<usize> {
    text.split_whitespace()
        .next()
        .and_then(|n| n.parse().ok())
        .ok_or_else(|| ExportError::Malformed(format!("expected a number in `{text}`")))
}
