// SPDX-License-Identifier: AGPL-3.0-or-later
//! The document record being edited

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::metrics::Metrics;
use crate::templates::Category;

/// Editorial status of a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[default]
    #[serde(rename = "Not started")]
    NotStarted,
    #[serde(rename = "In progress")]
    InProgress,
    #[serde(rename = "Ready")]
    Ready,
    #[serde(rename = "Published")]
    Published,
    #[serde(rename = "Archived")]
    Archived,
}

impl Status {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not started",
            Self::InProgress => "In progress",
            Self::Ready => "Ready",
            Self::Published => "Published",
            Self::Archived => "Archived",
        }
    }

    pub const ALL: [Self; 5] = [
        Self::NotStarted,
        Self::InProgress,
        Self::Ready,
        Self::Published,
        Self::Archived,
    ];
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// The document record
///
/// Serialized with the field names drafts have always used, so older drafts
/// keep loading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    pub title: String,
    #[serde(rename = "content")]
    pub body: String,
    pub character: String,
    pub brand_voice: String,
    #[serde(
        rename = "templateType",
        deserialize_with = "deserialize_category",
        serialize_with = "serialize_category"
    )]
    pub category: Option<Category>,
    pub label: String,
    pub prompt: String,
    pub status: Status,
    pub last_modified: Option<DateTime<Utc>>,
    pub word_count: usize,
    #[serde(rename = "readingTime")]
    pub reading_time_minutes: usize,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Metrics derived from the body
    pub fn metrics(&self) -> Metrics {
        Metrics::of(&self.body)
    }

    /// Category label, or an empty string when none is selected
    pub fn category_label(&self) -> &'static str {
        self.category.map(|c| c.label()).unwrap_or("")
    }
}

// Drafts store "no category" as an empty string.
fn serialize_category<S>(category: &Option<Category>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match category {
        Some(c) => c.serialize(serializer),
        None => serializer.serialize_str(""),
    }
}

fn deserialize_category<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(label) => label
            .parse::<Category>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Writable document fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Body,
    Category,
    Character,
    BrandVoice,
    Label,
    Prompt,
    Status,
}

impl Field {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Body => "body",
            Self::Category => "category",
            Self::Character => "character",
            Self::BrandVoice => "brand voice",
            Self::Label => "label",
            Self::Prompt => "prompt",
            Self::Status => "status",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_status() {
        assert_eq!(Document::new().status, Status::NotStarted);
    }

    #[test]
    fn test_draft_json_shape() {
        let doc = Document {
            title: "T".to_string(),
            body: "hello".to_string(),
            category: Some(Category::Newsletter),
            word_count: 1,
            reading_time_minutes: 1,
            ..Document::default()
        };
        let json: serde_json::Value = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["content"], "hello");
        assert_eq!(json["templateType"], "Newsletter");
        assert_eq!(json["brandVoice"], "");
        assert_eq!(json["status"], "Not started");
        assert_eq!(json["readingTime"], 1);
        assert_eq!(json["lastModified"], serde_json::Value::Null);
    }

    #[test]
    fn test_empty_category_round_trip() {
        let json = serde_json::to_string(&Document::new()).unwrap();
        assert!(json.contains("\"templateType\":\"\""));
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back.category, None);
    }

    #[test]
    fn test_partial_draft_fills_defaults() {
        let doc: Document =
            serde_json::from_str(r#"{"title":"Old","content":"a b","templateType":"Blog Posts"}"#)
                .unwrap();
        assert_eq!(doc.title, "Old");
        assert_eq!(doc.category, Some(Category::BlogPosts));
        assert_eq!(doc.status, Status::NotStarted);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("in progress".parse::<Status>().unwrap(), Status::InProgress);
        assert!("Shipped".parse::<Status>().is_err());
    }
}
