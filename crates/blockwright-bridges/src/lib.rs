// SPDX-License-Identifier: AGPL-3.0-or-later
//! Blockwright Bridges - Remote persistence for finished documents
//!
//! Provides:
//! - The [`RemoteStore`] trait the editor saves through
//! - The category to database-id table
//! - A Notion REST bridge (feature `notion`)

#[cfg(feature = "notion")]
pub mod notion;

#[cfg(feature = "notion")]
pub use notion::NotionBridge;

use std::collections::HashMap;

use async_trait::async_trait;
use blockwright_core::model::describe_issues;
use blockwright_core::{Category, Document, ValidationIssue};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("{}", describe_issues(.0))]
    Validation(Vec<ValidationIssue>),

    #[error("Database ID not configured for {0}")]
    MissingDatabaseId(Category),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Remote API error ({status}): {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, BridgeError>;

/// A record created by a remote store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRecord {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// A hosted database that accepts finished documents
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Bridge name for logs
    fn name(&self) -> &'static str;

    /// Create one record for `doc`
    ///
    /// Implementations validate before any network traffic and never retry.
    async fn create_record(&self, doc: &Document) -> Result<RemoteRecord>;
}

/// Which database each category's documents go to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatabaseIds(HashMap<Category, String>);

impl DatabaseIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every category mapped to its unfilled placeholder id
    pub fn with_placeholders() -> Self {
        Self(
            Category::ALL
                .into_iter()
                .map(|c| (c, Self::placeholder(c)))
                .collect(),
        )
    }

    /// The id shipped in sample configuration, e.g. `your-blog-posts-db-id`
    pub fn placeholder(category: Category) -> String {
        format!("your-{}-db-id", category.slug())
    }

    pub fn insert(&mut self, category: Category, id: impl Into<String>) {
        self.0.insert(category, id.into());
    }

    /// The configured id; empty and placeholder ids count as missing
    pub fn lookup(&self, category: Category) -> Result<&str> {
        match self.0.get(&category).map(|id| id.trim()) {
            Some(id) if !id.is_empty() && id != Self::placeholder(category) => Ok(id),
            _ => Err(BridgeError::MissingDatabaseId(category)),
        }
    }
}

/// Validation shared by every bridge
pub fn ensure_persistable(doc: &Document) -> Result<Category> {
    let issues = blockwright_core::model::validate(doc);
    if !issues.is_empty() {
        return Err(BridgeError::Validation(issues));
    }
    doc.category
        .ok_or(BridgeError::Validation(vec![ValidationIssue::MissingCategory]))
}
