// SPDX-License-Identifier: AGPL-3.0-or-later
//! Notion bridge
//!
//! Creates one page per saved document in the category's database via
//! `POST /v1/pages`. Property names match the database template the
//! editor has always targeted.

use std::time::Duration;

use async_trait::async_trait;
use blockwright_core::Document;
use serde_json::{json, Value};

use crate::{ensure_persistable, BridgeError, DatabaseIds, RemoteRecord, RemoteStore, Result};

pub const DEFAULT_API_URL: &str = "https://api.notion.com";
pub const NOTION_VERSION: &str = "2022-06-28";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct NotionBridge {
    client: reqwest::Client,
    api_url: String,
    token: String,
    notion_version: String,
    database_ids: DatabaseIds,
}

impl NotionBridge {
    pub fn new(token: impl Into<String>, database_ids: DatabaseIds) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            api_url: DEFAULT_API_URL.to_string(),
            token: token.into(),
            notion_version: NOTION_VERSION.to_string(),
            database_ids,
        })
    }

    /// Point at another host (tests, proxies)
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_notion_version(mut self, version: impl Into<String>) -> Self {
        self.notion_version = version.into();
        self
    }

    fn pages_url(&self) -> String {
        format!("{}/v1/pages", self.api_url)
    }
}

/// JSON body for creating `doc` as a page in `database_id`
pub fn build_create_page_request(doc: &Document, database_id: &str) -> Value {
    json!({
        "parent": { "database_id": database_id },
        "properties": {
            "Title": { "title": [text(&doc.title)] },
            "Character Profile": { "select": { "name": doc.character } },
            "Brand Voice Style": { "select": { "name": doc.brand_voice } },
            "Template Type": { "select": { "name": doc.category_label() } },
            "Label": { "rich_text": [text(&doc.label)] },
            "Content": { "rich_text": [text(&doc.body)] },
            "Prompt/Description": { "rich_text": [text(&doc.prompt)] },
            "Status": { "select": { "name": doc.status.label() } },
        }
    })
}

fn text(content: &str) -> Value {
    json!({ "text": { "content": content } })
}

#[async_trait]
impl RemoteStore for NotionBridge {
    fn name(&self) -> &'static str {
        "notion"
    }

    async fn create_record(&self, doc: &Document) -> Result<RemoteRecord> {
        let category = ensure_persistable(doc)?;
        let database_id = self.database_ids.lookup(category)?;
        let body = build_create_page_request(doc, database_id);

        tracing::debug!(%category, database_id, "creating notion page");
        let response = self
            .client
            .post(self.pages_url())
            .bearer_auth(&self.token)
            .header("Notion-Version", &self.notion_version)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|v| v.get("message")?.as_str().map(str::to_string))
                .unwrap_or_else(|| "Unknown error".to_string());
            tracing::warn!(status = status.as_u16(), %message, "notion rejected page");
            return Err(BridgeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let record: RemoteRecord = response.json().await?;
        tracing::info!(id = %record.id, "notion page created");
        Ok(record)
    }
}
