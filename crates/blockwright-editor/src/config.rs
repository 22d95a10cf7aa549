// SPDX-License-Identifier: AGPL-3.0-or-later
//! Editor configuration, read from TOML
//!
//! ```toml
//! [autosave]
//! debounce_ms = 2000
//! interval_ms = 30000
//! draft_max_age_hours = 24
//!
//! [remote]
//! token = "secret_..."
//! [remote.database_ids]
//! "Blog Posts" = "1f2e..."
//!
//! [dashboard]
//! chat_url = "https://example.com/dashboard/chat"
//! ```

use std::path::Path;

use anyhow::Context;
use blockwright_bridges::notion::{NotionBridge, DEFAULT_API_URL, NOTION_VERSION};
use blockwright_bridges::DatabaseIds;
use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Token value shipped in sample configuration
pub const PLACEHOLDER_TOKEN: &str = "your-notion-token-here";

/// Longest accepted debounce or periodic interval: one week
pub const MAX_INTERVAL_MS: u64 = 7 * 24 * 60 * 60 * 1000;
/// Longest accepted draft age: ten years
pub const MAX_DRAFT_AGE_HOURS: u64 = 10 * 365 * 24;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub autosave: AutosaveConfig,
    pub remote: Option<RemoteConfig>,
    pub dashboard: DashboardConfig,
}

impl EditorConfig {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.autosave.validate()?;
        Ok(config)
    }

    /// The remote section, when it carries a real token
    pub fn configured_remote(&self) -> Option<&RemoteConfig> {
        self.remote.as_ref().filter(|r| r.is_configured())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutosaveConfig {
    pub debounce_ms: u64,
    pub interval_ms: u64,
    pub draft_max_age_hours: u64,
}

impl AutosaveConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, ms) in [
            ("debounce_ms", self.debounce_ms),
            ("interval_ms", self.interval_ms),
        ] {
            if ms == 0 || ms > MAX_INTERVAL_MS {
                anyhow::bail!("autosave.{name} must be between 1 and {MAX_INTERVAL_MS}, got {ms}");
            }
        }
        if self.draft_max_age_hours > MAX_DRAFT_AGE_HOURS {
            anyhow::bail!(
                "autosave.draft_max_age_hours must be at most {MAX_DRAFT_AGE_HOURS}, got {}",
                self.draft_max_age_hours
            );
        }
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        millis(self.debounce_ms)
    }

    pub fn interval(&self) -> Duration {
        millis(self.interval_ms)
    }

    pub fn draft_max_age(&self) -> Duration {
        i64::try_from(self.draft_max_age_hours)
            .ok()
            .and_then(Duration::try_hours)
            .unwrap_or(Duration::MAX)
    }
}

fn millis(ms: u64) -> Duration {
    i64::try_from(ms)
        .ok()
        .and_then(Duration::try_milliseconds)
        .unwrap_or(Duration::MAX)
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 2000,
            interval_ms: 30_000,
            draft_max_age_hours: 24,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub api_url: String,
    pub token: String,
    pub notion_version: String,
    pub database_ids: DatabaseIds,
}

impl RemoteConfig {
    pub fn is_configured(&self) -> bool {
        let token = self.token.trim();
        !token.is_empty() && token != PLACEHOLDER_TOKEN
    }

    pub fn bridge(&self) -> blockwright_bridges::Result<NotionBridge> {
        Ok(NotionBridge::new(self.token.trim(), self.database_ids.clone())?
            .with_api_url(self.api_url.as_str())
            .with_notion_version(self.notion_version.as_str()))
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: PLACEHOLDER_TOKEN.to_string(),
            notion_version: NOTION_VERSION.to_string(),
            database_ids: DatabaseIds::with_placeholders(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub chat_url: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            chat_url: "https://threadcommand.center/dashboard/chat".to_string(),
        }
    }
}
