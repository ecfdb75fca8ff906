//! Status text configuration.
//!
//! Holds the two settings the renderer needs from its host: the format
//! template and the message shown for uncommitted lines. Values can be built
//! in code or loaded from TOML:
//!
//! ```toml
//! message_format = "${commit.hash_short} ${author.name} (${time.ago})"
//! no_commit_message = "Not Committed Yet"
//! ```

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use tracing::warn;

use crate::status::render_commit_text_at;
use crate::types::CommitRecord;

/// Format used when no other is configured.
pub const DEFAULT_MESSAGE_FORMAT: &str = "Blame ${author.name} (${time.ago})";

/// Message shown for lines without a commit when none is configured.
pub const DEFAULT_NO_COMMIT_MESSAGE: &str = "Not Committed Yet";

/// Errors that occur while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error when reading the configuration.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has fields of the wrong shape.
    #[error("{path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Settings for rendering status text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Template with `${...}` tokens. `None` renders as an empty string.
    #[serde(deserialize_with = "string_or_none")]
    pub message_format: Option<String>,

    /// Shown instead of the template for uncommitted lines.
    pub no_commit_message: Option<String>,
}

impl Default for StatusConfig {
    fn default() -> Self {
        StatusConfig {
            message_format: Some(DEFAULT_MESSAGE_FORMAT.to_string()),
            no_commit_message: Some(DEFAULT_NO_COMMIT_MESSAGE.to_string()),
        }
    }
}

impl StatusConfig {
    /// Parse a configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<StatusConfig, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<StatusConfig, ConfigError> {
        let text = read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Render status text for `commit` at the current time.
    pub fn render(&self, commit: &CommitRecord) -> String {
        self.render_at(commit, Utc::now())
    }

    /// Render status text for `commit` as seen at `now`.
    pub fn render_at(&self, commit: &CommitRecord, now: DateTime<Utc>) -> String {
        render_commit_text_at(
            commit,
            self.message_format.as_deref(),
            self.no_commit_message.as_deref(),
            now,
        )
    }
}

/// Accept a string, and map any other TOML value to `None`.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match toml::Value::deserialize(deserializer)? {
        toml::Value::String(text) => Ok(Some(text)),
        other => {
            warn!(kind = other.type_str(), "message_format is not a string, ignoring it");
            Ok(None)
        }
    }
}
