//! Configuration for the prompt pipeline.
//!
//! Maps directly to `confab.toml`. Every threshold the pipeline relies on
//! lives here rather than in ambient global state, so a build is a pure
//! function of its context plus one config value.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Top-level pipeline configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptConfig {
    /// History payload slicing.
    #[serde(default)]
    pub history: HistoryConfig,
    /// Cross-context memory excerpts.
    #[serde(default)]
    pub memory: MemoryWindowConfig,
    /// Live-status freshness policy.
    #[serde(default)]
    pub status: StatusConfig,
    /// Advisory prompt-validation bounds.
    #[serde(default)]
    pub validation: ValidationConfig,
    /// Fallback sampling bundle used when no preset is bound.
    #[serde(default)]
    pub sampling: SamplingDefaults,
}

impl PromptConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `CoreError::Config` if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> crate::error::Result<Self> {
        toml::from_str(toml_str).map_err(|e| crate::CoreError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

/// How much transcript goes into the rolling message payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Number of most recent messages included in the payload.
    #[serde(default = "default_max_messages")]
    pub max_messages: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { max_messages: 20 }
    }
}

/// How much of a linked chat's history feeds cross-context memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryWindowConfig {
    /// Messages excerpted per linked chat.
    #[serde(default = "default_excerpt_messages")]
    pub excerpt_messages: usize,
}

impl Default for MemoryWindowConfig {
    fn default() -> Self {
        Self {
            excerpt_messages: 5,
        }
    }
}

/// When a live status is considered stale enough to demand a refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusConfig {
    /// Minutes after which a status update is demanded.
    #[serde(default = "default_stale_after_minutes")]
    pub stale_after_minutes: i64,
    /// Conversations at or below this many messages always demand a
    /// status update, regardless of freshness.
    #[serde(default = "default_sparse_history_threshold")]
    pub sparse_history_threshold: usize,
}

impl StatusConfig {
    /// The staleness threshold as a duration.
    #[must_use]
    pub fn stale_after(&self) -> Duration {
        Duration::minutes(self.stale_after_minutes)
    }
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            stale_after_minutes: 30,
            sparse_history_threshold: 1,
        }
    }
}

/// Advisory bounds for the prompt validator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Prompts shorter than this are flagged as suspicious.
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,
    /// Prompts longer than this are flagged as suspicious.
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_chars: 100,
            max_chars: 10_000,
        }
    }
}

/// Fixed sampling bundle applied when no preset is bound to the chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingDefaults {
    /// Default sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Default generation cap.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Default nucleus sampling cutoff.
    #[serde(default = "default_top_p")]
    pub top_p: f32,
    /// Default frequency penalty.
    #[serde(default)]
    pub frequency_penalty: f32,
    /// Default presence penalty.
    #[serde(default)]
    pub presence_penalty: f32,
}

impl Default for SamplingDefaults {
    fn default() -> Self {
        Self {
            temperature: 0.8,
            max_tokens: 2000,
            top_p: 0.8,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_max_messages() -> usize {
    20
}
fn default_excerpt_messages() -> usize {
    5
}
fn default_stale_after_minutes() -> i64 {
    30
}
fn default_sparse_history_threshold() -> usize {
    1
}
fn default_min_chars() -> usize {
    100
}
fn default_max_chars() -> usize {
    10_000
}
fn default_temperature() -> f32 {
    0.8
}
fn default_max_tokens() -> u32 {
    2000
}
fn default_top_p() -> f32 {
    0.8
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_documented_thresholds() {
        let config = PromptConfig::default();
        assert_eq!(config.history.max_messages, 20);
        assert_eq!(config.memory.excerpt_messages, 5);
        assert_eq!(config.status.stale_after_minutes, 30);
        assert_eq!(config.validation.min_chars, 100);
        assert_eq!(config.validation.max_chars, 10_000);
        assert!((config.sampling.temperature - 0.8).abs() < f32::EPSILON);
        assert_eq!(config.sampling.max_tokens, 2000);
    }

    #[test]
    fn partial_toml_fills_remaining_defaults() {
        let config = PromptConfig::from_toml(
            r"
            [history]
            max_messages = 40

            [status]
            stale_after_minutes = 10
            ",
        )
        .expect("parse");

        assert_eq!(config.history.max_messages, 40);
        assert_eq!(config.status.stale_after_minutes, 10);
        assert_eq!(config.status.sparse_history_threshold, 1);
        assert_eq!(config.memory.excerpt_messages, 5);
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let result = PromptConfig::from_toml("[history\nmax_messages = ");
        assert!(matches!(result, Err(crate::CoreError::Config(_))));
    }

    #[test]
    fn config_file_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("confab.toml");
        let mut file = std::fs::File::create(&path).expect("create");
        writeln!(file, "[memory]\nexcerpt_messages = 8").expect("write");

        let config = PromptConfig::from_file(&path).expect("load");
        assert_eq!(config.memory.excerpt_messages, 8);
        assert_eq!(config.history.max_messages, 20);
    }

    #[test]
    fn stale_after_is_a_duration() {
        let status = StatusConfig::default();
        assert_eq!(status.stale_after(), Duration::minutes(30));
    }
}
