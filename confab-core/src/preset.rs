//! Sampling presets: named bundles of model parameters.
//!
//! Presets are created and edited by a separate management surface; the
//! prompt pipeline only ever reads them. Every knob is optional so a preset
//! can pin just the parameters it cares about and leave the rest to the
//! configured defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::PresetId;

/// Output format constraint requested from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Free-form text.
    Text,
    /// A single JSON object.
    JsonObject,
}

/// A named bundle of sampling parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresetConfig {
    /// Preset id.
    pub id: PresetId,
    /// Human-readable preset name.
    pub name: String,
    /// What this preset is for.
    #[serde(default)]
    pub description: String,
    /// Sampling temperature.
    #[serde(default)]
    pub temperature: Option<f32>,
    /// Maximum tokens to generate.
    #[serde(default)]
    pub max_tokens: Option<u32>,
    /// Nucleus sampling cutoff.
    #[serde(default)]
    pub top_p: Option<f32>,
    /// Top-k sampling cutoff.
    #[serde(default)]
    pub top_k: Option<u32>,
    /// Frequency penalty.
    #[serde(default)]
    pub frequency_penalty: Option<f32>,
    /// Presence penalty.
    #[serde(default)]
    pub presence_penalty: Option<f32>,
    /// Sequences that stop generation.
    #[serde(default)]
    pub stop_sequences: Option<Vec<String>>,
    /// Per-token logit biases, keyed by token id.
    #[serde(default)]
    pub logit_bias: Option<BTreeMap<String, f64>>,
    /// Output format constraint.
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
    /// Sampling seed for reproducible output.
    #[serde(default)]
    pub seed: Option<u64>,
    /// End-user identifier forwarded to the provider.
    #[serde(default)]
    pub user: Option<String>,
}

impl PresetConfig {
    /// Create an empty preset with a fresh id and the given name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: PresetId::new(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the sampling temperature.
    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the generation cap.
    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the nucleus sampling cutoff.
    #[must_use]
    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    /// Set the stop sequences.
    #[must_use]
    pub fn with_stop_sequences(mut self, stop: Vec<String>) -> Self {
        self.stop_sequences = Some(stop);
        self
    }
}
