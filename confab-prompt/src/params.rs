//! Derivation of transport-ready API parameters.
//!
//! The single source of truth for translating a [`PresetConfig`] into the
//! parameter map attached to a model request. The five core knobs are always
//! present, filled from the configured defaults when the preset leaves them
//! unset; optional knobs appear only when the preset defines them, so no
//! null keys ever leak into the request.

use serde_json::{Map, Value, json};

use confab_core::config::SamplingDefaults;
use confab_core::preset::{PresetConfig, ResponseFormat};

/// Parameter map for a request with a bound preset.
#[must_use]
pub fn from_preset(preset: &PresetConfig, fallback: &SamplingDefaults) -> Map<String, Value> {
    let mut params = Map::new();
    params.insert(
        "temperature".to_string(),
        json!(preset.temperature.unwrap_or(fallback.temperature)),
    );
    params.insert(
        "max_tokens".to_string(),
        json!(preset.max_tokens.unwrap_or(fallback.max_tokens)),
    );
    params.insert(
        "top_p".to_string(),
        json!(preset.top_p.unwrap_or(fallback.top_p)),
    );
    params.insert(
        "frequency_penalty".to_string(),
        json!(preset.frequency_penalty.unwrap_or(fallback.frequency_penalty)),
    );
    params.insert(
        "presence_penalty".to_string(),
        json!(preset.presence_penalty.unwrap_or(fallback.presence_penalty)),
    );

    if let Some(top_k) = preset.top_k {
        params.insert("top_k".to_string(), json!(top_k));
    }
    if let Some(stop) = &preset.stop_sequences {
        params.insert("stop".to_string(), json!(stop));
    }
    if let Some(bias) = &preset.logit_bias {
        params.insert("logit_bias".to_string(), json!(bias));
    }
    if let Some(format) = preset.response_format {
        let tag = match format {
            ResponseFormat::Text => "text",
            ResponseFormat::JsonObject => "json_object",
        };
        params.insert("response_format".to_string(), json!({ "type": tag }));
    }
    if let Some(seed) = preset.seed {
        params.insert("seed".to_string(), json!(seed));
    }
    if let Some(user) = &preset.user {
        params.insert("user".to_string(), json!(user));
    }

    params
}

/// Parameter map for a request with no preset bound.
#[must_use]
pub fn defaults(fallback: &SamplingDefaults) -> Map<String, Value> {
    let mut params = Map::new();
    params.insert("temperature".to_string(), json!(fallback.temperature));
    params.insert("max_tokens".to_string(), json!(fallback.max_tokens));
    params.insert("top_p".to_string(), json!(fallback.top_p));
    params.insert(
        "frequency_penalty".to_string(),
        json!(fallback.frequency_penalty),
    );
    params.insert(
        "presence_penalty".to_string(),
        json!(fallback.presence_penalty),
    );
    params
}
