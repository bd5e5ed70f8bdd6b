//! Preset injector: describes the bound preset's sampling behavior.
//!
//! Besides its prompt addendum, this injector's concern owns API parameter
//! derivation: [`PresetInjector::api_params`] is the method the manager
//! delegates to when a preset is bound (it forwards to [`crate::params`]).

use std::fmt::Write;

use async_trait::async_trait;

use confab_core::config::SamplingDefaults;
use confab_core::preset::{PresetConfig, ResponseFormat};
use serde_json::{Map, Value};

use crate::context::PromptContext;
use crate::error::InjectError;
use crate::injector::{InjectorKind, PromptInjector, priority};
use crate::params;

/// Heading for the sampling-behavior addendum.
pub const SAMPLING_HEADING: &str = "# Sampling Behavior";

/// Describes the bound preset in qualitative terms the model can act on.
#[derive(Debug, Clone)]
pub struct PresetInjector {
    fallback: SamplingDefaults,
}

impl PresetInjector {
    /// Create the injector with the configured sampling defaults.
    #[must_use]
    pub fn new(fallback: SamplingDefaults) -> Self {
        Self { fallback }
    }

    /// Translate a preset into transport-ready request parameters.
    #[must_use]
    pub fn api_params(preset: &PresetConfig, fallback: &SamplingDefaults) -> Map<String, Value> {
        params::from_preset(preset, fallback)
    }
}

#[async_trait]
impl PromptInjector for PresetInjector {
    fn kind(&self) -> InjectorKind {
        InjectorKind::Preset
    }

    fn priority(&self) -> i32 {
        priority::PRESET
    }

    async fn inject(&self, ctx: &PromptContext) -> Result<String, InjectError> {
        let Some(preset) = &ctx.current_preset else {
            return Ok(String::new());
        };

        let temperature = preset.temperature.unwrap_or(self.fallback.temperature);
        let top_p = preset.top_p.unwrap_or(self.fallback.top_p);

        let mut block = String::from(SAMPLING_HEADING);
        let _ = write!(block, "\nPreset \"{}\"", preset.name);
        if !preset.description.is_empty() {
            let _ = write!(block, ": {}", preset.description);
        }
        let _ = write!(
            block,
            "\n- Temperature {:.2}: keep your writing {}.",
            temperature,
            temperature_label(temperature)
        );
        let _ = write!(
            block,
            "\n- Nucleus sampling {:.2}: draw on a {} vocabulary.",
            top_p,
            top_p_label(top_p)
        );
        if let Some(format) = preset.response_format {
            let note = match format {
                ResponseFormat::Text => "free-form text",
                ResponseFormat::JsonObject => "a single JSON object",
            };
            let _ = write!(block, "\n- Response format is constrained to {note}.");
        }
        if let Some(stop) = &preset.stop_sequences {
            if !stop.is_empty() {
                let quoted: Vec<String> = stop.iter().map(|s| format!("{s:?}")).collect();
                let _ = write!(
                    block,
                    "\n- Generation stops at any of: {}.",
                    quoted.join(", ")
                );
            }
        }

        Ok(block)
    }
}

/// Qualitative label for a temperature value.
#[must_use]
pub fn temperature_label(temperature: f32) -> &'static str {
    if temperature <= 0.3 {
        "conservative"
    } else if temperature <= 0.7 {
        "balanced"
    } else if temperature <= 1.1 {
        "creative"
    } else {
        "random"
    }
}

/// Qualitative label for a nucleus-sampling value.
#[must_use]
pub fn top_p_label(top_p: f32) -> &'static str {
    if top_p < 0.5 { "focused" } else { "diverse" }
}
