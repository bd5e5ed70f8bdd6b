//! The prompt manager: orchestrates templates, injectors, payload, and
//! parameter derivation into one build call.
//!
//! The build is sequential by design: injectors are awaited one at a time in
//! ascending priority order. Each one does a single cheap read lookup, so
//! parallelism would buy nothing and cost ordering headaches. A failure
//! inside any injector is logged and contained; it never aborts the build
//! and never drops another injector's contribution.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use confab_core::config::PromptConfig;
use confab_core::stores::{TransactionStore, WorldBookStore};
use std::sync::Arc;
use thiserror::Error;

use crate::context::PromptContext;
use crate::error::PromptError;
use crate::injector::{
    InjectorKind, ItemInjector, MemoryInjector, PresetInjector, PromptInjector, StatusInjector,
    WorldBookInjector,
};
use crate::params;
use crate::payload::{self, PayloadMessage};
use crate::template::{ChatTemplate, rules};

/// Everything needed to send one model request. Disposable; built fresh per
/// call and never persisted.
#[derive(Debug, Clone)]
pub struct PromptBuildResult {
    /// The assembled system prompt.
    pub system_prompt: String,
    /// The rolling message payload, oldest first, every entry role `user`.
    pub messages_payload: Vec<PayloadMessage>,
    /// Transport-ready sampling parameters.
    pub api_params: Map<String, Value>,
}

/// One advisory finding from [`PromptManager::validate_prompt`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    /// The prompt is shorter than the configured minimum.
    #[error("prompt is suspiciously short: {len} chars (min {min})")]
    TooShort {
        /// Measured length.
        len: usize,
        /// Configured minimum.
        min: usize,
    },

    /// The prompt is longer than the configured maximum.
    #[error("prompt is suspiciously long: {len} chars (max {max})")]
    TooLong {
        /// Measured length.
        len: usize,
        /// Configured maximum.
        max: usize,
    },

    /// An expected rule-section marker is missing.
    #[error("missing expected section marker: {heading}")]
    MissingSection {
        /// The heading that was not found.
        heading: &'static str,
    },
}

/// Structural sanity report. Advisory only; validation never blocks a build.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Whether no issues were found.
    pub is_valid: bool,
    /// The issues, empty when valid.
    pub errors: Vec<ValidationIssue>,
}

/// Owns the injector list and drives the build algorithm.
pub struct PromptManager {
    config: PromptConfig,
    injectors: Vec<Box<dyn PromptInjector>>,
}

impl PromptManager {
    /// Create a manager with no injectors registered.
    #[must_use]
    pub fn new(config: PromptConfig) -> Self {
        Self {
            config,
            injectors: Vec::new(),
        }
    }

    /// Create a manager with the five standard injectors registered.
    #[must_use]
    pub fn default_pipeline(
        config: PromptConfig,
        world_books: Arc<dyn WorldBookStore>,
        transactions: Arc<dyn TransactionStore>,
    ) -> Self {
        let sampling = config.sampling.clone();
        let excerpt = config.memory.excerpt_messages;
        let status = config.status.clone();
        let mut manager = Self::new(config);
        manager.add_injector(Box::new(PresetInjector::new(sampling)));
        manager.add_injector(Box::new(WorldBookInjector::new(world_books)));
        manager.add_injector(Box::new(ItemInjector::new(transactions)));
        manager.add_injector(Box::new(MemoryInjector::new(excerpt)));
        manager.add_injector(Box::new(StatusInjector::new(&status)));
        manager
    }

    /// Register an injector. The list is re-sorted by ascending priority;
    /// the sort is stable, so equal priorities keep registration order.
    pub fn add_injector(&mut self, injector: Box<dyn PromptInjector>) {
        self.injectors.push(injector);
        self.injectors.sort_by_key(|i| i.priority());
    }

    /// Remove every registered injector of the given kind.
    pub fn remove_injector(&mut self, kind: InjectorKind) {
        self.injectors.retain(|i| i.kind() != kind);
    }

    /// The kinds currently registered, in pipeline order.
    #[must_use]
    pub fn injector_kinds(&self) -> Vec<InjectorKind> {
        self.injectors.iter().map(|i| i.kind()).collect()
    }

    /// Build the system prompt, message payload, and API parameters for one
    /// request.
    ///
    /// # Errors
    ///
    /// Only a caller contract violation propagates: a group chat with an
    /// empty roster. Injector failures are contained and logged.
    pub async fn build_prompt(
        &self,
        ctx: &PromptContext,
    ) -> Result<PromptBuildResult, PromptError> {
        if ctx.chat.is_group && ctx.chat.members.is_empty() {
            return Err(PromptError::EmptyRoster(ctx.chat.name.clone()));
        }

        let template = ChatTemplate::for_context(ctx);
        let mut sections = vec![template.build(ctx)];

        for injector in &self.injectors {
            match injector.inject(ctx).await {
                Ok(addendum) if addendum.is_empty() => {}
                Ok(addendum) => {
                    debug!(injector = %injector.kind(), chars = addendum.len(), "injector contributed");
                    sections.push(addendum);
                }
                Err(e) => {
                    warn!(injector = %injector.kind(), error = %e, "injector failed; continuing without its contribution");
                }
            }
        }

        let system_prompt = sections.join("\n\n");

        let window = ctx
            .chat
            .settings
            .memory_window
            .unwrap_or(self.config.history.max_messages);
        let messages_payload = payload::build_messages_payload(&ctx.chat, window);

        let api_params = match &ctx.current_preset {
            Some(preset) => PresetInjector::api_params(preset, &self.config.sampling),
            None => params::defaults(&self.config.sampling),
        };

        Ok(PromptBuildResult {
            system_prompt,
            messages_payload,
            api_params,
        })
    }

    /// Cheap structural sanity check of an assembled prompt.
    ///
    /// Flags length outliers and missing rule-section markers. Advisory
    /// tooling for callers and tests; never blocks building.
    #[must_use]
    pub fn validate_prompt(&self, system_prompt: &str) -> ValidationReport {
        let mut errors = Vec::new();
        let len = system_prompt.chars().count();
        let bounds = &self.config.validation;

        if len < bounds.min_chars {
            errors.push(ValidationIssue::TooShort {
                len,
                min: bounds.min_chars,
            });
        }
        if len > bounds.max_chars {
            errors.push(ValidationIssue::TooLong {
                len,
                max: bounds.max_chars,
            });
        }
        // Every template variant renders these two catalogues.
        for heading in [rules::SITUATIONAL_HEADING, rules::ANTI_BREAK_HEADING] {
            if !system_prompt.contains(heading) {
                errors.push(ValidationIssue::MissingSection { heading });
            }
        }

        ValidationReport {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use confab_core::chat::Chat;
    use confab_core::stores::{InMemoryTransactions, InMemoryWorldBooks};

    fn manager() -> PromptManager {
        PromptManager::default_pipeline(
            PromptConfig::default(),
            Arc::new(InMemoryWorldBooks::new()),
            Arc::new(InMemoryTransactions::new()),
        )
    }

    #[test]
    fn default_pipeline_registers_in_priority_order() {
        let kinds = manager().injector_kinds();
        assert_eq!(
            kinds,
            vec![
                InjectorKind::Preset,
                InjectorKind::WorldBook,
                InjectorKind::Item,
                InjectorKind::Memory,
                InjectorKind::Status,
            ]
        );
    }

    #[test]
    fn remove_injector_filters_by_kind() {
        let mut manager = manager();
        manager.remove_injector(InjectorKind::Memory);
        assert!(!manager.injector_kinds().contains(&InjectorKind::Memory));
        assert_eq!(manager.injector_kinds().len(), 4);
    }

    #[tokio::test]
    async fn empty_group_roster_is_a_contract_violation() {
        let chat = Chat::group("Ghost Town", Vec::new());
        let ctx = PromptContext::new(chat, "User", "a nurse", Utc::now());

        let err = manager().build_prompt(&ctx).await.expect_err("should fail");
        assert!(matches!(err, PromptError::EmptyRoster(name) if name == "Ghost Town"));
    }

    #[test]
    fn validation_flags_short_and_markerless_prompts() {
        let report = manager().validate_prompt("tiny");
        assert!(!report.is_valid);
        assert!(
            report
                .errors
                .iter()
                .any(|e| matches!(e, ValidationIssue::TooShort { .. }))
        );
        assert!(
            report
                .errors
                .iter()
                .any(|e| matches!(e, ValidationIssue::MissingSection { .. }))
        );
    }

    #[tokio::test]
    async fn validation_passes_a_real_build() {
        let chat = Chat::single("Lin", "a calm botanist");
        let ctx = PromptContext::new(chat, "User", "a nurse", Utc::now());
        let manager = manager();

        let result = manager.build_prompt(&ctx).await.expect("build");
        let report = manager.validate_prompt(&result.system_prompt);
        assert!(report.is_valid, "issues: {:?}", report.errors);
    }
}
