//! Optional structured-addendum injector.
//!
//! When the caller supplies an [`ExtraInfoConfig`](crate::context::ExtraInfoConfig),
//! the model is asked to
//! carry a filled-in HTML snippet in its reply. The embedding syntax differs
//! by mode: chat replies smuggle the snippet inside a `text` action, while
//! narrative replies append it after the prose.

use std::fmt::Write;

use async_trait::async_trait;

use crate::context::PromptContext;
use crate::error::InjectError;
use crate::injector::{InjectorKind, PromptInjector, priority};

/// Heading for the structured-addendum contract.
pub const EXTRA_INFO_HEADING: &str = "# Structured Addendum";

/// Injects a user-specified HTML-snippet output contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtraInfoInjector;

impl ExtraInfoInjector {
    /// Create the injector.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PromptInjector for ExtraInfoInjector {
    fn kind(&self) -> InjectorKind {
        InjectorKind::ExtraInfo
    }

    fn priority(&self) -> i32 {
        priority::EXTRA_INFO
    }

    async fn inject(&self, ctx: &PromptContext) -> Result<String, InjectError> {
        let Some(extra) = &ctx.extra_info else {
            return Ok(String::new());
        };

        let mut block = String::from(EXTRA_INFO_HEADING);
        let _ = write!(block, "\n{}", extra.description.trim());
        if ctx.story_mode {
            block.push_str(
                "\nAfter the narrative, append the following HTML snippet filled in with \
                 current values:",
            );
        } else {
            block.push_str(
                "\nInclude exactly one `text` action whose content is the following HTML \
                 snippet filled in with current values:",
            );
        }
        let _ = write!(block, "\n```html\n{}\n```", extra.html_template.trim());

        Ok(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use confab_core::chat::Chat;

    use crate::context::ExtraInfoConfig;

    fn ctx() -> PromptContext {
        PromptContext::new(
            Chat::single("Lin", "a calm botanist"),
            "User",
            "a nurse",
            Utc::now(),
        )
        .with_extra_info(ExtraInfoConfig {
            description: "Track the character's energy level.".to_string(),
            html_template: "<div class=\"energy\">{level}</div>".to_string(),
        })
    }

    #[tokio::test]
    async fn chat_mode_embeds_snippet_in_a_text_action() {
        let out = ExtraInfoInjector::new().inject(&ctx()).await.expect("inject");
        assert!(out.contains("exactly one `text` action"));
        assert!(out.contains("<div class=\"energy\">"));
    }

    #[tokio::test]
    async fn story_mode_appends_snippet_after_the_prose() {
        let out = ExtraInfoInjector::new()
            .inject(&ctx().with_story_mode(true))
            .await
            .expect("inject");
        assert!(out.contains("After the narrative"));
        assert!(!out.contains("`text` action"));
    }

    #[tokio::test]
    async fn absent_config_contributes_nothing() {
        let plain = PromptContext::new(
            Chat::single("Lin", "a calm botanist"),
            "User",
            "a nurse",
            Utc::now(),
        );
        let out = ExtraInfoInjector::new().inject(&plain).await.expect("inject");
        assert!(out.is_empty());
    }
}
