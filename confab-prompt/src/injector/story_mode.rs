//! Optional story-development injector.
//!
//! Not registered by default. Contributes only when the context is in story
//! mode; otherwise it is a registered no-op, which keeps registration
//! decisions static even when the mode toggles per build.

use async_trait::async_trait;

use crate::context::PromptContext;
use crate::error::InjectError;
use crate::injector::{InjectorKind, PromptInjector, priority};

/// Heading for the story-development addendum.
pub const STORY_HEADING: &str = "# Story Development";

/// Adds plot and relationship-network framing for narrative builds.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoryModeInjector;

impl StoryModeInjector {
    /// Create the injector.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PromptInjector for StoryModeInjector {
    fn kind(&self) -> InjectorKind {
        InjectorKind::StoryMode
    }

    fn priority(&self) -> i32 {
        priority::STORY_MODE
    }

    async fn inject(&self, ctx: &PromptContext) -> Result<String, InjectError> {
        if !ctx.story_mode {
            return Ok(String::new());
        }

        Ok(format!(
            "{STORY_HEADING}\n\
             - Weave the web of relationships between characters into the unfolding plot.\n\
             - Let scenes breathe; not every reply needs an event.\n\
             - Foreshadow sparingly, and pay off what you foreshadow.\n\
             - Secondary characters have their own lives that continue off-page."
        ))
    }
}
