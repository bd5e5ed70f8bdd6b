//! Optional inner-life injector.
//!
//! Not registered by default; integrations that want richer emotional
//! writing add it through `add_injector`. Exists partly to prove the
//! pipeline extends without touching the manager.

use async_trait::async_trait;

use crate::context::PromptContext;
use crate::error::InjectError;
use crate::injector::{InjectorKind, PromptInjector, priority};

/// Heading for the inner-life addendum.
pub const INNER_LIFE_HEADING: &str = "# Inner Life";

/// Adds psychological and emotional-writing guidance.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterStateInjector;

impl CharacterStateInjector {
    /// Create the injector.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PromptInjector for CharacterStateInjector {
    fn kind(&self) -> InjectorKind {
        InjectorKind::CharacterState
    }

    fn priority(&self) -> i32 {
        priority::CHARACTER_STATE
    }

    async fn inject(&self, ctx: &PromptContext) -> Result<String, InjectError> {
        let medium = if ctx.story_mode {
            "Let mood shifts show through narration and gesture rather than labels."
        } else {
            "Let mood shifts show through wording and pacing rather than labels."
        };

        Ok(format!(
            "{INNER_LIFE_HEADING}\n\
             - {medium}\n\
             - Carry emotional threads across messages; feelings do not reset between replies.\n\
             - Small physical tells (a pause, a typo corrected, a late-night reply) say more than declarations.\n\
             - Wants and worries persist; let them color unrelated conversations."
        ))
    }
}
