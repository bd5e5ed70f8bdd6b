//! Template variants producing the opening section of the system prompt.
//!
//! One variant per chat shape, selected by an explicit discriminant rather
//! than inheritance: single chats speak as one character, group chats direct
//! a whole roster, and story narration drops the chat-app frame entirely.
//! All variants share the rule catalogues in [`rules`]; `build` is pure and
//! synchronous, and anything that needs an async lookup (memories, world
//! books, live status) is an injector's job later in the pipeline.

pub mod group;
pub mod rules;
pub mod single;
pub mod story;

use crate::context::PromptContext;

/// The template variant selecting the opening system-prompt section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatTemplate {
    /// One named character in a 1:1 conversation.
    Single,
    /// Director of every character in a group except the user.
    Group,
    /// Pure narrative prose instead of a chat transcript.
    StoryNarration,
}

impl ChatTemplate {
    /// Default variant selection: the group flag picks the template.
    ///
    /// Story mode is deliberately not part of selection; it is signaled to
    /// injectors via the context and an integration that wants narrative
    /// framing opts into [`ChatTemplate::StoryNarration`] explicitly.
    #[must_use]
    pub fn for_context(ctx: &PromptContext) -> Self {
        if ctx.chat.is_group {
            Self::Group
        } else {
            Self::Single
        }
    }

    /// Render the opening system-prompt section for this variant.
    #[must_use]
    pub fn build(&self, ctx: &PromptContext) -> String {
        match self {
            Self::Single => single::build(ctx),
            Self::Group => group::build(ctx),
            Self::StoryNarration => story::build(ctx),
        }
    }
}
