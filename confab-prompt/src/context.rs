//! The immutable context bundle every build reads from.
//!
//! A [`PromptContext`] carries everything a template or injector might need.
//! It is assembled once per build call and never mutated afterwards; every
//! template and injector output is a pure function of this bundle plus
//! read-only store lookups.

use chrono::{DateTime, Utc};

use confab_core::chat::Chat;
use confab_core::preset::PresetConfig;
use confab_core::status::ChatStatus;
use confab_core::types::ChatId;

/// Caller-supplied configuration for the structured-addendum output contract.
#[derive(Debug, Clone)]
pub struct ExtraInfoConfig {
    /// What the addendum is for, shown to the model.
    pub description: String,
    /// HTML snippet the model must fill with current values.
    pub html_template: String,
}

/// Everything a template or injector might need for one build call.
#[derive(Debug, Clone)]
pub struct PromptContext {
    /// The conversation being composed for.
    pub chat: Chat,
    /// The caller's display name.
    pub my_nickname: String,
    /// The caller's persona text.
    pub my_persona: String,
    /// Wall-clock time of the build.
    pub current_time: DateTime<Utc>,
    /// Broader conversation set, used only by cross-context memory.
    /// Empty when the caller has nothing to cross-reference.
    pub all_chats: Vec<Chat>,
    /// Live character state. Single chats only.
    pub chat_status: Option<ChatStatus>,
    /// Sampling preset bound to this chat, if any.
    pub current_preset: Option<PresetConfig>,
    /// Structured-addendum output contract, if requested.
    pub extra_info: Option<ExtraInfoConfig>,
    /// Whether injectors should frame their output for narrative prose
    /// instead of a chat transcript.
    pub story_mode: bool,
}

impl PromptContext {
    /// Create a context with the always-present fields.
    #[must_use]
    pub fn new(
        chat: Chat,
        my_nickname: impl Into<String>,
        my_persona: impl Into<String>,
        current_time: DateTime<Utc>,
    ) -> Self {
        Self {
            chat,
            my_nickname: my_nickname.into(),
            my_persona: my_persona.into(),
            current_time,
            all_chats: Vec::new(),
            chat_status: None,
            current_preset: None,
            extra_info: None,
            story_mode: false,
        }
    }

    /// Attach the broader conversation set for cross-context memory.
    #[must_use]
    pub fn with_all_chats(mut self, chats: Vec<Chat>) -> Self {
        self.all_chats = chats;
        self
    }

    /// Attach live character status.
    #[must_use]
    pub fn with_status(mut self, status: ChatStatus) -> Self {
        self.chat_status = Some(status);
        self
    }

    /// Bind a sampling preset.
    #[must_use]
    pub fn with_preset(mut self, preset: PresetConfig) -> Self {
        self.current_preset = Some(preset);
        self
    }

    /// Request the structured-addendum output contract.
    #[must_use]
    pub fn with_extra_info(mut self, extra_info: ExtraInfoConfig) -> Self {
        self.extra_info = Some(extra_info);
        self
    }

    /// Switch injectors into narrative framing.
    #[must_use]
    pub fn with_story_mode(mut self, story_mode: bool) -> Self {
        self.story_mode = story_mode;
        self
    }

    /// Resolve a linked chat id against the broader conversation set.
    #[must_use]
    pub fn linked_chat(&self, id: ChatId) -> Option<&Chat> {
        self.all_chats.iter().find(|c| c.id == id)
    }
}
