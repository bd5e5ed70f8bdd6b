//! The injector pipeline: independent, composable prompt contributors.
//!
//! Each injector owns exactly one concern and appends one addendum (possibly
//! empty) to the system prompt. Injectors are stateless across calls: their
//! output is a pure function of the context plus read-only store lookups.
//! Ordering is controlled solely by [`PromptInjector::priority`]; ascending
//! priority lands earlier in the final prompt, and registration order breaks
//! ties.

pub mod character_state;
pub mod extra_info;
pub mod items;
pub mod memory;
pub mod preset;
pub mod status;
pub mod story_mode;
pub mod world_book;

use std::fmt;

use async_trait::async_trait;

use crate::context::PromptContext;
use crate::error::InjectError;

pub use character_state::CharacterStateInjector;
pub use extra_info::ExtraInfoInjector;
pub use items::ItemInjector;
pub use memory::MemoryInjector;
pub use preset::PresetInjector;
pub use status::StatusInjector;
pub use story_mode::StoryModeInjector;
pub use world_book::WorldBookInjector;

/// Discriminator identifying a registered injector, used for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InjectorKind {
    /// Preset-derived sampling behavior description.
    Preset,
    /// Linked world lore.
    WorldBook,
    /// Owned-item inventory.
    Item,
    /// Cross-context memory.
    Memory,
    /// Live character status.
    Status,
    /// Psychological and emotional-writing guidance.
    CharacterState,
    /// Structured-addendum output contract.
    ExtraInfo,
    /// Story-development framing.
    StoryMode,
}

impl fmt::Display for InjectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Preset => "preset",
            Self::WorldBook => "world_book",
            Self::Item => "item",
            Self::Memory => "memory",
            Self::Status => "status",
            Self::CharacterState => "character_state",
            Self::ExtraInfo => "extra_info",
            Self::StoryMode => "story_mode",
        };
        write!(f, "{name}")
    }
}

/// Default priorities for the standard pipeline.
///
/// These numbers are load-bearing: ascending priority is placement order in
/// the final prompt. Gaps are intentional so integrations can slot their own
/// injectors between the standard ones.
pub mod priority {
    /// Preset sampling description leads the addenda.
    pub const PRESET: i32 = 5;
    /// Story framing sits alongside the preset block.
    pub const STORY_MODE: i32 = 5;
    /// World lore comes before anything character-specific.
    pub const WORLD_BOOK: i32 = 10;
    /// Owned items.
    pub const ITEMS: i32 = 15;
    /// Cross-context memory.
    pub const MEMORY: i32 = 20;
    /// Optional inner-life guidance.
    pub const CHARACTER_STATE: i32 = 25;
    /// Optional structured-addendum contract.
    pub const EXTRA_INFO: i32 = 25;
    /// Live status runs last so freshness instructions close the prompt.
    pub const STATUS: i32 = 30;
}

/// A stateless unit appending one concern's text to the system prompt.
#[async_trait]
pub trait PromptInjector: Send + Sync {
    /// Which injector this is, for registration bookkeeping.
    fn kind(&self) -> InjectorKind;

    /// Ordering key; ascending priority lands earlier in the prompt.
    fn priority(&self) -> i32;

    /// Produce this injector's addendum for the given context.
    ///
    /// An empty string means "nothing to contribute" and is silently
    /// skipped. An error is contained by the manager and degrades to the
    /// same outcome.
    async fn inject(&self, ctx: &PromptContext) -> Result<String, InjectError>;
}
