//! Prompt pipeline error types.
//!
//! Two tiers, deliberately separate: [`PromptError`] covers caller contract
//! violations and is allowed to escape `build_prompt`; [`InjectError`] covers
//! per-injector resolution failures and is always contained by the manager's
//! loop, degrading to "this injector contributed nothing".

use confab_core::types::ChatId;
use thiserror::Error;

/// Errors that abort a build. Only caller contract violations live here.
#[derive(Debug, Error)]
pub enum PromptError {
    /// A group chat was submitted with no roster to speak for.
    #[error("group chat '{0}' has an empty member roster")]
    EmptyRoster(String),
}

/// Errors raised inside a single injector.
///
/// These never abort a build; the manager logs them and moves on.
#[derive(Debug, Error)]
pub enum InjectError {
    /// An external store lookup failed outright.
    #[error("store lookup failed: {0}")]
    Store(String),

    /// A linked chat id could not be resolved against the context.
    #[error("linked chat {0} is not available in the context")]
    LinkedChatUnavailable(ChatId),

    /// Data from a store did not have the expected shape.
    #[error("malformed data: {0}")]
    MalformedData(String),
}
