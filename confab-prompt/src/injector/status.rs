//! Live-status injector.
//!
//! Renders the character's live state and, when that state has gone stale or
//! the conversation is just starting, demands a `status_update` action in
//! the next reply. That demand is the whole refresh mechanism; there is no
//! separate scheduler keeping status current.

use std::fmt::Write;

use async_trait::async_trait;
use chrono::Duration;

use confab_core::config::StatusConfig;

use crate::context::PromptContext;
use crate::error::InjectError;
use crate::injector::{InjectorKind, PromptInjector, priority};

/// Heading for the live-status addendum.
pub const STATUS_HEADING: &str = "# Current Status";

/// Instruction appended when the status needs refreshing.
pub const STATUS_REFRESH_INSTRUCTION: &str =
    "Your status information is out of date. Include a `status_update` action in your next reply.";

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Renders live character state. Single chats only; a group has no single
/// shared status.
#[derive(Debug, Clone)]
pub struct StatusInjector {
    stale_after: Duration,
    sparse_history_threshold: usize,
}

impl StatusInjector {
    /// Create the injector from the configured freshness policy.
    #[must_use]
    pub fn new(config: &StatusConfig) -> Self {
        Self {
            stale_after: config.stale_after(),
            sparse_history_threshold: config.sparse_history_threshold,
        }
    }
}

#[async_trait]
impl PromptInjector for StatusInjector {
    fn kind(&self) -> InjectorKind {
        InjectorKind::Status
    }

    fn priority(&self) -> i32 {
        priority::STATUS
    }

    async fn inject(&self, ctx: &PromptContext) -> Result<String, InjectError> {
        if ctx.chat.is_group {
            return Ok(String::new());
        }
        let Some(status) = &ctx.chat_status else {
            return Ok(String::new());
        };

        let mut block = String::from(STATUS_HEADING);
        let _ = write!(
            block,
            "\n- Online: {}",
            if status.is_online { "yes" } else { "no" }
        );
        let _ = write!(block, "\n- Mood: {}", status.mood);
        let _ = write!(block, "\n- Location: {}", status.location);
        let _ = write!(block, "\n- Outfit: {}", status.outfit);
        let _ = write!(
            block,
            "\n- Last updated: {}",
            status.last_update.format(TIME_FORMAT)
        );

        let sparse = ctx.chat.messages.len() <= self.sparse_history_threshold;
        if status.is_stale(ctx.current_time, self.stale_after) || sparse {
            block.push_str("\n\n");
            block.push_str(STATUS_REFRESH_INSTRUCTION);
        }

        Ok(block)
    }
}
