//! Live character status for single chats.
//!
//! Status is produced by the model itself via `status_update` actions and
//! read back on the next build; the staleness check is what keeps that loop
//! turning without a separate scheduler.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Live state of a single-chat character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatStatus {
    /// Whether the character is currently reachable.
    pub is_online: bool,
    /// Current mood, free text.
    pub mood: String,
    /// Where the character currently is.
    pub location: String,
    /// What the character is currently wearing.
    pub outfit: String,
    /// When this status was last refreshed.
    pub last_update: DateTime<Utc>,
}

impl ChatStatus {
    /// Whether the status is older than `threshold` as of `now`.
    #[must_use]
    pub fn is_stale(&self, now: DateTime<Utc>, threshold: Duration) -> bool {
        now.signed_duration_since(self.last_update) > threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_updated(minutes_ago: i64) -> ChatStatus {
        ChatStatus {
            is_online: true,
            mood: "content".to_string(),
            location: "home".to_string(),
            outfit: "sweater".to_string(),
            last_update: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    #[test]
    fn stale_after_threshold() {
        let status = status_updated(31);
        assert!(status.is_stale(Utc::now(), Duration::minutes(30)));
    }

    #[test]
    fn fresh_within_threshold() {
        let status = status_updated(5);
        assert!(!status.is_stale(Utc::now(), Duration::minutes(30)));
    }
}
