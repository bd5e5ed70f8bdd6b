//! # confab-core
//!
//! Domain data model for the confab prompt-composition pipeline.
//!
//! This crate owns everything the pipeline reads but never writes:
//!
//! - **Chats**: single and group conversations with their rosters,
//!   transcripts, and per-chat settings
//! - **Presets**: named bundles of model sampling parameters
//! - **World books**: reusable lore blocks linked to chats
//! - **Transactions**: gift-purchase records aggregated into owned items
//! - **Status**: live character state with a staleness policy
//! - **Stores**: narrow read-only lookup interfaces to external storage
//! - **Config**: every threshold the pipeline relies on, TOML-loadable
//!
//! No prompt text is generated here; see `confab-prompt` for the pipeline
//! itself.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod chat;
pub mod commerce;
pub mod config;
pub mod error;
pub mod preset;
pub mod status;
pub mod stores;
pub mod types;
pub mod world;

pub use chat::{Chat, ChatMessage, ChatSettings, GroupMember, MessageBody, RedPacketStatus};
pub use commerce::{ItemInfo, Transaction};
pub use config::PromptConfig;
pub use error::CoreError;
pub use preset::PresetConfig;
pub use status::ChatStatus;
pub use types::*;
pub use world::WorldBookInfo;
