pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::core::api::HttpMessageApi;
pub use crate::core::feed::WsFeed;
pub use crate::core::mirror::{MirrorEngine, MirrorSummary};
pub use crate::core::store::{Applied, MessageStore};
pub use crate::domain::model::{Broadcast, BroadcastKind, Message, MessageDraft};
pub use crate::domain::ports::{BroadcastFeed, ConfigProvider, MessageApi};
pub use crate::utils::error::{ChatError, Result};
