pub mod api;
pub mod feed;
pub mod mirror;
pub mod store;

pub use crate::domain::model::{Broadcast, BroadcastKind, Message, MessageDraft};
pub use crate::domain::ports::{BroadcastFeed, ConfigProvider, MessageApi};
pub use crate::utils::error::Result;
