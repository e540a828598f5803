use crate::domain::model::{Broadcast, Message, MessageDraft};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// The REST surface of the chat server.
#[async_trait]
pub trait MessageApi: Send + Sync {
    async fn list_messages(&self) -> Result<Vec<Message>>;
    async fn post_message(&self, draft: &MessageDraft) -> Result<Message>;
    async fn edit_message(&self, message: &Message) -> Result<Message>;
    async fn delete_message(&self, id: i64) -> Result<()>;
}

/// A stream of change broadcasts. `Ok(None)` means the feed closed cleanly;
/// an error means the transport failed and the feed is unusable.
#[async_trait]
pub trait BroadcastFeed: Send {
    async fn next_broadcast(&mut self) -> Result<Option<Broadcast>>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn request_timeout_secs(&self) -> u64;
    fn headers(&self) -> Option<&HashMap<String, String>> {
        None
    }
}
