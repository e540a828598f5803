use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A chat record as the server stores and broadcasts it.
///
/// `id` is the server-assigned list key and the only field with an
/// invariant: it is unique within any client-held list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub uuid: Uuid,
    pub message: String,
    pub author: String,
}

/// Body of `POST /message`. The server fills in `id` and `uuid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDraft {
    pub message: String,
    pub author: String,
}

impl MessageDraft {
    pub fn new(message: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            author: author.into(),
        }
    }
}

/// Kind of change a broadcast announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BroadcastKind {
    #[serde(rename = "NEW")]
    New,
    #[serde(rename = "EDIT")]
    Edit,
    #[serde(rename = "DELETE")]
    Delete,
}

/// Socket envelope: `{ message, message_type }`, sent to every connected
/// client after a create, edit or delete. Delivery is at-least-once with no
/// ordering guarantee, which is why applying one must be idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Broadcast {
    pub message: Message,
    pub message_type: BroadcastKind,
}
