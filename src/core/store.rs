use crate::domain::model::{Broadcast, BroadcastKind, Message};
use std::collections::HashSet;

/// What applying a broadcast did to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Inserted,
    Replaced,
    Removed,
    Unchanged,
}

/// The client-held message list, keyed by `Message::id`.
///
/// Broadcasts can arrive duplicated or out of order relative to the initial
/// sync, so every transition is a no-op when the list already reflects it:
/// NEW for a known id, EDIT for an unknown id or with identical content, and
/// DELETE for an unknown id all return [`Applied::Unchanged`]. Arrival order
/// is preserved for everything else.
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    messages: Vec<Message>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Resets the list to a fresh server snapshot. Duplicate ids in the
    /// snapshot keep the first occurrence.
    pub fn replace_all(&mut self, messages: Vec<Message>) {
        let mut seen = HashSet::with_capacity(messages.len());
        let mut deduped = Vec::with_capacity(messages.len());
        for message in messages {
            if seen.insert(message.id) {
                deduped.push(message);
            } else {
                tracing::warn!("Dropping duplicate id {} from sync snapshot", message.id);
            }
        }
        self.messages = deduped;
    }

    pub fn apply(&mut self, broadcast: &Broadcast) -> Applied {
        match broadcast.message_type {
            BroadcastKind::New => {
                if self.contains(broadcast.message.id) {
                    Applied::Unchanged
                } else {
                    self.messages.push(broadcast.message.clone());
                    Applied::Inserted
                }
            }
            BroadcastKind::Edit => {
                match self
                    .messages
                    .iter_mut()
                    .find(|m| m.id == broadcast.message.id)
                {
                    Some(slot) if *slot == broadcast.message => Applied::Unchanged,
                    Some(slot) => {
                        *slot = broadcast.message.clone();
                        Applied::Replaced
                    }
                    None => Applied::Unchanged,
                }
            }
            BroadcastKind::Delete => {
                let before = self.messages.len();
                self.messages.retain(|m| m.id != broadcast.message.id);
                if self.messages.len() < before {
                    Applied::Removed
                } else {
                    Applied::Unchanged
                }
            }
        }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.messages.iter().any(|m| m.id == id)
    }

    pub fn get(&self, id: i64) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn message(id: i64, text: &str) -> Message {
        Message {
            id,
            uuid: Uuid::new_v4(),
            message: text.to_string(),
            author: "Seanie X".to_string(),
        }
    }

    fn broadcast(kind: BroadcastKind, message: Message) -> Broadcast {
        Broadcast {
            message,
            message_type: kind,
        }
    }

    #[test]
    fn new_inserts_unknown_id_at_the_end() {
        let mut store = MessageStore::new();
        store.replace_all(vec![message(1, "first")]);

        let result = store.apply(&broadcast(BroadcastKind::New, message(2, "second")));

        assert_eq!(result, Applied::Inserted);
        assert_eq!(store.len(), 2);
        assert_eq!(store.messages()[1].id, 2);
    }

    #[test]
    fn new_is_a_no_op_for_a_known_id() {
        let mut store = MessageStore::new();
        store.replace_all(vec![message(1, "first")]);

        let result = store.apply(&broadcast(BroadcastKind::New, message(1, "echo of first")));

        assert_eq!(result, Applied::Unchanged);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(1).unwrap().message, "first");
    }

    #[test]
    fn edit_replaces_in_place_and_keeps_position() {
        let mut store = MessageStore::new();
        store.replace_all(vec![message(1, "a"), message(2, "b"), message(3, "c")]);

        let mut edited = message(2, "b, revised");
        edited.uuid = store.get(2).unwrap().uuid;
        let result = store.apply(&broadcast(BroadcastKind::Edit, edited));

        assert_eq!(result, Applied::Replaced);
        assert_eq!(store.len(), 3);
        assert_eq!(store.messages()[1].id, 2);
        assert_eq!(store.messages()[1].message, "b, revised");
    }

    #[test]
    fn edit_for_unknown_id_changes_nothing() {
        let mut store = MessageStore::new();
        store.replace_all(vec![message(1, "a")]);

        let result = store.apply(&broadcast(BroadcastKind::Edit, message(9, "ghost")));

        assert_eq!(result, Applied::Unchanged);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_removes_by_id_only() {
        let mut store = MessageStore::new();
        store.replace_all(vec![message(1, "a"), message(2, "b")]);

        // The broadcast body may be stale; only the id matters.
        let result = store.apply(&broadcast(BroadcastKind::Delete, message(2, "old text")));

        assert_eq!(result, Applied::Removed);
        assert_eq!(store.len(), 1);
        assert!(!store.contains(2));
    }

    #[test]
    fn every_kind_is_idempotent_on_reapply() {
        let mut store = MessageStore::new();
        store.replace_all(vec![message(1, "a")]);

        let new = broadcast(BroadcastKind::New, message(2, "b"));
        assert_eq!(store.apply(&new), Applied::Inserted);
        assert_eq!(store.apply(&new), Applied::Unchanged);

        let edit = broadcast(BroadcastKind::Edit, {
            let mut m = message(1, "a, revised");
            m.uuid = store.get(1).unwrap().uuid;
            m
        });
        assert_eq!(store.apply(&edit), Applied::Replaced);
        assert_eq!(store.apply(&edit), Applied::Unchanged);

        let delete = broadcast(BroadcastKind::Delete, message(2, "b"));
        assert_eq!(store.apply(&delete), Applied::Removed);
        assert_eq!(store.apply(&delete), Applied::Unchanged);

        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_then_late_new_resurrects_the_message() {
        // Out-of-order delivery: the reducer has no tombstones, so a NEW
        // that arrives after its DELETE inserts again. Eventual consistency
        // here relies on the server not re-broadcasting after removal.
        let mut store = MessageStore::new();
        store.replace_all(vec![message(1, "a")]);

        store.apply(&broadcast(BroadcastKind::Delete, message(1, "a")));
        let result = store.apply(&broadcast(BroadcastKind::New, message(1, "a")));

        assert_eq!(result, Applied::Inserted);
        assert!(store.contains(1));
    }

    #[test]
    fn replace_all_dedupes_keeping_first() {
        let mut store = MessageStore::new();
        store.replace_all(vec![message(1, "first"), message(2, "b"), message(1, "dup")]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).unwrap().message, "first");
    }

    #[test]
    fn replace_all_discards_previous_state() {
        let mut store = MessageStore::new();
        store.replace_all(vec![message(1, "a"), message(2, "b")]);
        store.replace_all(vec![message(3, "c")]);

        assert_eq!(store.len(), 1);
        assert!(store.contains(3));
        assert!(!store.contains(1));
    }
}
