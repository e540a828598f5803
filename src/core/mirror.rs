use crate::core::store::{Applied, MessageStore};
use crate::domain::model::Message;
use crate::domain::ports::{BroadcastFeed, MessageApi};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use std::time::{Duration, Instant};

/// What a mirror session saw, start to close. `synced` counts what the
/// store holds after the initial sync, so
/// `final_count == synced + inserted - removed` on every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorSummary {
    pub synced: usize,
    pub inserted: usize,
    pub replaced: usize,
    pub removed: usize,
    pub ignored: usize,
    pub final_count: usize,
    pub duration: Duration,
}

/// Keeps a local message list consistent with the server: one initial
/// sync over the API, then every broadcast from the feed folded into the
/// store until the feed ends.
pub struct MirrorEngine<A: MessageApi, F: BroadcastFeed> {
    api: A,
    feed: F,
    store: MessageStore,
    monitor: SystemMonitor,
}

impl<A: MessageApi, F: BroadcastFeed> MirrorEngine<A, F> {
    pub fn new(api: A, feed: F) -> Self {
        Self::new_with_monitoring(api, feed, false)
    }

    pub fn new_with_monitoring(api: A, feed: F, monitor_enabled: bool) -> Self {
        Self {
            api,
            feed,
            store: MessageStore::new(),
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&mut self) -> Result<MirrorSummary> {
        let start = Instant::now();
        tracing::info!("🚀 Starting mirror session");

        // A failed initial sync is not fatal. The list converges anyway
        // once broadcasts start flowing, just from an empty baseline.
        let synced = match self.api.list_messages().await {
            Ok(snapshot) => {
                // Counted after replace_all: duplicate ids in the snapshot
                // are dropped there and must not inflate the summary.
                self.store.replace_all(snapshot);
                tracing::info!("✅ Initial sync: {} messages", self.store.len());
                self.store.len()
            }
            Err(e) => {
                tracing::warn!("Initial sync failed, starting from an empty list: {}", e);
                self.store.replace_all(Vec::new());
                0
            }
        };
        self.monitor.log_stats("Initial sync");

        let mut inserted = 0usize;
        let mut replaced = 0usize;
        let mut removed = 0usize;
        let mut ignored = 0usize;

        while let Some(broadcast) = self.feed.next_broadcast().await? {
            let id = broadcast.message.id;
            match self.store.apply(&broadcast) {
                Applied::Inserted => {
                    inserted += 1;
                    tracing::info!("📥 NEW message {} from {}", id, broadcast.message.author);
                }
                Applied::Replaced => {
                    replaced += 1;
                    tracing::info!("🔄 EDIT message {}", id);
                }
                Applied::Removed => {
                    removed += 1;
                    tracing::info!("📤 DELETE message {}", id);
                }
                Applied::Unchanged => {
                    ignored += 1;
                    tracing::debug!(
                        "⏭️ {:?} for message {} changed nothing",
                        broadcast.message_type,
                        id
                    );
                }
            }
        }

        let summary = MirrorSummary {
            synced,
            inserted,
            replaced,
            removed,
            ignored,
            final_count: self.store.len(),
            duration: start.elapsed(),
        };

        tracing::info!(
            "🎉 Mirror session closed: {} messages held ({} inserted, {} replaced, {} removed, {} ignored) in {:?}",
            summary.final_count,
            summary.inserted,
            summary.replaced,
            summary.removed,
            summary.ignored,
            summary.duration
        );
        self.monitor.log_final_stats();

        Ok(summary)
    }

    pub fn messages(&self) -> &[Message] {
        self.store.messages()
    }
}
