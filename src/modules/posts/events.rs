use tokio::sync::broadcast;

use super::model::Post;

const BROADCAST_CAPACITY: usize = 256;

/// Fan-out channel for post-created events.
///
/// Constructed once in [`crate::state::AppState`] and owned for the process
/// lifetime. Every live subscriber holds an independent cursor into the
/// stream: a publish reaches all current subscribers, late subscribers miss
/// prior events, and a lagging receiver drops events rather than applying
/// backpressure. Nothing is persisted.
#[derive(Clone, Debug)]
pub struct PostEvents {
    sender: broadcast::Sender<Post>,
}

impl PostEvents {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self { sender }
    }

    /// Delivers the event to current subscribers. A publish with no
    /// subscribers is not an error; the event is simply dropped.
    pub fn publish(&self, post: Post) {
        match self.sender.send(post) {
            Ok(receivers) => tracing::debug!(receivers, "post event broadcast"),
            Err(_) => tracing::debug!("post event dropped, no active subscribers"),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Post> {
        self.sender.subscribe()
    }
}

impl Default for PostEvents {
    fn default() -> Self {
        Self::new()
    }
}
