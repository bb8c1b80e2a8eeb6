//! # Replay Broadcaster
//!
//! Append-only broadcast log with full replay for late subscribers.
//!
//! Every published item is kept in an in-memory log. A new subscriber first
//! receives the entire log in publish order, then live items as they arrive,
//! so early and late subscribers observe the same sequence. Publishing is
//! synchronous and never blocks on slow consumers; each subscriber buffers
//! independently in an unbounded channel.
//!
//! The log is unbounded and process-local: memory grows with the number of
//! published items, and nothing survives a restart.
//!
//! # Examples
//!
//! ```
//! use cinefeed::infrastructure::feed::ReplayBroadcaster;
//! use futures::StreamExt;
//!
//! # futures::executor::block_on(async {
//! let broadcaster = ReplayBroadcaster::new();
//! broadcaster.publish(1);
//! broadcaster.publish(2);
//!
//! // A late subscriber still sees everything.
//! let mut feed = broadcaster.subscribe();
//! assert_eq!(feed.next().await, Some(1));
//! assert_eq!(feed.next().await, Some(2));
//! # });
//! ```

use futures::Stream;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::sync::mpsc;

#[derive(Debug)]
struct Shared<T> {
    history: Vec<T>,
    senders: Vec<mpsc::UnboundedSender<T>>,
    closed: bool,
}

/// Shared handle for a replay-all broadcast log.
///
/// Cloning the handle shares the underlying log; any clone can publish,
/// subscribe, or close. The internal lock is only held for the duration of
/// a publish or subscribe call and never across an await point.
#[derive(Debug)]
pub struct ReplayBroadcaster<T> {
    shared: Arc<Mutex<Shared<T>>>,
}

impl<T> Clone for ReplayBroadcaster<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> Default for ReplayBroadcaster<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ReplayBroadcaster<T> {
    /// Creates an empty, open broadcaster.
    #[must_use]
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                history: Vec::new(),
                senders: Vec::new(),
                closed: false,
            })),
        }
    }

    /// Returns the number of items published so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.lock().history.len()
    }

    /// Returns true if nothing has been published.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of registered subscribers.
    ///
    /// Subscribers whose feed was dropped are only pruned on the next
    /// publish, so the count may briefly overshoot.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.shared.lock().senders.len()
    }

    /// Returns true if the broadcaster has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.shared.lock().closed
    }

    /// Closes the broadcaster.
    ///
    /// Existing feeds finish their backlog plus anything already buffered
    /// and then terminate. Later publishes are dropped silently.
    pub fn close(&self) {
        let mut shared = self.shared.lock();
        shared.closed = true;
        shared.senders.clear();
    }
}

impl<T: Clone> ReplayBroadcaster<T> {
    /// Publishes an item to the log and every live subscriber.
    ///
    /// Never blocks: slow subscribers buffer in their own unbounded channel.
    /// After [`close`](Self::close), the item is dropped silently.
    pub fn publish(&self, item: T) {
        let mut shared = self.shared.lock();
        if shared.closed {
            tracing::debug!("publish after close, item dropped");
            return;
        }
        shared
            .senders
            .retain(|sender| sender.send(item.clone()).is_ok());
        shared.history.push(item);
    }

    /// Subscribes, returning a feed that replays the full log before
    /// switching to live items.
    ///
    /// The log snapshot and the live registration happen under one lock
    /// with respect to [`publish`](Self::publish), so a feed observes each
    /// item exactly once, in publish order. Subscribing after
    /// [`close`](Self::close) yields the log and then terminates.
    #[must_use]
    pub fn subscribe(&self) -> ReplayFeed<T> {
        let (sender, receiver) = mpsc::unbounded_channel();
        let mut shared = self.shared.lock();
        let backlog: VecDeque<T> = shared.history.iter().cloned().collect();
        if !shared.closed {
            shared.senders.push(sender);
        }
        ReplayFeed {
            backlog,
            live: receiver,
        }
    }
}

/// A single subscription to a [`ReplayBroadcaster`].
///
/// Yields the backlog snapshot first, then live items. The stream stays
/// pending while the broadcaster is open and ends once it is closed and all
/// buffered items are consumed. Dropping the feed releases only this
/// subscription.
#[derive(Debug)]
pub struct ReplayFeed<T> {
    backlog: VecDeque<T>,
    live: mpsc::UnboundedReceiver<T>,
}

impl<T: Unpin> Stream for ReplayFeed<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if let Some(item) = this.backlog.pop_front() {
            return Poll::Ready(Some(item));
        }
        this.live.poll_recv(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.backlog.len(), None)
    }
}
