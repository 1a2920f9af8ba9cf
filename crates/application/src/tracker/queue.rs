use futures::stream::{self, Stream};
use host_monitor_domain::Change;
use std::sync::Arc;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::sync::Mutex;

/// Bounded FIFO of changes with a non-blocking push side.
///
/// The receiving half is shared by every [`Notifications`] handle, so any
/// number of handles can be cloned out but each change is delivered once.
#[derive(Debug)]
pub struct ChangeQueue {
    sender: mpsc::Sender<Change>,
    receiver: Arc<Mutex<mpsc::Receiver<Change>>>,
}

impl ChangeQueue {
    /// Capacity is clamped to at least one slot.
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        Self {
            sender,
            receiver: Arc::new(Mutex::new(receiver)),
        }
    }

    /// Never waits. Hands the change back when the queue is full.
    pub fn push(&self, change: Change) -> Result<(), Change> {
        match self.sender.try_send(change) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(change)) | Err(TrySendError::Closed(change)) => Err(change),
        }
    }

    pub fn capacity(&self) -> usize {
        self.sender.max_capacity()
    }

    /// Changes currently waiting for a consumer.
    pub fn pending(&self) -> usize {
        self.sender.max_capacity() - self.sender.capacity()
    }

    /// Whether any [`Notifications`] handle is still alive.
    pub fn has_subscribers(&self) -> bool {
        Arc::strong_count(&self.receiver) > 1
    }

    pub fn subscribe(&self) -> Notifications {
        Notifications {
            receiver: Arc::clone(&self.receiver),
        }
    }
}

/// Read side of the change queue.
#[derive(Debug, Clone)]
pub struct Notifications {
    receiver: Arc<Mutex<mpsc::Receiver<Change>>>,
}

impl Notifications {
    /// Waits for the next change. Returns `None` only once the tracker owning
    /// the queue has been dropped and every buffered change was consumed.
    pub async fn recv(&self) -> Option<Change> {
        self.receiver.lock().await.recv().await
    }

    /// Returns immediately; `None` when nothing is buffered or another
    /// consumer is currently receiving.
    pub fn try_recv(&self) -> Option<Change> {
        self.receiver.try_lock().ok()?.try_recv().ok()
    }

    /// Thread-side counterpart of [`recv`](Self::recv).
    ///
    /// Panics if called from within an async execution context.
    pub fn blocking_recv(&self) -> Option<Change> {
        self.receiver.blocking_lock().blocking_recv()
    }

    /// Takes everything currently buffered without waiting.
    pub fn drain(&self) -> Vec<Change> {
        std::iter::from_fn(|| self.try_recv()).collect()
    }

    pub fn into_stream(self) -> impl Stream<Item = Change> {
        stream::unfold(self, |notifications| async move {
            let change = notifications.recv().await?;
            Some((change, notifications))
        })
    }
}
