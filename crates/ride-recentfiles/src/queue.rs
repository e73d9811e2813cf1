//! "Run on next UI tick" queue.
//!
//! Event-bus callbacks can fire while the user is still interacting with a
//! menu. Changing that menu underneath the interaction is not allowed, so the
//! callbacks post a [`UiTask`] instead and the UI thread applies it on its
//! next idle cycle via [`crate::RecentFilesPlugin::run_deferred`].

use std::path::PathBuf;

use crossbeam_channel::{Receiver, Sender, TryRecvError};

/// Menu-affecting work postponed to the next UI tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiTask {
    /// Move this path to the front of the recent list.
    RecordOpened(PathBuf),
    /// Follow a tracked file to its new path.
    Rename { old: PathBuf, new: PathBuf },
}

/// Sending half of a [`UiTaskQueue`]. Cheap to clone and `Send`.
#[derive(Debug, Clone)]
pub struct UiTaskSender {
    sender: Sender<UiTask>,
}

impl UiTaskSender {
    /// Post a task. Returns `false` if the queue is gone.
    pub fn post(&self, task: UiTask) -> bool {
        self.sender.send(task).is_ok()
    }
}

/// FIFO queue of [`UiTask`]s drained on the UI thread.
#[derive(Debug)]
pub struct UiTaskQueue {
    sender: Sender<UiTask>,
    receiver: Receiver<UiTask>,
}

impl Default for UiTaskQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl UiTaskQueue {
    pub fn new() -> Self {
        let (sender, receiver) = crossbeam_channel::unbounded();
        Self { sender, receiver }
    }

    /// Handle for posting from other contexts.
    pub fn sender(&self) -> UiTaskSender {
        UiTaskSender {
            sender: self.sender.clone(),
        }
    }

    pub fn post(&self, task: UiTask) {
        // The queue owns a receiver, so the channel cannot be disconnected here.
        let _ = self.sender.send(task);
    }

    /// Next pending task, without blocking.
    pub fn next_task(&self) -> Option<UiTask> {
        match self.receiver.try_recv() {
            Ok(task) => Some(task),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Drop every pending task, returning how many were discarded.
    pub fn discard(&self) -> usize {
        self.receiver.try_iter().count()
    }

    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}
