use std::sync::Mutex;

use tracing::{info, warn};

use crate::models::{Notification, Severity};

/// Queue of transient notifications for the rendering shell to drain.
///
/// Every notification is mirrored to the log so degraded environments
/// without a shell still record what the operator would have seen.
#[derive(Default)]
pub struct NotificationCenter {
    entries: Mutex<Vec<Notification>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, notification: Notification) {
        match notification.severity {
            Severity::Success => info!("{}: {}", notification.title, notification.description),
            Severity::Destructive => warn!("{}: {}", notification.title, notification.description),
        }

        self.entries.lock().unwrap().push(notification);
    }

    /// Remove and return everything queued since the last drain.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.entries.lock().unwrap())
    }

    pub fn last(&self) -> Option<Notification> {
        self.entries.lock().unwrap().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
