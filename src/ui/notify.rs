use std::time::Duration;

use parking_lot::Mutex;
use tracing::info;

/// A transient message with a dismiss action, shown after a successful action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub action: String,
    pub duration: Duration,
}

impl Notice {
    /// "Close" action, 3 seconds.
    pub fn closable(message: impl Into<String>) -> Self {
        Self { message: message.into(), action: "Close".to_string(), duration: Duration::from_millis(3000) }
    }
}

/// Collects notices until the front end drains them.
#[derive(Debug, Default)]
pub struct Notifier {
    pending: Mutex<Vec<Notice>>,
    shown: Mutex<Vec<Notice>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self, notice: Notice) {
        info!(target: "notice", message = %notice.message, "notice");
        self.shown.lock().push(notice.clone());
        self.pending.lock().push(notice);
    }

    /// Notices not yet displayed, oldest first.
    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.pending.lock())
    }

    /// Every notice ever opened, including drained ones.
    pub fn history(&self) -> Vec<Notice> {
        self.shown.lock().clone()
    }

    pub fn last(&self) -> Option<Notice> {
        self.shown.lock().last().cloned()
    }
}
