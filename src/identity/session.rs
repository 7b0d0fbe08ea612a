use futures_util::stream::{self, Stream};
use parking_lot::RwLock;
use tokio::sync::watch;
use tracing::{info, warn};

use super::persist::SessionFile;
use crate::model::SessionInformation;

/// Holds at most one logged-in identity and publishes the "is logged in" signal.
///
/// The store is created once and handed to every controller through the view context.
/// Mutations never fail; when a session file is attached, it mirrors the held identity
/// and write errors only produce a warning.
pub struct SessionStore {
    information: RwLock<Option<SessionInformation>>,
    logged: watch::Sender<bool>,
    file: Option<SessionFile>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        let (logged, _) = watch::channel(false);
        Self { information: RwLock::new(None), logged, file: None }
    }

    /// Attach a session file, restoring the identity it holds (if any).
    pub fn with_file(file: SessionFile) -> Self {
        let restored = match file.load() {
            Ok(info) => info,
            Err(e) => {
                warn!(target: "session", path = %file.path().display(), "ignoring unreadable session file: {}", e);
                None
            }
        };
        let (logged, _) = watch::channel(restored.is_some());
        if let Some(info) = &restored {
            info!(target: "session", user = %info.username, "session restored");
        }
        Self { information: RwLock::new(restored), logged, file: Some(file) }
    }

    // Both mutations publish the signal before releasing the write guard, so
    // `logged()` always agrees with `information()`.
    pub fn log_in(&self, info: SessionInformation) {
        info!(target: "session", user = %info.username, admin = info.admin, "log in");
        let mut held = self.information.write();
        if let Some(file) = &self.file {
            if let Err(e) = file.save(&info) {
                warn!(target: "session", path = %file.path().display(), "failed to persist session: {}", e);
            }
        }
        *held = Some(info);
        self.logged.send_replace(true);
    }

    pub fn log_out(&self) {
        let mut held = self.information.write();
        if let Some(info) = held.take() {
            info!(target: "session", user = %info.username, "log out");
        }
        if let Some(file) = &self.file {
            if let Err(e) = file.clear() {
                warn!(target: "session", path = %file.path().display(), "failed to clear session file: {}", e);
            }
        }
        self.logged.send_replace(false);
    }

    /// Current value of the signal.
    pub fn logged(&self) -> bool {
        *self.logged.borrow()
    }

    pub fn information(&self) -> Option<SessionInformation> {
        self.information.read().clone()
    }

    pub fn is_admin(&self) -> bool {
        self.information.read().as_ref().map(|i| i.admin).unwrap_or(false)
    }

    pub fn user_id(&self) -> Option<u64> {
        self.information.read().as_ref().map(|i| i.id)
    }

    /// `Authorization` header value while logged in.
    pub fn authorization(&self) -> Option<String> {
        self.information.read().as_ref().map(|i| i.authorization())
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.logged.subscribe()
    }

    /// Fresh stream per call: yields the current value first, then every later change.
    /// Nothing is observed until the stream is polled. Ends when the store is dropped.
    pub fn is_logged(&self) -> impl Stream<Item = bool> + Send + 'static {
        let rx = self.logged.subscribe();
        stream::unfold((rx, true), |(mut rx, first)| async move {
            if !first && rx.changed().await.is_err() {
                return None;
            }
            let value = *rx.borrow_and_update();
            Some((value, (rx, false)))
        })
    }
}
