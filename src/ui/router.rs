use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info};

use super::Route;
use crate::identity::{guard, GuardOutcome, SessionStore};

// Guards always redirect towards a route its own guard allows; the cap only stops a
// misconfigured table from spinning.
const MAX_REDIRECTS: usize = 4;

/// Navigation history with route guards.
pub struct Router {
    session: Arc<SessionStore>,
    history: Mutex<Vec<Route>>,
}

impl Router {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session, history: Mutex::new(Vec::new()) }
    }

    /// Navigate to `route`, following guard redirects. Returns the route actually reached.
    pub fn navigate(&self, route: Route) -> Route {
        let mut target = route;
        for _ in 0..MAX_REDIRECTS {
            match guard(&target, &self.session) {
                GuardOutcome::Allow => break,
                GuardOutcome::Redirect(next) => {
                    debug!(target: "router", from = %target, to = %next, "guard redirect");
                    target = next;
                }
            }
        }
        info!(target: "router", requested = %route, reached = %target, "navigate");
        self.history.lock().push(target);
        target
    }

    pub fn navigate_path(&self, path: &str) -> Route {
        self.navigate(Route::parse(path))
    }

    /// Route on top of the history, if anything was visited.
    pub fn current(&self) -> Option<Route> {
        self.history.lock().last().copied()
    }

    /// Pop the current route and return the one below it.
    pub fn back(&self) -> Option<Route> {
        let mut history = self.history.lock();
        if history.len() > 1 {
            history.pop();
        }
        history.last().copied()
    }

    pub fn history(&self) -> Vec<Route> {
        self.history.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SessionInformation;

    fn logged_in(admin: bool) -> Arc<SessionStore> {
        let store = Arc::new(SessionStore::new());
        store.log_in(SessionInformation {
            token: "t".into(),
            token_type: "Bearer".into(),
            id: 1,
            username: "john.doe".into(),
            first_name: "John".into(),
            last_name: "Doe".into(),
            admin,
        });
        store
    }

    #[test]
    fn navigate_records_reached_route() {
        let router = Router::new(logged_in(true));
        assert_eq!(router.navigate(Route::Sessions), Route::Sessions);
        assert_eq!(router.navigate(Route::SessionUpdate(1)), Route::SessionUpdate(1));
        assert_eq!(router.current(), Some(Route::SessionUpdate(1)));
        assert_eq!(router.history(), vec![Route::Sessions, Route::SessionUpdate(1)]);
    }

    #[test]
    fn guard_redirects_are_followed() {
        let anonymous = Router::new(Arc::new(SessionStore::new()));
        assert_eq!(anonymous.navigate(Route::SessionCreate), Route::Login);

        let user = Router::new(logged_in(false));
        assert_eq!(user.navigate_path("/sessions/create"), Route::Sessions);
        assert_eq!(user.navigate_path("/login"), Route::Sessions);
    }

    #[test]
    fn back_keeps_the_first_entry() {
        let router = Router::new(logged_in(false));
        assert_eq!(router.back(), None);
        router.navigate(Route::Sessions);
        router.navigate(Route::SessionDetail(1));
        assert_eq!(router.back(), Some(Route::Sessions));
        assert_eq!(router.back(), Some(Route::Sessions));
    }
}
