use super::SessionStore;
use crate::model::SessionInformation;
use crate::ui::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Anonymous,
    User,
    Admin,
}

impl Role {
    pub fn of(info: Option<&SessionInformation>) -> Role {
        match info {
            None => Role::Anonymous,
            Some(i) if i.admin => Role::Admin,
            Some(_) => Role::User,
        }
    }
}

/// Access rule attached to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Screens for visitors only (login, register); a logged-in user is sent to the list.
    Unauthenticated,
    /// Needs an identity; anonymous visitors go to the login screen.
    Authenticated,
    /// Needs an admin identity; others fall back to the list (or login when anonymous).
    Admin,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    Redirect(Route),
}

impl Guard {
    pub fn for_route(route: &Route) -> Guard {
        match route {
            Route::Root | Route::Login | Route::Register => Guard::Unauthenticated,
            Route::Sessions | Route::SessionDetail(_) | Route::Me => Guard::Authenticated,
            Route::SessionCreate | Route::SessionUpdate(_) => Guard::Admin,
            Route::NotFound => Guard::Open,
        }
    }

    pub fn check(&self, role: Role) -> GuardOutcome {
        match (self, role) {
            (Guard::Open, _) => GuardOutcome::Allow,
            (Guard::Unauthenticated, Role::Anonymous) => GuardOutcome::Allow,
            (Guard::Unauthenticated, _) => GuardOutcome::Redirect(Route::Sessions),
            (Guard::Authenticated | Guard::Admin, Role::Anonymous) => GuardOutcome::Redirect(Route::Login),
            (Guard::Authenticated, _) => GuardOutcome::Allow,
            (Guard::Admin, Role::Admin) => GuardOutcome::Allow,
            (Guard::Admin, Role::User) => GuardOutcome::Redirect(Route::Sessions),
        }
    }
}

/// Run the guard of `route` against the identity currently held by `store`.
pub fn guard(route: &Route, store: &SessionStore) -> GuardOutcome {
    let info = store.information();
    Guard::for_route(route).check(Role::of(info.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(store: &SessionStore, admin: bool) {
        store.log_in(SessionInformation {
            token: "t".into(),
            token_type: "Bearer".into(),
            id: 1,
            username: "u".into(),
            first_name: "F".into(),
            last_name: "L".into(),
            admin,
        });
    }

    #[test]
    fn anonymous_is_sent_to_login() {
        let store = SessionStore::new();
        assert_eq!(guard(&Route::Login, &store), GuardOutcome::Allow);
        assert_eq!(guard(&Route::Register, &store), GuardOutcome::Allow);
        assert_eq!(guard(&Route::Sessions, &store), GuardOutcome::Redirect(Route::Login));
        assert_eq!(guard(&Route::Me, &store), GuardOutcome::Redirect(Route::Login));
        assert_eq!(guard(&Route::SessionCreate, &store), GuardOutcome::Redirect(Route::Login));
        assert_eq!(guard(&Route::NotFound, &store), GuardOutcome::Allow);
    }

    #[test]
    fn user_cannot_reach_admin_screens() {
        let store = SessionStore::new();
        login(&store, false);
        assert_eq!(guard(&Route::SessionDetail(1), &store), GuardOutcome::Allow);
        assert_eq!(guard(&Route::SessionCreate, &store), GuardOutcome::Redirect(Route::Sessions));
        assert_eq!(guard(&Route::SessionUpdate(3), &store), GuardOutcome::Redirect(Route::Sessions));
        assert_eq!(guard(&Route::Login, &store), GuardOutcome::Redirect(Route::Sessions));
    }

    #[test]
    fn admin_reaches_everything_but_visitor_screens() {
        let store = SessionStore::new();
        login(&store, true);
        assert_eq!(guard(&Route::SessionCreate, &store), GuardOutcome::Allow);
        assert_eq!(guard(&Route::SessionUpdate(3), &store), GuardOutcome::Allow);
        assert_eq!(guard(&Route::Root, &store), GuardOutcome::Redirect(Route::Sessions));
    }
}
