use std::fmt;
use std::str::FromStr;

/// Every screen of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Root,
    Login,
    Register,
    Sessions,
    SessionDetail(u64),
    SessionCreate,
    SessionUpdate(u64),
    Me,
    NotFound,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Root => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Sessions => "/sessions".to_string(),
            Route::SessionDetail(id) => format!("/sessions/detail/{}", id),
            Route::SessionCreate => "/sessions/create".to_string(),
            Route::SessionUpdate(id) => format!("/sessions/update/{}", id),
            Route::Me => "/me".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Unknown paths resolve to [`Route::NotFound`]. Leading/trailing slashes, a query
    /// string and a fragment are ignored, so `sessions` and `/sessions/` are the same.
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Root,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["sessions"] => Route::Sessions,
            ["sessions", "create"] => Route::SessionCreate,
            ["sessions", "detail", id] => id.parse().map(Route::SessionDetail).unwrap_or(Route::NotFound),
            ["sessions", "update", id] => id.parse().map(Route::SessionUpdate).unwrap_or(Route::NotFound),
            ["me"] => Route::Me,
            _ => Route::NotFound,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Route::parse(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_matches_path() {
        for route in [
            Route::Root,
            Route::Login,
            Route::Register,
            Route::Sessions,
            Route::SessionDetail(1),
            Route::SessionCreate,
            Route::SessionUpdate(42),
            Route::Me,
            Route::NotFound,
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn parse_is_lenient_about_slashes_and_query() {
        assert_eq!(Route::parse(""), Route::Root);
        assert_eq!(Route::parse("sessions"), Route::Sessions);
        assert_eq!(Route::parse("/sessions/"), Route::Sessions);
        assert_eq!(Route::parse("/sessions/detail/2?tab=info"), Route::SessionDetail(2));
        assert_eq!(Route::parse("/sessions/update/x"), Route::NotFound);
        assert_eq!(Route::parse("/rentals"), Route::NotFound);
        assert_eq!("/me".parse::<Route>().unwrap(), Route::Me);
        assert_eq!(Route::SessionUpdate(3).to_string(), "/sessions/update/3");
    }
}
