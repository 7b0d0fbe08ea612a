use futures_util::Stream;

use crate::ui::{Route, ViewContext};

/// Top-level shell: the navigation bar reacts to the logged-in signal.
pub struct AppController {
    ctx: ViewContext,
}

impl AppController {
    pub fn new(ctx: ViewContext) -> Self {
        Self { ctx }
    }

    pub fn is_logged(&self) -> impl Stream<Item = bool> + Send + 'static {
        self.ctx.session.is_logged()
    }

    pub fn logout(&self) -> Route {
        self.ctx.session.log_out();
        self.ctx.router.navigate(Route::Root)
    }
}
