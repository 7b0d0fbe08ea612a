//! Navigation, notices and the context object every view controller receives.

mod context;
mod notify;
mod route;
mod router;

pub use context::ViewContext;
pub use notify::{Notice, Notifier};
pub use route::Route;
pub use router::Router;
