//! Client-side identity: the session store holding the logged-in user and the route
//! guards that consult it. Keep the public surface thin and split implementation across
//! sub-modules.

mod authorizer;
mod persist;
mod session;

pub use authorizer::{guard, Guard, GuardOutcome, Role};
pub use persist::SessionFile;
pub use session::SessionStore;
