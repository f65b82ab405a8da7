//! Tab navigator: which bottom-bar destination is active.
//!
//! Selection mutates navigator-local state only; it never touches the
//! movies screen model.

mod intent;
mod reducer;
mod state;

pub use intent::NavIntent;
pub use reducer::NavReducer;
pub use state::{NavState, TabId};
