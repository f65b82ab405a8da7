//! Detail overlay: a centered sheet showing one movie's full record.

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render;
pub use intent::DetailIntent;
pub use reducer::DetailReducer;
pub use state::DetailOverlayState;
