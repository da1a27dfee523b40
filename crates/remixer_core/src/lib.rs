//! Remixer core: pure interaction state machine and view-model helpers.
mod effect;
mod mode;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use mode::RemixMode;
pub use msg::{Msg, RemixOutcome};
pub use state::{AppState, RequestId, PROCESSING_FAILURE_TEXT};
pub use update::update;
pub use view_model::{AppViewModel, BUSY_BUTTON_LABEL, IDLE_BUTTON_LABEL};
