pub mod actions;
mod panel;
pub mod state;
mod ui;

pub use panel::ConvertPanel;
pub use state::{ConvertPanelState, DropTarget};
