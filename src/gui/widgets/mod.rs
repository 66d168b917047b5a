mod status_display;
mod path_picker;

pub use status_display::{StatusDisplay, StatusTone};
pub use path_picker::{DropEntry, DropPayload, PathConstraint, PathPicker, PickError};
