use super::state::{ConvertPanelState, DropTarget};
use crate::convert::{base_dir_of, convert, Conversion, ConvertError};
use crate::gui::widgets::{DropEntry, DropPayload};
use crate::render::Renderer;
use std::path::{Path, PathBuf};

/// Picks the region a dropped item belongs to. The first of the hovered
/// region and the region matching the item's kind that would accept it
/// wins. When neither accepts, the item goes to the hovered region, or the
/// kind's region, so the rejection shows up there.
///
/// The pointer position is unreliable during OS drags, so a region only wins
/// on hover when it actually takes the item.
pub fn drop_target(state: &ConvertPanelState, entry: &DropEntry, hovered: Option<DropTarget>) -> DropTarget {
    let by_kind = DropTarget::classify(entry);
    hovered
        .into_iter()
        .chain(Some(by_kind))
        .find(|target| state.picker(*target).accepts(entry))
        .or(hovered)
        .unwrap_or(by_kind)
}

/// Hands a drop to the picker chosen by [`drop_target`].
pub fn route_drop(state: &mut ConvertPanelState, payload: &DropPayload, hovered: Option<DropTarget>) -> Option<DropTarget> {
    let entry = payload.first()?;
    let target = drop_target(state, entry, hovered);

    match state.picker_mut(target).accept_drop(payload) {
        Ok(_) => tracing::debug!(?target, "Accepted drop"),
        Err(e) => tracing::debug!(?target, reason = %e, "Rejected drop"),
    }
    Some(target)
}

/// Runs a conversion and reports the outcome on the status line. Returns the
/// written file on success.
pub fn run_conversion<R, P>(state: &mut ConvertPanelState, renderer: &R, prompt_output: P) -> Option<PathBuf>
where
    R: Renderer + ?Sized,
    P: FnOnce(&Path) -> Option<PathBuf>,
{
    match convert(renderer, &state.inputs(), prompt_output) {
        Ok(Conversion::Written(output)) => {
            state.status.set_success(format!("PDF created: {}", output.display()));
            state.last_output = Some(output.clone());
            Some(output)
        }
        Ok(Conversion::Cancelled) => None,
        Err(e @ ConvertError::MissingInput) => {
            state.status.set_warning(e.to_string());
            None
        }
        Err(e) => {
            tracing::error!(error = %e, "Conversion failed");
            state.status.set_error(format!("Error: {}", e));
            None
        }
    }
}

pub fn prompt_output(start_dir: Option<&Path>, html: &Path) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Save PDF As")
        .set_directory(start_dir.unwrap_or(base_dir_of(html)))
        .set_file_name("output.pdf")
        .add_filter("PDF files", &["pdf"])
        .save_file()
}

pub fn open_output(state: &mut ConvertPanelState, output: &Path) {
    if let Err(e) = open::that(output) {
        tracing::warn!(path = %output.display(), error = %e, "Failed to open PDF");
        state.status.set_error(format!("Error: could not open {}: {}", output.display(), e));
    }
}
