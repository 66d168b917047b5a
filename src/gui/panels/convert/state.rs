use crate::convert::ConversionInputs;
use crate::gui::widgets::{DropEntry, PathPicker, StatusDisplay};
use eframe::egui;
use std::path::{Path, PathBuf};

/// Which picker a drop lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    Html,
    Stylesheet,
    Assets,
}

impl DropTarget {
    /// Guesses the target from the dropped item itself, for drops that did not
    /// land on a region.
    pub fn classify(entry: &DropEntry) -> Self {
        match entry {
            DropEntry::Local(path) if path.is_dir() => Self::Assets,
            DropEntry::Local(path) if path.to_string_lossy().to_lowercase().ends_with(".css") => Self::Stylesheet,
            _ => Self::Html,
        }
    }
}

pub struct ConvertPanelState {
    pub html: PathPicker,
    pub stylesheet: PathPicker,
    pub assets: PathPicker,
    pub status: StatusDisplay,
    /// Output of the last successful conversion.
    pub last_output: Option<PathBuf>,
    /// Screen area of each drop region as laid out last frame.
    pub regions: Vec<(DropTarget, egui::Rect)>,
}

impl Default for ConvertPanelState {
    fn default() -> Self {
        Self {
            html: PathPicker::file("Drop HTML file here", "Select HTML File", "HTML files", &[".html", ".htm"]),
            stylesheet: PathPicker::file("Drop CSS file here (optional)", "Select CSS File", "CSS files", &[".css"]),
            assets: PathPicker::folder("Drop assets folder here (optional)", "Select Assets Folder"),
            status: StatusDisplay::default(),
            last_output: None,
            regions: Vec::new(),
        }
    }
}

impl ConvertPanelState {
    pub fn inputs(&self) -> ConversionInputs {
        ConversionInputs {
            html: self.html.path().map(Path::to_path_buf),
            stylesheet: self.stylesheet.path().map(Path::to_path_buf),
            assets: self.assets.path().map(Path::to_path_buf),
        }
    }

    pub fn picker(&self, target: DropTarget) -> &PathPicker {
        match target {
            DropTarget::Html => &self.html,
            DropTarget::Stylesheet => &self.stylesheet,
            DropTarget::Assets => &self.assets,
        }
    }

    pub fn picker_mut(&mut self, target: DropTarget) -> &mut PathPicker {
        match target {
            DropTarget::Html => &mut self.html,
            DropTarget::Stylesheet => &mut self.stylesheet,
            DropTarget::Assets => &mut self.assets,
        }
    }

    pub fn reset(&mut self) {
        self.html.reset();
        self.stylesheet.reset();
        self.assets.reset();
        self.status.reset();
        self.last_output = None;
    }
}
