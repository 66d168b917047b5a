use eframe::egui;
use snafu::Snafu;
use std::path::{Path, PathBuf};
use url::Url;

#[derive(Debug, Snafu, PartialEq)]
pub enum PickError {
    #[snafu(display("Invalid file type"))]
    InvalidType { path: PathBuf },
    #[snafu(display("Please drop a folder"))]
    NotADirectory { path: PathBuf },
    #[snafu(display("Not a local file"))]
    NotLocal { uri: String },
}

/// What a picker will accept.
#[derive(Debug, Clone, PartialEq)]
pub enum PathConstraint {
    /// Lowercased path must end with one of these suffixes, e.g. `.html`.
    Extensions(Vec<String>),
    Directory,
}

impl PathConstraint {
    pub fn check(&self, path: &Path) -> Result<(), PickError> {
        match self {
            Self::Directory => {
                if path.is_dir() {
                    Ok(())
                } else {
                    NotADirectorySnafu { path }.fail()
                }
            }
            Self::Extensions(exts) => {
                let lowered = path.to_string_lossy().to_lowercase();
                if exts.iter().any(|ext| lowered.ends_with(&ext.to_lowercase())) {
                    Ok(())
                } else {
                    InvalidTypeSnafu { path }.fail()
                }
            }
        }
    }
}

/// A single dropped item.
#[derive(Debug, Clone, PartialEq)]
pub enum DropEntry {
    Local(PathBuf),
    /// A URI that does not name a local file, such as `https://...`.
    Remote(String),
}

impl DropEntry {
    /// Resolves a dropped URI or plain path string.
    pub fn from_uri(uri: &str) -> Self {
        match Url::parse(uri) {
            Ok(url) if url.scheme() == "file" => match url.to_file_path() {
                Ok(path) => Self::Local(path),
                Err(()) => Self::Remote(uri.to_string()),
            },
            // Anything else is a URI only with an authority part; `C:\...` and
            // `notes:v2.html` are plain paths.
            Ok(_) if uri.contains("://") => Self::Remote(uri.to_string()),
            _ => Self::Local(PathBuf::from(uri)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DropPayload {
    None,
    Single(DropEntry),
    Multiple(Vec<DropEntry>),
}

impl DropPayload {
    pub fn from_entries(mut entries: Vec<DropEntry>) -> Self {
        match entries.len() {
            0 => Self::None,
            1 => Self::Single(entries.remove(0)),
            _ => Self::Multiple(entries),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_uris<S: AsRef<str>>(uris: &[S]) -> Self {
        Self::from_entries(uris.iter().map(|uri| DropEntry::from_uri(uri.as_ref())).collect())
    }

    pub fn from_dropped(files: &[egui::DroppedFile]) -> Self {
        Self::from_entries(
            files
                .iter()
                .map(|file| match &file.path {
                    Some(path) => DropEntry::Local(path.clone()),
                    None => DropEntry::from_uri(&file.name),
                })
                .collect(),
        )
    }

    /// Only the first entry of a drop is ever used.
    pub fn first(&self) -> Option<&DropEntry> {
        match self {
            Self::None => None,
            Self::Single(entry) => Some(entry),
            Self::Multiple(entries) => entries.first(),
        }
    }
}

/// A drop region with a browse button holding one validated path.
pub struct PathPicker {
    path: Option<PathBuf>,
    constraint: PathConstraint,
    label: String,
    placeholder: String,
    dialog_title: String,
    filter_name: String,
}

impl PathPicker {
    pub fn file(placeholder: &str, dialog_title: &str, filter_name: &str, extensions: &[&str]) -> Self {
        Self::new(
            PathConstraint::Extensions(extensions.iter().map(|ext| ext.to_string()).collect()),
            placeholder,
            dialog_title,
            filter_name,
        )
    }

    pub fn folder(placeholder: &str, dialog_title: &str) -> Self {
        Self::new(PathConstraint::Directory, placeholder, dialog_title, "")
    }

    fn new(constraint: PathConstraint, placeholder: &str, dialog_title: &str, filter_name: &str) -> Self {
        Self {
            path: None,
            constraint,
            label: placeholder.to_string(),
            placeholder: placeholder.to_string(),
            dialog_title: dialog_title.to_string(),
            filter_name: filter_name.to_string(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether `entry` would pass validation, without touching any state.
    pub fn accepts(&self, entry: &DropEntry) -> bool {
        match entry {
            DropEntry::Local(path) => self.constraint.check(path).is_ok(),
            DropEntry::Remote(_) => false,
        }
    }

    /// Validates and stores `path`. On rejection the stored path is kept and
    /// the label shows the reason.
    pub fn accept(&mut self, path: PathBuf) -> Result<(), PickError> {
        if let Err(e) = self.constraint.check(&path) {
            tracing::debug!(path = %path.display(), reason = %e, "Rejected path");
            self.label = e.to_string();
            return Err(e);
        }

        self.label = match self.constraint {
            PathConstraint::Directory => path.display().to_string(),
            PathConstraint::Extensions(_) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        };
        self.path = Some(path);
        Ok(())
    }

    /// Returns `Ok(false)` when the payload is empty.
    pub fn accept_drop(&mut self, payload: &DropPayload) -> Result<bool, PickError> {
        match payload.first() {
            None => Ok(false),
            Some(DropEntry::Local(path)) => self.accept(path.clone()).map(|()| true),
            Some(DropEntry::Remote(uri)) => {
                let e = PickError::NotLocal { uri: uri.clone() };
                self.label = e.to_string();
                Err(e)
            }
        }
    }

    pub fn reset(&mut self) {
        self.path = None;
        self.label = self.placeholder.clone();
    }

    // Return true if the path was changed
    pub fn browse(&mut self) -> bool {
        let mut dialog = rfd::FileDialog::new().set_title(&self.dialog_title);
        if let Some(dir) = self.path.as_deref().and_then(Path::parent) {
            dialog = dialog.set_directory(dir);
        }

        let picked = match &self.constraint {
            PathConstraint::Directory => dialog.pick_folder(),
            PathConstraint::Extensions(exts) => {
                let exts: Vec<&str> = exts.iter().map(|ext| ext.trim_start_matches('.')).collect();
                dialog.add_filter(&self.filter_name, &exts).pick_file()
            }
        };

        match picked {
            Some(path) => self.accept(path).is_ok(),
            None => false,
        }
    }

    /// Draws the title, drop region and browse button. Dropped files are
    /// routed by the caller, which also decides whether this region is the
    /// one a hovering drag will land on.
    pub fn show(&mut self, ui: &mut egui::Ui, title: &str, highlighted: bool) {
        ui.label(title);

        let mut frame = egui::Frame::group(ui.style());
        if highlighted {
            frame = frame.stroke(ui.visuals().selection.stroke);
        }

        frame.show(ui, |ui| {
            ui.set_min_height(48.0);
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                let text = egui::RichText::new(&self.label);
                if self.path.is_some() {
                    ui.label(text.strong());
                } else {
                    ui.label(text.weak());
                }
            });
        });

        if ui.button(format!("{}...", self.dialog_title)).clicked() {
            self.browse();
        }
    }
}
