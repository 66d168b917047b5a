use super::state::ConvertPanelState;
use super::ui;
use crate::render::Renderer;
use eframe::egui;
use std::path::{Path, PathBuf};

#[derive(Default)]
pub struct ConvertPanel {
    state: ConvertPanelState,
}

impl ConvertPanel {
    /// Returns the written PDF when a conversion succeeded this frame.
    pub fn show(&mut self, ui: &mut egui::Ui, renderer: &dyn Renderer, start_dir: Option<&Path>) -> Option<PathBuf> {
        ui::render_panel(ui, &mut self.state, renderer, start_dir)
    }
}
