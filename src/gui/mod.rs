pub mod widgets;
pub mod panels;
pub mod config;

#[cfg(test)]
mod tests;

use eframe::egui;
use std::path::Path;
use crate::gui::config::GuiConfig;
use crate::gui::panels::convert::ConvertPanel;
use crate::render::WeasyPrint;

pub struct PdfDropGui {
    config: GuiConfig,
    renderer: WeasyPrint,
    convert_panel: ConvertPanel,
}

impl PdfDropGui {
    pub fn from_config(config: GuiConfig) -> Self {
        Self {
            renderer: WeasyPrint::new(&config.renderer),
            config,
            convert_panel: ConvertPanel::default(),
        }
    }

    fn save_config(&self) {
        if let Err(e) = self.config.save() {
            tracing::warn!(error = %e, "Failed to save config");
        }
    }
}

impl eframe::App for PdfDropGui {
    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        self.save_config();
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.config.window_size = (rect.width(), rect.height());
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("HTML to PDF");
                ui.separator();
                ui.weak(format!("renderer: {}", self.renderer.program()));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let start_dir = self.config.last_output_dir.as_deref();
                if let Some(output) = self.convert_panel.show(ui, &self.renderer, start_dir) {
                    self.config.last_output_dir = output.parent().map(Path::to_path_buf);
                    self.save_config();
                }
            });
        });

        // Keep the drop highlight in sync while files hover over the window.
        if ctx.input(|i| !i.raw.hovered_files.is_empty()) {
            ctx.request_repaint();
        }
    }
}
