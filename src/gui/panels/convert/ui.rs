use super::actions;
use super::state::{ConvertPanelState, DropTarget};
use crate::gui::widgets::{DropEntry, DropPayload, PathPicker};
use crate::render::Renderer;
use eframe::egui;
use std::path::{Path, PathBuf};

const GREEN: egui::Color32 = egui::Color32::from_rgb(76, 175, 80);
const RED: egui::Color32 = egui::Color32::from_rgb(244, 67, 54);

pub fn render_panel(
    ui: &mut egui::Ui,
    state: &mut ConvertPanelState,
    renderer: &dyn Renderer,
    start_dir: Option<&Path>,
) -> Option<PathBuf> {
    let highlight = hover_highlight(ui, state);
    state.regions = vec![
        (DropTarget::Html, render_region(ui, &mut state.html, "HTML file:", highlight == Some(DropTarget::Html))),
        (
            DropTarget::Stylesheet,
            render_region(ui, &mut state.stylesheet, "CSS file (optional):", highlight == Some(DropTarget::Stylesheet)),
        ),
        (
            DropTarget::Assets,
            render_region(ui, &mut state.assets, "Assets folder (optional):", highlight == Some(DropTarget::Assets)),
        ),
    ];
    handle_drops(ui, state);

    ui.add_space(12.0);
    let mut written = None;
    ui.horizontal(|ui| {
        if ui.add(filled_button("Create PDF", GREEN)).clicked() {
            written = actions::run_conversion(state, renderer, |html| actions::prompt_output(start_dir, html));
        }
        if ui.add(filled_button("Reset", RED)).clicked() {
            state.reset();
        }
        if let Some(output) = state.last_output.clone() {
            if ui.button("Open PDF").clicked() {
                actions::open_output(state, &output);
            }
        }
    });

    ui.separator();
    state.status.show(ui);
    written
}

fn render_region(ui: &mut egui::Ui, picker: &mut PathPicker, title: &str, highlighted: bool) -> egui::Rect {
    let rect = ui
        .vertical(|ui| {
            picker.show(ui, title, highlighted);
        })
        .response
        .rect;
    ui.add_space(8.0);
    rect
}

fn filled_button(text: &str, fill: egui::Color32) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text).strong().color(egui::Color32::WHITE)).fill(fill)
}

/// Region containing `pointer`, if any.
pub fn hovered_target(regions: &[(DropTarget, egui::Rect)], pointer: Option<egui::Pos2>) -> Option<DropTarget> {
    let pos = pointer?;
    regions
        .iter()
        .find(|(_, rect)| rect.contains(pos))
        .map(|(target, _)| *target)
}

/// The region a file currently dragged over the window would land on,
/// judged against last frame's layout.
fn hover_highlight(ui: &egui::Ui, state: &ConvertPanelState) -> Option<DropTarget> {
    let (hovered, pointer) = ui.ctx().input(|i| {
        (
            i.raw.hovered_files.first().and_then(|file| file.path.clone()),
            i.pointer.latest_pos(),
        )
    });
    let entry = DropEntry::Local(hovered?);
    Some(actions::drop_target(state, &entry, hovered_target(&state.regions, pointer)))
}

fn handle_drops(ui: &egui::Ui, state: &mut ConvertPanelState) {
    let (dropped, pointer) = ui.ctx().input(|i| (i.raw.dropped_files.clone(), i.pointer.latest_pos()));
    if dropped.is_empty() {
        return;
    }

    let hovered = hovered_target(&state.regions, pointer);
    actions::route_drop(state, &DropPayload::from_dropped(&dropped), hovered);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regions() -> Vec<(DropTarget, egui::Rect)> {
        vec![
            (DropTarget::Html, egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(400.0, 100.0))),
            (DropTarget::Stylesheet, egui::Rect::from_min_size(egui::pos2(0.0, 110.0), egui::vec2(400.0, 100.0))),
            (DropTarget::Assets, egui::Rect::from_min_size(egui::pos2(0.0, 220.0), egui::vec2(400.0, 100.0))),
        ]
    }

    #[test]
    fn test_hovered_target_lookup() {
        let regions = regions();

        assert_eq!(hovered_target(&regions, Some(egui::pos2(50.0, 50.0))), Some(DropTarget::Html));
        assert_eq!(hovered_target(&regions, Some(egui::pos2(50.0, 150.0))), Some(DropTarget::Stylesheet));
        assert_eq!(hovered_target(&regions, Some(egui::pos2(50.0, 300.0))), Some(DropTarget::Assets));
        assert_eq!(hovered_target(&regions, Some(egui::pos2(50.0, 105.0))), None);
        assert_eq!(hovered_target(&regions, Some(egui::pos2(500.0, 50.0))), None);
        assert_eq!(hovered_target(&regions, None), None);
        assert_eq!(hovered_target(&[], Some(egui::pos2(50.0, 50.0))), None);
    }
}
