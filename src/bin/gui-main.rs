use eframe::egui::ViewportBuilder;
use pdfdrop::gui::config::GuiConfig;
use pdfdrop::gui::PdfDropGui;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pdfdrop=info")))
        .init();

    let config = GuiConfig::load();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(config.window_size())
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "HTML to PDF",
        options,
        Box::new(move |_cc| Ok(Box::new(PdfDropGui::from_config(config))))
    )
}
