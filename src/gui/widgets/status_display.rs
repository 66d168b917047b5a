use eframe::egui;

const READY: &str = "Ready";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Success,
    Warning,
    Error,
}

pub struct StatusDisplay {
    message: String,
    tone: StatusTone,
}

impl Default for StatusDisplay {
    fn default() -> Self {
        Self {
            message: READY.to_string(),
            tone: StatusTone::Idle,
        }
    }
}

impl StatusDisplay {
    pub fn set_message(&mut self, message: impl Into<String>, tone: StatusTone) {
        self.message = message.into();
        self.tone = tone;
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.set_message(message, StatusTone::Success);
    }

    pub fn set_warning(&mut self, message: impl Into<String>) {
        self.set_message(message, StatusTone::Warning);
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.set_message(message, StatusTone::Error);
    }

    /// Back to the gray "Ready" line.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn tone(&self) -> StatusTone {
        self.tone
    }

    pub fn is_ready(&self) -> bool {
        self.tone == StatusTone::Idle && self.message == READY
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        let visuals = &ui.style().visuals;
        let color = match self.tone {
            StatusTone::Idle => egui::Color32::GRAY,
            StatusTone::Success => egui::Color32::from_rgb(76, 175, 80),
            StatusTone::Warning => visuals.warn_fg_color,
            StatusTone::Error => visuals.error_fg_color,
        };
        ui.colored_label(color, &self.message);
    }
}
