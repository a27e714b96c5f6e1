use eframe::egui::{Label, RichText, Ui, Widget as _};
use lotto_picker::PickerStatus;

#[derive(Debug, Clone)]
pub struct StatusLineViewModel {
    status: PickerStatus,
    text: String,
}

impl StatusLineViewModel {
    #[must_use]
    pub fn new(status: PickerStatus, text: String) -> Self {
        Self { status, text }
    }

    #[must_use]
    pub fn status(&self) -> PickerStatus {
        self.status
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

pub fn show(ui: &mut Ui, vm: &StatusLineViewModel) {
    let color = if vm.status.is_cleared() {
        ui.visuals().text_color()
    } else {
        ui.visuals().hyperlink_color
    };
    ui.vertical_centered(|ui| {
        Label::new(RichText::new(vm.text()).color(color).size(16.0)).ui(ui);
    });
}
