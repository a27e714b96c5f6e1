use eframe::egui::{Align, Frame, RichText, ScrollArea, Ui};

#[derive(Debug, Clone)]
pub struct HistoryLogViewModel {
    lines: Vec<String>,
    scroll_to_bottom: bool,
}

impl HistoryLogViewModel {
    #[must_use]
    pub fn new(lines: Vec<String>, scroll_to_bottom: bool) -> Self {
        Self {
            lines,
            scroll_to_bottom,
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn scroll_to_bottom(&self) -> bool {
        self.scroll_to_bottom
    }
}

// Read-only: lines are plain labels, so nothing in the log can be edited.
pub fn show(ui: &mut Ui, vm: &HistoryLogViewModel) {
    ui.label("History:");
    Frame::group(ui.style()).show(ui, |ui| {
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if vm.lines.is_empty() {
                    ui.weak("No draws yet");
                }
                for line in &vm.lines {
                    ui.label(RichText::new(line).monospace());
                }
                if vm.scroll_to_bottom {
                    ui.scroll_to_cursor(Some(Align::BOTTOM));
                }
            });
    });
}
