use eframe::egui::{Button, Color32, RichText, Ui, Vec2};
use lotto_picker::SlotIndex;

use crate::{
    action::{Action, ActionRequestQueue},
    ui::slot_theme::SlotPalette,
};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SlotVisualState: u8 {
        const FILLED = 0b0000_0001;
        const HIGHLIGHTED = 0b0000_0010;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotCell {
    pub index: SlotIndex,
    pub label: String,
    pub visual_state: SlotVisualState,
}

#[derive(Debug, Clone)]
pub struct SlotsViewModel {
    cells: Vec<SlotCell>,
}

impl SlotsViewModel {
    #[must_use]
    pub fn new(cells: Vec<SlotCell>) -> Self {
        Self { cells }
    }

    #[must_use]
    pub fn cells(&self) -> &[SlotCell] {
        &self.cells
    }
}

pub const SLOT_SIZE: Vec2 = Vec2::new(56.0, 44.0);
const SLOT_FONT_SIZE: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EffectiveSlotVisualState(SlotVisualState);

impl EffectiveSlotVisualState {
    fn fill_color(self, palette: &SlotPalette) -> Color32 {
        if self.0.contains(SlotVisualState::HIGHLIGHTED) {
            return palette.fill_highlighted;
        }
        if self.0.contains(SlotVisualState::FILLED) {
            return palette.fill_filled;
        }
        palette.fill_empty
    }

    fn text_color(self, palette: &SlotPalette) -> Color32 {
        if self.0.contains(SlotVisualState::HIGHLIGHTED) {
            return palette.text_highlighted;
        }
        if self.0.contains(SlotVisualState::FILLED) {
            return palette.text_filled;
        }
        palette.text_placeholder
    }
}

pub fn show(ui: &mut Ui, vm: &SlotsViewModel, action_queue: &mut ActionRequestQueue) {
    let palette = SlotPalette::from_visuals(ui.visuals());
    ui.horizontal(|ui| {
        for cell in vm.cells() {
            let state = EffectiveSlotVisualState(cell.visual_state);
            let text = RichText::new(&cell.label)
                .size(SLOT_FONT_SIZE)
                .color(state.text_color(&palette));
            let button = Button::new(text)
                .min_size(SLOT_SIZE)
                .fill(state.fill_color(&palette));
            let response = ui.add(button);
            let response = if cell.visual_state.contains(SlotVisualState::FILLED) {
                response.on_hover_text(format!(
                    "Mark as favorite ({})",
                    cell.index.get() + 1
                ))
            } else {
                response
            };
            if response.clicked() {
                action_queue.request(Action::ToggleSlot(cell.index));
            }
        }
    });
}
