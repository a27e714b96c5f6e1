use lotto_picker::{Picker, SlotIndex};

use crate::{
    state::{AppState, UiState},
    ui::{
        controls::ControlsViewModel,
        history_log::HistoryLogViewModel,
        picker_screen::PickerScreenViewModel,
        slots::{SlotCell, SlotVisualState, SlotsViewModel},
        status_line::StatusLineViewModel,
    },
    version,
};

fn build_slots(picker: &Picker) -> Vec<SlotCell> {
    picker
        .slots()
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            let mut visual_state = SlotVisualState::empty();
            if !slot.is_empty() {
                visual_state |= SlotVisualState::FILLED;
            }
            if slot.is_highlighted() {
                visual_state |= SlotVisualState::HIGHLIGHTED;
            }
            SlotCell {
                index: SlotIndex::new(i),
                label: slot.label(),
                visual_state,
            }
        })
        .collect()
}

#[must_use]
pub fn build_picker_screen_view_model(
    app_state: &AppState,
    ui_state: &UiState,
) -> PickerScreenViewModel {
    let picker = &app_state.picker;
    let config = picker.config();

    let controls_vm = ControlsViewModel::new(config.pool(), config.pick_count());
    let slots_vm = SlotsViewModel::new(build_slots(picker));
    let status_line_vm = StatusLineViewModel::new(picker.status(), picker.status_text());
    let history_log_vm = HistoryLogViewModel::new(
        picker.history().lines().collect(),
        ui_state.scroll_history_to_bottom,
    );

    PickerScreenViewModel::new(
        controls_vm,
        slots_vm,
        status_line_vm,
        history_log_vm,
        version::build_version(),
    )
}
