use crate::{
    action::{Action, ActionRequestQueue},
    state::{AppState, UiState},
};

pub fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
    }
}

pub fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    let picker = &mut app_state.picker;
    match action {
        Action::Generate => {
            let seed = picker.generate();
            if let Some(draw) = picker.current_draw() {
                log::info!("picked {draw} (seed {seed})");
            }
            ui_state.request_history_scroll();
        }
        Action::Clear => {
            picker.clear();
            log::info!("cleared slots");
        }
        Action::ToggleSlot(index) => {
            if picker.toggle_slot(index) {
                log::debug!(
                    "slot {index} highlight: {}",
                    picker.slot(index).is_highlighted()
                );
            }
        }
    }
}
