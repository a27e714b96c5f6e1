use lotto_core::PickerConfig;
use lotto_picker::Picker;

// AppState holds the session model; nothing in it outlives the process.
#[derive(Debug)]
pub struct AppState {
    pub picker: Picker,
}

impl AppState {
    #[must_use]
    pub fn new(config: PickerConfig) -> Self {
        Self {
            picker: Picker::new(config),
        }
    }
}

// UiState holds presentation-only flags that are not part of the model.
#[derive(Debug, Default)]
pub struct UiState {
    pub scroll_history_to_bottom: bool,
}

impl UiState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_history_scroll(&mut self) {
        self.scroll_history_to_bottom = true;
    }

    // Called once the history log has been drawn with the scroll applied.
    pub fn finish_history_scroll(&mut self) {
        self.scroll_history_to_bottom = false;
    }
}

#[cfg(test)]
mod tests {
    use super::UiState;

    #[test]
    fn history_scroll_is_requested_until_finished() {
        let mut ui_state = UiState::new();
        assert!(!ui_state.scroll_history_to_bottom);

        ui_state.request_history_scroll();
        ui_state.request_history_scroll();
        assert!(ui_state.scroll_history_to_bottom);

        ui_state.finish_history_scroll();
        assert!(!ui_state.scroll_history_to_bottom);
    }
}
