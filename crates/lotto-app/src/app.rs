//! Lotto Picker desktop application UI.
//!
//! # Design Notes
//! - `AppState` (the `Picker`) is the only source of truth; every frame the
//!   window is rebuilt from a view model derived from it.
//! - Widgets and keyboard shortcuts never touch the model directly. They push
//!   `Action`s into a queue that is drained by `action_handler`.

use eframe::{
    App, Frame, NativeOptions,
    egui::{CentralPanel, Context},
};
use lotto_core::{ConfigError, PickerConfig};

use crate::{
    action::ActionRequestQueue,
    action_handler,
    state::{AppState, UiState},
    ui, view_model_builder,
};

pub const APP_TITLE: &str = "Lotto Random Number Picker";

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum StartupError {
    #[display("invalid picker configuration: {_0}")]
    Config(#[from] ConfigError),
    #[display("failed to run the window: {_0}")]
    Window(#[from] eframe::Error),
}

#[derive(Debug)]
pub struct LottoPickerApp {
    app_state: AppState,
    ui_state: UiState,
}

impl LottoPickerApp {
    #[must_use]
    pub fn new(config: PickerConfig) -> Self {
        Self {
            app_state: AppState::new(config),
            ui_state: UiState::new(),
        }
    }
}

impl App for LottoPickerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();
        let slot_count = self.app_state.picker.config().slot_count();

        ctx.input(|i| ui::input::handle_input(i, slot_count, &mut action_queue));
        action_handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        let vm =
            view_model_builder::build_picker_screen_view_model(&self.app_state, &self.ui_state);

        CentralPanel::default().show(ctx, |ui| {
            ui::picker_screen::show(ui, &vm, &mut action_queue);
        });
        if vm.history_log_vm.scroll_to_bottom() {
            self.ui_state.finish_history_scroll();
        }

        if !action_queue.is_empty() {
            action_handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);
            ctx.request_repaint();
        }
    }
}

/// Opens the picker window and blocks until it is closed.
pub fn run(config: PickerConfig) -> Result<(), StartupError> {
    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_resizable(false)
            .with_inner_size((480.0, 340.0)),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(LottoPickerApp::new(config)))),
    )?;
    Ok(())
}
