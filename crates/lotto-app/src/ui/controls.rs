use eframe::egui::{Button, RichText, Ui};
use lotto_core::PoolRange;

use crate::action::{Action, ActionRequestQueue};

#[derive(Debug, Clone)]
pub struct ControlsViewModel {
    pool: PoolRange,
    pick_count: usize,
}

impl ControlsViewModel {
    #[must_use]
    pub fn new(pool: PoolRange, pick_count: usize) -> Self {
        Self { pool, pick_count }
    }

    #[must_use]
    pub fn pool_text(&self) -> String {
        self.pool.to_string()
    }

    #[must_use]
    pub fn pick_text(&self) -> String {
        self.pick_count.to_string()
    }
}

pub fn show(ui: &mut Ui, vm: &ControlsViewModel, action_queue: &mut ActionRequestQueue) {
    ui.horizontal(|ui| {
        ui.label("Pool:");
        ui.label(RichText::new(vm.pool_text()).strong());
        ui.add_space(12.0);

        ui.label("Pick:");
        ui.label(RichText::new(vm.pick_text()).strong());
        ui.add_space(12.0);

        if ui
            .add(Button::new("Generate"))
            .on_hover_text("Draw new numbers (G, Enter)")
            .clicked()
        {
            action_queue.request(Action::Generate);
        }
        if ui
            .add(Button::new("Clear"))
            .on_hover_text("Clear the result slots (Esc, C, Delete)")
            .clicked()
        {
            action_queue.request(Action::Clear);
        }
    });
}
