use eframe::egui::{RichText, Ui};
use egui_extras::{Size, StripBuilder};

use crate::{
    action::ActionRequestQueue,
    ui::{
        controls::{self, ControlsViewModel},
        history_log::{self, HistoryLogViewModel},
        slots::{self, SlotsViewModel},
        status_line::{self, StatusLineViewModel},
    },
};

#[derive(Debug, Clone)]
pub struct PickerScreenViewModel {
    pub controls_vm: ControlsViewModel,
    pub slots_vm: SlotsViewModel,
    pub status_line_vm: StatusLineViewModel,
    pub history_log_vm: HistoryLogViewModel,
    pub version: String,
}

impl PickerScreenViewModel {
    #[must_use]
    pub fn new(
        controls_vm: ControlsViewModel,
        slots_vm: SlotsViewModel,
        status_line_vm: StatusLineViewModel,
        history_log_vm: HistoryLogViewModel,
        version: String,
    ) -> Self {
        Self {
            controls_vm,
            slots_vm,
            status_line_vm,
            history_log_vm,
            version,
        }
    }
}

const CONTROLS_HEIGHT: f32 = 28.0;
const STATUS_HEIGHT: f32 = 28.0;
const FOOTER_HEIGHT: f32 = 16.0;

pub fn show(ui: &mut Ui, vm: &PickerScreenViewModel, action_queue: &mut ActionRequestQueue) {
    let spacing = ui.spacing().item_spacing;
    let slots_height = slots::SLOT_SIZE.y + spacing.y * 2.0;

    StripBuilder::new(ui)
        .size(Size::exact(CONTROLS_HEIGHT))
        .size(Size::exact(slots_height))
        .size(Size::exact(STATUS_HEIGHT))
        .size(Size::remainder())
        .size(Size::exact(FOOTER_HEIGHT))
        .vertical(|mut strip| {
            strip.cell(|ui| {
                controls::show(ui, &vm.controls_vm, action_queue);
            });
            strip.cell(|ui| {
                slots::show(ui, &vm.slots_vm, action_queue);
            });
            strip.cell(|ui| {
                status_line::show(ui, &vm.status_line_vm);
            });
            strip.cell(|ui| {
                history_log::show(ui, &vm.history_log_vm);
            });
            strip.cell(|ui| {
                ui.label(RichText::new(format!("v{}", vm.version)).small().weak());
            });
        });
}
