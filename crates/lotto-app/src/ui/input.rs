use eframe::egui::{InputState, Key};
use lotto_picker::SlotIndex;

use crate::action::{Action, ActionRequestQueue};

struct Shortcut {
    key: Key,
    action: Action,
}

impl Shortcut {
    const fn plain(key: Key, action: Action) -> Self {
        Self { key, action }
    }

    const fn slot(key: Key, index: usize) -> Self {
        Self::plain(key, Action::ToggleSlot(SlotIndex::new(index)))
    }
}

const SHORTCUTS: [Shortcut; 14] = [
    Shortcut::plain(Key::G, Action::Generate),
    Shortcut::plain(Key::Enter, Action::Generate),
    Shortcut::plain(Key::Escape, Action::Clear),
    Shortcut::plain(Key::Delete, Action::Clear),
    Shortcut::plain(Key::C, Action::Clear),
    Shortcut::slot(Key::Num1, 0),
    Shortcut::slot(Key::Num2, 1),
    Shortcut::slot(Key::Num3, 2),
    Shortcut::slot(Key::Num4, 3),
    Shortcut::slot(Key::Num5, 4),
    Shortcut::slot(Key::Num6, 5),
    Shortcut::slot(Key::Num7, 6),
    Shortcut::slot(Key::Num8, 7),
    Shortcut::slot(Key::Num9, 8),
];

/// Maps key presses to actions. Slot shortcuts beyond `slot_count` are ignored.
pub fn handle_input(i: &InputState, slot_count: usize, action_queue: &mut ActionRequestQueue) {
    if i.modifiers.any() {
        return;
    }
    for shortcut in SHORTCUTS {
        if !i.key_pressed(shortcut.key) {
            continue;
        }
        if let Action::ToggleSlot(index) = shortcut.action
            && index.get() >= slot_count
        {
            continue;
        }
        action_queue.request(shortcut.action);
        return;
    }
}
