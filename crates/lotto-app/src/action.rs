use std::mem;

use lotto_picker::SlotIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Generate,
    Clear,
    ToggleSlot(SlotIndex),
}

#[derive(Debug, Default)]
pub struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use lotto_picker::SlotIndex;

    use super::{Action, ActionRequestQueue};

    #[test]
    fn take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::Generate);
        queue.request(Action::ToggleSlot(SlotIndex::new(2)));

        let drained = queue.take_all();
        assert_eq!(
            drained,
            vec![Action::Generate, Action::ToggleSlot(SlotIndex::new(2))]
        );

        assert!(queue.is_empty());
        assert!(queue.take_all().is_empty());
    }
}
