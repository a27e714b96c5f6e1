use std::fmt;

use lotto_core::{Draw, PickerConfig};
use lotto_generator::{DrawGenerator, DrawSeed, GeneratedDraw};

use crate::{History, Slot, SlotIndex};

/// What the status line reports about the last operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PickerStatus {
    /// No operation has run yet.
    Ready,
    /// The slots show the current draw.
    Picked,
    /// The slots were cleared.
    Cleared,
}

/// A lottery picking session.
///
/// The picker is the single source of truth for everything a UI displays.
/// All three operations ([`generate`](Self::generate), [`clear`](Self::clear)
/// and [`toggle_slot`](Self::toggle_slot)) are infallible and leave the picker
/// in a fully defined state.
#[derive(Debug, Clone)]
pub struct Picker {
    config: PickerConfig,
    slots: Vec<Slot>,
    current_draw: Option<Draw>,
    status: PickerStatus,
    history: History,
}

impl Picker {
    /// Creates a picker with every slot empty and an empty history.
    #[must_use]
    pub fn new(config: PickerConfig) -> Self {
        if !config.shows_every_pick() {
            log::warn!(
                "only {} of {} picks will be shown in slots",
                config.slot_count(),
                config.pick_count()
            );
        }
        Self {
            config,
            slots: vec![Slot::EMPTY; config.slot_count()],
            current_draw: None,
            status: PickerStatus::Ready,
            history: History::new(),
        }
    }

    /// Returns the session configuration.
    #[must_use]
    pub const fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Returns every slot, in display order.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Returns the slot at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than the configured slot count.
    #[must_use]
    pub fn slot(&self, index: SlotIndex) -> &Slot {
        &self.slots[index.get()]
    }

    /// Returns the draw currently shown, or `None` before the first draw or after a clear.
    #[must_use]
    pub fn current_draw(&self) -> Option<&Draw> {
        self.current_draw.as_ref()
    }

    /// Returns the status of the last operation.
    #[must_use]
    pub const fn status(&self) -> PickerStatus {
        self.status
    }

    /// Returns the status line text.
    #[must_use]
    pub fn status_text(&self) -> String {
        StatusText(self).to_string()
    }

    /// Returns the session history.
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Draws new numbers from a fresh random seed and shows them.
    pub fn generate(&mut self) -> DrawSeed {
        let GeneratedDraw { draw, seed } = DrawGenerator::new(&self.config).generate();
        log::debug!("generated draw {draw} from seed {seed}");
        self.apply_draw(draw);
        seed
    }

    /// Draws the numbers determined by `seed` and shows them.
    pub fn generate_with_seed(&mut self, seed: DrawSeed) {
        let GeneratedDraw { draw, .. } = DrawGenerator::new(&self.config).generate_with_seed(seed);
        self.apply_draw(draw);
    }

    /// Shows `draw` as the current draw and appends it to the history.
    ///
    /// Slot `i` receives the `i`-th number; slots beyond the draw become empty.
    /// Every highlight is reset.
    pub fn apply_draw(&mut self, draw: Draw) {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            slot.fill(draw.get(i));
        }
        self.history.push(draw.clone());
        self.current_draw = Some(draw);
        self.status = PickerStatus::Picked;
    }

    /// Empties every slot and discards the current draw. The history is kept.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.fill(None);
        }
        self.current_draw = None;
        self.status = PickerStatus::Cleared;
    }

    /// Flips the favorite highlight of a filled slot; does nothing for an empty slot.
    ///
    /// Returns `true` if the highlight changed.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than the configured slot count.
    pub fn toggle_slot(&mut self, index: SlotIndex) -> bool {
        let slot_count = self.slots.len();
        let Some(slot) = self.slots.get_mut(index.get()) else {
            panic!("slot index {index} out of range for {slot_count} slots");
        };
        slot.toggle_highlight()
    }
}

struct StatusText<'a>(&'a Picker);

impl fmt::Display for StatusText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.0.status, &self.0.current_draw) {
            (PickerStatus::Picked, Some(draw)) => write!(f, "Picked: {draw}"),
            (PickerStatus::Cleared, _) => f.write_str("Cleared"),
            (PickerStatus::Ready | PickerStatus::Picked, _) => {
                f.write_str("Click Generate to pick numbers")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use lotto_core::PoolRange;
    use proptest::prelude::*;

    use super::*;

    fn lotto_6_49() -> PickerConfig {
        PickerConfig::new(PoolRange::new(1, 49), 6, 6).unwrap()
    }

    fn draw(config: &PickerConfig, numbers: &[u32]) -> Draw {
        Draw::from_numbers(config, numbers.to_vec()).unwrap()
    }

    fn slot_values(picker: &Picker) -> Vec<Option<u32>> {
        picker.slots().iter().map(Slot::value).collect()
    }

    #[test]
    fn test_new_picker_is_empty() {
        let picker = Picker::new(lotto_6_49());
        assert_eq!(picker.slots().len(), 6);
        assert!(picker.slots().iter().all(|s| *s == Slot::EMPTY));
        assert_eq!(picker.status(), PickerStatus::Ready);
        assert_eq!(picker.status_text(), "Click Generate to pick numbers");
        assert!(picker.history().is_empty());
        assert!(picker.current_draw().is_none());
    }

    #[test]
    fn test_generate_clear_generate_scenario() {
        let mut picker = Picker::new(lotto_6_49());

        picker.generate();
        let first = picker.current_draw().cloned().unwrap();
        assert_eq!(first.len(), 6);
        assert!(first.numbers().windows(2).all(|w| w[0] < w[1]));
        assert!(first.iter().all(|n| (1..=49).contains(n)));
        assert_eq!(
            slot_values(&picker),
            first.iter().copied().map(Some).collect::<Vec<_>>()
        );
        assert_eq!(picker.status_text(), format!("Picked: {first}"));
        assert_eq!(picker.history().lines().collect::<Vec<_>>(), vec![first.to_string()]);

        picker.clear();
        assert!(slot_values(&picker).iter().all(Option::is_none));
        assert!(picker.slots().iter().all(|s| s.label() == "--"));
        assert_eq!(picker.status_text(), "Cleared");
        assert_eq!(picker.history().len(), 1);
        assert!(picker.current_draw().is_none());

        picker.generate();
        assert_eq!(picker.history().len(), 2);
        assert!(slot_values(&picker).iter().all(Option::is_some));
        assert_eq!(picker.history().iter().next(), Some(&first));
    }

    #[test]
    fn test_status_follows_last_operation() {
        let mut picker = Picker::new(lotto_6_49());
        assert!(picker.status().is_ready());

        picker.generate();
        assert!(picker.status().is_picked());

        picker.toggle_slot(SlotIndex::new(0));
        assert!(picker.status().is_picked());

        picker.clear();
        assert!(picker.status().is_cleared());

        picker.toggle_slot(SlotIndex::new(0));
        assert!(picker.status().is_cleared());
    }

    #[test]
    fn test_generate_resets_highlights() {
        let config = lotto_6_49();
        let mut picker = Picker::new(config);
        picker.apply_draw(draw(&config, &[1, 2, 3, 4, 5, 6]));
        assert!(picker.toggle_slot(SlotIndex::new(2)));
        assert!(picker.slot(SlotIndex::new(2)).is_highlighted());

        picker.apply_draw(draw(&config, &[7, 8, 9, 10, 11, 12]));
        assert!(picker.slots().iter().all(|s| !s.is_highlighted()));
    }

    #[test]
    fn test_toggle_empty_slot_is_noop() {
        let mut picker = Picker::new(lotto_6_49());
        assert!(!picker.toggle_slot(SlotIndex::new(0)));
        assert!(!picker.toggle_slot(SlotIndex::new(0)));
        assert_eq!(*picker.slot(SlotIndex::new(0)), Slot::EMPTY);
    }

    #[test]
    fn test_double_toggle_restores_highlight() {
        let config = lotto_6_49();
        let mut picker = Picker::new(config);
        picker.apply_draw(draw(&config, &[3, 9, 14, 28, 33, 41]));
        let before = picker.slots().to_vec();

        assert!(picker.toggle_slot(SlotIndex::new(4)));
        assert_ne!(picker.slots(), before.as_slice());
        assert!(picker.toggle_slot(SlotIndex::new(4)));
        assert_eq!(picker.slots(), before.as_slice());
    }

    #[test]
    fn test_clear_removes_highlights() {
        let config = lotto_6_49();
        let mut picker = Picker::new(config);
        picker.apply_draw(draw(&config, &[3, 9, 14, 28, 33, 41]));
        picker.toggle_slot(SlotIndex::new(0));
        picker.toggle_slot(SlotIndex::new(5));

        picker.clear();
        assert!(picker.slots().iter().all(|s| *s == Slot::EMPTY));
    }

    #[test]
    fn test_toggle_and_clear_do_not_touch_history() {
        let config = lotto_6_49();
        let mut picker = Picker::new(config);
        picker.apply_draw(draw(&config, &[3, 9, 14, 28, 33, 41]));
        picker.toggle_slot(SlotIndex::new(1));
        picker.clear();
        picker.toggle_slot(SlotIndex::new(1));
        assert_eq!(picker.history().len(), 1);
    }

    #[test]
    fn test_extra_slots_stay_empty() {
        let config = PickerConfig::new(PoolRange::new(1, 49), 3, 5).unwrap();
        let mut picker = Picker::new(config);
        picker.apply_draw(draw(&config, &[10, 20, 30]));
        assert_eq!(
            slot_values(&picker),
            vec![Some(10), Some(20), Some(30), None, None]
        );
        assert!(!picker.toggle_slot(SlotIndex::new(4)));
    }

    #[test]
    fn test_fewer_slots_than_picks_shows_prefix() {
        let config = PickerConfig::new(PoolRange::new(1, 49), 4, 2).unwrap();
        let mut picker = Picker::new(config);
        picker.apply_draw(draw(&config, &[5, 6, 7, 8]));
        assert_eq!(slot_values(&picker), vec![Some(5), Some(6)]);
        assert_eq!(picker.status_text(), "Picked: 5, 6, 7, 8");
        assert_eq!(picker.history().last().unwrap().len(), 4);
    }

    #[test]
    fn test_generate_with_seed_is_reproducible() {
        let mut a = Picker::new(lotto_6_49());
        let mut b = Picker::new(lotto_6_49());
        let seed = a.generate();
        b.generate_with_seed(seed);
        assert_eq!(a.current_draw(), b.current_draw());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_toggle_out_of_range_panics() {
        let mut picker = Picker::new(lotto_6_49());
        picker.toggle_slot(SlotIndex::new(6));
    }

    #[derive(Debug, Clone, Copy)]
    enum Op {
        Generate,
        Clear,
        Toggle(usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Generate),
            Just(Op::Clear),
            (0usize..6).prop_map(Op::Toggle),
        ]
    }

    proptest! {
        #[test]
        fn history_counts_generates(ops in proptest::collection::vec(op(), 0..40)) {
            let mut picker = Picker::new(lotto_6_49());
            let mut generates = 0;
            for op in ops {
                match op {
                    Op::Generate => {
                        picker.generate();
                        generates += 1;
                    }
                    Op::Clear => picker.clear(),
                    Op::Toggle(i) => {
                        picker.toggle_slot(SlotIndex::new(i));
                    }
                }
                prop_assert_eq!(picker.history().len(), generates);
                for slot in picker.slots() {
                    prop_assert!(!(slot.is_empty() && slot.is_highlighted()));
                }
            }
        }
    }
}
