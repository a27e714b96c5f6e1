/// Position of a result slot, counted from zero.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display, derive_more::From,
)]
pub struct SlotIndex(usize);

impl SlotIndex {
    /// Creates a slot index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the zero-based index.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

/// One result slot: an optional drawn number and a favorite highlight.
///
/// The highlight can only be set while the slot holds a number; clearing the
/// slot also clears the highlight.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    value: Option<u32>,
    highlighted: bool,
}

impl Slot {
    /// Placeholder text for an empty slot.
    pub const PLACEHOLDER: &'static str = "--";

    /// An empty, unhighlighted slot.
    pub const EMPTY: Self = Self {
        value: None,
        highlighted: false,
    };

    /// Returns the number shown in the slot, if any.
    #[must_use]
    pub const fn value(&self) -> Option<u32> {
        self.value
    }

    /// Returns `true` if the slot is marked as a favorite.
    #[must_use]
    pub const fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Returns `true` if the slot holds no number.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Returns the slot's display text: the number, or [`Slot::PLACEHOLDER`].
    #[must_use]
    pub fn label(&self) -> String {
        self.value
            .map_or_else(|| Self::PLACEHOLDER.to_owned(), |n| n.to_string())
    }

    pub(crate) fn fill(&mut self, value: Option<u32>) {
        self.value = value;
        self.highlighted = false;
    }

    /// Flips the highlight; returns `false` (and does nothing) if the slot is empty.
    pub(crate) fn toggle_highlight(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.highlighted = !self.highlighted;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slot_ignores_toggle() {
        let mut slot = Slot::EMPTY;
        assert!(!slot.toggle_highlight());
        assert_eq!(slot, Slot::EMPTY);
        assert_eq!(slot.label(), "--");
    }

    #[test]
    fn test_fill_resets_highlight() {
        let mut slot = Slot::default();
        slot.fill(Some(12));
        assert!(slot.toggle_highlight());
        assert!(slot.is_highlighted());
        assert_eq!(slot.label(), "12");

        slot.fill(Some(30));
        assert!(!slot.is_highlighted());

        slot.toggle_highlight();
        slot.fill(None);
        assert_eq!(slot, Slot::EMPTY);
    }
}
