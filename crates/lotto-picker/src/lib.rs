//! Session model for the lottery picker.
//!
//! [`Picker`] owns the whole state of one session: the result [`Slot`]s, the
//! current [`Draw`](lotto_core::Draw), the status line and the append-only
//! [`History`]. It has no dependency on any display surface; a UI renders it
//! after each operation.
//!
//! # Examples
//!
//! ```
//! use lotto_core::{PickerConfig, PoolRange};
//! use lotto_picker::{Picker, PickerStatus, SlotIndex};
//!
//! let config = PickerConfig::new(PoolRange::new(1, 49), 6, 6).unwrap();
//! let mut picker = Picker::new(config);
//!
//! picker.generate();
//! assert!(picker.slots().iter().all(|slot| slot.value().is_some()));
//! assert_eq!(picker.history().len(), 1);
//!
//! picker.toggle_slot(SlotIndex::new(0));
//! assert!(picker.slot(SlotIndex::new(0)).is_highlighted());
//!
//! picker.clear();
//! assert_eq!(picker.status(), PickerStatus::Cleared);
//! assert_eq!(picker.history().len(), 1);
//! ```

pub use self::{
    history::History,
    picker::{Picker, PickerStatus},
    slot::{Slot, SlotIndex},
};

mod history;
mod picker;
mod slot;
