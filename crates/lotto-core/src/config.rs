//! Validated picker configuration.

use crate::PoolRange;

/// Errors detected while validating a [`PickerConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// The pool bounds are inverted, so the pool holds no numbers.
    #[display("pool {pool} is empty")]
    EmptyPool {
        /// The rejected pool.
        pool: PoolRange,
    },
    /// Zero numbers were requested per draw.
    #[display("pick count must be at least 1")]
    ZeroPickCount,
    /// More numbers were requested than the pool can supply without replacement.
    #[display("cannot pick {pick_count} distinct numbers from a pool of {pool_len}")]
    PickCountExceedsPool {
        /// The requested number of picks.
        pick_count: usize,
        /// The number of values in the pool.
        pool_len: usize,
    },
    /// Zero display slots were requested.
    #[display("slot count must be at least 1")]
    ZeroSlotCount,
}

/// Immutable configuration of a picker session.
///
/// A `PickerConfig` can only be obtained through [`PickerConfig::new`], so every
/// instance satisfies `1 <= pick_count <= pool.len()`.
///
/// Having fewer slots than picks is allowed; in that case only the first
/// `slot_count` numbers of a draw are shown in slots (the full draw still goes
/// to the status line and history). Use [`PickerConfig::shows_every_pick`] to
/// detect this.
///
/// # Examples
///
/// ```
/// use lotto_core::{ConfigError, PickerConfig, PoolRange};
///
/// let config = PickerConfig::new(PoolRange::new(1, 49), 6, 6).unwrap();
/// assert_eq!(config.pick_count(), 6);
///
/// assert_eq!(
///     PickerConfig::new(PoolRange::new(1, 5), 6, 6),
///     Err(ConfigError::PickCountExceedsPool { pick_count: 6, pool_len: 5 }),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PickerConfig {
    pool: PoolRange,
    pick_count: usize,
    slot_count: usize,
}

impl PickerConfig {
    /// Validates and creates a configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::EmptyPool`] if `pool` holds no numbers.
    /// - [`ConfigError::ZeroPickCount`] if `pick_count` is zero.
    /// - [`ConfigError::PickCountExceedsPool`] if `pick_count > pool.len()`.
    /// - [`ConfigError::ZeroSlotCount`] if `slot_count` is zero.
    pub fn new(pool: PoolRange, pick_count: usize, slot_count: usize) -> Result<Self, ConfigError> {
        if pool.is_empty() {
            return Err(ConfigError::EmptyPool { pool });
        }
        if pick_count == 0 {
            return Err(ConfigError::ZeroPickCount);
        }
        if pick_count > pool.len() {
            return Err(ConfigError::PickCountExceedsPool {
                pick_count,
                pool_len: pool.len(),
            });
        }
        if slot_count == 0 {
            return Err(ConfigError::ZeroSlotCount);
        }
        Ok(Self {
            pool,
            pick_count,
            slot_count,
        })
    }

    /// Returns the pool numbers are drawn from.
    #[must_use]
    pub const fn pool(&self) -> PoolRange {
        self.pool
    }

    /// Returns how many numbers each draw contains.
    #[must_use]
    pub const fn pick_count(&self) -> usize {
        self.pick_count
    }

    /// Returns the number of display slots.
    #[must_use]
    pub const fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Returns `true` if every number of a draw has a slot to be shown in.
    #[must_use]
    pub const fn shows_every_pick(&self) -> bool {
        self.slot_count >= self.pick_count
    }
}
