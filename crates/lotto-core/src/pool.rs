//! The inclusive number pool a draw is taken from.

use std::ops::RangeInclusive;

/// An inclusive range of lottery numbers, `min..=max`.
///
/// A pool may be constructed with `min > max`; such a pool is empty and is
/// rejected by [`PickerConfig::new`](crate::PickerConfig::new).
///
/// # Examples
///
/// ```
/// use lotto_core::PoolRange;
///
/// let pool = PoolRange::new(1, 49);
/// assert_eq!(pool.len(), 49);
/// assert!(pool.contains(1));
/// assert!(pool.contains(49));
/// assert!(!pool.contains(50));
/// assert_eq!(pool.to_string(), "1–49");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{min}–{max}")]
pub struct PoolRange {
    min: u32,
    max: u32,
}

impl PoolRange {
    /// Creates a pool covering `min..=max`.
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Returns the smallest number in the pool.
    #[must_use]
    pub const fn min(&self) -> u32 {
        self.min
    }

    /// Returns the largest number in the pool.
    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Returns the number of values in the pool.
    ///
    /// Saturates at `usize::MAX` on targets where the pool does not fit.
    #[must_use]
    pub fn len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        usize::try_from(self.max - self.min).map_or(usize::MAX, |span| span.saturating_add(1))
    }

    /// Returns `true` if the pool holds no values (`min > max`).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Returns `true` if `number` lies within the pool.
    #[must_use]
    pub const fn contains(&self, number: u32) -> bool {
        self.min <= number && number <= self.max
    }

    /// Returns the `index`-th number of the pool, counting from `min`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lotto_core::PoolRange;
    ///
    /// let pool = PoolRange::new(10, 12);
    /// assert_eq!(pool.nth(0), Some(10));
    /// assert_eq!(pool.nth(2), Some(12));
    /// assert_eq!(pool.nth(3), None);
    /// ```
    #[must_use]
    pub fn nth(&self, index: usize) -> Option<u32> {
        let offset = u32::try_from(index).ok()?;
        self.min
            .checked_add(offset)
            .filter(|number| self.contains(*number))
    }

    /// Returns an iterator over every number in the pool, in ascending order.
    pub fn iter(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }
}

impl IntoIterator for PoolRange {
    type Item = u32;
    type IntoIter = RangeInclusive<u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
