//! A single lottery draw.

use std::{fmt, slice};

use crate::PickerConfig;

/// Errors returned by [`Draw::from_numbers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DrawError {
    /// The draw does not contain exactly `pick_count` numbers.
    #[display("expected {expected} numbers, got {actual}")]
    WrongLength {
        /// The configured pick count.
        expected: usize,
        /// The number of values supplied.
        actual: usize,
    },
    /// A number lies outside the configured pool.
    #[display("number {number} is outside the pool")]
    OutOfPool {
        /// The offending number.
        number: u32,
    },
    /// The numbers are not strictly ascending (unsorted or duplicated).
    #[display("numbers are not strictly ascending at position {index}")]
    NotAscending {
        /// Index of the first number that is not greater than its predecessor.
        index: usize,
    },
}

/// An immutable, strictly ascending set of distinct numbers drawn from a pool.
///
/// A draw is created either by a generator or through [`Draw::from_numbers`],
/// which checks every invariant against a [`PickerConfig`]. It is never mutated;
/// a new draw replaces the previous one.
///
/// The [`Display`](fmt::Display) form is the comma-separated rendering used by
/// the status line and the history log.
///
/// # Examples
///
/// ```
/// use lotto_core::{Draw, DrawError, PickerConfig, PoolRange};
///
/// let config = PickerConfig::new(PoolRange::new(1, 10), 3, 3).unwrap();
/// let draw = Draw::from_numbers(&config, vec![2, 5, 9]).unwrap();
/// assert_eq!(draw.numbers(), &[2, 5, 9]);
/// assert_eq!(draw.to_string(), "2, 5, 9");
///
/// assert_eq!(
///     Draw::from_numbers(&config, vec![2, 2, 9]),
///     Err(DrawError::NotAscending { index: 1 }),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Draw {
    numbers: Vec<u32>,
}

impl Draw {
    /// Creates a draw from already sorted numbers, validating it against `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`DrawError`] if the numbers are the wrong count, leave the
    /// pool, or are not strictly ascending.
    pub fn from_numbers(config: &PickerConfig, numbers: Vec<u32>) -> Result<Self, DrawError> {
        if numbers.len() != config.pick_count() {
            return Err(DrawError::WrongLength {
                expected: config.pick_count(),
                actual: numbers.len(),
            });
        }
        let pool = config.pool();
        if let Some(&number) = numbers.iter().find(|n| !pool.contains(**n)) {
            return Err(DrawError::OutOfPool { number });
        }
        if let Some(index) = numbers.windows(2).position(|w| w[0] >= w[1]) {
            return Err(DrawError::NotAscending { index: index + 1 });
        }
        Ok(Self { numbers })
    }

    /// Creates a draw from unsorted distinct numbers, sorting them first.
    ///
    /// # Errors
    ///
    /// Same as [`Draw::from_numbers`]; duplicates surface as
    /// [`DrawError::NotAscending`].
    pub fn from_unsorted(config: &PickerConfig, mut numbers: Vec<u32>) -> Result<Self, DrawError> {
        numbers.sort_unstable();
        Self::from_numbers(config, numbers)
    }

    /// Returns the drawn numbers in ascending order.
    #[must_use]
    pub fn numbers(&self) -> &[u32] {
        &self.numbers
    }

    /// Returns the number of values in the draw.
    #[must_use]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Returns `true` if the draw holds no numbers.
    ///
    /// Never true for a draw built from a valid [`PickerConfig`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Returns an iterator over the numbers in ascending order.
    pub fn iter(&self) -> slice::Iter<'_, u32> {
        self.numbers.iter()
    }

    /// Returns the number at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.numbers.get(index).copied()
    }
}

impl<'a> IntoIterator for &'a Draw {
    type Item = &'a u32;
    type IntoIter = slice::Iter<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Draw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for number in &self.numbers {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{number}")?;
            first = false;
        }
        Ok(())
    }
}
