use std::slice;

use lotto_core::Draw;

/// Append-only log of every draw made during a session.
///
/// Entries are never removed; the log lives as long as the session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct History {
    draws: Vec<Draw>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self { draws: Vec::new() }
    }

    pub(crate) fn push(&mut self, draw: Draw) {
        self.draws.push(draw);
    }

    /// Returns the number of recorded draws.
    #[must_use]
    pub fn len(&self) -> usize {
        self.draws.len()
    }

    /// Returns `true` if no draw has been made yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }

    /// Returns the most recent draw.
    #[must_use]
    pub fn last(&self) -> Option<&Draw> {
        self.draws.last()
    }

    /// Iterates over the draws, oldest first.
    pub fn iter(&self) -> slice::Iter<'_, Draw> {
        self.draws.iter()
    }

    /// Iterates over the text lines of the log (`"n1, n2, ..."`), oldest first.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.draws.iter().map(Draw::to_string)
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Draw;
    type IntoIter = slice::Iter<'a, Draw>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
