use lotto_core::{Draw, PickerConfig};
use rand::{SeedableRng as _, seq::index};
use rand_pcg::Pcg64;

use crate::DrawSeed;

/// A draw together with the seed it was generated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDraw {
    /// The drawn numbers.
    pub draw: Draw,
    /// The seed that reproduces `draw` with the same configuration.
    pub seed: DrawSeed,
}

/// Generates uniformly random draws for one configuration.
///
/// Each draw picks `pick_count` distinct indices into the pool with
/// [`rand::seq::index::sample`], so every combination of that size is equally
/// likely, then sorts the resulting numbers.
#[derive(Debug, Clone, Copy)]
pub struct DrawGenerator<'a> {
    config: &'a PickerConfig,
}

impl<'a> DrawGenerator<'a> {
    /// Creates a generator for `config`.
    #[must_use]
    pub const fn new(config: &'a PickerConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration draws are generated for.
    #[must_use]
    pub const fn config(&self) -> &'a PickerConfig {
        self.config
    }

    /// Generates a draw from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedDraw {
        self.generate_with_seed(DrawSeed::random())
    }

    /// Generates the draw determined by `seed`.
    ///
    /// # Panics
    ///
    /// Never panics for a [`PickerConfig`], whose pick count is bounded by the
    /// pool size.
    #[must_use]
    pub fn generate_with_seed(&self, seed: DrawSeed) -> GeneratedDraw {
        let mut rng = Pcg64::from_seed(*seed.as_bytes());
        let pool = self.config.pool();
        let numbers = index::sample(&mut rng, pool.len(), self.config.pick_count())
            .iter()
            .map(|i| pool.nth(i).expect("sampled index lies within the pool"))
            .collect();
        let draw = Draw::from_unsorted(self.config, numbers)
            .expect("sampled numbers are distinct and within the pool");
        GeneratedDraw { draw, seed }
    }
}
