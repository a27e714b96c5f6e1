//! Random draw generation.
//!
//! [`DrawGenerator`] selects numbers uniformly at random, without replacement,
//! from the pool of a [`PickerConfig`](lotto_core::PickerConfig). Every draw is
//! derived from a [`DrawSeed`], so a draw can be reproduced exactly from the
//! seed it reports.
//!
//! # Examples
//!
//! ```
//! use lotto_core::{PickerConfig, PoolRange};
//! use lotto_generator::DrawGenerator;
//!
//! let config = PickerConfig::new(PoolRange::new(1, 49), 6, 6).unwrap();
//! let generator = DrawGenerator::new(&config);
//!
//! let generated = generator.generate();
//! assert_eq!(generated.draw.len(), 6);
//!
//! // The same seed always yields the same draw.
//! let replay = generator.generate_with_seed(generated.seed);
//! assert_eq!(replay.draw, generated.draw);
//! ```

pub use self::{
    generator::{DrawGenerator, GeneratedDraw},
    seed::{DrawSeed, SeedParseError},
};

mod generator;
mod seed;
