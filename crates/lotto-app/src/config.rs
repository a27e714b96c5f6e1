//! Compiled-in picker configuration.

use lotto_core::{ConfigError, PickerConfig, PoolRange};

/// Numbers are drawn from this inclusive pool.
pub const POOL: PoolRange = PoolRange::new(1, 49);

/// How many numbers each draw contains.
pub const PICK_COUNT: usize = 6;

/// How many result slots the window shows.
pub const SLOT_COUNT: usize = 6;

/// Validates the compiled-in configuration.
pub fn picker_config() -> Result<PickerConfig, ConfigError> {
    PickerConfig::new(POOL, PICK_COUNT, SLOT_COUNT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_in_config_is_valid() {
        let config = picker_config().unwrap();
        assert!(config.shows_every_pick());
    }
}
