//! Lotto Picker desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop Lotto Picker application.

use lotto_app::{StartupError, config, version};

fn main() -> Result<(), StartupError> {
    better_panic::install();
    env_logger::init();

    log::info!(
        "Starting Lotto Picker, version={}",
        version::build_version()
    );

    let config = config::picker_config()
        .inspect_err(|err| log::error!("refusing to start: {err}"))?;
    log::info!(
        "pool {}, picking {} into {} slots",
        config.pool(),
        config.pick_count(),
        config.slot_count()
    );

    lotto_app::run(config)
}
