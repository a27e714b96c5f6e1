pub mod controls;
pub mod history_log;
pub mod input;
pub mod picker_screen;
pub mod slot_theme;
pub mod slots;
pub mod status_line;
