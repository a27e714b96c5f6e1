use eframe::egui::{Color32, Visuals};

/// Gold used to mark favorite numbers.
const FAVORITE_GOLD: Color32 = Color32::from_rgb(0xff, 0xd7, 0x00);

/// Color palette for the result slots.
///
/// Kept apart from `egui::Visuals` so the favorite highlight stays gold in both
/// light and dark themes.
#[derive(Debug, Clone)]
pub struct SlotPalette {
    pub fill_empty: Color32,
    pub fill_filled: Color32,
    pub fill_highlighted: Color32,

    pub text_placeholder: Color32,
    pub text_filled: Color32,
    pub text_highlighted: Color32,
}

impl SlotPalette {
    pub fn from_visuals(visuals: &Visuals) -> Self {
        Self {
            fill_empty: visuals.widgets.inactive.weak_bg_fill,
            fill_filled: visuals.widgets.inactive.bg_fill,
            fill_highlighted: FAVORITE_GOLD,

            text_placeholder: visuals.weak_text_color(),
            text_filled: visuals.strong_text_color(),
            text_highlighted: Color32::BLACK,
        }
    }
}
