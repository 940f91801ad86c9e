mod button;
mod pattern_picker;

pub use button::Button;
pub use pattern_picker::PatternPicker;

use macroquad::prelude::screen_width;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// Step used by the interval buttons and the Up/Down keys
pub const INTERVAL_STEP_MS: i64 = 10;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Indices into the button list returned by `create_buttons`
pub mod button_ids {
    pub const RUN_STOP: usize = 0;
    pub const STEP: usize = 1;
    pub const CLEAR: usize = 2;
    pub const RANDOM: usize = 3;
    pub const SHORTER: usize = 4;
    pub const LONGER: usize = 5;
}

/// Create UI buttons with standard layout
pub fn create_buttons(is_running: bool) -> Vec<Button> {
    let px = panel_x();
    let half = (PANEL_WIDTH - 10.0) / 2.0;
    vec![
        Button::new(px, 20.0, PANEL_WIDTH, BUTTON_HEIGHT, if is_running { "Stop" } else { "Run" }),
        Button::new(px, 70.0, PANEL_WIDTH, BUTTON_HEIGHT, "Step"),
        Button::new(px, 120.0, PANEL_WIDTH, BUTTON_HEIGHT, "Clear"),
        Button::new(px, 170.0, PANEL_WIDTH, BUTTON_HEIGHT, "Random"),
        Button::new(px, 260.0, half, BUTTON_HEIGHT, "- ms"),
        Button::new(px + half + 10.0, 260.0, half, BUTTON_HEIGHT, "+ ms"),
    ]
}
