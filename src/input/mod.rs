use macroquad::prelude::*;
use crate::application::Simulation;
use crate::ui::{Button, PatternPicker, button_ids, INTERVAL_STEP_MS};

/// Toggle the cell under a left click. Clicks off the board are ignored.
pub fn handle_cell_click(sim: &mut Simulation, mouse_pos: (f32, f32)) {
    if is_mouse_button_pressed(MouseButton::Left) {
        sim.click(mouse_pos.0, mouse_pos.1);
    }
}

/// P selects the next preset; G seeds the selected one near the top-left corner
pub fn handle_pattern_keys(sim: &mut Simulation, picker: &mut PatternPicker) {
    if is_key_pressed(KeyCode::P) {
        ::log::debug!("selected pattern {}", picker.next().name);
    }
    if is_key_pressed(KeyCode::G) {
        let pattern = picker.current();
        if let Err(err) = sim.place(pattern, 1, 1) {
            ::log::warn!("cannot place {}: {err}", pattern.name);
        }
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(sim: Simulation) -> Simulation {
    type KeyAction = (KeyCode, fn(Simulation) -> Simulation);

    let actions: [KeyAction; 6] = [
        (KeyCode::Space, Simulation::toggle_running),
        (KeyCode::N, Simulation::step),
        (KeyCode::C, Simulation::clear),
        (KeyCode::R, Simulation::randomize),
        (KeyCode::Up, |s| s.adjust_interval(INTERVAL_STEP_MS)),
        (KeyCode::Down, |s| s.adjust_interval(-INTERVAL_STEP_MS)),
    ];

    actions.iter().fold(sim, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Process button clicks functionally
pub fn process_button_clicks(
    sim: Simulation,
    buttons: &[Button],
    mouse_pos: (f32, f32)
) -> Simulation {
    buttons
        .iter()
        .enumerate()
        .fold(sim, |s, (idx, btn)| {
            if !btn.is_clicked(mouse_pos) {
                return s;
            }
            match idx {
                button_ids::RUN_STOP => s.toggle_running(),
                button_ids::STEP => s.step(),
                button_ids::CLEAR => s.clear(),
                button_ids::RANDOM => s.randomize(),
                button_ids::SHORTER => s.adjust_interval(-INTERVAL_STEP_MS),
                button_ids::LONGER => s.adjust_interval(INTERVAL_STEP_MS),
                _ => s,
            }
        })
}
