use std::time::Duration;

use macroquad::prelude::*;
use macroquad::Window;
use life_board::{
    Config, Simulation,
    ui::{self, PatternPicker, PANEL_WIDTH},
    rendering, input,
};

/// Height the control panel needs to show every label
const MIN_WINDOW_HEIGHT: u32 = 660;

fn window_conf(config: &Config) -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: (config.width_px as f32 + PANEL_WIDTH) as i32,
        window_height: config.height_px.max(MIN_WINDOW_HEIGHT) as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let sim = match Simulation::new(config) {
        Ok(sim) => sim,
        Err(err) => {
            ::log::error!("{err}");
            std::process::exit(1);
        }
    };

    Window::from_config(window_conf(&config), run(sim));
}

async fn run(mut sim: Simulation) {
    let mut picker = PatternPicker::new();

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons(sim.is_running());

        sim = input::process_button_clicks(sim, &buttons, mouse_pos);
        input::handle_cell_click(&mut sim, mouse_pos);
        input::handle_pattern_keys(&mut sim, &mut picker);
        sim = input::process_keyboard_input(sim);

        sim.tick(Duration::from_secs_f32(get_frame_time()));

        clear_background(BLACK);
        rendering::draw_board(&sim);
        rendering::draw_controls(&sim, &picker, &buttons, mouse_pos);

        next_frame().await;
    }
}
