use macroquad::prelude::*;
use crate::application::Simulation;
use crate::ui::{Button, PatternPicker, panel_x, PANEL_WIDTH};

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);
const BOARD_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0);

/// Draw the board background, grid lines and live cells.
/// The board's top-left corner sits at the window origin.
pub fn draw_board(sim: &Simulation) {
    let cell_size = sim.cell_size_px() as f32;
    let (rows, cols) = sim.board().dimensions();
    let width = cols as f32 * cell_size;
    let height = rows as f32 * cell_size;

    draw_rectangle(0.0, 0.0, width, height, BOARD_COLOR);

    for x in 0..=cols {
        let sx = x as f32 * cell_size;
        draw_line(sx, 0.0, sx, height, 1.0, GRID_LINE_COLOR);
    }
    for y in 0..=rows {
        let sy = y as f32 * cell_size;
        draw_line(0.0, sy, width, sy, 1.0, GRID_LINE_COLOR);
    }

    // Inset by one pixel so the grid lines stay visible
    for (x, y) in sim.live_cells() {
        draw_rectangle(
            x as f32 * cell_size + 1.0,
            y as f32 * cell_size + 1.0,
            cell_size - 1.0,
            cell_size - 1.0,
            ALIVE_COLOR,
        );
    }
}

/// Draw the control panel with buttons and status
pub fn draw_controls(
    sim: &Simulation,
    picker: &PatternPicker,
    buttons: &[Button],
    mouse_pos: (f32, f32)
) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let status_color = if sim.is_running() {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };

    let labels = [
        ("Update every".to_string(), 240.0, 16.0, WHITE),
        (format!("{} msec", sim.interval_ms()), 325.0, 18.0, LIGHTGRAY),
        ("Generation:".to_string(), 370.0, 16.0, WHITE),
        (sim.generation().to_string(), 392.0, 20.0, ALIVE_COLOR),
        ("Live cells:".to_string(), 425.0, 16.0, WHITE),
        (sim.board().population().to_string(), 445.0, 18.0, LIGHTGRAY),
        ("Status:".to_string(), 480.0, 16.0, WHITE),
        ((if sim.is_running() { "Running" } else { "Stopped" }).to_string(), 500.0, 16.0, status_color),
        ("LMB: toggle cell".to_string(), 540.0, 12.0, GRAY),
        ("Space: run/stop  N: step".to_string(), 555.0, 12.0, GRAY),
        ("C: clear  R: random".to_string(), 570.0, 12.0, GRAY),
        ("Up/Down: interval".to_string(), 585.0, 12.0, GRAY),
        ("P: next pattern  G: place".to_string(), 600.0, 12.0, GRAY),
        (format!("Pattern: {}", picker.current().name), 625.0, 14.0, WHITE),
        (picker.current().description.to_string(), 640.0, 12.0, LIGHTGRAY),
    ];

    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });
}
