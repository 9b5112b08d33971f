use crossterm::event::KeyCode;

use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::App;
use crate::domain::Day;

pub fn handle_timetable_input(app: &mut App, key: KeyCode) {
    let total_rows = app.schedules.len();

    match key {
        KeyCode::Left => {
            cycle_day(app, wrap_decrement(app.day.index(), Day::COUNT));
        }
        KeyCode::Right => {
            cycle_day(app, wrap_increment(app.day.index(), Day::COUNT));
        }
        KeyCode::Up => {
            if app.selected_row > 0 {
                app.selected_row -= 1;
            }
        }
        KeyCode::Down => {
            if total_rows > 0 && app.selected_row + 1 < total_rows {
                app.selected_row += 1;
            }
        }
        KeyCode::PageUp => {
            app.selected_row = app.selected_row.saturating_sub(5);
        }
        KeyCode::PageDown => {
            if total_rows > 0 {
                let new_index = app.selected_row + 5;
                app.selected_row = if new_index >= total_rows {
                    total_rows - 1
                } else {
                    new_index
                };
            }
        }
        KeyCode::Home => {
            app.selected_row = 0;
        }
        KeyCode::End => {
            if total_rows > 0 {
                app.selected_row = total_rows - 1;
            }
        }
        KeyCode::Char('r') => {
            app.edit_region();
        }
        KeyCode::Char('l') => {
            app.request_fetch();
        }
        KeyCode::F(1) | KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Esc => {
            app.edit_region();
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        _ => {}
    }
}

fn cycle_day(app: &mut App, index: usize) {
    if let Some(day) = Day::from_index(index) {
        app.select_day(day);
    }
}
