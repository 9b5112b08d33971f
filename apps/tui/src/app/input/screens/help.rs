use crossterm::event::KeyCode;

use crate::app::state::App;

pub fn handle_help_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') => {
            app.show_help = false;
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        _ => {}
    }
}
