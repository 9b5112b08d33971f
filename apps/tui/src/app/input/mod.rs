pub mod helpers;
pub mod screens;

use crossterm::event::KeyCode;

use crate::app::state::{App, AppScreen};

pub fn handle_input(app: &mut App, key: KeyCode) {
    if app.show_help {
        screens::help::handle_help_input(app, key);
        return;
    }

    match app.screen {
        AppScreen::RegionSelect => screens::region_select::handle_region_select_input(app, key),
        AppScreen::Timetable => screens::timetable::handle_timetable_input(app, key),
    }
}
