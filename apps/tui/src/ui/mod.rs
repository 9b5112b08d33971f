// UI module for timetable-tui
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use ratatui::Frame;

use crate::app::state::AppScreen;
use crate::app::App;

pub fn ui(app: &mut App, f: &mut Frame<'_>) {
    match app.screen {
        AppScreen::RegionSelect => screens::region_select::render_region_select(app, f),
        AppScreen::Timetable => screens::timetable::render_timetable(app, f),
    }
}
