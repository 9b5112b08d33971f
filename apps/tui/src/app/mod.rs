// App module for timetable-tui
// Handles application state and data loading

pub mod actions;
pub mod input;
pub mod state;

pub use actions::AppActions;
pub use input::handle_input;
pub use state::{App, AppScreen, LoadState};
