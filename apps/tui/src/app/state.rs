use std::time::Instant;

use throbber_widgets_tui::ThrobberState;

use crate::app::actions::AppActions;
use crate::domain::{Day, RegionSchedule};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppScreen {
    RegionSelect,
    Timetable,
}

/// Fetch lifecycle as shown to the user. Failures replace the timetable
/// with a placeholder instead of silently keeping the previous frame.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub show_help: bool,
    pub status_message: String,
    /// Text being typed on the region select screen.
    pub region_input: String,
    /// Committed region selection; owned here, never a global.
    pub region: Option<String>,
    pub day: Day,
    pub schedules: Vec<RegionSchedule>,
    pub load_state: LoadState,
    pub selected_row: usize,
    /// Set by input handlers; the event loop picks it up and starts a fetch.
    pub fetch_requested: bool,
    pub animation_counter: f64,
    pub last_frame: Instant,
    pub throbber_state: ThrobberState,
    pub actions: AppActions,
}

impl App {
    pub fn new(actions: AppActions, region: Option<String>, day: Day) -> Self {
        let screen = if region.is_some() {
            AppScreen::Timetable
        } else {
            AppScreen::RegionSelect
        };
        // With a preselected region the first load fires immediately,
        // mirroring the original page's load-on-open behavior.
        let fetch_requested = region.is_some();

        Self {
            running: true,
            screen,
            show_help: false,
            status_message: String::new(),
            region_input: String::new(),
            region,
            day,
            schedules: Vec::new(),
            load_state: LoadState::Idle,
            selected_row: 0,
            fetch_requested,
            animation_counter: 0.0,
            last_frame: Instant::now(),
            throbber_state: ThrobberState::default(),
            actions,
        }
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        // Update animation counter (cycles between 0 and 2*PI)
        self.animation_counter += delta.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }

        if self.load_state == LoadState::Loading {
            self.throbber_state.calc_next();
        }
    }

    /// Commits the typed region and schedules a load. Returns false when the
    /// input is empty.
    pub fn commit_region(&mut self) -> bool {
        let region = self.region_input.trim();
        if region.is_empty() {
            self.status_message = "Enter a region name first.".to_string();
            return false;
        }

        self.region = Some(region.to_string());
        self.region_input.clear();
        self.screen = AppScreen::Timetable;
        self.request_fetch();
        true
    }

    /// Moves back to the region select screen, prefilled with the current
    /// selection.
    pub fn edit_region(&mut self) {
        self.region_input = self.region.clone().unwrap_or_default();
        self.screen = AppScreen::RegionSelect;
    }

    pub fn request_fetch(&mut self) {
        if self.region.is_some() {
            self.fetch_requested = true;
        }
    }

    pub fn select_day(&mut self, day: Day) {
        if self.day != day {
            self.day = day;
            self.request_fetch();
        }
    }

    pub fn apply_schedules(&mut self, schedules: Vec<RegionSchedule>) {
        self.schedules = schedules;
        self.load_state = LoadState::Loaded;
        self.selected_row = 0;
    }

    pub fn apply_fetch_error(&mut self, message: String) {
        self.schedules.clear();
        self.selected_row = 0;
        self.load_state = LoadState::Failed(message);
    }

    pub fn selected_schedule(&self) -> Option<&RegionSchedule> {
        self.schedules.get(self.selected_row)
    }
}
