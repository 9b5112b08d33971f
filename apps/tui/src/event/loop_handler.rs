use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::convert::TryFrom;
use std::fmt;
use std::io::Stdout;

use crate::app::{handle_input, App};
use crate::domain::{Day, RegionSchedule};
use crate::ui;
use crate::ui::widgets::listings::card_lines;

// Define states for the fetch lifecycle
#[derive(Clone, Copy, PartialEq, Debug)]
enum FetchState {
    Idle,
    Fetching,
    Success,
    Error,
}

impl fmt::Display for FetchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Fetching => write!(f, "Fetching"),
            Self::Success => write!(f, "Success"),
            Self::Error => write!(f, "Error"),
        }
    }
}

// Define events for the fetch lifecycle
#[derive(Clone, Debug)]
enum FetchEvent {
    Start,
    /// A new selection arrived while a fetch was in flight; the old request
    /// is aborted and replaced.
    Supersede,
    Finished(Vec<RegionSchedule>),
    Failed(String),
    Reset,
}

impl fmt::Display for FetchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "Start"),
            Self::Supersede => write!(f, "Supersede"),
            Self::Finished(schedules) => write!(f, "Finished({} rows)", schedules.len()),
            Self::Failed(msg) => write!(f, "Failed({msg})"),
            Self::Reset => write!(f, "Reset"),
        }
    }
}

// Define a custom error type for state transitions
#[derive(Debug)]
struct StateTransitionError {
    from: FetchState,
    event: FetchEvent,
}

impl fmt::Display for StateTransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid transition from {} with event {}",
            self.from, self.event
        )
    }
}

impl std::error::Error for StateTransitionError {}

// State machine driving the fetch lifecycle shown in the UI
struct FetchMachine {
    state: FetchState,
}

impl FetchMachine {
    const fn new(initial_state: FetchState) -> Self {
        Self {
            state: initial_state,
        }
    }

    const fn state(&self) -> FetchState {
        self.state
    }

    // Process an event and update the state machine and app
    fn process_event(
        &mut self,
        event: &FetchEvent,
        app: &mut App,
    ) -> std::result::Result<(), StateTransitionError> {
        let next_state = NextState::try_from((self.state, event, app))?;
        self.state = next_state.0;
        Ok(())
    }
}

// Helper struct for state transitions
struct NextState(FetchState);

impl NextState {
    const fn new(state: FetchState) -> Self {
        Self(state)
    }
}

impl FetchState {
    const fn next_state(self) -> NextState {
        NextState::new(self)
    }
}

impl TryFrom<(FetchState, &FetchEvent, &mut App)> for NextState {
    type Error = StateTransitionError;

    fn try_from(
        value: (FetchState, &FetchEvent, &mut App),
    ) -> std::result::Result<Self, Self::Error> {
        let (current_state, event, app) = value;

        match (current_state, event) {
            (FetchState::Idle, FetchEvent::Start)
            | (FetchState::Fetching, FetchEvent::Supersede) => {
                app.load_state = crate::app::LoadState::Loading;
                app.status_message = format!(
                    "Loading {} timetable for {}...",
                    app.day.as_str(),
                    app.region.as_deref().unwrap_or("(no region)")
                );
                Ok(FetchState::Fetching.next_state())
            }
            (FetchState::Fetching, FetchEvent::Finished(schedules)) => {
                app.status_message = if schedules.is_empty() {
                    format!("No locations open on {}.", app.day.as_str())
                } else {
                    format!(
                        "Loaded {} locations for {}.",
                        schedules.len(),
                        app.day.as_str()
                    )
                };
                app.apply_schedules(schedules.clone());
                Ok(FetchState::Success.next_state())
            }
            (FetchState::Fetching, FetchEvent::Failed(message)) => {
                app.status_message = format!("Error: {message}");
                app.apply_fetch_error(message.clone());
                Ok(FetchState::Error.next_state())
            }
            (FetchState::Success | FetchState::Error, FetchEvent::Reset) => {
                Ok(FetchState::Idle.next_state())
            }
            _ => Err(StateTransitionError {
                from: current_state,
                event: event.clone(),
            }),
        }
    }
}

/// Run the application in headless mode (no UI)
pub async fn run_headless(app: &mut App, json: bool) -> Result<()> {
    let region = app.region.clone().ok_or_else(|| {
        eyre!("headless mode needs a region: pass --region or set TIMETABLE_REGION")
    })?;

    let schedules = app.actions.fetch_once(&region, app.day).await?;

    if json {
        render_headless_json(&region, app.day, &schedules)?;
    } else {
        render_headless_listing(&region, app.day, &schedules);
    }

    Ok(())
}

fn render_headless_listing(region: &str, day: Day, schedules: &[RegionSchedule]) {
    println!("\nTimetable for {region} on {}", day.as_str());
    println!("=================");

    if schedules.is_empty() {
        println!("No locations open.");
        return;
    }

    for schedule in schedules {
        for line in card_lines(schedule) {
            println!("{line}");
        }
        println!();
    }
}

fn render_headless_json(region: &str, day: Day, schedules: &[RegionSchedule]) -> Result<()> {
    let report = HeadlessTimetable {
        region,
        day,
        locations: schedules,
    };
    let json = serde_json::to_string_pretty(&report)?;
    println!("{json}");
    Ok(())
}

#[derive(serde::Serialize)]
struct HeadlessTimetable<'a> {
    region: &'a str,
    day: Day,
    locations: &'a [RegionSchedule],
}

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    // Create our fetch state machine
    let mut fetch_machine = FetchMachine::new(FetchState::Idle);

    loop {
        // Update animations
        app.update();

        // Draw the UI with better error context
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(eyre!("Terminal draw error: {e}"));
        }

        // Handle events with improved error context
        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_))
                | Err(_) => {
                    // Ignore non-key events for now
                }
            }
        }

        // Start (or supersede) a fetch when input handlers requested one
        if app.fetch_requested {
            app.fetch_requested = false;

            if let Some(region) = app.region.clone() {
                let start_event = if fetch_machine.state() == FetchState::Fetching {
                    FetchEvent::Supersede
                } else {
                    FetchEvent::Start
                };

                if fetch_machine.process_event(&start_event, app).is_ok() {
                    app.actions.start_fetch(&region, app.day);
                }
            }
        }

        // Collect a finished fetch and surface its outcome
        if fetch_machine.state() == FetchState::Fetching {
            if let Some(result) = app.actions.poll_fetch().await {
                let finish_event = match result {
                    Ok(schedules) => FetchEvent::Finished(schedules),
                    Err(message) => FetchEvent::Failed(message),
                };

                if fetch_machine.process_event(&finish_event, app).is_err() {
                    // Non-fatal state transition error
                }

                // Reset the state machine for the next load
                if fetch_machine.process_event(&FetchEvent::Reset, app).is_err() {
                    // Non-fatal reset error
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::app::{AppActions, LoadState};
    use url::Url;

    fn test_app() -> App {
        let client = ApiClient::new(Url::parse("http://127.0.0.1:5000").expect("base url"));
        let mut app = App::new(
            AppActions::new(client),
            Some("Central".to_string()),
            Day::Monday,
        );
        app.fetch_requested = false;
        app
    }

    fn schedule(name: &str) -> RegionSchedule {
        RegionSchedule {
            name: name.to_string(),
            address: "1 Main St".to_string(),
            postal_code: "00001".to_string(),
            start: 9,
            end: 18,
        }
    }

    #[test]
    fn start_moves_to_fetching_and_marks_loading() {
        let mut app = test_app();
        let mut machine = FetchMachine::new(FetchState::Idle);

        machine
            .process_event(&FetchEvent::Start, &mut app)
            .expect("valid transition");

        assert_eq!(machine.state(), FetchState::Fetching);
        assert_eq!(app.load_state, LoadState::Loading);
        assert!(app.status_message.contains("Monday"));
    }

    #[test]
    fn supersede_keeps_the_machine_fetching() {
        let mut app = test_app();
        let mut machine = FetchMachine::new(FetchState::Fetching);

        machine
            .process_event(&FetchEvent::Supersede, &mut app)
            .expect("valid transition");

        assert_eq!(machine.state(), FetchState::Fetching);
    }

    #[test]
    fn finished_applies_the_schedules_and_resets() {
        let mut app = test_app();
        let mut machine = FetchMachine::new(FetchState::Fetching);

        machine
            .process_event(&FetchEvent::Finished(vec![schedule("Center A")]), &mut app)
            .expect("valid transition");
        assert_eq!(machine.state(), FetchState::Success);
        assert_eq!(app.schedules.len(), 1);
        assert_eq!(app.load_state, LoadState::Loaded);
        assert!(app.status_message.contains("Loaded 1 locations"));

        machine
            .process_event(&FetchEvent::Reset, &mut app)
            .expect("valid transition");
        assert_eq!(machine.state(), FetchState::Idle);
    }

    #[test]
    fn failure_surfaces_the_message() {
        let mut app = test_app();
        let mut machine = FetchMachine::new(FetchState::Fetching);

        machine
            .process_event(&FetchEvent::Failed("request failed".to_string()), &mut app)
            .expect("valid transition");

        assert_eq!(machine.state(), FetchState::Error);
        assert_eq!(
            app.load_state,
            LoadState::Failed("request failed".to_string())
        );
        assert!(app.status_message.contains("request failed"));
    }

    #[test]
    fn finishing_without_fetching_is_rejected() {
        let mut app = test_app();
        let mut machine = FetchMachine::new(FetchState::Idle);

        let result = machine.process_event(&FetchEvent::Finished(Vec::new()), &mut app);
        assert!(result.is_err());
        assert_eq!(machine.state(), FetchState::Idle);
    }
}
