use clap::Parser;
use color_eyre::Result;
use timetable_tui::api::ApiClient;
use timetable_tui::app::{App, AppActions};
use timetable_tui::config::init_app_config;
use timetable_tui::{event, terminal, CliArgs, Day};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    // Resolve configuration (env, .env file, CLI overrides)
    let config = init_app_config()?;
    let day = config.day.unwrap_or_else(Day::today);
    let actions = AppActions::new(ApiClient::new(config.base_url));

    // Initialize application state
    let mut app = App::new(actions, config.region, day);

    // Run without a UI when asked to, or when stdout is not a terminal
    if args.headless || !is_terminal() {
        return event::run_headless(&mut app, args.json).await;
    }

    // Setup terminal
    let mut terminal = terminal::setup_terminal()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app).await;

    // Restore terminal
    terminal::cleanup_terminal_state(true, true);

    // Return the result
    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
