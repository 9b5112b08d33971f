use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "timetable-tui", version, about = "Study center timetable TUI")]
pub struct CliArgs {
    /// Region to load on startup
    #[arg(long)]
    pub region: Option<String>,

    /// Day to load on startup (e.g. Monday); defaults to today
    #[arg(long)]
    pub day: Option<String>,

    /// Override the timetable backend base URL
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Fetch once, print the listing, and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(url) = &self.base_url {
            std::env::set_var("TIMETABLE_API_URL", url);
        }
        if let Some(region) = &self.region {
            std::env::set_var("TIMETABLE_REGION", region);
        }
        if let Some(day) = &self.day {
            std::env::set_var("TIMETABLE_DAY", day);
        }
    }
}
