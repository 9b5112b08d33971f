use color_eyre::eyre::eyre;
use dotenv::dotenv;
use std::env;
use url::Url;

use crate::domain::Day;

/// Where the Flask backend listens by default.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: Url,
    pub region: Option<String>,
    pub day: Option<Day>,
}

/// Initializes the application configuration from the environment.
///
/// Recognized variables (all optional):
/// - `TIMETABLE_API_URL` — base URL of the timetable backend
/// - `TIMETABLE_REGION` — preselected region
/// - `TIMETABLE_DAY` — preselected day name
pub fn init_app_config() -> color_eyre::eyre::Result<AppConfig> {
    // Load environment variables from .env file
    dotenv().ok();

    let raw_base = env::var("TIMETABLE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let base_url =
        Url::parse(&raw_base).map_err(|e| eyre!("Invalid TIMETABLE_API_URL '{raw_base}': {e}"))?;

    let region = env::var("TIMETABLE_REGION")
        .ok()
        .filter(|value| !value.trim().is_empty());

    let day = match env::var("TIMETABLE_DAY") {
        Ok(value) => Some(
            Day::parse(&value).ok_or_else(|| eyre!("Invalid TIMETABLE_DAY '{value}'"))?,
        ),
        Err(_) => None,
    };

    Ok(AppConfig {
        base_url,
        region,
        day,
    })
}
