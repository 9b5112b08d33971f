use tokio::task::JoinHandle;

use crate::api::{ApiClient, ApiError};
use crate::domain::{Day, RegionSchedule};

type FetchResult = Result<Vec<RegionSchedule>, ApiError>;

/// Owns the API client and the single in-flight fetch task.
#[derive(Debug)]
pub struct AppActions {
    client: ApiClient,
    in_flight: Option<JoinHandle<FetchResult>>,
}

impl AppActions {
    pub const fn new(client: ApiClient) -> Self {
        Self {
            client,
            in_flight: None,
        }
    }

    /// Starts a fetch for the given selection. Any superseded request is
    /// aborted first, so the latest selection always wins.
    pub fn start_fetch(&mut self, region: &str, day: Day) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }

        let client = self.client.clone();
        let region = region.to_string();
        self.in_flight = Some(tokio::spawn(async move {
            client.fetch_timetable(&region, day).await
        }));
    }

    pub const fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Returns the finished fetch result, if any. Aborted tasks disappear
    /// without a result.
    pub async fn poll_fetch(&mut self) -> Option<Result<Vec<RegionSchedule>, String>> {
        if !self.in_flight.as_ref()?.is_finished() {
            return None;
        }

        let handle = self.in_flight.take()?;
        match handle.await {
            Ok(Ok(schedules)) => Some(Ok(schedules)),
            Ok(Err(err)) => Some(Err(err.to_string())),
            Err(join_err) if join_err.is_cancelled() => None,
            Err(join_err) => Some(Err(format!("fetch task failed: {join_err}"))),
        }
    }

    /// One-shot fetch for headless mode.
    pub async fn fetch_once(&self, region: &str, day: Day) -> FetchResult {
        self.client.fetch_timetable(region, day).await
    }
}
