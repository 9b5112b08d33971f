use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

use crate::api::models::{validate_rows, ScheduleValidationError, TimetableRow};
use crate::domain::{Day, RegionSchedule};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned status {status}")]
    Status { url: Url, status: StatusCode },
    #[error("undecodable response from {url}: {source}")]
    Decode {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
    #[error("bad timetable data: {0}")]
    BadData(#[from] ScheduleValidationError),
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Client for the timetable endpoint.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Builds `GET /api/timetable?region=..&day=..` relative to the base URL.
    fn timetable_url(&self, region: &str, day: Day) -> Result<Url, ApiError> {
        let mut url = self.base_url.join("api/timetable")?;
        // form_urlencoded writes spaces as '+'; the endpoint expects %20.
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("region", region)
            .append_pair("day", day.as_str())
            .finish()
            .replace('+', "%20");
        url.set_query(Some(&query));
        Ok(url)
    }

    /// Fetches one day's schedule for a region, validated row by row.
    /// Response order is preserved.
    pub async fn fetch_timetable(
        &self,
        region: &str,
        day: Day,
    ) -> Result<Vec<RegionSchedule>, ApiError> {
        let url = self.timetable_url(region, day)?;

        let response = self
            .client
            .get(url.clone())
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|source| ApiError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { url, status });
        }

        let rows: Vec<TimetableRow> = response
            .json()
            .await
            .map_err(|source| ApiError::Decode { url, source })?;

        Ok(validate_rows(rows)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::{Method::GET, MockServer};
    use serde_json::json;

    fn client_for(server: &MockServer) -> ApiClient {
        let base_url = Url::parse(&server.base_url()).expect("mock server url");
        ApiClient::new(base_url)
    }

    #[test]
    fn timetable_url_percent_encodes_the_region() {
        let client = ApiClient::new(Url::parse("http://127.0.0.1:5000").expect("base url"));
        let url = client
            .timetable_url("north east", Day::Tuesday)
            .expect("url builds");

        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:5000/api/timetable?region=north%20east&day=Tuesday"
        );
    }

    #[test]
    fn timetable_url_passes_the_day_verbatim() {
        let client = ApiClient::new(Url::parse("http://localhost:5000").expect("base url"));
        let url = client
            .timetable_url("Central", Day::Monday)
            .expect("url builds");

        assert_eq!(url.query(), Some("region=Central&day=Monday"));
    }

    #[tokio::test]
    async fn fetch_returns_validated_rows_in_response_order() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/timetable")
                .query_param("region", "Central")
                .query_param("day", "Monday");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([
                    {"name": "Center B", "address": "2 Side St", "postal_code": "00002",
                     "start": 10, "end": 20},
                    {"name": "Center A", "address": "1 Main St", "postal_code": "00001",
                     "start": 9, "end": 18},
                ]));
        });

        let schedules = client_for(&server)
            .fetch_timetable("Central", Day::Monday)
            .await
            .expect("fetch succeeds");

        mock.assert();
        let names: Vec<_> = schedules.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Center B", "Center A"]);
        assert_eq!(schedules[1].start, 9);
        assert_eq!(schedules[1].end, 18);
    }

    #[tokio::test]
    async fn non_success_status_is_a_distinct_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/timetable");
            then.status(500).body("boom");
        });

        let result = client_for(&server)
            .fetch_timetable("Central", Day::Monday)
            .await;

        assert!(matches!(
            result,
            Err(ApiError::Status { status, .. }) if status == StatusCode::INTERNAL_SERVER_ERROR
        ));
    }

    #[tokio::test]
    async fn invalid_hours_surface_as_bad_data() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/timetable");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([
                    {"name": "Night Owl", "address": "3 Late St", "postal_code": "00003",
                     "start": 22, "end": 4},
                ]));
        });

        let result = client_for(&server)
            .fetch_timetable("Central", Day::Monday)
            .await;

        assert!(matches!(result, Err(ApiError::BadData(_))));
    }

    #[tokio::test]
    async fn non_json_body_is_a_decode_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/timetable");
            then.status(200).body("<html>not json</html>");
        });

        let result = client_for(&server)
            .fetch_timetable("Central", Day::Monday)
            .await;

        assert!(matches!(result, Err(ApiError::Decode { .. })));
    }
}
