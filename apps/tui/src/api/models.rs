use serde::Deserialize;
use thiserror::Error;

use crate::domain::RegionSchedule;

/// Raw timetable row as served by `/api/timetable`. Hours arrive as plain
/// JSON numbers and are only trusted after conversion to `RegionSchedule`.
#[derive(Debug, Clone, Deserialize)]
pub struct TimetableRow {
    pub name: String,
    pub address: String,
    pub postal_code: String,
    pub start: i64,
    pub end: i64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleValidationError {
    #[error("{name}: hour {hour} outside 0..24")]
    HourOutOfRange { name: String, hour: i64 },
    #[error("{name}: start {start} is after end {end}")]
    StartAfterEnd { name: String, start: i64, end: i64 },
    #[error("row is missing a location name")]
    EmptyName,
}

impl TryFrom<TimetableRow> for RegionSchedule {
    type Error = ScheduleValidationError;

    fn try_from(row: TimetableRow) -> Result<Self, Self::Error> {
        if row.name.trim().is_empty() {
            return Err(ScheduleValidationError::EmptyName);
        }

        for hour in [row.start, row.end] {
            if !(0..24).contains(&hour) {
                return Err(ScheduleValidationError::HourOutOfRange {
                    name: row.name,
                    hour,
                });
            }
        }

        // Wrap-past-midnight ranges never occur in well-formed data; treat
        // them as bad data rather than drawing a negative span.
        if row.start > row.end {
            return Err(ScheduleValidationError::StartAfterEnd {
                name: row.name,
                start: row.start,
                end: row.end,
            });
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Ok(Self {
            name: row.name,
            address: row.address,
            postal_code: row.postal_code,
            start: row.start as u8,
            end: row.end as u8,
        })
    }
}

/// Validates a full response, preserving row order.
pub fn validate_rows(
    rows: Vec<TimetableRow>,
) -> Result<Vec<RegionSchedule>, ScheduleValidationError> {
    rows.into_iter().map(RegionSchedule::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, start: i64, end: i64) -> TimetableRow {
        TimetableRow {
            name: name.to_string(),
            address: "1 Main St".to_string(),
            postal_code: "00001".to_string(),
            start,
            end,
        }
    }

    #[test]
    fn valid_row_converts() {
        let schedule = RegionSchedule::try_from(row("Center A", 9, 18)).expect("valid row");
        assert_eq!(schedule.name, "Center A");
        assert_eq!(schedule.start, 9);
        assert_eq!(schedule.end, 18);
    }

    #[test]
    fn hour_out_of_range_is_rejected() {
        assert_eq!(
            RegionSchedule::try_from(row("Center A", 9, 24)),
            Err(ScheduleValidationError::HourOutOfRange {
                name: "Center A".to_string(),
                hour: 24,
            })
        );
        assert!(RegionSchedule::try_from(row("Center A", -1, 10)).is_err());
    }

    #[test]
    fn wrap_past_midnight_is_rejected() {
        assert_eq!(
            RegionSchedule::try_from(row("Night Owl", 22, 4)),
            Err(ScheduleValidationError::StartAfterEnd {
                name: "Night Owl".to_string(),
                start: 22,
                end: 4,
            })
        );
    }

    #[test]
    fn empty_name_is_rejected() {
        assert_eq!(
            RegionSchedule::try_from(row("  ", 9, 18)),
            Err(ScheduleValidationError::EmptyName)
        );
    }

    #[test]
    fn validate_rows_keeps_input_order() {
        let schedules =
            validate_rows(vec![row("B", 10, 12), row("A", 8, 9)]).expect("both rows valid");
        let names: Vec<_> = schedules.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn missing_field_fails_deserialization() {
        let result: Result<TimetableRow, _> =
            serde_json::from_str(r#"{"name": "Center A", "start": 9}"#);
        assert!(result.is_err());
    }
}
