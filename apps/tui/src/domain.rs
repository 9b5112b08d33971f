use chrono::{Datelike, Local, Weekday};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const COUNT: usize = 7;

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Monday),
            1 => Some(Self::Tuesday),
            2 => Some(Self::Wednesday),
            3 => Some(Self::Thursday),
            4 => Some(Self::Friday),
            5 => Some(Self::Saturday),
            6 => Some(Self::Sunday),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Monday => 0,
            Self::Tuesday => 1,
            Self::Wednesday => 2,
            Self::Thursday => 3,
            Self::Friday => 4,
            Self::Saturday => 5,
            Self::Sunday => 6,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "monday" | "mon" => Some(Self::Monday),
            "tuesday" | "tue" => Some(Self::Tuesday),
            "wednesday" | "wed" => Some(Self::Wednesday),
            "thursday" | "thu" => Some(Self::Thursday),
            "friday" | "fri" => Some(Self::Friday),
            "saturday" | "sat" => Some(Self::Saturday),
            "sunday" | "sun" => Some(Self::Sunday),
            _ => None,
        }
    }

    /// The weekday of the local clock, used as the startup default.
    pub fn today() -> Self {
        match Local::now().weekday() {
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
            Weekday::Sun => Self::Sunday,
        }
    }
}

/// One location's operating-hours record for a single day, validated at the
/// API boundary. `start <= end` and both hours lie in [0, 24).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RegionSchedule {
    pub name: String,
    pub address: String,
    pub postal_code: String,
    pub start: u8,
    pub end: u8,
}

impl RegionSchedule {
    /// Detail line shown for the selected chart row, zero-padded.
    pub fn open_hours_label(&self) -> String {
        format!(
            "Open: {} - {}",
            format_hour_padded(self.start),
            format_hour_padded(self.end)
        )
    }

    /// Listing-card hours line. Unpadded on purpose: the listing has always
    /// shown `9:00` where the chart detail shows `09:00`.
    pub fn listing_hours_label(&self) -> String {
        format!(
            "Hours: {} - {}",
            format_hour(self.start),
            format_hour(self.end)
        )
    }
}

/// Formats an hour as a zero-padded 24-hour clock value, e.g. 9 -> "09:00".
pub fn format_hour_padded(hour: u8) -> String {
    format!("{hour:02}:00")
}

/// Formats an hour without padding, e.g. 9 -> "9:00".
pub fn format_hour(hour: u8) -> String {
    format!("{hour}:00")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_formatting_pads_to_two_digits() {
        assert_eq!(format_hour_padded(0), "00:00");
        assert_eq!(format_hour_padded(9), "09:00");
        assert_eq!(format_hour_padded(23), "23:00");
    }

    #[test]
    fn unpadded_hour_formatting() {
        assert_eq!(format_hour(9), "9:00");
        assert_eq!(format_hour(18), "18:00");
    }

    #[test]
    fn detail_and_listing_labels_use_different_padding() {
        let schedule = RegionSchedule {
            name: "Center A".to_string(),
            address: "1 Main St".to_string(),
            postal_code: "00001".to_string(),
            start: 8,
            end: 17,
        };

        assert_eq!(schedule.open_hours_label(), "Open: 08:00 - 17:00");
        assert_eq!(schedule.listing_hours_label(), "Hours: 8:00 - 17:00");
    }

    #[test]
    fn day_round_trips_through_index() {
        for index in 0..Day::COUNT {
            let day = Day::from_index(index).expect("index within range");
            assert_eq!(day.index(), index);
        }
        assert!(Day::from_index(Day::COUNT).is_none());
    }

    #[test]
    fn day_parse_accepts_mixed_case_and_abbreviations() {
        assert_eq!(Day::parse("Tuesday"), Some(Day::Tuesday));
        assert_eq!(Day::parse(" sUnDaY "), Some(Day::Sunday));
        assert_eq!(Day::parse("wed"), Some(Day::Wednesday));
        assert_eq!(Day::parse("someday"), None);
    }
}
