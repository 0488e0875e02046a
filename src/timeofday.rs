//! 12-hour clock normalization.
//!
//! Appointment times are entered and stored as display strings
//! ("09:00 AM"), but range filtering needs a single comparable scale.
//! Everything here maps between the two: 12-hour components normalize to a
//! minute-of-day in [0, 1439], and stored display strings parse back onto
//! the same scale.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static DISPLAY_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2}):(\d{2})\s*(AM|PM)$").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Am => "AM",
            Period::Pm => "PM",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "AM" => Some(Period::Am),
            "PM" => Some(Period::Pm),
            _ => None,
        }
    }
}

/// Convert 12-hour components to a minute-of-day.
///
/// 12 AM is midnight (0) and 12 PM is noon (720); any other PM hour gains
/// twelve hours. Inputs outside hour 1..=12 / minute 0..=59 are the
/// caller's bug, but the arithmetic still stays on the u16 scale.
pub fn minute_of_day(hour: u8, minute: u8, period: Period) -> u16 {
    let hour24 = match (period, hour) {
        (Period::Am, 12) => 0,
        (Period::Am, h) => h,
        (Period::Pm, 12) => 12,
        (Period::Pm, h) => h + 12,
    };
    u16::from(hour24) * 60 + u16::from(minute)
}

/// Parse a stored display time ("09:00 AM", "2:30 PM") to a minute-of-day.
///
/// Returns None for anything that does not look like a 12-hour display
/// string; filters treat such records as outside any time bound.
pub fn parse_display_time(value: &str) -> Option<u16> {
    let caps = DISPLAY_TIME.captures(value.trim())?;
    let hour: u8 = caps[1].parse().ok()?;
    let minute: u8 = caps[2].parse().ok()?;
    if !(1..=12).contains(&hour) || minute > 59 {
        return None;
    }
    let period = Period::parse(&caps[3])?;
    Some(minute_of_day(hour, minute, period))
}

/// Format 12-hour components the way the booking form stores them.
pub fn format_display_time(hour: u8, minute: u8, period: Period) -> String {
    format!("{:02}:{:02} {}", hour, minute, period.as_str())
}
