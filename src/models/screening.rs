use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{BookingError, BookingResult};

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Время начала сеанса: минуты от полуночи, всегда в диапазоне `0..1440`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub fn from_minutes(minutes: u16) -> BookingResult<Self> {
        if minutes < MINUTES_PER_DAY {
            Ok(Self(minutes))
        } else {
            Err(BookingError::InvalidTime(format!(
                "{minutes} minutes is past the end of the day"
            )))
        }
    }

    pub fn from_hm(hours: u16, minutes: u16) -> BookingResult<Self> {
        if hours >= 24 || minutes >= 60 {
            return Err(BookingError::InvalidTime(format!("{hours}:{minutes:02}")));
        }
        Self::from_minutes(hours * 60 + minutes)
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::from_num_seconds_from_midnight_opt(u32::from(self.0) * 60, 0)
            .unwrap_or_default()
    }

    // 12-часовой формат, как на афише: "1:00 PM", "12:05 AM"
    pub fn to_12_hour(self) -> String {
        self.to_naive_time().format("%-I:%M %p").to_string()
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        // hour() < 24 и minute() < 60, так что значение всегда в диапазоне
        Self((time.hour() * 60 + time.minute()) as u16)
    }
}

impl TryFrom<u16> for TimeOfDay {
    type Error = BookingError;

    fn try_from(minutes: u16) -> Result<Self, Self::Error> {
        Self::from_minutes(minutes)
    }
}

impl From<TimeOfDay> for u16 {
    fn from(time: TimeOfDay) -> Self {
        time.0
    }
}

impl FromStr for TimeOfDay {
    type Err = BookingError;

    /// Принимает "13:00", "1:00 PM" и "1:00pm"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ["%H:%M", "%I:%M %p", "%I:%M%p"]
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
            .map(Self::from)
            .ok_or_else(|| BookingError::InvalidTime(s.to_string()))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_12_hour())
    }
}

/// Сеанс в расписании. Ни название, ни время не обязаны быть уникальными.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledItem {
    pub label: String,
    pub time_of_day: TimeOfDay,
}

impl ScheduledItem {
    pub fn new(label: impl Into<String>, time_of_day: TimeOfDay) -> Self {
        Self {
            label: label.into(),
            time_of_day,
        }
    }
}
