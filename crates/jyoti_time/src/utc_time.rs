//! UTC calendar date/time with sub-second precision.
//!
//! Provides `UtcTime`, the civil instant handed to the dasha engine.
//! Conversion to a Julian Date is a pure calendar computation: the
//! value is assumed to be normalized to UTC already.

use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, days_in_month, jd_to_calendar};

const MICROS_PER_DAY: f64 = 86_400_000_000.0;

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Check every calendar field against its valid range.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidUtc("month must be 1-12"));
        }
        if self.day == 0 || self.day > days_in_month(self.year, self.month) {
            return Err(TimeError::InvalidUtc("day out of range for month"));
        }
        if self.hour > 23 {
            return Err(TimeError::InvalidUtc("hour must be 0-23"));
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidUtc("minute must be 0-59"));
        }
        if !self.second.is_finite() || !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::InvalidUtc("second must be in [0, 60)"));
        }
        Ok(())
    }

    /// Convert to a Julian Date (UTC), validating the fields first.
    pub fn to_jd_utc(&self) -> Result<f64, TimeError> {
        self.validate()?;
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        Ok(calendar_to_jd(self.year, self.month, day_frac))
    }

    /// Convert a Julian Date (UTC) back to calendar form, rounded to the microsecond.
    pub fn from_jd_utc(jd_utc: f64) -> Self {
        let shifted = jd_utc + 0.5;
        let mut day_number = shifted.floor();
        let mut micros = ((shifted - day_number) * MICROS_PER_DAY).round();
        if micros >= MICROS_PER_DAY {
            day_number += 1.0;
            micros -= MICROS_PER_DAY;
        }
        let (year, month, day_frac) = jd_to_calendar(day_number - 0.5);
        let micros = micros as u64;
        Self {
            year,
            month,
            day: day_frac.round() as u32,
            hour: (micros / 3_600_000_000) as u32,
            minute: ((micros / 60_000_000) % 60) as u32,
            second: (micros % 60_000_000) as f64 / 1e6,
        }
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDThh:mm:ss[.fff][Z]` or a bare `YYYY-MM-DD` (midnight).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_end_matches('Z');
        let (date, time) = match s.split_once('T') {
            Some((d, t)) => (d, Some(t)),
            None => (s, None),
        };

        let date_parts: Vec<&str> = date.split('-').collect();
        // A leading '-' marks a negative year.
        let (sign, date_parts) = match date_parts.as_slice() {
            ["", rest @ ..] => (-1, rest.to_vec()),
            _ => (1, date_parts),
        };
        if date_parts.len() != 3 {
            return Err(TimeError::Parse(format!(
                "expected YYYY-MM-DDThh:mm:ssZ, got {s}"
            )));
        }
        let year: i32 = parse_field(date_parts[0], "year")?;
        let month: u32 = parse_field(date_parts[1], "month")?;
        let day: u32 = parse_field(date_parts[2], "day")?;

        let (hour, minute, second) = match time {
            None => (0, 0, 0.0),
            Some(t) => {
                let time_parts: Vec<&str> = t.split(':').collect();
                if time_parts.len() != 3 {
                    return Err(TimeError::Parse(format!("invalid time of day: {t}")));
                }
                (
                    parse_field(time_parts[0], "hour")?,
                    parse_field(time_parts[1], "minute")?,
                    parse_field(time_parts[2], "second")?,
                )
            }
        };

        let utc = Self::new(sign * year, month, day, hour, minute, second);
        utc.validate()?;
        Ok(utc)
    }
}

fn parse_field<T: FromStr>(raw: &str, name: &str) -> Result<T, TimeError>
where
    T::Err: std::fmt::Display,
{
    raw.parse()
        .map_err(|e| TimeError::Parse(format!("{name} '{raw}': {e}")))
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}
