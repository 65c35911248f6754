use std::str::FromStr;

use chrono::{DateTime, Datelike, FixedOffset, TimeZone, Timelike, Utc};

use crate::error::Error;

/// Civil UTC timestamp. Fields are taken as-is; no calendar validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instant {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: f64,
}

impl Instant {
    pub const fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

impl<Tz: TimeZone> From<&DateTime<Tz>> for Instant {
    fn from(dt: &DateTime<Tz>) -> Self {
        let utc = dt.with_timezone(&Utc);
        Self {
            year: utc.year(),
            month: utc.month() as i32,
            day: utc.day() as i32,
            hour: utc.hour() as i32,
            minute: utc.minute() as i32,
            second: utc.second() as f64 + utc.nanosecond() as f64 / 1e9,
        }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Instant {
    fn from(dt: DateTime<Tz>) -> Self {
        Self::from(&dt)
    }
}

impl FromStr for Instant {
    type Err = Error;

    /// Parses an RFC 3339 timestamp; a non-zero offset is folded into UTC.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let dt = DateTime::<FixedOffset>::parse_from_rfc3339(s.trim())?;
        Ok(Self::from(&dt))
    }
}

/// Observer position in degrees. Not range-checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl FromStr for Location {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidLocation(s.to_string());
        let (lat, lon) = s.split_once(',').ok_or_else(invalid)?;
        let latitude = lat.trim().parse::<f64>().map_err(|_| invalid())?;
        let longitude = lon.trim().parse::<f64>().map_err(|_| invalid())?;
        Ok(Self::new(latitude, longitude))
    }
}

/// Apparent sun position in degrees. Azimuth is clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunCoordinates {
    pub azimuth: f64,
    pub zenith_angle: f64,
}

impl SunCoordinates {
    pub fn elevation(&self) -> f64 {
        90.0 - self.zenith_angle
    }
}

/// Radians, not reduced modulo 2π.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticCoordinates {
    pub longitude: f64,
    pub obliquity: f64,
}

/// Radians; right ascension lies in [0, 2π).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoordinates {
    pub right_ascension: f64,
    pub declination: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualAxisAngles {
    pub tilt: f64,
    pub panel_azimuth: f64,
}
