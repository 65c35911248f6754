//! Low-precision solar position ("PSA" formula).
//!
//! The computation runs in four stages, each exposed as a pure function:
//! elapsed Julian days, ecliptic coordinates, equatorial coordinates and
//! finally topocentric azimuth/zenith angle. Intermediate angles are kept
//! unreduced; the trigonometric functions downstream absorb the periodicity.

use std::f64::consts::PI;

use log::trace;

use crate::types::{EclipticCoordinates, EquatorialCoordinates, Instant, Location, SunCoordinates};

pub const RAD: f64 = PI / 180.0;
/// Kilometres.
pub const EARTH_MEAN_RADIUS: f64 = 6371.01;
/// Kilometres.
pub const ASTRONOMICAL_UNIT: f64 = 149_597_890.0;
/// Noon, 1 January 2000 UT.
pub const J2000_JULIAN_DAY: f64 = 2_451_545.0;

/// Julian Day Number of a proleptic Gregorian date.
///
/// All divisions truncate toward zero, which is what the closed form expects
/// for January and February where `month - 14` is negative.
pub fn julian_day_number(year: i32, month: i32, day: i32) -> i64 {
    let (year, month, day) = (year as i64, month as i64, day as i64);
    let aux1 = (month - 14) / 12;
    (1461 * (year + 4800 + aux1)) / 4 + (367 * (month - 2 - 12 * aux1)) / 12
        - (3 * ((year + 4900 + aux1) / 100)) / 4
        + day
        - 32075
}

pub fn decimal_hours(instant: &Instant) -> f64 {
    instant.hour as f64 + (instant.minute as f64 + instant.second / 60.0) / 60.0
}

/// Days elapsed since J2000.0, fractional.
pub fn elapsed_julian_days(instant: &Instant) -> f64 {
    let jdn = julian_day_number(instant.year, instant.month, instant.day);
    let julian_date = jdn as f64 - 0.5 + decimal_hours(instant) / 24.0;
    julian_date - J2000_JULIAN_DAY
}

pub fn ecliptic_coordinates(elapsed_days: f64) -> EclipticCoordinates {
    let d = elapsed_days;
    let omega = 2.1429 - 0.0010394594 * d;
    let mean_longitude = 4.8950630 + 0.017202791698 * d;
    let mean_anomaly = 6.2400600 + 0.0172019699 * d;
    let longitude = mean_longitude
        + 0.03341607 * mean_anomaly.sin()
        + 0.00034894 * (2.0 * mean_anomaly).sin()
        - 0.0001134
        - 0.0000203 * omega.sin();
    let obliquity = 0.4090928 - 6.2140e-9 * d + 0.0000396 * omega.cos();
    EclipticCoordinates {
        longitude,
        obliquity,
    }
}

pub fn equatorial_coordinates(ecliptic: &EclipticCoordinates) -> EquatorialCoordinates {
    let sin_longitude = ecliptic.longitude.sin();
    let y = ecliptic.obliquity.cos() * sin_longitude;
    let x = ecliptic.longitude.cos();
    let mut right_ascension = y.atan2(x);
    if right_ascension < 0.0 {
        right_ascension += 2.0 * PI;
    }
    let declination = (ecliptic.obliquity.sin() * sin_longitude).asin();
    EquatorialCoordinates {
        right_ascension,
        declination,
    }
}

/// Azimuth and zenith angle for an observer, with first-order parallax.
pub fn topocentric_coordinates(
    elapsed_days: f64,
    decimal_hours: f64,
    equatorial: &EquatorialCoordinates,
    location: &Location,
) -> SunCoordinates {
    let gmst = 6.6974243242 + 0.0657098283 * elapsed_days + decimal_hours;
    let lmst = (gmst * 15.0 + location.longitude) * RAD;
    let hour_angle = lmst - equatorial.right_ascension;
    let lat_rad = location.latitude * RAD;

    let cos_latitude = lat_rad.cos();
    let sin_latitude = lat_rad.sin();
    let cos_hour_angle = hour_angle.cos();
    let declination = equatorial.declination;

    let zenith_rad = (cos_latitude * cos_hour_angle * declination.cos()
        + declination.sin() * sin_latitude)
        .acos();

    let y = -hour_angle.sin();
    let x = declination.tan() * cos_latitude - sin_latitude * cos_hour_angle;
    let mut azimuth = y.atan2(x);
    if azimuth < 0.0 {
        azimuth += 2.0 * PI;
    }

    let parallax = (EARTH_MEAN_RADIUS / ASTRONOMICAL_UNIT) * zenith_rad.sin();
    SunCoordinates {
        azimuth: azimuth / RAD,
        zenith_angle: (zenith_rad + parallax) / RAD,
    }
}

pub fn sun_position(instant: &Instant, location: &Location) -> SunCoordinates {
    let hours = decimal_hours(instant);
    let elapsed = elapsed_julian_days(instant);
    trace!("elapsed julian days {elapsed}, decimal hours {hours}");

    let ecliptic = ecliptic_coordinates(elapsed);
    trace!(
        "ecliptic longitude {} rad, obliquity {} rad",
        ecliptic.longitude,
        ecliptic.obliquity
    );

    let equatorial = equatorial_coordinates(&ecliptic);
    trace!(
        "right ascension {} rad, declination {} rad",
        equatorial.right_ascension,
        equatorial.declination
    );

    let coords = topocentric_coordinates(elapsed, hours, &equatorial, location);
    trace!(
        "azimuth {}°, zenith angle {}° at ({}, {})",
        coords.azimuth,
        coords.zenith_angle,
        location.latitude,
        location.longitude
    );
    coords
}
