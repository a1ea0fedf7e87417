use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

use crate::types::SunriseSunset;

pub const DECLINATION_AMPLITUDE: f64 = 23.44;
pub const EQUINOX_DAY: i32 = 81;
pub const DAYS_PER_YEAR: f64 = 365.0;
pub const POLAR_CIRCLE_LATITUDE: f64 = 66.5;
pub const HOURS_PER_DAY: f64 = 24.0;

const SOLAR_NOON_MINUTES: f64 = 720.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

/// Numeric sign: -1, 0 or 1. Unlike `f64::signum`, zero maps to zero.
pub fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else if x == 0.0 {
        0.0
    } else {
        f64::NAN
    }
}

pub fn day_of_year(year: i32, month: u32, day: u32) -> Option<i32> {
    NaiveDate::from_ymd_opt(year, month, day).map(|d| d.ordinal() as i32)
}

/// Declination in degrees for a fractional day of year. Zero on day 81.
pub fn solar_declination_at(day: f64) -> f64 {
    let angle = 2.0 * std::f64::consts::PI / DAYS_PER_YEAR * (day - EQUINOX_DAY as f64);
    DECLINATION_AMPLITUDE * angle.sin()
}

pub fn solar_declination(n: i32) -> f64 {
    solar_declination_at(n as f64)
}

/// Hours of daylight for a latitude and a solar declination, both in degrees.
///
/// Above the polar circle the sun may stay up or down all day; that is
/// decided by comparing signs before the hour-angle formula is consulted.
/// Everywhere else the acos argument is clamped so that rounding noise near
/// the poles cannot leave its domain.
pub fn daylight_hours(latitude: f64, declination: f64) -> f64 {
    let phi = deg_to_rad(latitude);
    let delta = deg_to_rad(declination);
    let cos_h = -phi.tan() * delta.tan();

    let lat_abs = latitude.abs();
    let decl_abs = declination.abs();
    let polar_limit = 90.0 - lat_abs;

    if lat_abs >= POLAR_CIRCLE_LATITUDE && decl_abs > polar_limit {
        return if sign(latitude) == sign(declination) {
            HOURS_PER_DAY
        } else {
            0.0
        };
    }

    let h = cos_h.clamp(-1.0, 1.0).acos();
    (2.0 * h / std::f64::consts::PI) * 12.0
}

pub fn daylight_hours_for_day(latitude: f64, n: i32) -> f64 {
    daylight_hours(latitude, solar_declination(n))
}

pub fn daylight_hours_on<Tz: TimeZone>(latitude: f64, dt: &DateTime<Tz>) -> f64 {
    let utc = dt.with_timezone(&Utc);
    daylight_hours_for_day(latitude, utc.ordinal() as i32)
}

/// Sunrise and sunset in minutes after local solar midnight, placed
/// symmetrically around solar noon.
pub fn daylight_window(latitude: f64, n: i32) -> SunriseSunset {
    let half_day_minutes = daylight_hours_for_day(latitude, n) * 30.0;
    SunriseSunset {
        sunrise: (SOLAR_NOON_MINUTES - half_day_minutes).round() as i32,
        sunset: (SOLAR_NOON_MINUTES + half_day_minutes).round() as i32,
    }
}
