use chrono::TimeZone;
use chrono_tz::America::Chicago;

use daylight_survey::angles::{daylight_hours_on, daylight_window, solar_declination};
use daylight_survey::survey::{day_range, yearly_total};

fn main() {
    let latitude = 39.8;
    let days = day_range(1, 365);

    println!("=== Daylight Calculation Example ===");
    println!("Location: Springfield, IL ({:.1}°N)", latitude);
    println!();

    for (month, day) in [(3, 21), (6, 21), (9, 22), (12, 21)] {
        let dt = Chicago.with_ymd_and_hms(2026, month, day, 12, 0, 0).unwrap();
        let n = chrono::Datelike::ordinal(&dt) as i32;
        let window = daylight_window(latitude, n);
        println!("--- {} ---", dt.date_naive());
        println!("Declination: {:.2}°", solar_declination(n));
        println!("Daylight: {:.2} hours", daylight_hours_on(latitude, &dt));
        println!(
            "Sunrise/Sunset (solar time): {:02}:{:02} / {:02}:{:02}",
            window.sunrise / 60,
            window.sunrise % 60,
            window.sunset / 60,
            window.sunset % 60
        );
        println!();
    }

    println!(
        "Yearly total: {:.2} hours",
        yearly_total(latitude, &days)
    );
}
