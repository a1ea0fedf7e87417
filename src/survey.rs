use crate::angles;
use crate::types::{DaylightGrid, SurveyConfig, SurveyReport, YearlyTotal};

/// `samples` evenly spaced values over `[start, end]`, both ends included.
pub fn linspace(start: f64, end: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (samples - 1) as f64;
            let mut values: Vec<f64> = (0..samples).map(|i| start + step * i as f64).collect();
            values[samples - 1] = end;
            values
        }
    }
}

pub fn day_range(first: i32, last: i32) -> Vec<i32> {
    (first..=last).collect()
}

pub fn yearly_total(latitude: f64, days: &[i32]) -> f64 {
    days.iter()
        .map(|&day| angles::daylight_hours_for_day(latitude, day))
        .sum()
}

pub fn yearly_totals(latitudes: &[f64], days: &[i32]) -> Vec<YearlyTotal> {
    latitudes
        .iter()
        .map(|&latitude| YearlyTotal {
            latitude,
            total_hours: yearly_total(latitude, days),
        })
        .collect()
}

pub fn daylight_grid(latitudes: &[f64], days: &[i32]) -> DaylightGrid {
    let hours = days
        .iter()
        .map(|&day| {
            let decl = angles::solar_declination(day);
            latitudes
                .iter()
                .map(|&lat| angles::daylight_hours(lat, decl))
                .collect()
        })
        .collect();

    DaylightGrid {
        latitudes: latitudes.to_vec(),
        days: days.to_vec(),
        hours,
    }
}

pub fn format_total_line(total: &YearlyTotal) -> String {
    format!(
        "Latitude {:.1}°: Total daylight hours throughout the year = {:.2} hours",
        total.latitude, total.total_hours
    )
}

pub fn run_survey(config: &SurveyConfig) -> SurveyReport {
    let latitudes = linspace(
        config.latitude_min,
        config.latitude_max,
        config.latitude_samples,
    );
    let days = day_range(config.first_day, config.last_day);
    log::info!(
        "Surveying {} latitudes over days {}..={}",
        latitudes.len(),
        config.first_day,
        config.last_day
    );

    let totals = yearly_totals(&latitudes, &days);
    log::debug!("Computed {} yearly totals", totals.len());

    let grid = daylight_grid(&latitudes, &days);
    log::debug!("Built daylight grid: {} x {}", grid.rows(), grid.cols());

    SurveyReport { totals, grid }
}
