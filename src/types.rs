use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunriseSunset {
    pub sunrise: i32,
    pub sunset: i32,
}

impl SunriseSunset {
    pub fn daylight_minutes(&self) -> i32 {
        self.sunset - self.sunrise
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearlyTotal {
    pub latitude: f64,
    pub total_hours: f64,
}

/// Instantaneous daylight hours over a (latitude, day) mesh.
///
/// `hours[d][l]` is the daylight length at `latitudes[l]` on `days[d]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DaylightGrid {
    pub latitudes: Vec<f64>,
    pub days: Vec<i32>,
    pub hours: Vec<Vec<f64>>,
}

impl DaylightGrid {
    pub fn rows(&self) -> usize {
        self.hours.len()
    }

    pub fn cols(&self) -> usize {
        self.hours.first().map_or(0, Vec::len)
    }

    pub fn get(&self, day_index: usize, latitude_index: usize) -> Option<f64> {
        self.hours.get(day_index)?.get(latitude_index).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurveyConfig {
    pub latitude_min: f64,
    pub latitude_max: f64,
    pub latitude_samples: usize,
    pub first_day: i32,
    pub last_day: i32,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            latitude_min: -90.0,
            latitude_max: 90.0,
            latitude_samples: 100,
            first_day: 1,
            last_day: 365,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub width: u32,
    pub height: u32,
    pub output_path: PathBuf,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            output_path: PathBuf::from("daylight_surface.png"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SurveyReport {
    pub totals: Vec<YearlyTotal>,
    pub grid: DaylightGrid,
}
