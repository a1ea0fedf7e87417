pub mod angles;
pub mod error;
pub mod plot;
pub mod survey;
pub mod types;

pub use angles::{
    day_of_year, daylight_hours, daylight_hours_for_day, daylight_hours_on, daylight_window,
    deg_to_rad, rad_to_deg, sign, solar_declination, solar_declination_at, DAYS_PER_YEAR,
    DECLINATION_AMPLITUDE, EQUINOX_DAY, HOURS_PER_DAY, POLAR_CIRCLE_LATITUDE,
};

pub use error::PlotError;

pub use plot::{rasterize, viridis, PngSurfaceRenderer, SurfaceRenderer};

pub use survey::{
    daylight_grid, day_range, format_total_line, linspace, run_survey, yearly_total,
    yearly_totals,
};

pub use types::{
    DaylightGrid, PlotConfig, SunriseSunset, SurveyConfig, SurveyReport, YearlyTotal,
};
