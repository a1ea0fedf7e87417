use daylight_survey::plot::{PngSurfaceRenderer, SurfaceRenderer};
use daylight_survey::survey::{format_total_line, run_survey};
use daylight_survey::types::{PlotConfig, SurveyConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let report = run_survey(&SurveyConfig::default());
    for total in &report.totals {
        println!("{}", format_total_line(total));
    }

    let renderer = PngSurfaceRenderer::new(PlotConfig::default());
    renderer.render(&report.grid)?;

    Ok(())
}
