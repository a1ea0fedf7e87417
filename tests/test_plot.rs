use image::Rgb;

use daylight_survey::error::PlotError;
use daylight_survey::plot::*;
use daylight_survey::survey::{day_range, daylight_grid, linspace};
use daylight_survey::types::{DaylightGrid, PlotConfig};

fn small_grid() -> DaylightGrid {
    daylight_grid(&linspace(-90.0, 90.0, 12), &day_range(1, 365))
}

fn small_config() -> PlotConfig {
    PlotConfig {
        width: 200,
        height: 120,
        ..PlotConfig::default()
    }
}

// ── Colormap ──

#[test]
fn test_viridis_endpoints() {
    assert_eq!(viridis(0.0), [68, 1, 84]);
    assert_eq!(viridis(1.0), [253, 231, 37]);
    assert_eq!(viridis(0.5), [33, 144, 141]);
}

#[test]
fn test_viridis_clamps_input() {
    assert_eq!(viridis(-3.0), viridis(0.0));
    assert_eq!(viridis(7.0), viridis(1.0));
    assert_eq!(viridis(f64::NAN), viridis(0.0));
}

#[test]
fn test_viridis_brightens_monotonically() {
    let luma = |c: [u8; 3]| c[0] as u32 + c[1] as u32 + c[2] as u32;
    let mut prev = luma(viridis(0.0));
    for i in 1..=20 {
        let cur = luma(viridis(i as f64 / 20.0));
        assert!(cur >= prev, "t={} luma {} < {}", i as f64 / 20.0, cur, prev);
        prev = cur;
    }
}

// ── Rasterizer ──

#[test]
fn test_default_plot_config() {
    let c = PlotConfig::default();
    assert_eq!((c.width, c.height), (1000, 600));
    assert_eq!(c.output_path.to_str(), Some("daylight_surface.png"));
}

#[test]
fn test_rasterize_draws_surface() {
    let image = rasterize(&small_grid(), &small_config()).unwrap();
    assert_eq!(image.dimensions(), (200, 120));

    let background = Rgb([255u8, 255, 255]);
    let painted = image.pixels().filter(|&&p| p != background).count();
    assert!(painted > 500, "only {} painted pixels", painted);

    let polar_day = Rgb(viridis(1.0));
    assert!(
        image.pixels().any(|&p| p == polar_day),
        "no full-daylight pixels drawn"
    );
}

#[test]
fn test_rasterize_single_row_draws_axes_only() {
    let grid = daylight_grid(&linspace(-45.0, 45.0, 3), &[81]);
    let image = rasterize(&grid, &small_config()).unwrap();
    let surface_colour = Rgb(viridis(0.5));
    assert!(image.pixels().all(|&p| p != surface_colour));
}

#[test]
fn test_rasterize_rejects_empty_grid() {
    let grid = daylight_grid(&[], &day_range(1, 10));
    let err = rasterize(&grid, &small_config()).unwrap_err();
    assert!(matches!(err, PlotError::EmptyGrid { rows: 10, cols: 0 }), "{}", err);
}

#[test]
fn test_rasterize_rejects_ragged_grid() {
    let mut grid = small_grid();
    grid.hours[5].pop();
    let err = rasterize(&grid, &small_config()).unwrap_err();
    assert!(
        matches!(err, PlotError::RaggedGrid { axis: "latitudes", actual: 11, expected: 12 }),
        "{}",
        err
    );

    let mut grid = small_grid();
    grid.hours.pop();
    let err = rasterize(&grid, &small_config()).unwrap_err();
    assert!(
        matches!(err, PlotError::RaggedGrid { axis: "days", actual: 364, expected: 365 }),
        "{}",
        err
    );
}

#[test]
fn test_rasterize_rejects_zero_canvas() {
    let config = PlotConfig {
        width: 0,
        ..small_config()
    };
    let err = rasterize(&small_grid(), &config).unwrap_err();
    assert!(matches!(err, PlotError::InvalidCanvas { width: 0, height: 120 }));
    assert_eq!(err.to_string(), "Invalid canvas size: 0x120");
}

// ── PNG output ──

#[test]
fn test_png_renderer_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("surface.png");
    let renderer = PngSurfaceRenderer::new(PlotConfig {
        output_path: path.clone(),
        ..small_config()
    });

    renderer.render(&small_grid()).unwrap();

    let written = image::open(&path).unwrap();
    assert_eq!((written.width(), written.height()), (200, 120));
}

#[test]
fn test_png_renderer_reports_io_failure() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = PngSurfaceRenderer::new(PlotConfig {
        output_path: dir.path().join("missing").join("surface.png"),
        ..small_config()
    });

    let err = renderer.render(&small_grid()).unwrap_err();
    assert!(matches!(err, PlotError::Image(_)), "{}", err);
}
