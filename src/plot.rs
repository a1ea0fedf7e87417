use glam::{Mat4, Vec2, Vec3};
use image::{ImageFormat, Rgb, RgbImage};

use crate::angles::HOURS_PER_DAY;
use crate::error::PlotError;
use crate::types::{DaylightGrid, PlotConfig};

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS_COLOR: Rgb<u8> = Rgb([110, 110, 110]);

// matplotlib viridis sampled at t = 0, 1/8, ..., 1
const VIRIDIS: [[u8; 3]; 9] = [
    [68, 1, 84],
    [71, 44, 122],
    [59, 81, 139],
    [44, 113, 142],
    [33, 144, 141],
    [39, 173, 129],
    [92, 200, 99],
    [170, 220, 50],
    [253, 231, 37],
];

// Camera placed at 30° elevation and -60° azimuth around the box centre.
const CAMERA_DISTANCE: f32 = 4.2;
const CAMERA_ELEVATION_DEG: f32 = 30.0;
const CAMERA_AZIMUTH_DEG: f32 = -60.0;
const FIELD_OF_VIEW_DEG: f32 = 40.0;
const SURFACE_HEIGHT: f32 = 1.0;

pub trait SurfaceRenderer {
    fn render(&self, grid: &DaylightGrid) -> Result<(), PlotError>;
}

/// Renders the daylight surface off-screen and saves it as a PNG.
#[derive(Debug, Clone, Default)]
pub struct PngSurfaceRenderer {
    pub config: PlotConfig,
}

impl PngSurfaceRenderer {
    pub fn new(config: PlotConfig) -> Self {
        Self { config }
    }
}

impl SurfaceRenderer for PngSurfaceRenderer {
    fn render(&self, grid: &DaylightGrid) -> Result<(), PlotError> {
        let image = rasterize(grid, &self.config)?;
        image.save_with_format(&self.config.output_path, ImageFormat::Png)?;
        log::info!(
            "Saved daylight surface to {}",
            self.config.output_path.display()
        );
        Ok(())
    }
}

pub fn viridis(t: f64) -> [u8; 3] {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = t * (VIRIDIS.len() - 1) as f64;
    let idx = (scaled.floor() as usize).min(VIRIDIS.len() - 2);
    let frac = scaled - idx as f64;
    let (lo, hi) = (VIRIDIS[idx], VIRIDIS[idx + 1]);
    let mut out = [0u8; 3];
    for c in 0..3 {
        let v = lo[c] as f64 + (hi[c] as f64 - lo[c] as f64) * frac;
        out[c] = v.round() as u8;
    }
    out
}

fn validate(grid: &DaylightGrid, config: &PlotConfig) -> Result<(), PlotError> {
    if config.width == 0 || config.height == 0 {
        return Err(PlotError::InvalidCanvas {
            width: config.width,
            height: config.height,
        });
    }
    if grid.days.is_empty() || grid.latitudes.is_empty() {
        return Err(PlotError::EmptyGrid {
            rows: grid.days.len(),
            cols: grid.latitudes.len(),
        });
    }
    if grid.rows() != grid.days.len() {
        return Err(PlotError::RaggedGrid {
            axis: "days",
            actual: grid.rows(),
            expected: grid.days.len(),
        });
    }
    if let Some(row) = grid.hours.iter().find(|r| r.len() != grid.latitudes.len()) {
        return Err(PlotError::RaggedGrid {
            axis: "latitudes",
            actual: row.len(),
            expected: grid.latitudes.len(),
        });
    }
    Ok(())
}

fn span(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

fn to_unit(v: f64, (lo, hi): (f64, f64)) -> f32 {
    if hi > lo {
        ((v - lo) / (hi - lo) * 2.0 - 1.0) as f32
    } else {
        0.0
    }
}

struct Camera {
    eye: Vec3,
    view_proj: Mat4,
    width: f32,
    height: f32,
}

impl Camera {
    fn new(width: u32, height: u32) -> Self {
        let elev = CAMERA_ELEVATION_DEG.to_radians();
        let azim = CAMERA_AZIMUTH_DEG.to_radians();
        let target = Vec3::new(0.0, 0.0, SURFACE_HEIGHT * 0.5);
        let eye = target
            + CAMERA_DISTANCE
                * Vec3::new(elev.cos() * azim.cos(), elev.cos() * azim.sin(), elev.sin());
        let view = Mat4::look_at_rh(eye, target, Vec3::Z);
        let proj = Mat4::perspective_rh(
            FIELD_OF_VIEW_DEG.to_radians(),
            width as f32 / height as f32,
            0.1,
            100.0,
        );
        Self {
            eye,
            view_proj: proj * view,
            width: width as f32,
            height: height as f32,
        }
    }

    fn to_screen(&self, p: Vec3) -> Vec2 {
        let ndc = self.view_proj.project_point3(p);
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.width,
            (1.0 - ndc.y) * 0.5 * self.height,
        )
    }
}

fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

fn fill_triangle(image: &mut RgbImage, v: [Vec2; 3], color: Rgb<u8>) {
    let area = edge(v[0], v[1], v[2]);
    if !area.is_finite() || area.abs() < 1e-6 {
        return;
    }
    let max_x = (image.width() - 1) as f32;
    let max_y = (image.height() - 1) as f32;
    let min = v[0].min(v[1]).min(v[2]);
    let max = v[0].max(v[1]).max(v[2]);
    if max.x < 0.0 || max.y < 0.0 || min.x > max_x || min.y > max_y {
        return;
    }

    let (x0, x1) = (min.x.floor().max(0.0) as u32, max.x.ceil().min(max_x) as u32);
    let (y0, y1) = (min.y.floor().max(0.0) as u32, max.y.ceil().min(max_y) as u32);
    for y in y0..=y1 {
        for x in x0..=x1 {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let w0 = edge(v[1], v[2], p) * area.signum();
            let w1 = edge(v[2], v[0], p) * area.signum();
            let w2 = edge(v[0], v[1], p) * area.signum();
            if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                image.put_pixel(x, y, color);
            }
        }
    }
}

fn draw_line(image: &mut RgbImage, a: Vec2, b: Vec2, color: Rgb<u8>) {
    let steps = (b - a).abs().max_element().ceil().max(1.0) as u32;
    for i in 0..=steps {
        let p = a.lerp(b, i as f32 / steps as f32);
        if p.x >= 0.0 && p.y >= 0.0 {
            let (x, y) = (p.x as u32, p.y as u32);
            if x < image.width() && y < image.height() {
                image.put_pixel(x, y, color);
            }
        }
    }
}

fn draw_axes(image: &mut RgbImage, camera: &Camera) {
    let floor = [
        Vec3::new(-1.0, -1.0, 0.0),
        Vec3::new(1.0, -1.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(-1.0, 1.0, 0.0),
    ];
    for i in 0..floor.len() {
        let (a, b) = (floor[i], floor[(i + 1) % floor.len()]);
        draw_line(image, camera.to_screen(a), camera.to_screen(b), AXIS_COLOR);
    }
    // height axis rises from the back corner
    let base = Vec3::new(-1.0, 1.0, 0.0);
    let top = base + Vec3::new(0.0, 0.0, SURFACE_HEIGHT);
    draw_line(image, camera.to_screen(base), camera.to_screen(top), AXIS_COLOR);
}

/// Draws the grid as a shaded surface: latitude along x, day along y and
/// daylight hours as height, coloured by viridis over [0, 24] hours.
pub fn rasterize(grid: &DaylightGrid, config: &PlotConfig) -> Result<RgbImage, PlotError> {
    validate(grid, config)?;

    let mut image = RgbImage::from_pixel(config.width, config.height, BACKGROUND);
    let camera = Camera::new(config.width, config.height);
    draw_axes(&mut image, &camera);

    let lat_span = span(grid.latitudes.iter().copied());
    let day_span = span(grid.days.iter().map(|&d| d as f64));
    let point = |d: usize, l: usize| {
        Vec3::new(
            to_unit(grid.latitudes[l], lat_span),
            to_unit(grid.days[d] as f64, day_span),
            (grid.hours[d][l] / HOURS_PER_DAY) as f32 * SURFACE_HEIGHT,
        )
    };

    let mut quads = Vec::with_capacity(grid.rows().saturating_sub(1) * grid.cols().saturating_sub(1));
    for d in 0..grid.rows().saturating_sub(1) {
        for l in 0..grid.cols().saturating_sub(1) {
            let corners = [point(d, l), point(d, l + 1), point(d + 1, l + 1), point(d + 1, l)];
            let centre = (corners[0] + corners[1] + corners[2] + corners[3]) * 0.25;
            let mean_hours = (grid.hours[d][l]
                + grid.hours[d][l + 1]
                + grid.hours[d + 1][l + 1]
                + grid.hours[d + 1][l])
                / 4.0;
            quads.push((centre.distance(camera.eye), corners, mean_hours));
        }
    }
    quads.sort_by(|a, b| b.0.total_cmp(&a.0));
    log::debug!("Rasterizing {} surface quads", quads.len());

    for (_, corners, mean_hours) in &quads {
        let color = Rgb(viridis(mean_hours / HOURS_PER_DAY));
        let s = corners.map(|c| camera.to_screen(c));
        fill_triangle(&mut image, [s[0], s[1], s[2]], color);
        fill_triangle(&mut image, [s[0], s[2], s[3]], color);
    }

    Ok(image)
}
