#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    #[error("Empty surface grid: {rows} rows x {cols} columns")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("Ragged surface grid: {axis} has {actual} entries, expected {expected}")]
    RaggedGrid {
        axis: &'static str,
        actual: usize,
        expected: usize,
    },

    #[error("Invalid canvas size: {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("Failed to write surface image: {0}")]
    Image(#[from] image::ImageError),
}
