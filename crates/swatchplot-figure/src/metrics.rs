//! Cell geometry for the swatch grid.
//!
//! All dimensions are in pixels at the figure's dots-per-inch. The defaults
//! reproduce the classic named-colors chart layout.

/// Fixed geometry of one swatch cell.
#[derive(Debug, Clone, Copy)]
pub struct CellMetrics {
    /// Full cell width in pixels, swatch plus label area.
    pub cell_width: f32,
    /// Full cell height in pixels.
    pub cell_height: f32,
    /// Width of the colored swatch rectangle.
    pub swatch_width: f32,
    /// Height of the colored swatch rectangle.
    pub swatch_height: f32,
    /// Outer margin around the grid on all sides.
    pub margin: f32,
    /// Label font size in points.
    pub font_size: f32,
    /// Horizontal gap between the swatch and its label.
    pub label_gap: f32,
    /// Figure resolution in dots per inch.
    pub dpi: f32,
}

impl Default for CellMetrics {
    fn default() -> Self {
        default_cell_metrics()
    }
}

/// Returns a `CellMetrics` with the standard chart dimensions.
///
/// - `cell_width`: 212, `cell_height`: 22
/// - `swatch_width`: 48, `swatch_height`: 18
/// - `margin`: 12, `label_gap`: 7, `font_size`: 14, `dpi`: 72
pub fn default_cell_metrics() -> CellMetrics {
    CellMetrics {
        cell_width: 212.0,
        cell_height: 22.0,
        swatch_width: 48.0,
        swatch_height: 18.0,
        margin: 12.0,
        font_size: 14.0,
        label_gap: 7.0,
        dpi: 72.0,
    }
}
