//! Swatch grid assembly.
//!
//! Turns a name→color mapping into a figure with one labeled swatch per
//! entry, laid out column-major on a fixed cell grid.

use indexmap::IndexMap;
use tracing::debug;

use swatchplot_common::{parse_color, Color, FigureError, HsvKey};

use crate::figure::{Figure, HAlign, Rect, RectPatch, TextLabel, VAlign};
use crate::grid::GridLayout;
use crate::metrics::CellMetrics;

/// Outline drawn around every swatch (70% gray).
const SWATCH_EDGE: Color = Color {
    r: 179,
    g: 179,
    b: 179,
    a: 255,
};

/// Options for [`plot_colortable`].
#[derive(Debug, Clone, Copy)]
pub struct PlotOptions {
    /// Number of grid columns.
    pub ncols: usize,
    /// Sort entries by (hue, saturation, value) of their color; when false
    /// the mapping's own order is kept.
    pub sort_colors: bool,
    /// Cell geometry.
    pub metrics: CellMetrics,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            ncols: 4,
            sort_colors: true,
            metrics: CellMetrics::default(),
        }
    }
}

/// Lay out a grid of labeled color swatches and return it as a figure.
///
/// Every value in `colors` is resolved up front; the first unknown name or
/// malformed value fails the whole call. With `sort_colors` the entries are
/// ordered by the HSV key of their resolved color, ties keeping insertion
/// order. The canvas always spans `ncols` full cells plus margins, so no
/// content is clipped. An empty mapping yields a margin-only figure.
pub fn plot_colortable(
    colors: &IndexMap<String, String>,
    options: &PlotOptions,
) -> Result<Figure, FigureError> {
    let m = options.metrics;

    let mut entries: Vec<(&str, Color)> = Vec::with_capacity(colors.len());
    for (name, value) in colors {
        entries.push((name.as_str(), parse_color(value)?));
    }

    if options.sort_colors {
        // Stable sort: equal keys keep insertion order.
        entries.sort_by_key(|&(_, color)| HsvKey::of(color));
    }

    let grid = GridLayout::new(entries.len(), options.ncols)?;
    debug!(
        entries = grid.count,
        ncols = grid.ncols,
        nrows = grid.nrows,
        "laying out swatch grid"
    );

    let width = m.cell_width * grid.ncols as f32 + 2.0 * m.margin;
    let height = m.cell_height * grid.nrows as f32 + 2.0 * m.margin;
    let mut figure = Figure::new(width, height, m.dpi);

    for (i, &(name, color)) in entries.iter().enumerate() {
        let pos = grid.position(i);
        let cell_x = m.margin + pos.col as f32 * m.cell_width;
        let center_y = m.margin + pos.row as f32 * m.cell_height + m.cell_height / 2.0;

        figure.add_patch(RectPatch {
            rect: Rect {
                x: cell_x,
                y: center_y - m.swatch_height / 2.0,
                width: m.swatch_width,
                height: m.swatch_height,
            },
            face: color,
            edge: SWATCH_EDGE,
        });
        figure.add_label(TextLabel {
            x: cell_x + m.swatch_width + m.label_gap,
            y: center_y,
            text: name.to_owned(),
            font_size: m.font_size,
            h_align: HAlign::Left,
            v_align: VAlign::Center,
        });
    }

    Ok(figure)
}
