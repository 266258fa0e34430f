pub mod figure;
pub mod grid;
pub mod metrics;
pub mod plot;
pub mod raster;

pub use figure::{Figure, HAlign, Rect, RectPatch, TextLabel, VAlign};
pub use grid::{GridLayout, GridPos};
pub use metrics::CellMetrics;
pub use plot::{plot_colortable, PlotOptions};
pub use swatchplot_common::FigureError;
