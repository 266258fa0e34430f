//! The in-memory figure scene.
//!
//! A figure is a flat list of rectangle patches and text labels in y-down
//! pixel coordinates, plus the canvas dimensions. Nothing here touches a
//! display or the filesystem; the caller owns the returned scene and decides
//! how to present or export it.

use serde::{Deserialize, Serialize};
use swatchplot_common::Color;

/// Axis-aligned rectangle in y-down pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A filled rectangle with an outline color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPatch {
    pub rect: Rect,
    pub face: Color,
    pub edge: Color,
}

/// Horizontal anchor of a text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical anchor of a text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// A positioned text label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLabel {
    /// Anchor x in pixels.
    pub x: f32,
    /// Anchor y in pixels.
    pub y: f32,
    pub text: String,
    pub font_size: f32,
    pub h_align: HAlign,
    pub v_align: VAlign,
}

/// A rendered figure: scene primitives plus canvas dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// Canvas width in pixels.
    pub width: f32,
    /// Canvas height in pixels.
    pub height: f32,
    /// Resolution in dots per inch.
    pub dpi: f32,
    pub patches: Vec<RectPatch>,
    pub labels: Vec<TextLabel>,
}

impl Figure {
    /// Create an empty figure with the given canvas size.
    pub fn new(width: f32, height: f32, dpi: f32) -> Self {
        Self {
            width,
            height,
            dpi,
            patches: Vec::new(),
            labels: Vec::new(),
        }
    }

    pub fn add_patch(&mut self, patch: RectPatch) {
        self.patches.push(patch);
    }

    pub fn add_label(&mut self, label: TextLabel) {
        self.labels.push(label);
    }

    /// Canvas size in inches at the figure's dpi.
    pub fn size_inches(&self) -> (f32, f32) {
        (self.width / self.dpi, self.height / self.dpi)
    }
}
