//! CPU rasterization of the figure's patch layer.
//!
//! Paints face fills and one-pixel edges onto a white canvas. Text labels
//! stay in the figure's vector data: glyph shaping belongs to the embedding
//! application, so the raster layer covers rectangles only.

use image::{Rgba, RgbaImage};
use swatchplot_common::Color;

use crate::figure::{Figure, RectPatch};

impl Figure {
    /// Rasterize the patch layer to an RGBA buffer of the canvas size.
    ///
    /// Patches are painted in insertion order and clipped to the canvas.
    /// The caller owns the buffer and is responsible for any file export.
    pub fn to_rgba(&self) -> RgbaImage {
        let width = self.width.round().max(1.0) as u32;
        let height = self.height.round().max(1.0) as u32;
        let mut canvas = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));
        for patch in &self.patches {
            paint_patch(&mut canvas, patch);
        }
        canvas
    }
}

fn to_pixel(color: Color) -> Rgba<u8> {
    Rgba([color.r, color.g, color.b, color.a])
}

/// Fill one patch, outermost pixel ring in the edge color.
fn paint_patch(canvas: &mut RgbaImage, patch: &RectPatch) {
    let (width, height) = canvas.dimensions();
    let x0 = patch.rect.x.round().clamp(0.0, width as f32) as u32;
    let y0 = patch.rect.y.round().clamp(0.0, height as f32) as u32;
    let x1 = (patch.rect.x + patch.rect.width)
        .round()
        .clamp(0.0, width as f32) as u32;
    let y1 = (patch.rect.y + patch.rect.height)
        .round()
        .clamp(0.0, height as f32) as u32;

    let face = to_pixel(patch.face);
    let edge = to_pixel(patch.edge);

    for y in y0..y1 {
        for x in x0..x1 {
            let on_border = x == x0 || x + 1 == x1 || y == y0 || y + 1 == y1;
            canvas.put_pixel(x, y, if on_border { edge } else { face });
        }
    }
}
