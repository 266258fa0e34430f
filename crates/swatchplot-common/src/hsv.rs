//! HSV sort keys.
//!
//! Both the swatch grid and the palette table order colors by the same
//! (hue, saturation, value) key. The key is a total order, so sorting with a
//! stable sort breaks ties by insertion order.

use crate::color::Color;
use palette::{FromColor, Hsv, Srgb};
use std::cmp::Ordering;

/// The (hue, saturation, value) triple of a color, compared lexicographically.
///
/// Hue is in positive degrees (0.0..360.0); saturation and value are in
/// 0.0..=1.0. Alpha does not participate.
#[derive(Debug, Clone, Copy)]
pub struct HsvKey {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

impl HsvKey {
    /// Compute the sort key for a color.
    pub fn of(color: Color) -> Self {
        let [r, g, b] = color.to_rgb_f32();
        let hsv = Hsv::from_color(Srgb::new(r, g, b));
        Self {
            hue: hsv.hue.into_positive_degrees(),
            saturation: hsv.saturation,
            value: hsv.value,
        }
    }
}

impl PartialEq for HsvKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HsvKey {}

impl PartialOrd for HsvKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HsvKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.hue
            .total_cmp(&other.hue)
            .then(self.saturation.total_cmp(&other.saturation))
            .then(self.value.total_cmp(&other.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues() {
        let red = HsvKey::of(Color::from_rgb(255, 0, 0));
        let green = HsvKey::of(Color::from_rgb(0, 255, 0));
        let blue = HsvKey::of(Color::from_rgb(0, 0, 255));

        assert!((red.hue - 0.0).abs() < 1e-3);
        assert!((green.hue - 120.0).abs() < 1e-3);
        assert!((blue.hue - 240.0).abs() < 1e-3);
        assert!(red < green && green < blue);
    }

    #[test]
    fn grays_have_zero_hue_and_saturation() {
        let black = HsvKey::of(Color::from_rgb(0, 0, 0));
        let gray = HsvKey::of(Color::from_rgb(128, 128, 128));
        let white = HsvKey::of(Color::from_rgb(255, 255, 255));

        assert_eq!(black.hue, 0.0);
        assert_eq!(black.saturation, 0.0);
        // Grays order by value alone
        assert!(black < gray && gray < white);
    }

    #[test]
    fn saturation_breaks_hue_ties() {
        // Same hue (0 deg), different saturation
        let pale = HsvKey::of(Color::from_rgb(255, 128, 128));
        let vivid = HsvKey::of(Color::from_rgb(255, 0, 0));
        assert!(pale < vivid);
    }

    #[test]
    fn value_breaks_saturation_ties() {
        let dark = HsvKey::of(Color::from_rgb(128, 0, 0));
        let bright = HsvKey::of(Color::from_rgb(255, 0, 0));
        assert!(dark < bright);
    }

    #[test]
    fn equal_colors_compare_equal() {
        let a = HsvKey::of(Color::from_rgb24(0x1e90ff));
        let b = HsvKey::of(Color::from_rgb24(0x1e90ff));
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }
}
