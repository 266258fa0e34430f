//! Quarter-partition of the CSS4 palette.
//!
//! Sorts the built-in palette by color and splits it into four contiguous
//! groups, one name/hex-code column pair per group.

use tracing::debug;

use swatchplot_common::{Color, HsvKey, CSS4_COLORS};

use crate::table::{Column, ColorTable};

/// Split a slice into four contiguous groups.
///
/// Cut points sit at `n/4`, `2n/4` and `3n/4` by integer division; the last
/// group absorbs the remainder, so it is at least as long as each of the
/// first three. Concatenating the groups reproduces the input.
pub fn quarter_split<T>(items: &[T]) -> [&[T]; 4] {
    let n = items.len();
    let cuts = [n / 4, 2 * n / 4, 3 * n / 4];
    [
        &items[..cuts[0]],
        &items[cuts[0]..cuts[1]],
        &items[cuts[1]..cuts[2]],
        &items[cuts[2]..],
    ]
}

/// Build the CSS4 named-color table.
///
/// The palette is sorted by the HSV key of each entry's color (stable, so
/// duplicate values such as aqua/cyan keep their alphabetical order), split
/// into quarters, and unzipped into eight columns in fixed order: `Color 1`,
/// `Hex Code 1` through `Color 4`, `Hex Code 4`. Hex codes are uppercase
/// `#RRGGBB`.
pub fn css4_color_table() -> ColorTable {
    let mut entries: Vec<(&str, u32)> = CSS4_COLORS.to_vec();
    entries.sort_by_key(|&(_, value)| HsvKey::of(Color::from_rgb24(value)));

    let groups = quarter_split(&entries);
    debug!(
        entries = entries.len(),
        group_len = groups[0].len(),
        "partitioned palette"
    );

    let mut columns = Vec::with_capacity(8);
    for (i, group) in groups.iter().enumerate() {
        let names = group.iter().map(|&(name, _)| name.to_owned()).collect();
        let hex_codes = group
            .iter()
            .map(|&(_, value)| format!("#{value:06X}"))
            .collect();
        columns.push(Column {
            name: format!("Color {}", i + 1),
            values: names,
        });
        columns.push(Column {
            name: format!("Hex Code {}", i + 1),
            values: hex_codes,
        });
    }

    ColorTable { columns }
}
