//! Braille encoder module - packs the pixel grid into glyphs
//!
//! Each glyph in the Braille block (U+2800..U+28FF) encodes a 2-pixel-wide,
//! 4-pixel-tall block of the grid through the eight standard dot positions:
//!
//! ```text
//! 1 4
//! 2 5
//! 3 6
//! 7 8
//! ```
//!
//! Dot `i + 1` maps to bit `i` of the code-point offset (low-endian), so an
//! all-lit block is U+28FF and an empty block is the blank glyph U+2800.
//! Encoding is a pure function of a grid snapshot.

use crate::grid::PixelGrid;

/// Pixel columns covered by one glyph.
pub const CELL_WIDTH: usize = 2;

/// (row, col) offsets of dots 1-8 within a cell, in bit order.
const DOT_OFFSETS: [(usize, usize); 8] = [
    (0, 0),
    (1, 0),
    (2, 0),
    (0, 1),
    (1, 1),
    (2, 1),
    (3, 0),
    (3, 1),
];

/// Number of glyphs needed to cover `width` pixel columns.
pub fn cell_count(width: usize) -> usize {
    width.div_ceil(CELL_WIDTH)
}

/// Encode one 2x4 block of the grid into its Braille glyph.
///
/// For an odd grid width the final cell's right half samples the phantom
/// column past the buffer, which always reads unlit.
///
/// # Panics
///
/// Panics if `cell` is not a valid cell index for the grid's width. That is
/// a caller bug, not a runtime condition to recover from.
pub fn cell_glyph(grid: &PixelGrid, cell: usize) -> char {
    let cells = cell_count(grid.width());
    assert!(
        cell < cells,
        "cell index {cell} out of range for {cells} cells"
    );

    let col = cell * CELL_WIDTH;
    let mut mask = 0u32;
    for (bit, &(dr, dc)) in DOT_OFFSETS.iter().enumerate() {
        if grid.get(dr, col + dc) {
            mask |= 1 << bit;
        }
    }
    // The Braille block maps the 8-bit mask directly onto U+2800 + mask.
    char::from_u32(0x2800 + mask).unwrap_or(' ')
}

/// Render the whole grid as one line of glyphs, leftmost cell first.
pub fn render(grid: &PixelGrid) -> String {
    (0..cell_count(grid.width()))
        .map(|cell| cell_glyph(grid, cell))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GRID_HEIGHT;

    #[test]
    fn test_cell_count_rounds_up() {
        assert_eq!(cell_count(1), 1);
        assert_eq!(cell_count(2), 1);
        assert_eq!(cell_count(3), 2);
        assert_eq!(cell_count(40), 20);
        assert_eq!(cell_count(41), 21);
    }

    #[test]
    fn test_render_length_matches_cell_count() {
        for width in 1..=41 {
            let grid = PixelGrid::new(width);
            assert_eq!(render(&grid).chars().count(), cell_count(width));
        }
    }

    #[test]
    fn test_empty_and_full_blocks() {
        let mut grid = PixelGrid::new(2);
        assert_eq!(cell_glyph(&grid, 0), '\u{2800}');

        for row in 0..GRID_HEIGHT {
            for col in 0..2 {
                grid.set(row, col, true);
            }
        }
        assert_eq!(cell_glyph(&grid, 0), '\u{28FF}');
    }

    #[test]
    fn test_dot_order_bit_mapping() {
        // Each dot position lights exactly its documented bit.
        let expected: [((usize, usize), u32); 8] = [
            ((0, 0), 0),
            ((1, 0), 1),
            ((2, 0), 2),
            ((0, 1), 3),
            ((1, 1), 4),
            ((2, 1), 5),
            ((3, 0), 6),
            ((3, 1), 7),
        ];
        for ((row, col), bit) in expected {
            let mut grid = PixelGrid::new(2);
            grid.set(row, col, true);
            assert_eq!(
                cell_glyph(&grid, 0) as u32,
                0x2800 + (1 << bit),
                "dot at ({row}, {col}) should set bit {bit}"
            );
        }
    }

    #[test]
    fn test_odd_width_phantom_column_unlit() {
        let mut grid = PixelGrid::new(3);
        for row in 0..GRID_HEIGHT {
            for col in 0..3 {
                grid.set(row, col, true);
            }
        }
        // Final cell covers columns 2 and 3; column 3 does not exist, so
        // only the left-half dots (1, 2, 3, 7) can be lit.
        assert_eq!(cell_glyph(&grid, 1), '\u{2847}');
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_cell_index_out_of_range_panics() {
        let grid = PixelGrid::new(4);
        let _ = cell_glyph(&grid, 2);
    }

    #[test]
    fn test_render_multi_cell_ordering() {
        let mut grid = PixelGrid::new(6);
        // One dot-1 pixel in the middle cell only.
        grid.set(0, 2, true);
        assert_eq!(render(&grid), "\u{2800}\u{2801}\u{2800}");
    }
}
