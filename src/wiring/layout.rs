//! Wiring layout table
//!
//! The strip enters the face at the top-left LED and snakes across the rows:
//!
//! ```text
//!   row 0:   0  1  2  3 ...  W-1      (left to right)
//!   row 1: 2W-1 ...         W         (right to left)
//!   row 2:  2W ...        3W-1        (left to right)
//!   ...
//!   row H:  m1 m2 .. m3 m4            (minute LEDs, columns 0, 1, W-2, W-1)
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, WiringError};

/// Number of minute LEDs on the auxiliary row
pub const MINUTE_COUNT: usize = 4;

/// Width and height of the visible letter grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    /// Derive the grid shape from stencil rows
    ///
    /// Width is the byte length of the first row, height the number of rows.
    /// Every row must have the same byte length.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let first = rows.first().ok_or(WiringError::EmptyStencil)?;
        let width = first.as_ref().len();
        if width == 0 {
            return Err(WiringError::EmptyRow);
        }

        for (row, text) in rows.iter().enumerate().skip(1) {
            let found = text.as_ref().len();
            if found != width {
                return Err(WiringError::RaggedStencil {
                    row,
                    expected: width,
                    found,
                });
            }
        }

        Ok(Self {
            width,
            height: rows.len(),
        })
    }

    /// Number of LEDs behind the letter grid (minute LEDs excluded)
    pub fn led_count(&self) -> usize {
        self.width * self.height
    }
}

/// Physical strip indices of the four minute LEDs, in marker order 1-4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MinuteLeds(pub [usize; MINUTE_COUNT]);

/// Minute LEDs of the french face, soldered on after the 11x10 letter grid
pub const FRENCH_MINUTE_LEDS: MinuteLeds = MinuteLeds([110, 111, 112, 113]);

/// Auxiliary row column holding the given minute marker
///
/// Markers 1 and 2 sit in the two leftmost columns, 3 and 4 in the two
/// rightmost ones.
pub fn minute_column(minute: u8, width: usize) -> Option<usize> {
    match minute {
        1 => Some(0),
        2 => Some(1),
        3 => Some(width.saturating_sub(2)),
        4 => Some(width.saturating_sub(1)),
        _ => None,
    }
}

/// Physical wiring variant of the clock face
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WiringLayout {
    /// Serpentine rows starting top-left, minute LEDs from [`FRENCH_MINUTE_LEDS`]
    #[default]
    French,
}

impl WiringLayout {
    /// Minute LEDs hard-wired on this variant
    pub fn minute_leds(self) -> MinuteLeds {
        match self {
            WiringLayout::French => FRENCH_MINUTE_LEDS,
        }
    }

    /// Build the layout table for this wiring
    ///
    /// `minute_leds` overrides the variant's own minute LEDs.
    pub fn build(self, dims: Dimensions, minute_leds: Option<MinuteLeds>) -> LayoutTable {
        let minute_leds = minute_leds.unwrap_or_else(|| self.minute_leds());
        match self {
            WiringLayout::French => LayoutTable::serpentine(dims, minute_leds),
        }
    }
}

impl fmt::Display for WiringLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WiringLayout::French => write!(f, "french"),
        }
    }
}

/// Lookup from logical `(x, y)` to physical strip index
///
/// Holds `(H + 1) x (W + 1)` cells. Row `H` is the auxiliary row for the
/// minute LEDs; column `W` is unused and reads as 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutTable {
    dims: Dimensions,
    cells: Vec<Vec<usize>>,
}

impl LayoutTable {
    /// Serpentine row-major wiring
    ///
    /// Row `r` owns the contiguous block `r*W .. r*W + W`, ascending on even
    /// rows and descending on odd rows.
    pub fn serpentine(dims: Dimensions, minute_leds: MinuteLeds) -> Self {
        let Dimensions { width, height } = dims;
        let mut cells = vec![vec![0; width + 1]; height + 1];

        for (y, row) in cells.iter_mut().take(height).enumerate() {
            let start = y * width;
            for (x, cell) in row.iter_mut().take(width).enumerate() {
                *cell = if y % 2 == 0 {
                    start + x
                } else {
                    start + (width - 1 - x)
                };
            }
        }

        // Later markers win if columns collide on very narrow faces
        let aux = &mut cells[height];
        for (minute, &led) in (1..).zip(minute_leds.0.iter()) {
            if let Some(x) = minute_column(minute, width) {
                aux[x] = led;
            }
        }

        Self { dims, cells }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn width(&self) -> usize {
        self.dims.width
    }

    pub fn height(&self) -> usize {
        self.dims.height
    }

    /// Physical index stored for `(x, y)`, with `x <= W` and `y <= H`
    pub fn index_at(&self, x: usize, y: usize) -> Result<usize> {
        self.cells
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .ok_or(WiringError::InvalidCoordinate {
                x,
                y,
                width: self.dims.width,
                height: self.dims.height,
            })
    }

    /// All rows including the auxiliary row
    pub fn rows(&self) -> impl Iterator<Item = &[usize]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Largest physical index referenced by the table
    pub fn max_index(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for LayoutTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell_width = self.max_index().to_string().len();
        for (y, row) in self.cells.iter().enumerate() {
            if y == self.dims.height {
                writeln!(f, "{}", "-".repeat((cell_width + 1) * self.dims.width))?;
            }
            let line: Vec<String> = row
                .iter()
                .take(self.dims.width)
                .map(|index| format!("{:>cell_width$}", index))
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> LayoutTable {
        let dims = Dimensions {
            width: 11,
            height: 10,
        };
        WiringLayout::French.build(dims, None)
    }

    #[test]
    fn test_dimensions_from_rows() {
        let dims = Dimensions::from_rows(&["ABC", "DEF"]).unwrap();
        assert_eq!(dims.width, 3);
        assert_eq!(dims.height, 2);
        assert_eq!(dims.led_count(), 6);
    }

    #[test]
    fn test_dimensions_use_byte_length() {
        // 'É' is two bytes in UTF-8
        let dims = Dimensions::from_rows(&["ÉTÉ", "ABCDE"]).unwrap();
        assert_eq!(dims.width, 5);
    }

    #[test]
    fn test_dimensions_reject_bad_shapes() {
        let empty: [&str; 0] = [];
        assert_eq!(
            Dimensions::from_rows(&empty),
            Err(WiringError::EmptyStencil)
        );
        assert_eq!(Dimensions::from_rows(&["", ""]), Err(WiringError::EmptyRow));
        assert_eq!(
            Dimensions::from_rows(&["ABC", "DEF", "GH"]),
            Err(WiringError::RaggedStencil {
                row: 2,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_reference_rows_match_hardware() {
        let table = reference();
        let rows: Vec<&[usize]> = table.rows().collect();
        assert_eq!(rows.len(), 11);
        assert_eq!(rows[0][..11], [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(rows[1][..11], [21, 20, 19, 18, 17, 16, 15, 14, 13, 12, 11]);
        assert_eq!(rows[8][..11], [88, 89, 90, 91, 92, 93, 94, 95, 96, 97, 98]);
        assert_eq!(
            rows[9][..11],
            [109, 108, 107, 106, 105, 104, 103, 102, 101, 100, 99]
        );
    }

    #[test]
    fn test_auxiliary_row() {
        let table = reference();
        assert_eq!(table.index_at(0, 10), Ok(110));
        assert_eq!(table.index_at(1, 10), Ok(111));
        assert_eq!(table.index_at(9, 10), Ok(112));
        assert_eq!(table.index_at(10, 10), Ok(113));
        assert_eq!(table.index_at(5, 10), Ok(0));
        assert_eq!(table.max_index(), 113);
    }

    #[test]
    fn test_minute_leds_do_not_follow_grid_size() {
        for (width, height) in [(4, 3), (11, 10), (16, 16)] {
            let dims = Dimensions { width, height };
            let table = WiringLayout::French.build(dims, None);
            assert_eq!(table.index_at(0, height), Ok(110));
            assert_eq!(table.index_at(1, height), Ok(111));
            assert_eq!(table.index_at(width - 2, height), Ok(112));
            assert_eq!(table.index_at(width - 1, height), Ok(113));
        }
    }

    #[test]
    fn test_injected_minute_leds() {
        let dims = Dimensions {
            width: 11,
            height: 10,
        };
        let table = WiringLayout::French.build(dims, Some(MinuteLeds([0, 1, 108, 109])));
        assert_eq!(table.index_at(0, 10), Ok(0));
        assert_eq!(table.index_at(10, 10), Ok(109));
    }

    #[test]
    fn test_unused_column_reads_zero() {
        let table = reference();
        assert_eq!(table.index_at(11, 0), Ok(0));
        assert_eq!(table.index_at(11, 10), Ok(0));
    }

    #[test]
    fn test_index_at_out_of_range() {
        let table = reference();
        assert_eq!(
            table.index_at(12, 0),
            Err(WiringError::InvalidCoordinate {
                x: 12,
                y: 0,
                width: 11,
                height: 10
            })
        );
        assert!(table.index_at(0, 11).is_err());
    }

    #[test]
    fn test_narrow_face_minute_columns() {
        let dims = Dimensions {
            width: 1,
            height: 2,
        };
        let table = WiringLayout::French.build(dims, None);
        assert_eq!(table.index_at(0, 0), Ok(0));
        assert_eq!(table.index_at(0, 1), Ok(1));
        // markers 1, 3 and 4 share column 0, marker 4 is written last
        assert_eq!(table.index_at(0, 2), Ok(113));
        assert_eq!(table.index_at(1, 2), Ok(111));
    }

    #[test]
    fn test_display_renders_grid() {
        let dims = Dimensions {
            width: 3,
            height: 2,
        };
        let table = WiringLayout::French.build(dims, Some(MinuteLeds([6, 7, 8, 9])));
        let text = table.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "0 1 2");
        assert_eq!(lines[1], "5 4 3");
        assert_eq!(lines[2], "------");
        // marker 3 shares column 1 with marker 2 on a 3-wide face
        assert_eq!(lines[3], "6 8 9");
    }

    #[test]
    fn test_wiring_layout_names() {
        assert_eq!(WiringLayout::French.to_string(), "french");
        assert_eq!(WiringLayout::default(), WiringLayout::French);
        assert_eq!(WiringLayout::French.minute_leds(), FRENCH_MINUTE_LEDS);
    }
}
