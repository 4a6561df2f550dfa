//! Row/column addressing for a column-wired LED matrix
//!
//! The strip runs up the first column, then continues into the next one.
//! On serpentine-wired matrices every odd column runs back down, so the
//! physical order of those columns is reversed.

use heapless::Vec;

use crate::color::{Rgb, fade_to_black_by};

/// Geometry of a `ROWS` x `COLS` matrix stored column-major
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixLayout<const ROWS: usize, const COLS: usize> {
    serpentine: bool,
}

impl<const ROWS: usize, const COLS: usize> MatrixLayout<ROWS, COLS> {
    /// Number of LEDs in the matrix
    pub const LEN: usize = ROWS * COLS;

    pub const fn new(serpentine: bool) -> Self {
        Self { serpentine }
    }

    /// Odd columns wired in reverse
    pub const fn serpentine() -> Self {
        Self::new(true)
    }

    /// Every column wired bottom to top
    pub const fn progressive() -> Self {
        Self::new(false)
    }

    pub const fn is_serpentine(self) -> bool {
        self.serpentine
    }

    pub const fn rows(self) -> usize {
        ROWS
    }

    pub const fn cols(self) -> usize {
        COLS
    }

    pub const fn len(self) -> usize {
        Self::LEN
    }

    pub const fn is_empty(self) -> bool {
        Self::LEN == 0
    }

    /// Linear buffer index of the LED at `row`, `col`
    ///
    /// Callers must stay inside the matrix; this is only checked in debug
    /// builds.
    pub const fn index(self, row: usize, col: usize) -> usize {
        debug_assert!(row < ROWS, "row out of range");
        debug_assert!(col < COLS, "column out of range");

        let row = if self.serpentine && col & 1 == 1 {
            ROWS - 1 - row
        } else {
            row
        };
        col * ROWS + row
    }

    /// Cells of `row`, ordered by column
    pub fn row_mut<'a>(self, leds: &'a mut [Rgb], row: usize) -> Vec<&'a mut Rgb, COLS> {
        debug_assert!(row < ROWS, "row out of range");
        debug_assert_eq!(leds.len(), Self::LEN);

        // Indices of a row grow with the column, so buffer order is column order.
        leds.iter_mut()
            .enumerate()
            .filter(|(i, _)| {
                let col = i / ROWS;
                col < COLS && self.index(row, col) == *i
            })
            .map(|(_, cell)| cell)
            .collect()
    }

    /// Cells of `col`, ordered by row
    pub fn column_mut<'a>(self, leds: &'a mut [Rgb], col: usize) -> Vec<&'a mut Rgb, ROWS> {
        debug_assert!(col < COLS, "column out of range");
        debug_assert_eq!(leds.len(), Self::LEN);

        let start = col * ROWS;
        let mut cells: Vec<&'a mut Rgb, ROWS> = leds[start..start + ROWS].iter_mut().collect();
        if self.serpentine && col & 1 == 1 {
            cells.reverse();
        }
        cells
    }
}

/// LED buffer paired with its layout, handed to patterns each frame
pub struct Canvas<'a, const ROWS: usize, const COLS: usize> {
    leds: &'a mut [Rgb],
    layout: MatrixLayout<ROWS, COLS>,
}

impl<'a, const ROWS: usize, const COLS: usize> Canvas<'a, ROWS, COLS> {
    pub fn new(leds: &'a mut [Rgb], layout: MatrixLayout<ROWS, COLS>) -> Self {
        debug_assert_eq!(leds.len(), MatrixLayout::<ROWS, COLS>::LEN);
        Self { leds, layout }
    }

    pub const fn layout(&self) -> MatrixLayout<ROWS, COLS> {
        self.layout
    }

    /// The cell at `row`, `col`
    pub fn at(&mut self, row: usize, col: usize) -> &mut Rgb {
        &mut self.leds[self.layout.index(row, col)]
    }

    pub fn row_mut(&mut self, row: usize) -> Vec<&mut Rgb, COLS> {
        self.layout.row_mut(&mut *self.leds, row)
    }

    pub fn column_mut(&mut self, col: usize) -> Vec<&mut Rgb, ROWS> {
        self.layout.column_mut(&mut *self.leds, col)
    }

    /// The whole buffer in wiring order
    pub fn leds_mut(&mut self) -> &mut [Rgb] {
        &mut *self.leds
    }

    /// Dim every cell towards black
    pub fn fade_to_black_by(&mut self, amount: u8) {
        for led in self.leds.iter_mut() {
            *led = fade_to_black_by(*led, amount);
        }
    }
}
