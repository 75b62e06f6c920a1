use ndarray::Array2;

use crate::error::{DriftError, Result};

/// A single 8-bit RGB color sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// An immutable rectangular grid of RGB samples.
///
/// The grid is read-only for its whole lifetime once constructed; the
/// tracking core never mutates pixel data.
#[derive(Clone, Debug)]
pub struct PixelGrid {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<Rgb>,
}

impl PixelGrid {
    pub fn new(data: Array2<Rgb>) -> Self {
        Self { data }
    }

    /// Build a grid by evaluating `f(x, y)` at every position.
    pub fn from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> Rgb) -> Self {
        Self {
            data: Array2::from_shape_fn((height, width), |(y, x)| f(x, y)),
        }
    }

    /// Grid filled with a single color.
    pub fn solid(width: usize, height: usize, color: Rgb) -> Self {
        Self {
            data: Array2::from_elem((height, width), color),
        }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// Sample at a possibly out-of-range position.
    ///
    /// Returns `None` when (x, y) falls outside the grid. Absence is a
    /// control signal for overlap computation, not an error.
    pub fn sample(&self, x: i64, y: i64) -> Option<Rgb> {
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return None;
        }
        Some(self.data[[y as usize, x as usize]])
    }

    /// Checked accessor for positions the caller expects to be in range.
    ///
    /// Unlike [`sample`](Self::sample), an out-of-range position here is an
    /// error, not an empty result.
    pub fn pixel(&self, x: usize, y: usize) -> Result<Rgb> {
        if x >= self.width() || y >= self.height() {
            return Err(DriftError::PixelOutOfRange {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(self.data[[y, x]])
    }
}
