use crate::consts::{DIFF_CEILING, MAX_CHANNEL_DIFF_SUM};
use crate::grid::{PixelGrid, Rgb};

use super::overlap::{overlap_area, OverlapPairs};
use super::Shift;

/// Mean fractional channel difference between two color samples, in [0, 1].
///
/// Zero for identical samples, 1.0 for fully opposite ones (black vs.
/// white); symmetric in its arguments.
pub fn rgb_difference(a: Rgb, b: Rgb) -> f64 {
    let sum = (i32::from(a.r) - i32::from(b.r)).abs()
        + (i32::from(a.g) - i32::from(b.g)).abs()
        + (i32::from(a.b) - i32::from(b.b)).abs();
    f64::from(sum) / MAX_CHANNEL_DIFF_SUM
}

/// Normalized mean color difference between two grids at `shift`.
///
/// Aborts as soon as the running mean can no longer beat `cutoff`, reporting
/// [`DIFF_CEILING`] instead of the true value; shifts with no overlap report
/// the ceiling as well. The result is therefore exact only when it is
/// `<= cutoff`, which a minimum search can rely on: anything worse than the
/// running best can never win.
///
/// Both grids must share the same dimensions; the search coordinator
/// validates that once up front rather than per shift.
pub fn shifted_difference(a: &PixelGrid, b: &PixelGrid, shift: Shift, cutoff: f64) -> f64 {
    let area = overlap_area(b.width(), b.height(), shift);
    if area == 0 {
        return DIFF_CEILING;
    }

    let scale = area as f64;
    let limit = cutoff * scale;
    let mut sum = 0.0;
    for (sample_a, sample_b) in OverlapPairs::new(a, b, shift) {
        sum += rgb_difference(sample_a, sample_b);
        if sum > limit {
            return DIFF_CEILING;
        }
    }
    sum / scale
}
