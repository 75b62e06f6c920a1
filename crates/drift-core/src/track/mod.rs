//! Apparent-motion tracking between two images of identical dimensions.
//!
//! The images are assumed to show the same content up to an axis-aligned
//! integer translation; unrelated inputs produce meaningless results.

pub mod config;
pub mod diff;
pub mod overlap;
pub mod search;
pub mod spiral;

pub use config::{find_translation_configured, SearchConfig};
pub use search::{find_translation, find_translation_with_workers};

use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::io::load_grid;

/// Integer shift candidate applied to the reference grid's sampling window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Shift {
    pub dx: i32,
    pub dy: i32,
}

impl Shift {
    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Chebyshev distance from the origin: `max(|dx|, |dy|)`.
    pub fn radius(&self) -> i32 {
        self.dx.abs().max(self.dy.abs())
    }
}

/// Estimated translation between two images.
///
/// Sign convention: the shift maps the second image's coordinates into the
/// first, so `a.sample(x + dx, y + dy)` matches `b.sample(x, y)` over the
/// region the two grids share. `dx`/`dy` are always integral; they are
/// reported as floats for interface uniformity.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApparentMotion {
    pub dx: f64,
    pub dy: f64,
    /// Normalized mean color difference at the winning shift, in [0, 1].
    pub difference: f64,
}

/// Load two images and estimate the apparent translation between them.
///
/// `x_gate`/`y_gate` bound the search radius per axis; a zero gate widens
/// the search to the image's full extent on that axis.
pub fn translation_from_paths(
    path_a: &Path,
    path_b: &Path,
    x_gate: f64,
    y_gate: f64,
) -> Result<ApparentMotion> {
    let a = load_grid(path_a)?;
    let b = load_grid(path_b)?;
    info!(
        path_a = %path_a.display(),
        path_b = %path_b.display(),
        "tracking apparent motion"
    );
    find_translation(&a, &b, x_gate, y_gate)
}
