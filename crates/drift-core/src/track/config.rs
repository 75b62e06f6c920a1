use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::PixelGrid;

use super::search::{find_translation, find_translation_with_workers};
use super::ApparentMotion;

/// Parameters for a translation search.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum displacement searched on the x axis; 0 widens the search to
    /// the full image width.
    #[serde(default)]
    pub x_gate: f64,
    /// Maximum displacement searched on the y axis; 0 widens the search to
    /// the full image height.
    #[serde(default)]
    pub y_gate: f64,
    /// Worker count; unset means one per available hardware thread.
    #[serde(default)]
    pub workers: Option<usize>,
}

/// Estimate the translation between two grids using the configured
/// gates and worker count.
pub fn find_translation_configured(
    a: &PixelGrid,
    b: &PixelGrid,
    config: &SearchConfig,
) -> Result<ApparentMotion> {
    match config.workers {
        Some(n) => find_translation_with_workers(a, b, config.x_gate, config.y_gate, n),
        None => find_translation(a, b, config.x_gate, config.y_gate),
    }
}
