use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::thread;

use tracing::debug;

use crate::consts::DIFF_CEILING;
use crate::error::{DriftError, Result};
use crate::grid::PixelGrid;

use super::diff::shifted_difference;
use super::spiral::SpiralScan;
use super::{ApparentMotion, Shift};

/// Running minimum shared by all search workers.
///
/// `least_diff` only ever decreases over a search; `best` is written only
/// together with a strictly smaller `least_diff`.
struct SearchState {
    least_diff: f64,
    best: Shift,
}

/// Estimate the translation between two grids of identical dimensions.
///
/// Uses one worker per available hardware thread. See
/// [`find_translation_with_workers`] for the search contract.
pub fn find_translation(
    a: &PixelGrid,
    b: &PixelGrid,
    x_gate: f64,
    y_gate: f64,
) -> Result<ApparentMotion> {
    let workers = thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
    find_translation_with_workers(a, b, x_gate, y_gate, workers)
}

/// Estimate the translation between two grids using `workers` threads.
///
/// Every integer shift within the gated window is scored center-out and the
/// minimum wins. A zero gate widens the search to the image's own extent on
/// that axis. The reported difference is the exact minimum over the window;
/// among shifts tying on it, which one is reported depends on worker
/// scheduling. A single worker is a valid degenerate case.
pub fn find_translation_with_workers(
    a: &PixelGrid,
    b: &PixelGrid,
    x_gate: f64,
    y_gate: f64,
    workers: usize,
) -> Result<ApparentMotion> {
    if a.width() != b.width() || a.height() != b.height() {
        return Err(DriftError::GeometryMismatch {
            width_a: a.width(),
            height_a: a.height(),
            width_b: b.width(),
            height_b: b.height(),
        });
    }

    let x_gate = if x_gate == 0.0 {
        a.width().saturating_sub(1) as f64
    } else {
        x_gate
    };
    let y_gate = if y_gate == 0.0 {
        a.height().saturating_sub(1) as f64
    } else {
        y_gate
    };
    let window_w = (2.0 * x_gate.trunc()).max(0.0) as u32;
    let window_h = (2.0 * y_gate.trunc()).max(0.0) as u32;

    let workers = workers.max(1);
    let pool = rayon::ThreadPoolBuilder::new().num_threads(workers).build()?;

    let cursor = Mutex::new(SpiralScan::new(window_w, window_h));
    let state = Mutex::new(SearchState {
        least_diff: DIFF_CEILING,
        best: Shift::default(),
    });
    let exact_match = AtomicBool::new(false);

    debug!(
        width = a.width(),
        height = a.height(),
        window_w,
        window_h,
        workers,
        "searching for apparent translation"
    );

    // One worker loop per pool thread; broadcast blocks until every worker
    // has drained the cursor and returned.
    pool.broadcast(|_| loop {
        if exact_match.load(Ordering::Relaxed) {
            break;
        }
        let next = cursor.lock().expect("cursor lock poisoned").next();
        let Some(shift) = next else { break };

        // Snapshot of the running best, taken outside the scoring loop. It
        // may be stale relative to concurrent updates; that only costs a
        // pruning opportunity, never correctness.
        let cutoff = state.lock().expect("state lock poisoned").least_diff;
        let diff = shifted_difference(a, b, shift, cutoff);

        if diff < cutoff {
            let mut shared = state.lock().expect("state lock poisoned");
            if diff < shared.least_diff {
                shared.least_diff = diff;
                shared.best = shift;
            }
        }
        // Nothing can beat an exact match; let the other workers stop pulling.
        if diff == 0.0 {
            exact_match.store(true, Ordering::Relaxed);
            break;
        }
    });

    let state = state.into_inner().expect("state lock poisoned");
    debug!(
        dx = state.best.dx,
        dy = state.best.dy,
        difference = state.least_diff,
        "search finished"
    );

    Ok(ApparentMotion {
        dx: f64::from(state.best.dx),
        dy: f64::from(state.best.dy),
        difference: state.least_diff,
    })
}
