use drift_core::grid::{PixelGrid, Rgb};

/// Grid where pixel (x, y) has color (x*40, y*40, 0).
///
/// Every position gets a distinct color for grids up to 6x6, which makes
/// the minimum of a translation search unique.
pub fn gradient_grid(width: usize, height: usize) -> PixelGrid {
    PixelGrid::from_fn(width, height, |x, y| {
        Rgb::new((x * 40) as u8, (y * 40) as u8, 0)
    })
}

/// Copy of `src` sampled at (x + dx, y + dy); positions that fall outside
/// `src` are filled with black.
pub fn shifted_copy(src: &PixelGrid, dx: i32, dy: i32) -> PixelGrid {
    PixelGrid::from_fn(src.width(), src.height(), |x, y| {
        src.sample(x as i64 + i64::from(dx), y as i64 + i64::from(dy))
            .unwrap_or_default()
    })
}
