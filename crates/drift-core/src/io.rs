use std::path::Path;

use ndarray::Array2;

use crate::error::Result;
use crate::grid::{PixelGrid, Rgb};

/// Decode an image file into an 8-bit RGB pixel grid.
///
/// Accepts any format the `image` crate can open; higher bit depths are
/// reduced to 8-bit RGB.
pub fn load_grid(path: &Path) -> Result<PixelGrid> {
    let img = image::open(path)?;
    let rgb = img.to_rgb8();
    let (w, h) = rgb.dimensions();

    let mut data = Array2::from_elem((h as usize, w as usize), Rgb::default());
    for (x, y, pixel) in rgb.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        data[[y as usize, x as usize]] = Rgb::new(r, g, b);
    }

    Ok(PixelGrid::new(data))
}
