//! Scaled preview of the canvas.

use crate::*;

use image::imageops::{self, FilterType};

/// Returns the scale that fits a canvas of `size` into [`PREVIEW_SIZE`].
pub fn preview_scale(size: [u32; 2]) -> f64 {
    let sx = PREVIEW_SIZE[0] as f64 / size[0].max(1) as f64;
    let sy = PREVIEW_SIZE[1] as f64 / size[1].max(1) as f64;
    sx.min(sy)
}

/// Returns the dimensions of the preview of a canvas of `size`.
pub fn preview_size(size: [u32; 2]) -> [u32; 2] {
    let s = preview_scale(size);
    let f = |n: u32| ((n as f64 * s).round() as u32).max(1);
    [f(size[0]), f(size[1])]
}

/// Resizes the canvas to fit the preview box.
pub fn preview(canvas: &RgbaImage) -> RgbaImage {
    let (w, h) = canvas.dimensions();
    let [pw, ph] = preview_size([w, h]);
    if [pw, ph] == [w, h] {return canvas.clone()};
    imageops::resize(canvas, pw, ph, FilterType::Nearest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale() {
        assert_eq!(preview_scale([500, 300]), 1.0);
        assert_eq!(preview_scale([1000, 300]), 0.5);
        assert_eq!(preview_scale([250, 300]), 1.0);
        assert_eq!(preview_scale([100, 100]), 3.0);
        assert_eq!(preview_size([1000, 100]), [500, 50]);
        assert_eq!(preview_size([100000, 1]), [500, 1]);
    }

    #[test]
    fn resized() {
        let img = RgbaImage::from_pixel(1000, 200, Rgba([1, 2, 3, 4]));
        let p = preview(&img);
        assert_eq!(p.dimensions(), (500, 100));
        assert!(p.pixels().all(|px| *px == Rgba([1, 2, 3, 4])));
    }
}
