//! Stripe rendering.

use crate::*;

/// Resolves band colors, degrading unknown colors to black.
pub fn band_colors(bands: &[Band]) -> Vec<Rgba<u8>> {
    bands.iter().map(|b| match color::parse_color(&b.color) {
        Ok(c) => c,
        Err(err) => {
            log::warn!("{}, painting black", err);
            color::BLACK
        }
    }).collect()
}

/// Assigns each pixel line along the partition axis to a band.
pub fn lines(bands: &[Band], orientation: Orientation, size: [u32; 2]) -> Vec<Option<usize>> {
    let weights: Vec<f64> = bands.iter().map(|b| b.weight).collect();
    layout::pixel_bands(&weights, orientation.extent(size))
}

fn fill_row(
    row: &mut [u8],
    y: usize,
    lines: &[Option<usize>],
    colors: &[Rgba<u8>],
    orientation: Orientation
) {
    let px = |line: Option<usize>| line.map(|i| colors[i]).unwrap_or(color::TRANSPARENT);
    match orientation {
        Orientation::Horizontal => {
            let c = px(lines[y]);
            for pixel in row.chunks_exact_mut(4) {pixel.copy_from_slice(&c.0)}
        }
        Orientation::Vertical => {
            for (pixel, &line) in row.chunks_exact_mut(4).zip(lines) {
                pixel.copy_from_slice(&px(line).0)
            }
        }
    }
}

/// Draws stripes to image using single thread.
///
/// Every pixel is written, pixels not covered by any band become transparent.
pub fn single_draw(bands: &[Band], orientation: Orientation, img: &mut RgbaImage) {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {return};
    let colors = band_colors(bands);
    let ref assigned = lines(bands, orientation, [w, h]);
    for (y, row) in img.chunks_exact_mut(w as usize * 4).enumerate() {
        fill_row(row, y, assigned, &colors, orientation);
    }
}

/// Draws stripes to image using Rayon.
#[cfg(feature = "parallel")]
pub fn par_draw(bands: &[Band], orientation: Orientation, img: &mut RgbaImage) {
    use rayon::prelude::*;

    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {return};
    let colors = band_colors(bands);
    let ref assigned = lines(bands, orientation, [w, h]);
    img.par_chunks_exact_mut(w as usize * 4).enumerate().for_each(|(y, row)| {
        fill_row(row, y, assigned, &colors, orientation);
    });
}

/// Draws stripes with the best available strategy.
pub fn draw(bands: &[Band], orientation: Orientation, img: &mut RgbaImage) {
    #[cfg(feature = "parallel")]
    par_draw(bands, orientation, img);
    #[cfg(not(feature = "parallel"))]
    single_draw(bands, orientation, img);
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);

    fn bands(list: &[(&str, f64)]) -> Vec<Band> {
        list.iter().map(|&(c, w)| Band::new(Some(w), Some(c.into()))).collect()
    }

    #[test]
    fn red_green_horizontal() {
        let b = bands(&[("#ff0000", 1.0), ("#00ff00", 3.0)]);
        let mut img = RgbaImage::new(400, 100);
        single_draw(&b, Orientation::Horizontal, &mut img);
        for (x, y, px) in img.enumerate_pixels() {
            let expected = if y < 25 {RED} else {GREEN};
            assert_eq!(*px, expected, "at ({}, {})", x, y);
        }
    }

    #[test]
    fn red_green_vertical() {
        let b = bands(&[("#ff0000", 1.0), ("#00ff00", 3.0)]);
        let mut img = RgbaImage::new(400, 100);
        single_draw(&b, Orientation::Vertical, &mut img);
        for (x, _, px) in img.enumerate_pixels() {
            assert_eq!(*px, if x < 100 {RED} else {GREEN});
        }
    }

    #[test]
    fn empty_and_zero() {
        let mut img = RgbaImage::from_pixel(20, 10, RED);
        single_draw(&[], Orientation::Horizontal, &mut img);
        assert_eq!(img.dimensions(), (20, 10));
        assert!(img.pixels().all(|px| *px == color::TRANSPARENT));

        let b = bands(&[("red", 0.0), ("lime", 0.0)]);
        let mut img = RgbaImage::from_pixel(20, 10, RED);
        draw(&b, Orientation::Vertical, &mut img);
        assert!(img.pixels().all(|px| *px == color::TRANSPARENT));

        let mut img = RgbaImage::new(0, 0);
        draw(&b, Orientation::Vertical, &mut img);
    }

    #[test]
    fn bad_color_is_black() {
        let b = bands(&[("not a color", 1.0)]);
        let mut img = RgbaImage::new(4, 4);
        single_draw(&b, Orientation::Horizontal, &mut img);
        assert!(img.pixels().all(|px| *px == color::BLACK));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn par_matches_single() {
        let b = bands(&[("navy", 1.0), ("#fff", 0.0), ("rgb(10, 20, 30)", 2.5), ("gold", 1.5)]);
        for o in [Orientation::Horizontal, Orientation::Vertical] {
            let mut a = RgbaImage::new(123, 77);
            let mut p = RgbaImage::new(123, 77);
            single_draw(&b, o, &mut a);
            par_draw(&b, o, &mut p);
            assert_eq!(a, p);
        }
    }

    #[test]
    fn order_follows_bands() {
        let b = bands(&[("#000001", 1.0), ("#000002", 1.0), ("#000003", 1.0), ("#000004", 1.0)]);
        let mut img = RgbaImage::new(8, 40);
        single_draw(&b, Orientation::Horizontal, &mut img);
        let firsts: Vec<u8> = (0..40).map(|y| img.get_pixel(0, y)[2]).collect();
        assert!(firsts.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(firsts[0], 1);
        assert_eq!(firsts[39], 4);
    }
}
