//! Grayscale conversion filter.
//!
//! Uses the plain arithmetic mean of the three channels, not a luminosity
//! weighting. The mean is computed in floating point and rounded half away
//! from zero, then written to all three channels.

use super::PixelTransform;
use crate::grid::{Grid, Rgb};

/// Gray value of one pixel: `round((r + g + b) / 3)`.
#[inline]
pub fn grayscale_pixel(px: Rgb) -> Rgb {
    let sum = px.r as u32 + px.g as u32 + px.b as u32;
    Rgb::gray((sum as f64 / 3.0).round() as u8)
}

/// Channel-mean grayscale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Grayscale;

impl PixelTransform for Grayscale {
    fn name(&self) -> &'static str {
        "grayscale"
    }

    fn transform(&self, src: &Grid) -> Grid {
        Grid::from_pixels(src.pixels().mapv(grayscale_pixel))
    }

    // no neighbor dependency, so rewriting each pixel in place is safe
    fn apply_in_place(&self, grid: &mut Grid) {
        grid.pixels_mut().mapv_inplace(grayscale_pixel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grayscale_mean() {
        assert_eq!(grayscale_pixel(Rgb::new(100, 150, 200)), Rgb::gray(150));
        assert_eq!(grayscale_pixel(Rgb::new(1, 2, 2)), Rgb::gray(2)); // 1.67
        assert_eq!(grayscale_pixel(Rgb::new(0, 0, 1)), Rgb::gray(0)); // 0.33
        assert_eq!(grayscale_pixel(Rgb::WHITE), Rgb::WHITE);
    }

    #[test]
    fn test_grayscale_is_not_luminosity() {
        // pure red and pure blue land on the same gray
        assert_eq!(grayscale_pixel(Rgb::new(255, 0, 0)), Rgb::gray(85));
        assert_eq!(grayscale_pixel(Rgb::new(0, 0, 255)), Rgb::gray(85));
    }

    #[test]
    fn test_transform_and_in_place_agree() {
        let grid = Grid::from_fn(3, 4, |y, x| {
            Rgb::new((y * 70) as u8, (x * 60) as u8, ((y + x) * 31) as u8)
        })
        .unwrap();

        let copied = Grayscale.transform(&grid);
        let mut in_place = grid.clone();
        Grayscale.apply_in_place(&mut in_place);

        assert_eq!(copied, in_place);
        assert_eq!(copied.dim(), grid.dim());
    }

    #[test]
    fn test_grayscale_idempotent() {
        let grid = Grid::from_fn(4, 4, |y, x| Rgb::new(x as u8 * 17, y as u8 * 40, 201)).unwrap();
        let once = Grayscale.transform(&grid);
        let twice = Grayscale.transform(&once);
        assert_eq!(once, twice);
        for px in once.pixels().iter() {
            assert!(px.r == px.g && px.g == px.b);
        }
    }
}
