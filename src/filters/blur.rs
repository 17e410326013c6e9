//! 3x3 box blur for RGB grids.
//!
//! Every output pixel is the unweighted per-channel mean of itself and the
//! neighbors that actually exist in the pre-filter grid: 4 pixels at a
//! corner, 6 along an edge, 9 in the interior. Means are computed in floating
//! point and rounded half away from zero.

use super::core::{map_neighborhoods, round_mean, BoundaryPolicy, Neighborhood};
use super::PixelTransform;
use crate::grid::{Grid, Rgb};

/// Box blur over the clipped 3x3 window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Blur;

impl Blur {
    /// Blurred value of `(y, x)` computed from `src` alone.
    pub fn pixel(src: &Grid, y: usize, x: usize) -> Rgb {
        average(&Neighborhood::gather(src, y, x, BoundaryPolicy::Clip))
    }
}

fn average(window: &Neighborhood) -> Rgb {
    // the center is always present, so count >= 1
    let (sums, count) = window.channel_sums();
    Rgb::from_channels(sums.map(|sum| round_mean(sum, count)))
}

impl PixelTransform for Blur {
    fn name(&self) -> &'static str {
        "blur"
    }

    fn transform(&self, src: &Grid) -> Grid {
        map_neighborhoods(src, BoundaryPolicy::Clip, average)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_3x3() -> Grid {
        // 0, 10, 20 / 30, 40, 50 / 60, 70, 80
        Grid::from_fn(3, 3, |y, x| Rgb::gray(((y * 3 + x) * 10) as u8)).unwrap()
    }

    #[test]
    fn test_blur_2x2_is_avg4_everywhere() {
        let grid = Grid::new(
            2,
            2,
            vec![
                Rgb::new(10, 20, 30),
                Rgb::new(20, 30, 40),
                Rgb::new(30, 40, 50),
                Rgb::new(41, 50, 60),
            ],
        )
        .unwrap();

        let result = Blur.transform(&grid);

        // R: 101 / 4 = 25.25, G: 140 / 4 = 35, B: 180 / 4 = 45
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(result[(y, x)], Rgb::new(25, 35, 45));
            }
        }
    }

    #[test]
    fn test_blur_corner_edge_interior() {
        let result = Blur.transform(&ramp_3x3());

        assert_eq!(result[(1, 1)], Rgb::gray(40)); // 360 / 9
        assert_eq!(result[(0, 0)], Rgb::gray(20)); // (0 + 10 + 30 + 40) / 4
        assert_eq!(result[(0, 1)], Rgb::gray(25)); // 150 / 6
        assert_eq!(result[(1, 0)], Rgb::gray(35)); // 210 / 6
        assert_eq!(result[(2, 2)], Rgb::gray(60)); // (40 + 50 + 70 + 80) / 4
    }

    #[test]
    fn test_blur_single_pixel_unchanged() {
        let grid = Grid::filled(1, 1, Rgb::new(7, 8, 9)).unwrap();
        let result = Blur.transform(&grid);
        assert_eq!(result.dim(), (1, 1));
        assert_eq!(result[(0, 0)], Rgb::new(7, 8, 9));
    }

    #[test]
    fn test_blur_single_row() {
        let grid = Grid::new(1, 3, vec![Rgb::gray(0), Rgb::gray(30), Rgb::gray(90)]).unwrap();
        let result = Blur.transform(&grid);
        assert_eq!(result[(0, 0)], Rgb::gray(15));
        assert_eq!(result[(0, 1)], Rgb::gray(40));
        assert_eq!(result[(0, 2)], Rgb::gray(60));
    }

    #[test]
    fn test_blur_single_column() {
        let grid = Grid::new(3, 1, vec![Rgb::gray(0), Rgb::gray(30), Rgb::gray(90)]).unwrap();
        let result = Blur.transform(&grid);
        assert_eq!(result.dim(), (3, 1));
        assert_eq!(result[(0, 0)], Rgb::gray(15));
        assert_eq!(result[(1, 0)], Rgb::gray(40));
        assert_eq!(result[(2, 0)], Rgb::gray(60));
    }

    #[test]
    fn test_blur_rounds_half_away_from_zero() {
        let grid = Grid::new(1, 2, vec![Rgb::new(2, 0, 1), Rgb::new(3, 1, 0)]).unwrap();
        let result = Blur.transform(&grid);
        // 2.5 -> 3, 0.5 -> 1
        assert_eq!(result[(0, 0)], Rgb::new(3, 1, 1));
        assert_eq!(result[(0, 1)], Rgb::new(3, 1, 1));
    }

    #[test]
    fn test_blur_channels_are_independent() {
        let grid = Grid::from_fn(3, 3, |y, x| {
            if (y, x) == (1, 1) {
                Rgb::new(90, 0, 0)
            } else {
                Rgb::new(0, 0, 180)
            }
        })
        .unwrap();
        let result = Blur.transform(&grid);
        assert_eq!(result[(1, 1)], Rgb::new(10, 0, 160));
    }

    #[test]
    fn test_blur_reads_only_original_values() {
        // an in-place pass would feed the blurred (0, 0) into (0, 1)
        let grid = Grid::new(1, 3, vec![Rgb::gray(255), Rgb::gray(0), Rgb::gray(0)]).unwrap();
        let result = Blur.transform(&grid);
        assert_eq!(result[(0, 0)], Rgb::gray(128)); // 127.5
        assert_eq!(result[(0, 1)], Rgb::gray(85));
        assert_eq!(result[(0, 2)], Rgb::gray(0));
    }

    #[test]
    fn test_pixel_matches_transform() {
        let grid = ramp_3x3();
        let result = Blur.transform(&grid);
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(Blur::pixel(&grid, y, x), result[(y, x)]);
            }
        }
    }
}
