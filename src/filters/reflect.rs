//! Horizontal mirror.
//!
//! Column `x` and column `width - 1 - x` trade places in every row. With an
//! odd width the middle column stays where it is.

use ndarray::parallel::prelude::*;
use ndarray::Axis;

use super::PixelTransform;
use crate::grid::Grid;

/// Left-right mirror of every row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reflect;

impl PixelTransform for Reflect {
    fn name(&self) -> &'static str {
        "reflect"
    }

    fn transform(&self, src: &Grid) -> Grid {
        let mut dst = src.clone();
        self.apply_in_place(&mut dst);
        dst
    }

    // each swap touches a disjoint pair visited exactly once
    fn apply_in_place(&self, grid: &mut Grid) {
        let width = grid.width();
        grid.pixels_mut()
            .axis_iter_mut(Axis(0))
            .into_par_iter()
            .for_each(|mut row| {
                for x in 0..width / 2 {
                    row.swap(x, width - 1 - x);
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Rgb;

    #[test]
    fn test_reflect_odd_width_keeps_center() {
        let (a, b, c) = (Rgb::new(1, 2, 3), Rgb::new(4, 5, 6), Rgb::new(7, 8, 9));
        let grid = Grid::new(1, 3, vec![a, b, c]).unwrap();
        let result = Reflect.transform(&grid);
        assert_eq!(result.rows().next().unwrap(), vec![c, b, a]);
    }

    #[test]
    fn test_reflect_even_width() {
        let grid = Grid::from_fn(2, 4, |y, x| Rgb::gray((y * 4 + x) as u8)).unwrap();
        let result = Reflect.transform(&grid);
        let rows: Vec<Vec<u8>> = result
            .rows()
            .map(|row| row.iter().map(|px| px.r).collect())
            .collect();
        assert_eq!(rows, vec![vec![3, 2, 1, 0], vec![7, 6, 5, 4]]);
    }

    #[test]
    fn test_reflect_single_column_unchanged() {
        let grid = Grid::from_fn(3, 1, |y, _| Rgb::gray(y as u8)).unwrap();
        assert_eq!(Reflect.transform(&grid), grid);
    }

    #[test]
    fn test_reflect_involution() {
        let grid = Grid::from_fn(5, 7, |y, x| Rgb::new(y as u8, x as u8, (y * x) as u8)).unwrap();
        let once = Reflect.transform(&grid);
        assert_ne!(once, grid);
        assert_eq!(Reflect.transform(&once), grid);
    }
}
