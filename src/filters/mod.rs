//! Filter modules for RGB pixel grids.
//!
//! ## Filters
//!
//! | Filter | Kind | Boundary | Module |
//! |--------|------|----------|--------|
//! | Grayscale | per-pixel | n/a | [`grayscale`] |
//! | Reflect | per-row | n/a | [`reflect`] |
//! | Blur | 3x3 window | clip to present pixels | [`blur`] |
//! | Edges | 3x3 window | zero padding | [`edge`] |
//!
//! ## Architecture
//!
//! All filters follow these principles:
//! - **Same shape out** - output grid has the input's height and width
//! - **Read-only input** - [`PixelTransform::transform`] borrows the
//!   pre-filter grid and writes a fresh buffer, so no output pixel can see
//!   another output pixel
//! - **Stateless** - filters carry no data between calls
//! - **Thread-safe** - window filters spread rows over rayon

use std::fmt;
use std::str::FromStr;

use crate::error::FilterError;
use crate::grid::Grid;

pub mod blur;
pub mod core;
pub mod edge;
pub mod grayscale;
pub mod reflect;

pub use blur::Blur;
pub use edge::EdgeDetect;
pub use grayscale::Grayscale;
pub use reflect::Reflect;

/// A transform from one grid to a grid of the same shape.
pub trait PixelTransform: Send + Sync {
    /// Short lowercase name used in logs.
    fn name(&self) -> &'static str;

    /// Compute the filtered grid from `src`, leaving `src` untouched.
    fn transform(&self, src: &Grid) -> Grid;

    /// Replace `grid` with its filtered version.
    ///
    /// The default computes into a new buffer and drops the old one.
    fn apply_in_place(&self, grid: &mut Grid) {
        *grid = self.transform(grid);
    }
}

/// Selects one of the four filters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Filter {
    /// Channel-mean grayscale.
    Grayscale,
    /// Horizontal mirror.
    Reflect,
    /// 3x3 box blur.
    Blur,
    /// Sobel edge detection.
    Edges,
}

impl Filter {
    /// Every filter, in flag order.
    pub const ALL: [Filter; 4] = [
        Filter::Blur,
        Filter::Edges,
        Filter::Grayscale,
        Filter::Reflect,
    ];

    /// Single-letter flag (`b`, `e`, `g`, `r`).
    pub fn flag(self) -> char {
        match self {
            Filter::Blur => 'b',
            Filter::Edges => 'e',
            Filter::Grayscale => 'g',
            Filter::Reflect => 'r',
        }
    }

    fn transformer(self) -> &'static dyn PixelTransform {
        match self {
            Filter::Grayscale => &Grayscale,
            Filter::Reflect => &Reflect,
            Filter::Blur => &Blur,
            Filter::Edges => &EdgeDetect,
        }
    }
}

impl PixelTransform for Filter {
    fn name(&self) -> &'static str {
        self.transformer().name()
    }

    fn transform(&self, src: &Grid) -> Grid {
        self.transformer().transform(src)
    }

    fn apply_in_place(&self, grid: &mut Grid) {
        self.transformer().apply_in_place(grid)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Filter {
    type Err = FilterError;

    /// Accepts full names (`grayscale`, `reflect`, `blur`, `edges`) and the
    /// single-letter flags, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grayscale" | "g" => Ok(Filter::Grayscale),
            "reflect" | "r" => Ok(Filter::Reflect),
            "blur" | "b" => Ok(Filter::Blur),
            "edges" | "e" => Ok(Filter::Edges),
            _ => Err(FilterError::UnknownFilter(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Rgb;

    #[test]
    fn test_parse_names_and_flags() {
        for filter in Filter::ALL {
            assert_eq!(filter.name().parse::<Filter>().unwrap(), filter);
            assert_eq!(filter.flag().to_string().parse::<Filter>().unwrap(), filter);
            assert_eq!(filter.to_string(), filter.name());
        }
        assert_eq!("  Edges ".parse::<Filter>().unwrap(), Filter::Edges);
    }

    #[test]
    fn test_parse_rejects_other_spellings() {
        for name in ["greyscale", "gray", "mirror", "box_blur", "edge", "sobel"] {
            assert!(
                matches!(name.parse::<Filter>(), Err(FilterError::UnknownFilter(_))),
                "{name}"
            );
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "sharpen".parse::<Filter>().unwrap_err();
        assert!(matches!(err, FilterError::UnknownFilter(ref name) if name == "sharpen"));
    }

    #[test]
    fn test_every_filter_preserves_dimensions() {
        for (height, width) in [(1, 1), (1, 5), (4, 1), (2, 2), (6, 3)] {
            let grid = Grid::from_fn(height, width, |y, x| {
                Rgb::new((y * 31) as u8, (x * 47) as u8, 99)
            })
            .unwrap();
            for filter in Filter::ALL {
                let mut in_place = grid.clone();
                filter.apply_in_place(&mut in_place);
                assert_eq!(in_place.dim(), (height, width), "{filter}");
                assert_eq!(in_place, filter.transform(&grid), "{filter}");
            }
        }
    }

    #[test]
    fn test_default_apply_in_place_replaces_grid() {
        let mut grid = Grid::new(1, 2, vec![Rgb::gray(0), Rgb::gray(255)]).unwrap();
        Blur.apply_in_place(&mut grid);
        assert_eq!(grid[(0, 0)], Rgb::gray(128));
        assert_eq!(grid[(0, 1)], Rgb::gray(128));
    }
}
