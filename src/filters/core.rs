//! Core utilities shared by the neighborhood filters.
//!
//! This module provides:
//! - 3x3 window enumeration around a pixel
//! - Boundary policies for positions that fall outside the grid
//! - Rounding helpers matching the reference output
//! - The parallel driver that writes every output pixel from the input grid
//!
//! ## Boundary Policies
//!
//! | Policy | Out-of-grid cell | Used by |
//! |--------|------------------|---------|
//! | [`BoundaryPolicy::Clip`] | absent, skipped | blur |
//! | [`BoundaryPolicy::ZeroPad`] | black `(0, 0, 0)` | edge detection |
//!
//! Under `Clip` a corner keeps 4 cells, an edge 6 and an interior pixel 9.
//! Grids one row or one column wide simply keep fewer cells.

use ndarray::{Array2, Zip};
use tracing::trace;

use crate::grid::{Grid, Rgb, CHANNELS};

/// Side length of the filter window.
pub const WINDOW: usize = 3;

/// Number of cells in the filter window.
pub const WINDOW_CELLS: usize = WINDOW * WINDOW;

/// `(dy, dx)` of each window cell, row-major starting top-left.
const OFFSETS: [(isize, isize); WINDOW_CELLS] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// How window cells outside the grid are treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Out-of-grid cells are left out entirely.
    Clip,
    /// Out-of-grid cells read as black.
    ZeroPad,
}

/// The 3x3 window around one pixel, read from the pre-filter grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighborhood {
    cells: [Option<Rgb>; WINDOW_CELLS],
}

impl Neighborhood {
    /// Gather the window centered on `(y, x)`.
    ///
    /// Never reads outside `src`; `(y, x)` must be inside the grid.
    pub fn gather(src: &Grid, y: usize, x: usize, policy: BoundaryPolicy) -> Self {
        let mut cells = [None; WINDOW_CELLS];
        for (cell, (dy, dx)) in cells.iter_mut().zip(OFFSETS) {
            let px = src.get_signed(y as isize + dy, x as isize + dx);
            *cell = match policy {
                BoundaryPolicy::Clip => px,
                BoundaryPolicy::ZeroPad => Some(px.unwrap_or(Rgb::BLACK)),
            };
        }
        Self { cells }
    }

    /// Window cells in row-major order.
    pub fn cells(&self) -> &[Option<Rgb>; WINDOW_CELLS] {
        &self.cells
    }

    /// Number of cells that take part in the window.
    pub fn present(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Per-channel sums over the present cells, with the number of cells summed.
    pub fn channel_sums(&self) -> ([u32; CHANNELS], u32) {
        let mut sums = [0u32; CHANNELS];
        let mut count = 0u32;
        for px in self.cells.iter().flatten() {
            for (sum, c) in sums.iter_mut().zip(px.channels()) {
                *sum += c as u32;
            }
            count += 1;
        }
        (sums, count)
    }

    /// Per-channel correlation with a 3x3 integer kernel.
    ///
    /// Kernel rows line up with window rows; absent cells contribute nothing.
    pub fn correlate(&self, kernel: &[[i32; WINDOW]; WINDOW]) -> [i32; CHANNELS] {
        let mut acc = [0i32; CHANNELS];
        for (i, cell) in self.cells.iter().enumerate() {
            let Some(px) = cell else {
                continue;
            };
            let weight = kernel[i / WINDOW][i % WINDOW];
            for (a, c) in acc.iter_mut().zip(px.channels()) {
                *a += weight * c as i32;
            }
        }
        acc
    }
}

/// Mean of `count` channel values summing to `sum`, rounded half away from zero.
///
/// `count` must be non-zero.
#[inline]
pub fn round_mean(sum: u32, count: u32) -> u8 {
    (sum as f64 / count as f64).round() as u8
}

/// Build a new grid where each pixel is `f` of its window in `src`.
///
/// `src` is only ever borrowed, and every output pixel is written exactly once
/// into a fresh buffer, so no computation can observe another's result. Rows
/// are spread across the current rayon pool.
pub fn map_neighborhoods<F>(src: &Grid, policy: BoundaryPolicy, f: F) -> Grid
where
    F: Fn(&Neighborhood) -> Rgb + Sync,
{
    let (height, width) = src.dim();
    trace!(height, width, ?policy, "map_neighborhoods");

    let mut output = Array2::from_elem((height, width), Rgb::BLACK);
    Zip::indexed(&mut output).par_for_each(|(y, x), px| {
        *px = f(&Neighborhood::gather(src, y, x, policy));
    });

    Grid::from_pixels(output)
}
