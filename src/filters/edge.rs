//! Sobel edge detection for RGB grids.
//!
//! Each channel is processed on its own: the 3x3 window is correlated with
//! the horizontal and vertical Sobel kernels, and the output channel is the
//! rounded gradient magnitude, saturated at 255.
//!
//! Positions outside the grid read as black, unlike the blur filter which
//! leaves them out. Border pixels of a bright image therefore show a strong
//! response against the implicit black frame.

use super::core::{map_neighborhoods, BoundaryPolicy, Neighborhood, WINDOW};
use super::PixelTransform;
use crate::grid::{Grid, Rgb};

// ============================================================================
// Sobel Kernels
// ============================================================================

/// Horizontal gradient kernel.
pub const SOBEL_X: [[i32; WINDOW]; WINDOW] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];

/// Vertical gradient kernel.
pub const SOBEL_Y: [[i32; WINDOW]; WINDOW] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Rounded `sqrt(gx² + gy²)`, saturated at 255.
///
/// With 8-bit inputs `|gx|, |gy| <= 1020`, so the squares fit easily in `f64`.
#[inline]
pub fn gradient_magnitude(gx: i32, gy: i32) -> u8 {
    let (gx, gy) = (gx as f64, gy as f64);
    let magnitude = (gx * gx + gy * gy).sqrt().round();
    if magnitude >= 255.0 {
        255
    } else {
        magnitude as u8
    }
}

// ============================================================================
// Edge Detection
// ============================================================================

/// Sobel edge detection over the zero-padded 3x3 window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeDetect;

impl EdgeDetect {
    /// Edge value of `(y, x)` computed from `src` alone.
    pub fn pixel(src: &Grid, y: usize, x: usize) -> Rgb {
        sobel(&Neighborhood::gather(src, y, x, BoundaryPolicy::ZeroPad))
    }
}

fn sobel(window: &Neighborhood) -> Rgb {
    let gx = window.correlate(&SOBEL_X);
    let gy = window.correlate(&SOBEL_Y);
    Rgb::new(
        gradient_magnitude(gx[0], gy[0]),
        gradient_magnitude(gx[1], gy[1]),
        gradient_magnitude(gx[2], gy[2]),
    )
}

impl PixelTransform for EdgeDetect {
    fn name(&self) -> &'static str {
        "edges"
    }

    fn transform(&self, src: &Grid) -> Grid {
        map_neighborhoods(src, BoundaryPolicy::ZeroPad, sobel)
    }
}
