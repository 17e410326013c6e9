//! Pixel grid data model.
//!
//! A [`Grid`] is a row-major `height x width` array of [`Rgb`] triples backed
//! by `ndarray::Array2`. Dimensions are fixed at construction and are always
//! at least 1x1, so filters never have to handle an empty grid.
//!
//! ## Byte Layouts
//!
//! | Source | Shape | Channel order |
//! |--------|-------|---------------|
//! | Packed bytes | `height * width * 3` | [`ChannelOrder::Rgb`] or [`ChannelOrder::Bgr`] |
//! | ndarray | (H, W, 3) | R, G, B |
//!
//! 24-bit bitmaps store each pixel as blue, green, red, so loaders can hand
//! their rows over with [`ChannelOrder::Bgr`] and skip reordering.

use std::ops::Index;

use ndarray::{Array2, Array3, ArrayView2, ArrayView3, ArrayViewMut2};

use crate::error::{FilterError, FilterResult};

/// Number of color channels per pixel.
pub const CHANNELS: usize = 3;

/// An 8-bit RGB triple.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Pure black, also the value of out-of-grid positions under zero padding.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a pixel from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a pixel with all three channels set to `v`.
    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Channels in R, G, B order.
    #[inline]
    pub const fn channels(self) -> [u8; CHANNELS] {
        [self.r, self.g, self.b]
    }

    /// Build a pixel from channels in R, G, B order.
    #[inline]
    pub const fn from_channels(c: [u8; CHANNELS]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<[u8; CHANNELS]> for Rgb {
    fn from(c: [u8; CHANNELS]) -> Self {
        Rgb::from_channels(c)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb::new(r, g, b)
    }
}

/// Order of the three channels inside a packed byte buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChannelOrder {
    /// red, green, blue
    #[default]
    Rgb,
    /// blue, green, red (24-bit bitmap storage)
    Bgr,
}

impl ChannelOrder {
    #[inline]
    fn decode(self, triple: &[u8]) -> Rgb {
        match self {
            ChannelOrder::Rgb => Rgb::new(triple[0], triple[1], triple[2]),
            ChannelOrder::Bgr => Rgb::new(triple[2], triple[1], triple[0]),
        }
    }

    #[inline]
    fn encode(self, px: Rgb) -> [u8; CHANNELS] {
        match self {
            ChannelOrder::Rgb => [px.r, px.g, px.b],
            ChannelOrder::Bgr => [px.b, px.g, px.r],
        }
    }
}

/// A fixed-size, row-major grid of RGB pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pixels: Array2<Rgb>,
}

/// Pixel count of a `height x width` grid.
///
/// The packed byte length must also fit in `isize`, which is the limit
/// ndarray places on any allocation.
fn check_dims(height: usize, width: usize) -> FilterResult<usize> {
    if height == 0 || width == 0 {
        return Err(FilterError::EmptyGrid { height, width });
    }
    height
        .checked_mul(width)
        .filter(|&n| n.checked_mul(CHANNELS).is_some_and(|bytes| bytes <= isize::MAX as usize))
        .ok_or(FilterError::TooLarge { height, width })
}

impl Grid {
    /// Create a grid from row-major pixels.
    ///
    /// # Errors
    ///
    /// [`FilterError::EmptyGrid`] if either dimension is zero,
    /// [`FilterError::TooLarge`] if the grid cannot be addressed,
    /// [`FilterError::DataLength`] if `pixels.len() != height * width`.
    pub fn new(height: usize, width: usize, pixels: Vec<Rgb>) -> FilterResult<Self> {
        let expected = check_dims(height, width)?;
        if pixels.len() != expected {
            return Err(FilterError::DataLength {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels: Array2::from_shape_vec((height, width), pixels)?,
        })
    }

    /// Create a grid by evaluating `f(y, x)` for every position.
    pub fn from_fn<F>(height: usize, width: usize, mut f: F) -> FilterResult<Self>
    where
        F: FnMut(usize, usize) -> Rgb,
    {
        check_dims(height, width)?;
        Ok(Self {
            pixels: Array2::from_shape_fn((height, width), |(y, x)| f(y, x)),
        })
    }

    /// Create a grid with every pixel set to `px`.
    pub fn filled(height: usize, width: usize, px: Rgb) -> FilterResult<Self> {
        check_dims(height, width)?;
        Ok(Self {
            pixels: Array2::from_elem((height, width), px),
        })
    }

    /// Create a grid from packed 3-byte pixels.
    ///
    /// # Arguments
    /// * `height` - Number of rows
    /// * `width` - Number of columns
    /// * `data` - `height * width * 3` bytes, row-major
    /// * `order` - Channel order of each packed triple
    pub fn from_bytes(
        height: usize,
        width: usize,
        data: &[u8],
        order: ChannelOrder,
    ) -> FilterResult<Self> {
        let expected = check_dims(height, width)? * CHANNELS;
        if data.len() != expected {
            return Err(FilterError::DataLength {
                expected,
                actual: data.len(),
            });
        }
        let pixels = data
            .chunks_exact(CHANNELS)
            .map(|triple| order.decode(triple))
            .collect();
        Self::new(height, width, pixels)
    }

    /// Create a grid from an (H, W, 3) array in R, G, B order.
    pub fn from_array(input: ArrayView3<u8>) -> FilterResult<Self> {
        let (height, width, channels) = input.dim();
        if channels != CHANNELS {
            return Err(FilterError::ChannelCount(channels));
        }
        Self::from_fn(height, width, |y, x| {
            Rgb::new(input[[y, x, 0]], input[[y, x, 1]], input[[y, x, 2]])
        })
    }

    /// Wrap an array produced by a filter. Shape is carried over from a valid grid.
    pub(crate) fn from_pixels(pixels: Array2<Rgb>) -> Self {
        debug_assert!(pixels.nrows() > 0 && pixels.ncols() > 0);
        Self { pixels }
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// `(height, width)`
    #[inline]
    pub fn dim(&self) -> (usize, usize) {
        self.pixels.dim()
    }

    /// Pixel at row `y`, column `x`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, y: usize, x: usize) -> Option<Rgb> {
        self.pixels.get((y, x)).copied()
    }

    /// Pixel at a signed position, or `None` outside the grid.
    #[inline]
    pub fn get_signed(&self, y: isize, x: isize) -> Option<Rgb> {
        if y < 0 || x < 0 {
            return None;
        }
        self.get(y as usize, x as usize)
    }

    /// Overwrite one pixel. Returns `false` if the position is outside the grid.
    pub fn set(&mut self, y: usize, x: usize, px: Rgb) -> bool {
        match self.pixels.get_mut((y, x)) {
            Some(slot) => {
                *slot = px;
                true
            }
            None => false,
        }
    }

    /// Read-only view of all pixels.
    pub fn pixels(&self) -> ArrayView2<'_, Rgb> {
        self.pixels.view()
    }

    pub(crate) fn pixels_mut(&mut self) -> ArrayViewMut2<'_, Rgb> {
        self.pixels.view_mut()
    }

    /// Iterate over rows, top to bottom, copying each into a `Vec`.
    pub fn rows(&self) -> impl Iterator<Item = Vec<Rgb>> + '_ {
        self.pixels.outer_iter().map(|row| row.to_vec())
    }

    /// Pack all pixels into `height * width * 3` bytes.
    pub fn to_bytes(&self, order: ChannelOrder) -> Vec<u8> {
        self.pixels.iter().flat_map(|&px| order.encode(px)).collect()
    }

    /// Copy pixels into an (H, W, 3) array in R, G, B order.
    pub fn to_array(&self) -> Array3<u8> {
        let (height, width) = self.dim();
        Array3::from_shape_fn((height, width, CHANNELS), |(y, x, c)| {
            self.pixels[[y, x]].channels()[c]
        })
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Rgb;

    /// Panics if `(y, x)` is outside the grid.
    fn index(&self, (y, x): (usize, usize)) -> &Rgb {
        &self.pixels[[y, x]]
    }
}
