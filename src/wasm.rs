//! WebAssembly exports for the pixel filters.
//!
//! These functions are exposed to JavaScript via wasm-bindgen.
//!
//! All functions take and return flat, row-major RGB bytes
//! (length = width * height * 3). Canvas `ImageData` is RGBA, so callers
//! drop the alpha byte before the call and restore it afterwards.

use wasm_bindgen::prelude::*;

use crate::{apply_filter, ChannelOrder, Filter, Grid};

fn run(data: &[u8], width: usize, height: usize, filter: Filter) -> Result<Vec<u8>, JsError> {
    let mut grid = Grid::from_bytes(height, width, data, ChannelOrder::Rgb)?;
    apply_filter(&mut grid, filter);
    Ok(grid.to_bytes(ChannelOrder::Rgb))
}

// ============================================================================
// Filters
// ============================================================================

/// Convert RGB bytes to grayscale (channel mean).
///
/// # Arguments
/// * `data` - Flat array of RGB bytes (length = width * height * 3)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Returns
/// Flat array of RGB bytes with grayscale values
#[wasm_bindgen]
pub fn grayscale_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    run(data, width, height, Filter::Grayscale)
}

/// Mirror RGB bytes left to right.
#[wasm_bindgen]
pub fn reflect_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    run(data, width, height, Filter::Reflect)
}

/// 3x3 box blur of RGB bytes.
#[wasm_bindgen]
pub fn blur_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    run(data, width, height, Filter::Blur)
}

/// Sobel edge detection of RGB bytes.
#[wasm_bindgen]
pub fn edges_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    run(data, width, height, Filter::Edges)
}

/// Apply a filter chosen by name ("grayscale", "reflect", "blur", "edges") or flag.
#[wasm_bindgen]
pub fn apply_filter_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    name: &str,
) -> Result<Vec<u8>, JsError> {
    let filter: Filter = name.parse()?;
    run(data, width, height, filter)
}
