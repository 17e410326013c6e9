//! Pixel Filters
//!
//! In-memory filter engine for 8-bit RGB pixel grids, with optional Python
//! bindings via PyO3 and WASM bindings for JavaScript.
//!
//! ## Image Format
//! A [`Grid`] is a row-major (height, width) array of [`Rgb`] triples, at
//! least 1x1. There is no alpha channel. Loading and saving image files is
//! left to the caller; grids are built from pixels, packed bytes (RGB or
//! BGR order) or an (H, W, 3) `u8` array.
//!
//! ## Filters
//! - **Grayscale**: rounded mean of the three channels
//! - **Reflect**: horizontal mirror
//! - **Blur**: 3x3 box blur over the pixels actually present
//! - **Edges**: Sobel gradient magnitude with black outside the grid
//!
//! Every filter returns a grid of the input's dimensions and reads only the
//! pre-filter pixels.
//!
//! ```
//! use pixel_filters::{apply_filter, Filter, Grid, Rgb};
//!
//! let mut grid = Grid::new(1, 3, vec![Rgb::gray(1), Rgb::gray(2), Rgb::gray(3)]).unwrap();
//! apply_filter(&mut grid, "reflect".parse::<Filter>().unwrap());
//! assert_eq!(grid[(0, 0)], Rgb::gray(3));
//! ```

pub mod engine;
pub mod error;
pub mod filters;
pub mod grid;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use engine::{Engine, EngineConfig};
pub use error::{FilterError, FilterResult};
pub use filters::{Blur, EdgeDetect, Filter, Grayscale, PixelTransform, Reflect};
pub use grid::{ChannelOrder, Grid, Rgb};

/// Apply `filter` to `grid` on the global rayon pool.
pub fn apply_filter(grid: &mut Grid, filter: Filter) {
    Engine::default().apply(grid, &filter);
}

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::{apply_filter as apply, Filter, FilterError, Grid};

    fn to_py_err(err: FilterError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    fn run<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        filter: Filter,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let mut grid = Grid::from_array(image.as_array()).map_err(to_py_err)?;
        apply(&mut grid, filter);
        Ok(grid.to_array().into_pyarray(py))
    }

    // ========================================================================
    // Filters
    // ========================================================================

    /// Convert an RGB u8 image (height, width, 3) to grayscale.
    ///
    /// Each pixel becomes the rounded mean of its three channels.
    #[pyfunction]
    pub fn grayscale<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        run(py, image, Filter::Grayscale)
    }

    /// Mirror an RGB u8 image left to right.
    #[pyfunction]
    pub fn reflect<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        run(py, image, Filter::Reflect)
    }

    /// 3x3 box blur of an RGB u8 image.
    ///
    /// Border pixels average only the neighbors inside the image.
    #[pyfunction]
    pub fn blur<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        run(py, image, Filter::Blur)
    }

    /// Sobel edge detection of an RGB u8 image, per channel.
    ///
    /// Pixels outside the image count as black.
    #[pyfunction]
    pub fn edges<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        run(py, image, Filter::Edges)
    }

    /// Apply a filter chosen by name or flag.
    ///
    /// # Arguments
    /// * `image` - RGB u8 image (height, width, 3)
    /// * `name` - "grayscale", "reflect", "blur", "edges" or "g", "r", "b", "e"
    #[pyfunction]
    pub fn apply_filter<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        name: &str,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let filter: Filter = name.parse().map_err(to_py_err)?;
        run(py, image, filter)
    }

    /// Python module definition
    #[pymodule]
    pub fn pixel_filters(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(grayscale, m)?)?;
        m.add_function(wrap_pyfunction!(reflect, m)?)?;
        m.add_function(wrap_pyfunction!(blur, m)?)?;
        m.add_function(wrap_pyfunction!(edges, m)?)?;
        m.add_function(wrap_pyfunction!(apply_filter, m)?)?;

        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::pixel_filters;
