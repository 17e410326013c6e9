//! Filter engine: applies one selected filter to caller-owned storage.
//!
//! ```
//! use pixel_filters::{Engine, EngineConfig, Filter, Grid, Rgb};
//!
//! let engine = Engine::new(EngineConfig::default().with_threads(2)).unwrap();
//! let mut grid = Grid::filled(4, 4, Rgb::new(100, 150, 200)).unwrap();
//!
//! engine.apply(&mut grid, &Filter::Grayscale);
//! assert_eq!(grid[(0, 0)], Rgb::gray(150));
//! ```

use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::debug;

use crate::error::FilterResult;
use crate::filters::PixelTransform;
use crate::grid::Grid;

/// Engine settings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Worker threads for a dedicated pool. `None` runs on the global rayon pool.
    pub threads: Option<usize>,
}

impl EngineConfig {
    /// Use a dedicated pool with `threads` workers.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Run on the global rayon pool.
    pub fn with_global_pool(mut self) -> Self {
        self.threads = None;
        self
    }
}

/// Applies filters to grids.
///
/// The engine holds no grid between calls; the only state is the optional
/// worker pool.
#[derive(Debug, Default)]
pub struct Engine {
    pool: Option<ThreadPool>,
}

impl Engine {
    /// Build an engine from `config`.
    ///
    /// # Errors
    ///
    /// [`FilterError::ThreadPool`](crate::FilterError::ThreadPool) if the
    /// dedicated pool cannot be created.
    pub fn new(config: EngineConfig) -> FilterResult<Self> {
        let pool = match config.threads {
            Some(threads) => {
                debug!(threads, "building filter thread pool");
                Some(ThreadPoolBuilder::new().num_threads(threads).build()?)
            }
            None => None,
        };
        Ok(Self { pool })
    }

    /// Worker count the engine will use.
    pub fn threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    /// Filter `grid` and substitute the result for its contents.
    pub fn apply<T>(&self, grid: &mut Grid, filter: &T)
    where
        T: PixelTransform + ?Sized,
    {
        let (height, width) = grid.dim();
        debug!(filter = filter.name(), height, width, "applying filter");
        self.install(|| filter.apply_in_place(grid));
    }

    /// Filter a borrowed grid into a new one.
    pub fn run<T>(&self, src: &Grid, filter: &T) -> Grid
    where
        T: PixelTransform + ?Sized,
    {
        let (height, width) = src.dim();
        debug!(filter = filter.name(), height, width, "running filter");
        self.install(|| filter.transform(src))
    }

    fn install<R, F>(&self, op: F) -> R
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }
}
