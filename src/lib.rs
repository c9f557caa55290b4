//! # Gatito — discrete Arnold Cat Map engine
//!
//! A deterministic, reversible spatial permutation of square pixel grids:
//! one step of the map sends `(x, y)` to `((x + y) mod N, (x + 2y) mod N)`,
//! which shears an image into noise over a handful of iterations and, because
//! the map is periodic, walks it back to the exact original given enough
//! further steps.
//!
//! ## Quick Start
//!
//! ```
//! use gatito::{find_period, transform, PixelGrid, DEFAULT_PERIOD_BOUND};
//!
//! # fn main() -> Result<(), gatito::CatMapError> {
//! // A small grid with a distinct value in every cell
//! let original = PixelGrid::from_fn(4, 4, |x, y| y * 4 + x);
//!
//! // Scramble forward, then recover the original purely from
//! // iteration counts: counts compose additively modulo the period
//! let scrambled = transform(&original, 2)?;
//! let period = find_period(&original, DEFAULT_PERIOD_BOUND)?;
//! assert_eq!(transform(&scrambled, period - 2)?, original);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - `grid`: square pixel grid of opaque cell values
//! - `catmap`: the permutation engine and period search
//! - `viewer`: forward/reversed frame strips for presentation layers
//! - `raster`: packed-integer conversion to and from decoded images

pub mod catmap;
pub mod error;
pub mod grid;
pub mod raster;
pub mod viewer;

// Re-export main types for convenience
pub use catmap::{find_period, reversal_iterations, transform, DEFAULT_PERIOD_BOUND};
pub use error::CatMapError;
pub use grid::PixelGrid;
pub use raster::{grid_from_image, image_from_grid};
pub use viewer::{render_frames, ViewMode, DISPLAY_DEPTH};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
