/// Forward/reversed viewing built on the pure permutation core
/// The presentation layer owns an explicit view mode and recomputes frame
/// strips by calling `transform`; no mutable toggle state lives in the core

use rayon::prelude::*;

use crate::catmap::{reversal_iterations, transform};
use crate::error::CatMapError;
use crate::grid::PixelGrid;

/// Number of frames in the viewer strip
pub const DISPLAY_DEPTH: u32 = 10;

/// Which direction the frame strip walks
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    /// Frames 0..depth of forward scrambling, starting at the original
    Forward,
    /// Frames walking the depth-step scramble back to the original
    Reversed,
}

impl ViewMode {
    pub fn toggle(self) -> Self {
        match self {
            ViewMode::Forward => ViewMode::Reversed,
            ViewMode::Reversed => ViewMode::Forward,
        }
    }
}

/// Render the frame strip for `mode`
///
/// Forward frame `i` is `transform(original, i)`. Reversed frame `i` is
/// `transform(scrambled, period - depth - i)` where `scrambled` is the
/// depth-step forward scramble; by additivity that equals
/// `transform(original, period - i)`, so frame 0 reproduces the original
/// exactly. Fails with `InvalidIterationCount` when the period is too small
/// for the depth.
///
/// Frames are independent `transform` calls on distinct grids, so they
/// render in parallel.
pub fn render_frames<T>(
    original: &PixelGrid<T>,
    depth: u32,
    period: u32,
    mode: ViewMode,
) -> Result<Vec<PixelGrid<T>>, CatMapError>
where
    T: Copy + Send + Sync,
{
    match mode {
        ViewMode::Forward => (0..depth)
            .into_par_iter()
            .map(|i| transform(original, i))
            .collect(),
        ViewMode::Reversed => {
            let scrambled = transform(original, depth)?;
            // Fail fast before rendering anything if the deepest frame
            // would need a negative count
            if depth > 0 {
                reversal_iterations(period, depth, depth - 1)?;
            }
            (0..depth)
                .into_par_iter()
                .map(|i| {
                    let back = reversal_iterations(period, depth, i)?;
                    transform(&scrambled, back)
                })
                .collect()
        }
    }
}
