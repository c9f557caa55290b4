/// Discrete Arnold Cat Map permutation engine and period search
/// One step sends every source position (x, y) of an N x N grid to
/// ((x + y) mod N, (x + 2y) mod N); the map matrix has determinant 1 mod N,
/// so each step is a bijection on the coordinate set and exactly reversible
/// by iterating far enough

use crate::error::CatMapError;
use crate::grid::PixelGrid;

/// Safety ceiling for the brute-force period search
///
/// The period grows with the grid side in an irregular way, so the search
/// carries a hard cutoff instead of a closed-form limit.
pub const DEFAULT_PERIOD_BOUND: u32 = 1000;

fn require_square<T: Copy>(grid: &PixelGrid<T>) -> Result<u32, CatMapError> {
    if !grid.is_square() {
        return Err(CatMapError::InvalidGrid {
            width: grid.width(),
            height: grid.height(),
        });
    }
    Ok(grid.width())
}

/// One application of the map into freshly allocated storage
///
/// The clone only provides initialized cells; the bijection overwrites
/// every one of them exactly once.
fn step<T: Copy>(grid: &PixelGrid<T>, side: u32) -> PixelGrid<T> {
    let mut next = grid.clone();
    for x in 0..side {
        for y in 0..side {
            let nx = (x + y) % side;
            let ny = (x + 2 * y) % side;
            next.set(nx, ny, grid.get(x, y));
        }
    }
    next
}

/// Apply `iterations` steps of the cat map to a square grid
///
/// Returns a new grid; the input is never mutated. Zero iterations yield a
/// value-wise copy in distinct storage. Each step operates on the previous
/// step's full output, so counts compose additively:
/// `transform(transform(g, a), b) == transform(g, a + b)`.
pub fn transform<T: Copy>(
    grid: &PixelGrid<T>,
    iterations: u32,
) -> Result<PixelGrid<T>, CatMapError> {
    let side = require_square(grid)?;

    let mut current = grid.clone();
    for _ in 0..iterations {
        current = step(&current, side);
    }
    Ok(current)
}

/// Find the smallest positive iteration count returning `grid` to itself
///
/// Applies one step at a time to an internally owned working grid and
/// compares against the caller's original after every step with a full
/// pixel-wise scan. Fails with `PeriodNotFound` once the counter would
/// pass `bound` without equality ever holding.
pub fn find_period<T: Copy + PartialEq>(
    grid: &PixelGrid<T>,
    bound: u32,
) -> Result<u32, CatMapError> {
    let side = require_square(grid)?;

    let mut current = grid.clone();
    let mut count: u32 = 0;
    loop {
        count += 1;
        if count > bound {
            return Err(CatMapError::PeriodNotFound { bound });
        }
        current = step(&current, side);
        if current == *grid {
            return Ok(count);
        }
    }
}

/// Derive the iteration count that walks a depth-`depth` scramble back to
/// forward frame `depth - 1 - frame`, given the grid's period
///
/// This is `period - depth - frame` in checked arithmetic: a negative
/// result means the period is too small for the requested depth and is
/// surfaced as an error, never clamped or wrapped.
pub fn reversal_iterations(period: u32, depth: u32, frame: u32) -> Result<u32, CatMapError> {
    let derived = i64::from(period) - i64::from(depth) - i64::from(frame);
    if derived < 0 {
        return Err(CatMapError::InvalidIterationCount { derived });
    }
    Ok(derived as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Grid with a distinct value in every cell, so its period equals the
    /// order of the coordinate permutation itself
    fn distinct(side: u32) -> PixelGrid<u32> {
        PixelGrid::from_fn(side, side, |x, y| y * side + x)
    }

    #[test]
    fn test_zero_iterations_is_identity_with_distinct_storage() {
        let grid = distinct(6);
        let mut copy = transform(&grid, 0).unwrap();
        assert_eq!(copy, grid);
        copy.set(2, 3, 9999);
        assert_eq!(grid.get(2, 3), 3 * 6 + 2);
    }

    #[test]
    fn test_one_step_moves_marked_pixel() {
        // (1, 2) -> ((1 + 2) % 4, (1 + 4) % 4) = (3, 1)
        let mut grid = PixelGrid::new(4, 4, 0u32);
        grid.set(1, 2, 1);
        let once = transform(&grid, 1).unwrap();
        assert_eq!(once.get(3, 1), 1);
        assert_eq!(once.get(1, 2), 0);
    }

    #[test]
    fn test_origin_is_a_fixed_point() {
        for side in [1u32, 2, 4, 7, 16] {
            let mut grid = PixelGrid::new(side, side, 0u32);
            grid.set(0, 0, 1);
            for k in 0..6 {
                let moved = transform(&grid, k).unwrap();
                assert_eq!(moved.get(0, 0), 1, "side {side}, iteration {k}");
            }
        }
    }

    #[test]
    fn test_one_step_is_a_bijection() {
        for side in [2u32, 3, 4, 5, 8, 13] {
            let mut hits = vec![0u32; (side * side) as usize];
            for x in 0..side {
                for y in 0..side {
                    let nx = (x + y) % side;
                    let ny = (x + 2 * y) % side;
                    hits[(ny * side + nx) as usize] += 1;
                }
            }
            assert!(
                hits.iter().all(|&h| h == 1),
                "side {side}: destination coverage is not exactly one per cell"
            );
        }
    }

    #[test]
    fn test_one_step_leaves_no_cell_unwritten() {
        // Every destination cell must come from some source cell, so no
        // value of the input may survive in place unless mapped there.
        let grid = distinct(5);
        let once = transform(&grid, 1).unwrap();
        let mut seen: Vec<u32> = Vec::new();
        for y in 0..5 {
            for x in 0..5 {
                seen.push(once.get(x, y));
            }
        }
        seen.sort_unstable();
        let expected: Vec<u32> = (0..25).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_additivity() {
        let grid = distinct(8);
        for (a, b) in [(0u32, 0u32), (0, 3), (2, 0), (1, 1), (3, 4), (7, 5)] {
            let chained = transform(&transform(&grid, a).unwrap(), b).unwrap();
            let direct = transform(&grid, a + b).unwrap();
            assert_eq!(chained, direct, "a={a}, b={b}");
        }
    }

    #[test]
    fn test_known_small_periods() {
        // Orbits worked out by hand: N=2 -> 3, N=3 -> 4, N=4 -> 3
        assert_eq!(find_period(&distinct(2), DEFAULT_PERIOD_BOUND).unwrap(), 3);
        assert_eq!(find_period(&distinct(3), DEFAULT_PERIOD_BOUND).unwrap(), 4);
        assert_eq!(find_period(&distinct(4), DEFAULT_PERIOD_BOUND).unwrap(), 3);
    }

    #[test]
    fn test_period_returns_grid_to_itself_and_is_minimal() {
        for side in [2u32, 3, 4, 5, 8] {
            let grid = distinct(side);
            let period = find_period(&grid, DEFAULT_PERIOD_BOUND).unwrap();
            assert_eq!(transform(&grid, period).unwrap(), grid, "side {side}");
            for k in 1..period {
                assert_ne!(
                    transform(&grid, k).unwrap(),
                    grid,
                    "side {side}: returned early at {k} of {period}"
                );
            }
        }
    }

    #[test]
    fn test_uniform_grid_has_period_one() {
        // Period is a property of the grid's values, not just the map
        let flat = PixelGrid::new(7, 7, 42u8);
        assert_eq!(find_period(&flat, DEFAULT_PERIOD_BOUND).unwrap(), 1);
    }

    #[test]
    fn test_bound_exhaustion() {
        // N=3 has period 4; a bound of 3 must exhaust, not loop
        let grid = distinct(3);
        assert_eq!(
            find_period(&grid, 3),
            Err(CatMapError::PeriodNotFound { bound: 3 })
        );
    }

    #[test]
    fn test_non_square_grid_is_rejected() {
        let grid = PixelGrid::new(4, 3, 0u32);
        assert_eq!(
            transform(&grid, 1),
            Err(CatMapError::InvalidGrid { width: 4, height: 3 })
        );
        assert_eq!(
            find_period(&grid, DEFAULT_PERIOD_BOUND),
            Err(CatMapError::InvalidGrid { width: 4, height: 3 })
        );
    }

    #[test]
    fn test_reversal_iterations_arithmetic() {
        assert_eq!(reversal_iterations(30, 10, 0).unwrap(), 20);
        assert_eq!(reversal_iterations(30, 10, 9).unwrap(), 11);
        assert_eq!(reversal_iterations(19, 10, 9).unwrap(), 0);
        assert_eq!(
            reversal_iterations(12, 10, 9),
            Err(CatMapError::InvalidIterationCount { derived: -7 })
        );
        assert_eq!(
            reversal_iterations(3, 10, 0),
            Err(CatMapError::InvalidIterationCount { derived: -7 })
        );
    }

    #[test]
    fn test_reversal_round_trip_at_display_depth() {
        // N=10 has period 30, comfortably above the depth-10 strip
        let grid = distinct(10);
        let period = find_period(&grid, DEFAULT_PERIOD_BOUND).unwrap();
        assert_eq!(period, 30);

        let depth = 10u32;
        let scrambled = transform(&grid, depth).unwrap();
        for frame in 0..depth {
            let back = reversal_iterations(period, depth, frame).unwrap();
            let reverted = transform(&scrambled, back).unwrap();
            let expected = transform(&grid, period - frame).unwrap();
            assert_eq!(reverted, expected, "frame {frame}");
        }
        // Frame zero lands exactly on the original
        let full = reversal_iterations(period, depth, 0).unwrap();
        assert_eq!(transform(&scrambled, full).unwrap(), grid);
    }
}
