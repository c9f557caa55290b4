/// Error taxonomy for the cat map core
/// Every condition here is recoverable and surfaced to the caller as a typed result

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatMapError {
    /// The map is only defined on square grids
    #[error("grid is {width}x{height}, the cat map needs a square")]
    InvalidGrid { width: u32, height: u32 },

    /// Reversal arithmetic produced a negative iteration count
    /// (the period is too small for the requested display depth)
    #[error("derived iteration count {derived} is negative")]
    InvalidIterationCount { derived: i64 },

    /// The period search exhausted its iteration ceiling
    #[error("no period found within {bound} iterations")]
    PeriodNotFound { bound: u32 },
}
