//! Constants shared by the estimator and its front ends.

/// Minimum number of samples required to fit a line.
pub const MIN_POINTS: usize = 2;

/// Number of decimal digits used when formatting the correlation coefficient.
pub const R_DECIMALS: usize = 3;

/// Process exit codes used by the `corrstat` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O, malformed input files).
    pub const ERROR_GENERIC: i32 = 1;
    /// The sample has zero variance and no line or correlation is defined.
    pub const ERROR_DEGENERATE: i32 = 2;
    /// Fewer samples than [`super::MIN_POINTS`].
    pub const ERROR_INSUFFICIENT: i32 = 3;
    /// Invalid configuration or query parameters.
    pub const ERROR_CONFIG: i32 = 4;
}
