use thiserror::Error;

/// Errors raised when grid geometry is configured with impossible values.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("column count must be at least 1")]
    ZeroColumns,

    #[error("breakpoint at width {min_width} is declared more than once")]
    DuplicateBreakpoint { min_width: u32 },

    #[error(
        "breakpoint at width {min_width} maps to {columns} columns, fewer than a narrower width"
    )]
    NonMonotonicBreakpoint { min_width: u32, columns: usize },
}
