//! Error types.
//!
//! Construction of specs and configs is validated up front, so the render
//! path itself never fails. The only runtime error is the layout engine
//! rejecting a tree.

use thiserror::Error;

/// Errors produced by validated constructors and layout computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// Rows and columns must both be at least 1.
    #[error("grid must have at least one row and one column (got {rows}x{columns})")]
    InvalidTracks { rows: u16, columns: u16 },

    /// Gap must be finite and non-negative.
    #[error("grid gap must be a finite non-negative number (got {0})")]
    InvalidGap(f32),

    /// Visibility threshold must lie in 0..=1.
    #[error("visibility threshold must be within 0..=1 (got {0})")]
    InvalidThreshold(f32),

    /// Stagger bases must be non-negative and the step strictly positive.
    #[error("invalid stagger timing: {0}")]
    InvalidStagger(&'static str),

    /// Layout width must be finite and positive.
    #[error("layout width must be finite and positive (got {0})")]
    InvalidWidth(f32),

    /// The layout engine refused the node tree.
    #[error("layout engine failure: {0}")]
    Layout(String),
}

impl From<taffy::TaffyError> for GridError {
    fn from(err: taffy::TaffyError) -> Self {
        GridError::Layout(format!("{err:?}"))
    }
}

pub type Result<T> = std::result::Result<T, GridError>;
