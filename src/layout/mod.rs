//! Layout Module - grid geometry.
//!
//! Two independent pieces:
//!
//! 1. [`grid_lines`] - the border overlay's line positions and stagger timing,
//!    a pure function of rows, columns and [`StaggerConfig`].
//! 2. [`taffy_bridge`] - cell placement through
//!    [Taffy](https://github.com/DioxusLabs/taffy)'s CSS grid: equal `fr`
//!    tracks, uniform gap, `span N` auto-placement.
//!
//! # Example
//!
//! ```ignore
//! use showcase_grid::layout::{generate_grid_lines, StaggerConfig};
//!
//! let lines = generate_grid_lines(2, 3, &StaggerConfig::default());
//! assert_eq!(lines.horizontal.len(), 3);
//! assert_eq!(lines.vertical.len(), 4);
//! ```

pub mod grid_lines;
mod taffy_bridge;

pub use grid_lines::{generate_grid_lines, GridLine, GridLines, StaggerConfig, StaggerScheme};
pub use taffy_bridge::{compute_grid_layout, CellPlacement, GridLayout, Span};
