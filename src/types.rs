//! Core types for showcase-grid.
//!
//! These are the plain values that flow from the composition root down into
//! the layout and render pipeline. Everything here is immutable once built.

use crate::error::{GridError, Result};

// =============================================================================
// GridSpec
// =============================================================================

/// Track configuration of a grid container.
///
/// Rows and columns are equal-fraction tracks; `gap` is the uniform pixel gap
/// between them. The block keeps a `columns : rows` aspect ratio so it scales
/// uniformly with the width it is given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    rows: u16,
    columns: u16,
    gap: f32,
}

impl GridSpec {
    /// Create a validated spec with no gap.
    pub fn new(rows: u16, columns: u16) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(GridError::InvalidTracks { rows, columns });
        }
        Ok(Self { rows, columns, gap: 0.0 })
    }

    /// Set the gap between tracks, in pixels.
    pub fn with_gap(mut self, gap: f32) -> Result<Self> {
        if !gap.is_finite() || gap < 0.0 {
            return Err(GridError::InvalidGap(gap));
        }
        self.gap = gap;
        Ok(self)
    }

    #[inline]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> u16 {
        self.columns
    }

    #[inline]
    pub fn gap(&self) -> f32 {
        self.gap
    }

    /// Number of track slots (rows × columns).
    pub fn track_count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    /// Width over height: `columns / rows`.
    pub fn aspect_ratio(&self) -> f32 {
        self.columns as f32 / self.rows as f32
    }

    /// Aspect ratio in style-channel form, e.g. `"3 / 2"`.
    pub fn aspect_ratio_css(&self) -> String {
        format!("{} / {}", self.columns, self.rows)
    }
}

// =============================================================================
// Slide Direction
// =============================================================================

/// Edge a hover image slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SlideDirection {
    #[default]
    Left,
    Right,
    Top,
    Bottom,
}

impl SlideDirection {
    pub const ALL: [SlideDirection; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    /// Parse from a direction name (case-insensitive).
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }

    /// Resting offset of the hover layer before hover, in percent `(x, y)`.
    pub fn resting_offset(&self) -> Offset {
        match self {
            Self::Left => Offset { x: -100.0, y: 0.0 },
            Self::Right => Offset { x: 100.0, y: 0.0 },
            Self::Top => Offset { x: 0.0, y: -100.0 },
            Self::Bottom => Offset { x: 0.0, y: 100.0 },
        }
    }

    /// Class applied alongside `hover-image`, e.g. `slide-from-left`.
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Left => "slide-from-left",
            Self::Right => "slide-from-right",
            Self::Top => "slide-from-top",
            Self::Bottom => "slide-from-bottom",
        }
    }
}

/// Translation of a layer relative to its own size, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
}

// =============================================================================
// Orientation
// =============================================================================

/// Axis a border line runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Short prefix used in line keys (`h-0`, `v-2`).
    pub fn key_prefix(&self) -> char {
        match self {
            Self::Horizontal => 'h',
            Self::Vertical => 'v',
        }
    }
}

// =============================================================================
// Axis
// =============================================================================

/// Track axis a cell spans along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Row tracks (`row_span`, stacked top to bottom).
    Row,
    /// Column tracks (`col_span`, left to right).
    Column,
}

// =============================================================================
// Inner Grid
// =============================================================================

/// Fixed sub-layout of a cell that nests a secondary grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InnerGrid {
    /// Empty placeholder, then content.
    #[default]
    Pair,
    /// Empty, content, empty.
    Triple,
}

impl InnerGrid {
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Pair => "inner-grid",
            Self::Triple => "inner-grid-3",
        }
    }

    /// Sub-cell count.
    pub fn slots(&self) -> usize {
        match self {
            Self::Pair => 2,
            Self::Triple => 3,
        }
    }
}

// =============================================================================
// Cell Flags (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Features enabled on a grid cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CellFlags: u8 {
        const NONE = 0;
        const HOVER_IMAGE = 1 << 0;
        const INNER_GRID = 1 << 1;
        const ROW_SPAN = 1 << 2;
        const COL_SPAN = 1 << 3;
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// Axis-aligned rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Overlapping area of two rectangles (0 if disjoint).
    pub fn intersection_area(&self, other: &Bounds) -> f32 {
        let w = self.right().min(other.right()) - self.x.max(other.x);
        let h = self.bottom().min(other.bottom()) - self.y.max(other.y);
        if w <= 0.0 || h <= 0.0 { 0.0 } else { w * h }
    }
}

// =============================================================================
// Diagnostics
// =============================================================================

/// Non-fatal problem found while composing a grid.
///
/// Every diagnostic is also emitted through `log::warn!`; the list is kept so
/// callers and tests can inspect what was dropped or adjusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A child of the wrong kind was removed from the tree.
    DroppedChild {
        parent: &'static str,
        kind: &'static str,
    },
    /// A span larger than the declared tracks was reduced.
    SpanClamped {
        axis: Axis,
        requested: u16,
        clamped: u16,
    },
}

// =============================================================================
// Tests
// =============================================================================
