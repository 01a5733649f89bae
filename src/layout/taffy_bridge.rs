//! Taffy Bridge - track placement through Taffy's CSS grid.
//!
//! Converts a [`GridSpec`] and the cells' spans into Taffy styles, runs grid
//! layout for a given width, and extracts each cell's pixel bounds and track
//! coordinates.
//!
//! Cells are placed with `span N` (or `auto`), never explicit lines, so
//! Taffy's auto-placement packs them row by row.

use taffy::style_helpers::fr;
use taffy::{
    AvailableSpace, Dimension, Display, GridPlacement, LengthPercentage, Line, NodeId, Size,
    Style, TaffyTree, TrackSizingFunction,
};

use crate::error::{GridError, Result};
use crate::types::{Bounds, GridSpec};

// =============================================================================
// OUTPUT
// =============================================================================

/// Track span requested for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub rows: u16,
    pub columns: u16,
}

impl Default for Span {
    fn default() -> Self {
        Self { rows: 1, columns: 1 }
    }
}

/// Where one cell ended up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPlacement {
    /// Position in the container's child order.
    pub index: usize,
    /// Zero-based first row track.
    pub row: u16,
    /// Zero-based first column track.
    pub column: u16,
    pub row_span: u16,
    pub col_span: u16,
    /// Pixel bounds relative to the container.
    pub bounds: Bounds,
}

impl CellPlacement {
    /// Every `(row, column)` track slot this cell covers.
    pub fn slots(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        (self.row..self.row + self.row_span)
            .flat_map(move |r| (self.column..self.column + self.col_span).map(move |c| (r, c)))
    }
}

/// Computed geometry of a whole grid.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridLayout {
    pub width: f32,
    pub height: f32,
    pub track_width: f32,
    pub track_height: f32,
    pub cells: Vec<CellPlacement>,
}

// =============================================================================
// STYLE BUILDING
// =============================================================================

fn equal_tracks(count: u16) -> Vec<TrackSizingFunction> {
    (0..count).map(|_| fr(1.0)).collect()
}

fn span_placement(n: u16) -> Line<GridPlacement> {
    if n > 1 {
        Line {
            start: GridPlacement::Span(n),
            end: GridPlacement::Auto,
        }
    } else {
        Line {
            start: GridPlacement::Auto,
            end: GridPlacement::Auto,
        }
    }
}

/// Container style: explicit equal tracks, uniform gap, fixed aspect ratio.
fn container_style(spec: &GridSpec, width: f32) -> Style {
    Style {
        display: Display::Grid,
        grid_template_rows: equal_tracks(spec.rows()),
        grid_template_columns: equal_tracks(spec.columns()),
        gap: Size {
            width: LengthPercentage::Length(spec.gap()),
            height: LengthPercentage::Length(spec.gap()),
        },
        aspect_ratio: Some(spec.aspect_ratio()),
        size: Size {
            width: Dimension::Length(width),
            height: Dimension::Length(width / spec.aspect_ratio()),
        },
        ..Default::default()
    }
}

fn cell_style(span: Span) -> Style {
    Style {
        grid_row: span_placement(span.rows),
        grid_column: span_placement(span.columns),
        ..Default::default()
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Lay out `spans.len()` cells in the grid at the given pixel width.
///
/// Height follows from the `columns : rows` aspect ratio. Spans should already
/// be clamped to the declared tracks; larger ones spill into implicit tracks.
pub fn compute_grid_layout(spec: &GridSpec, spans: &[Span], width: f32) -> Result<GridLayout> {
    if !width.is_finite() || width <= 0.0 {
        return Err(GridError::InvalidWidth(width));
    }

    let mut tree: TaffyTree<()> = TaffyTree::new();

    let children: Vec<NodeId> = spans
        .iter()
        .map(|&span| tree.new_leaf(cell_style(span)))
        .collect::<std::result::Result<_, _>>()?;

    let root = tree.new_with_children(container_style(spec, width), &children)?;

    tree.compute_layout(
        root,
        Size {
            width: AvailableSpace::Definite(width),
            height: AvailableSpace::MaxContent,
        },
    )?;

    let root_layout = tree.layout(root)?;
    let gap = spec.gap();
    let columns = spec.columns() as f32;
    let rows = spec.rows() as f32;
    let track_width = (root_layout.size.width - gap * (columns - 1.0)) / columns;
    let track_height = (root_layout.size.height - gap * (rows - 1.0)) / rows;

    let mut result = GridLayout {
        width: root_layout.size.width,
        height: root_layout.size.height,
        track_width,
        track_height,
        cells: Vec::with_capacity(children.len()),
    };

    for (index, &node) in children.iter().enumerate() {
        let layout = tree.layout(node)?;
        let bounds = Bounds::new(
            layout.location.x,
            layout.location.y,
            layout.size.width,
            layout.size.height,
        );
        result.cells.push(CellPlacement {
            index,
            row: track_index(bounds.y, track_height, gap),
            column: track_index(bounds.x, track_width, gap),
            row_span: spans[index].rows.max(1),
            col_span: spans[index].columns.max(1),
            bounds,
        });
    }

    Ok(result)
}

/// Which track a pixel offset falls on, given track size and gap.
fn track_index(offset: f32, track: f32, gap: f32) -> u16 {
    let pitch = track + gap;
    if pitch <= 0.0 {
        return 0;
    }
    (offset / pitch).round().max(0.0) as u16
}
