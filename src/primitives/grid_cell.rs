//! Grid Cell - one layout unit inside a grid container.
//!
//! A cell occupies `row_span × col_span` tracks through auto-placement. On top
//! of its content it may carry:
//!
//! - a **hover image** that rests off-canvas on the side named by its
//!   [`SlideDirection`] and slides to `(0, 0)` while the cell is hovered or
//!   focused. The transition itself only runs once the container's
//!   [`AnimationGate`] is open.
//! - an **inner grid** that splits the cell into placeholder and content
//!   slots (`[empty, content]` or `[empty, content, empty]`). Presentation
//!   only: no detector, no overlay.
//!
//! Content is validated once, when the cell is built. A grid cell nested in a
//! cell has no container to place it and is dropped with a diagnostic.
//!
//! # Example
//!
//! ```ignore
//! let cell = GridCell::new(
//!     CellSpec::new()
//!         .with_hover_image("/images/ai-generated-8020817_1280.jpg")
//!         .with_hover_direction(SlideDirection::Left)
//!         .child(ProductContent::new("Evnia 3000 series", "For the casual gamer.")),
//!     gate,
//! );
//!
//! cell.pointer_enter();
//! assert_eq!(cell.hover_layer().unwrap().offset, Offset::ZERO);
//! ```

use crate::layout::Span;
use crate::renderer::RenderNode;
use crate::state::{AnimationGate, HoverState};
use crate::style::{self, vars, StyleVars};
use crate::types::{Axis, CellFlags, Diagnostic, GridSpec, InnerGrid, Offset, SlideDirection};

use super::types::{CellSpec, Content, Node};

// =============================================================================
// Cell children
// =============================================================================

/// Kinds of child a cell renders.
#[derive(Debug, Clone, PartialEq)]
pub enum CellChild {
    Content(Content),
    Text(String),
    Element(RenderNode),
}

impl CellChild {
    fn render(&self) -> RenderNode {
        match self {
            CellChild::Content(content) => content.render(),
            CellChild::Text(text) => RenderNode::new("span").with_classes("cell-text").with_text(text),
            CellChild::Element(node) => node.clone(),
        }
    }
}

/// Narrow loose nodes to cell children, dropping the ones a cell cannot hold.
fn validate_children(nodes: Vec<Node>, diagnostics: &mut Vec<Diagnostic>) -> Vec<CellChild> {
    nodes
        .into_iter()
        .filter_map(|node| match node {
            Node::Content(content) => Some(CellChild::Content(content)),
            Node::Text(text) => Some(CellChild::Text(text)),
            Node::Element(element) => Some(CellChild::Element(element)),
            other => {
                log::warn!("grid cell dropped a {} child: only content may be placed in a cell", other.kind());
                diagnostics.push(Diagnostic::DroppedChild {
                    parent: "grid-cell",
                    kind: other.kind(),
                });
                None
            }
        })
        .collect()
}

// =============================================================================
// Hover layer
// =============================================================================

/// Current state of a cell's hover image.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverLayer {
    pub image: String,
    pub direction: SlideDirection,
    /// Translation of the image in percent of the cell; `ZERO` when shown.
    pub offset: Offset,
    /// Whether the slide transition may run (animation gate open).
    pub transition_enabled: bool,
}

// =============================================================================
// Grid Cell
// =============================================================================

/// A cell bound to its container's animation gate.
pub struct GridCell {
    spec: CellSpec,
    children: Vec<CellChild>,
    hover: HoverState,
    gate: AnimationGate,
    diagnostics: Vec<Diagnostic>,
}

impl GridCell {
    pub fn new(mut spec: CellSpec, gate: AnimationGate) -> Self {
        let mut diagnostics = Vec::new();
        let nodes = std::mem::take(&mut spec.content);
        let children = validate_children(nodes, &mut diagnostics);

        Self {
            spec,
            children,
            hover: HoverState::new(),
            gate,
            diagnostics,
        }
    }

    pub fn spec(&self) -> &CellSpec {
        &self.spec
    }

    pub fn children(&self) -> &[CellChild] {
        &self.children
    }

    /// Problems found while validating this cell's content.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Requested span, clamped to the tracks `grid` declares.
    pub fn span_in(&self, grid: &GridSpec) -> (Span, Vec<Diagnostic>) {
        let mut diagnostics = Vec::new();
        let rows = clamp_span(self.spec.row_span, grid.rows(), Axis::Row, &mut diagnostics);
        let columns = clamp_span(self.spec.col_span, grid.columns(), Axis::Column, &mut diagnostics);
        (Span { rows, columns }, diagnostics)
    }

    // -------------------------------------------------------------------------
    // Hover
    // -------------------------------------------------------------------------

    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    pub fn pointer_enter(&self) {
        self.hover.pointer_enter();
    }

    pub fn pointer_leave(&self) {
        self.hover.pointer_leave();
    }

    pub fn focus(&self) {
        self.hover.focus();
    }

    pub fn blur(&self) {
        self.hover.blur();
    }

    /// Hover image state, if the cell has one. Reads hover and gate signals.
    pub fn hover_layer(&self) -> Option<HoverLayer> {
        let image = self.spec.hover_image.as_ref()?;
        let direction = self.spec.hover_direction;
        let offset = if self.hover.is_active() {
            Offset::ZERO
        } else {
            direction.resting_offset()
        };

        Some(HoverLayer {
            image: image.clone(),
            direction,
            offset,
            transition_enabled: self.gate.is_open(),
        })
    }

    // -------------------------------------------------------------------------
    // Render
    // -------------------------------------------------------------------------

    /// Render with an already clamped span.
    ///
    /// Feature classes come from the cell's [`CellFlags`]: `hover-image`,
    /// `cell-with-inner-grid`, and `cell-span-rows` / `cell-span-columns`
    /// for spans above one track.
    pub fn render(&self, span: Span) -> RenderNode {
        let flags = self.spec.flags();
        let mut css = StyleVars::new()
            .with(vars::GRID_ROW, style::span(span.rows))
            .with(vars::GRID_COLUMN, style::span(span.columns));

        let mut root = RenderNode::div("grid-cell").with_classes(&self.spec.class_name);
        if let Some(id) = &self.spec.id {
            root = root.with_attr("id", id.as_str());
        }

        let layer = self.hover_layer();
        if let Some(layer) = &layer {
            root = root
                .with_classes("hover-image")
                .with_classes(layer.direction.class_name());
            if layer.offset == Offset::ZERO {
                root = root.with_classes("hovered");
            }
            css.set(vars::HOVER_IMAGE, style::url(&layer.image));
            css.set(vars::HOVER_OFFSET_X, style::percent(layer.offset.x));
            css.set(vars::HOVER_OFFSET_Y, style::percent(layer.offset.y));
            css.set(
                vars::HOVER_TRANSITION,
                if layer.transition_enabled { "enabled" } else { "disabled" },
            );
        }
        if flags.contains(CellFlags::INNER_GRID) {
            root = root.with_classes("cell-with-inner-grid");
        }
        if flags.contains(CellFlags::ROW_SPAN) && span.rows > 1 {
            root = root.with_classes("cell-span-rows");
        }
        if flags.contains(CellFlags::COL_SPAN) && span.columns > 1 {
            root = root.with_classes("cell-span-columns");
        }

        root = root.with_style(css);
        if flags.contains(CellFlags::HOVER_IMAGE) {
            root = root.with_child(RenderNode::div("hover-image-layer"));
        }

        let content = self.children.iter().map(CellChild::render);
        match self.spec.inner_grid {
            Some(layout) => root.with_child(render_inner_grid(layout, content)),
            None => root.with_children(content),
        }
    }
}

fn clamp_span(requested: u16, tracks: u16, axis: Axis, diagnostics: &mut Vec<Diagnostic>) -> u16 {
    if requested <= tracks {
        return requested;
    }
    log::warn!(
        "grid cell span {} exceeds {} declared {:?} tracks, clamped",
        requested,
        tracks,
        axis
    );
    diagnostics.push(Diagnostic::SpanClamped {
        axis,
        requested,
        clamped: tracks,
    });
    tracks
}

fn render_inner_grid(layout: InnerGrid, content: impl Iterator<Item = RenderNode>) -> RenderNode {
    let empty = || RenderNode::div("inner-cell empty-cell");
    let mut grid = RenderNode::div(layout.class_name())
        .with_child(empty())
        .with_child(RenderNode::div("inner-cell content-cell").with_children(content));
    if layout == InnerGrid::Triple {
        grid = grid.with_child(empty());
    }
    grid
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::types::ProductContent;

    fn setup(spec: CellSpec) -> GridCell {
        GridCell::new(spec, AnimationGate::fixed(false))
    }

    #[test]
    fn test_right_direction_rests_off_canvas_then_slides_in() {
        let cell = setup(
            CellSpec::new()
                .with_hover_image("/images/a.jpg")
                .with_hover_direction(SlideDirection::Right),
        );

        let resting = cell.hover_layer().unwrap();
        assert_eq!(resting.offset, Offset { x: 100.0, y: 0.0 });

        cell.pointer_enter();
        assert_eq!(cell.hover_layer().unwrap().offset, Offset::ZERO);

        cell.pointer_leave();
        assert_eq!(cell.hover_layer().unwrap().offset.x, 100.0);
    }

    #[test]
    fn test_every_direction_rests_off_canvas() {
        for direction in SlideDirection::ALL {
            let cell = setup(
                CellSpec::new()
                    .with_hover_image("/a.jpg")
                    .with_hover_direction(direction),
            );
            let offset = cell.hover_layer().unwrap().offset;
            assert_eq!(offset.x.abs() + offset.y.abs(), 100.0, "{:?}", direction);
        }
    }

    #[test]
    fn test_focus_shows_hover_image() {
        let cell = setup(CellSpec::new().with_hover_image("/a.jpg"));
        cell.focus();
        assert_eq!(cell.hover_layer().unwrap().offset, Offset::ZERO);
        cell.blur();
        assert_eq!(cell.hover_layer().unwrap().offset, Offset { x: -100.0, y: 0.0 });
    }

    #[test]
    fn test_transition_follows_gate() {
        let closed = setup(CellSpec::new().with_hover_image("/a.jpg"));
        assert!(!closed.hover_layer().unwrap().transition_enabled);

        let open = GridCell::new(CellSpec::new().with_hover_image("/a.jpg"), AnimationGate::fixed(true));
        assert!(open.hover_layer().unwrap().transition_enabled);
        let node = open.render(Span::default());
        assert_eq!(node.style.get(vars::HOVER_TRANSITION), Some("enabled"));
    }

    #[test]
    fn test_no_hover_image_no_layer() {
        let cell = setup(CellSpec::new());
        assert!(cell.hover_layer().is_none());
        let node = cell.render(Span::default());
        assert!(!node.has_class("hover-image"));
        assert!(node.find("hover-image-layer").is_none());
        assert!(!node.style.contains(vars::HOVER_IMAGE));
    }

    #[test]
    fn test_render_span_and_hover_style() {
        let cell = setup(
            CellSpec::new()
                .with_id("evnia-7000")
                .with_col_span(2)
                .with_hover_image("/images/b.jpg")
                .with_hover_direction(SlideDirection::Bottom),
        );
        let node = cell.render(Span { rows: 1, columns: 2 });

        assert!(node.has_class("grid-cell"));
        assert!(node.has_class("slide-from-bottom"));
        assert_eq!(node.attr("id"), Some("evnia-7000"));
        assert_eq!(node.style.get(vars::GRID_ROW), Some("auto"));
        assert_eq!(node.style.get(vars::GRID_COLUMN), Some("span 2"));
        assert_eq!(node.style.get(vars::HOVER_IMAGE), Some("url('/images/b.jpg')"));
        assert_eq!(node.style.get(vars::HOVER_OFFSET_Y), Some("100%"));
        assert_eq!(node.style.get(vars::HOVER_TRANSITION), Some("disabled"));
    }

    #[test]
    fn test_inner_grid_pair_and_triple() {
        let pair = setup(
            CellSpec::new()
                .with_inner_grid(InnerGrid::Pair)
                .child(ProductContent::new("Evnia 7000 series", "For the avid gamer.")),
        )
        .render(Span::default());
        assert!(pair.has_class("cell-with-inner-grid"));
        let inner = pair.find("inner-grid").unwrap();
        assert_eq!(inner.children.len(), 2);
        assert!(inner.children[0].has_class("empty-cell"));
        assert!(inner.children[1].find("product-title").is_some());

        let triple = setup(CellSpec::new().with_inner_grid(InnerGrid::Triple)).render(Span::default());
        let inner = triple.find("inner-grid-3").unwrap();
        assert_eq!(inner.children.len(), 3);
        assert!(inner.children[2].has_class("empty-cell"));
    }

    #[test]
    fn test_nested_cell_is_dropped() {
        let cell = setup(
            CellSpec::new()
                .child("caption")
                .child(CellSpec::new())
                .child(Content::Empty),
        );
        assert_eq!(cell.children().len(), 2);
        assert_eq!(
            cell.diagnostics(),
            &[Diagnostic::DroppedChild {
                parent: "grid-cell",
                kind: "cell",
            }]
        );
        assert_eq!(cell.render(Span::default()).text_content(), "caption");
    }

    #[test]
    fn test_feature_classes_follow_flags() {
        let node = setup(
            CellSpec::new()
                .with_row_span(2)
                .with_col_span(3)
                .with_inner_grid(InnerGrid::Triple),
        )
        .render(Span { rows: 2, columns: 3 });
        assert!(node.has_class("cell-with-inner-grid"));
        assert!(node.has_class("cell-span-rows"));
        assert!(node.has_class("cell-span-columns"));
        assert!(!node.has_class("hover-image"));

        let plain = setup(CellSpec::new()).render(Span::default());
        assert_eq!(plain.classes, vec!["grid-cell".to_string()]);
    }

    #[test]
    fn test_row_span_clamp_reports_row_axis() {
        let grid = GridSpec::new(2, 3).unwrap();
        let (span, diagnostics) = setup(CellSpec::new().with_row_span(4)).span_in(&grid);
        assert_eq!(span, Span { rows: 2, columns: 1 });
        assert_eq!(
            diagnostics,
            vec![Diagnostic::SpanClamped {
                axis: Axis::Row,
                requested: 4,
                clamped: 2,
            }]
        );
    }

    #[test]
    fn test_span_clamped_to_tracks() {
        let grid = GridSpec::new(2, 3).unwrap();
        let cell = setup(CellSpec::new().with_col_span(5));
        let (span, diagnostics) = cell.span_in(&grid);
        assert_eq!(span, Span { rows: 1, columns: 3 });
        assert_eq!(
            diagnostics,
            vec![Diagnostic::SpanClamped {
                axis: Axis::Column,
                requested: 5,
                clamped: 3,
            }]
        );

        let (span, diagnostics) = setup(CellSpec::new().with_col_span(3)).span_in(&grid);
        assert_eq!(span.columns, 3);
        assert!(diagnostics.is_empty());
    }
}
