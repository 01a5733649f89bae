//! Grid Container - arranges cells on an N×M track grid.
//!
//! The container is the composition root of one showcase grid:
//!
//! - equal-fraction tracks (`rows` × `columns`) with a uniform pixel gap
//! - the `columns / rows` aspect ratio, exposed numerically and as a style
//!   variable
//! - one [`VisibilityDetector`] keyed to its root element, published to every
//!   cell and the border overlay as a read-only [`AnimationGate`]
//!
//! Only [`Node::Cell`] children take part. Anything else is dropped when the
//! container is built, logged with `log::warn!` and kept in
//! [`GridContainer::diagnostics`]. Spans larger than the declared tracks are
//! clamped the same way.
//!
//! # Rendered structure
//!
//! ```text
//! div.grid-display
//! └─ div.grid-wrapper[.in-view]      --grid-aspect-ratio, --grid-animation-state
//!    ├─ div.grid-container           grid-template-rows/columns, gap
//!    │  └─ div.grid-cell ...
//!    └─ div.grid-border-overlay
//! ```
//!
//! # Example
//!
//! ```ignore
//! let container = GridContainer::builder(GridSpec::new(2, 3)?)
//!     .class_name("showcase")
//!     .child(CellSpec::new().child(ProductContent::new("Evnia 3000 series", "For the casual gamer.")))
//!     .child(CellSpec::new().with_col_span(2))
//!     .child(CellSpec::new().with_col_span(3))
//!     .build();
//!
//! let handle = container.mount(viewport.clone(), element);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::{signal, Signal};

use crate::error::Result;
use crate::layout::{compute_grid_layout, GridLayout, Span, StaggerConfig};
use crate::pipeline::{mount, MountHandle};
use crate::renderer::RenderNode;
use crate::state::{
    AnimationGate, ElementId, IntersectionApi, VisibilityConfig, VisibilityDetector, VisibilityState,
};
use crate::style::{self, vars, StyleVars};
use crate::types::{Diagnostic, GridSpec};

use super::border_overlay::BorderOverlay;
use super::grid_cell::GridCell;
use super::types::Node;

// =============================================================================
// Builder
// =============================================================================

/// Collects container options before the cells are validated.
pub struct GridContainerBuilder {
    spec: GridSpec,
    class_name: String,
    stagger: StaggerConfig,
    visibility: VisibilityConfig,
    children: Vec<Node>,
}

impl GridContainerBuilder {
    /// Extra classes on the wrapper.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn stagger(mut self, stagger: StaggerConfig) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn visibility(mut self, visibility: VisibilityConfig) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn build(self) -> GridContainer {
        let detector = Rc::new(VisibilityDetector::new(self.visibility));
        let gate = AnimationGate::from_signal(detector.signal());
        let spec = signal(self.spec);

        let mut structural = Vec::new();
        let mut cells = Vec::new();
        for node in self.children {
            match node {
                Node::Cell(cell) => {
                    let cell = GridCell::new(cell, gate.clone());
                    structural.extend_from_slice(cell.diagnostics());
                    cells.push(cell);
                }
                other => {
                    log::warn!(
                        "grid container dropped a {} child: only grid cells are accepted",
                        other.kind()
                    );
                    structural.push(Diagnostic::DroppedChild {
                        parent: "grid-container",
                        kind: other.kind(),
                    });
                }
            }
        }

        let overlay = BorderOverlay::new(spec.clone(), self.stagger, gate.clone());
        let (spans, clamped) = clamp_spans(&cells, &self.spec);

        GridContainer {
            inner: Rc::new(ContainerInner {
                spec,
                class_name: self.class_name,
                cells,
                spans: RefCell::new(spans),
                structural,
                clamped: RefCell::new(clamped),
                detector,
                gate,
                overlay,
            }),
        }
    }
}

fn clamp_spans(cells: &[GridCell], spec: &GridSpec) -> (Vec<Span>, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();
    let spans = cells
        .iter()
        .map(|cell| {
            let (span, found) = cell.span_in(spec);
            diagnostics.extend(found);
            span
        })
        .collect();
    (spans, diagnostics)
}

// =============================================================================
// Grid Container
// =============================================================================

struct ContainerInner {
    spec: Signal<GridSpec>,
    class_name: String,
    cells: Vec<GridCell>,
    /// Clamped spans for the current spec, one per cell.
    spans: RefCell<Vec<Span>>,
    /// Diagnostics from building the tree (dropped children).
    structural: Vec<Diagnostic>,
    /// Span clamps against the current spec.
    clamped: RefCell<Vec<Diagnostic>>,
    detector: Rc<VisibilityDetector>,
    gate: AnimationGate,
    overlay: BorderOverlay,
}

/// A showcase grid. Clones share the same cells, detector and gate.
#[derive(Clone)]
pub struct GridContainer {
    inner: Rc<ContainerInner>,
}

impl GridContainer {
    /// Container with default stagger and visibility settings.
    pub fn new(spec: GridSpec, children: impl IntoIterator<Item = Node>) -> Self {
        Self::builder(spec).children(children).build()
    }

    pub fn builder(spec: GridSpec) -> GridContainerBuilder {
        GridContainerBuilder {
            spec,
            class_name: String::new(),
            stagger: StaggerConfig::default(),
            visibility: VisibilityConfig::default(),
            children: Vec::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn spec(&self) -> GridSpec {
        self.inner.spec.get()
    }

    /// `columns / rows`.
    pub fn aspect_ratio(&self) -> f32 {
        self.inner.spec.get().aspect_ratio()
    }

    /// `"<columns> / <rows>"`.
    pub fn aspect_ratio_css(&self) -> String {
        self.inner.spec.get().aspect_ratio_css()
    }

    /// Read-only animation flag shared with the cells and overlay.
    pub fn gate(&self) -> AnimationGate {
        self.inner.gate.clone()
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.inner.cells
    }

    pub fn overlay(&self) -> &BorderOverlay {
        &self.inner.overlay
    }

    /// Clamped span of every cell against the current spec.
    pub fn spans(&self) -> Vec<Span> {
        self.inner.spans.borrow().clone()
    }

    /// Dropped children and span clamps, in discovery order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut all = self.inner.structural.clone();
        all.extend(self.inner.clamped.borrow().iter().cloned());
        all
    }

    pub fn visibility_state(&self) -> VisibilityState {
        self.inner.detector.state()
    }

    pub(crate) fn detector(&self) -> Rc<VisibilityDetector> {
        self.inner.detector.clone()
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Replace the spec. Spans are re-clamped; overlay lines recompute.
    pub fn set_spec(&self, spec: GridSpec) {
        let (spans, clamped) = clamp_spans(&self.inner.cells, &spec);
        *self.inner.spans.borrow_mut() = spans;
        *self.inner.clamped.borrow_mut() = clamped;
        self.inner.spec.set(spec);
    }

    // -------------------------------------------------------------------------
    // Layout
    // -------------------------------------------------------------------------

    /// Pixel geometry of every cell at the given container width.
    pub fn layout(&self, width: f32) -> Result<GridLayout> {
        let spec = self.inner.spec.get();
        let spans = self.inner.spans.borrow();
        compute_grid_layout(&spec, &spans, width)
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Start the visibility detector on `element`.
    pub fn mount(&self, env: Rc<dyn IntersectionApi>, element: ElementId) -> MountHandle {
        mount::mount(self, env, element)
    }

    /// Mount and call `on_frame` with every new rendered frame.
    pub fn mount_with_render(
        &self,
        env: Rc<dyn IntersectionApi>,
        element: ElementId,
        on_frame: impl FnMut(&RenderNode) + 'static,
    ) -> MountHandle {
        mount::mount_with_render(self, env, element, on_frame)
    }

    // -------------------------------------------------------------------------
    // Render
    // -------------------------------------------------------------------------

    /// Render the whole grid. Reads the spec, gate and hover signals.
    pub fn render(&self) -> RenderNode {
        let inner = &self.inner;
        let spec = inner.spec.get();
        let running = inner.gate.is_open();

        let wrapper_style = StyleVars::new()
            .with(vars::GRID_ASPECT_RATIO, spec.aspect_ratio_css())
            .with(vars::GRID_ANIMATION_STATE, style::play_state(running));

        let container_style = StyleVars::new()
            .with(vars::GRID_TEMPLATE_ROWS, style::repeat_fr(spec.rows()))
            .with(vars::GRID_TEMPLATE_COLUMNS, style::repeat_fr(spec.columns()))
            .with(vars::GAP, style::px(spec.gap()))
            .with(vars::GRID_ASPECT_RATIO, spec.aspect_ratio_css());

        let spans = inner.spans.borrow();
        let cells = inner
            .cells
            .iter()
            .zip(spans.iter())
            .map(|(cell, span)| cell.render(*span));

        let mut wrapper = RenderNode::div("grid-wrapper").with_classes(&inner.class_name);
        if running {
            wrapper = wrapper.with_classes("in-view");
        }

        let wrapper = wrapper
            .with_style(wrapper_style)
            .with_child(
                RenderNode::div("grid-container")
                    .with_style(container_style)
                    .with_children(cells),
            )
            .with_child(inner.overlay.render());

        RenderNode::div("grid-display").with_child(wrapper)
    }
}

// =============================================================================
// Tests
// =============================================================================
