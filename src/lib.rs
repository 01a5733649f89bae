//! # showcase-grid
//!
//! Animated product-showcase grids.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity
//! and [taffy](https://github.com/DioxusLabs/taffy) for CSS-grid placement.
//!
//! ## Architecture
//!
//! A grid is an N×M track layout of cells with an overlay of border lines that
//! draw in with a stagger once the grid scrolls into view. Cells may span
//! tracks, split into an inner grid, and slide a hover image in from one side.
//!
//! The rendering pipeline is purely derived-based:
//! ```text
//! GridSpec + Nodes → GridContainer → (linesDerived, gate, hover) → gridDerived → render effect
//! ```
//!
//! The only writer of shared state is the container's visibility detector.
//! Everything else reads the animation gate.
//!
//! ## Modules
//!
//! - [`types`] - Core types (GridSpec, SlideDirection, Bounds, Diagnostic)
//! - [`layout`] - Border line generation and taffy track placement
//! - [`state`] - Visibility detection, viewport, hover, animation gate
//! - [`primitives`] - Grid container, cells, overlay, content leaves
//! - [`pipeline`] - Reactive deriveds and mount lifecycle
//! - [`renderer`] - Render tree and markup output
//! - [`style`] - Style variable names and value formatting

pub mod error;
pub mod layout;
pub mod pipeline;
pub mod primitives;
pub mod renderer;
pub mod state;
pub mod style;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::{GridError, Result};

pub use layout::{
    compute_grid_layout, generate_grid_lines, CellPlacement, GridLayout, GridLine, GridLines, Span,
    StaggerConfig, StaggerScheme,
};

pub use pipeline::{create_lines_derived, create_overlay_derived, DerivedFrame, MountHandle};

pub use primitives::{
    BorderOverlay, CellBody, CellChild, CellSpec, Cleanup, Content, GridCell, GridContainer,
    GridContainerBuilder, HoverLayer, Node, OverlayFrame, ProductContent,
};

pub use renderer::{to_markup, RenderNode};

pub use state::{
    AnimationGate, ElementId, HoverState, IntersectionApi, NoIntersectionApi, UnavailablePolicy,
    Viewport, VisibilityConfig, VisibilityDetector, VisibilityState,
};

pub use style::StyleVars;
