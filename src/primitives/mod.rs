//! Grid Primitives - the building blocks of a showcase grid.
//!
//! - [`grid_container`] - track grid, visibility detector, animation gate
//! - [`grid_cell`] - span, hover-slide image, inner grid, validated content
//! - [`border_overlay`] - staggered border lines over the container
//! - [`content`] - product cards, cell bodies, empty placeholders
//!
//! # Composition
//!
//! Pages describe a grid with plain values ([`CellSpec`], [`Content`],
//! [`Node`]) and hand them to [`GridContainer`]. The container validates the
//! tree once and owns everything reactive from then on:
//!
//! ```ignore
//! let container = GridContainer::new(
//!     GridSpec::new(1, 2)?,
//!     vec![
//!         CellSpec::new().child(CellBody::new("Left Section", "Text content here")).into(),
//!         CellSpec::new().child(Content::Empty).into(),
//!     ],
//! );
//! ```

pub mod border_overlay;
pub mod content;
pub mod grid_cell;
pub mod grid_container;
mod types;

pub use border_overlay::{BorderOverlay, OverlayFrame};
pub use content::{arrow_icon, empty_cell};
pub use grid_cell::{CellChild, GridCell, HoverLayer};
pub use grid_container::{GridContainer, GridContainerBuilder};
pub use types::*;
