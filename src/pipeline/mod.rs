//! Reactive Pipeline
//!
//! Connects the grid's signals to what the host renders.
//!
//! # Pipeline Architecture
//!
//! ```text
//! GridSpec signal ─┬→ linesDerived ─→ overlayDerived ─┐
//! visibility gate ─┘                                  ├→ gridDerived → render effect
//! cell hover signals ─────────────────────────────────┘
//! ```
//!
//! ## Key Design Principles
//!
//! - **Pure Deriveds**: line generation and frame building have no side effects
//! - **Side Effects in Effect**: only the mount's render effect hands frames out
//! - **Single Writer**: the gate is written by the container's detector alone

pub mod mount;
pub mod overlay_derived;

pub use mount::{create_grid_derived, MountHandle};
pub use overlay_derived::{create_lines_derived, create_overlay_derived};

/// Read handle over a derived value.
///
/// Each `get()` returns the derived's current value, recomputing it first if
/// one of its dependencies changed. Reading inside another derived or an
/// effect subscribes to it.
pub struct DerivedFrame<T> {
    read: Box<dyn Fn() -> T>,
}

impl<T> DerivedFrame<T> {
    pub fn new(read: impl Fn() -> T + 'static) -> Self {
        Self { read: Box::new(read) }
    }

    pub fn get(&self) -> T {
        (self.read)()
    }
}
