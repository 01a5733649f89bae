//! Overlay Derived - reactive line computation.
//!
//! Two layers:
//! - the **lines** derived reads only the spec signal, so lines are
//!   regenerated when rows/columns change and never on a gate flip
//! - the **frame** derived combines those lines with the animation gate

use spark_signals::{derived, Signal};

use crate::layout::{generate_grid_lines, GridLines, StaggerConfig};
use crate::primitives::OverlayFrame;
use crate::state::AnimationGate;
use crate::types::GridSpec;

use super::DerivedFrame;

/// Lines for the current spec.
pub fn create_lines_derived(spec: Signal<GridSpec>, stagger: StaggerConfig) -> DerivedFrame<GridLines> {
    let lines = derived(move || {
        // Read spec (creates reactive dependency)
        let spec = spec.get();
        generate_grid_lines(spec.rows(), spec.columns(), &stagger)
    });
    DerivedFrame::new(move || lines.get())
}

/// Overlay frame: current lines plus whether they are running.
pub fn create_overlay_derived(
    spec: Signal<GridSpec>,
    stagger: StaggerConfig,
    gate: AnimationGate,
) -> DerivedFrame<OverlayFrame> {
    let lines = create_lines_derived(spec, stagger);

    let frame = derived(move || OverlayFrame {
        lines: lines.get(),
        running: gate.is_open(),
    });
    DerivedFrame::new(move || frame.get())
}
