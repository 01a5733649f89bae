//! Border Overlay - animated grid lines drawn over a container.
//!
//! One element per [`GridLine`], positioned at its offset along the relevant
//! axis and carrying the line's draw and fade delays. Nothing plays until
//! the container's animation gate opens: while closed, every line is present
//! but marked `paused`.
//!
//! The overlay keeps no state of its own. Its frame is a derived over the
//! grid spec signal (lines recompute when rows/columns change) and the gate.

use spark_signals::Signal;

use crate::layout::{GridLine, GridLines, StaggerConfig};
use crate::pipeline::{create_overlay_derived, DerivedFrame};
use crate::renderer::RenderNode;
use crate::state::AnimationGate;
use crate::style::{self, vars, StyleVars};
use crate::types::{GridSpec, Orientation};

// =============================================================================
// Overlay Frame
// =============================================================================

/// Everything the overlay renders at one moment.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayFrame {
    pub lines: GridLines,
    /// Whether line animations are running (gate open).
    pub running: bool,
}

impl OverlayFrame {
    /// Number of lines whose animation is running.
    pub fn running_count(&self) -> usize {
        if self.running { self.lines.len() } else { 0 }
    }

    pub fn render(&self) -> RenderNode {
        let mut root = RenderNode::div("grid-border-overlay");
        if self.running {
            root = root.with_classes("animate");
        }
        root.with_children(self.lines.iter().map(|line| render_line(line, self.running)))
    }
}

fn render_line(line: &GridLine, running: bool) -> RenderNode {
    let (class, axis) = match line.orientation {
        Orientation::Horizontal => ("border-line horizontal-line", vars::TOP),
        Orientation::Vertical => ("border-line vertical-line", vars::LEFT),
    };

    let style = StyleVars::new()
        .with(axis, style::percent(line.offset_percent))
        .with(vars::DRAW_DELAY, style::millis(line.draw_delay))
        .with(vars::FADE_DELAY, style::millis(line.fade_delay))
        .with(vars::ANIMATION_PLAY_STATE, style::play_state(running));

    RenderNode::div(class)
        .with_style(style)
        .with_attr("data-line", line.key())
}

// =============================================================================
// Border Overlay Component
// =============================================================================

/// Overlay bound to a grid spec signal and an animation gate.
pub struct BorderOverlay {
    frame: DerivedFrame<OverlayFrame>,
}

impl BorderOverlay {
    pub fn new(spec: Signal<GridSpec>, stagger: StaggerConfig, gate: AnimationGate) -> Self {
        Self {
            frame: create_overlay_derived(spec, stagger, gate),
        }
    }

    /// Current frame (recomputed only when spec or gate changed).
    pub fn frame(&self) -> OverlayFrame {
        self.frame.get()
    }

    pub fn lines(&self) -> GridLines {
        self.frame.get().lines
    }

    pub fn render(&self) -> RenderNode {
        self.frame.get().render()
    }
}

// =============================================================================
// Tests
// =============================================================================
