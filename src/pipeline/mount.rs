//! Mount API - attaching a grid to its environment.
//!
//! Mounting starts the container's visibility detector on the element the
//! host placed the grid at. Optionally a render effect is installed that
//! hands every new grid frame to the host.
//!
//! # Example
//!
//! ```ignore
//! let viewport = Rc::new(Viewport::new(1280.0, 720.0));
//! let element = viewport.place(Bounds::new(0.0, 1500.0, 1200.0, 800.0));
//!
//! let handle = container.mount_with_render(viewport.clone(), element, |frame| {
//!     println!("{}", to_markup(frame));
//! });
//!
//! viewport.scroll_to(0.0, 1200.0); // gate opens, a new frame is rendered
//! handle.unmount();                // observer released, effect stopped
//! ```

use std::rc::Rc;

use spark_signals::{derived, effect};

use crate::primitives::{Cleanup, GridContainer};
use crate::renderer::RenderNode;
use crate::state::{ElementId, IntersectionApi, VisibilityDetector};

use super::DerivedFrame;

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by mount that allows unmounting.
///
/// Holds:
/// - the detector whose observer must be released
/// - the render effect stop function, when a render callback was given
///
/// Dropping the handle unmounts as well.
pub struct MountHandle {
    detector: Option<Rc<VisibilityDetector>>,
    stop_effect: Option<Cleanup>,
}

impl MountHandle {
    /// Release the observer and stop the render effect.
    pub fn unmount(mut self) {
        self.release();
    }

    /// Whether the observer is still attached.
    pub fn is_mounted(&self) -> bool {
        self.detector.as_ref().is_some_and(|d| d.is_attached())
    }

    fn release(&mut self) {
        if let Some(stop) = self.stop_effect.take() {
            stop();
        }
        if let Some(detector) = self.detector.take() {
            detector.detach();
        }
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        self.release();
    }
}

// =============================================================================
// Mount Functions
// =============================================================================

/// Start observing `element` for `container`.
pub fn mount(container: &GridContainer, env: Rc<dyn IntersectionApi>, element: ElementId) -> MountHandle {
    let detector = container.detector();
    detector.attach(env, element);
    log::debug!("mount: grid attached to element {:?}", element);

    MountHandle {
        detector: Some(detector),
        stop_effect: None,
    }
}

/// Mount and render: `on_frame` receives the current frame now and again
/// after every change to the spec, the gate or any cell's hover state.
pub fn mount_with_render(
    container: &GridContainer,
    env: Rc<dyn IntersectionApi>,
    element: ElementId,
    mut on_frame: impl FnMut(&RenderNode) + 'static,
) -> MountHandle {
    let grid = create_grid_derived(container.clone());

    // The ONE render effect
    let stop_fn = effect(move || {
        // Read from derived (creates dependency)
        let frame = grid.get();
        on_frame(&frame);
    });

    let mut handle = mount(container, env, element);
    handle.stop_effect = Some(Box::new(stop_fn));
    handle
}

/// Whole-grid frame, recomputed when anything the render reads changes.
pub fn create_grid_derived(container: GridContainer) -> DerivedFrame<RenderNode> {
    let frame = derived(move || container.render());
    DerivedFrame::new(move || frame.get())
}

// =============================================================================
// Tests
// =============================================================================
