//! Viewport - intersection observation environment.
//!
//! [`IntersectionApi`] is the seam between the visibility detector and
//! whatever reports element visibility (a browser's intersection observer, a
//! test double, or the in-crate [`Viewport`]).
//!
//! [`Viewport`] keeps element bounds and a scroll position, computes each
//! observed element's visible fraction, and calls back when an observer's
//! threshold is crossed, plus once right after `observe`.
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use showcase_grid::state::viewport::Viewport;
//! use showcase_grid::Bounds;
//!
//! let viewport = Rc::new(Viewport::new(1280.0, 720.0));
//! let grid = viewport.place(Bounds::new(0.0, 1500.0, 1200.0, 800.0));
//!
//! viewport.scroll_to(0.0, 1200.0); // grid partly visible, observers notified
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::types::Bounds;

// =============================================================================
// TYPES
// =============================================================================

/// Handle to an element known to the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u32);

/// Handle to one registered observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub u64);

/// Called with the target's visible fraction (0..=1).
pub type IntersectionCallback = Rc<dyn Fn(f32)>;

/// Whether a visible fraction satisfies a threshold.
///
/// A zero threshold means "any pixel visible", so it needs a strictly positive
/// fraction.
pub fn meets_threshold(fraction: f32, threshold: f32) -> bool {
    if threshold <= 0.0 {
        fraction > 0.0
    } else {
        fraction >= threshold
    }
}

// =============================================================================
// INTERSECTION API
// =============================================================================

/// Environment capable of reporting element visibility.
pub trait IntersectionApi {
    /// Start observing `target`. Returns `None` when observation is not
    /// available in this environment.
    fn observe(
        &self,
        target: ElementId,
        threshold: f32,
        callback: IntersectionCallback,
    ) -> Option<ObserverId>;

    /// Stop an observer. Unknown ids are ignored.
    fn unobserve(&self, id: ObserverId);
}

/// Environment without intersection observation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIntersectionApi;

impl IntersectionApi for NoIntersectionApi {
    fn observe(&self, _: ElementId, _: f32, _: IntersectionCallback) -> Option<ObserverId> {
        None
    }

    fn unobserve(&self, _: ObserverId) {}
}

// =============================================================================
// VIEWPORT
// =============================================================================

struct Observer {
    target: ElementId,
    threshold: f32,
    callback: IntersectionCallback,
    /// Threshold state at the last notification.
    last: bool,
}

#[derive(Default)]
struct ViewportState {
    area: Bounds,
    elements: HashMap<ElementId, Bounds>,
    observers: HashMap<ObserverId, Observer>,
    next_element: u32,
    next_observer: u64,
}

impl ViewportState {
    fn fraction(&self, target: ElementId) -> f32 {
        let Some(bounds) = self.elements.get(&target) else {
            return 0.0;
        };
        let area = bounds.area();
        if area <= 0.0 {
            // Degenerate element: visible iff its origin is inside
            let inside = bounds.x >= self.area.x
                && bounds.x <= self.area.right()
                && bounds.y >= self.area.y
                && bounds.y <= self.area.bottom();
            return if inside { 1.0 } else { 0.0 };
        }
        (bounds.intersection_area(&self.area) / area).clamp(0.0, 1.0)
    }
}

/// Scrollable viewport over positioned elements.
pub struct Viewport {
    state: RefCell<ViewportState>,
}

impl Viewport {
    /// Viewport of the given size, scrolled to the origin.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            state: RefCell::new(ViewportState {
                area: Bounds::new(0.0, 0.0, width, height),
                ..Default::default()
            }),
        }
    }

    /// Register an element at page coordinates.
    pub fn place(&self, bounds: Bounds) -> ElementId {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = ElementId(state.next_element);
            state.next_element += 1;
            state.elements.insert(id, bounds);
            id
        };
        self.notify();
        id
    }

    /// Move or resize an element.
    pub fn set_bounds(&self, element: ElementId, bounds: Bounds) {
        self.state.borrow_mut().elements.insert(element, bounds);
        self.notify();
    }

    /// Remove an element. Its observers stay registered and see 0.
    pub fn remove(&self, element: ElementId) {
        self.state.borrow_mut().elements.remove(&element);
        self.notify();
    }

    pub fn scroll_to(&self, x: f32, y: f32) {
        {
            let mut state = self.state.borrow_mut();
            state.area.x = x;
            state.area.y = y;
        }
        self.notify();
    }

    pub fn resize(&self, width: f32, height: f32) {
        {
            let mut state = self.state.borrow_mut();
            state.area.width = width;
            state.area.height = height;
        }
        self.notify();
    }

    /// Currently visible area in page coordinates.
    pub fn area(&self) -> Bounds {
        self.state.borrow().area
    }

    /// Visible fraction of an element (0 if unknown).
    pub fn visible_fraction(&self, element: ElementId) -> f32 {
        self.state.borrow().fraction(element)
    }

    /// Number of live observers.
    pub fn observer_count(&self) -> usize {
        self.state.borrow().observers.len()
    }

    /// Re-evaluate every observer and call back those whose threshold state
    /// changed. Callbacks run after the internal borrow is released, so they
    /// may observe/unobserve freely.
    fn notify(&self) {
        let pending: Vec<(IntersectionCallback, f32)> = {
            let mut state = self.state.borrow_mut();
            let fractions: Vec<(ObserverId, f32)> = state
                .observers
                .iter()
                .map(|(&id, obs)| (id, state.fraction(obs.target)))
                .collect();

            let mut pending = Vec::new();
            for (id, fraction) in fractions {
                if let Some(obs) = state.observers.get_mut(&id) {
                    let now = meets_threshold(fraction, obs.threshold);
                    if now != obs.last {
                        obs.last = now;
                        pending.push((obs.callback.clone(), fraction));
                    }
                }
            }
            pending
        };

        for (callback, fraction) in pending {
            callback(fraction);
        }
    }
}

impl IntersectionApi for Viewport {
    fn observe(
        &self,
        target: ElementId,
        threshold: f32,
        callback: IntersectionCallback,
    ) -> Option<ObserverId> {
        let (id, fraction) = {
            let mut state = self.state.borrow_mut();
            let id = ObserverId(state.next_observer);
            state.next_observer += 1;
            let fraction = state.fraction(target);
            state.observers.insert(
                id,
                Observer {
                    target,
                    threshold,
                    callback: callback.clone(),
                    last: meets_threshold(fraction, threshold),
                },
            );
            (id, fraction)
        };

        // Initial report, like a browser observer's first entry
        callback(fraction);
        Some(id)
    }

    fn unobserve(&self, id: ObserverId) {
        self.state.borrow_mut().observers.remove(&id);
    }
}

// =============================================================================
// TESTS
// =============================================================================
