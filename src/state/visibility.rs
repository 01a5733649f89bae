//! Visibility Detector - viewport gate for grid animations.
//!
//! Attaches to one element through an [`IntersectionApi`] and exposes an
//! "in view" signal.
//!
//! # Pattern
//!
//! - One observer per detector: attaching again releases the old one first
//! - `trigger_once` latches the signal true after the first visible report
//! - Without `trigger_once` the signal mirrors the latest report
//! - Detach (or drop) releases the observer exactly once; reports that still
//!   arrive afterwards are ignored
//! - Environment without observation: [`UnavailablePolicy`] decides, default
//!   never animate
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use showcase_grid::state::visibility::{VisibilityConfig, VisibilityDetector};
//!
//! let detector = VisibilityDetector::new(VisibilityConfig::default());
//! detector.attach(viewport.clone(), grid_element);
//!
//! let in_view = detector.signal(); // Signal<bool>, readable from deriveds
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_signals::{signal, Signal};

use super::viewport::{meets_threshold, ElementId, IntersectionApi, ObserverId};
use crate::error::{GridError, Result};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// What the signal does when the environment cannot observe intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnavailablePolicy {
    /// Stay false; animations never start.
    #[default]
    NeverAnimate,
    /// Go true at attach; animations start immediately.
    AnimateImmediately,
}

/// Detector settings.
///
/// Built through [`Default`] or the validated [`VisibilityConfig::new`]; the
/// threshold is always within `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityConfig {
    /// Fraction of the element (0..=1) that must be visible.
    threshold: f32,
    /// Latch true after the first visible report.
    trigger_once: bool,
    unavailable: UnavailablePolicy,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            trigger_once: true,
            unavailable: UnavailablePolicy::NeverAnimate,
        }
    }
}

impl VisibilityConfig {
    pub fn new(threshold: f32, trigger_once: bool) -> Result<Self> {
        let config = Self {
            threshold,
            trigger_once,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_unavailable(mut self, policy: UnavailablePolicy) -> Self {
        self.unavailable = policy;
        self
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn trigger_once(&self) -> bool {
        self.trigger_once
    }

    pub fn unavailable(&self) -> UnavailablePolicy {
        self.unavailable
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(GridError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }
}

/// Snapshot of a detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityState {
    pub in_view: bool,
    /// Set once the element was seen in trigger-once mode.
    pub triggered: bool,
}

// =============================================================================
// DETECTOR
// =============================================================================

/// State shared with the observer callback.
struct Shared {
    config: VisibilityConfig,
    in_view: Signal<bool>,
    triggered: Cell<bool>,
    /// Bumped on every attach/detach; callbacks from older attachments are
    /// ignored.
    generation: Cell<u64>,
}

impl Shared {
    fn report(&self, generation: u64, fraction: f32) {
        if generation != self.generation.get() {
            return;
        }
        if self.config.trigger_once && self.triggered.get() {
            return;
        }

        let visible = meets_threshold(fraction, self.config.threshold);
        if self.config.trigger_once && visible {
            self.triggered.set(true);
        }
        if self.config.trigger_once && !visible {
            return;
        }
        self.write(visible);
    }

    fn write(&self, value: bool) {
        if self.in_view.get() != value {
            self.in_view.set(value);
        }
    }
}

struct Attachment {
    env: Rc<dyn IntersectionApi>,
    observer: ObserverId,
    target: ElementId,
}

/// Viewport visibility detector for one element.
pub struct VisibilityDetector {
    shared: Rc<Shared>,
    attachment: RefCell<Option<Attachment>>,
}

impl VisibilityDetector {
    pub fn new(config: VisibilityConfig) -> Self {
        Self {
            shared: Rc::new(Shared {
                config,
                in_view: signal(false),
                triggered: Cell::new(false),
                generation: Cell::new(0),
            }),
            attachment: RefCell::new(None),
        }
    }

    pub fn config(&self) -> &VisibilityConfig {
        &self.shared.config
    }

    /// Start observing `target`, replacing any current observation.
    pub fn attach(&self, env: Rc<dyn IntersectionApi>, target: ElementId) {
        self.detach();

        let generation = self.shared.generation.get() + 1;
        self.shared.generation.set(generation);

        let shared = self.shared.clone();
        let callback = Rc::new(move |fraction: f32| shared.report(generation, fraction));

        match env.observe(target, self.shared.config.threshold, callback) {
            Some(observer) => {
                log::debug!("visibility: observing element {:?} as {:?}", target, observer);
                *self.attachment.borrow_mut() = Some(Attachment { env, observer, target });
            }
            None => {
                log::debug!(
                    "visibility: observation unavailable for {:?}, policy {:?}",
                    target,
                    self.shared.config.unavailable
                );
                if self.shared.config.unavailable == UnavailablePolicy::AnimateImmediately {
                    if self.shared.config.trigger_once {
                        self.shared.triggered.set(true);
                    }
                    self.shared.write(true);
                }
            }
        }
    }

    /// Release the observer. Safe to call repeatedly.
    pub fn detach(&self) {
        let Some(attachment) = self.attachment.borrow_mut().take() else {
            return;
        };
        self.shared.generation.set(self.shared.generation.get() + 1);
        attachment.env.unobserve(attachment.observer);
        log::debug!(
            "visibility: released {:?} for element {:?}",
            attachment.observer,
            attachment.target
        );
    }

    pub fn is_attached(&self) -> bool {
        self.attachment.borrow().is_some()
    }

    /// Current value (tracked when read inside a derived or effect).
    pub fn in_view(&self) -> bool {
        self.shared.in_view.get()
    }

    /// The signal itself, for read-only consumers.
    pub fn signal(&self) -> Signal<bool> {
        self.shared.in_view.clone()
    }

    pub fn state(&self) -> VisibilityState {
        VisibilityState {
            in_view: self.shared.in_view.get(),
            triggered: self.shared.triggered.get(),
        }
    }
}

impl Drop for VisibilityDetector {
    fn drop(&mut self) {
        self.detach();
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::viewport::{IntersectionCallback, NoIntersectionApi, Viewport};
    use crate::types::Bounds;

    /// Environment that hands every callback back to the test.
    #[derive(Default)]
    struct ScriptedApi {
        callbacks: RefCell<Vec<(ObserverId, IntersectionCallback)>>,
        observed: Cell<usize>,
        released: Cell<usize>,
    }

    impl ScriptedApi {
        /// Invoke every callback ever handed out, released or not.
        fn fire(&self, fraction: f32) {
            let callbacks: Vec<IntersectionCallback> =
                self.callbacks.borrow().iter().map(|(_, cb)| cb.clone()).collect();
            for cb in callbacks {
                cb(fraction);
            }
        }

        fn live(&self) -> usize {
            self.observed.get() - self.released.get()
        }
    }

    impl IntersectionApi for ScriptedApi {
        fn observe(&self, _: ElementId, _: f32, callback: IntersectionCallback) -> Option<ObserverId> {
            let id = ObserverId(self.observed.get() as u64);
            self.observed.set(self.observed.get() + 1);
            self.callbacks.borrow_mut().push((id, callback));
            Some(id)
        }

        fn unobserve(&self, _: ObserverId) {
            self.released.set(self.released.get() + 1);
        }
    }

    fn setup(trigger_once: bool) -> (VisibilityDetector, Rc<ScriptedApi>) {
        let detector = VisibilityDetector::new(VisibilityConfig::new(0.5, trigger_once).unwrap());
        let api = Rc::new(ScriptedApi::default());
        detector.attach(api.clone(), ElementId(0));
        (detector, api)
    }

    #[test]
    fn test_defaults_false_before_attach() {
        let detector = VisibilityDetector::new(VisibilityConfig::default());
        assert!(!detector.in_view());
        assert!(!detector.is_attached());
        assert_eq!(detector.state(), VisibilityState::default());
    }

    #[test]
    fn test_trigger_once_latches() {
        let (detector, api) = setup(true);

        api.fire(0.2);
        assert!(!detector.in_view());

        api.fire(0.6);
        assert!(detector.in_view());
        assert!(detector.state().triggered);

        for _ in 0..10 {
            api.fire(0.0);
        }
        assert!(detector.in_view());
    }

    #[test]
    fn test_continuous_mirrors_latest() {
        let (detector, api) = setup(false);

        for (fraction, expect) in [(0.6, true), (0.1, false), (0.5, true), (0.0, false)] {
            api.fire(fraction);
            assert_eq!(detector.in_view(), expect, "fraction {fraction}");
        }
        assert!(!detector.state().triggered);
    }

    #[test]
    fn test_reattach_keeps_single_observer() {
        let (detector, api) = setup(false);
        for _ in 0..5 {
            detector.attach(api.clone(), ElementId(0));
        }
        assert_eq!(api.live(), 1);
    }

    #[test]
    fn test_detach_releases_once_and_ignores_late_reports() {
        let (detector, api) = setup(false);

        detector.detach();
        detector.detach();
        assert_eq!(api.released.get(), 1);
        assert!(!detector.is_attached());

        // Stale callback still held by the environment
        api.fire(1.0);
        assert!(!detector.in_view());
    }

    #[test]
    fn test_drop_releases_observer() {
        let (detector, api) = setup(true);
        drop(detector);
        assert_eq!(api.live(), 0);
    }

    #[test]
    fn test_unavailable_never_animates_by_default() {
        let detector = VisibilityDetector::new(VisibilityConfig::default());
        detector.attach(Rc::new(NoIntersectionApi), ElementId(0));
        assert!(!detector.in_view());
        assert!(!detector.is_attached());
    }

    #[test]
    fn test_unavailable_animate_immediately() {
        let config = VisibilityConfig::default().with_unavailable(UnavailablePolicy::AnimateImmediately);
        let detector = VisibilityDetector::new(config);
        detector.attach(Rc::new(NoIntersectionApi), ElementId(0));
        assert!(detector.in_view());
    }

    #[test]
    fn test_with_viewport_scrolling() {
        let viewport = Rc::new(Viewport::new(100.0, 100.0));
        let el = viewport.place(Bounds::new(0.0, 300.0, 100.0, 100.0));

        let detector = VisibilityDetector::new(VisibilityConfig::new(0.5, true).unwrap());
        detector.attach(viewport.clone(), el);
        assert!(!detector.in_view());

        viewport.scroll_to(0.0, 260.0);
        assert!(detector.in_view());

        viewport.scroll_to(0.0, 0.0);
        assert!(detector.in_view());
        assert_eq!(viewport.observer_count(), 1);
    }

    #[test]
    fn test_threshold_validation() {
        assert!(VisibilityConfig::new(1.5, true).is_err());
        assert!(VisibilityConfig::new(-0.1, true).is_err());
        assert!(VisibilityConfig::new(f32::NAN, true).is_err());
        assert!(VisibilityConfig::new(0.0, false).is_ok());
    }
}
