//! Hover state for a single grid cell.
//!
//! A cell counts as hovered while the pointer is over it or it holds focus.
//! Both sources are separate signals so a pointer leaving a focused cell
//! keeps the hover image in place.

use spark_signals::{signal, Signal};

/// Pointer + focus state of one cell.
#[derive(Clone)]
pub struct HoverState {
    pointer: Signal<bool>,
    focus: Signal<bool>,
}

impl Default for HoverState {
    fn default() -> Self {
        Self::new()
    }
}

impl HoverState {
    pub fn new() -> Self {
        Self {
            pointer: signal(false),
            focus: signal(false),
        }
    }

    pub fn pointer_enter(&self) {
        if !self.pointer.get() {
            self.pointer.set(true);
        }
    }

    pub fn pointer_leave(&self) {
        if self.pointer.get() {
            self.pointer.set(false);
        }
    }

    pub fn focus(&self) {
        if !self.focus.get() {
            self.focus.set(true);
        }
    }

    pub fn blur(&self) {
        if self.focus.get() {
            self.focus.set(false);
        }
    }

    /// True while pointer-hovered or focused. Reading tracks both signals.
    pub fn is_active(&self) -> bool {
        // Read both so a derived depends on each source.
        let pointer = self.pointer.get();
        let focus = self.focus.get();
        pointer || focus
    }

    pub fn is_pointer_over(&self) -> bool {
        self.pointer.get()
    }

    pub fn is_focused(&self) -> bool {
        self.focus.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_enter_leave() {
        let hover = HoverState::new();
        assert!(!hover.is_active());

        hover.pointer_enter();
        assert!(hover.is_active());
        assert!(hover.is_pointer_over());

        hover.pointer_leave();
        assert!(!hover.is_active());
    }

    #[test]
    fn test_focus_counts_as_hover() {
        let hover = HoverState::new();
        hover.focus();
        assert!(hover.is_active());

        // Pointer leaving doesn't clear focus-driven hover
        hover.pointer_enter();
        hover.pointer_leave();
        assert!(hover.is_active());

        hover.blur();
        assert!(!hover.is_active());
    }

    #[test]
    fn test_clones_share_state() {
        let hover = HoverState::new();
        let other = hover.clone();
        other.pointer_enter();
        assert!(hover.is_active());
    }
}
