//! Animation gate - the container's "animation enabled" flag, read-only.
//!
//! One signal is written by the container's visibility detector; every cell
//! and the border overlay hold a clone of the gate and only read it. Reading
//! inside a derived subscribes that derived to the flag.

use spark_signals::{signal, Signal};

/// Read-only view of a container's animation flag.
#[derive(Clone)]
pub struct AnimationGate {
    open: Signal<bool>,
}

impl AnimationGate {
    /// Wrap a signal owned elsewhere (normally a visibility detector's).
    pub(crate) fn from_signal(open: Signal<bool>) -> Self {
        Self { open }
    }

    /// A gate fixed at the given state, for components rendered on their own.
    pub fn fixed(open: bool) -> Self {
        Self { open: signal(open) }
    }

    /// Whether animations may run. Tracked inside deriveds and effects.
    pub fn is_open(&self) -> bool {
        self.open.get()
    }
}

impl std::fmt::Debug for AnimationGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationGate")
            .field("open", &self.open.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_follows_source_signal() {
        let source = signal(false);
        let gate = AnimationGate::from_signal(source.clone());
        let copy = gate.clone();
        assert!(!gate.is_open());

        source.set(true);
        assert!(gate.is_open());
        assert!(copy.is_open());
    }

    #[test]
    fn test_fixed_gate() {
        assert!(AnimationGate::fixed(true).is_open());
        assert!(!AnimationGate::fixed(false).is_open());
    }
}
