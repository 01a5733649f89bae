//! State Module - runtime state behind the animations
//!
//! - **Viewport** - intersection observation environment and the in-crate
//!   scrollable viewport
//! - **Visibility** - detector that turns intersection reports into an
//!   "in view" signal
//! - **Gate** - read-only animation flag shared by a container's descendants
//! - **Hover** - pointer/focus state driving a cell's hover image

pub mod gate;
pub mod hover;
pub mod viewport;
pub mod visibility;

pub use gate::AnimationGate;
pub use hover::HoverState;
pub use viewport::{
    meets_threshold, ElementId, IntersectionApi, IntersectionCallback, NoIntersectionApi,
    ObserverId, Viewport,
};
pub use visibility::{UnavailablePolicy, VisibilityConfig, VisibilityDetector, VisibilityState};
