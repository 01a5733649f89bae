//! End-to-end behaviour of a showcase grid: placement, overlay gating,
//! child validation and mount lifecycle.

use std::collections::HashSet;
use std::rc::Rc;

use showcase_grid::{
    Bounds, CellSpec, Diagnostic, GridContainer, GridSpec, Node, NoIntersectionApi, ProductContent,
    SlideDirection, UnavailablePolicy, Viewport, VisibilityConfig,
};
use showcase_grid::style::vars;

fn showcase_cells() -> Vec<Node> {
    vec![
        CellSpec::new()
            .with_hover_image("/images/ai-generated-8020817_1280.jpg")
            .with_hover_direction(SlideDirection::Left)
            .child(ProductContent::new("Evnia 3000 series", "For the casual gamer."))
            .into(),
        CellSpec::new()
            .with_col_span(2)
            .with_hover_image("/images/istockphoto-1560833158-2048x2048.jpg")
            .with_hover_direction(SlideDirection::Right)
            .child(ProductContent::new("Evnia 7000 series", "For the avid gamer."))
            .into(),
        CellSpec::new()
            .with_col_span(3)
            .child(ProductContent::new("Evnia 5000 series", "For the competitive gamer."))
            .into(),
    ]
}

fn setup() -> GridContainer {
    GridContainer::new(GridSpec::new(2, 3).unwrap(), showcase_cells())
}

#[test]
fn spans_tile_every_slot_without_overlap() {
    let container = setup();
    let layout = container.layout(600.0).unwrap();

    let mut covered = HashSet::new();
    for cell in &layout.cells {
        for slot in cell.slots() {
            assert!(covered.insert(slot), "slot {:?} covered twice", slot);
        }
    }
    assert_eq!(covered.len(), 6);

    let starts: Vec<(u16, u16)> = layout.cells.iter().map(|c| (c.row, c.column)).collect();
    assert_eq!(starts, vec![(0, 0), (0, 1), (1, 0)]);
    assert_eq!(layout.cells[1].bounds, Bounds::new(200.0, 0.0, 400.0, 200.0));
}

#[test]
fn never_visible_grid_keeps_all_lines_paused() {
    let container = setup();
    let viewport = Rc::new(Viewport::new(1280.0, 720.0));
    let element = viewport.place(Bounds::new(0.0, 5000.0, 1200.0, 800.0));
    let _handle = container.mount(viewport.clone(), element);

    viewport.scroll_to(0.0, 1000.0);

    let frame = container.overlay().frame();
    assert_eq!(frame.lines.len(), 3 + 4);
    assert_eq!(frame.running_count(), 0);

    let node = container.render();
    let lines = node.find_all("border-line");
    assert_eq!(lines.len(), 7);
    assert!(lines
        .iter()
        .all(|l| l.style.get(vars::ANIMATION_PLAY_STATE) == Some("paused")));
}

#[test]
fn invalid_child_is_excluded_without_shifting_placement() {
    let mut with_stray = showcase_cells();
    with_stray.insert(1, Node::from("not a cell"));
    let container = GridContainer::new(GridSpec::new(2, 3).unwrap(), with_stray);

    assert_eq!(
        container.diagnostics(),
        vec![Diagnostic::DroppedChild {
            parent: "grid-container",
            kind: "text",
        }]
    );
    assert_eq!(
        container.layout(600.0).unwrap(),
        setup().layout(600.0).unwrap()
    );
    assert!(!container.render().text_content().contains("not a cell"));
}

#[test]
fn scrolling_into_view_unlocks_overlay_and_cells_together() {
    let container = setup();
    let viewport = Rc::new(Viewport::new(1280.0, 720.0));
    let element = viewport.place(Bounds::new(0.0, 1000.0, 1200.0, 800.0));
    let _handle = container.mount(viewport.clone(), element);

    assert!(!container.gate().is_open());

    // 10% visible: below the default threshold
    viewport.scroll_to(0.0, 360.0);
    assert!(!container.gate().is_open());

    // 40% visible
    viewport.scroll_to(0.0, 600.0);
    assert!(container.gate().is_open());

    let node = container.render();
    assert!(node.find("grid-border-overlay").unwrap().has_class("animate"));
    assert!(node
        .find_all("hover-image")
        .iter()
        .all(|c| c.style.get(vars::HOVER_TRANSITION) == Some("enabled")));
}

#[test]
fn trigger_once_latches_after_scrolling_away() {
    let container = setup();
    let viewport = Rc::new(Viewport::new(1280.0, 720.0));
    let element = viewport.place(Bounds::new(0.0, 1000.0, 1200.0, 800.0));
    let _handle = container.mount(viewport.clone(), element);

    viewport.scroll_to(0.0, 1000.0);
    assert!(container.visibility_state().triggered);

    viewport.scroll_to(0.0, 0.0);
    assert!(container.gate().is_open());
    assert!(container.visibility_state().in_view);
}

#[test]
fn continuous_mode_mirrors_visibility() {
    let container = GridContainer::builder(GridSpec::new(1, 2).unwrap())
        .visibility(VisibilityConfig::new(0.2, false).unwrap())
        .child(CellSpec::new())
        .child(CellSpec::new())
        .build();
    let viewport = Rc::new(Viewport::new(1280.0, 720.0));
    let element = viewport.place(Bounds::new(0.0, 1000.0, 1200.0, 600.0));
    let _handle = container.mount(viewport.clone(), element);

    viewport.scroll_to(0.0, 1000.0);
    assert!(container.gate().is_open());
    viewport.scroll_to(0.0, 0.0);
    assert!(!container.gate().is_open());
}

#[test]
fn unmount_releases_the_observer() {
    let container = setup();
    let viewport = Rc::new(Viewport::new(1280.0, 720.0));
    let element = viewport.place(Bounds::new(0.0, 1000.0, 1200.0, 800.0));

    let handle = container.mount(viewport.clone(), element);
    assert_eq!(viewport.observer_count(), 1);
    handle.unmount();
    assert_eq!(viewport.observer_count(), 0);

    viewport.scroll_to(0.0, 1000.0);
    assert!(!container.gate().is_open());
}

#[test]
fn missing_observation_api_never_animates_by_default() {
    let container = setup();
    let _handle = container.mount(Rc::new(NoIntersectionApi), showcase_grid::ElementId(0));
    assert!(!container.gate().is_open());

    let eager = GridContainer::builder(GridSpec::new(2, 3).unwrap())
        .visibility(VisibilityConfig::default().with_unavailable(UnavailablePolicy::AnimateImmediately))
        .children(showcase_cells())
        .build();
    let _eager_handle = eager.mount(Rc::new(NoIntersectionApi), showcase_grid::ElementId(0));
    assert!(eager.gate().is_open());
}
