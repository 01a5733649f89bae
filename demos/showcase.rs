//! Showcase demo - the product grid and a reusability grid.
//!
//! Builds both grids, places them in a simulated viewport, scrolls down the
//! page and prints the markup before and after each grid comes into view.
//!
//! Run with: cargo run --example showcase

use std::rc::Rc;

use showcase_grid::{
    to_markup, Bounds, CellBody, CellSpec, GridContainer, GridSpec, InnerGrid, SlideDirection,
    Viewport,
};

fn product_grid() -> showcase_grid::Result<GridContainer> {
    let grid = GridContainer::builder(GridSpec::new(2, 3)?)
        .child(
            CellSpec::new()
                .with_id("evnia-3000")
                .with_class("cell-3000")
                .with_hover_image("/images/ai-generated-8020817_1280.jpg")
                .with_hover_direction(SlideDirection::Left)
                .child(
                    CellBody::new(
                        "Evnia 3000 series",
                        "Our product series for the casual gamer. High performance, with distinguishable features for the entry level player.",
                    )
                    .with_arrow(),
                ),
        )
        .child(
            CellSpec::new()
                .with_id("evnia-7000")
                .with_class("cell-7000")
                .with_col_span(2)
                .with_inner_grid(InnerGrid::Pair)
                .with_hover_image("/images/istockphoto-1560833158-2048x2048.jpg")
                .with_hover_direction(SlideDirection::Right)
                .child(
                    CellBody::new(
                        "Evnia 7000 series",
                        "Our product series for the avid gamer with an eye for design. A high-performance screen that fits into the most stunning environments.",
                    )
                    .with_arrow(),
                ),
        )
        .child(
            CellSpec::new()
                .with_id("evnia-5000")
                .with_class("cell-5000")
                .with_col_span(3)
                .with_inner_grid(InnerGrid::Triple)
                .with_hover_image("/images/ai-generated-8531096_1280.webp")
                .with_hover_direction(SlideDirection::Bottom)
                .child(
                    CellBody::new(
                        "Evnia 5000 series",
                        "Our product series for the intermediate gamer. High performance, with a futuristic design for the more enthusiastic player.",
                    )
                    .with_arrow(),
                ),
        )
        .build();
    Ok(grid)
}

fn reusability_grid() -> showcase_grid::Result<GridContainer> {
    let grid = GridContainer::builder(GridSpec::new(1, 2)?)
        .child(
            CellSpec::new()
                .with_id("test-left")
                .with_class("cell-test-left")
                .child(CellBody::new("Left Section", "Text content here")),
        )
        .child(
            CellSpec::new()
                .with_id("test-right")
                .with_class("cell-test-right")
                .child(CellBody::new("Right Section", "Product display here")),
        )
        .build();
    Ok(grid)
}

fn main() -> showcase_grid::Result<()> {
    let viewport = Rc::new(Viewport::new(1280.0, 720.0));

    let products = product_grid()?;
    let reuse = reusability_grid()?;

    // Product grid is 1200×800 below a 900px hero, the second grid follows.
    let products_el = viewport.place(Bounds::new(40.0, 900.0, 1200.0, 800.0));
    let reuse_el = viewport.place(Bounds::new(40.0, 1800.0, 1200.0, 600.0));

    let _products_handle = products.mount_with_render(viewport.clone(), products_el, |frame| {
        println!("--- product grid ---\n{}\n", to_markup(frame));
    });
    let _reuse_handle = reuse.mount_with_render(viewport.clone(), reuse_el, |frame| {
        println!("--- reusability grid ---\n{}\n", to_markup(frame));
    });

    for y in [400.0, 900.0, 1600.0] {
        println!("=== scroll to {y} ===");
        viewport.scroll_to(0.0, y);
    }

    products.cells()[1].pointer_enter();

    let layout = products.layout(1200.0)?;
    for cell in &layout.cells {
        println!(
            "cell {} at row {} col {} ({}x{} tracks) -> {:?}",
            cell.index, cell.row, cell.column, cell.row_span, cell.col_span, cell.bounds
        );
    }

    Ok(())
}
