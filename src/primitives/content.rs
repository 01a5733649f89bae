//! Content leaves - product cards, cell bodies, empty placeholders.
//!
//! Purely presentational: the strings are forwarded as text, never parsed.

use crate::renderer::RenderNode;

use super::types::{CellBody, Content, ProductContent};

/// Arrow icon shown in product headers (a 24×24 up-right arrow).
pub fn arrow_icon() -> RenderNode {
    RenderNode::new("svg")
        .with_classes("arrow-icon")
        .with_attr("width", "24")
        .with_attr("height", "24")
        .with_attr("viewBox", "0 0 24 24")
        .with_attr("fill", "none")
        .with_attr("xmlns", "http://www.w3.org/2000/svg")
        .with_child(
            RenderNode::new("path")
                .with_attr("d", "M7 17L17 7M17 7H7M17 7V17")
                .with_attr("stroke", "currentColor")
                .with_attr("stroke-width", "2")
                .with_attr("stroke-linecap", "round")
                .with_attr("stroke-linejoin", "round"),
        )
}

impl ProductContent {
    pub fn render(&self) -> RenderNode {
        let text = RenderNode::new("div")
            .with_child(RenderNode::new("h3").with_classes("product-title").with_text(&self.title))
            .with_child(
                RenderNode::new("p")
                    .with_classes("product-description")
                    .with_text(&self.description),
            );

        let mut header = RenderNode::div("product-header").with_child(text);
        if self.show_arrow {
            header = header.with_child(arrow_icon());
        }

        RenderNode::div("product-content")
            .with_classes(&self.class_name)
            .with_child(header)
    }
}

impl CellBody {
    pub fn render(&self) -> RenderNode {
        let text = RenderNode::new("div")
            .with_child(RenderNode::new("h3").with_classes("cell-title").with_text(&self.title))
            .with_child(
                RenderNode::new("p")
                    .with_classes("cell-description")
                    .with_text(&self.description),
            );

        let mut header = RenderNode::div("cell-header").with_child(text);
        if self.show_arrow {
            header = header.with_child(arrow_icon());
        }

        RenderNode::div("cell-content").with_child(header)
    }
}

impl Content {
    pub fn render(&self) -> RenderNode {
        match self {
            Content::Product(product) => product.render(),
            Content::Body(body) => body.render(),
            Content::Empty => empty_cell(),
        }
    }
}

/// Bordered placeholder; the border itself comes from the stylesheet.
pub fn empty_cell() -> RenderNode {
    RenderNode::div("cell-content empty")
}
