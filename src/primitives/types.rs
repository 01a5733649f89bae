//! Primitive types - composition input and cell props.
//!
//! Callers describe a showcase as a [`GridSpec`](crate::GridSpec) plus an
//! ordered list of [`Node`]s. `Node` is deliberately loose (anything a page
//! might hand over); the container and cells narrow it to the closed set of
//! kinds they accept when they are built, dropping the rest with a
//! diagnostic.

use crate::renderer::RenderNode;
use crate::types::{CellFlags, InnerGrid, SlideDirection};

// =============================================================================
// Cleanup Function
// =============================================================================

/// Cleanup function returned by lifecycle operations.
pub type Cleanup = Box<dyn FnOnce()>;

// =============================================================================
// Node - loose composition input
// =============================================================================

/// Anything a page may place in the composition tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A grid cell. Valid only directly under a grid container.
    Cell(CellSpec),
    /// A content leaf. Valid inside a cell.
    Content(Content),
    /// Bare text.
    Text(String),
    /// Pre-rendered markup passed through untouched.
    Element(RenderNode),
}

impl Node {
    /// Short kind name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Cell(_) => "cell",
            Node::Content(_) => "content",
            Node::Text(_) => "text",
            Node::Element(_) => "element",
        }
    }
}

impl From<CellSpec> for Node {
    fn from(cell: CellSpec) -> Self {
        Node::Cell(cell)
    }
}

impl From<Content> for Node {
    fn from(content: Content) -> Self {
        Node::Content(content)
    }
}

impl From<ProductContent> for Node {
    fn from(content: ProductContent) -> Self {
        Node::Content(Content::Product(content))
    }
}

impl From<CellBody> for Node {
    fn from(content: CellBody) -> Self {
        Node::Content(Content::Body(content))
    }
}

impl From<RenderNode> for Node {
    fn from(node: RenderNode) -> Self {
        Node::Element(node)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

// =============================================================================
// Content leaves
// =============================================================================

/// Closed set of content leaves a cell renders.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Product(ProductContent),
    Body(CellBody),
    /// Bordered placeholder with nothing inside.
    Empty,
}

/// Product card: title, description, optional arrow icon.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductContent {
    pub title: String,
    pub description: String,
    pub show_arrow: bool,
    pub class_name: String,
}

impl ProductContent {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            show_arrow: true,
            class_name: String::new(),
        }
    }

    pub fn without_arrow(mut self) -> Self {
        self.show_arrow = false;
        self
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }
}

/// Plain cell body with a header (title + description).
#[derive(Debug, Clone, PartialEq)]
pub struct CellBody {
    pub title: String,
    pub description: String,
    pub show_arrow: bool,
}

impl CellBody {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            show_arrow: false,
        }
    }

    pub fn with_arrow(mut self) -> Self {
        self.show_arrow = true;
        self
    }
}

// =============================================================================
// CellSpec
// =============================================================================

/// Description of one grid cell.
///
/// Spans default to 1 and are never 0 (a 0 passed to a setter becomes 1).
/// Spans above the owning grid's tracks are clamped by the container.
///
/// # Example
///
/// ```ignore
/// let cell = CellSpec::new()
///     .with_id("evnia-7000")
///     .with_col_span(2)
///     .with_hover_image("/images/istockphoto-1560833158-2048x2048.jpg")
///     .with_hover_direction(SlideDirection::Right)
///     .with_inner_grid(InnerGrid::Pair)
///     .child(ProductContent::new("Evnia 7000 series", "For the avid gamer."));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CellSpec {
    pub(crate) id: Option<String>,
    pub(crate) row_span: u16,
    pub(crate) col_span: u16,
    pub(crate) hover_image: Option<String>,
    pub(crate) hover_direction: SlideDirection,
    pub(crate) inner_grid: Option<InnerGrid>,
    pub(crate) class_name: String,
    pub(crate) content: Vec<Node>,
}

impl Default for CellSpec {
    fn default() -> Self {
        Self {
            id: None,
            row_span: 1,
            col_span: 1,
            hover_image: None,
            hover_direction: SlideDirection::Left,
            inner_grid: None,
            class_name: String::new(),
            content: Vec::new(),
        }
    }
}

impl CellSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_row_span(mut self, n: u16) -> Self {
        self.row_span = n.max(1);
        self
    }

    pub fn with_col_span(mut self, n: u16) -> Self {
        self.col_span = n.max(1);
        self
    }

    pub fn with_hover_image(mut self, path: impl Into<String>) -> Self {
        self.hover_image = Some(path.into());
        self
    }

    pub fn with_hover_direction(mut self, direction: SlideDirection) -> Self {
        self.hover_direction = direction;
        self
    }

    pub fn with_inner_grid(mut self, layout: InnerGrid) -> Self {
        self.inner_grid = Some(layout);
        self
    }

    /// Extra classes appended after the built-in ones.
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Append a content child.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.content.push(node.into());
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn row_span(&self) -> u16 {
        self.row_span
    }

    pub fn col_span(&self) -> u16 {
        self.col_span
    }

    pub fn hover_image(&self) -> Option<&str> {
        self.hover_image.as_deref()
    }

    pub fn hover_direction(&self) -> SlideDirection {
        self.hover_direction
    }

    pub fn inner_grid(&self) -> Option<InnerGrid> {
        self.inner_grid
    }

    pub fn has_inner_grid(&self) -> bool {
        self.inner_grid.is_some()
    }

    pub fn content(&self) -> &[Node] {
        &self.content
    }

    pub fn flags(&self) -> CellFlags {
        let mut flags = CellFlags::NONE;
        if self.hover_image.is_some() {
            flags |= CellFlags::HOVER_IMAGE;
        }
        if self.inner_grid.is_some() {
            flags |= CellFlags::INNER_GRID;
        }
        if self.row_span > 1 {
            flags |= CellFlags::ROW_SPAN;
        }
        if self.col_span > 1 {
            flags |= CellFlags::COL_SPAN;
        }
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_spec_defaults() {
        let cell = CellSpec::new();
        assert_eq!(cell.row_span(), 1);
        assert_eq!(cell.col_span(), 1);
        assert_eq!(cell.hover_direction(), SlideDirection::Left);
        assert!(!cell.has_inner_grid());
        assert!(cell.hover_image().is_none());
        assert_eq!(cell.flags(), CellFlags::NONE);
    }

    #[test]
    fn test_zero_span_becomes_one() {
        let cell = CellSpec::new().with_col_span(0).with_row_span(0);
        assert_eq!(cell.col_span(), 1);
        assert_eq!(cell.row_span(), 1);
    }

    #[test]
    fn test_flags() {
        let cell = CellSpec::new()
            .with_col_span(2)
            .with_hover_image("/a.jpg")
            .with_inner_grid(InnerGrid::Triple);
        assert_eq!(
            cell.flags(),
            CellFlags::COL_SPAN | CellFlags::HOVER_IMAGE | CellFlags::INNER_GRID
        );
    }

    #[test]
    fn test_node_conversions() {
        assert_eq!(Node::from("hi").kind(), "text");
        assert_eq!(Node::from(CellSpec::new()).kind(), "cell");
        assert_eq!(Node::from(ProductContent::new("a", "b")).kind(), "content");
        assert_eq!(Node::from(RenderNode::div("x")).kind(), "element");
    }

    #[test]
    fn test_children_keep_order() {
        let cell = CellSpec::new().child("one").child(Content::Empty).child("two");
        let kinds: Vec<&str> = cell.content().iter().map(Node::kind).collect();
        assert_eq!(kinds, vec!["text", "content", "text"]);
    }
}
