//! Renderer - the render tree handed to the hosting page.
//!
//! Components produce [`RenderNode`] trees: a tag, a class list, named style
//! variables, plain attributes, optional text and children. The host maps
//! them onto its own element tree; [`markup`] serializes them directly.

pub mod markup;

use crate::style::StyleVars;

pub use markup::to_markup;

/// One element of the render tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderNode {
    pub tag: &'static str,
    pub classes: Vec<String>,
    pub style: StyleVars,
    pub attrs: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<RenderNode>,
}

impl RenderNode {
    /// Element with the given tag and nothing else.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            ..Default::default()
        }
    }

    /// `<div>` with a whitespace-separated class string.
    pub fn div(classes: &str) -> Self {
        Self::new("div").with_classes(classes)
    }

    /// Add classes from a whitespace-separated string. Empty names are skipped.
    pub fn with_classes(mut self, classes: &str) -> Self {
        self.classes
            .extend(classes.split_whitespace().map(str::to_string));
        self
    }

    pub fn with_style(mut self, style: StyleVars) -> Self {
        self.style = style;
        self
    }

    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.push((name.to_string(), value.into()));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: RenderNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = RenderNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Depth-first search for every node carrying `class`, self included.
    pub fn find_all(&self, class: &str) -> Vec<&RenderNode> {
        let mut out = Vec::new();
        self.collect(class, &mut out);
        out
    }

    /// First node carrying `class`, depth-first.
    pub fn find(&self, class: &str) -> Option<&RenderNode> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(class))
    }

    fn collect<'a>(&'a self, class: &str, out: &mut Vec<&'a RenderNode>) {
        if self.has_class(class) {
            out.push(self);
        }
        for child in &self.children {
            child.collect(class, out);
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut s = self.text.clone().unwrap_or_default();
        for child in &self.children {
            s.push_str(&child.text_content());
        }
        s
    }
}
