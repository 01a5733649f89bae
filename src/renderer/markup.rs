//! Markup serialization of a render tree.
//!
//! Writes everything into one `String` buffer, like a frame is built up
//! before a single flush. Attribute values and text are escaped; tags come
//! from the components themselves and are trusted.

use std::fmt::Write;

use super::RenderNode;

/// Elements that never have a closing tag.
const VOID_TAGS: &[&str] = &["img", "br", "hr", "input", "meta", "link"];

/// Serialize a node and its subtree.
pub fn to_markup(node: &RenderNode) -> String {
    let mut out = String::with_capacity(256);
    write_node(node, &mut out);
    out
}

fn write_node(node: &RenderNode, out: &mut String) {
    out.push('<');
    out.push_str(node.tag);

    if !node.classes.is_empty() {
        out.push_str(" class=\"");
        escape_into(&node.classes.join(" "), out);
        out.push('"');
    }
    if !node.style.is_empty() {
        out.push_str(" style=\"");
        escape_into(&node.style.to_string(), out);
        out.push('"');
    }
    for (name, value) in &node.attrs {
        let _ = write!(out, " {name}=\"");
        escape_into(value, out);
        out.push('"');
    }
    out.push('>');

    if VOID_TAGS.contains(&node.tag) {
        return;
    }

    if let Some(text) = &node.text {
        escape_into(text, out);
    }
    for child in &node.children {
        write_node(child, out);
    }

    let _ = write!(out, "</{}>", node.tag);
}

fn escape_into(s: &str, out: &mut String) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
