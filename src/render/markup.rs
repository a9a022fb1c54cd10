//! HTML serialization of a DOM subtree.
//!
//! Output is compact (no added whitespace). Per element: the `class`
//! attribute first, then the remaining attributes in name order, then
//! `hidden` for nodes that are not displayed. Text content comes before
//! children. Text and attribute values are escaped, except the raw text of
//! `style` elements.

use crate::dom::{Dom, NodeId};

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["img", "br", "hr", "input", "meta", "link"];

/// Elements whose text is emitted verbatim.
const RAW_TEXT_ELEMENTS: &[&str] = &["style", "script"];

/// Serialize `node` and its subtree. Returns an empty string for a dead id.
pub fn to_html(dom: &Dom, node: NodeId) -> String {
    let mut out = String::new();
    write_node(dom, node, &mut out);
    out
}

/// Serialize the children of `node` (what `innerHTML` would return).
pub fn inner_html(dom: &Dom, node: NodeId) -> String {
    let mut out = String::new();
    for &child in dom.children(node) {
        write_node(dom, child, &mut out);
    }
    out
}

fn write_node(dom: &Dom, node: NodeId, out: &mut String) {
    let Some(data) = dom.get(node) else {
        return;
    };
    out.push('<');
    out.push_str(&data.tag);
    if !data.classes.is_empty() {
        out.push_str(" class=\"");
        escape_into(&data.classes.join(" "), out);
        out.push('"');
    }
    for (name, value) in data.attributes.iter() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        escape_into(value, out);
        out.push('"');
    }
    if !data.visible {
        out.push_str(" hidden");
    }

    if VOID_ELEMENTS.contains(&data.tag.as_str()) {
        out.push_str(" />");
        return;
    }
    out.push('>');

    if let Some(text) = &data.text {
        if RAW_TEXT_ELEMENTS.contains(&data.tag.as_str()) {
            out.push_str(text);
        } else {
            escape_into(text, out);
        }
    }
    for &child in dom.children(node) {
        write_node(dom, child, out);
    }

    out.push_str("</");
    out.push_str(&data.tag);
    out.push('>');
}

/// Escape the five HTML-significant characters.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(text, &mut out);
    out
}

fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
}
