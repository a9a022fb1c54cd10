//! Snapshot helpers.
//!
//! [`outline`] turns a DOM subtree into an indented, line-per-node text form
//! that reads well in inline snapshots: `tag.class1.class2[attr=value]`,
//! followed by the quoted text and a `(hidden)` marker where they apply.
//! Stylesheet text is left out.

use crate::dom::{Dom, NodeId};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render `node` and its descendants, two spaces of indent per level.
///
/// Returns an empty string for a dead id.
pub fn outline(dom: &Dom, node: NodeId) -> String {
    let mut lines = Vec::new();
    outline_into(dom, node, 0, &mut lines);
    lines.join("\n")
}

fn outline_into(dom: &Dom, node: NodeId, depth: usize, lines: &mut Vec<String>) {
    let Some(data) = dom.get(node) else {
        return;
    };
    let mut line = "  ".repeat(depth);
    line.push_str(&data.tag);
    for class in &data.classes {
        line.push('.');
        line.push_str(class);
    }
    for (name, value) in data.attributes.iter() {
        line.push_str(&format!("[{name}={value:?}]"));
    }
    if let Some(text) = data.text.as_deref().filter(|_| data.tag != "style") {
        line.push_str(&format!(" {text:?}"));
    }
    if !data.visible {
        line.push_str(" (hidden)");
    }
    lines.push(line);
    for &child in dom.children(node) {
        outline_into(dom, child, depth + 1, lines);
    }
}
