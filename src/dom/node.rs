//! Node types: NodeId, NodeData.

use slotmap::new_key_type;

use super::attributes::Attributes;

new_key_type! {
    /// Unique identifier for a DOM node. Copy, lightweight (u64).
    ///
    /// Ids are versioned: once a node is removed its id never resolves again,
    /// even if the slot is reused by a later rebuild.
    pub struct NodeId;
}

/// Data associated with a single DOM node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    /// Element tag name (e.g. "div", "img").
    pub tag: String,
    /// CSS classes (for .class selector).
    pub classes: Vec<String>,
    /// Element attributes other than `class` and `hidden`.
    pub attributes: Attributes,
    /// Text content, serialized before any children.
    pub text: Option<String>,
    /// Whether this node is displayed. Hidden nodes cannot be clicked.
    pub visible: bool,
}

impl NodeData {
    /// Create a new `NodeData` with the given tag and sensible defaults.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            attributes: Attributes::new(),
            text: None,
            visible: true,
        }
    }

    /// Add a single CSS class (builder).
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Add multiple CSS classes (builder).
    pub fn with_classes(mut self, classes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for class in classes {
            let class = class.into();
            if !self.classes.contains(&class) {
                self.classes.push(class);
            }
        }
        self
    }

    /// Set an attribute (builder).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(name, value);
        self
    }

    /// Set the text content (builder).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set whether this node is displayed (builder).
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Check whether this node has a given CSS class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a CSS class. No-op if already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    /// Remove a CSS class. No-op if not present.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Toggle a CSS class: add if absent, remove if present.
    pub fn toggle_class(&mut self, class: &str) {
        if self.has_class(class) {
            self.remove_class(class);
        } else {
            self.add_class(class);
        }
    }

    /// Shorthand for `attributes.get`.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults() {
        let data = NodeData::new("div");
        assert_eq!(data.tag, "div");
        assert!(data.classes.is_empty());
        assert!(data.attributes.is_empty());
        assert!(data.text.is_none());
        assert!(data.visible);
    }

    #[test]
    fn builder_with_class_dedup() {
        let data = NodeData::new("div").with_class("modal").with_class("modal");
        assert_eq!(data.classes, vec!["modal"]);
    }

    #[test]
    fn builder_with_classes() {
        let data = NodeData::new("button").with_classes(["modal-arrow", "modal-prev"]);
        assert_eq!(data.classes, vec!["modal-arrow", "modal-prev"]);
    }

    #[test]
    fn builder_attr_text_visible() {
        let data = NodeData::new("img")
            .with_attr("src", "a.png")
            .with_text("ignored for void tags")
            .visible(false);
        assert_eq!(data.attr("src"), Some("a.png"));
        assert_eq!(data.text.as_deref(), Some("ignored for void tags"));
        assert!(!data.visible);
    }

    #[test]
    fn add_remove_toggle_class() {
        let mut data = NodeData::new("div").with_class("modal");
        data.add_class("active");
        data.add_class("active");
        assert_eq!(data.classes, vec!["modal", "active"]);
        data.remove_class("active");
        assert!(!data.has_class("active"));
        data.toggle_class("active");
        assert!(data.has_class("active"));
        data.toggle_class("active");
        assert!(!data.has_class("active"));
    }

    #[test]
    fn node_id_is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<NodeId>();
    }
}
