//! Gallery markup: builds the shadow-root subtree from a [`GalleryConfig`].

use crate::dom::{Dom, NodeData, NodeId};
use crate::gallery::GalleryConfig;

use super::style::stylesheet;

/// Alt text of every thumbnail.
pub const THUMBNAIL_ALT: &str = "Game screenshot";
/// Alt text of the full-size modal image.
pub const MODAL_IMAGE_ALT: &str = "Full size screenshot";

/// Class that marks the modal overlay as shown.
pub const ACTIVE_CLASS: &str = "active";

// ---------------------------------------------------------------------------
// GalleryView
// ---------------------------------------------------------------------------

/// Handles to the nodes of one committed render.
///
/// Only valid for the render that produced it: once the subtree is rebuilt,
/// these ids no longer resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryView {
    pub style: NodeId,
    pub gallery: NodeId,
    pub heading: NodeId,
    pub grid: NodeId,
    /// `div.gallery-item` per image, in list order.
    pub thumbnails: Vec<NodeId>,
    pub modal: NodeId,
    pub modal_content: NodeId,
    pub modal_image: NodeId,
    pub prev: NodeId,
    pub next: NodeId,
    pub close: NodeId,
}

/// Build the gallery under `host`. Returns `None` if `host` is not in `dom`.
///
/// The modal starts hidden with an empty image; arrows are shown only when
/// there is more than one image to cycle through.
pub fn build(dom: &mut Dom, host: NodeId, config: &GalleryConfig) -> Option<GalleryView> {
    let style = dom.insert_child(
        host,
        NodeData::new("style").with_text(stylesheet(config.layout)),
    )?;

    // ── Grid ─────────────────────────────────────────────────────────
    let gallery = dom.insert_child(host, NodeData::new("div").with_class("gallery"))?;
    let container =
        dom.insert_child(gallery, NodeData::new("div").with_class("gallery-container"))?;
    let heading = dom.insert_child(container, NodeData::new("h2").with_text(&config.title))?;
    let grid = dom.insert_child(container, NodeData::new("div").with_class("gallery-grid"))?;

    let mut thumbnails = Vec::with_capacity(config.images.len());
    for src in &config.images {
        let item = dom.insert_child(grid, NodeData::new("div").with_class("gallery-item"))?;
        dom.insert_child(
            item,
            NodeData::new("img")
                .with_attr("src", src)
                .with_attr("alt", THUMBNAIL_ALT)
                .with_class("gallery-image"),
        )?;
        thumbnails.push(item);
    }
    let slot = dom.insert_child(grid, NodeData::new("div").with_class("slot-container"))?;
    dom.insert_child(slot, NodeData::new("slot"))?;

    // ── Modal ────────────────────────────────────────────────────────
    let arrows = config.images.len() > 1;
    let modal = dom.insert_child(
        host,
        NodeData::new("div").with_class("modal").visible(false),
    )?;
    let prev = dom.insert_child(
        modal,
        NodeData::new("button")
            .with_classes(["modal-arrow", "modal-prev"])
            .with_text("\u{2039}")
            .visible(arrows),
    )?;
    let modal_content =
        dom.insert_child(modal, NodeData::new("div").with_class("modal-content"))?;
    let close = dom.insert_child(
        modal_content,
        NodeData::new("button")
            .with_class("modal-close")
            .with_text("\u{00d7}"),
    )?;
    let modal_image = dom.insert_child(
        modal_content,
        NodeData::new("img")
            .with_attr("src", "")
            .with_attr("alt", MODAL_IMAGE_ALT)
            .with_class("modal-image"),
    )?;
    let next = dom.insert_child(
        modal,
        NodeData::new("button")
            .with_classes(["modal-arrow", "modal-next"])
            .with_text("\u{203a}")
            .visible(arrows),
    )?;

    Some(GalleryView {
        style,
        gallery,
        heading,
        grid,
        thumbnails,
        modal,
        modal_content,
        modal_image,
        prev,
        next,
        close,
    })
}

// ---------------------------------------------------------------------------
// Surface
// ---------------------------------------------------------------------------

/// Mutable access to the nodes of a committed render.
pub struct Surface<'a> {
    dom: &'a mut Dom,
    view: &'a GalleryView,
}

impl<'a> Surface<'a> {
    pub fn new(dom: &'a mut Dom, view: &'a GalleryView) -> Self {
        Self { dom, view }
    }

    /// Point the modal image at `src` and show or hide both arrows.
    pub fn show_image(&mut self, src: &str, arrows: bool) {
        if let Some(image) = self.dom.get_mut(self.view.modal_image) {
            image.attributes.set("src", src);
        }
        for arrow in [self.view.prev, self.view.next] {
            if let Some(node) = self.dom.get_mut(arrow) {
                node.visible = arrows;
            }
        }
    }

    /// Show or hide the modal overlay.
    pub fn set_modal_active(&mut self, active: bool) {
        if let Some(modal) = self.dom.get_mut(self.view.modal) {
            if active {
                modal.add_class(ACTIVE_CLASS);
            } else {
                modal.remove_class(ACTIVE_CLASS);
            }
            modal.visible = active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::Layout;

    fn build_with(images: &[&str]) -> (Dom, GalleryView) {
        let mut dom = Dom::new();
        let root = dom.insert(NodeData::new("#shadow-root"));
        let config = GalleryConfig::new().with_images(images.iter().copied());
        let view = build(&mut dom, root, &config).unwrap();
        (dom, view)
    }

    #[test]
    fn one_thumbnail_per_image() {
        let (dom, view) = build_with(&["a.png", "b.png", "c.png"]);
        assert_eq!(view.thumbnails.len(), 3);
        let root = dom.root().unwrap();
        let srcs: Vec<_> = dom
            .select_by_class(root, "gallery-image")
            .into_iter()
            .filter_map(|id| dom.get(id)?.attr("src"))
            .collect();
        assert_eq!(srcs, vec!["a.png", "b.png", "c.png"]);
        assert_eq!(dom.get(view.heading).unwrap().text.as_deref(), Some("Screenshots & Videos"));
    }

    #[test]
    fn modal_starts_hidden_with_empty_image() {
        let (dom, view) = build_with(&["a.png", "b.png"]);
        assert!(!dom.is_displayed(view.modal));
        assert!(!dom.is_displayed(view.close));
        assert_eq!(dom.get(view.modal_image).unwrap().attr("src"), Some(""));
        assert!(dom.get(view.prev).unwrap().visible);
    }

    #[test]
    fn single_image_hides_arrows() {
        let (dom, view) = build_with(&["a.png"]);
        assert!(!dom.get(view.prev).unwrap().visible);
        assert!(!dom.get(view.next).unwrap().visible);
    }

    #[test]
    fn empty_list_still_builds_modal() {
        let (dom, view) = build_with(&[]);
        assert!(view.thumbnails.is_empty());
        assert!(dom.contains(view.modal_image));
        assert_eq!(dom.children(view.grid).len(), 1);
    }

    #[test]
    fn stylesheet_follows_layout() {
        let mut dom = Dom::new();
        let root = dom.insert(NodeData::new("#shadow-root"));
        let config = GalleryConfig::new().with_layout(Layout::Vertical);
        let view = build(&mut dom, root, &config).unwrap();
        let css = dom.get(view.style).unwrap().text.clone().unwrap();
        assert!(css.contains("flex-direction: column;"));
    }

    #[test]
    fn surface_toggles_modal() {
        let (mut dom, view) = build_with(&["a.png", "b.png"]);
        let mut surface = Surface::new(&mut dom, &view);
        surface.set_modal_active(true);
        surface.show_image("b.png", false);
        assert!(dom.is_displayed(view.modal_image));
        assert!(dom.get(view.modal).unwrap().has_class(ACTIVE_CLASS));
        assert!(!dom.is_displayed(view.next));

        Surface::new(&mut dom, &view).set_modal_active(false);
        assert!(!dom.is_displayed(view.modal_image));
        assert_eq!(dom.get(view.modal_image).unwrap().attr("src"), Some("b.png"));
    }

    #[test]
    fn missing_host_builds_nothing() {
        let mut dom = Dom::new();
        let root = dom.insert(NodeData::new("#shadow-root"));
        dom.remove(root);
        assert!(build(&mut dom, root, &GalleryConfig::new()).is_none());
    }
}
