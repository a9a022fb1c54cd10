//! Pilot: programmatic interaction with a gallery inside a headless host.
//!
//! The `Pilot` owns a [`Host`] with a single [`GalleryElement`] and provides
//! methods to change attributes, click the rendered controls, press keys and
//! settle the event loop.

use crate::dom::Selector;
use crate::event::{Key, KeyEvent, KeyOutcome, Modifiers};
use crate::gallery::{GalleryElement, GalleryState, IMAGES_ATTR};
use crate::host::{ComponentId, Host, HostConfig};

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless gallery driver for testing.
///
/// # Examples
///
/// ```
/// use showcase_gallery::testing::Pilot;
/// use showcase_gallery::event::Key;
///
/// let mut pilot = Pilot::with_images(&["a.png", "b.png"]);
/// pilot.click_thumbnail(1);
/// pilot.press_key(Key::Right);
/// assert_eq!(pilot.state().current_index, 0);
/// ```
pub struct Pilot {
    host: Host,
    gallery: ComponentId,
}

impl Pilot {
    /// Create a host holding a detached, attribute-less gallery.
    pub fn new() -> Self {
        Self::from_element(GalleryElement::new(), HostConfig::default())
    }

    /// Wrap an already configured gallery (detached).
    pub fn from_element(element: GalleryElement, config: HostConfig) -> Self {
        let mut host = Host::with_config(config);
        let gallery = host.create(Box::new(element));
        Self { host, gallery }
    }

    /// Attach a gallery showing `images` and settle the first render.
    pub fn with_images(images: &[&str]) -> Self {
        let mut pilot = Self::from_element(
            GalleryElement::new().with_attribute(IMAGES_ATTR, images.join(",")),
            HostConfig::default(),
        );
        pilot.attach();
        pilot
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Attach the gallery and settle.
    pub fn attach(&mut self) {
        self.host
            .attach(self.gallery)
            .expect("pilot gallery is never removed");
        self.settle();
    }

    /// Detach the gallery and settle.
    pub fn detach(&mut self) {
        self.host
            .detach(self.gallery)
            .expect("pilot gallery is never removed");
        self.settle();
    }

    // ── Attributes ───────────────────────────────────────────────────

    /// Set an attribute without settling, so several changes can form a burst.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.host
            .set_attribute(self.gallery, name, value)
            .expect("pilot gallery is never removed");
    }

    /// Remove an attribute without settling.
    pub fn remove_attribute(&mut self, name: &str) {
        self.host
            .remove_attribute(self.gallery, name)
            .expect("pilot gallery is never removed");
    }

    /// Run event-loop turns until idle. Returns the number of turns.
    pub fn settle(&mut self) -> usize {
        self.host.run_until_idle()
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Click the `nth` node with `class`. Returns whether a listener acted.
    pub fn click(&mut self, selector: Selector) -> bool {
        self.host
            .click_selector(self.gallery, &selector)
            .expect("pilot gallery is never removed")
    }

    /// Click thumbnail `index`.
    pub fn click_thumbnail(&mut self, index: usize) -> bool {
        self.click(Selector::class("gallery-item").nth(index))
    }

    /// Click the image inside thumbnail `index` (bubbles to the thumbnail).
    pub fn click_thumbnail_image(&mut self, index: usize) -> bool {
        self.click(Selector::class("gallery-image").nth(index))
    }

    pub fn click_previous(&mut self) -> bool {
        self.click(Selector::class("modal-prev"))
    }

    pub fn click_next(&mut self) -> bool {
        self.click(Selector::class("modal-next"))
    }

    pub fn click_close(&mut self) -> bool {
        self.click(Selector::class("modal-close"))
    }

    /// Click the dimmed overlay around the image.
    pub fn click_backdrop(&mut self) -> bool {
        self.click(Selector::class("modal"))
    }

    /// Click the full-size image (inside the overlay, not on it).
    pub fn click_modal_image(&mut self) -> bool {
        self.click(Selector::class("modal-image"))
    }

    /// Simulate a document keydown with no modifiers.
    pub fn press_key(&mut self, key: Key) -> KeyOutcome {
        self.host.key_down(KeyEvent::plain(key))
    }

    /// Simulate a document keydown with modifiers.
    pub fn press_key_with(&mut self, key: Key, modifiers: Modifiers) -> KeyOutcome {
        self.host.key_down(KeyEvent::new(key, modifiers))
    }

    // ── Query ────────────────────────────────────────────────────────

    pub fn gallery(&self) -> &GalleryElement {
        self.host
            .element::<GalleryElement>(self.gallery)
            .expect("pilot element is a gallery")
    }

    pub fn gallery_mut(&mut self) -> &mut GalleryElement {
        self.host
            .element_mut::<GalleryElement>(self.gallery)
            .expect("pilot element is a gallery")
    }

    pub fn state(&self) -> GalleryState {
        self.gallery().state()
    }

    pub fn id(&self) -> ComponentId {
        self.gallery
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut Host {
        &mut self.host
    }
}

impl Default for Pilot {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
