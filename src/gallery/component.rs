//! The `game-media-gallery` element.
//!
//! Lifecycle in short:
//!
//! - attach, or a change to an observed attribute while attached, schedules a
//!   debounced [`Task::Render`];
//! - a render rebuilds the shadow root, bumps the [`Generation`], pushes the
//!   navigation state into the new nodes and requests a frame to bind
//!   listeners for that generation;
//! - the bind task installs the click listeners (and, the first time, the
//!   document keyboard listener) unless a newer render superseded it;
//! - detach cancels any pending render, drops the listeners, releases the
//!   keyboard listener and resets the state.

use std::any::Any;

use tracing::{debug, trace};

use super::config::{GalleryConfig, OBSERVED_ATTRIBUTES};
use super::controller::{Controller, GalleryAction};
use super::state::GalleryState;
use crate::dom::{Attributes, Dom, NodeData, NodeId};
use crate::event::{
    dispatch_click, ClickEvent, Generation, KeyBindingRegistry, KeyEvent, KeyOutcome, Listener,
    ListenerSet,
};
use crate::host::{Context, Debouncer, Element, KeyboardSubscription, Task};
use crate::render::{inner_html, template, GalleryView, Surface};

/// Tag name the element registers under.
pub const TAG_NAME: &str = "game-media-gallery";

/// Screenshot gallery with a lightbox overlay.
pub struct GalleryElement {
    attributes: Attributes,
    config: GalleryConfig,
    state: GalleryState,
    dom: Dom,
    shadow_root: NodeId,
    view: Option<GalleryView>,
    generation: Generation,
    listeners: Option<ListenerSet<GalleryAction>>,
    debouncer: Debouncer,
    keyboard: Option<KeyboardSubscription>,
    bindings: KeyBindingRegistry,
    connected: bool,
    commits: u64,
}

impl GalleryElement {
    /// A detached gallery with no attributes and an empty shadow root.
    pub fn new() -> Self {
        let mut dom = Dom::new();
        let shadow_root = dom.insert(NodeData::new("#shadow-root"));
        Self {
            attributes: Attributes::new(),
            config: GalleryConfig::default(),
            state: GalleryState::new(),
            dom,
            shadow_root,
            view: None,
            generation: Generation::default(),
            listeners: None,
            debouncer: Debouncer::new(),
            keyboard: None,
            bindings: KeyBindingRegistry::with_defaults(),
            connected: false,
            commits: 0,
        }
    }

    /// Replace the keyboard bindings (builder).
    pub fn with_bindings(mut self, bindings: KeyBindingRegistry) -> Self {
        self.bindings = bindings;
        self
    }

    /// Set an attribute before the element is handed to a host (builder).
    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.set(name, value);
        self
    }

    // ── Navigation ───────────────────────────────────────────────────

    /// Show image `index`, wrapped into range. `None` for an empty gallery.
    pub fn show_image(&mut self, index: i64) -> Option<usize> {
        self.controller().show_image(index)
    }

    /// Open the modal on image `index`.
    pub fn open_modal(&mut self, index: usize) -> bool {
        self.controller().open_modal(index)
    }

    /// Close the modal, keeping the current index.
    pub fn close_modal(&mut self) -> bool {
        self.controller().close_modal()
    }

    fn controller(&mut self) -> Controller<'_> {
        let surface = match &self.view {
            Some(view) => Some(Surface::new(&mut self.dom, view)),
            None => None,
        };
        Controller::new(&mut self.state, &self.config.images, surface)
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn schedule_render(&mut self, cx: &mut Context<'_>) {
        self.debouncer.schedule(Task::Render, cx);
        trace!(component = ?cx.component(), "render scheduled");
    }

    fn render(&mut self, cx: &mut Context<'_>) {
        let config = GalleryConfig::from_attributes(&self.attributes);

        self.listeners = None;
        self.dom.clear_children(self.shadow_root);
        self.generation = self.generation.next();
        self.view = template::build(&mut self.dom, self.shadow_root, &config);
        self.config = config;
        self.commits += 1;
        self.controller().sync();

        cx.request_frame(Task::BindListeners(self.generation));
        debug!(
            component = ?cx.component(),
            generation = %self.generation,
            images = self.config.images.len(),
            layout = %self.config.layout,
            "rendered"
        );
    }

    fn bind_listeners(&mut self, generation: Generation, cx: &mut Context<'_>) {
        if !self.connected || generation != self.generation {
            trace!(
                component = ?cx.component(),
                stale = %generation,
                current = %self.generation,
                "skipping stale listener bind"
            );
            return;
        }
        let Some(view) = &self.view else {
            return;
        };

        let mut set = ListenerSet::new(generation);
        for (index, &item) in view.thumbnails.iter().enumerate() {
            set.add(Listener::on_click(item, GalleryAction::Open(index)));
        }
        set.add(Listener::on_click(view.close, GalleryAction::Close).stop_propagation());
        set.add(Listener::on_click(view.prev, GalleryAction::Previous).stop_propagation());
        set.add(Listener::on_click(view.next, GalleryAction::Next).stop_propagation());
        set.add(Listener::on_click(view.modal, GalleryAction::Close).self_only());
        trace!(component = ?cx.component(), %generation, listeners = set.len(), "listeners bound");
        self.listeners = Some(set);

        if self.keyboard.is_none() {
            self.keyboard = Some(cx.subscribe_keyboard());
            debug!(component = ?cx.component(), "keyboard listener registered");
        }
    }

    // ── Query ────────────────────────────────────────────────────────

    /// The config of the last committed render.
    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn state(&self) -> GalleryState {
        self.state
    }

    /// Generation of the last committed render (0 before the first).
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Number of committed renders.
    pub fn commit_count(&self) -> u64 {
        self.commits
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn is_render_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Number of live click listeners (0 until the bind task has run).
    pub fn listener_count(&self) -> usize {
        self.listeners.as_ref().map_or(0, ListenerSet::len)
    }

    /// Generation the live listeners belong to.
    pub fn listener_generation(&self) -> Option<Generation> {
        self.listeners.as_ref().map(ListenerSet::generation)
    }

    pub fn holds_keyboard(&self) -> bool {
        self.keyboard.is_some()
    }

    pub fn bindings(&self) -> &KeyBindingRegistry {
        &self.bindings
    }

    /// Node handles of the last committed render.
    pub fn view(&self) -> Option<&GalleryView> {
        self.view.as_ref()
    }

    /// The shadow root node.
    pub fn shadow_root_node(&self) -> NodeId {
        self.shadow_root
    }

    /// Serialized shadow-root content.
    pub fn markup(&self) -> String {
        inner_html(&self.dom, self.shadow_root)
    }

    /// `src` of the full-size modal image.
    pub fn modal_image_src(&self) -> Option<&str> {
        let view = self.view.as_ref()?;
        self.dom.get(view.modal_image)?.attr("src")
    }

    /// Whether the modal overlay is displayed.
    pub fn is_modal_visible(&self) -> bool {
        self.view
            .as_ref()
            .is_some_and(|view| self.dom.is_displayed(view.modal))
    }

    /// Whether the previous/next arrows are shown (ignoring the modal itself).
    pub fn arrows_visible(&self) -> bool {
        self.view.as_ref().is_some_and(|view| {
            [view.prev, view.next]
                .iter()
                .all(|&arrow| self.dom.get(arrow).is_some_and(|node| node.visible))
        })
    }

    /// `src` of every rendered thumbnail, in order.
    pub fn thumbnail_sources(&self) -> Vec<&str> {
        let Some(view) = &self.view else {
            return Vec::new();
        };
        view.thumbnails
            .iter()
            .filter_map(|&item| {
                let image = self.dom.children(item).first()?;
                self.dom.get(*image)?.attr("src")
            })
            .collect()
    }
}

impl Default for GalleryElement {
    fn default() -> Self {
        Self::new()
    }
}

impl Element for GalleryElement {
    fn tag_name(&self) -> &str {
        TAG_NAME
    }

    fn observed_attributes(&self) -> &[&str] {
        OBSERVED_ATTRIBUTES
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn shadow_root(&self) -> &Dom {
        &self.dom
    }

    fn connected(&mut self, cx: &mut Context<'_>) {
        self.connected = true;
        self.schedule_render(cx);
    }

    fn disconnected(&mut self, cx: &mut Context<'_>) {
        self.connected = false;
        if self.debouncer.cancel(cx) {
            trace!(component = ?cx.component(), "pending render cancelled");
        }
        self.listeners = None;
        if let Some(subscription) = self.keyboard.take() {
            cx.release_keyboard(subscription);
            debug!(component = ?cx.component(), "keyboard listener released");
        }
        self.state = GalleryState::new();
        self.controller().sync();
    }

    fn attribute_changed(
        &mut self,
        name: &str,
        _old: Option<&str>,
        _new: Option<&str>,
        cx: &mut Context<'_>,
    ) {
        if self.connected {
            trace!(component = ?cx.component(), attribute = name, "observed attribute changed");
            self.schedule_render(cx);
        }
    }

    fn run_task(&mut self, task: Task, cx: &mut Context<'_>) {
        match task {
            Task::Render => {
                self.debouncer.complete();
                if self.connected {
                    self.render(cx);
                }
            }
            Task::BindListeners(generation) => self.bind_listeners(generation, cx),
        }
    }

    fn handle_click(&mut self, event: ClickEvent, _cx: &mut Context<'_>) -> bool {
        let Some(listeners) = &self.listeners else {
            return false;
        };
        let actions = dispatch_click(&self.dom, listeners, event);
        let mut controller = self.controller();
        for &action in &actions {
            controller.apply(action);
        }
        !actions.is_empty()
    }

    fn handle_key(&mut self, event: &KeyEvent, _cx: &mut Context<'_>) -> KeyOutcome {
        if !self.connected || !self.state.modal_open {
            return KeyOutcome::default();
        }
        let Some(binding) = self.bindings.resolve(event) else {
            return KeyOutcome::default();
        };
        self.controller().apply(binding.action.into());
        KeyOutcome {
            handled: true,
            default_prevented: binding.prevent_default,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
