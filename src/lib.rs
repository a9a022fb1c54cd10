//! # showcase-gallery
//!
//! The media gallery / lightbox element of a game-showcase page, with the
//! small deterministic host it runs in.
//!
//! A `game-media-gallery` element reads `title`, `layout` and `images`
//! attributes, renders a thumbnail grid plus a hidden modal overlay into its
//! shadow root, and lets the user open an image full size and step through the
//! list with the arrow controls or the arrow keys. Renders are debounced, and
//! listeners are rebound per render generation. The document keyboard listener
//! is held as a capability token that is handed back on detach.
//!
//! ## Core Systems
//!
//! - **[`dom`]**: Slotmap-backed DOM arena with tree operations and class selectors
//! - **[`event`]**: Keys, clicks, key bindings, generation-tagged listeners, bubbling dispatch
//! - **[`host`]**: Element trait, event loop with timers and frames, keyboard registry, lifecycle, async driver
//! - **[`gallery`]**: Gallery configuration, navigation state, controller and the element itself
//! - **[`render`]**: Gallery template, layout stylesheet, HTML serialization
//! - **[`testing`]**: Headless `Pilot` and DOM outlines for snapshots

// Foundation
pub mod dom;
pub mod event;

// Runtime
pub mod host;

// Component
pub mod gallery;
pub mod render;

// Test support
pub mod testing;

pub use gallery::{GalleryConfig, GalleryElement, GalleryState, Layout};
pub use host::{Host, HostCommand, HostConfig, HostError};
