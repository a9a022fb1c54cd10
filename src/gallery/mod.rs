//! The media gallery element: configuration, navigation state, controller.

pub mod component;
pub mod config;
pub mod controller;
pub mod state;

pub use component::{GalleryElement, TAG_NAME};
pub use config::{
    parse_images, GalleryConfig, Layout, ParseLayoutError, DEFAULT_TITLE, IMAGES_ATTR,
    LAYOUT_ATTR, OBSERVED_ATTRIBUTES, TITLE_ATTR,
};
pub use controller::{Controller, GalleryAction, NavigationError};
pub use state::{wrap_index, GalleryState};
