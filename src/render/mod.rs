//! Rendering: gallery template, stylesheet, and HTML serialization.

pub mod markup;
pub mod style;
pub mod template;

pub use markup::{escape, inner_html, to_html};
pub use style::{stylesheet, LayoutMetrics};
pub use template::{build, GalleryView, Surface};
