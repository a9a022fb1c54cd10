//! Gallery configuration read from the element's attributes.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::dom::Attributes;

/// Heading text attribute.
pub const TITLE_ATTR: &str = "title";
/// Layout mode attribute (`grid` or `vertical`).
pub const LAYOUT_ATTR: &str = "layout";
/// Comma-joined image references.
pub const IMAGES_ATTR: &str = "images";

/// Attributes whose changes trigger a re-render.
pub const OBSERVED_ATTRIBUTES: &[&str] = &[TITLE_ATTR, LAYOUT_ATTR, IMAGES_ATTR];

/// Heading used when `title` is absent or empty.
pub const DEFAULT_TITLE: &str = "Screenshots & Videos";

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Presentation mode. Only affects styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    /// Padded multi-column grid on a light background.
    #[default]
    Grid,
    /// Single transparent column, for sidebars.
    Vertical,
}

impl Layout {
    /// The attribute value for this layout.
    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Grid => "grid",
            Layout::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for a `layout` value that names no known layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown layout {0:?} (expected \"grid\" or \"vertical\")")]
pub struct ParseLayoutError(pub String);

/// Parses `"grid"` or `"vertical"`.
///
/// Matching is lenient: surrounding whitespace is ignored and case does not
/// matter, so `" Vertical "` selects [`Layout::Vertical`]. [`Layout::as_str`]
/// always writes the lowercase form back.
impl FromStr for Layout {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("grid") {
            Ok(Layout::Grid)
        } else if value.eq_ignore_ascii_case("vertical") {
            Ok(Layout::Vertical)
        } else {
            Err(ParseLayoutError(s.to_owned()))
        }
    }
}

// ---------------------------------------------------------------------------
// GalleryConfig
// ---------------------------------------------------------------------------

/// Immutable snapshot of what to render. Replaced wholesale on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    pub title: String,
    pub layout: Layout,
    pub images: Vec<String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            layout: Layout::Grid,
            images: Vec::new(),
        }
    }
}

impl GalleryConfig {
    /// Create the default config: default title, grid layout, no images.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a config from element attributes. Never fails; bad values fall back
    /// to defaults.
    pub fn from_attributes(attributes: &Attributes) -> Self {
        let title = match attributes.get(TITLE_ATTR) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => DEFAULT_TITLE.to_string(),
        };
        let layout = match attributes.get(LAYOUT_ATTR) {
            None | Some("") => Layout::Grid,
            Some(raw) => raw.parse().unwrap_or_else(|err: ParseLayoutError| {
                debug!(%err, "falling back to grid layout");
                Layout::Grid
            }),
        };
        let images = attributes.get(IMAGES_ATTR).map(parse_images).unwrap_or_default();
        Self {
            title,
            layout,
            images,
        }
    }

    /// Set the title (builder).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the layout (builder).
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the image list (builder).
    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }
}

/// Split a comma-joined image list, trimming entries and dropping empty ones.
///
/// Blank entries are skipped rather than rendered as thumbnails with an empty
/// `src`, so `"a,,b"` yields two images.
pub fn parse_images(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs.iter().map(|&(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn defaults_when_no_attributes() {
        let config = GalleryConfig::from_attributes(&Attributes::new());
        assert_eq!(config, GalleryConfig::default());
        assert_eq!(config.title, "Screenshots & Videos");
    }

    #[test]
    fn empty_title_uses_default() {
        let config = GalleryConfig::from_attributes(&attrs(&[(TITLE_ATTR, "")]));
        assert_eq!(config.title, DEFAULT_TITLE);
    }

    #[test]
    fn reads_all_attributes() {
        let config = GalleryConfig::from_attributes(&attrs(&[
            (TITLE_ATTR, "Media"),
            (LAYOUT_ATTR, "vertical"),
            (IMAGES_ATTR, "a.png, b.png ,c.png"),
        ]));
        assert_eq!(
            config,
            GalleryConfig::new()
                .with_title("Media")
                .with_layout(Layout::Vertical)
                .with_images(["a.png", "b.png", "c.png"])
        );
    }

    #[test]
    fn unknown_layout_is_grid() {
        let config = GalleryConfig::from_attributes(&attrs(&[(LAYOUT_ATTR, "masonry")]));
        assert_eq!(config.layout, Layout::Grid);
    }

    #[test]
    fn layout_parse_is_lenient_about_case_and_space() {
        assert_eq!(" Vertical ".parse::<Layout>(), Ok(Layout::Vertical));
        assert_eq!("GRID".parse::<Layout>(), Ok(Layout::Grid));
        let err = "tiles".parse::<Layout>().unwrap_err();
        assert_eq!(err, ParseLayoutError("tiles".into()));
        assert!(err.to_string().contains("\"tiles\""));
    }

    #[test]
    fn layout_display_round_trips() {
        for layout in [Layout::Grid, Layout::Vertical] {
            assert_eq!(layout.to_string().parse::<Layout>(), Ok(layout));
        }
    }

    #[test]
    fn parse_images_drops_empty_entries() {
        assert_eq!(parse_images(""), Vec::<String>::new());
        assert_eq!(parse_images(" , ,"), Vec::<String>::new());
        assert_eq!(parse_images("a,,b, "), vec!["a", "b"]);
        assert_eq!(parse_images("  only.png  "), vec!["only.png"]);
    }
}
