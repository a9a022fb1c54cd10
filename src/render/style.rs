//! Layout-dependent stylesheet text.

use crate::gallery::Layout;

/// The per-layout values substituted into the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMetrics {
    pub padding: &'static str,
    pub background: &'static str,
    pub max_width: &'static str,
    pub heading_size: &'static str,
    pub heading_gap: &'static str,
    pub heading_align: &'static str,
    pub display: &'static str,
    pub flow: &'static str,
    pub gap: &'static str,
    pub hover_offset: &'static str,
}

impl LayoutMetrics {
    pub const GRID: LayoutMetrics = LayoutMetrics {
        padding: "3rem 2rem",
        background: "#f8f9fa",
        max_width: "1200px",
        heading_size: "2rem",
        heading_gap: "2rem",
        heading_align: "center",
        display: "grid",
        flow: "grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));",
        gap: "1.5rem",
        hover_offset: "translateY(-4px)",
    };

    pub const VERTICAL: LayoutMetrics = LayoutMetrics {
        padding: "0",
        background: "transparent",
        max_width: "100%",
        heading_size: "1.25rem",
        heading_gap: "1rem",
        heading_align: "left",
        display: "flex",
        flow: "flex-direction: column;",
        gap: "1rem",
        hover_offset: "translateX(4px)",
    };

    pub fn for_layout(layout: Layout) -> Self {
        match layout {
            Layout::Grid => Self::GRID,
            Layout::Vertical => Self::VERTICAL,
        }
    }
}

/// Rules that do not depend on the layout.
const SHARED_RULES: &str = "
.gallery-item {
  position: relative;
  cursor: pointer;
  border-radius: 8px;
  overflow: hidden;
  box-shadow: 0 2px 8px rgba(0, 0, 0, 0.1);
  transition: transform 0.3s ease, box-shadow 0.3s ease;
}
.gallery-image {
  width: 100%;
  height: auto;
  display: block;
}
.slot-container {
  display: contents;
}
.modal {
  display: none;
  position: fixed;
  top: 0;
  left: 0;
  width: 100%;
  height: 100%;
  background: rgba(0, 0, 0, 0.9);
  z-index: 1000;
  align-items: center;
  justify-content: center;
}
.modal.active {
  display: flex;
}
.modal-content {
  position: relative;
  display: flex;
  align-items: center;
  justify-content: center;
}
.modal-image {
  max-width: 90vw;
  max-height: 90vh;
  border-radius: 8px;
  box-shadow: 0 4px 24px rgba(0, 0, 0, 0.5);
  display: block;
}
.modal-close {
  position: absolute;
  top: -3rem;
  right: -0.5rem;
  background: transparent;
  border: none;
  color: #fff;
  font-size: 2rem;
  cursor: pointer;
  padding: 0.5rem;
  line-height: 1;
  transition: opacity 0.2s ease;
  z-index: 1002;
}
.modal-close:hover {
  opacity: 0.7;
}
.modal-arrow {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  background: rgba(255, 255, 255, 0.1);
  border: 2px solid rgba(255, 255, 255, 0.5);
  color: #fff;
  font-size: 2rem;
  width: 50px;
  height: 50px;
  display: flex;
  align-items: center;
  justify-content: center;
  cursor: pointer;
  border-radius: 4px;
  transition: all 0.2s ease;
  z-index: 1001;
}
.modal-arrow:hover {
  background: rgba(255, 255, 255, 0.2);
  border-color: rgba(255, 255, 255, 0.8);
}
.modal-prev {
  left: 2rem;
}
.modal-next {
  right: 2rem;
}
@media (max-width: 768px) {
  .modal-arrow {
    width: 40px;
    height: 40px;
    font-size: 1.5rem;
  }
  .modal-prev {
    left: 1rem;
  }
  .modal-next {
    right: 1rem;
  }
}
";

/// Full stylesheet for `layout`.
pub fn stylesheet(layout: Layout) -> String {
    let m = LayoutMetrics::for_layout(layout);
    let mut css = format!(
        "
:host {{
  display: block;
}}
.gallery {{
  padding: {padding};
  background: {background};
}}
.gallery-container {{
  max-width: {max_width};
  margin: 0 auto;
}}
h2 {{
  font-size: {heading_size};
  margin: 0 0 {heading_gap} 0;
  text-align: {heading_align};
  color: #2c3e50;
}}
.gallery-grid {{
  display: {display};
  {flow}
  gap: {gap};
}}
.gallery-item:hover {{
  transform: {hover_offset};
  box-shadow: 0 4px 16px rgba(0, 0, 0, 0.15);
}}",
        padding = m.padding,
        background = m.background,
        max_width = m.max_width,
        heading_size = m.heading_size,
        heading_gap = m.heading_gap,
        heading_align = m.heading_align,
        display = m.display,
        flow = m.flow,
        gap = m.gap,
        hover_offset = m.hover_offset,
    );
    css.push_str(SHARED_RULES);
    css
}
