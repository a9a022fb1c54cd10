//! Navigation controller: index changes and modal open/close.
//!
//! The controller borrows the gallery's state, its current image list and (if
//! a render has been committed) the rendered [`Surface`], and keeps the three
//! in sync. It never rebuilds markup; it only edits the nodes that already
//! exist.

use tracing::{trace, warn};

use super::state::{wrap_index, GalleryState};
use crate::event::BindingAction;
use crate::render::Surface;

// ---------------------------------------------------------------------------
// GalleryAction
// ---------------------------------------------------------------------------

/// What a gallery listener asks the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryAction {
    /// Open the modal on the given thumbnail.
    Open(usize),
    Previous,
    Next,
    Close,
}

impl From<BindingAction> for GalleryAction {
    fn from(action: BindingAction) -> Self {
        match action {
            BindingAction::Previous => GalleryAction::Previous,
            BindingAction::Next => GalleryAction::Next,
            BindingAction::Close => GalleryAction::Close,
        }
    }
}

/// Errors from navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("image list is empty")]
    EmptyImageList,
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// Short-lived view over the pieces navigation touches.
pub struct Controller<'a> {
    state: &'a mut GalleryState,
    images: &'a [String],
    surface: Option<Surface<'a>>,
}

impl<'a> Controller<'a> {
    pub fn new(
        state: &'a mut GalleryState,
        images: &'a [String],
        surface: Option<Surface<'a>>,
    ) -> Self {
        Self {
            state,
            images,
            surface,
        }
    }

    /// Move to `index` (any integer, wrapped into range) and refresh the modal
    /// image and arrows.
    pub fn try_show_image(&mut self, index: i64) -> Result<usize, NavigationError> {
        let wrapped =
            wrap_index(index, self.images.len()).ok_or(NavigationError::EmptyImageList)?;
        self.state.current_index = wrapped;
        if let Some(surface) = self.surface.as_mut() {
            surface.show_image(&self.images[wrapped], self.images.len() > 1);
        }
        trace!(requested = index, index = wrapped, "showing image");
        Ok(wrapped)
    }

    /// [`try_show_image`](Self::try_show_image), logging instead of failing.
    pub fn show_image(&mut self, index: i64) -> Option<usize> {
        match self.try_show_image(index) {
            Ok(index) => Some(index),
            Err(err) => {
                warn!(%err, requested = index, "navigation ignored");
                None
            }
        }
    }

    /// Open the modal on image `index`. Does nothing for an empty list.
    pub fn open_modal(&mut self, index: usize) -> bool {
        let index = i64::try_from(index).unwrap_or(i64::MAX);
        if self.show_image(index).is_none() {
            return false;
        }
        self.state.modal_open = true;
        if let Some(surface) = self.surface.as_mut() {
            surface.set_modal_active(true);
        }
        true
    }

    /// Close the modal, keeping the current index.
    pub fn close_modal(&mut self) -> bool {
        let was_open = std::mem::replace(&mut self.state.modal_open, false);
        if let Some(surface) = self.surface.as_mut() {
            surface.set_modal_active(false);
        }
        was_open
    }

    /// Step relative to the current image.
    pub fn step(&mut self, delta: i64) -> Option<usize> {
        let current = i64::try_from(self.state.current_index).unwrap_or(0);
        self.show_image(current + delta)
    }

    /// Carry out a listener action. Returns whether anything changed.
    pub fn apply(&mut self, action: GalleryAction) -> bool {
        match action {
            GalleryAction::Open(index) => self.open_modal(index),
            GalleryAction::Previous => self.step(-1).is_some(),
            GalleryAction::Next => self.step(1).is_some(),
            GalleryAction::Close => self.close_modal(),
        }
    }

    /// Push the current state into a freshly built surface.
    ///
    /// The index is re-wrapped into the current list first; an empty list
    /// closes the modal.
    pub fn sync(&mut self) {
        self.state.rewrap(self.images.len());
        let open = self.state.modal_open;
        if open {
            let index = self.state.current_index;
            if let Some(surface) = self.surface.as_mut() {
                surface.show_image(&self.images[index], self.images.len() > 1);
            }
        }
        if let Some(surface) = self.surface.as_mut() {
            surface.set_modal_active(open);
        }
    }
}
