//! Navigation state and index wrapping.

/// Mutable interaction state of a gallery.
///
/// `current_index` is always a valid index into the current image list when
/// the list is non-empty, and `0` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GalleryState {
    pub current_index: usize,
    pub modal_open: bool,
}

impl GalleryState {
    /// Closed modal at the first image.
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the index back into range for a list of `len` images.
    ///
    /// An empty list also closes the modal: there is nothing to show.
    pub fn rewrap(&mut self, len: usize) {
        match wrap_index(self.current_index as i64, len) {
            Some(index) => self.current_index = index,
            None => {
                self.current_index = 0;
                self.modal_open = false;
            }
        }
    }
}

/// Map any integer onto `0..len` by euclidean remainder.
///
/// Returns `None` when `len == 0`.
pub fn wrap_index(index: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len = i64::try_from(len).ok()?;
    usize::try_from(index.rem_euclid(len)).ok()
}
