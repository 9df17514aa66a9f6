//! Image gallery cursor and display mode.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

/// Current image index plus fit/natural display mode.
///
/// Navigation wraps at both ends. With zero images every operation is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryState {
    index: usize,
    len: usize,
    fit: bool,
}

impl GalleryState {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len, fit: true }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Arrows and thumbnails are shown only for more than one image.
    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = self.index.checked_sub(1).unwrap_or(self.len - 1);
        }
    }

    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    pub fn toggle_zoom(&mut self) {
        self.fit = !self.fit;
    }

    /// Whether the main image is fitted into the frame (`contain`).
    pub fn is_fit(&self) -> bool {
        self.fit
    }

    pub fn object_fit(&self) -> &'static str {
        if self.fit { "contain" } else { "cover" }
    }

    /// `"2 / 5"`, one-based.
    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.index + 1, self.len)
    }
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new(0)
    }
}
