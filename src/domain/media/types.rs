// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

use std::sync::Arc;

/// The kind of media an item holds. Also the kind of page that displays it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// Still photo, displayed in a zoomable page.
    Image,
    /// Video, displayed in a player page.
    Video,
}

impl MediaType {
    /// Returns true for [`MediaType::Video`].
    #[must_use]
    pub fn is_video(self) -> bool {
        matches!(self, Self::Video)
    }
}

/// Decoded image shared between a media item and the pages showing it.
///
/// Cloning is cheap: the pixel buffer lives behind an `Arc`.
///
/// # Example
///
/// ```
/// use lens_pager::domain::media::ImageHandle;
///
/// let thumbnail = ImageHandle::from_rgba(4, 2, vec![0u8; 4 * 2 * 4]);
/// assert_eq!(thumbnail.width(), 4);
/// assert!((thumbnail.aspect_ratio() - 2.0).abs() < f32::EPSILON);
/// ```
#[derive(Debug, Clone)]
pub struct ImageHandle {
    width: u32,
    height: u32,
    rgba_bytes: Arc<Vec<u8>>,
}

impl ImageHandle {
    /// Creates a handle from dimensions and shared RGBA pixel data.
    ///
    /// # Panics
    ///
    /// Panics if the pixel data length doesn't match `width * height * 4`.
    #[must_use]
    pub fn new(width: u32, height: u32, rgba_bytes: Arc<Vec<u8>>) -> Self {
        let expected_len = (width as usize) * (height as usize) * 4;
        assert_eq!(
            rgba_bytes.len(),
            expected_len,
            "RGBA data length mismatch: expected {expected_len}, got {}",
            rgba_bytes.len()
        );

        Self {
            width,
            height,
            rgba_bytes,
        }
    }

    /// Creates a handle from dimensions and owned RGBA pixel data.
    ///
    /// # Panics
    ///
    /// Panics if the pixel data length doesn't match `width * height * 4`.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, rgba_bytes: Vec<u8>) -> Self {
        Self::new(width, height, Arc::new(rgba_bytes))
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Returns width / height, or 1.0 for a degenerate image.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// Returns true if both handles share the same pixel buffer.
    #[must_use]
    pub fn same_pixels(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.rgba_bytes, &other.rgba_bytes)
    }
}
