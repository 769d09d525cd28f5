// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Opacity
// =============================================================================

/// Overlay opacity, guaranteed to be within 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opacity(f32);

impl Opacity {
    pub const TRANSPARENT: Self = Self(0.0);
    pub const OPAQUE: Self = Self(1.0);

    /// Creates a new opacity, clamping the value to the valid range.
    /// NaN is treated as fully transparent.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::TRANSPARENT;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Opacity of chrome that follows the controls visibility.
    #[must_use]
    pub fn for_controls_hidden(hidden: bool) -> Self {
        if hidden {
            Self::TRANSPARENT
        } else {
            Self::OPAQUE
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn is_transparent(self) -> bool {
        self.0 <= 0.0
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self::OPAQUE
    }
}

// =============================================================================
// PrefetchCount
// =============================================================================

/// Number of neighbors to prefetch in each direction (0–8).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefetchCount(usize);

impl PrefetchCount {
    /// Creates a new prefetch count, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        use crate::config::{MAX_PREFETCH_COUNT, MIN_PREFETCH_COUNT};
        Self(value.clamp(MIN_PREFETCH_COUNT, MAX_PREFETCH_COUNT))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true if prefetching is turned off.
    #[must_use]
    pub fn is_disabled(self) -> bool {
        self.0 == 0
    }
}

impl Default for PrefetchCount {
    fn default() -> Self {
        Self(crate::config::DEFAULT_PREFETCH_COUNT)
    }
}

// =============================================================================
// ZoomScale
// =============================================================================

/// Zoom scale factor of an image page (1.0 = native pixels).
///
/// Always strictly positive. There is no upper bound: a small image fitted
/// into a large page may need a scale above the user zoom limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomScale(f32);

impl ZoomScale {
    /// Smallest representable scale, used when fitting a huge image.
    pub const MIN: f32 = 0.001;

    /// Creates a new zoom scale, raising tiny values to [`Self::MIN`].
    /// Non-finite values fall back to the default scale.
    #[must_use]
    pub fn new(value: f32) -> Self {
        use crate::config::DEFAULT_ZOOM_SCALE;
        if !value.is_finite() {
            return Self(DEFAULT_ZOOM_SCALE);
        }
        Self(value.max(Self::MIN))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the scale as a percentage (e.g., 1.0 → 100%).
    #[must_use]
    pub fn as_percent(self) -> f32 {
        self.0 * 100.0
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self(crate::config::DEFAULT_ZOOM_SCALE)
    }
}
