// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Paging**: Side margin and recycle pool bounds
//! - **Prefetch**: How many neighbors are loaded ahead of time
//! - **Zoom**: Zoom scale bounds for image pages
//! - **Caption**: Overlay metrics and fade timing

// ==========================================================================
// Paging Defaults
// ==========================================================================

/// Horizontal inset added on both sides of the viewport so that
/// neighboring pages are separated by a gap while swiping.
pub const SIDE_MARGIN: f32 = 10.0;

/// Number of detached pages kept per media kind for reuse.
pub const RECYCLED_PAGES_PER_KIND: usize = 2;

/// Whether recycled pages are rebound instead of constructing new ones.
pub const DEFAULT_REUSE_RECYCLED_PAGES: bool = true;

/// Whether the horizontal scroll indicator is shown while paging.
pub const DEFAULT_DISPLAY_PAGING_HORIZONTAL_SCROLL_INDICATOR: bool = true;

// ==========================================================================
// Prefetch Defaults
// ==========================================================================

/// Default number of neighbors to load in each direction.
pub const DEFAULT_PREFETCH_COUNT: usize = 1;

/// Minimum prefetch count (prefetching disabled).
pub const MIN_PREFETCH_COUNT: usize = 0;

/// Maximum prefetch count.
pub const MAX_PREFETCH_COUNT: usize = 8;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Zoom scale of a page that has no image to fit yet.
pub const DEFAULT_ZOOM_SCALE: f32 = 1.0;

/// Largest zoom scale an image page allows (800%).
pub const MAX_ZOOM_SCALE: f32 = 8.0;

// ==========================================================================
// Caption Defaults
// ==========================================================================

/// Duration of the caption fade when controls are shown or hidden.
pub const CONTROLS_FADE_DURATION_MS: u64 = 350;

/// Height of one rendered caption line.
pub const CAPTION_LINE_HEIGHT: f32 = 20.0;

/// Vertical and horizontal padding around caption text.
pub const CAPTION_PADDING: f32 = 8.0;

/// Average advance of one caption glyph, used to estimate wrapping.
pub const CAPTION_GLYPH_WIDTH: f32 = 8.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(SIDE_MARGIN >= 0.0);
    assert!(RECYCLED_PAGES_PER_KIND > 0);

    assert!(DEFAULT_PREFETCH_COUNT >= MIN_PREFETCH_COUNT);
    assert!(DEFAULT_PREFETCH_COUNT <= MAX_PREFETCH_COUNT);

    assert!(DEFAULT_ZOOM_SCALE > 0.0);
    assert!(MAX_ZOOM_SCALE >= DEFAULT_ZOOM_SCALE);

    assert!(CONTROLS_FADE_DURATION_MS > 0);
    assert!(CAPTION_LINE_HEIGHT > 0.0);
    assert!(CAPTION_GLYPH_WIDTH > 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paging_defaults_match_viewer_behavior() {
        assert_eq!(SIDE_MARGIN, 10.0);
        assert_eq!(RECYCLED_PAGES_PER_KIND, 2);
    }

    #[test]
    fn prefetch_defaults_are_valid() {
        assert_eq!(DEFAULT_PREFETCH_COUNT, 1);
        assert!(DEFAULT_PREFETCH_COUNT <= MAX_PREFETCH_COUNT);
    }

    #[test]
    fn fade_duration_is_350ms() {
        assert_eq!(CONTROLS_FADE_DURATION_MS, 350);
    }
}
