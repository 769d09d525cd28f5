// SPDX-License-Identifier: MPL-2.0
//! Caption overlay placed below a page.

use crate::config::{CAPTION_GLYPH_WIDTH, CAPTION_LINE_HEIGHT, CAPTION_PADDING};
use crate::domain::ui::Opacity;
use crate::media::MediaItem;
use iced_core::{Point, Rectangle, Size};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CAPTION_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a caption overlay. Clones of an overlay share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CaptionId(u64);

/// Caption text rendered on top of the pager, aligned with one page.
#[derive(Debug, Clone)]
pub struct CaptionOverlay {
    id: CaptionId,
    text: String,
    frame: Rectangle,
    opacity: Opacity,
}

impl CaptionOverlay {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: CaptionId(NEXT_CAPTION_ID.fetch_add(1, Ordering::Relaxed)),
            text: text.into(),
            frame: Rectangle::new(Point::ORIGIN, Size::ZERO),
            opacity: Opacity::OPAQUE,
        }
    }

    /// Builds the default overlay for an item, if the item has a caption.
    #[must_use]
    pub fn for_item(item: &dyn MediaItem) -> Option<Self> {
        item.caption().map(Self::new)
    }

    #[must_use]
    pub fn id(&self) -> CaptionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    pub fn set_frame(&mut self, frame: Rectangle) {
        self.frame = frame;
    }

    #[must_use]
    pub fn opacity(&self) -> Opacity {
        self.opacity
    }

    pub fn set_opacity(&mut self, opacity: Opacity) {
        self.opacity = opacity;
    }

    /// Size needed to show the whole caption at the given width.
    ///
    /// Wrapping is estimated from an average glyph advance; explicit line
    /// breaks always start a new line.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn size_that_fits(&self, width: f32) -> Size {
        let text_width = (width - 2.0 * CAPTION_PADDING).max(CAPTION_GLYPH_WIDTH);
        let per_line = ((text_width / CAPTION_GLYPH_WIDTH).floor() as usize).max(1);

        let lines = self
            .text
            .lines()
            .map(|line| line.chars().count().div_ceil(per_line).max(1))
            .sum::<usize>()
            .max(1);

        Size::new(
            width,
            lines as f32 * CAPTION_LINE_HEIGHT + 2.0 * CAPTION_PADDING,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::Photo;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn clones_keep_identity() {
        let caption = CaptionOverlay::new("Sunset");
        let copy = caption.clone();
        let other = CaptionOverlay::new("Sunset");

        assert_eq!(caption.id(), copy.id());
        assert_ne!(caption.id(), other.id());
    }

    #[test]
    fn for_item_requires_caption_text() {
        assert!(CaptionOverlay::for_item(&Photo::image()).is_none());

        let caption = CaptionOverlay::for_item(&Photo::image().with_caption("Harbor"));
        assert_eq!(caption.map(|c| c.text().to_string()), Some("Harbor".to_string()));
    }

    #[test]
    fn short_caption_is_one_line() {
        let caption = CaptionOverlay::new("Hi");
        let size = caption.size_that_fits(300.0);

        assert_abs_diff_eq!(size.width, 300.0);
        assert_abs_diff_eq!(
            size.height,
            CAPTION_LINE_HEIGHT + 2.0 * CAPTION_PADDING
        );
    }

    #[test]
    fn long_caption_wraps() {
        // 100 px of text area fits 12 glyphs per line.
        let caption = CaptionOverlay::new("a".repeat(30));
        let size = caption.size_that_fits(100.0 + 2.0 * CAPTION_PADDING);

        assert_abs_diff_eq!(
            size.height,
            3.0 * CAPTION_LINE_HEIGHT + 2.0 * CAPTION_PADDING
        );
    }

    #[test]
    fn explicit_line_breaks_add_lines() {
        let caption = CaptionOverlay::new("first\nsecond");
        let size = caption.size_that_fits(300.0);

        assert_abs_diff_eq!(
            size.height,
            2.0 * CAPTION_LINE_HEIGHT + 2.0 * CAPTION_PADDING
        );
    }

    #[test]
    fn new_caption_is_opaque() {
        assert_eq!(CaptionOverlay::new("x").opacity(), Opacity::OPAQUE);
    }
}
