// SPDX-License-Identifier: MPL-2.0
//! Index ↔ viewport geometry of the paging surface.
//!
//! Pages are laid out side by side, each one `page_width` wide, where the
//! page width is the viewport width *including* a side margin on both edges.
//! The visible part of page `i` is inset by the margin, so neighbors are
//! separated by a `2 × margin` gap while swiping.

use iced_core::{Point, Rectangle, Size};
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    side_margin: f32,
}

impl PageGeometry {
    #[must_use]
    pub fn new(side_margin: f32) -> Self {
        Self {
            side_margin: side_margin.max(0.0),
        }
    }

    #[must_use]
    pub fn side_margin(&self) -> f32 {
        self.side_margin
    }

    /// Viewport frame for host `bounds`: widened by the margin on both sides.
    #[must_use]
    pub fn outer_frame(&self, bounds: Rectangle) -> Rectangle {
        Rectangle {
            x: bounds.x - self.side_margin,
            y: bounds.y,
            width: bounds.width + 2.0 * self.side_margin,
            height: bounds.height,
        }
    }

    /// Frame of page `index`, in content coordinates.
    ///
    /// `bounds` is the viewport's visible rectangle (content offset + size).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn frame_for_page(&self, bounds: Rectangle, index: usize) -> Rectangle {
        Rectangle {
            x: bounds.width * index as f32 + self.side_margin,
            y: bounds.y,
            width: bounds.width - 2.0 * self.side_margin,
            height: bounds.height,
        }
    }

    /// First index overlapping `bounds`, clamped to `[0, count - 1]`.
    #[must_use]
    pub fn first_index(&self, bounds: Rectangle, count: usize) -> usize {
        clamp_index(
            ((bounds.x + self.side_margin * 2.0) / bounds.width).floor(),
            count,
        )
    }

    /// Last index overlapping `bounds`, clamped to `[0, count - 1]`.
    #[must_use]
    pub fn last_index(&self, bounds: Rectangle, count: usize) -> usize {
        let max_x = bounds.x + bounds.width;
        clamp_index(
            ((max_x - self.side_margin * 2.0 - 1.0) / bounds.width).floor(),
            count,
        )
    }

    /// Inclusive range of indices that need a live page.
    ///
    /// `None` for an empty collection, a degenerate viewport, or a viewport
    /// so narrow that no page clears the margins.
    #[must_use]
    pub fn visible_range(&self, bounds: Rectangle, count: usize) -> Option<RangeInclusive<usize>> {
        if count == 0 || bounds.width.is_nan() || bounds.width <= 0.0 {
            return None;
        }
        let first = self.first_index(bounds, count);
        let last = self.last_index(bounds, count);
        (first <= last).then_some(first..=last)
    }

    /// Scrollable content size for `count` pages.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn content_size(&self, bounds: Rectangle, count: usize) -> Size {
        Size::new(bounds.width * count as f32, bounds.height)
    }

    /// Content offset that shows page `index`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn offset_for_page(&self, bounds: Rectangle, index: usize) -> Point {
        Point::new(index as f32 * bounds.width, 0.0)
    }

    /// Frame of a caption below `page_frame`, above `reserved_height` of
    /// browser chrome.
    #[must_use]
    pub fn caption_frame(
        &self,
        page_frame: Rectangle,
        caption_height: f32,
        reserved_height: f32,
    ) -> Rectangle {
        Rectangle {
            x: page_frame.x,
            y: page_frame.height - caption_height - reserved_height,
            width: page_frame.width,
            height: caption_height,
        }
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::new(crate::config::SIDE_MARGIN)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_index(raw: f32, count: usize) -> usize {
    let last = count.saturating_sub(1);
    if raw.is_nan() || raw <= 0.0 {
        return 0;
    }
    (raw as usize).min(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn viewport(x: f32, width: f32) -> Rectangle {
        Rectangle::new(Point::new(x, 0.0), Size::new(width, 400.0))
    }

    #[test]
    fn outer_frame_adds_margin_on_both_edges() {
        let geometry = PageGeometry::new(10.0);
        let frame = geometry.outer_frame(Rectangle::new(Point::ORIGIN, Size::new(280.0, 400.0)));

        assert_abs_diff_eq!(frame.x, -10.0);
        assert_abs_diff_eq!(frame.width, 300.0);
        assert_abs_diff_eq!(frame.height, 400.0);
    }

    #[test]
    fn page_frames_are_inset_by_margin() {
        let geometry = PageGeometry::new(10.0);
        let frame = geometry.frame_for_page(viewport(0.0, 300.0), 3);

        assert_abs_diff_eq!(frame.x, 910.0);
        assert_abs_diff_eq!(frame.width, 280.0);
    }

    #[test]
    fn single_page_at_rest() {
        let geometry = PageGeometry::new(10.0);

        assert_eq!(geometry.visible_range(viewport(0.0, 300.0), 10), Some(0..=0));
        assert_eq!(geometry.visible_range(viewport(300.0, 300.0), 10), Some(1..=1));
    }

    #[test]
    fn two_pages_while_swiping() {
        let geometry = PageGeometry::new(10.0);
        assert_eq!(geometry.visible_range(viewport(150.0, 300.0), 10), Some(0..=1));
    }

    #[test]
    fn margin_hides_barely_visible_neighbor() {
        let geometry = PageGeometry::new(10.0);
        // Page 1 starts at 300 + 10; 15 px of overscroll shows only the gap.
        assert_eq!(geometry.visible_range(viewport(15.0, 300.0), 10), Some(0..=0));
        assert_eq!(geometry.visible_range(viewport(285.0, 300.0), 10), Some(1..=1));
    }

    #[test]
    fn out_of_bounds_offsets_are_clamped() {
        let geometry = PageGeometry::new(10.0);

        assert_eq!(geometry.visible_range(viewport(-900.0, 300.0), 10), Some(0..=0));
        assert_eq!(geometry.visible_range(viewport(9_000.0, 300.0), 10), Some(9..=9));
    }

    #[test]
    fn empty_collection_or_zero_width_has_no_range() {
        let geometry = PageGeometry::new(10.0);

        assert_eq!(geometry.visible_range(viewport(0.0, 300.0), 0), None);
        assert_eq!(geometry.visible_range(viewport(0.0, 0.0), 10), None);
    }

    #[test]
    fn too_narrow_viewport_has_no_range() {
        let geometry = PageGeometry::new(10.0);
        assert_eq!(geometry.visible_range(viewport(15.0, 30.0), 10), None);
    }

    #[test]
    fn content_size_and_offsets_scale_with_page_width() {
        let geometry = PageGeometry::new(10.0);
        let bounds = viewport(0.0, 300.0);

        assert_abs_diff_eq!(geometry.content_size(bounds, 10).width, 3000.0);
        assert_abs_diff_eq!(geometry.offset_for_page(bounds, 4).x, 1200.0);
    }

    #[test]
    fn caption_sits_above_reserved_chrome() {
        let geometry = PageGeometry::new(10.0);
        let page = geometry.frame_for_page(viewport(0.0, 300.0), 1);
        let caption = geometry.caption_frame(page, 36.0, 44.0);

        assert_abs_diff_eq!(caption.x, 310.0);
        assert_abs_diff_eq!(caption.y, 400.0 - 36.0 - 44.0);
        assert_abs_diff_eq!(caption.width, 280.0);
        assert_abs_diff_eq!(caption.height, 36.0);
    }
}
