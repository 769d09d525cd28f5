// SPDX-License-Identifier: MPL-2.0
//! The paging viewport: tiles pages for the visible index range and recycles
//! the rest.

use crate::browser::BrowserHost;
use crate::config::{CaptionLocation, PagerOptions, CONTROLS_FADE_DURATION_MS};
use crate::domain::media::MediaType;
use crate::domain::ui::Opacity;
use crate::media::{same_item, SharedItem};
use crate::pager::geometry::PageGeometry;
use crate::pager::pool::RecyclePool;
use crate::pager::transition::{TilingOutcome, Transition};
use crate::view::{make_presentable_view, CaptionOverlay, PresentableView};
use iced_core::{Point, Rectangle, Size};
use std::collections::{BTreeMap, HashSet};
use std::rc::{Rc, Weak};
use std::sync::Arc;
use std::time::Duration;

/// Horizontally paged surface that keeps a live page only for the indices
/// overlapping its bounds.
///
/// All methods run on the UI thread. The browser is held weakly; once it is
/// dropped, every operation becomes a no-op and queries behave as if the
/// collection were empty.
#[derive(Debug)]
pub struct PagingViewport {
    browser: Weak<dyn BrowserHost>,
    options: PagerOptions,
    geometry: PageGeometry,
    /// Frame in the host's coordinates, margins included.
    frame: Rectangle,
    content_offset: Point,
    content_size: Size,
    /// At most one page per index.
    visible_pages: BTreeMap<usize, PresentableView>,
    recycled_pages: RecyclePool,
}

impl PagingViewport {
    /// Creates a viewport covering `bounds` and scrolls it to the browser's
    /// current page. No page is tiled until [`tile_pages`](Self::tile_pages).
    pub fn new(bounds: Rectangle, browser: Weak<dyn BrowserHost>, options: PagerOptions) -> Self {
        let geometry = PageGeometry::new(options.side_margin);
        let mut viewport = Self {
            browser,
            options,
            geometry,
            frame: geometry.outer_frame(Rectangle::new(
                Point::ORIGIN,
                Size::new(bounds.width, bounds.height),
            )),
            content_offset: Point::ORIGIN,
            content_size: Size::ZERO,
            visible_pages: BTreeMap::new(),
            recycled_pages: RecyclePool::new(options.recycled_pages_per_kind),
        };

        let current = viewport
            .browser()
            .map_or(0, |browser| browser.current_page_index());
        viewport.update_frame(
            Rectangle::new(Point::ORIGIN, Size::new(bounds.width, bounds.height)),
            current,
        );
        viewport
    }

    fn browser(&self) -> Option<Rc<dyn BrowserHost>> {
        self.browser.upgrade()
    }

    // ------------------------------------------------------------------
    // State
    // ------------------------------------------------------------------

    #[must_use]
    pub fn options(&self) -> &PagerOptions {
        &self.options
    }

    #[must_use]
    pub fn number_of_photos(&self) -> usize {
        self.browser().map_or(0, |browser| browser.photo_count())
    }

    #[must_use]
    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    /// Visible rectangle in content coordinates.
    #[must_use]
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(
            self.content_offset,
            Size::new(self.frame.width, self.frame.height),
        )
    }

    /// Width of one page, margins included.
    #[must_use]
    pub fn page_width(&self) -> f32 {
        self.frame.width
    }

    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    #[must_use]
    pub fn content_offset(&self) -> Point {
        self.content_offset
    }

    /// Records a scroll position reported by the host.
    pub fn set_content_offset(&mut self, offset: Point) {
        self.content_offset = offset;
    }

    #[must_use]
    pub fn is_paging_enabled(&self) -> bool {
        true
    }

    #[must_use]
    pub fn shows_horizontal_scroll_indicator(&self) -> bool {
        self.options.display_paging_horizontal_scroll_indicator
    }

    #[must_use]
    pub fn shows_vertical_scroll_indicator(&self) -> bool {
        true
    }

    #[must_use]
    pub fn visible_indices(&self) -> Vec<usize> {
        self.visible_pages.keys().copied().collect()
    }

    pub fn visible_pages(&self) -> impl Iterator<Item = (usize, &PresentableView)> {
        self.visible_pages.iter().map(|(index, page)| (*index, page))
    }

    #[must_use]
    pub fn recycled_count(&self, kind: MediaType) -> usize {
        self.recycled_pages.len_of(kind)
    }

    #[must_use]
    pub fn recycled_pages(&self) -> &RecyclePool {
        &self.recycled_pages
    }

    // ------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------

    /// Drops every page, visible or recycled.
    pub fn reload(&mut self) {
        if self.browser().is_none() {
            return;
        }
        tracing::debug!(
            visible = self.visible_pages.len(),
            recycled = self.recycled_pages.len(),
            "reloading pager"
        );
        self.visible_pages.clear();
        self.recycled_pages.clear();
    }

    /// Resizes the viewport to the host `bounds`, relayouts the visible pages
    /// and their captions, and scrolls to `current_page_index`.
    pub fn update_frame(&mut self, bounds: Rectangle, current_page_index: usize) {
        if self.browser().is_none() {
            return;
        }
        self.frame = self.geometry.outer_frame(bounds);

        let viewport_bounds = self.bounds();
        let reserved = self.reserved_caption_height();
        let geometry = self.geometry;
        for (index, page) in &mut self.visible_pages {
            let page_frame = geometry.frame_for_page(viewport_bounds, *index);
            page.set_frame(page_frame);
            if let Some(caption) = page.caption_mut() {
                let height = caption.size_that_fits(page_frame.width).height;
                caption.set_frame(geometry.caption_frame(page_frame, height, reserved));
            }
        }

        self.update_content_size();
        self.update_content_offset(current_page_index);
        tracing::trace!(
            width = self.frame.width,
            height = self.frame.height,
            current_page_index,
            "viewport frame updated"
        );
    }

    pub fn update_content_size(&mut self) {
        self.content_size = self
            .geometry
            .content_size(self.bounds(), self.number_of_photos());
    }

    pub fn update_content_offset(&mut self, index: usize) {
        self.content_offset = self.geometry.offset_for_page(self.bounds(), index);
    }

    /// Frame the page at `index` occupies, in content coordinates.
    #[must_use]
    pub fn frame_for_page_at_index(&self, index: usize) -> Rectangle {
        self.geometry.frame_for_page(self.bounds(), index)
    }

    /// Frame `caption` would get below the page at `index`.
    #[must_use]
    pub fn frame_for_caption_view(&self, caption: &CaptionOverlay, index: usize) -> Rectangle {
        let page_frame = self.frame_for_page_at_index(index);
        let height = caption.size_that_fits(page_frame.width).height;
        self.geometry
            .caption_frame(page_frame, height, self.reserved_caption_height())
    }

    fn reserved_caption_height(&self) -> f32 {
        self.browser().map_or(0.0, |browser| {
            match self.options.caption_location {
                CaptionLocation::Basic => browser.pagination_frame().height,
                CaptionLocation::Bottom => browser.toolbar_frame().height,
            }
        })
    }

    // ------------------------------------------------------------------
    // Tiling
    // ------------------------------------------------------------------

    /// Reconciles the live pages with the index range overlapping the
    /// current bounds.
    ///
    /// Pages outside the range are reset and moved to the recycle pool, the
    /// pool is trimmed to its per-kind cap, and every index in range without
    /// a page gets one. Calling it again with unchanged bounds changes
    /// nothing.
    pub fn tile_pages(&mut self) -> TilingOutcome {
        let Some(browser) = self.browser() else {
            return TilingOutcome::default();
        };

        let bounds = self.bounds();
        let range = self.geometry.visible_range(bounds, browser.photo_count());
        let mut outcome = TilingOutcome::default();

        let out_of_range: Vec<usize> = self
            .visible_pages
            .keys()
            .copied()
            .filter(|index| !range.as_ref().is_some_and(|r| r.contains(index)))
            .collect();
        for index in out_of_range {
            if let Some(mut page) = self.visible_pages.remove(&index) {
                page.prepare_for_reuse();
                self.recycled_pages.push(page);
                outcome.detached.push(index);
            }
        }

        outcome.dropped = self.recycled_pages.trim();

        if let Some(range) = range {
            let controls_hidden = browser.are_controls_hidden();
            let thumbnail = browser.sender_origin_image();
            let init_page_index = browser.init_page_index();
            let reserved = self.reserved_caption_height();

            for index in range {
                if self.visible_pages.contains_key(&index) {
                    continue;
                }
                let Some(item) = browser.photo_at(index) else {
                    continue;
                };

                let frame = self.geometry.frame_for_page(bounds, index);
                let mut page = match self.reusable_page(item.media_type()) {
                    Some(mut page) => {
                        page.rebind(Arc::clone(&item), frame);
                        outcome.reused += 1;
                        page
                    }
                    None => make_presentable_view(Arc::clone(&item), frame),
                };

                if let Some(thumbnail) = &thumbnail {
                    if index == init_page_index && item.underlying_image().is_none() {
                        page.display_image(thumbnail.clone());
                    }
                }

                let caption = browser
                    .caption_view_for_index(index)
                    .or_else(|| CaptionOverlay::for_item(&*item));
                if let Some(mut caption) = caption {
                    let height = caption.size_that_fits(frame.width).height;
                    caption.set_frame(self.geometry.caption_frame(frame, height, reserved));
                    caption.set_opacity(Opacity::for_controls_hidden(controls_hidden));
                    page.attach_caption(caption);
                }

                self.visible_pages.insert(index, page);
                outcome.attached.push(index);
            }
        }

        if !outcome.is_unchanged() {
            tracing::debug!(
                attached = ?outcome.attached,
                detached = ?outcome.detached,
                reused = outcome.reused,
                dropped = outcome.dropped,
                "tiled pages"
            );
        }
        outcome
    }

    fn reusable_page(&mut self, kind: MediaType) -> Option<PresentableView> {
        if self.options.reuse_recycled_pages {
            self.recycled_pages.take(kind)
        } else {
            None
        }
    }

    // ------------------------------------------------------------------
    // Prefetch, deletion, controls
    // ------------------------------------------------------------------

    /// Starts loading the neighbors of `item` once it is the current page.
    ///
    /// Does nothing unless `item` is displayed at `current_page_index`.
    /// Neighbors that already hold an image are skipped, as are indices
    /// beyond either end of the collection. Returns the indices a load was
    /// requested for.
    pub fn load_adjacent_photos_if_necessary(
        &self,
        item: &SharedItem,
        current_page_index: usize,
    ) -> Vec<usize> {
        let Some(browser) = self.browser() else {
            return Vec::new();
        };
        let Some(page_index) = self.index_displaying_item(item) else {
            return Vec::new();
        };
        if page_index != current_page_index {
            return Vec::new();
        }

        let count = browser.photo_count();
        let mut triggered = Vec::new();
        for distance in 1..=self.options.prefetch_count.value() {
            let previous = page_index.checked_sub(distance);
            let next = Some(page_index + distance).filter(|next| *next < count);
            for index in [previous, next].into_iter().flatten() {
                let Some(neighbor) = browser.photo_at(index) else {
                    continue;
                };
                if neighbor.underlying_image().is_none() {
                    neighbor.load_underlying_image_and_notify();
                    triggered.push(index);
                }
            }
        }

        if !triggered.is_empty() {
            tracing::debug!(page_index, ?triggered, "prefetching neighbors");
        }
        triggered
    }

    /// Removes the caption of the first visible page and returns it.
    ///
    /// Only meaningful while a single page is visible: the browser's delete
    /// control is hidden during swipes, so the first visible page is the
    /// one being deleted.
    pub fn delete_image(&mut self) -> Option<CaptionOverlay> {
        if self.number_of_photos() == 0 {
            return None;
        }
        if self.visible_pages.len() > 1 {
            tracing::warn!(
                visible = ?self.visible_indices(),
                "deleting caption while several pages are visible"
            );
        }
        self.visible_pages
            .values_mut()
            .next()
            .and_then(PresentableView::take_caption)
    }

    /// Scrolls so that `frame` (a page frame) lines up with the viewport.
    pub fn jump_to_page_at_index(&mut self, frame: Rectangle) -> Option<Transition> {
        self.browser()?;
        let from = self.content_offset;
        let to = Point::new(frame.x - self.geometry.side_margin(), 0.0);
        self.content_offset = to;
        Some(Transition::Scroll {
            from,
            to,
            animated: true,
        })
    }

    /// Fades every attached caption in or out.
    ///
    /// The fade lists no caption once the browser is gone.
    pub fn set_controls_hidden(&mut self, hidden: bool) -> Transition {
        let opacity = Opacity::for_controls_hidden(hidden);
        let mut captions = Vec::new();
        if self.browser().is_some() {
            let mut seen = HashSet::new();
            for caption in self
                .visible_pages
                .values_mut()
                .filter_map(PresentableView::caption_mut)
            {
                caption.set_opacity(opacity);
                if seen.insert(caption.id()) {
                    captions.push(caption.id());
                }
            }
        }

        Transition::Fade {
            captions,
            opacity,
            duration: Duration::from_millis(CONTROLS_FADE_DURATION_MS),
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    #[must_use]
    pub fn page_displayed_at_index(&self, index: usize) -> Option<&PresentableView> {
        self.visible_pages.get(&index)
    }

    pub fn page_displayed_at_index_mut(&mut self, index: usize) -> Option<&mut PresentableView> {
        self.visible_pages.get_mut(&index)
    }

    /// Page bound to exactly this item (by identity).
    #[must_use]
    pub fn page_displaying_item(&self, item: &SharedItem) -> Option<&PresentableView> {
        self.index_displaying_item(item)
            .and_then(|index| self.visible_pages.get(&index))
    }

    /// Index of the page bound to exactly this item (by identity).
    #[must_use]
    pub fn index_displaying_item(&self, item: &SharedItem) -> Option<usize> {
        self.visible_pages
            .iter()
            .find(|(_, page)| page.item().is_some_and(|bound| same_item(bound, item)))
            .map(|(index, _)| *index)
    }

    #[must_use]
    pub fn is_video(&self, index: usize) -> bool {
        self.page_displayed_at_index(index)
            .is_some_and(PresentableView::is_video)
    }

    /// Attached caption overlays, each listed once.
    #[must_use]
    pub fn caption_overlays(&self) -> Vec<&CaptionOverlay> {
        let mut seen = HashSet::new();
        self.visible_pages
            .values()
            .filter_map(PresentableView::caption)
            .filter(|caption| seen.insert(caption.id()))
            .collect()
    }
}
