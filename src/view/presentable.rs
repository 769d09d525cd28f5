// SPDX-License-Identifier: MPL-2.0
//! Recyclable page that presents exactly one media item.

use crate::domain::media::{ImageHandle, MediaType};
use crate::media::SharedItem;
use crate::view::caption::CaptionOverlay;
use crate::view::video::VideoPage;
use crate::view::zooming::ZoomingPage;
use iced_core::Rectangle;
use std::sync::atomic::{AtomicU64, Ordering};

/// Per-kind behavior shared by every page variant.
pub trait PageBehavior {
    /// The media kind this page variant can present.
    fn kind(&self) -> MediaType;

    /// Drops zoom/playback state so the page looks freshly built.
    fn reset(&mut self);

    /// Recomputes layout-dependent state for a new frame or image.
    fn update_layout(&mut self, frame: Rectangle, image: Option<&ImageHandle>);
}

/// The concrete page variant.
#[derive(Debug, Clone, PartialEq)]
pub enum PageVariant {
    Image(ZoomingPage),
    Video(VideoPage),
}

impl PageVariant {
    fn behavior(&self) -> &dyn PageBehavior {
        match self {
            Self::Image(page) => page,
            Self::Video(page) => page,
        }
    }

    fn behavior_mut(&mut self) -> &mut dyn PageBehavior {
        match self {
            Self::Image(page) => page,
            Self::Video(page) => page,
        }
    }
}

static NEXT_PAGE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a page instance. Survives recycling and rebinding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(u64);

/// One on-screen page: a frame, the item it shows, and an optional caption.
#[derive(Debug)]
pub struct PresentableView {
    id: PageId,
    frame: Rectangle,
    item: Option<SharedItem>,
    caption: Option<CaptionOverlay>,
    placeholder: Option<ImageHandle>,
    variant: PageVariant,
}

impl PresentableView {
    pub(crate) fn new(variant: PageVariant, frame: Rectangle) -> Self {
        Self {
            id: PageId(NEXT_PAGE_ID.fetch_add(1, Ordering::Relaxed)),
            frame,
            item: None,
            caption: None,
            placeholder: None,
            variant,
        }
    }

    #[must_use]
    pub fn id(&self) -> PageId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> MediaType {
        self.variant.behavior().kind()
    }

    #[must_use]
    pub fn is_video(&self) -> bool {
        self.kind().is_video()
    }

    #[must_use]
    pub fn variant(&self) -> &PageVariant {
        &self.variant
    }

    pub fn variant_mut(&mut self) -> &mut PageVariant {
        &mut self.variant
    }

    #[must_use]
    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    #[must_use]
    pub fn item(&self) -> Option<&SharedItem> {
        self.item.as_ref()
    }

    #[must_use]
    pub fn caption(&self) -> Option<&CaptionOverlay> {
        self.caption.as_ref()
    }

    pub fn caption_mut(&mut self) -> Option<&mut CaptionOverlay> {
        self.caption.as_mut()
    }

    #[must_use]
    pub fn placeholder(&self) -> Option<&ImageHandle> {
        self.placeholder.as_ref()
    }

    /// The image currently shown: the item's own image once loaded,
    /// otherwise the placeholder.
    #[must_use]
    pub fn displayed_image(&self) -> Option<ImageHandle> {
        self.item
            .as_ref()
            .and_then(|item| item.underlying_image())
            .or_else(|| self.placeholder.clone())
    }

    /// Binds `item` to this page.
    ///
    /// # Panics
    ///
    /// Panics if the item's media type does not match the page variant.
    /// The factory and the recycle pool both select pages by kind, so a
    /// mismatch is a programming error.
    pub fn bind(&mut self, item: SharedItem) {
        assert_eq!(
            item.media_type(),
            self.kind(),
            "page variant does not match the bound item's media type"
        );
        self.item = Some(item);
        self.set_max_min_zoom_scales_for_current_bounds();
    }

    /// Binds a recycled page to a new item at a new position.
    pub(crate) fn rebind(&mut self, item: SharedItem, frame: Rectangle) {
        self.frame = frame;
        self.bind(item);
    }

    /// Moves the page and recomputes its zoom bounds.
    pub fn set_frame(&mut self, frame: Rectangle) {
        self.frame = frame;
        self.set_max_min_zoom_scales_for_current_bounds();
    }

    pub fn set_max_min_zoom_scales_for_current_bounds(&mut self) {
        let image = self.displayed_image();
        self.variant
            .behavior_mut()
            .update_layout(self.frame, image.as_ref());
    }

    /// Shows a provisional image until the item's real image arrives.
    pub fn display_image(&mut self, placeholder: ImageHandle) {
        self.placeholder = Some(placeholder);
        self.set_max_min_zoom_scales_for_current_bounds();
    }

    pub fn attach_caption(&mut self, caption: CaptionOverlay) {
        self.caption = Some(caption);
    }

    /// Detaches and returns the caption overlay, if any.
    pub fn take_caption(&mut self) -> Option<CaptionOverlay> {
        self.caption.take()
    }

    /// Clears the bound item, caption and placeholder, and resets
    /// zoom/playback state. Only the identity and frame survive.
    pub fn prepare_for_reuse(&mut self) {
        self.item = None;
        self.caption = None;
        self.placeholder = None;
        self.variant.behavior_mut().reset();
    }
}
