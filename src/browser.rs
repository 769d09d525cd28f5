// SPDX-License-Identifier: MPL-2.0
//! The owning browser, as seen by the pager.
//!
//! The pager holds only a weak reference to its host. Everything it needs
//! from the browser, its delegate and its transition animator goes through
//! [`BrowserHost`]; the optional hooks have neutral defaults.

use crate::domain::media::ImageHandle;
use crate::media::SharedItem;
use crate::view::CaptionOverlay;
use iced_core::{Point, Rectangle, Size};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

pub trait BrowserHost {
    /// Number of items in the collection.
    fn photo_count(&self) -> usize;

    /// Item at `index`, or `None` when out of range.
    fn photo_at(&self, index: usize) -> Option<SharedItem>;

    fn current_page_index(&self) -> usize;

    /// Page the browser was opened on.
    fn init_page_index(&self) -> usize;

    fn are_controls_hidden(&self) -> bool;

    /// Delegate override for the caption of `index`.
    fn caption_view_for_index(&self, _index: usize) -> Option<CaptionOverlay> {
        None
    }

    /// Thumbnail the opening transition started from, shown on the initial
    /// page until its real image loads.
    fn sender_origin_image(&self) -> Option<ImageHandle> {
        None
    }

    fn pagination_frame(&self) -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::ZERO)
    }

    fn toolbar_frame(&self) -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::ZERO)
    }
}

/// In-memory browser host backed by a plain list of items.
#[derive(Debug)]
pub struct StaticBrowser {
    photos: RefCell<Vec<SharedItem>>,
    current_page_index: Cell<usize>,
    init_page_index: usize,
    controls_hidden: Cell<bool>,
    sender_origin_image: RefCell<Option<ImageHandle>>,
    caption_overrides: RefCell<HashMap<usize, CaptionOverlay>>,
    pagination_frame: Rectangle,
    toolbar_frame: Rectangle,
}

impl StaticBrowser {
    #[must_use]
    pub fn new(photos: Vec<SharedItem>) -> Self {
        Self {
            photos: RefCell::new(photos),
            current_page_index: Cell::new(0),
            init_page_index: 0,
            controls_hidden: Cell::new(false),
            sender_origin_image: RefCell::new(None),
            caption_overrides: RefCell::new(HashMap::new()),
            pagination_frame: Rectangle::new(Point::ORIGIN, Size::ZERO),
            toolbar_frame: Rectangle::new(Point::ORIGIN, Size::ZERO),
        }
    }

    /// Opens the browser on `index`.
    #[must_use]
    pub fn with_init_page_index(mut self, index: usize) -> Self {
        self.init_page_index = index;
        self.current_page_index.set(index);
        self
    }

    #[must_use]
    pub fn with_sender_origin_image(self, image: ImageHandle) -> Self {
        self.sender_origin_image.replace(Some(image));
        self
    }

    #[must_use]
    pub fn with_pagination_frame(mut self, frame: Rectangle) -> Self {
        self.pagination_frame = frame;
        self
    }

    #[must_use]
    pub fn with_toolbar_frame(mut self, frame: Rectangle) -> Self {
        self.toolbar_frame = frame;
        self
    }

    /// Registers a caption that replaces the item's own caption at `index`.
    pub fn set_caption_override(&self, index: usize, caption: CaptionOverlay) {
        self.caption_overrides.borrow_mut().insert(index, caption);
    }

    pub fn set_current_page_index(&self, index: usize) {
        self.current_page_index.set(index);
    }

    pub fn set_controls_hidden(&self, hidden: bool) {
        self.controls_hidden.set(hidden);
    }

    /// Forgets the transition thumbnail once the opening animation is over.
    pub fn clear_sender_origin_image(&self) {
        self.sender_origin_image.replace(None);
    }

    /// Removes the item at `index`. The pager must be reloaded afterwards.
    pub fn remove_photo(&self, index: usize) -> Option<SharedItem> {
        let mut photos = self.photos.borrow_mut();
        (index < photos.len()).then(|| photos.remove(index))
    }
}

impl BrowserHost for StaticBrowser {
    fn photo_count(&self) -> usize {
        self.photos.borrow().len()
    }

    fn photo_at(&self, index: usize) -> Option<SharedItem> {
        self.photos.borrow().get(index).cloned()
    }

    fn current_page_index(&self) -> usize {
        self.current_page_index.get()
    }

    fn init_page_index(&self) -> usize {
        self.init_page_index
    }

    fn are_controls_hidden(&self) -> bool {
        self.controls_hidden.get()
    }

    fn caption_view_for_index(&self, index: usize) -> Option<CaptionOverlay> {
        self.caption_overrides.borrow().get(&index).cloned()
    }

    fn sender_origin_image(&self) -> Option<ImageHandle> {
        self.sender_origin_image.borrow().clone()
    }

    fn pagination_frame(&self) -> Rectangle {
        self.pagination_frame
    }

    fn toolbar_frame(&self) -> Rectangle {
        self.toolbar_frame
    }
}
