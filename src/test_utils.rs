// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and pager fixtures.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

// Re-export approx macros for convenient use in tests
pub use approx::assert_abs_diff_eq;

use crate::browser::StaticBrowser;
use crate::config::PagerOptions;
use crate::domain::media::ImageHandle;
use crate::media::{Photo, SharedItem};
use crate::pager::PagingViewport;
use iced_core::{Point, Rectangle, Size};
use std::rc::{Rc, Weak};
use std::sync::Arc;

/// Host bounds whose pages are 300 px wide once the 10 px margins are added.
pub fn host_bounds() -> Rectangle {
    Rectangle::new(Point::ORIGIN, Size::new(280.0, 400.0))
}

pub fn solid_image(width: u32, height: u32) -> ImageHandle {
    ImageHandle::from_rgba(width, height, vec![0u8; (width * height * 4) as usize])
}

/// `count` unloaded still photos.
pub fn photos(count: usize) -> Vec<Arc<Photo>> {
    (0..count).map(|_| Arc::new(Photo::image())).collect()
}

pub fn shared(photos: &[Arc<Photo>]) -> Vec<SharedItem> {
    photos
        .iter()
        .map(|photo| Arc::clone(photo) as SharedItem)
        .collect()
}

pub fn pager_for(browser: &Rc<StaticBrowser>, options: PagerOptions) -> PagingViewport {
    let host: Weak<StaticBrowser> = Rc::downgrade(browser);
    PagingViewport::new(host_bounds(), host, options)
}
