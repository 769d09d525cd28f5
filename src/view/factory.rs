// SPDX-License-Identifier: MPL-2.0
//! Maps a media item to the page variant that can present it.

use crate::domain::media::MediaType;
use crate::media::SharedItem;
use crate::view::presentable::{PageVariant, PresentableView};
use crate::view::video::VideoPage;
use crate::view::zooming::ZoomingPage;
use iced_core::Rectangle;

/// Builds a page of the right kind for `item`, placed at `frame` and bound
/// to the item.
#[must_use]
pub fn make_presentable_view(item: SharedItem, frame: Rectangle) -> PresentableView {
    let variant = match item.media_type() {
        MediaType::Image => PageVariant::Image(ZoomingPage::default()),
        MediaType::Video => PageVariant::Video(VideoPage::default()),
    };

    let mut view = PresentableView::new(variant, frame);
    view.bind(item);
    view
}
