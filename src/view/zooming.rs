// SPDX-License-Identifier: MPL-2.0
//! Zoomable image page.

use crate::config::MAX_ZOOM_SCALE;
use crate::domain::media::{ImageHandle, MediaType};
use crate::domain::ui::ZoomScale;
use crate::view::presentable::PageBehavior;
use iced_core::Rectangle;

/// Zoom bounds of an image page, derived from its frame and image size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZoomingPage {
    min_scale: ZoomScale,
    max_scale: ZoomScale,
    zoom_scale: ZoomScale,
}

impl ZoomingPage {
    /// Scale at which the whole image fits inside the page.
    #[must_use]
    pub fn min_scale(&self) -> ZoomScale {
        self.min_scale
    }

    #[must_use]
    pub fn max_scale(&self) -> ZoomScale {
        self.max_scale
    }

    #[must_use]
    pub fn zoom_scale(&self) -> ZoomScale {
        self.zoom_scale
    }

    /// Applies a user zoom, kept within the current bounds.
    pub fn set_zoom_scale(&mut self, scale: f32) {
        let clamped = scale.clamp(self.min_scale.value(), self.max_scale.value());
        self.zoom_scale = ZoomScale::new(clamped);
    }
}

impl PageBehavior for ZoomingPage {
    fn kind(&self) -> MediaType {
        MediaType::Image
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    #[allow(clippy::cast_precision_loss)]
    fn update_layout(&mut self, frame: Rectangle, image: Option<&ImageHandle>) {
        let Some(image) = image.filter(|i| i.width() > 0 && i.height() > 0) else {
            self.reset();
            return;
        };

        let x_scale = frame.width / image.width() as f32;
        let y_scale = frame.height / image.height() as f32;
        let fit = ZoomScale::new(x_scale.min(y_scale));

        self.min_scale = fit;
        self.max_scale = ZoomScale::new(fit.value().max(MAX_ZOOM_SCALE));
        self.zoom_scale = fit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use iced_core::{Point, Size};

    fn frame(width: f32, height: f32) -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(width, height))
    }

    fn image(width: u32, height: u32) -> ImageHandle {
        ImageHandle::from_rgba(width, height, vec![0u8; (width * height * 4) as usize])
    }

    #[test]
    fn fits_large_image_inside_frame() {
        let mut page = ZoomingPage::default();
        page.update_layout(frame(300.0, 400.0), Some(&image(600, 400)));

        assert_abs_diff_eq!(page.min_scale().value(), 0.5);
        assert_abs_diff_eq!(page.zoom_scale().value(), 0.5);
        assert_abs_diff_eq!(page.max_scale().value(), MAX_ZOOM_SCALE);
    }

    #[test]
    fn small_image_may_scale_up_to_fit() {
        let mut page = ZoomingPage::default();
        page.update_layout(frame(300.0, 300.0), Some(&image(100, 50)));

        assert_abs_diff_eq!(page.min_scale().value(), 3.0);
    }

    #[test]
    fn fit_above_zoom_limit_raises_max_scale() {
        let mut page = ZoomingPage::default();
        page.update_layout(frame(280.0, 400.0), Some(&image(10, 10)));

        assert_abs_diff_eq!(page.min_scale().value(), 28.0);
        assert_abs_diff_eq!(page.max_scale().value(), 28.0);
        assert_abs_diff_eq!(page.zoom_scale().value(), 28.0);

        page.set_zoom_scale(2.0);
        assert_abs_diff_eq!(page.zoom_scale().value(), 28.0);
    }

    #[test]
    fn no_image_resets_bounds() {
        let mut page = ZoomingPage::default();
        page.update_layout(frame(300.0, 400.0), Some(&image(600, 400)));
        page.update_layout(frame(300.0, 400.0), None);

        assert_eq!(page, ZoomingPage::default());
    }

    #[test]
    fn user_zoom_is_clamped_to_bounds() {
        let mut page = ZoomingPage::default();
        page.update_layout(frame(300.0, 400.0), Some(&image(600, 400)));

        page.set_zoom_scale(100.0);
        assert_abs_diff_eq!(page.zoom_scale().value(), MAX_ZOOM_SCALE);

        page.set_zoom_scale(0.1);
        assert_abs_diff_eq!(page.zoom_scale().value(), 0.5);
    }
}
