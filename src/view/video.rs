// SPDX-License-Identifier: MPL-2.0
//! Video player page.

use crate::domain::media::{ImageHandle, MediaType};
use crate::domain::video::PlaybackState;
use crate::view::presentable::PageBehavior;
use iced_core::{Point, Rectangle, Size};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VideoPage {
    playback: PlaybackState,
    /// Letterboxed area of the poster, relative to the page origin.
    display_rect: Option<Rectangle>,
}

impl VideoPage {
    #[must_use]
    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    #[must_use]
    pub fn display_rect(&self) -> Option<Rectangle> {
        self.display_rect
    }

    pub fn play(&mut self) {
        self.playback = PlaybackState::Playing {
            position: self.playback.position(),
        };
    }

    pub fn pause(&mut self) {
        self.playback = PlaybackState::Paused {
            position: self.playback.position(),
        };
    }

    pub fn seek(&mut self, position: Duration) {
        self.playback = match self.playback {
            PlaybackState::Playing { .. } => PlaybackState::Playing { position },
            PlaybackState::Stopped | PlaybackState::Paused { .. } => {
                PlaybackState::Paused { position }
            }
        };
    }
}

impl PageBehavior for VideoPage {
    fn kind(&self) -> MediaType {
        MediaType::Video
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn update_layout(&mut self, frame: Rectangle, image: Option<&ImageHandle>) {
        self.display_rect = image.map(|poster| {
            let aspect = poster.aspect_ratio();
            let size = if frame.width / frame.height.max(f32::EPSILON) > aspect {
                Size::new(frame.height * aspect, frame.height)
            } else {
                Size::new(frame.width, frame.width / aspect)
            };
            Rectangle::new(
                Point::new(
                    (frame.width - size.width) / 2.0,
                    (frame.height - size.height) / 2.0,
                ),
                size,
            )
        });
    }
}
