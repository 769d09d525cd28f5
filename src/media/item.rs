// SPDX-License-Identifier: MPL-2.0
//! The media item interface and its stock implementation.

use crate::domain::media::{ImageHandle, MediaType};
use crate::error::Result;
use std::fmt;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::mpsc::UnboundedSender;

/// One photo or video in the browser's collection.
///
/// Items are compared by identity, never by value: two items with the same
/// caption and pixels are still different pages.
pub trait MediaItem: fmt::Debug + Send + Sync {
    /// The kind of media. Must not change over the item's lifetime.
    fn media_type(&self) -> MediaType;

    /// The decoded image (or video poster), if it has finished loading.
    fn underlying_image(&self) -> Option<ImageHandle>;

    /// Caption text shown in an overlay below the page.
    fn caption(&self) -> Option<String> {
        None
    }

    /// Starts loading the underlying image if needed. Completion is reported
    /// through the item's own notification path, never to the caller.
    fn load_underlying_image_and_notify(&self);
}

/// Shared, identity-compared handle to a media item.
pub type SharedItem = Arc<dyn MediaItem>;

/// Returns true if both handles point at the same item.
#[must_use]
pub fn same_item(a: &SharedItem, b: &SharedItem) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

static NEXT_MEDIA_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier carried by [`Photo`] notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MediaId(u64);

impl MediaId {
    fn next() -> Self {
        Self(NEXT_MEDIA_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Notifications emitted by a [`Photo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaEvent {
    /// The pager asked for the image; the host should start decoding.
    LoadRequested(MediaId),
    /// The image is now available through [`MediaItem::underlying_image`].
    Loaded(MediaId),
    /// Decoding failed. A later request retries.
    LoadFailed { id: MediaId, message: String },
}

/// Load progress of a [`Photo`].
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded(ImageHandle),
    Failed(String),
}

impl LoadState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageHandle> {
        match self {
            Self::Loaded(image) => Some(image),
            _ => None,
        }
    }
}

/// Ready-made [`MediaItem`] that tracks its load state and reports progress
/// over an optional channel.
#[derive(Debug)]
pub struct Photo {
    id: MediaId,
    media_type: MediaType,
    caption: Option<String>,
    state: RwLock<LoadState>,
    load_requests: AtomicUsize,
    events: Option<UnboundedSender<MediaEvent>>,
}

impl Photo {
    fn new(media_type: MediaType) -> Self {
        Self {
            id: MediaId::next(),
            media_type,
            caption: None,
            state: RwLock::new(LoadState::Idle),
            load_requests: AtomicUsize::new(0),
            events: None,
        }
    }

    /// Creates a still photo that has not been loaded yet.
    #[must_use]
    pub fn image() -> Self {
        Self::new(MediaType::Image)
    }

    /// Creates a video item that has not been loaded yet.
    #[must_use]
    pub fn video() -> Self {
        Self::new(MediaType::Video)
    }

    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Marks the item as already loaded with the given image.
    #[must_use]
    pub fn with_image(self, image: ImageHandle) -> Self {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = LoadState::Loaded(image);
        self
    }

    /// Routes load notifications to `events`.
    #[must_use]
    pub fn with_events(mut self, events: UnboundedSender<MediaEvent>) -> Self {
        self.events = Some(events);
        self
    }

    #[must_use]
    pub fn id(&self) -> MediaId {
        self.id
    }

    #[must_use]
    pub fn load_state(&self) -> LoadState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of load requests that actually started a load.
    #[must_use]
    pub fn load_request_count(&self) -> usize {
        self.load_requests.load(Ordering::Relaxed)
    }

    /// Stores the outcome of a load. Safe to call after the page showing
    /// this item was recycled; the next page bound to it picks it up.
    pub fn complete_load(&self, result: Result<ImageHandle>) {
        let event = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            match result {
                Ok(image) => {
                    *state = LoadState::Loaded(image);
                    MediaEvent::Loaded(self.id)
                }
                Err(err) => {
                    let message = err.to_string();
                    *state = LoadState::Failed(message.clone());
                    MediaEvent::LoadFailed {
                        id: self.id,
                        message,
                    }
                }
            }
        };
        self.notify(event);
    }

    fn notify(&self, event: MediaEvent) {
        if let Some(events) = &self.events {
            if events.send(event).is_err() {
                tracing::trace!(id = self.id.0, "media event receiver dropped");
            }
        }
    }
}

impl MediaItem for Photo {
    fn media_type(&self) -> MediaType {
        self.media_type
    }

    fn underlying_image(&self) -> Option<ImageHandle> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .image()
            .cloned()
    }

    fn caption(&self) -> Option<String> {
        self.caption.clone()
    }

    fn load_underlying_image_and_notify(&self) {
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            if matches!(*state, LoadState::Loading | LoadState::Loaded(_)) {
                return;
            }
            *state = LoadState::Loading;
        }
        self.load_requests.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(id = self.id.0, "load requested");
        self.notify(MediaEvent::LoadRequested(self.id));
    }
}
