// SPDX-License-Identifier: MPL-2.0
//! Media items displayed by the pager.
//!
//! The pager never decodes anything itself. It talks to items through the
//! [`MediaItem`] trait, asks them to load when they are about to be shown,
//! and reads back whatever image they hold.

pub mod item;
pub mod loader;

// Re-export commonly used types
pub use crate::domain::media::{ImageHandle, MediaType};
pub use item::{same_item, LoadState, MediaEvent, MediaId, MediaItem, Photo, SharedItem};
pub use loader::fulfil_load;
