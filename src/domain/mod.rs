// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects shared by the
//! media, view and pager layers. It depends on nothing but `std`.
//!
//! # Modules
//!
//! - [`media`]: Media types ([`MediaType`](media::MediaType),
//!   [`ImageHandle`](media::ImageHandle))
//! - [`ui`]: UI value objects ([`Opacity`](ui::Opacity),
//!   [`PrefetchCount`](ui::PrefetchCount), [`ZoomScale`](ui::ZoomScale))
//! - [`video`]: Video playback types ([`PlaybackState`](video::PlaybackState))

pub mod media;
pub mod ui;
pub mod video;
