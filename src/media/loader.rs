// SPDX-License-Identifier: MPL-2.0
//! Background completion of media loads.
//!
//! Decoding is owned by the host. This helper runs the host's decode closure
//! on tokio's blocking pool and stores the result in the [`Photo`], which in
//! turn notifies whoever listens to its events.

use crate::domain::media::ImageHandle;
use crate::error::{Error, Result};
use crate::media::item::Photo;
use std::sync::Arc;

/// Decodes an image for `photo` off the UI thread and completes its load.
///
/// Returns the decode error, if any. The photo is completed either way,
/// so a failed load can be retried by a later prefetch.
pub async fn fulfil_load<F>(photo: Arc<Photo>, decode: F) -> Result<()>
where
    F: FnOnce() -> Result<ImageHandle> + Send + 'static,
{
    let result = tokio::task::spawn_blocking(decode)
        .await
        .unwrap_or_else(|e| Err(Error::Load(format!("Load task failed: {e}"))));

    let outcome = result.as_ref().map(|_| ()).map_err(Clone::clone);
    photo.complete_load(result);
    outcome
}
