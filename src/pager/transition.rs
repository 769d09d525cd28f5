// SPDX-License-Identifier: MPL-2.0
//! Descriptions of animated changes for the host to play.
//!
//! The pager applies every change immediately and reports what moved so the
//! host's animator can interpolate from the old value to the new one.

use crate::domain::ui::Opacity;
use crate::view::CaptionId;
use iced_core::Point;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Content offset moved from `from` to `to`.
    Scroll {
        from: Point,
        to: Point,
        animated: bool,
    },
    /// Caption overlays faded to `opacity`.
    Fade {
        captions: Vec<CaptionId>,
        opacity: Opacity,
        duration: Duration,
    },
}

impl Transition {
    /// Returns true if nothing visible changes.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        match self {
            Self::Scroll { from, to, .. } => from == to,
            Self::Fade { captions, .. } => captions.is_empty(),
        }
    }
}

/// What a tiling pass changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TilingOutcome {
    /// Indices that received a page, in ascending order.
    pub attached: Vec<usize>,
    /// Indices whose page was detached, in ascending order.
    pub detached: Vec<usize>,
    /// Attached pages that were rebound from the recycle pool.
    pub reused: usize,
    /// Recycled pages dropped to respect the pool cap.
    pub dropped: usize,
}

impl TilingOutcome {
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.attached.is_empty() && self.detached.is_empty() && self.dropped == 0
    }
}
