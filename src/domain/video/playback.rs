// SPDX-License-Identifier: MPL-2.0
//! Video playback state machine.
//!
//! Video pages only need to know whether playback is running so it can be
//! stopped when the page is recycled.

use std::time::Duration;

/// Represents the current playback state of a video page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Video is stopped at the beginning.
    #[default]
    Stopped,
    /// Video is currently playing from the given position.
    Playing { position: Duration },
    /// Video is paused at the given position.
    Paused { position: Duration },
}

impl PlaybackState {
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing { .. })
    }

    #[must_use]
    pub fn is_stopped(self) -> bool {
        matches!(self, Self::Stopped)
    }

    /// Current playback position. Zero when stopped.
    #[must_use]
    pub fn position(self) -> Duration {
        match self {
            Self::Stopped => Duration::ZERO,
            Self::Playing { position } | Self::Paused { position } => position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_stopped() {
        assert_eq!(PlaybackState::default(), PlaybackState::Stopped);
        assert_eq!(PlaybackState::default().position(), Duration::ZERO);
    }

    #[test]
    fn test_state_checks() {
        let playing = PlaybackState::Playing {
            position: Duration::from_secs(3),
        };
        assert!(playing.is_playing());
        assert!(!playing.is_stopped());
        assert_eq!(playing.position(), Duration::from_secs(3));

        let paused = PlaybackState::Paused {
            position: Duration::from_millis(1500),
        };
        assert!(!paused.is_playing());
        assert_eq!(paused.position(), Duration::from_millis(1500));
    }
}
