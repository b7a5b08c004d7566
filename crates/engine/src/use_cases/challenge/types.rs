//! Types exchanged between the challenge session and its UI.
//!
//! JSON serialization happens at the presentation boundary.

use std::time::Duration;

use chrono::{DateTime, Utc};
use echona_domain::{BadgeId, ChallengeDefinition, ChallengeId, PointsPolicy};
use serde::{Deserialize, Serialize};

/// Currently playing track, as reported by the playback collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackInfo {
    pub id: String,
    pub title: Option<String>,
    pub artist: Option<String>,
}

impl TrackInfo {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            artist: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Per-session behaviour knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub reaction_ttl: Duration,
    pub badge_notice_ttl: Duration,
    pub points_policy: PointsPolicy,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            reaction_ttl: Duration::from_millis(2500),
            badge_notice_ttl: Duration::from_millis(3000),
            points_policy: PointsPolicy::default(),
        }
    }
}

/// Transient presentation feedback with a display window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Timed<T> {
    pub value: T,
    pub shown_at: DateTime<Utc>,
    pub ttl: Duration,
}

impl<T> Timed<T> {
    pub fn new(value: T, shown_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            value,
            shown_at,
            ttl,
        }
    }

    /// Visible until `ttl` has elapsed. A clock that moved backwards keeps it visible.
    pub fn visible_at(&self, now: DateTime<Utc>) -> bool {
        match (now - self.shown_at).to_std() {
            Ok(elapsed) => elapsed < self.ttl,
            Err(_) => true,
        }
    }
}

/// Shown when a completion earns a badge for the first time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeNotice {
    pub badge: BadgeId,
    pub points: u32,
}

/// Everything the UI needs to render the challenge card and badge collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChallengeView {
    pub active: Option<ChallengeDefinition>,
    pub points: u64,
    pub badge_count: usize,
    pub badges: Vec<BadgeId>,
    pub completed_count: usize,
    pub reaction: Option<String>,
    pub badge_notice: Option<BadgeNotice>,
}

/// Result of a completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompleteOutcome {
    /// Nothing was presented, so nothing changed.
    NoActiveChallenge,
    Completed {
        challenge_id: ChallengeId,
        points_awarded: u32,
        badge_unlocked: Option<BadgeId>,
        reaction: &'static str,
        /// Whether the store accepted the write; the session carries on either way.
        persisted: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timed_value_expires_after_ttl() {
        let shown_at = Utc.with_ymd_and_hms(2025, 6, 15, 10, 30, 0).unwrap();
        let notice = Timed::new("YES", shown_at, Duration::from_millis(2500));

        assert!(notice.visible_at(shown_at));
        assert!(notice.visible_at(shown_at + chrono::Duration::milliseconds(2499)));
        assert!(!notice.visible_at(shown_at + chrono::Duration::milliseconds(2500)));
        assert!(notice.visible_at(shown_at - chrono::Duration::seconds(1)));
    }

    #[test]
    fn track_builder() {
        let track = TrackInfo::new("t1").with_title("Weightless");
        assert_eq!(track.id, "t1");
        assert_eq!(track.title.as_deref(), Some("Weightless"));
        assert_eq!(track.artist, None);
    }
}
