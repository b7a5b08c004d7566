//! Challenge use cases.
//!
//! A [`ChallengeSession`] is the single owner of a user's progression state.
//! The flow is:
//! 1. Session starts and hydrates progress from the store
//! 2. Mood / track signals arrive and an active challenge is selected
//! 3. The user completes or skips it
//! 4. Completion updates the state, writes it back, and a new challenge is picked
//!
//! Every mutating call takes `&mut self`, so one user action applies exactly
//! one read-modify-write. Share a session between tasks behind a
//! `tokio::sync::Mutex` (see [`crate::App`]).

use std::sync::Arc;

use echona_domain::{
    pick_affirmation, select_active_challenge, Catalog, ChallengeDefinition, ChallengeId,
    ProgressionState, SelectionRequest,
};

mod types;

pub use types::{
    BadgeNotice, ChallengeView, CompleteOutcome, SessionSettings, TrackInfo,
};

use types::Timed;

use crate::entities::Progress;
use crate::infrastructure::ports::{ClockPort, RandomPort};

/// Mood-driven challenge selection and progression for one user.
pub struct ChallengeSession {
    catalog: Arc<Catalog>,
    progress: Progress,
    random: Arc<dyn RandomPort>,
    clock: Arc<dyn ClockPort>,
    settings: SessionSettings,
    state: ProgressionState,
    mood: Option<String>,
    track: Option<TrackInfo>,
    active: Option<ChallengeDefinition>,
    reaction: Option<Timed<&'static str>>,
    badge_notice: Option<Timed<BadgeNotice>>,
}

impl ChallengeSession {
    /// Start a session, restoring any stored progress.
    pub async fn start(
        catalog: Arc<Catalog>,
        progress: Progress,
        random: Arc<dyn RandomPort>,
        clock: Arc<dyn ClockPort>,
        settings: SessionSettings,
    ) -> Self {
        let state = progress.load().await;
        Self {
            catalog,
            progress,
            random,
            clock,
            settings,
            state,
            mood: None,
            track: None,
            active: None,
            reaction: None,
            badge_notice: None,
        }
    }

    // === Accessors ===

    pub fn state(&self) -> &ProgressionState {
        &self.state
    }

    pub fn active(&self) -> Option<&ChallengeDefinition> {
        self.active.as_ref()
    }

    pub fn mood(&self) -> Option<&str> {
        self.mood.as_deref()
    }

    pub fn track(&self) -> Option<&TrackInfo> {
        self.track.as_ref()
    }

    // === Inbound signals ===

    /// Update the current mood label. A changed label triggers reselection.
    pub fn set_mood(&mut self, mood: Option<String>) {
        if self.mood == mood {
            return;
        }
        tracing::debug!(mood = ?mood, "Mood changed");
        self.mood = mood;
        self.reselect(None);
    }

    /// Update the current track. A new track or a change of presence triggers
    /// reselection; metadata-only changes do not.
    pub fn set_track(&mut self, track: Option<TrackInfo>) {
        let previous_id = self.track.as_ref().map(|t| t.id.as_str());
        let next_id = track.as_ref().map(|t| t.id.as_str());
        let changed = previous_id != next_id;
        self.track = track;
        if changed {
            tracing::debug!(track_present = self.track.is_some(), "Track changed");
            self.reselect(None);
        }
    }

    // === User actions ===

    /// Complete the active challenge, persist the new state and move on.
    ///
    /// Storage failures are logged and swallowed; the in-memory state remains
    /// authoritative for the rest of the session.
    ///
    /// The write is awaited under the session lock so saves land in completion order.
    pub async fn complete(&mut self) -> CompleteOutcome {
        let Some(challenge) = self.active.clone() else {
            return CompleteOutcome::NoActiveChallenge;
        };
        let Some(completion) = self
            .state
            .complete_challenge(Some(&challenge), self.settings.points_policy)
        else {
            return CompleteOutcome::NoActiveChallenge;
        };

        let challenge_id = challenge.id().clone();
        self.state = completion.state;
        let now = self.clock.now();

        let reaction = pick_affirmation(|len| self.random.gen_index(len));
        self.reaction = Some(Timed::new(reaction, now, self.settings.reaction_ttl));

        if let Some(badge) = &completion.badge_unlocked {
            self.badge_notice = Some(Timed::new(
                BadgeNotice {
                    badge: badge.clone(),
                    points: completion.points_awarded,
                },
                now,
                self.settings.badge_notice_ttl,
            ));
        }

        tracing::info!(
            challenge_id = %challenge_id,
            points_awarded = completion.points_awarded,
            total_points = self.state.points(),
            badge_unlocked = ?completion.badge_unlocked,
            first_completion = completion.first_completion,
            "Challenge completed"
        );

        let persisted = match self.progress.save(&self.state).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    namespace = %self.progress.namespace(),
                    error = %e,
                    "Failed to persist progress, keeping in-memory state"
                );
                false
            }
        };

        // The completed set already keeps this id out of the unseen pool; once
        // the mood is exhausted it may come up again.
        self.reselect(None);

        CompleteOutcome::Completed {
            challenge_id,
            points_awarded: completion.points_awarded,
            badge_unlocked: completion.badge_unlocked,
            reaction,
            persisted,
        }
    }

    /// Present a different challenge without touching progression.
    ///
    /// Keeps the current challenge when the mood offers no alternative.
    pub fn skip(&mut self) -> Option<&ChallengeDefinition> {
        let current = self.active.as_ref().map(|c| c.id().clone())?;
        tracing::debug!(challenge_id = %current, "Challenge skipped");
        self.reselect(Some(&current));
        self.active.as_ref()
    }

    // === Presentation ===

    /// Snapshot for rendering. Expired notices are omitted.
    pub fn view(&self) -> ChallengeView {
        let now = self.clock.now();
        ChallengeView {
            active: self.active.clone(),
            points: self.state.points(),
            badge_count: self.state.badge_count(),
            badges: self.state.earned_badges().to_vec(),
            completed_count: self.state.completed_count(),
            reaction: self
                .reaction
                .as_ref()
                .filter(|r| r.visible_at(now))
                .map(|r| r.value.to_string()),
            badge_notice: self
                .badge_notice
                .as_ref()
                .filter(|n| n.visible_at(now))
                .map(|n| n.value.clone()),
        }
    }

    fn reselect(&mut self, exclude: Option<&ChallengeId>) {
        let mut request = SelectionRequest::new(
            self.mood.as_deref(),
            self.track.is_some(),
            self.state.completed(),
        );
        request.exclude = exclude;

        let random = &self.random;
        let selected =
            select_active_challenge(&self.catalog, request, |len| random.gen_index(len)).cloned();

        match &selected {
            Some(challenge) => tracing::debug!(
                mood = ?self.mood,
                challenge_id = %challenge.id(),
                "Active challenge selected"
            ),
            None => tracing::debug!("No mood or track, no active challenge"),
        }
        self.active = selected;
    }
}
