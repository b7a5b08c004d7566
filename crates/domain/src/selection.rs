//! Active challenge selection
//!
//! Selection is a pure function of the catalog, the request and an injected
//! index picker. The picker receives the pool size and returns an index into
//! it, which keeps the domain free of any RNG dependency.
//!
//! Policy:
//! 1. Resolve the mood's list (unknown labels use the `Calm` list).
//! 2. Prefer challenges that are neither completed nor excluded.
//! 3. Once everything is completed, pick from the whole list again, still
//!    honouring the exclusion so a skip moves to a different challenge.
//! 4. If the exclusion leaves nothing, the excluded challenge stays active.

use crate::catalog::{Catalog, FALLBACK_MOOD};
use crate::entities::ChallengeDefinition;
use crate::ChallengeId;

/// Inputs for one selection pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionRequest<'a> {
    /// Raw mood label, `None` when no mood has been chosen yet
    pub mood: Option<&'a str>,
    /// Whether a track is currently playing
    pub track_present: bool,
    /// Snapshot of completed challenge ids
    pub completed: &'a [ChallengeId],
    /// Challenge to avoid, set when skipping
    pub exclude: Option<&'a ChallengeId>,
}

impl<'a> SelectionRequest<'a> {
    pub fn new(mood: Option<&'a str>, track_present: bool, completed: &'a [ChallengeId]) -> Self {
        Self {
            mood,
            track_present,
            completed,
            exclude: None,
        }
    }

    pub fn excluding(mut self, id: &'a ChallengeId) -> Self {
        self.exclude = Some(id);
        self
    }
}

/// Pick the challenge to present.
///
/// Returns `None` only when there is neither a mood nor a playing track.
pub fn select_active_challenge<'c>(
    catalog: &'c Catalog,
    request: SelectionRequest<'_>,
    pick: impl FnOnce(usize) -> usize,
) -> Option<&'c ChallengeDefinition> {
    let list = match request.mood {
        Some(label) => catalog.challenges_for_label(label),
        None if request.track_present => catalog.challenges_for(FALLBACK_MOOD),
        None => return None,
    };

    let allowed = |challenge: &&ChallengeDefinition| request.exclude != Some(challenge.id());

    let unseen: Vec<&ChallengeDefinition> = list
        .iter()
        .filter(allowed)
        .filter(|challenge| !request.completed.contains(challenge.id()))
        .collect();
    if !unseen.is_empty() {
        return Some(pick_from(&unseen, pick));
    }

    let any: Vec<&ChallengeDefinition> = list.iter().filter(allowed).collect();
    if !any.is_empty() {
        return Some(pick_from(&any, pick));
    }

    // Only the excluded challenge exists for this mood.
    list.iter()
        .find(|challenge| request.exclude == Some(challenge.id()))
        .or_else(|| list.first())
}

fn pick_from<'c>(
    pool: &[&'c ChallengeDefinition],
    pick: impl FnOnce(usize) -> usize,
) -> &'c ChallengeDefinition {
    let index = pick(pool.len()).min(pool.len() - 1);
    pool[index]
}
