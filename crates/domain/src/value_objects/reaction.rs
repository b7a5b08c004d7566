//! Affirmations shown after a challenge is completed.

/// Fixed affirmation list, picked uniformly on every completion.
pub const AFFIRMATIONS: &[&str] = &[
    "AWESOME",
    "GREAT",
    "NAILED IT",
    "AMAZING",
    "PERFECT",
    "YES",
    "BOOM",
    "FIRE",
];

/// Pick an affirmation using an injected index picker.
///
/// `pick` receives the list length and must return an index below it; out of
/// range values are clamped to the last entry.
pub fn pick_affirmation(pick: impl FnOnce(usize) -> usize) -> &'static str {
    let index = pick(AFFIRMATIONS.len()).min(AFFIRMATIONS.len() - 1);
    AFFIRMATIONS[index]
}
