//! Challenge catalog - mood label to ordered challenge list
//!
//! The catalog is read-only for the lifetime of the process. Lookups for a mood
//! with no list of its own fall back to the `Calm` list, so a valid catalog must
//! always carry a non-empty `Calm` entry.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use crate::entities::ChallengeDefinition;
use crate::error::DomainError;
use crate::value_objects::Mood;
use crate::ChallengeId;

/// Mood used whenever a label is unknown or a mood has no list.
pub const FALLBACK_MOOD: Mood = Mood::Calm;

static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog {
    lists: builtin_entries().into_iter().collect(),
});

/// Immutable mapping from mood to its ordered challenges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    lists: HashMap<Mood, Vec<ChallengeDefinition>>,
}

impl Catalog {
    /// Build a catalog from mood lists.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the `Calm` fallback list is missing
    /// or empty, if a mood is listed twice, or if a challenge id repeats within
    /// one mood.
    pub fn new(
        entries: impl IntoIterator<Item = (Mood, Vec<ChallengeDefinition>)>,
    ) -> Result<Self, DomainError> {
        let mut lists: HashMap<Mood, Vec<ChallengeDefinition>> = HashMap::new();
        for (mood, challenges) in entries {
            if lists.insert(mood, challenges).is_some() {
                return Err(DomainError::validation(format!(
                    "Mood {} listed more than once",
                    mood
                )));
            }
        }

        if lists.get(&FALLBACK_MOOD).map_or(true, Vec::is_empty) {
            return Err(DomainError::validation(format!(
                "Catalog must contain a non-empty {} list",
                FALLBACK_MOOD
            )));
        }

        for (mood, challenges) in &lists {
            let mut seen = HashSet::new();
            for challenge in challenges {
                if !seen.insert(challenge.id()) {
                    return Err(DomainError::validation(format!(
                        "Duplicate challenge id {} in {} list",
                        challenge.id(),
                        mood
                    )));
                }
            }
        }

        Ok(Self { lists })
    }

    /// The catalog shipped with the application.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Challenges for a mood, or the fallback list if the mood has none.
    pub fn challenges_for(&self, mood: Mood) -> &[ChallengeDefinition] {
        match self.lists.get(&mood) {
            Some(list) if !list.is_empty() => list,
            _ => self.fallback(),
        }
    }

    /// Challenges for a raw mood label; unknown labels use the fallback list.
    pub fn challenges_for_label(&self, label: &str) -> &[ChallengeDefinition] {
        self.challenges_for(Mood::resolve(label))
    }

    /// Find a challenge by id in any mood list.
    pub fn find(&self, id: &ChallengeId) -> Option<&ChallengeDefinition> {
        self.lists
            .values()
            .flat_map(|list| list.iter())
            .find(|challenge| challenge.id() == id)
    }

    /// Total number of challenges across all moods.
    pub fn len(&self) -> usize {
        self.lists.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn fallback(&self) -> &[ChallengeDefinition] {
        // Presence is checked in `new`; the builtin data always has it.
        self.lists
            .get(&FALLBACK_MOOD)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

fn fixed(
    id: &str,
    title: &str,
    description: &str,
    points: u32,
    badge: &str,
) -> ChallengeDefinition {
    ChallengeDefinition::fixed(id, title, description, points, badge)
}

fn builtin_entries() -> Vec<(Mood, Vec<ChallengeDefinition>)> {
    vec![
        (
            Mood::Happy,
            vec![
                fixed("happy1", "Smile Check", "Smile for 10 seconds", 50, "GRIN"),
                fixed("happy2", "Dance Move", "Do a happy dance", 75, "GROOVE"),
                fixed("happy3", "Spread Joy", "Text someone something nice", 100, "SPARK"),
                fixed("happy4", "Gratitude Moment", "Think of 3 things you're grateful for", 80, "THANKS"),
                fixed("happy5", "Energy Boost", "Jump 10 times", 60, "JUMP"),
            ],
        ),
        (
            Mood::Calm,
            vec![
                fixed("calm1", "Deep Breathing", "Take 5 deep breaths", 75, "BREATH"),
                fixed("calm2", "Mindful Moment", "Close eyes for 30 seconds", 50, "ZEN"),
                fixed("calm3", "Stretch Break", "Stretch your arms and shoulders", 60, "FLEX"),
                fixed("calm4", "Water Break", "Drink a glass of water", 40, "HYDRO"),
                fixed("calm5", "Body Scan", "Relax each body part one by one", 90, "PEACE"),
            ],
        ),
        (
            Mood::Excited,
            vec![
                fixed("excited1", "Power Pose", "Hold a superhero pose for 15 seconds", 70, "HERO"),
                fixed("excited2", "Fist Pump", "Do 5 enthusiastic fist pumps", 50, "PUMP"),
                fixed("excited3", "Shout It Out", "Yell \"YES!\" 3 times", 60, "ROAR"),
                fixed("excited4", "Air Guitar", "Rock out for 20 seconds", 80, "ROCK"),
                fixed("excited5", "Victory Lap", "Run in place for 30 seconds", 90, "SPRINT"),
            ],
        ),
        (
            Mood::Sad,
            vec![
                fixed("sad1", "Self Hug", "Give yourself a hug", 60, "HUG"),
                fixed("sad2", "Kind Words", "Say 3 nice things about yourself", 80, "KIND"),
                fixed("sad3", "Memory Lane", "Recall a happy memory", 70, "RECALL"),
                fixed("sad4", "Tear Release", "Let emotions flow naturally", 50, "FLOW"),
                fixed("sad5", "Future Vision", "Imagine something to look forward to", 90, "HOPE"),
            ],
        ),
        (
            Mood::Angry,
            vec![
                fixed("angry1", "Punch Air", "Shadow box for 20 seconds", 70, "FIGHT"),
                fixed("angry2", "Scream Silent", "Silent scream (mouth open)", 60, "VENT"),
                fixed("angry3", "Squeeze Stress", "Clench fists then release 5 times", 50, "GRIP"),
                fixed("angry4", "Stomp It Out", "Stomp your feet 10 times", 65, "STOMP"),
                fixed("angry5", "Cool Down", "Count backwards from 10", 80, "CHILL"),
            ],
        ),
        (
            Mood::Anxious,
            vec![
                fixed("anxious1", "5-4-3-2-1", "Name 5 things you see, 4 you hear, 3 you touch", 100, "AWARE"),
                fixed("anxious2", "Box Breathing", "Breathe in 4, hold 4, out 4, hold 4", 90, "BOX"),
                fixed("anxious3", "Ground Yourself", "Feel your feet on the ground", 60, "GROUND"),
                fixed("anxious4", "Hand On Heart", "Place hand on heart, breathe slowly", 70, "HEART"),
                fixed("anxious5", "Release Tension", "Shake out your hands and arms", 50, "SHAKE"),
            ],
        ),
    ]
}
