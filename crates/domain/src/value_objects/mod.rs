mod mood;
mod reaction;

pub use mood::Mood;
pub use reaction::{pick_affirmation, AFFIRMATIONS};
