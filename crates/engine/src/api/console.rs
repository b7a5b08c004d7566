//! Line-oriented command surface for driving a session headlessly.
//!
//! ```text
//! mood Happy        set the mood      mood      clear it
//! track t42 Song    set the track     track     clear it
//! complete | skip | status
//! ```

use std::str::FromStr;

use crate::app::SharedSession;
use crate::use_cases::challenge::{ChallengeView, TrackInfo};

/// One user or collaborator action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetMood(Option<String>),
    SetTrack(Option<TrackInfo>),
    Complete,
    Skip,
    Status,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command: {0}")]
    Unknown(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "mood" if rest.is_empty() => Ok(Self::SetMood(None)),
            "mood" => Ok(Self::SetMood(Some(rest.to_string()))),
            "track" if rest.is_empty() => Ok(Self::SetTrack(None)),
            "track" => {
                let track = match rest.split_once(char::is_whitespace) {
                    Some((id, title)) => TrackInfo::new(id).with_title(title.trim()),
                    None => TrackInfo::new(rest),
                };
                Ok(Self::SetTrack(Some(track)))
            }
            "complete" => Ok(Self::Complete),
            "skip" => Ok(Self::Skip),
            "status" => Ok(Self::Status),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Apply a command and return the view the UI would render next.
pub async fn execute(session: &SharedSession, command: Command) -> ChallengeView {
    let mut session = session.lock().await;
    match command {
        Command::SetMood(mood) => session.set_mood(mood),
        Command::SetTrack(track) => session.set_track(track),
        Command::Complete => {
            session.complete().await;
        }
        Command::Skip => {
            session.skip();
        }
        Command::Status => {}
    }
    session.view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::config::EngineConfig;
    use crate::infrastructure::persistence::InMemoryProgressStore;
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    #[test]
    fn parses_commands() {
        assert_eq!(
            "mood Happy".parse::<Command>().unwrap(),
            Command::SetMood(Some("Happy".to_string()))
        );
        assert_eq!("mood".parse::<Command>().unwrap(), Command::SetMood(None));
        assert_eq!(
            "track t1 Weightless".parse::<Command>().unwrap(),
            Command::SetTrack(Some(TrackInfo::new("t1").with_title("Weightless")))
        );
        assert_eq!("track".parse::<Command>().unwrap(), Command::SetTrack(None));
        assert_eq!(" COMPLETE ".parse::<Command>().unwrap(), Command::Complete);
        assert_eq!("skip".parse::<Command>().unwrap(), Command::Skip);
        assert_eq!("status".parse::<Command>().unwrap(), Command::Status);
    }

    #[test]
    fn rejects_unknown_and_empty() {
        assert_eq!("   ".parse::<Command>().unwrap_err(), CommandError::Empty);
        assert_eq!(
            "dance".parse::<Command>().unwrap_err(),
            CommandError::Unknown("dance".to_string())
        );
    }

    #[tokio::test]
    async fn executes_against_shared_session() {
        let clock = Arc::new(FixedClock(Utc.with_ymd_and_hms(2025, 6, 15, 10, 30, 0).unwrap()));
        let config = EngineConfig {
            rng_seed: Some(4),
            ..EngineConfig::default()
        };
        let app = App::new(config, Arc::new(InMemoryProgressStore::new()), clock).await;

        let view = execute(&app.session, Command::Status).await;
        assert!(view.active.is_none());

        let view = execute(&app.session, Command::SetMood(Some("Sad".to_string()))).await;
        assert!(view.active.is_some());

        let view = execute(&app.session, Command::Complete).await;
        assert_eq!(view.completed_count, 1);
        assert_eq!(view.badge_count, 1);
        assert!(view.reaction.is_some());

        let before = view.points;
        let view = execute(&app.session, Command::Skip).await;
        assert_eq!(view.points, before);
    }
}
