//! Application state and composition.

use std::sync::Arc;

use echona_domain::Catalog;
use tokio::sync::Mutex;

use crate::entities::Progress;
use crate::infrastructure::{
    clock::{SeededRandom, SystemRandom},
    config::EngineConfig,
    ports::{ClockPort, ProgressStore, RandomPort},
};
use crate::use_cases::challenge::{ChallengeSession, SessionSettings};

/// A session shared between tasks; the mutex serializes user actions.
pub type SharedSession = Arc<Mutex<ChallengeSession>>;

/// Main application state.
pub struct App {
    pub config: EngineConfig,
    pub session: SharedSession,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub async fn new(
        config: EngineConfig,
        store: Arc<dyn ProgressStore>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let random = random_port(&config);
        let settings = SessionSettings {
            reaction_ttl: config.reaction_ttl,
            badge_notice_ttl: config.badge_notice_ttl,
            points_policy: config.points_policy,
        };

        let progress = Progress::new(store, config.namespace.clone());
        let session = ChallengeSession::start(
            Arc::new(Catalog::builtin().clone()),
            progress,
            random,
            clock,
            settings,
        )
        .await;

        Self {
            config,
            session: Arc::new(Mutex::new(session)),
        }
    }
}

fn random_port(config: &EngineConfig) -> Arc<dyn RandomPort> {
    match config.rng_seed {
        Some(seed) => {
            tracing::info!(seed, "Using seeded random source");
            Arc::new(SeededRandom::new(seed))
        }
        None => Arc::new(SystemRandom::new()),
    }
}
