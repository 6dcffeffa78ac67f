// The Bot ties the move selector to its configuration and to the decision
// journal. It keeps no state between turns.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};

use crate::config::Config;
use crate::debug_logger::DebugLogger;
use crate::selector::{Decision, MoveSelector};
use crate::types::{Direction, GameState};

/// Battlesnake Bot
/// Takes static configuration and answers one move request at a time
pub struct Bot {
    config: Config,
    selector: MoveSelector,
    logger: DebugLogger,
}

impl Bot {
    /// Creates a new Bot instance with the given configuration
    ///
    /// Opens the decision journal when `config.debug.enabled` is set.
    pub fn new(config: Config) -> Self {
        let logger = DebugLogger::new(config.debug.enabled, &config.debug.log_file_path);
        Self::with_logger(config, logger)
    }

    /// Creates a Bot that journals through an existing logger
    pub fn with_logger(config: Config, logger: DebugLogger) -> Self {
        let selector = MoveSelector::new(config.selector.fallback_move);
        Bot {
            config,
            selector,
            logger,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the selector for one turn without touching the journal
    ///
    /// With a configured seed the generator is derived from the seed and the
    /// turn number, so the same state on the same turn always gives the same
    /// move.
    pub fn decide(&self, state: &GameState) -> Decision {
        match self.config.random.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed ^ state.turn as u64);
                self.selector.decide(state, &mut rng)
            }
            None => self.selector.decide(state, &mut rand::rng()),
        }
    }

    /// Computes the next move and records it in the journal
    pub fn choose_move(&self, state: &GameState) -> Direction {
        let decision = self.decide(state);
        self.logger.log_move(state, &decision);
        decision.direction
    }

    /// Computes the next move as an API response body
    pub fn get_move(&self, state: &GameState) -> Value {
        json!({ "move": self.choose_move(state).as_str() })
    }
}
