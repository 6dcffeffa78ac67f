// Move selection pipeline: safety filter, then food, then a random safe move.
//
// Everything here is a pure function of the game state and the generator
// handed in. Seeding that generator makes every decision reproducible.

use log::{debug, info};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::food::move_towards_food;
use crate::safety::{safe_moves, MoveSet};
use crate::types::{Direction, GameState};

/// Move returned when every direction is unsafe
pub const DEFAULT_MOVE: Direction = Direction::Down;

/// Which stage of the pipeline produced a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Safe step toward the nearest food
    Food,
    /// Uniform pick among the safe moves
    Random,
    /// Nothing was safe
    Fallback,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Food => "food",
            Stage::Random => "random",
            Stage::Fallback => "fallback",
        }
    }
}

/// A chosen move together with the stage and safe set behind it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub direction: Direction,
    pub stage: Stage,
    pub safe: MoveSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSelector {
    fallback: Direction,
}

impl Default for MoveSelector {
    fn default() -> Self {
        MoveSelector::new(DEFAULT_MOVE)
    }
}

impl MoveSelector {
    /// `fallback` is returned whenever no direction is safe
    pub fn new(fallback: Direction) -> Self {
        MoveSelector { fallback }
    }

    pub fn fallback(&self) -> Direction {
        self.fallback
    }

    pub fn decide<R: Rng + ?Sized>(&self, state: &GameState, rng: &mut R) -> Decision {
        let decision = self.pick(state, rng);
        info!(
            "MOVE {}: {} ({})",
            state.turn,
            decision.direction,
            decision.stage.as_str()
        );
        decision
    }

    fn pick<R: Rng + ?Sized>(&self, state: &GameState, rng: &mut R) -> Decision {
        let safe = safe_moves(state);
        let head = state.you.head_position();

        debug!("Turn {}: head {} safe {:?}", state.turn, head, safe);

        if let Some(direction) = move_towards_food(head, &state.board.food, &safe) {
            return Decision {
                direction,
                stage: Stage::Food,
                safe,
            };
        }

        match safe.safe_directions().choose(rng) {
            Some(&direction) => Decision {
                direction,
                stage: Stage::Random,
                safe,
            },
            None => Decision {
                direction: self.fallback,
                stage: Stage::Fallback,
                safe,
            },
        }
    }

    pub fn select<R: Rng + ?Sized>(&self, state: &GameState, rng: &mut R) -> Direction {
        self.decide(state, rng).direction
    }
}

/// Picks this turn's move with the default fallback of `down`
pub fn select_move<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> Direction {
    MoveSelector::default().select(state, rng)
}
