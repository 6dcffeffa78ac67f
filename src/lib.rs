// Library exports for the greedy Battlesnake
// The stdin adapter and the replay tool both drive the selector through here.

pub mod bot;
pub mod config;
pub mod debug_logger;
pub mod food;
pub mod replay;
pub mod safety;
pub mod selector;
pub mod types;

pub use selector::{select_move, Decision, MoveSelector, Stage};
