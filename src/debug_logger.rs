// Debug logging module for recording decisions
//
// Each decided turn is appended to a JSONL file as one line holding the
// full game state and the move that was chosen. The replay tool reads
// these files back. Failures are logged and swallowed so that a broken
// journal never costs a move.

use log::error;
use parking_lot::Mutex;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Arc;

use crate::selector::{Decision, Stage};
use crate::types::GameState;

/// Represents a single debug log entry
#[derive(Debug, Serialize)]
struct DebugLogEntry<'a> {
    turn: i32,
    chosen_move: &'a str,
    stage: Stage,
    state: &'a GameState,
    timestamp: String,
}

/// Shared debug logger state
#[derive(Clone)]
pub struct DebugLogger {
    file: Arc<Mutex<Option<File>>>,
    enabled: bool,
}

impl DebugLogger {
    /// Creates a new debug logger
    /// If enabled is true, initializes the log file (truncating if it exists)
    pub fn new(enabled: bool, log_file_path: &str) -> Self {
        if !enabled {
            return Self::disabled();
        }

        match OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_file_path)
        {
            Ok(file) => {
                log::info!("Debug logging enabled: {}", log_file_path);
                DebugLogger {
                    file: Arc::new(Mutex::new(Some(file))),
                    enabled: true,
                }
            }
            Err(e) => {
                error!("Failed to create debug log file '{}': {}", log_file_path, e);
                Self::disabled()
            }
        }
    }

    /// Creates a disabled debug logger (no-op)
    pub fn disabled() -> Self {
        DebugLogger {
            file: Arc::new(Mutex::new(None)),
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Appends one decision to the journal
    pub fn log_move(&self, state: &GameState, decision: &Decision) {
        if !self.enabled {
            return;
        }

        let entry = DebugLogEntry {
            turn: state.turn,
            chosen_move: decision.direction.as_str(),
            stage: decision.stage,
            state,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        let json_line = match serde_json::to_string(&entry) {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to serialize debug log entry: {}", e);
                return;
            }
        };

        let mut file_guard = self.file.lock();
        if let Some(file) = file_guard.as_mut() {
            if let Err(e) = writeln!(file, "{}", json_line) {
                error!("Failed to write debug log entry: {}", e);
            } else if let Err(e) = file.flush() {
                error!("Failed to flush debug log: {}", e);
            }
        }
    }
}
