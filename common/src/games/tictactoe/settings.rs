use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::{Difficulty, GameMode, Mark, UndoPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub mode: GameMode,
    /// Mark that moves first in a new single-player game. Multiplayer games
    /// and every reset start with X.
    #[serde(default = "default_first_mark")]
    pub first_mark: Mark,
    #[serde(default)]
    pub undo_policy: UndoPolicy,
}

fn default_first_mark() -> Mark {
    Mark::X
}

impl GameSettings {
    pub fn single_player(human: Mark, difficulty: Difficulty) -> Self {
        Self {
            mode: GameMode::SinglePlayer { human, difficulty },
            first_mark: Mark::X,
            undo_policy: UndoPolicy::default(),
        }
    }

    pub fn multiplayer() -> Self {
        Self {
            mode: GameMode::Multiplayer,
            first_mark: Mark::X,
            undo_policy: UndoPolicy::default(),
        }
    }

    pub fn with_undo_policy(self, undo_policy: UndoPolicy) -> Self {
        Self { undo_policy, ..self }
    }

    pub fn with_first_mark(self, first_mark: Mark) -> Self {
        Self { first_mark, ..self }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::single_player(Mark::X, Difficulty::Advanced)
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.mode == GameMode::Multiplayer && self.first_mark != Mark::X {
            return Err("X always moves first in multiplayer".to_string());
        }
        Ok(())
    }
}
