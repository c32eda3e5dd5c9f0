mod board;
mod bot_controller;
mod error;
mod game_state;
mod history;
mod settings;
mod types;
mod win_detector;

pub use board::BoardState;
pub use bot_controller::{SearchResult, calculate_minimax_move, calculate_move};
pub use error::GameError;
pub use game_state::{GameSnapshot, MoveResult, TicTacToeEngine, UndoResult};
pub use history::{MoveHistory, Side};
pub use settings::GameSettings;
pub use types::{
    BOARD_SIZE, Cell, Difficulty, GameMode, GamePhase, Mark, Move, Outcome, Position, UndoPolicy,
    WinningLine,
};
pub use win_detector::{Grid, LINES, check_win, check_win_with_line};
