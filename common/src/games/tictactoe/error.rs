use derive_more::{Display, Error};

/// Recoverable engine failures. An operation that returns one of these has
/// left the board, history and turn untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    #[display("Cell ({row}, {col}) is already marked")]
    CellOccupied { row: usize, col: usize },
    #[display("Position ({row}, {col}) is out of bounds")]
    OutOfRange { row: usize, col: usize },
    #[display("{reason}")]
    InvalidState { reason: &'static str },
}
