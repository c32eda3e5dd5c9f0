use crate::games::SessionRng;
use crate::log;
use super::board::BoardState;
use super::bot_controller::calculate_move;
use super::error::GameError;
use super::history::{MoveHistory, Side};
use super::settings::GameSettings;
use super::types::{GameMode, GamePhase, Mark, Move, Outcome, Position, UndoPolicy, WinningLine};
use super::win_detector::Grid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub cells: Grid,
    pub turn: Mark,
    pub outcome: Outcome,
}

/// What one `apply_move` call did: the caller's move and, in single-player,
/// the computer's reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub placed: Move,
    pub reply: Option<Move>,
    pub outcome: Outcome,
}

/// What one `undo` call did: how many plies came off the board and the
/// computer's replacement move when it ended up on move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoResult {
    pub reverted: usize,
    pub reply: Option<Move>,
}

/// One game session: board, turn, both history stacks and the computer
/// player's random source.
#[derive(Debug, Clone)]
pub struct TicTacToeEngine {
    board: BoardState,
    settings: GameSettings,
    current_mark: Mark,
    outcome: Outcome,
    history: MoveHistory,
    rng: SessionRng,
}

impl TicTacToeEngine {
    pub fn new(settings: GameSettings) -> Self {
        Self::with_rng(settings, SessionRng::from_random())
    }

    pub fn with_seed(settings: GameSettings, seed: u64) -> Self {
        Self::with_rng(settings, SessionRng::new(seed))
    }

    fn with_rng(settings: GameSettings, rng: SessionRng) -> Self {
        let settings = match settings.mode {
            GameMode::Multiplayer => settings.with_first_mark(Mark::X),
            GameMode::SinglePlayer { .. } => settings,
        };
        let mut engine = Self {
            board: BoardState::new(),
            settings,
            current_mark: settings.first_mark,
            outcome: Outcome::Ongoing,
            history: MoveHistory::new(),
            rng,
        };
        log!(
            "New game: {:?}, {} moves first, seed {}",
            settings.mode,
            settings.first_mark,
            engine.rng.seed()
        );
        engine.start(settings.first_mark);
        engine
    }

    fn start(&mut self, first_mark: Mark) {
        self.board.reset();
        self.history.clear();
        self.current_mark = first_mark;
        self.outcome = Outcome::Ongoing;

        if self.is_computer_turn() {
            self.computer_move();
        }
    }

    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveResult, GameError> {
        self.ensure_ongoing()?;

        let placed = self.place(Position::new(row, col), self.current_mark)?;
        let reply = if self.is_computer_turn() {
            self.computer_move()
        } else {
            None
        };

        Ok(MoveResult {
            placed,
            reply,
            outcome: self.outcome,
        })
    }

    /// Reverts moves according to the configured `UndoPolicy`. In
    /// single-player the engine never hands control back on the computer's
    /// turn, so the computer replies again if the undo left it on move.
    pub fn undo(&mut self) -> Result<UndoResult, GameError> {
        if self.outcome.is_over() {
            return Err(GameError::InvalidState {
                reason: "Game is over; reset to play again",
            });
        }

        let mut reverted = self.revert_once();
        if reverted == 0 {
            return Ok(UndoResult {
                reverted,
                reply: None,
            });
        }

        if self.settings.undo_policy == UndoPolicy::LastPly {
            while self.is_computer_turn() && !self.history.is_empty() {
                reverted += self.revert_once();
            }
        }

        log!("Undo reverted {} move(s), {} to move", reverted, self.current_mark);

        let reply = if self.is_computer_turn() {
            self.computer_move()
        } else {
            None
        };

        Ok(UndoResult { reverted, reply })
    }

    fn revert_once(&mut self) -> usize {
        let popped = match self.settings.undo_policy {
            UndoPolicy::Paired => self.history.pop_paired(),
            UndoPolicy::LastPly => self.history.pop_last_ply().into_iter().collect(),
        };

        for mv in &popped {
            self.board.clear_unchecked(mv.position);
        }
        if let Some(earliest) = popped.first() {
            self.current_mark = earliest.mark;
        }
        popped.len()
    }

    /// Clears the board and history. X is always on move afterwards, and the
    /// computer opens straight away when it holds X.
    pub fn reset(&mut self) {
        log!("Game reset");
        self.start(Mark::X);
    }

    pub fn current_state(&self) -> GameSnapshot {
        GameSnapshot {
            cells: *self.board.cells(),
            turn: self.current_mark,
            outcome: self.outcome,
        }
    }

    pub fn phase(&self) -> GamePhase {
        if self.outcome.is_over() {
            GamePhase::GameOver(self.outcome)
        } else {
            GamePhase::AwaitingMove(self.current_mark)
        }
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn history(&self) -> Vec<Move> {
        self.history.chronological()
    }

    pub fn moves_by(&self, side: Side) -> &[Move] {
        self.history.stack(side)
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.outcome {
            Outcome::Win(_) => self.board.check_win_with_line(),
            _ => None,
        }
    }

    fn ensure_ongoing(&self) -> Result<(), GameError> {
        if self.outcome.is_over() {
            return Err(GameError::InvalidState {
                reason: "Game is already over",
            });
        }
        Ok(())
    }

    fn is_computer_turn(&self) -> bool {
        !self.outcome.is_over() && self.settings.mode.computer_mark() == Some(self.current_mark)
    }

    fn side_of(&self, mark: Mark) -> Side {
        // Multiplayer keeps X on the player stack.
        let player_mark = self.settings.mode.human_mark().unwrap_or(Mark::X);
        if mark == player_mark {
            Side::Player
        } else {
            Side::Opponent
        }
    }

    fn place(&mut self, position: Position, mark: Mark) -> Result<Move, GameError> {
        self.board.set(position.row, position.col, mark)?;

        let mv = Move {
            position,
            mark,
            ply: self.history.len(),
        };
        self.history.push(self.side_of(mark), mv);

        self.check_game_over();
        if !self.outcome.is_over() {
            self.current_mark = mark.opponent();
        }
        Ok(mv)
    }

    fn check_game_over(&mut self) {
        if let Some(winner) = self.board.check_win() {
            self.outcome = Outcome::Win(winner);
        } else if self.board.is_full() {
            self.outcome = Outcome::Draw;
        } else {
            return;
        }
        log!("Game over after {} moves: {}", self.history.len(), self.outcome);
    }

    fn computer_move(&mut self) -> Option<Move> {
        let GameMode::SinglePlayer { difficulty, human } = self.settings.mode else {
            return None;
        };
        let computer_mark = human.opponent();

        let position = calculate_move(difficulty, &mut self.board, computer_mark, &mut self.rng)?;
        self.place(position, computer_mark).ok()
    }
}
