use std::fmt;

use super::error::GameError;
use super::types::{BOARD_SIZE, Cell, Mark, Position, WinningLine};
use super::win_detector::{Grid, check_win, check_win_with_line};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardState {
    cells: Grid,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    fn check_bounds(row: usize, col: usize) -> Result<(), GameError> {
        if Position::new(row, col).is_on_board() {
            Ok(())
        } else {
            Err(GameError::OutOfRange { row, col })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        Self::check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), GameError> {
        Self::check_bounds(row, col)?;
        if !self.cells[row][col].is_empty() {
            return Err(GameError::CellOccupied { row, col });
        }
        self.cells[row][col] = mark.into();
        Ok(())
    }

    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        Self::check_bounds(row, col)?;
        self.cells[row][col] = Cell::Empty;
        Ok(())
    }

    pub fn check_win(&self) -> Option<Mark> {
        check_win(&self.cells)
    }

    pub fn check_win_with_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.cells)
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| !cell.is_empty()))
    }

    pub fn reset(&mut self) {
        self.cells = Grid::default();
    }

    /// Empty cells in row-major order.
    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell.is_empty() {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn count(&self, mark: Mark) -> usize {
        let target = Cell::from(mark);
        self.cells.iter().flatten().filter(|&&cell| cell == target).count()
    }

    pub fn cells(&self) -> &Grid {
        &self.cells
    }

    // In-bounds only; callers iterate `available_moves`.
    pub(crate) fn place_unchecked(&mut self, position: Position, mark: Mark) {
        self.cells[position.row][position.col] = mark.into();
    }

    pub(crate) fn clear_unchecked(&mut self, position: Position) {
        self.cells[position.row][position.col] = Cell::Empty;
    }
}

impl From<Grid> for BoardState {
    fn from(cells: Grid) -> Self {
        Self { cells }
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn board_from(rows: [&str; BOARD_SIZE]) -> BoardState {
    let mut board = BoardState::new();
    for (r, row) in rows.iter().enumerate() {
        for (c, ch) in row.chars().enumerate() {
            match ch {
                'X' => board.place_unchecked(Position::new(r, c), Mark::X),
                'O' => board.place_unchecked(Position::new(r, c), Mark::O),
                _ => {}
            }
        }
    }
    board
}
