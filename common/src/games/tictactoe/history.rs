use super::types::Move;

/// Which of the two history stacks a move belongs to.
///
/// In single-player `Player` holds the human's moves and `Opponent` the
/// computer's. In multiplayer `Player` holds X and `Opponent` holds O.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Opponent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    player: Vec<Move>,
    opponent: Vec<Move>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    fn stack_mut(&mut self, side: Side) -> &mut Vec<Move> {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    pub fn stack(&self, side: Side) -> &[Move] {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn push(&mut self, side: Side, mv: Move) {
        self.stack_mut(side).push(mv);
    }

    pub fn len(&self) -> usize {
        self.player.len() + self.opponent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.player.is_empty() && self.opponent.is_empty()
    }

    pub fn clear(&mut self) {
        self.player.clear();
        self.opponent.clear();
    }

    pub fn last(&self) -> Option<&Move> {
        match (self.player.last(), self.opponent.last()) {
            (Some(a), Some(b)) => Some(if a.ply > b.ply { a } else { b }),
            (a, b) => a.or(b),
        }
    }

    /// Pops the top of each non-empty stack. Returned oldest first.
    pub fn pop_paired(&mut self) -> Vec<Move> {
        let mut popped: Vec<Move> = [self.player.pop(), self.opponent.pop()]
            .into_iter()
            .flatten()
            .collect();
        popped.sort_by_key(|mv| mv.ply);
        popped
    }

    /// Pops only the most recent move across both stacks.
    pub fn pop_last_ply(&mut self) -> Option<Move> {
        let last_ply = self.last()?.ply;
        let side = if self.player.last().is_some_and(|mv| mv.ply == last_ply) {
            Side::Player
        } else {
            Side::Opponent
        };
        self.stack_mut(side).pop()
    }

    pub fn chronological(&self) -> Vec<Move> {
        let mut moves: Vec<Move> = self.player.iter().chain(self.opponent.iter()).copied().collect();
        moves.sort_by_key(|mv| mv.ply);
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::{Mark, Position};

    fn mv(row: usize, col: usize, mark: Mark, ply: usize) -> Move {
        Move {
            position: Position::new(row, col),
            mark,
            ply,
        }
    }

    fn sample() -> MoveHistory {
        let mut history = MoveHistory::new();
        history.push(Side::Player, mv(1, 1, Mark::X, 0));
        history.push(Side::Opponent, mv(0, 0, Mark::O, 1));
        history.push(Side::Player, mv(2, 2, Mark::X, 2));
        history
    }

    #[test]
    fn test_chronological_merges_by_ply() {
        let plies: Vec<usize> = sample().chronological().iter().map(|m| m.ply).collect();
        assert_eq!(plies, vec![0, 1, 2]);
    }

    #[test]
    fn test_pop_paired_takes_one_from_each_stack() {
        let mut history = sample();
        let popped = history.pop_paired();
        assert_eq!(popped.iter().map(|m| m.ply).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(history.len(), 1);
        assert_eq!(history.last().map(|m| m.ply), Some(0));
    }

    #[test]
    fn test_pop_paired_with_one_empty_stack() {
        let mut history = MoveHistory::new();
        history.push(Side::Opponent, mv(0, 0, Mark::X, 0));
        assert_eq!(history.pop_paired().len(), 1);
        assert!(history.is_empty());
        assert!(history.pop_paired().is_empty());
    }

    #[test]
    fn test_pop_last_ply_is_strictly_chronological() {
        let mut history = sample();
        assert_eq!(history.pop_last_ply().map(|m| m.ply), Some(2));
        assert_eq!(history.pop_last_ply().map(|m| m.ply), Some(1));
        assert_eq!(history.pop_last_ply().map(|m| m.ply), Some(0));
        assert_eq!(history.pop_last_ply(), None);
    }

    #[test]
    fn test_stacks_are_kept_apart() {
        let history = sample();
        assert_eq!(history.stack(Side::Player).len(), 2);
        assert_eq!(history.stack(Side::Opponent).len(), 1);
    }
}
