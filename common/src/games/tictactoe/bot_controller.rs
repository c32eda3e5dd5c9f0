use crate::games::SessionRng;
use super::board::BoardState;
use super::types::{Difficulty, Mark, Position};

const WIN_SCORE: i32 = 10;
const LOSS_SCORE: i32 = -10;
const DRAW_SCORE: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub best_move: Option<Position>,
    pub nodes: u64,
}

/// Picks the bot's next cell, or `None` when the board has no empty cell.
///
/// The board is borrowed mutably because the advanced search explores by
/// placing and retracting marks on it; it is returned unchanged.
pub fn calculate_move(
    difficulty: Difficulty,
    board: &mut BoardState,
    bot_mark: Mark,
    rng: &mut SessionRng,
) -> Option<Position> {
    match difficulty {
        Difficulty::Beginner => calculate_random_move(board, rng),
        Difficulty::Advanced => calculate_minimax_move(board, bot_mark).best_move,
    }
}

fn calculate_random_move(board: &BoardState, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = board.available_moves();
    rng.choose(&available_moves).copied()
}

/// Full-depth minimax for `bot_mark`, who is assumed to be on move.
pub fn calculate_minimax_move(board: &mut BoardState, bot_mark: Mark) -> SearchResult {
    let mut nodes = 0;
    let (score, best_move) = minimax(board, bot_mark, bot_mark, &mut nodes);
    SearchResult {
        score,
        best_move,
        nodes,
    }
}

fn minimax(
    board: &mut BoardState,
    to_move: Mark,
    bot_mark: Mark,
    nodes: &mut u64,
) -> (i32, Option<Position>) {
    *nodes += 1;

    if let Some(winner) = board.check_win() {
        let score = if winner == bot_mark { WIN_SCORE } else { LOSS_SCORE };
        return (score, None);
    }

    if board.is_full() {
        return (DRAW_SCORE, None);
    }

    let is_maximizing = to_move == bot_mark;
    let mut best_score = if is_maximizing { i32::MIN } else { i32::MAX };
    let mut best_move = None;

    for position in board.available_moves() {
        board.place_unchecked(position, to_move);
        let (score, _) = minimax(board, to_move.opponent(), bot_mark, nodes);
        board.clear_unchecked(position);

        // Strict comparison: the first move found keeps a tie.
        let improves = if is_maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_move = Some(position);
        }
    }

    (best_score, best_move)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::board_from;

    #[test]
    fn test_corner_reply_to_center_opening() {
        let mut board = board_from(["...", ".X.", "..."]);
        let result = calculate_minimax_move(&mut board, Mark::O);
        assert_eq!(result.best_move, Some(Position::new(0, 0)));
        assert_eq!(result.score, DRAW_SCORE);
    }

    #[test]
    fn test_edge_reply_to_center_loses() {
        for edge in [(0, 1), (1, 0), (1, 2), (2, 1)] {
            let mut board = board_from(["...", ".X.", "..."]);
            board.set(edge.0, edge.1, Mark::O).unwrap();
            let result = calculate_minimax_move(&mut board, Mark::X);
            assert_eq!(result.score, WIN_SCORE, "edge {:?}", edge);
        }
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let mut board = board_from(["X..", ".O.", "..X"]);
        let before = board.clone();
        let result = calculate_minimax_move(&mut board, Mark::O);
        assert_eq!(board, before);
        assert!(result.nodes > 1);
    }

    #[test]
    fn test_blocks_the_only_threat() {
        let mut board = board_from(["XX.", ".O.", "..."]);
        let result = calculate_minimax_move(&mut board, Mark::O);
        assert_eq!(result.best_move, Some(Position::new(0, 2)));
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut board = board_from(["OO.", "XX.", "X.."]);
        let result = calculate_minimax_move(&mut board, Mark::O);
        assert_eq!(result.best_move, Some(Position::new(0, 2)));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_empty_board_is_a_draw_with_first_cell_chosen() {
        let mut board = BoardState::new();
        let result = calculate_minimax_move(&mut board, Mark::X);
        assert_eq!(result.score, DRAW_SCORE);
        assert_eq!(result.best_move, Some(Position::new(0, 0)));
    }

    #[test]
    fn test_terminal_positions_have_no_move() {
        let mut full = board_from(["XOX", "XOO", "OXX"]);
        assert_eq!(calculate_minimax_move(&mut full, Mark::X).best_move, None);

        let mut won = board_from(["XXX", "OO.", "..."]);
        let result = calculate_minimax_move(&mut won, Mark::O);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, LOSS_SCORE);
    }

    #[test]
    fn test_random_move_is_an_empty_cell() {
        let mut rng = SessionRng::new(3);
        let mut board = board_from(["XOX", "O.O", "XOX"]);
        for _ in 0..10 {
            let position = calculate_move(Difficulty::Beginner, &mut board, Mark::X, &mut rng);
            assert_eq!(position, Some(Position::new(1, 1)));
        }
    }

    #[test]
    fn test_random_move_is_reproducible_from_seed() {
        let mut board = BoardState::new();
        let mut a = SessionRng::new(2024);
        let mut b = SessionRng::new(2024);
        for _ in 0..20 {
            assert_eq!(
                calculate_move(Difficulty::Beginner, &mut board, Mark::O, &mut a),
                calculate_move(Difficulty::Beginner, &mut board, Mark::O, &mut b)
            );
        }
    }

    #[test]
    fn test_no_move_on_full_board() {
        let mut rng = SessionRng::new(1);
        let mut board = board_from(["XOX", "XOO", "OXX"]);
        assert_eq!(calculate_move(Difficulty::Beginner, &mut board, Mark::X, &mut rng), None);
        assert_eq!(calculate_move(Difficulty::Advanced, &mut board, Mark::X, &mut rng), None);
    }
}
