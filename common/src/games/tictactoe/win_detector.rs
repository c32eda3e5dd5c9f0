use super::types::{BOARD_SIZE, Cell, Mark, Position, WinningLine};

pub type Grid = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// Every line of three as (row, col) triples, scanned in this order:
/// rows top to bottom, columns left to right, main diagonal, anti-diagonal.
pub const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

fn line_owner(grid: &Grid, line: &[(usize, usize); 3]) -> Option<Mark> {
    let [(r0, c0), (r1, c1), (r2, c2)] = *line;
    let mark = grid[r0][c0].mark()?;
    if grid[r1][c1] == grid[r0][c0] && grid[r2][c2] == grid[r0][c0] {
        Some(mark)
    } else {
        None
    }
}

pub fn check_win(grid: &Grid) -> Option<Mark> {
    LINES.iter().find_map(|line| line_owner(grid, line))
}

pub fn check_win_with_line(grid: &Grid) -> Option<WinningLine> {
    LINES.iter().find_map(|line| {
        let mark = line_owner(grid, line)?;
        let (start_row, start_col) = line[0];
        let (end_row, end_col) = line[2];
        Some(WinningLine::new(
            mark,
            Position::new(start_row, start_col),
            Position::new(end_row, end_col),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(rows: [&str; 3]) -> Grid {
        let mut grid = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                grid[r][c] = match ch {
                    'X' => Cell::X,
                    'O' => Cell::O,
                    _ => Cell::Empty,
                };
            }
        }
        grid
    }

    #[test]
    fn test_every_line_is_detected_for_both_marks() {
        for line in LINES.iter() {
            for (mark, cell) in [(Mark::X, Cell::X), (Mark::O, Cell::O)] {
                let mut grid = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
                for &(r, c) in line {
                    grid[r][c] = cell;
                }
                assert_eq!(check_win(&grid), Some(mark), "line {:?}", line);
            }
        }
    }

    #[test]
    fn test_empty_and_mixed_lines_do_not_win() {
        assert_eq!(check_win(&grid_from(["...", "...", "..."])), None);
        assert_eq!(check_win(&grid_from(["XXO", "OOX", "XOX"])), None);
    }

    #[test]
    fn test_winning_line_endpoints() {
        let line = check_win_with_line(&grid_from(["O.X", ".OX", "..O"])).unwrap();
        assert_eq!(line.mark, Mark::O);
        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.end, Position::new(2, 2));

        let line = check_win_with_line(&grid_from(["..X", ".X.", "X.."])).unwrap();
        assert_eq!(line.start, Position::new(0, 2));
        assert_eq!(line.end, Position::new(2, 0));
    }

    #[test]
    fn test_rows_are_reported_before_columns() {
        let line = check_win_with_line(&grid_from(["XXX", "X..", "X.."])).unwrap();
        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.end, Position::new(0, 2));
    }
}
