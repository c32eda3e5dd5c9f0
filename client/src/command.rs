use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Place { row: usize, col: usize },
    Undo,
    Reset,
    Help,
    Quit,
}

impl FromStr for PlayerCommand {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = input
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|word| !word.is_empty())
            .collect();

        match words.as_slice() {
            ["undo" | "u"] => Ok(PlayerCommand::Undo),
            ["reset" | "r"] => Ok(PlayerCommand::Reset),
            ["help" | "h" | "?"] => Ok(PlayerCommand::Help),
            ["quit" | "q" | "exit"] => Ok(PlayerCommand::Quit),
            [row, col] => {
                let row = row
                    .parse()
                    .map_err(|_| format!("Invalid row: {}", row))?;
                let col = col
                    .parse()
                    .map_err(|_| format!("Invalid column: {}", col))?;
                Ok(PlayerCommand::Place { row, col })
            }
            [] => Err("Empty command".to_string()),
            _ => Err(format!("Unknown command: {}", input.trim())),
        }
    }
}

pub const HELP_TEXT: &str = "Commands:
  <row> <col>   place your mark (0-2 each, e.g. `1 1` for the center)
  undo          take back the last move(s)
  reset         start over
  help          show this text
  quit          leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_coordinates() {
        assert_eq!("1 2".parse(), Ok(PlayerCommand::Place { row: 1, col: 2 }));
        assert_eq!(" 0,0 ".parse(), Ok(PlayerCommand::Place { row: 0, col: 0 }));
    }

    #[test]
    fn test_out_of_range_coordinates_still_parse() {
        assert_eq!("7 1".parse(), Ok(PlayerCommand::Place { row: 7, col: 1 }));
    }

    #[test]
    fn test_parses_keywords() {
        assert_eq!("undo".parse(), Ok(PlayerCommand::Undo));
        assert_eq!("r".parse(), Ok(PlayerCommand::Reset));
        assert_eq!("?".parse(), Ok(PlayerCommand::Help));
        assert_eq!("exit".parse(), Ok(PlayerCommand::Quit));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!("".parse::<PlayerCommand>().is_err());
        assert!("a b".parse::<PlayerCommand>().is_err());
        assert!("1 2 3".parse::<PlayerCommand>().is_err());
        assert!("-1 0".parse::<PlayerCommand>().is_err());
    }
}
