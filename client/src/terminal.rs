use std::io::{self, BufRead, Write};

use tictactoe_common::games::tictactoe::{GameSnapshot, Move, Outcome, TicTacToeEngine};
use tictactoe_common::log;

use crate::command::{HELP_TEXT, PlayerCommand};

pub fn render_board(snapshot: &GameSnapshot) -> String {
    let mut out = String::from("    0   1   2\n");
    for (row, cells) in snapshot.cells.iter().enumerate() {
        if row > 0 {
            out.push_str("   ---+---+---\n");
        }
        let line: Vec<String> = cells
            .iter()
            .map(|cell| match cell.mark() {
                Some(mark) => mark.to_string(),
                None => " ".to_string(),
            })
            .collect();
        out.push_str(&format!("{}   {}\n", row, line.join(" | ")));
    }
    out
}

pub fn status_line(snapshot: &GameSnapshot) -> String {
    match snapshot.outcome {
        Outcome::Ongoing => format!("Turn: {}", snapshot.turn),
        outcome => format!("{} Type `reset` to play again or `quit` to leave.", outcome),
    }
}

fn print_state<W: Write>(engine: &TicTacToeEngine, output: &mut W) -> io::Result<()> {
    let snapshot = engine.current_state();
    writeln!(output, "{}", render_board(&snapshot))?;
    writeln!(output, "{}", status_line(&snapshot))
}

fn announce_computer_move<W: Write>(mv: &Move, output: &mut W) -> io::Result<()> {
    writeln!(output, "Computer plays {} at {}", mv.mark, mv.position)
}

/// Reads commands until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    engine: &mut TicTacToeEngine,
    input: R,
    output: &mut W,
) -> io::Result<()> {
    print_state(engine, output)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<PlayerCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{}. Type `help` for commands.", e)?;
                continue;
            }
        };

        match command {
            PlayerCommand::Quit => break,
            PlayerCommand::Help => {
                writeln!(output, "{}", HELP_TEXT)?;
                continue;
            }
            PlayerCommand::Reset => {
                engine.reset();
                if let Some(opening) = engine.last_move() {
                    announce_computer_move(&opening, output)?;
                }
            }
            PlayerCommand::Undo => match engine.undo() {
                Ok(undo) if undo.reverted == 0 => writeln!(output, "Nothing to undo.")?,
                Ok(undo) => {
                    if let Some(reply) = undo.reply {
                        announce_computer_move(&reply, output)?;
                    }
                }
                Err(e) => writeln!(output, "{}", e)?,
            },
            PlayerCommand::Place { row, col } => match engine.apply_move(row, col) {
                Ok(result) => {
                    if let Some(reply) = result.reply {
                        announce_computer_move(&reply, output)?;
                    }
                }
                Err(e) => {
                    log!("Rejected move at ({}, {}): {}", row, col, e);
                    writeln!(output, "{}", e)?;
                    continue;
                }
            },
        }

        print_state(engine, output)?;
    }

    Ok(())
}
