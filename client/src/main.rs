mod command;
mod config;
mod terminal;

use clap::{Parser, ValueEnum};
use tictactoe_common::games::tictactoe::{
    Difficulty, GameMode, GameSettings, Mark, TicTacToeEngine, UndoPolicy,
};
use tictactoe_common::{log, logger};

use config::{Config, get_config_manager};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Single,
    Multi,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MarkArg {
    X,
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Beginner,
    Advanced,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Beginner => Difficulty::Beginner,
            DifficultyArg::Advanced => Difficulty::Advanced,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum UndoArg {
    Paired,
    LastPly,
}

impl From<UndoArg> for UndoPolicy {
    fn from(arg: UndoArg) -> Self {
        match arg {
            UndoArg::Paired => UndoPolicy::Paired,
            UndoArg::LastPly => UndoPolicy::LastPly,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    /// YAML config file; defaults to one next to the executable.
    #[arg(long)]
    config: Option<String>,
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
    /// Your mark in single-player.
    #[arg(long, value_enum)]
    human: Option<MarkArg>,
    #[arg(long, value_enum)]
    difficulty: Option<DifficultyArg>,
    #[arg(long, value_enum)]
    undo: Option<UndoArg>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    fn apply_to(&self, config: &Config) -> Config {
        let mut game = config.game;

        let (current_human, current_difficulty) = match game.mode {
            GameMode::SinglePlayer { human, difficulty } => (human, difficulty),
            GameMode::Multiplayer => (Mark::X, Difficulty::default()),
        };
        let human = self.human.map(Mark::from).unwrap_or(current_human);
        let difficulty = self.difficulty.map(Difficulty::from).unwrap_or(current_difficulty);

        game.mode = match self.mode {
            Some(ModeArg::Multi) => GameMode::Multiplayer,
            Some(ModeArg::Single) => GameMode::SinglePlayer { human, difficulty },
            None if self.human.is_some() || self.difficulty.is_some() => {
                GameMode::SinglePlayer { human, difficulty }
            }
            None => game.mode,
        };
        if game.mode == GameMode::Multiplayer {
            game.first_mark = Mark::X;
        }
        if let Some(undo) = self.undo {
            game.undo_policy = undo.into();
        }

        Config {
            game,
            seed: self.seed.or(config.seed),
            use_log_prefix: self.use_log_prefix || config.use_log_prefix,
        }
    }
}

fn build_engine(settings: GameSettings, seed: Option<u64>) -> TicTacToeEngine {
    match seed {
        Some(seed) => TicTacToeEngine::with_seed(settings, seed),
        None => TicTacToeEngine::new(settings),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.as_deref());
    let config = args.apply_to(&config_manager.get_config()?);

    let prefix = if config.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    log!("Starting with {:?}", config.game);

    let mut engine = build_engine(config.game, config.seed);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    terminal::run(&mut engine, stdin.lock(), &mut stdout)?;

    log!("Session finished: {}", engine.outcome());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::parse_from(std::iter::once("tictactoe_client").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_flags_keep_config_values() {
        let config = Config {
            seed: Some(3),
            ..Config::default()
        };
        assert_eq!(parse(&[]).apply_to(&config), config);
    }

    #[test]
    fn test_flags_override_config() {
        let applied = parse(&["--human", "o", "--difficulty", "beginner", "--undo", "last-ply", "--seed", "9"])
            .apply_to(&Config::default());
        assert_eq!(
            applied.game,
            GameSettings::single_player(Mark::O, Difficulty::Beginner)
                .with_undo_policy(UndoPolicy::LastPly)
        );
        assert_eq!(applied.seed, Some(9));
    }

    #[test]
    fn test_multi_mode_forces_x_first() {
        let config = Config {
            game: GameSettings::single_player(Mark::O, Difficulty::Advanced).with_first_mark(Mark::O),
            ..Config::default()
        };
        let applied = parse(&["--mode", "multi"]).apply_to(&config);
        assert_eq!(applied.game.mode, GameMode::Multiplayer);
        assert_eq!(applied.game.first_mark, Mark::X);
    }

    #[test]
    fn test_seeded_engines_match() {
        let settings = GameSettings::single_player(Mark::O, Difficulty::Beginner);
        let a = build_engine(settings, Some(4));
        let b = build_engine(settings, Some(4));
        assert_eq!(a.current_state(), b.current_state());
    }
}
