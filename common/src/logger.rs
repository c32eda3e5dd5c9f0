use std::io::{self, Write};
use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }

    fn write_line<W: Write>(&self, out: &mut W, file: &str, line: u32, message: &str) -> io::Result<()> {
        writeln!(out, "{}", self.format_line(file, line, message))
    }

    /// Writes to stderr; stdout belongs to the terminal front end.
    pub fn log(&self, file: &str, line: u32, message: &str) {
        let _ = self.write_line(&mut io::stderr().lock(), file, line, message);
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

/// Messages are dropped until `init_logger` has been called.
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_strips_directories() {
        let logger = Logger::new(None);
        let line = logger.format_line("common/src/games/tictactoe/game_state.rs", 42, "hello");
        assert!(line.ends_with("[game_state.rs:42] hello"));
    }

    #[test]
    fn test_format_line_includes_prefix() {
        let logger = Logger::new(Some("Client".to_string()));
        let line = logger.format_line("main.rs", 7, "started");
        assert!(line.contains("[Client][main.rs:7] started"));
    }

    #[test]
    fn test_write_line_emits_one_formatted_line() {
        let logger = Logger::new(Some("Client".to_string()));
        let mut out = Vec::new();
        logger.write_line(&mut out, "src/terminal.rs", 12, "Game reset").unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("[Client][terminal.rs:12] Game reset\n"));
        assert_eq!(text.lines().count(), 1);
    }
}
