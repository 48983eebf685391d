use crate::config::{DEFAULT_MAX_ATTEMPTS, DEFAULT_SOLUTION, GameConfig};
use crate::error::ConfigError;
use crate::evaluator::{LetterResult, format_results};
use crate::game_state::{
    Board, GameInterface, GameOutcome, InputEvent, Outcome, Update, UserAction,
};
use crate::{debug_log, info_log};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Wordle game options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Word to guess
    #[arg(short = 's', long, env = "WORDLE_SOLUTION", default_value = DEFAULT_SOLUTION)]
    pub solution: String,

    /// Number of guesses allowed
    #[arg(short = 'a', long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub attempts: usize,

    /// Line-based mode instead of the terminal UI
    #[arg(long)]
    pub plain: bool,

    /// Write logs here instead of the default data directory
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// # Errors
    /// Returns `ConfigError` if the solution or attempt count is invalid.
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        GameConfig::new(&self.solution, self.attempts)
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

pub enum GuessInput {
    Valid(String),
    Invalid,
    Exit,
    NewGame,
}

fn is_letters(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// Read one line and classify it. End of input counts as exit.
pub fn read_guess<R: BufRead>(reader: &mut R) -> GuessInput {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => return GuessInput::Exit,
        Ok(_) => {}
    }
    let input = input.trim().to_uppercase();

    match input.as_str() {
        "EXIT" => GuessInput::Exit,
        "NEXT" => GuessInput::NewGame,
        _ if is_letters(&input) => GuessInput::Valid(input),
        _ => GuessInput::Invalid,
    }
}

/// Summarise the keyboard as `Correct: .. | Present: .. | Absent: ..`.
#[must_use]
pub fn keyboard_summary(board: &Board) -> String {
    let group = |wanted: LetterResult| -> String {
        board
            .keyboard()
            .iter()
            .filter(|(_, r)| *r == wanted)
            .map(|(l, _)| l.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };
    format!(
        "Correct: {} | Present: {} | Absent: {}",
        group(LetterResult::Correct),
        group(LetterResult::Present),
        group(LetterResult::Absent)
    )
}

#[must_use]
pub fn outcome_message(outcome: &GameOutcome, max_attempts: usize) -> String {
    match outcome.result {
        Outcome::Won => format!(
            "Solved in {}/{}! The word was {}.",
            outcome.attempts, max_attempts, outcome.solution
        ),
        Outcome::Lost => format!("Out of attempts. The word was {}.", outcome.solution),
    }
}

/// Line-based front end: one word per line.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn say(&mut self, line: &str) {
        if let Err(e) = writeln!(self.writer, "{line}") {
            debug_log!("CliInterface::say() - write failed: {}", e);
        }
    }

    fn prompt(&mut self, board: &Board) {
        let line = if board.is_over() {
            "Type 'next' to play again or 'exit' to quit.".to_string()
        } else {
            format!(
                "\nEnter your guess ({} letters, {} left, 'next' for a new game, 'exit' to quit):",
                board.width(),
                board.attempts_left()
            )
        };
        self.say(&line);
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn display_board(&mut self, board: &Board) {
        self.say(&format!(
            "Guess the {}-letter word. You have {} attempts.",
            board.width(),
            board.max_attempts()
        ));
        for (i, row) in board.rows().iter().enumerate() {
            self.say(&format!("{}. {} {}", i + 1, row.guess, format_results(&row.results)));
        }
    }

    fn read_action(&mut self, board: &Board) -> Option<UserAction> {
        self.prompt(board);
        match read_guess(&mut self.reader) {
            GuessInput::Valid(word) => Some(UserAction::Guess(word)),
            GuessInput::NewGame => Some(UserAction::Input(InputEvent::Reset)),
            GuessInput::Exit => Some(UserAction::Exit),
            GuessInput::Invalid => {
                self.say("Only letters are allowed.");
                None
            }
        }
    }

    fn display_update(&mut self, board: &Board, update: &Update) {
        match update {
            Update::RowRevealed(reveal) => {
                info_log!("CliInterface - revealed row {}", reveal.row);
                self.say(&format!(
                    "{}. {} {}",
                    reveal.row + 1,
                    reveal.guess,
                    format_results(&reveal.results)
                ));
                self.say(&keyboard_summary(board));
                if let Some(outcome) = &reveal.outcome {
                    self.say(&outcome_message(outcome, board.max_attempts()));
                    self.say("Thanks for playing!");
                }
            }
            Update::Advisory(err) => self.say(&err.to_string()),
            Update::Reset => {
                self.say("New game started.");
                self.display_board(board);
            }
            Update::Ignored if board.is_over() => self.say("The game is over."),
            Update::LetterAdded { .. } | Update::LetterRemoved { .. } | Update::Ignored => {}
        }
    }

    fn display_exit_message(&mut self) {
        self.say("Exiting.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_loop;
    use std::io::Cursor;

    fn play(solution: &str, input: &str) -> String {
        let mut board = Board::new(GameConfig::new(solution, 6).unwrap()).unwrap();
        let mut interface = CliInterface::new(Cursor::new(input), Vec::new());
        game_loop(&mut board, &mut interface);
        String::from_utf8(interface.into_writer()).unwrap()
    }

    #[test]
    fn test_parse_cli_defaults() {
        let cli = Cli::try_parse_from(["wordle-game"]).unwrap();
        assert_eq!(cli.attempts, 6);
        assert!(!cli.plain);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_parse_cli_with_options() {
        let cli =
            Cli::try_parse_from(["wordle-game", "-s", "crane", "-a", "4", "--plain"]).unwrap();
        let config = cli.game_config().unwrap();
        assert_eq!(config.solution, "CRANE");
        assert_eq!(config.max_attempts, 4);
        assert!(cli.plain);
    }

    #[test]
    fn test_cli_rejects_bad_solution() {
        let cli = Cli::try_parse_from(["wordle-game", "-s", "cr4ne"]).unwrap();
        assert!(cli.game_config().is_err());
    }

    #[test]
    fn test_read_guess_valid_word() {
        let mut reader = Cursor::new("crane\n");
        match read_guess(&mut reader) {
            GuessInput::Valid(word) => assert_eq!(word, "CRANE"),
            _ => panic!("Expected Valid guess"),
        }
    }

    #[test]
    fn test_read_guess_commands() {
        assert!(matches!(read_guess(&mut Cursor::new("exit\n")), GuessInput::Exit));
        assert!(matches!(read_guess(&mut Cursor::new("NEXT\n")), GuessInput::NewGame));
        assert!(matches!(read_guess(&mut Cursor::new("")), GuessInput::Exit));
    }

    #[test]
    fn test_read_guess_invalid_with_numbers() {
        assert!(matches!(
            read_guess(&mut Cursor::new("CRAN3\n")),
            GuessInput::Invalid
        ));
        assert!(matches!(read_guess(&mut Cursor::new("\n")), GuessInput::Invalid));
    }

    #[test]
    fn test_win_prints_solution() {
        let output = play("WORDS", "sword\nwords\n");
        assert!(output.contains("1. SWORD YYYYY"));
        assert!(output.contains("2. WORDS GGGGG"));
        assert!(output.contains("Solved in 2/6! The word was WORDS."));
    }

    #[test]
    fn test_short_guess_shows_advisory() {
        let output = play("PHOEBE", "beeph\nexit\n");
        assert!(output.contains("Not enough letters"));
        assert!(!output.contains("1. BEEPH"));
        assert!(output.contains("Exiting."));
    }

    #[test]
    fn test_guess_after_game_over_ignored() {
        let output = play("WORDS", "words\nsword\nexit\n");
        assert!(output.contains("The game is over."));
        assert!(!output.contains("2. SWORD"));
    }

    #[test]
    fn test_next_starts_new_game() {
        let output = play("WORDS", "words\nnext\nsword\nexit\n");
        assert!(output.contains("New game started."));
        assert!(output.contains("1. SWORD YYYYY"));
    }

    #[test]
    fn test_keyboard_summary_groups_letters() {
        let mut board = Board::new(GameConfig::new("SLATE", 6).unwrap()).unwrap();
        board.submit_word("CRANE").unwrap();
        assert_eq!(
            keyboard_summary(&board),
            "Correct: A E | Present:  | Absent: C N R"
        );
    }
}
