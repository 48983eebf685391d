//! Board state tracker.
//!
//! `Board` owns the whole game: solution, submitted rows, the in-progress
//! guess and the keyboard. Every input goes through [`Board::apply`], which
//! returns an [`Update`] describing what changed so a renderer can redraw
//! without reaching into the board.
//!
//! # State Machine
//! - `Entering` → (submit) → `RowComplete` → (letter) → `Entering`
//! - `Entering`/`RowComplete` → (submit) → `GameOver(Won | Lost)`
//! - `GameOver` → (reset) → `Entering`

use crate::config::GameConfig;
use crate::error::{ConfigError, GuessError};
use crate::evaluator::{LetterResult, evaluate, is_solved};
use crate::keyboard::KeyboardState;
use crate::{debug_log, info_log};
use std::fmt;

/// Decides whether a full-width guess is a playable word.
pub trait WordAcceptor {
    fn accepts(&self, word: &str) -> bool;
}

impl<F: Fn(&str) -> bool> WordAcceptor for F {
    fn accepts(&self, word: &str) -> bool {
        self(word)
    }
}

/// Accepts any string of uppercase letters.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyLetters;

impl WordAcceptor for AnyLetters {
    fn accepts(&self, word: &str) -> bool {
        !word.is_empty() && word.chars().all(|c| c.is_ascii_uppercase())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    RowComplete,
    GameOver(Outcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub result: Outcome,
    pub solution: String,
    pub attempts: usize,
}

/// A submitted and scored row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatedRow {
    pub guess: String,
    pub results: Vec<LetterResult>,
}

/// Everything a renderer needs to reveal a freshly scored row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowReveal {
    pub row: usize,
    pub guess: String,
    pub results: Vec<LetterResult>,
    pub keyboard_changes: Vec<(char, LetterResult)>,
    pub outcome: Option<GameOutcome>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Letter(char),
    Delete,
    Submit,
    Reset,
}

/// Description of one state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    LetterAdded { row: usize, col: usize, letter: char },
    LetterRemoved { row: usize, col: usize },
    RowRevealed(RowReveal),
    /// Rejected guess; the board is unchanged.
    Advisory(GuessError),
    Reset,
    Ignored,
}

pub struct Board {
    config: GameConfig,
    acceptor: Box<dyn WordAcceptor>,
    rows: Vec<EvaluatedRow>,
    current: String,
    keyboard: KeyboardState,
    phase: Phase,
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("width", &self.width())
            .field("max_attempts", &self.config.max_attempts)
            .field("rows", &self.rows)
            .field("current", &self.current)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl Board {
    /// # Errors
    /// Returns `ConfigError` if the config does not validate.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_acceptor(config, AnyLetters)
    }

    /// # Errors
    /// Returns `ConfigError` if the config does not validate.
    pub fn with_acceptor<A: WordAcceptor + 'static>(
        config: GameConfig,
        acceptor: A,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        info_log!(
            "Board::new() - width {}, {} attempts",
            config.width(),
            config.max_attempts
        );
        Ok(Self {
            config,
            acceptor: Box::new(acceptor),
            rows: Vec::new(),
            current: String::new(),
            keyboard: KeyboardState::new(),
            phase: Phase::Entering,
        })
    }

    /// Apply one input event and describe the result.
    pub fn apply(&mut self, event: InputEvent) -> Update {
        debug_log!("Board::apply() - {:?} in {:?}", event, self.phase);
        match event {
            InputEvent::Letter(c) => self.add_letter(c),
            InputEvent::Delete => self.delete_letter(),
            InputEvent::Submit => {
                if self.is_over() {
                    return Update::Ignored;
                }
                match self.submit_guess() {
                    Ok(reveal) => Update::RowRevealed(reveal),
                    Err(e) => Update::Advisory(e),
                }
            }
            InputEvent::Reset => {
                self.reset();
                Update::Reset
            }
        }
    }

    /// Append a letter to the in-progress guess.
    ///
    /// Ignored once the game is over, when the row is full, or for anything
    /// other than an ASCII letter.
    pub fn add_letter(&mut self, letter: char) -> Update {
        if self.is_over() || !letter.is_ascii_alphabetic() || self.current.len() >= self.width() {
            return Update::Ignored;
        }
        let letter = letter.to_ascii_uppercase();
        let col = self.current.len();
        self.current.push(letter);
        self.phase = Phase::Entering;
        Update::LetterAdded {
            row: self.current_row(),
            col,
            letter,
        }
    }

    pub fn delete_letter(&mut self) -> Update {
        if self.is_over() || self.current.pop().is_none() {
            return Update::Ignored;
        }
        Update::LetterRemoved {
            row: self.current_row(),
            col: self.current.len(),
        }
    }

    /// Submit the in-progress guess.
    ///
    /// # Errors
    /// Returns `GuessError` if the guess is short, not accepted, or the game
    /// is over. The board is left untouched.
    pub fn submit_guess(&mut self) -> Result<RowReveal, GuessError> {
        let guess = self.current.clone();
        self.submit_word(&guess)
    }

    /// Submit a whole word at once, replacing any in-progress letters.
    ///
    /// # Errors
    /// Same as [`Board::submit_guess`], plus `TooLong` for words wider than
    /// the board.
    pub fn submit_word(&mut self, word: &str) -> Result<RowReveal, GuessError> {
        if self.is_over() {
            return Err(GuessError::GameOver);
        }
        let guess = word.trim().to_ascii_uppercase();
        let (expected, actual) = (self.width(), guess.chars().count());
        if actual < expected {
            info_log!("submit_word() - '{}' is incomplete", guess);
            return Err(GuessError::Incomplete { expected, actual });
        }
        if actual > expected {
            return Err(GuessError::TooLong { expected, actual });
        }
        if !self.acceptor.accepts(&guess) {
            info_log!("submit_word() - '{}' rejected by word check", guess);
            return Err(GuessError::NotAccepted(guess));
        }

        debug_log!("submit_word() - evaluating '{}'", guess);
        let results = evaluate(&guess, &self.config.solution)?;

        let row = self.rows.len();
        let keyboard_changes = self.keyboard.merge(&guess, &results);
        let won = is_solved(&results);
        self.rows.push(EvaluatedRow {
            guess: guess.clone(),
            results: results.clone(),
        });
        self.current.clear();

        self.phase = if won {
            Phase::GameOver(Outcome::Won)
        } else if self.rows.len() >= self.config.max_attempts {
            Phase::GameOver(Outcome::Lost)
        } else {
            Phase::RowComplete
        };
        let outcome = self.outcome();
        info_log!("submit_word() - row {} scored, now {:?}", row, self.phase);

        Ok(RowReveal {
            row,
            guess,
            results,
            keyboard_changes,
            outcome,
        })
    }

    /// Start over with the same solution and settings.
    pub fn reset(&mut self) {
        info_log!("Board::reset()");
        self.rows.clear();
        self.current.clear();
        self.keyboard.clear();
        self.phase = Phase::Entering;
    }

    #[must_use]
    pub fn rows(&self) -> &[EvaluatedRow] {
        &self.rows
    }

    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current
    }

    /// Index of the row being typed into. Stays on the last row once every
    /// row is used.
    #[must_use]
    pub fn current_row(&self) -> usize {
        self.rows
            .len()
            .min(self.config.max_attempts.saturating_sub(1))
    }

    #[must_use]
    pub fn current_col(&self) -> usize {
        self.current.len()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.config.width()
    }

    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.config.max_attempts
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        self.config.max_attempts.saturating_sub(self.rows.len())
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            Phase::GameOver(result) => Some(GameOutcome {
                result,
                solution: self.config.solution.clone(),
                attempts: self.rows.len(),
            }),
            _ => None,
        }
    }

    #[must_use]
    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// The solution, available only after the game has ended.
    #[must_use]
    pub fn revealed_solution(&self) -> Option<&str> {
        self.is_over().then_some(self.config.solution.as_str())
    }
}

/// An action read from the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Input(InputEvent),
    /// A whole word typed at once (line mode).
    Guess(String),
    Exit,
}

/// A front end that feeds actions to the board and renders its updates.
pub trait GameInterface {
    fn display_board(&mut self, board: &Board);
    fn read_action(&mut self, board: &Board) -> Option<UserAction>;
    fn display_update(&mut self, board: &Board, update: &Update);
    fn display_exit_message(&mut self);
}

/// Drive `board` from `interface` until the player exits.
pub fn game_loop<I: GameInterface>(board: &mut Board, interface: &mut I) {
    interface.display_board(board);
    loop {
        let Some(action) = interface.read_action(board) else {
            continue;
        };
        let update = match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::Input(event) => board.apply(event),
            UserAction::Guess(word) => {
                if board.is_over() {
                    Update::Ignored
                } else {
                    match board.submit_word(&word) {
                        Ok(reveal) => Update::RowRevealed(reveal),
                        Err(e) => Update::Advisory(e),
                    }
                }
            }
        };
        interface.display_update(board, &update);
    }
}
