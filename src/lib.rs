// Library interface for wordle-game
// Integration tests and the binary both go through these modules

pub mod cli;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod game_state;
pub mod keyboard;
pub mod logging;
pub mod tui;

// Re-export commonly used items for easier testing
pub use config::GameConfig;
pub use error::{ConfigError, EvaluateError, GuessError};
pub use evaluator::{LetterResult, evaluate, format_results, is_solved};
pub use game_state::{
    Board, GameInterface, GameOutcome, InputEvent, Outcome, Phase, RowReveal, Update, UserAction,
    WordAcceptor, game_loop,
};
pub use keyboard::KeyboardState;
