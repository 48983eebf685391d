use thiserror::Error;

/// Raised when the evaluator is called with words of different lengths.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluateError {
    #[error("guess has {guess} letters but the solution has {solution}")]
    LengthMismatch { guess: usize, solution: usize },
}

/// Recoverable rejections of a submitted guess.
///
/// The display text is the advisory shown to the player. None of these
/// change the board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("Not enough letters")]
    Incomplete { expected: usize, actual: usize },
    #[error("Too many letters")]
    TooLong { expected: usize, actual: usize },
    #[error("Not in word list")]
    NotAccepted(String),
    #[error("The game is over")]
    GameOver,
    #[error(transparent)]
    Evaluate(#[from] EvaluateError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("the solution must contain at least one letter")]
    EmptySolution,
    #[error("the solution may only contain the letters A-Z, got '{0}'")]
    InvalidSolution(String),
    #[error("at least one attempt is required")]
    ZeroAttempts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_error_messages_match_advisories() {
        let incomplete = GuessError::Incomplete {
            expected: 5,
            actual: 3,
        };
        assert_eq!(incomplete.to_string(), "Not enough letters");
        assert_eq!(
            GuessError::NotAccepted("QQQQQ".to_string()).to_string(),
            "Not in word list"
        );
    }

    #[test]
    fn test_evaluate_error_keeps_its_message() {
        let err = GuessError::from(EvaluateError::LengthMismatch {
            guess: 5,
            solution: 6,
        });
        assert_eq!(err.to_string(), "guess has 5 letters but the solution has 6");
        assert_ne!(err.to_string(), "Not enough letters");
    }

    #[test]
    fn test_config_error_mentions_input() {
        let err = ConfigError::InvalidSolution("AB1".to_string());
        assert!(err.to_string().contains("AB1"));
    }
}
