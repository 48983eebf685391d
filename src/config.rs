use crate::error::ConfigError;

pub const DEFAULT_SOLUTION: &str = "PHOEBE";
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Settings fixed for the lifetime of a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub solution: String,
    pub max_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            solution: DEFAULT_SOLUTION.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Build a validated config. The solution is trimmed and uppercased.
    ///
    /// # Errors
    /// Returns `ConfigError` if the solution is empty or not made of A-Z,
    /// or if `max_attempts` is zero.
    pub fn new(solution: &str, max_attempts: usize) -> Result<Self, ConfigError> {
        let config = Self {
            solution: solution.trim().to_ascii_uppercase(),
            max_attempts,
        };
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// See [`GameConfig::new`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.solution.is_empty() {
            return Err(ConfigError::EmptySolution);
        }
        if !self.solution.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ConfigError::InvalidSolution(self.solution.clone()));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(())
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.solution.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.width(), 6);
        assert_eq!(config.max_attempts, 6);
    }

    #[test]
    fn test_new_normalizes_case_and_whitespace() {
        let config = GameConfig::new("  crane ", 6).unwrap();
        assert_eq!(config.solution, "CRANE");
    }

    #[test]
    fn test_empty_solution_rejected() {
        assert_eq!(GameConfig::new("   ", 6), Err(ConfigError::EmptySolution));
    }

    #[test]
    fn test_non_letters_rejected() {
        assert_eq!(
            GameConfig::new("CR4NE", 6),
            Err(ConfigError::InvalidSolution("CR4NE".to_string()))
        );
        assert!(GameConfig::new("CRÅNE", 6).is_err());
    }

    #[test]
    fn test_zero_attempts_rejected() {
        assert_eq!(GameConfig::new("CRANE", 0), Err(ConfigError::ZeroAttempts));
    }
}
