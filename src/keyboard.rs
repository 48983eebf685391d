use crate::evaluator::LetterResult;
use std::collections::BTreeMap;

/// Best result seen for each letter across all submitted guesses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    keys: BTreeMap<char, LetterResult>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one evaluated guess into the keyboard.
    ///
    /// A key only moves up in precedence. Returns the keys whose state
    /// changed, in guess order, each listed once.
    pub fn merge(&mut self, guess: &str, results: &[LetterResult]) -> Vec<(char, LetterResult)> {
        let mut changed: Vec<(char, LetterResult)> = Vec::new();
        for (letter, &result) in guess.chars().zip(results) {
            let letter = letter.to_ascii_uppercase();
            let current = self.keys.get(&letter).copied();
            if current.is_some_and(|c| c >= result) {
                continue;
            }
            self.keys.insert(letter, result);
            match changed.iter_mut().find(|(l, _)| *l == letter) {
                Some(entry) => entry.1 = result,
                None => changed.push((letter, result)),
            }
        }
        changed
    }

    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterResult> {
        self.keys.get(&letter.to_ascii_uppercase()).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, LetterResult)> + '_ {
        self.keys.iter().map(|(&k, &v)| (k, v))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }
}
