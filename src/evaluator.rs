use crate::error::EvaluateError;
use std::fmt;

/// Classification of one guessed letter against the solution.
///
/// Variants are ordered by precedence: `Absent < Present < Correct`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterResult {
    Absent,  // Gray
    Present, // Yellow
    Correct, // Green
}

impl LetterResult {
    /// Parse the G/Y/X code, case-insensitive.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'G' => Some(Self::Correct),
            'Y' => Some(Self::Present),
            'X' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => 'X',
        }
    }
}

impl fmt::Display for LetterResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}

/// Score `guess` against `solution`.
///
/// Exact matches are taken first and removed from the pool, so a letter is
/// never marked more times than it occurs in the solution.
///
/// # Errors
/// Returns `EvaluateError::LengthMismatch` if the words differ in length.
pub fn evaluate(guess: &str, solution: &str) -> Result<Vec<LetterResult>, EvaluateError> {
    let guess_chars: Vec<char> = guess.chars().collect();
    let mut pool: Vec<Option<char>> = solution.chars().map(Some).collect();

    if guess_chars.len() != pool.len() {
        return Err(EvaluateError::LengthMismatch {
            guess: guess_chars.len(),
            solution: pool.len(),
        });
    }

    let mut results = vec![LetterResult::Absent; guess_chars.len()];

    // First pass: exact positions
    for (i, &g) in guess_chars.iter().enumerate() {
        if pool[i] == Some(g) {
            results[i] = LetterResult::Correct;
            pool[i] = None;
        }
    }

    // Second pass: misplaced letters from what is left
    for (i, &g) in guess_chars.iter().enumerate() {
        if results[i] == LetterResult::Correct {
            continue;
        }
        if let Some(pos) = pool.iter().position(|&c| c == Some(g)) {
            results[i] = LetterResult::Present;
            pool[pos] = None;
        }
    }

    Ok(results)
}

#[must_use]
pub fn is_solved(results: &[LetterResult]) -> bool {
    !results.is_empty() && results.iter().all(|r| *r == LetterResult::Correct)
}

/// Render results as a G/Y/X string, e.g. `GYXXG`.
#[must_use]
pub fn format_results(results: &[LetterResult]) -> String {
    results.iter().map(|r| r.as_char()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::LetterResult::{Absent, Correct, Present};

    fn codes(guess: &str, solution: &str) -> String {
        format_results(&evaluate(guess, solution).unwrap())
    }

    #[test]
    fn test_exact_guess_is_all_correct() {
        let results = evaluate("PHOEBE", "PHOEBE").unwrap();
        assert_eq!(results, vec![Correct; 6]);
        assert!(is_solved(&results));
    }

    #[test]
    fn test_rotated_word_is_all_present() {
        assert_eq!(
            evaluate("SWORD", "WORDS").unwrap(),
            vec![Present, Present, Present, Present, Present]
        );
    }

    #[test]
    fn test_duplicate_consumed_by_exact_match_first() {
        // The trailing E is exact, leaving one E for the first position
        assert_eq!(codes("EEBPHE", "PHOEBE"), "YXYYYG");
    }

    #[test]
    fn test_duplicate_guess_letter_with_single_solution_letter() {
        // The exact L claims the only L in the solution
        assert_eq!(codes("LLAMA", "PLANT"), "XGGXX");
        assert_eq!(codes("LLAMA", "HELLO"), "YYXXX");
        assert_eq!(codes("SPEED", "CREEP"), "XYGGX");
    }

    #[test]
    fn test_exact_match_beats_earlier_misplaced_duplicate() {
        // The E at position 4 is exact, so the E at position 0 gets nothing
        assert_eq!(codes("EXXXE", "ABCDE"), "XXXXG");
    }

    #[test]
    fn test_no_common_letters() {
        assert_eq!(codes("QUICK", "BRAWN"), "XXXXX");
        assert!(!is_solved(&evaluate("QUICK", "BRAWN").unwrap()));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        assert_eq!(
            evaluate("BEEPH", "PHOEBE"),
            Err(EvaluateError::LengthMismatch {
                guess: 5,
                solution: 6
            })
        );
    }

    #[test]
    fn test_from_char_round_trip_codes() {
        for c in ['G', 'Y', 'X'] {
            assert_eq!(LetterResult::from_char(c).map(LetterResult::as_char), Some(c));
        }
        assert_eq!(LetterResult::from_char('g'), Some(Correct));
        assert_eq!(LetterResult::from_char('A'), None);
    }

    #[test]
    fn test_precedence_ordering() {
        assert!(Correct > Present);
        assert!(Present > Absent);
        assert_eq!(Absent.max(Correct), Correct);
    }

    #[test]
    fn test_empty_results_are_not_solved() {
        assert!(!is_solved(&[]));
    }
}
