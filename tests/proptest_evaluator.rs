use proptest::prelude::*;
use proptest::test_runner::Config;
use wordle_game::{Board, GameConfig, LetterResult, evaluate};

fn count(word: &str, letter: char) -> usize {
    word.chars().filter(|&c| c == letter).count()
}

fn word_pair() -> impl Strategy<Value = (String, String)> {
    (1_usize..8).prop_flat_map(|len| {
        let word = || proptest::collection::vec(prop::char::range('A', 'E'), len)
            .prop_map(|chars| chars.into_iter().collect::<String>());
        (word(), word())
    })
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn marked_letters_never_exceed_solution_count((guess, solution) in word_pair()) {
        let results = evaluate(&guess, &solution).unwrap();
        for letter in guess.chars() {
            let marked = guess
                .chars()
                .zip(&results)
                .filter(|(c, r)| *c == letter && **r != LetterResult::Absent)
                .count();
            prop_assert!(marked <= count(&solution, letter));
        }
    }

    #[test]
    fn correct_marks_only_exact_positions((guess, solution) in word_pair()) {
        let results = evaluate(&guess, &solution).unwrap();
        for ((g, s), r) in guess.chars().zip(solution.chars()).zip(&results) {
            prop_assert_eq!(*r == LetterResult::Correct, g == s);
        }
    }

    #[test]
    fn guessing_the_solution_wins(solution in "[A-Z]{1,8}") {
        let mut board = Board::new(GameConfig::new(&solution, 6).unwrap()).unwrap();
        let reveal = board.submit_word(&solution).unwrap();
        prop_assert!(reveal.results.iter().all(|r| *r == LetterResult::Correct));
        prop_assert!(board.is_over());
        prop_assert_eq!(board.revealed_solution(), Some(solution.as_str()));
    }

    #[test]
    fn keyboard_state_never_downgrades(
        solution in "[A-D]{5}",
        guesses in proptest::collection::vec("[A-D]{5}", 1..6),
    ) {
        let mut board = Board::new(GameConfig::new(&solution, 6).unwrap()).unwrap();
        for guess in &guesses {
            if board.is_over() {
                break;
            }
            let before: Vec<(char, LetterResult)> = board.keyboard().iter().collect();
            board.submit_word(guess).unwrap();
            for (letter, result) in before {
                prop_assert!(board.keyboard().get(letter) >= Some(result));
            }
        }
    }

    #[test]
    fn short_submissions_never_mutate_history(
        solution in "[A-Z]{2,8}",
        cut in 0_usize..8,
    ) {
        let mut board = Board::new(GameConfig::new(&solution, 6).unwrap()).unwrap();
        let short: String = solution.chars().take(cut.min(solution.len() - 1)).collect();
        prop_assert!(board.submit_word(&short).is_err());
        prop_assert!(board.rows().is_empty());
        prop_assert!(board.keyboard().is_empty());
    }
}
