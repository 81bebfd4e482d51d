//! Win conditions
//!
//! Decides whether a knowledge table counts as solved. The evaluator takes one at
//! construction, so the rule can be swapped without touching scoring.

use super::knowledge::{Knowledge, LetterState};
use super::word::WORD_LENGTH;

/// A predicate over the knowledge table
pub trait WinCondition {
    /// Whether `knowledge` represents a solved puzzle
    fn is_satisfied(&self, knowledge: &Knowledge) -> bool;
}

/// Default rule: exactly 5 letters are known `Correct`
///
/// This counts letters, not positions, so a secret with a repeated letter
/// never reaches 5 and can't be solved under this rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct FiveCorrectLetters;

impl WinCondition for FiveCorrectLetters {
    fn is_satisfied(&self, knowledge: &Knowledge) -> bool {
        knowledge.count(LetterState::Correct) == WORD_LENGTH
    }
}

impl<F> WinCondition for F
where
    F: Fn(&Knowledge) -> bool,
{
    fn is_satisfied(&self, knowledge: &Knowledge) -> bool {
        self(knowledge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_correct(letters: &[u8]) -> Knowledge {
        let mut knowledge = Knowledge::new();
        for &letter in letters {
            knowledge.set(letter, LetterState::Correct);
        }
        knowledge
    }

    #[test]
    fn five_correct_letters_satisfied() {
        assert!(FiveCorrectLetters.is_satisfied(&with_correct(b"CORDE")));
    }

    #[test]
    fn fewer_than_five_not_satisfied() {
        assert!(!FiveCorrectLetters.is_satisfied(&Knowledge::new()));
        assert!(!FiveCorrectLetters.is_satisfied(&with_correct(b"LAM")));
    }

    #[test]
    fn present_letters_do_not_count() {
        let mut knowledge = with_correct(b"CO");
        for &letter in b"RDE" {
            knowledge.set(letter, LetterState::Present);
        }
        assert!(!FiveCorrectLetters.is_satisfied(&knowledge));
    }

    #[test]
    fn closures_are_win_conditions() {
        let any_correct = |k: &Knowledge| k.count(LetterState::Correct) > 0;
        assert!(!any_correct.is_satisfied(&Knowledge::new()));
        assert!(any_correct.is_satisfied(&with_correct(b"Q")));
    }
}
