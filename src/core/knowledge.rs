//! Cumulative per-letter knowledge
//!
//! Tracks what has been learned about each of the 26 letters across every guess
//! scored against one secret. The table only ever moves forward:
//! `Unknown -> {Absent | Present} -> Correct`.

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Check whether a byte is an uppercase alphabet letter
#[inline]
#[must_use]
pub const fn is_alphabet_letter(letter: u8) -> bool {
    letter.is_ascii_uppercase()
}

/// Index (0-25) of an uppercase letter in the alphabet
///
/// # Panics
/// Panics if `letter` is not in A-Z
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    assert!(is_alphabet_letter(letter), "letter must be in A-Z");
    (letter - b'A') as usize
}

/// What is known about a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterState {
    /// Never appeared in a guess
    #[default]
    Unknown,
    /// Not in the secret
    Absent,
    /// In the secret, no correct position known yet
    Present,
    /// In the secret, at least one correct position known
    Correct,
}

impl LetterState {
    /// Whether moving from `self` to `next` keeps the table monotonic
    #[must_use]
    pub const fn can_become(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Unknown, _)
                | (Self::Absent, Self::Absent)
                | (Self::Present, Self::Present | Self::Correct)
                | (Self::Correct, Self::Correct)
        )
    }

    /// Display symbol for `letter` in this state
    ///
    /// `*` unknown, `_` absent, lowercase present, uppercase correct.
    #[must_use]
    pub const fn symbol(self, letter: u8) -> char {
        match self {
            Self::Unknown => '*',
            Self::Absent => '_',
            Self::Present => letter.to_ascii_lowercase() as char,
            Self::Correct => letter.to_ascii_uppercase() as char,
        }
    }
}

/// The 26-entry letter knowledge table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Knowledge {
    states: [LetterState; ALPHABET_SIZE],
}

impl Knowledge {
    /// A table with every letter `Unknown`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State of an uppercase letter
    ///
    /// # Panics
    /// Panics if `letter` is not in A-Z
    #[inline]
    #[must_use]
    pub const fn state(&self, letter: u8) -> LetterState {
        self.states[letter_index(letter)]
    }

    /// Record a new state for a letter
    ///
    /// Callers are responsible for only moving forward; this is checked in debug builds.
    pub(crate) fn set(&mut self, letter: u8, next: LetterState) {
        let slot = &mut self.states[letter_index(letter)];
        debug_assert!(
            slot.can_become(next),
            "letter {} cannot move from {slot:?} to {next:?}",
            letter as char
        );
        if *slot != next {
            log::trace!("letter {}: {slot:?} -> {next:?}", letter as char);
            *slot = next;
        }
    }

    /// Number of letters currently in `state`
    #[must_use]
    pub fn count(&self, state: LetterState) -> usize {
        self.states.iter().filter(|&&s| s == state).count()
    }

    /// Iterate `(letter, state)` pairs from A to Z
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterState)> + '_ {
        (b'A'..=b'Z').zip(self.states.iter().copied())
    }

    /// Encode the whole table as a 26-character string, A to Z
    ///
    /// # Examples
    /// ```
    /// use wordle_evaluator::core::Knowledge;
    ///
    /// assert_eq!(Knowledge::new().encode(), "*".repeat(26));
    /// ```
    #[must_use]
    pub fn encode(&self) -> String {
        self.iter()
            .map(|(letter, state)| state.symbol(letter))
            .collect()
    }
}

impl fmt::Display for Knowledge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_table_is_all_unknown() {
        let knowledge = Knowledge::new();
        assert_eq!(knowledge.count(LetterState::Unknown), ALPHABET_SIZE);
        assert_eq!(knowledge.encode(), "**************************");
    }

    #[test]
    fn encode_uses_one_symbol_per_state() {
        let mut knowledge = Knowledge::new();
        knowledge.set(b'A', LetterState::Absent);
        knowledge.set(b'C', LetterState::Present);
        knowledge.set(b'E', LetterState::Correct);
        knowledge.set(b'Z', LetterState::Absent);

        assert_eq!(knowledge.encode(), "_*c*E********************_");
        assert_eq!(knowledge.to_string(), knowledge.encode());
        assert_eq!(knowledge.encode().len(), ALPHABET_SIZE);
    }

    #[test]
    fn state_lookup() {
        let mut knowledge = Knowledge::new();
        knowledge.set(b'Q', LetterState::Present);
        assert_eq!(knowledge.state(b'Q'), LetterState::Present);
        assert_eq!(knowledge.state(b'R'), LetterState::Unknown);
    }

    #[test]
    #[should_panic(expected = "letter must be in A-Z")]
    fn state_of_lowercase_byte_panics() {
        let _ = Knowledge::new().state(b'c');
    }

    #[test]
    #[should_panic(expected = "letter must be in A-Z")]
    fn letter_index_rejects_non_letters() {
        let _ = letter_index(b'[');
    }

    #[test]
    fn letter_index_bounds() {
        assert_eq!(letter_index(b'A'), 0);
        assert_eq!(letter_index(b'Z'), ALPHABET_SIZE - 1);
    }

    #[test]
    fn present_upgrades_to_correct() {
        let mut knowledge = Knowledge::new();
        knowledge.set(b'O', LetterState::Present);
        knowledge.set(b'O', LetterState::Correct);
        assert_eq!(knowledge.state(b'O'), LetterState::Correct);
        assert_eq!(knowledge.count(LetterState::Correct), 1);
    }

    #[test]
    fn transitions_are_monotonic() {
        use super::LetterState::{Absent, Correct, Present, Unknown};

        assert!(Unknown.can_become(Absent));
        assert!(Unknown.can_become(Present));
        assert!(Unknown.can_become(Correct));
        assert!(Present.can_become(Correct));
        assert!(Correct.can_become(Correct));

        assert!(!Correct.can_become(Present));
        assert!(!Correct.can_become(Absent));
        assert!(!Absent.can_become(Present));
        assert!(!Present.can_become(Absent));
        assert!(!Present.can_become(Unknown));
    }

    #[test]
    fn symbols() {
        assert_eq!(LetterState::Unknown.symbol(b'K'), '*');
        assert_eq!(LetterState::Absent.symbol(b'K'), '_');
        assert_eq!(LetterState::Present.symbol(b'K'), 'k');
        assert_eq!(LetterState::Correct.symbol(b'K'), 'K');
    }

    #[test]
    fn iter_covers_alphabet_in_order() {
        let knowledge = Knowledge::new();
        let letters: String = knowledge.iter().map(|(l, _)| l as char).collect();
        assert_eq!(letters, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }
}
