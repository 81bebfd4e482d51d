//! Per-guess feedback
//!
//! A `GuessResult` holds one `Feedback` per guessed letter and encodes as a
//! 5-character string:
//! - uppercase letter: exact match, or letter already known correct elsewhere
//! - lowercase letter: in the secret at another position
//! - `_`: not in the secret

use super::Word;
use super::word::WORD_LENGTH;
use std::fmt;

/// Outcome for a single position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter matches the secret at this position
    Exact,
    /// Letter is in the secret at a different position
    Misplaced,
    /// Letter is not in the secret
    Absent,
    /// Letter does not match here, but is already known correct elsewhere
    Resolved,
}

impl Feedback {
    /// Encoded symbol for `letter` with this outcome
    #[must_use]
    pub const fn symbol(self, letter: u8) -> char {
        match self {
            Self::Exact | Self::Resolved => letter.to_ascii_uppercase() as char,
            Self::Misplaced => letter.to_ascii_lowercase() as char,
            Self::Absent => '_',
        }
    }
}

/// The scored outcome of one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    guess: Word,
    feedback: [Feedback; WORD_LENGTH],
}

impl GuessResult {
    pub(crate) const fn new(guess: Word, feedback: [Feedback; WORD_LENGTH]) -> Self {
        Self { guess, feedback }
    }

    /// The normalized guess this result belongs to
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    /// Per-position outcomes
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &[Feedback; WORD_LENGTH] {
        &self.feedback
    }

    /// Iterate `(letter, feedback)` pairs in guess order
    pub fn iter(&self) -> impl Iterator<Item = (u8, Feedback)> + '_ {
        self.guess
            .chars()
            .iter()
            .copied()
            .zip(self.feedback.iter().copied())
    }

    /// True when every position matched the secret exactly
    #[must_use]
    pub fn is_exact_match(&self) -> bool {
        self.feedback.iter().all(|&f| f == Feedback::Exact)
    }

    /// Number of positions with the given outcome
    #[must_use]
    pub fn count(&self, outcome: Feedback) -> usize {
        self.feedback.iter().filter(|&&f| f == outcome).count()
    }

    /// Encode as the 5-character result string
    #[must_use]
    pub fn encode(&self) -> String {
        self.iter()
            .map(|(letter, feedback)| feedback.symbol(letter))
            .collect()
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl PartialEq<str> for GuessResult {
    fn eq(&self, other: &str) -> bool {
        self.encode() == other
    }
}

impl PartialEq<&str> for GuessResult {
    fn eq(&self, other: &&str) -> bool {
        self.encode() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Feedback::{Absent, Exact, Misplaced, Resolved};

    fn result(guess: &str, feedback: [Feedback; 5]) -> GuessResult {
        GuessResult::new(Word::new(guess).unwrap(), feedback)
    }

    #[test]
    fn encode_mixed() {
        let r = result("coder", [Exact, Exact, Misplaced, Misplaced, Misplaced]);
        assert_eq!(r.encode(), "COder");
        assert_eq!(r.to_string(), "COder");
        assert_eq!(r, "COder");
    }

    #[test]
    fn encode_absent_as_underscore() {
        let r = result("abcfg", [Absent, Absent, Misplaced, Absent, Absent]);
        assert_eq!(r.encode(), "__c__");
        assert_eq!(r.count(Absent), 4);
    }

    #[test]
    fn resolved_shows_uppercase() {
        let r = result("ooooo", [Misplaced, Exact, Resolved, Resolved, Resolved]);
        assert_eq!(r.encode(), "oOOOO");
        assert!(!r.is_exact_match());
    }

    #[test]
    fn exact_match() {
        let r = result("corde", [Exact; 5]);
        assert!(r.is_exact_match());
        assert_eq!(r.count(Exact), 5);
        assert_eq!(r.guess().text(), "CORDE");
    }
}
