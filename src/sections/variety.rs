//! Character variety section - lowercase, uppercase, digits, special chars.
//!
//! Classification is ASCII-only so scores do not depend on locale.

use super::SectionResult;
use crate::report::Suggestion;

const SPECIAL_CHARS: &[u8] = b"!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

const CLASS_POINTS: i32 = 10;
const SPECIAL_POINTS: i32 = 15;
const VARIETY_BONUS: i32 = 10;
const VARIETY_THRESHOLD: usize = 3;

/// Which character classes occur in a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacterClasses {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub special: bool,
}

impl CharacterClasses {
    /// Single pass over the password.
    pub fn scan(password: &str) -> Self {
        let mut classes = Self::default();
        for c in password.chars() {
            classes.lowercase |= c.is_ascii_lowercase();
            classes.uppercase |= c.is_ascii_uppercase();
            classes.digit |= c.is_ascii_digit();
            classes.special |= is_special(c);
        }
        classes
    }

    pub fn count(&self) -> usize {
        [self.lowercase, self.uppercase, self.digit, self.special]
            .iter()
            .filter(|&&b| b)
            .count()
    }
}

fn is_special(c: char) -> bool {
    c.is_ascii() && SPECIAL_CHARS.contains(&(c as u8))
}

/// Scores the character classes present, plus the variety bonus.
pub fn character_variety_section(password: &str) -> SectionResult {
    let classes = CharacterClasses::scan(password);
    let mut result = SectionResult::default();

    let checks = [
        (classes.lowercase, CLASS_POINTS, Suggestion::Lowercase),
        (classes.uppercase, CLASS_POINTS, Suggestion::Uppercase),
        (classes.digit, CLASS_POINTS, Suggestion::Numbers),
        (classes.special, SPECIAL_POINTS, Suggestion::SpecialCharacters),
    ];

    for (present, points, suggestion) in checks {
        if present {
            result.award(points);
        } else {
            result.suggest(suggestion);
        }
    }

    if classes.count() >= VARIETY_THRESHOLD {
        result.award(VARIETY_BONUS);
    }

    result
}
