//! Length section - minimum length and long-password bonus.

use super::SectionResult;
use crate::report::Suggestion;

const MIN_LENGTH: usize = 8;
const LONG_LENGTH: usize = 12;

const MIN_LENGTH_POINTS: i32 = 30;
const LONG_LENGTH_POINTS: i32 = 10;

/// Scores the password length, counted in code points.
///
/// Both thresholds apply independently; only the minimum emits a suggestion.
pub fn length_section(password: &str) -> SectionResult {
    let mut result = SectionResult::default();
    let len = password.chars().count();

    if len >= MIN_LENGTH {
        result.award(MIN_LENGTH_POINTS);
    } else {
        result.suggest(Suggestion::MinLength);
    }

    if len >= LONG_LENGTH {
        result.award(LONG_LENGTH_POINTS);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        let result = length_section("Short1!");
        assert_eq!(result.points, 0);
        assert_eq!(result.suggestions, vec![Suggestion::MinLength]);
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let result = length_section("12345678");
        assert_eq!(result.points, 30);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_length_section_long() {
        let result = length_section("LongEnough12");
        assert_eq!(result.points, 40);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_length_section_counts_code_points() {
        // 8 code points, 16 bytes
        let result = length_section("éééééééé");
        assert_eq!(result.points, 30);
    }
}
