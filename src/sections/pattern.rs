//! Pattern analysis section - repeats, ascending runs and common words.

use super::SectionResult;
use crate::report::Suggestion;

const PATTERN_PENALTY: i32 = 15;

const COMMON_WORDS: [&str; 6] = ["password", "123456", "qwerty", "admin", "login", "welcome"];

/// Known-weak pattern classes, checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommonPattern {
    /// Same character three or more times in a row.
    RepeatedChar,
    /// One of `123`..`789` or `890`.
    AscendingDigits,
    /// Three consecutive letters, `abc` through `xyz`, any case.
    AscendingLetters,
    /// A well-known weak word, any case.
    CommonWord,
}

impl CommonPattern {
    pub const ALL: [CommonPattern; 4] = [
        CommonPattern::RepeatedChar,
        CommonPattern::AscendingDigits,
        CommonPattern::AscendingLetters,
        CommonPattern::CommonWord,
    ];

    pub fn matches(&self, password: &str) -> bool {
        match self {
            CommonPattern::RepeatedChar => has_repeated_char(password),
            CommonPattern::AscendingDigits => has_ascending_digits(password),
            CommonPattern::AscendingLetters => has_ascending_letters(password),
            CommonPattern::CommonWord => has_common_word(password),
        }
    }

    /// First matching pattern, if any.
    pub fn first_match(password: &str) -> Option<CommonPattern> {
        Self::ALL.into_iter().find(|p| p.matches(password))
    }
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn has_repeated_char(password: &str) -> bool {
    let mut prev: Option<char> = None;
    let mut run = 0;
    for c in password.chars() {
        if is_line_terminator(c) {
            prev = None;
            run = 0;
            continue;
        }
        if prev == Some(c) {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            prev = Some(c);
            run = 1;
        }
    }
    false
}

fn has_ascending_digits(password: &str) -> bool {
    let digits: Vec<Option<u32>> = password
        .chars()
        .map(|c| c.is_ascii_digit().then(|| c as u32 - '0' as u32))
        .collect();
    // 123 through 789, plus 890; "901" and "012" do not count.
    digits.windows(3).any(|w| match (w[0], w[1], w[2]) {
        (Some(a), Some(b), Some(c)) => {
            (1..=8).contains(&a) && b == (a + 1) % 10 && c == (b + 1) % 10
        }
        _ => false,
    })
}

fn has_ascending_letters(password: &str) -> bool {
    let letters: Vec<Option<u8>> = password
        .chars()
        .map(|c| c.is_ascii_alphabetic().then(|| c.to_ascii_lowercase() as u8))
        .collect();
    letters.windows(3).any(|w| match (w[0], w[1], w[2]) {
        (Some(a), Some(b), Some(c)) => b == a + 1 && c == b + 1,
        _ => false,
    })
}

fn has_common_word(password: &str) -> bool {
    let lowered = password.to_ascii_lowercase();
    COMMON_WORDS.iter().any(|word| lowered.contains(word))
}

/// Applies the penalty once for the first matching pattern.
pub fn pattern_analysis_section(password: &str) -> SectionResult {
    let mut result = SectionResult::default();
    if CommonPattern::first_match(password).is_some() {
        result.award(-PATTERN_PENALTY);
        result.suggest(Suggestion::CommonPatterns);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_section_repetitive_chars() {
        assert_eq!(CommonPattern::first_match("xxaaaz"), Some(CommonPattern::RepeatedChar));
        assert_eq!(CommonPattern::first_match("1111"), Some(CommonPattern::RepeatedChar));
        assert!(!CommonPattern::RepeatedChar.matches("aabbaa"));
    }

    #[test]
    fn test_repeated_line_terminators_do_not_match() {
        assert!(!CommonPattern::RepeatedChar.matches("\n\n\n"));
        assert!(!CommonPattern::RepeatedChar.matches("a\na\na"));
        assert!(CommonPattern::RepeatedChar.matches("\t\t\t"));
    }

    #[test]
    fn test_pattern_section_sequential_numbers() {
        for run in ["123", "234", "345", "456", "567", "678", "789", "890"] {
            let pwd = format!("x{run}y");
            assert_eq!(
                CommonPattern::first_match(&pwd),
                Some(CommonPattern::AscendingDigits),
                "{run}"
            );
        }
        assert!(!CommonPattern::AscendingDigits.matches("901"));
        assert!(!CommonPattern::AscendingDigits.matches("012"));
        assert!(!CommonPattern::AscendingDigits.matches("321"));
    }

    #[test]
    fn test_pattern_section_sequential_letters() {
        assert_eq!(CommonPattern::first_match("abcd"), Some(CommonPattern::AscendingLetters));
        assert!(CommonPattern::AscendingLetters.matches("XyZ"));
        assert!(CommonPattern::AscendingLetters.matches("aBc"));
        assert!(!CommonPattern::AscendingLetters.matches("yza"));
        assert!(!CommonPattern::AscendingLetters.matches("cba"));
    }

    #[test]
    fn test_pattern_section_common_words() {
        assert_eq!(CommonPattern::first_match("MyPaSsWoRd"), Some(CommonPattern::CommonWord));
        assert!(CommonPattern::CommonWord.matches("WELCOME!"));
        assert!(CommonPattern::CommonWord.matches("xxloginxx"));
        assert!(!CommonPattern::CommonWord.matches("p@ssword"));
    }

    #[test]
    fn test_first_match_short_circuits_in_order() {
        // Repeats, digits, letters and a common word all present.
        assert_eq!(
            CommonPattern::first_match("aaa123abcpassword"),
            Some(CommonPattern::RepeatedChar)
        );
        assert_eq!(
            CommonPattern::first_match("abc123"),
            Some(CommonPattern::AscendingDigits)
        );
    }

    #[test]
    fn test_pattern_section_penalty_once() {
        let result = pattern_analysis_section("aaa123abcpassword");
        assert_eq!(result.points, -15);
        assert_eq!(result.suggestions, vec![Suggestion::CommonPatterns]);
    }

    #[test]
    fn test_pattern_section_strong_password() {
        let result = pattern_analysis_section("MyVeryStr0ng!P@ssw0rd");
        assert_eq!(result, SectionResult::default());
    }

    #[test]
    fn test_pattern_section_too_short() {
        assert_eq!(CommonPattern::first_match("ab"), None);
        assert_eq!(CommonPattern::first_match(""), None);
    }
}
