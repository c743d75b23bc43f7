//! Strength report types and score classification.

use std::fmt;

/// Highest score an evaluation can produce.
pub const MAX_SCORE: u8 = 100;

const MEDIUM_THRESHOLD: u8 = 40;
const STRONG_THRESHOLD: u8 = 70;

/// Strength label attached to a report.
///
/// `None` is reserved for the empty password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrengthLabel {
    #[default]
    None,
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::None => "",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Symbolic severity tag for presentation layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorTag {
    #[default]
    None,
    Weak,
    Medium,
    Strong,
}

impl From<StrengthLabel> for ColorTag {
    fn from(label: StrengthLabel) -> Self {
        match label {
            StrengthLabel::None => ColorTag::None,
            StrengthLabel::Weak => ColorTag::Weak,
            StrengthLabel::Medium => ColorTag::Medium,
            StrengthLabel::Strong => ColorTag::Strong,
        }
    }
}

/// Improvement hint, in the order the rules emit them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suggestion {
    MinLength,
    Lowercase,
    Uppercase,
    Numbers,
    SpecialCharacters,
    CommonPatterns,
}

impl Suggestion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Suggestion::MinLength => "Use at least 8 characters",
            Suggestion::Lowercase => "Add lowercase letters",
            Suggestion::Uppercase => "Add uppercase letters",
            Suggestion::Numbers => "Add numbers",
            Suggestion::SpecialCharacters => "Add special characters (!@#$%^&*)",
            Suggestion::CommonPatterns => "Avoid common patterns and words",
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single evaluation. Owned by the caller, never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StrengthReport {
    /// Clamped score in `0..=100`.
    pub score: u8,
    pub label: StrengthLabel,
    pub color_tag: ColorTag,
    /// Full, untruncated suggestion list.
    pub suggestions: Vec<Suggestion>,
}

impl StrengthReport {
    /// Report for the empty password.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a report from a raw score, clamping and classifying it.
    pub(crate) fn from_raw(raw_score: i32, suggestions: Vec<Suggestion>) -> Self {
        let score = raw_score.clamp(0, MAX_SCORE as i32) as u8;
        let label = classify(score);
        Self {
            score,
            label,
            color_tag: label.into(),
            suggestions,
        }
    }
}

/// Maps a clamped score to its label.
///
/// Never returns [`StrengthLabel::None`]; that label only comes from an empty input.
pub fn classify(score: u8) -> StrengthLabel {
    if score < MEDIUM_THRESHOLD {
        StrengthLabel::Weak
    } else if score < STRONG_THRESHOLD {
        StrengthLabel::Medium
    } else {
        StrengthLabel::Strong
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(0), StrengthLabel::Weak);
        assert_eq!(classify(39), StrengthLabel::Weak);
        assert_eq!(classify(40), StrengthLabel::Medium);
        assert_eq!(classify(69), StrengthLabel::Medium);
        assert_eq!(classify(70), StrengthLabel::Strong);
        assert_eq!(classify(100), StrengthLabel::Strong);
    }

    #[test]
    fn test_from_raw_clamps() {
        let low = StrengthReport::from_raw(-5, vec![]);
        assert_eq!(low.score, 0);
        assert_eq!(low.label, StrengthLabel::Weak);

        let high = StrengthReport::from_raw(140, vec![]);
        assert_eq!(high.score, 100);
        assert_eq!(high.color_tag, ColorTag::Strong);
    }

    #[test]
    fn test_empty_report() {
        let report = StrengthReport::empty();
        assert_eq!(report.score, 0);
        assert_eq!(report.label.as_str(), "");
        assert_eq!(report.color_tag, ColorTag::None);
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_suggestion_text() {
        assert_eq!(
            Suggestion::SpecialCharacters.to_string(),
            "Add special characters (!@#$%^&*)"
        );
        assert_eq!(Suggestion::MinLength.as_str(), "Use at least 8 characters");
    }
}
