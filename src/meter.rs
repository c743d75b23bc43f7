//! Presentation model for a strength meter widget.

use crate::config::MeterConfig;
use crate::evaluator::evaluate;
use crate::report::{ColorTag, StrengthLabel, StrengthReport, Suggestion};

/// What a meter widget renders for the current input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeterView {
    pub label: StrengthLabel,
    pub color_tag: ColorTag,
    /// Bar fill, `0..=100`.
    pub percent: u8,
    /// Leading suggestions, at most `max_visible_suggestions`.
    pub suggestions: Vec<Suggestion>,
    /// Suggestions cut from the list.
    pub hidden_suggestions: usize,
}

impl MeterView {
    /// Evaluates `password` and builds the view. Returns `None` for an empty
    /// password, where the meter is not shown at all.
    pub fn for_password(password: &str, config: &MeterConfig) -> Option<Self> {
        if password.is_empty() {
            return None;
        }
        Some(Self::from_report(evaluate(password), config))
    }

    pub fn from_report(report: StrengthReport, config: &MeterConfig) -> Self {
        let StrengthReport {
            score,
            label,
            color_tag,
            mut suggestions,
        } = report;

        let visible = suggestions.len().min(config.max_visible_suggestions);
        let hidden_suggestions = suggestions.len() - visible;
        suggestions.truncate(visible);

        Self {
            label,
            color_tag,
            percent: score,
            suggestions,
            hidden_suggestions,
        }
    }

    pub fn has_suggestions(&self) -> bool {
        !self.suggestions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_hidden_for_empty_password() {
        assert_eq!(MeterView::for_password("", &MeterConfig::default()), None);
    }

    #[test]
    fn test_meter_truncates_suggestions() {
        let view = MeterView::for_password("123", &MeterConfig::default()).unwrap();
        assert_eq!(
            view.suggestions,
            vec![
                Suggestion::MinLength,
                Suggestion::Lowercase,
                Suggestion::Uppercase,
            ]
        );
        assert_eq!(view.hidden_suggestions, 2);
        assert_eq!(view.percent, 0);
        assert_eq!(view.color_tag, ColorTag::Weak);
    }

    #[test]
    fn test_meter_respects_config() {
        let config = MeterConfig {
            max_visible_suggestions: 10,
            ..MeterConfig::default()
        };
        let view = MeterView::for_password("123", &config).unwrap();
        assert_eq!(view.suggestions.len(), 5);
        assert_eq!(view.hidden_suggestions, 0);
    }

    #[test]
    fn test_meter_without_suggestions() {
        let view = MeterView::for_password("MyVeryStr0ng!P@ssw0rd", &MeterConfig::default()).unwrap();
        assert!(!view.has_suggestions());
        assert_eq!(view.percent, 95);
        assert_eq!(view.label, StrengthLabel::Strong);
    }
}
