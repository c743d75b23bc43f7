//! Manual harness: a fixed table of reference passwords with expected results.
//!
//! Scores are compared with a tolerance so small tuning changes don't
//! break the table; labels must match exactly.

use std::fmt;

use crate::evaluator::evaluate;
use crate::report::{StrengthLabel, StrengthReport};

/// Allowed distance between expected and actual score.
pub const SCORE_TOLERANCE: u8 = 10;

const SHOWN_SUGGESTIONS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarnessCase {
    pub password: &'static str,
    pub expected_label: StrengthLabel,
    pub expected_score: u8,
    pub description: &'static str,
}

const fn case(
    password: &'static str,
    expected_label: StrengthLabel,
    expected_score: u8,
    description: &'static str,
) -> HarnessCase {
    HarnessCase {
        password,
        expected_label,
        expected_score,
        description,
    }
}

pub const CASES: [HarnessCase; 10] = [
    case("", StrengthLabel::None, 0, "empty password"),
    case("123", StrengthLabel::Weak, 0, "very short password"),
    case("12345678", StrengthLabel::Weak, 25, "numbers only, 8 chars"),
    case("abcdefgh", StrengthLabel::Weak, 25, "lowercase only, 8 chars"),
    case("Password", StrengthLabel::Weak, 35, "mixed case, no numbers"),
    case("Password1", StrengthLabel::Medium, 55, "mixed case with numbers"),
    case(
        "Password1!",
        StrengthLabel::Strong,
        70,
        "mixed case with numbers and special chars",
    ),
    case("MyVeryStr0ng!P@ssw0rd", StrengthLabel::Strong, 95, "long complex password"),
    case("password123", StrengthLabel::Weak, 35, "common pattern penalty"),
    case("aaabbbccc", StrengthLabel::Weak, 25, "repeated characters penalty"),
];

/// Result of running one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOutcome {
    pub index: usize,
    pub case: HarnessCase,
    pub report: StrengthReport,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        self.report.label == self.case.expected_label
            && self.report.score.abs_diff(self.case.expected_score) <= SCORE_TOLERANCE
    }
}

impl fmt::Display for CaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let number = self.index + 1;
        if self.passed() {
            writeln!(f, "PASS Test {}: {}", number, self.case.description)?;
            writeln!(
                f,
                "   Password: {:?} -> {} ({})",
                self.case.password, self.report.label, self.report.score
            )?;
        } else {
            writeln!(f, "FAIL Test {}: {}", number, self.case.description)?;
            writeln!(f, "   Password: {:?}", self.case.password)?;
            writeln!(
                f,
                "   Expected: {} (~{})",
                self.case.expected_label, self.case.expected_score
            )?;
            writeln!(f, "   Got: {} ({})", self.report.label, self.report.score)?;
        }

        if !self.report.suggestions.is_empty() {
            let shown: Vec<&str> = self
                .report
                .suggestions
                .iter()
                .take(SHOWN_SUGGESTIONS)
                .map(|s| s.as_str())
                .collect();
            writeln!(f, "   Suggestions: {}", shown.join(", "))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HarnessSummary {
    pub outcomes: Vec<CaseOutcome>,
    pub passed: usize,
    pub failed: usize,
}

impl HarnessSummary {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Evaluates every case through the shared evaluator.
pub fn run_cases(cases: &[HarnessCase]) -> HarnessSummary {
    let mut summary = HarnessSummary::default();

    for (index, case) in cases.iter().enumerate() {
        let outcome = CaseOutcome {
            index,
            case: *case,
            report: evaluate(case.password),
        };
        if outcome.passed() {
            summary.passed += 1;
        } else {
            summary.failed += 1;
        }
        summary.outcomes.push(outcome);
    }

    summary
}
