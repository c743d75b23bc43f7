//! Password evaluation sections
//!
//! Each section scores one group of rules and emits its suggestions.

mod length;
mod pattern;
mod variety;

pub use length::length_section;
pub use pattern::{CommonPattern, pattern_analysis_section};
pub use variety::{CharacterClasses, character_variety_section};

use crate::report::Suggestion;

/// Points and suggestions contributed by one section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionResult {
    pub points: i32,
    pub suggestions: Vec<Suggestion>,
}

impl SectionResult {
    pub(crate) fn award(&mut self, points: i32) {
        self.points += points;
    }

    pub(crate) fn suggest(&mut self, suggestion: Suggestion) {
        self.suggestions.push(suggestion);
    }
}
