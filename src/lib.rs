//! Password strength meter library
//!
//! Scores a password from 0 to 100, labels it Weak, Medium or Strong, and
//! lists suggestions for improving it. Evaluation is pure, deterministic and
//! linear in the password length, so it can run on every keystroke.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_METER_DEBOUNCE_MS`: delay before async evaluation (default: 300)
//! - `PWD_METER_MAX_SUGGESTIONS`: suggestions shown by [`MeterView`] (default: 3)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{evaluate, StrengthLabel, Suggestion};
//!
//! let report = evaluate("Password1!");
//! assert_eq!(report.score, 70);
//! assert_eq!(report.label, StrengthLabel::Strong);
//! assert_eq!(report.suggestions, vec![Suggestion::CommonPatterns]);
//! ```

mod config;
mod error;
mod evaluator;
pub mod harness;
mod meter;
mod report;
mod sections;

// Public API
pub use config::{DEBOUNCE_ENV, MAX_SUGGESTIONS_ENV, MeterConfig};
pub use error::{ConfigError, EvaluationError};
pub use evaluator::{evaluate, evaluate_secret};
pub use meter::MeterView;
pub use report::{ColorTag, MAX_SCORE, StrengthLabel, StrengthReport, Suggestion, classify};
pub use sections::{CharacterClasses, CommonPattern};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_tx;
