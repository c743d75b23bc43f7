//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

#[cfg(feature = "async")]
use crate::error::EvaluationError;

use crate::report::StrengthReport;
use crate::sections::{
    SectionResult, character_variety_section, length_section, pattern_analysis_section,
};

/// Evaluates password strength and returns a report.
///
/// Pure and total: any string is valid input, and identical input yields
/// an identical report. The empty password short-circuits to
/// [`StrengthReport::empty`].
pub fn evaluate(password: &str) -> StrengthReport {
    if password.is_empty() {
        return StrengthReport::empty();
    }

    // Orchestrator: execute sections in sequence
    let sections: [(&str, fn(&str) -> SectionResult); 3] = [
        ("length", length_section),
        ("variety", character_variety_section),
        ("pattern", pattern_analysis_section),
    ];

    let mut score = 0;
    let mut suggestions = Vec::new();

    for (_section_name, section_fn) in sections {
        let result = section_fn(password);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            "Section {} contributed {} points",
            _section_name,
            result.points
        );

        score += result.points;
        suggestions.extend(result.suggestions);
    }

    let report = StrengthReport::from_raw(score, suggestions);

    #[cfg(feature = "tracing")]
    tracing::debug!("Password evaluated: score={}, label={}", report.score, report.label);

    report
}

/// Evaluates a secret password without copying it out.
pub fn evaluate_secret(password: &SecretString) -> StrengthReport {
    evaluate(password.expose_secret())
}

/// Async version that waits for `debounce`, then sends the report via channel.
///
/// # Errors
///
/// - [`EvaluationError::Cancelled`] if `token` is cancelled before the delay ends
/// - [`EvaluationError::ChannelClosed`] if the receiver has been dropped
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthReport>,
    debounce: Duration,
) -> Result<(), EvaluationError> {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation is about to start...");

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("Password evaluation cancelled");
            return Err(EvaluationError::Cancelled);
        }
        _ = tokio::time::sleep(debounce) => {}
    }

    let report = evaluate_secret(password);

    tx.send(report).await.map_err(|_e| {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
        EvaluationError::ChannelClosed
    })
}
