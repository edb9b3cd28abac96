//! Password strength evaluator - runs every rule section and builds the report.

use secrecy::SecretString;

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::sections::{
    SectionResult, digit_section, length_section, lowercase_section, special_char_section,
    uppercase_section,
};
use crate::types::StrengthReport;

/// Evaluates a password against the five composition rules.
///
/// Every rule is checked independently; the score is the number that hold and
/// `errors` lists the failed ones in the order length, digit, uppercase,
/// lowercase, special character. Never fails, including for the empty string.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `min_length` - Minimum number of characters (see [`crate::DEFAULT_MIN_LENGTH`])
pub fn evaluate(password: &SecretString, min_length: usize) -> StrengthReport {
    let sections: [SectionResult; 5] = [
        length_section(password, min_length),
        digit_section(password),
        uppercase_section(password),
        lowercase_section(password),
        special_char_section(password),
    ];

    let failed = sections.into_iter().filter_map(Result::err).collect();
    let report = StrengthReport::new(min_length, failed);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Password evaluated: score {}/{} ({})",
        report.score(),
        crate::MAX_SCORE,
        report.label()
    );

    report
}

/// Evaluates using the minimum length from `config`.
pub fn evaluate_with(password: &SecretString, config: &Config) -> StrengthReport {
    evaluate(password, config.min_length)
}

/// Waits `debounce`, then evaluates and sends the report via channel.
///
/// Nothing is sent if `token` is cancelled before the debounce elapses, so a
/// caller re-evaluating on every keystroke can cancel the stale task.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    password: &SecretString,
    min_length: usize,
    debounce: Duration,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthReport>,
) {
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("Evaluation cancelled during debounce");
            return;
        }
        _ = tokio::time::sleep(debounce) => {}
    }

    let report = evaluate(password, min_length);

    if let Err(e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
