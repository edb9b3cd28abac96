//! Rule-based password strength checking
//!
//! This library scores a password against five composition rules and
//! generates random password suggestions.
//!
//! # Rules
//!
//! In reporting order: minimum length, an ASCII digit, an ASCII uppercase
//! letter, an ASCII lowercase letter, and a special character (anything that
//! is not an ASCII letter, digit or `_`). The score is the number of rules
//! met, from 0 to 5; a password is strong when all five hold.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `cli`: Builds the `pwd-rules` binary
//!
//! # Environment Variables
//!
//! Read by [`Config::from_env`]:
//!
//! - `PWD_MIN_LENGTH` (default: 8)
//! - `PWD_SUGGESTION_COUNT` (default: 3)
//! - `PWD_SUGGESTION_LENGTH` (default: 12)
//!
//! # Example
//!
//! ```rust
//! use pwd_rules::{evaluate, suggest, StrengthLabel, DEFAULT_MIN_LENGTH};
//! use rand::{rngs::SmallRng, SeedableRng};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let report = evaluate(&password, DEFAULT_MIN_LENGTH);
//! assert!(report.is_strong());
//! assert_eq!(report.label(), StrengthLabel::VeryStrong);
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let batch = suggest(3, 12, &mut rng).unwrap();
//! assert_eq!(batch.len(), 3);
//! ```

// Internal modules
mod config;
mod error;
mod evaluator;
mod generator;
mod presenter;
mod sections;
mod types;

// Public API
pub use config::{
    Config, DEFAULT_MIN_LENGTH, DEFAULT_SUGGESTION_COUNT, DEFAULT_SUGGESTION_LENGTH,
    MIN_LENGTH_ENV, SUGGESTION_COUNT_ENV, SUGGESTION_LENGTH_ENV,
};
pub use error::PasswordError;
pub use evaluator::{evaluate, evaluate_with};
pub use generator::{ALPHABET, suggest, suggest_default, suggest_with};
pub use presenter::{Presenter, TextPresenter};
pub use types::{MAX_SCORE, Rule, StrengthLabel, StrengthReport, SuggestionBatch};

#[cfg(feature = "async")]
pub use evaluator::evaluate_tx;

#[cfg(feature = "async")]
pub use generator::suggest_tx;
