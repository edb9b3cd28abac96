//! Character variety sections - one check per character class.
//!
//! Classes are plain ASCII: a letter outside `A-Z`/`a-z` is neither
//! uppercase nor lowercase, and counts as a special character instead.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::Rule;

/// Word characters are ASCII letters, ASCII digits and `_`.
/// Everything else, including whitespace and non-ASCII, is special.
pub(crate) fn is_special(c: char) -> bool {
    !(c.is_ascii_alphanumeric() || c == '_')
}

fn require(password: &SecretString, rule: Rule, class: fn(char) -> bool) -> SectionResult {
    if password.expose_secret().chars().any(class) {
        Ok(())
    } else {
        Err(rule)
    }
}

pub fn digit_section(password: &SecretString) -> SectionResult {
    require(password, Rule::Digit, |c| c.is_ascii_digit())
}

pub fn uppercase_section(password: &SecretString) -> SectionResult {
    require(password, Rule::Uppercase, |c| c.is_ascii_uppercase())
}

pub fn lowercase_section(password: &SecretString) -> SectionResult {
    require(password, Rule::Lowercase, |c| c.is_ascii_lowercase())
}

pub fn special_char_section(password: &SecretString) -> SectionResult {
    require(password, Rule::SpecialChar, is_special)
}
