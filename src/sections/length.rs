//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::Rule;

/// Checks if the password has at least `min_length` characters.
///
/// Length is counted in Unicode scalar values, so `"é"` is one character.
/// A `min_length` of zero is satisfied by every password.
pub fn length_section(password: &SecretString, min_length: usize) -> SectionResult {
    if password.expose_secret().chars().count() < min_length {
        return Err(Rule::MinLength);
    }
    Ok(())
}
